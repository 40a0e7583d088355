//! Game configuration: size, match rule, and bonus mode.
//!
//! The three historical front-ends each kept their own string spellings for
//! the same options ("original" vs "Original", "order_free" vs "Orden
//! Libre"). The enums here are the single canonical form; `parse` accepts
//! the known spellings and anything else is a configuration error — the
//! engine never falls back to a default.

use serde::{Deserialize, Serialize};

use crate::bonus::BonusMode;
use crate::error::{EngineError, EngineResult};
use crate::matching::MatchRule;

/// How many dice are in play. The game is defined for 2 and 4 only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameSize {
    /// Two-dice game.
    Two,
    /// Four-dice game.
    Four,
}

impl GameSize {
    /// Create a game size from a raw dice count.
    pub fn new(dice: u8) -> EngineResult<Self> {
        match dice {
            2 => Ok(Self::Two),
            4 => Ok(Self::Four),
            other => Err(EngineError::InvalidSize(other)),
        }
    }

    /// Number of dice rolled per round.
    pub fn dice(self) -> usize {
        match self {
            Self::Two => 2,
            Self::Four => 4,
        }
    }

    /// Both supported sizes.
    pub fn all() -> &'static [Self] {
        &[Self::Two, Self::Four]
    }
}

impl std::fmt::Display for GameSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} dados", self.dice())
    }
}

/// Full configuration for a round: size, match rule, and bonus mode.
///
/// Built by the presentation layer from whatever its widgets hold, then
/// passed unchanged into [`crate::round::play`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Number of dice in play.
    pub size: GameSize,
    /// How matches are counted.
    pub rule: MatchRule,
    /// Whether and how mismatched dice may be rerolled.
    pub bonus: BonusMode,
}

impl GameConfig {
    /// Create a configuration from already-typed parts.
    pub fn new(size: GameSize, rule: MatchRule, bonus: BonusMode) -> Self {
        Self { size, rule, bonus }
    }

    /// Parse a configuration from the raw values a front-end collects.
    ///
    /// Every unrecognized value is rejected with the matching error; no
    /// silent defaults.
    pub fn parse(dice: u8, rule: &str, bonus: &str) -> EngineResult<Self> {
        let size = GameSize::new(dice)?;
        let rule = MatchRule::parse(rule).ok_or_else(|| EngineError::UnknownRule(rule.to_string()))?;
        let bonus =
            BonusMode::parse(bonus).ok_or_else(|| EngineError::UnknownBonus(bonus.to_string()))?;
        Ok(Self { size, rule, bonus })
    }
}

impl std::fmt::Display for GameConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} | {} | {}", self.size, self.rule, self.bonus)
    }
}
