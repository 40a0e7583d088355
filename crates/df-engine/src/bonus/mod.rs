//! The "Dado Bonus" reroll: a second chance for mismatched dice.
//!
//! Two variants exist. The console-style variant rerolls every mismatched
//! die automatically and re-counts under the active rule. The interactive
//! variant lets the player risk a chosen number of dice and scores the
//! rerolls as a net delta. In both, which dice are *eligible* is decided by
//! positional mismatch regardless of the active rule (see
//! [`crate::matching::mismatched_positions`]).

pub mod full_auto;
pub mod selective;

pub use full_auto::FullAutoBonus;
pub use selective::{RerollOutcome, SelectiveBonus};

use serde::{Deserialize, Serialize};

use crate::choice::ChosenSet;
use crate::dice::Roll;
use crate::matching;

/// Whether and how mismatched dice may be rerolled after the first roll.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BonusMode {
    /// No reroll: the first roll stands.
    Off,
    /// Every mismatched die is rerolled once, automatically.
    FullAuto,
    /// The player picks how many mismatched dice to risk.
    Selective,
}

impl BonusMode {
    /// Parse a bonus mode from the spellings the front-ends used.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().replace(['-', '_'], " ").trim() {
            "off" | "no" | "none" | "sin bonus" => Some(Self::Off),
            "dado bonus" | "bonus" | "auto" => Some(Self::FullAuto),
            "selectivo" | "selective" | "interactivo" => Some(Self::Selective),
            _ => None,
        }
    }

    /// All bonus modes, in front-end display order.
    pub fn all() -> &'static [Self] {
        &[Self::Off, Self::FullAuto, Self::Selective]
    }
}

impl std::fmt::Display for BonusMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Off => write!(f, "sin bonus"),
            Self::FullAuto => write!(f, "Dado Bonus"),
            Self::Selective => write!(f, "Dado Bonus interactivo"),
        }
    }
}

/// Positions eligible for a bonus reroll: the positional mismatches, in
/// index order. An empty result means the bonus is a no-op for this roll.
pub fn eligible(chosen: &ChosenSet, roll: &Roll) -> Vec<usize> {
    matching::mismatched_positions(chosen, roll)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameSize;

    #[test]
    fn mode_parse_variants() {
        assert_eq!(BonusMode::parse("off"), Some(BonusMode::Off));
        assert_eq!(BonusMode::parse("Sin Bonus"), Some(BonusMode::Off));
        assert_eq!(BonusMode::parse("Dado Bonus"), Some(BonusMode::FullAuto));
        assert_eq!(BonusMode::parse("auto"), Some(BonusMode::FullAuto));
        assert_eq!(BonusMode::parse("selectivo"), Some(BonusMode::Selective));
        assert_eq!(BonusMode::parse("jackpot"), None);
    }

    #[test]
    fn mode_display() {
        assert_eq!(BonusMode::Off.to_string(), "sin bonus");
        assert_eq!(BonusMode::FullAuto.to_string(), "Dado Bonus");
        assert_eq!(BonusMode::Selective.to_string(), "Dado Bonus interactivo");
    }

    #[test]
    fn eligible_is_positional_even_for_membership_play() {
        // Chosen faces all present in the roll, but both out of position:
        // membership scores 2 yet both dice stay reroll-eligible.
        let chosen = ChosenSet::new(vec![3, 5], GameSize::Two).unwrap();
        let roll = Roll { faces: vec![5, 3] };
        assert_eq!(eligible(&chosen, &roll), vec![0, 1]);
    }

    #[test]
    fn eligible_empty_on_perfect_roll() {
        let chosen = ChosenSet::new(vec![1, 2, 3, 4], GameSize::Four).unwrap();
        let roll = Roll { faces: vec![1, 2, 3, 4] };
        assert!(eligible(&chosen, &roll).is_empty());
    }
}
