//! Match evaluators: how strongly a chosen set agrees with a roll.
//!
//! Two rules exist:
//! - **Positional** ("Original"): a chosen face counts only when it comes up
//!   at its own position.
//! - **SetMembership** ("Orden Libre"): a chosen face counts when it comes
//!   up anywhere in the roll.
//!
//! Both are pure total functions returning a count in `0..=size`.

pub mod membership;
pub mod positional;

use serde::{Deserialize, Serialize};

use crate::choice::ChosenSet;
use crate::dice::Roll;

/// How matches between a chosen set and a roll are counted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MatchRule {
    /// Equal face at equal index ("Original").
    Positional,
    /// Chosen face appears anywhere in the roll ("Orden Libre").
    SetMembership,
}

impl MatchRule {
    /// Parse a rule from the spellings the historical front-ends used.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().replace(['-', '_'], " ").trim() {
            "original" | "posicional" | "positional" => Some(Self::Positional),
            "orden libre" | "order free" | "libre" | "membership" => Some(Self::SetMembership),
            _ => None,
        }
    }

    /// Both rules, in front-end display order.
    pub fn all() -> &'static [Self] {
        &[Self::Positional, Self::SetMembership]
    }

    /// Count matches between `chosen` and `roll` under this rule.
    pub fn count(self, chosen: &ChosenSet, roll: &Roll) -> u8 {
        match self {
            Self::Positional => positional::count(chosen, roll),
            Self::SetMembership => membership::count(chosen, roll),
        }
    }
}

impl std::fmt::Display for MatchRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Positional => write!(f, "Original"),
            Self::SetMembership => write!(f, "Orden Libre"),
        }
    }
}

/// Indices where the roll disagrees with the chosen set position-wise, in
/// index order.
///
/// This drives both bonus variants. The comparison is positional even when
/// the active rule is [`MatchRule::SetMembership`] — a simplification the
/// original game shipped with, kept here as documented behavior.
pub fn mismatched_positions(chosen: &ChosenSet, roll: &Roll) -> Vec<usize> {
    chosen
        .faces()
        .iter()
        .zip(&roll.faces)
        .enumerate()
        .filter(|(_, (c, r))| c != r)
        .map(|(i, _)| i)
        .collect()
}
