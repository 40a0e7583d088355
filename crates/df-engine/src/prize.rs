//! Prize tiers and the match-count classifier.

use serde::{Deserialize, Serialize};

use crate::config::GameSize;

/// The discrete prize tiers, three for the two-dice game and four for the
/// four-dice game. `Display` yields the exact labels the game has always
/// printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Prize {
    /// Two-dice game: both dice matched.
    TwoDiceFirst,
    /// Two-dice game: one die matched.
    TwoDiceSecond,
    /// Two-dice game: nothing matched.
    TwoDiceLoser,
    /// Four-dice game: all four matched.
    FourDiceGrand,
    /// Four-dice game: three matched.
    FourDiceSecond,
    /// Four-dice game: two matched.
    FourDiceThird,
    /// Four-dice game: zero or one matched.
    FourDiceLoser,
}

impl Prize {
    /// True for every tier that pays out.
    pub fn is_winning(self) -> bool {
        !matches!(self, Self::TwoDiceLoser | Self::FourDiceLoser)
    }
}

impl std::fmt::Display for Prize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::TwoDiceFirst => write!(f, "Primer premio (mayor)"),
            Self::TwoDiceSecond => write!(f, "Segundo premio"),
            Self::TwoDiceLoser => write!(f, "Perdedor"),
            Self::FourDiceGrand => write!(f, "Premio mayor (4 aciertos)"),
            Self::FourDiceSecond => write!(f, "Segundo premio (3 aciertos)"),
            Self::FourDiceThird => write!(f, "Tercer premio (2 aciertos)"),
            Self::FourDiceLoser => write!(f, "Perdedor (0-1 aciertos)"),
        }
    }
}

/// Map a final match count to its prize tier.
///
/// Exhaustive over `0..=size.dice()`; counts beyond the size cannot be
/// produced by the evaluators and are folded into the top tier's arm only
/// by the `>=` comparisons, never by a fallback branch.
pub fn classify(size: GameSize, matches: u8) -> Prize {
    match size {
        GameSize::Two => match matches {
            2.. => Prize::TwoDiceFirst,
            1 => Prize::TwoDiceSecond,
            0 => Prize::TwoDiceLoser,
        },
        GameSize::Four => match matches {
            4.. => Prize::FourDiceGrand,
            3 => Prize::FourDiceSecond,
            2 => Prize::FourDiceThird,
            0 | 1 => Prize::FourDiceLoser,
        },
    }
}
