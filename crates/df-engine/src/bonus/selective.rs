//! Selective bonus: the player decides how many dice to risk.
//!
//! Unlike the automatic variant, rerolls here are scored as a net delta on
//! the initial count: a reroll that lands on its chosen face gains a point,
//! one that misses again loses a point. Risking more dice can therefore end
//! worse than standing pat — this is the one real decision in the game.

use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};

use crate::choice::ChosenSet;
use crate::dice::{self, Roll};
use crate::error::{EngineError, EngineResult};

/// What happened to one rerolled die.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RerollOutcome {
    /// Position of the rerolled die.
    pub index: usize,
    /// The face it landed on.
    pub value: u8,
    /// Whether it landed on the chosen face for that position.
    pub hit: bool,
}

/// Outcome of a selective bonus pass.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SelectiveBonus {
    /// The roll after rerolling the risked dice.
    pub roll: Roll,
    /// Final match count: initial + net, clamped to `0..=size`.
    pub matches: u8,
    /// Per-die breakdown, in reroll order.
    pub rerolls: Vec<RerollOutcome>,
    /// Hits minus misses among the rerolled dice.
    pub net: i32,
}

/// Reroll the first `k` eligible (positionally mismatched) dice.
///
/// `k = 0` is a valid play and leaves the initial count standing; `k`
/// beyond the eligible count is an error. The final count is
/// `initial_matches + hits − misses`, clamped so it never leaves
/// `0..=size`.
pub fn apply(
    chosen: &ChosenSet,
    roll: &Roll,
    initial_matches: u8,
    k: usize,
    rng: &mut StdRng,
) -> EngineResult<SelectiveBonus> {
    let eligible = super::eligible(chosen, roll);
    if k > eligible.len() {
        return Err(EngineError::TooManyRerolls {
            requested: k,
            eligible: eligible.len(),
        });
    }

    let mut faces = roll.faces.clone();
    let mut rerolls = Vec::with_capacity(k);
    for &index in &eligible[..k] {
        let value = dice::reroll_one(rng);
        faces[index] = value;
        rerolls.push(RerollOutcome {
            index,
            value,
            hit: chosen.faces()[index] == value,
        });
    }

    let hits = rerolls.iter().filter(|r| r.hit).count() as i32;
    let net = hits - (rerolls.len() as i32 - hits);
    let size = chosen.len() as i32;
    let matches = (i32::from(initial_matches) + net).clamp(0, size) as u8;

    Ok(SelectiveBonus {
        roll: Roll { faces },
        matches,
        rerolls,
        net,
    })
}
