//! Dice rolling — the only source of randomness in the engine.
//!
//! Every function takes `&mut StdRng` so the caller owns seeding. With a
//! fixed seed a whole round is reproducible, which is also how the tests
//! pin down outcomes.

use rand::Rng;
use rand::rngs::StdRng;
use rand::seq::index;
use serde::{Deserialize, Serialize};

use crate::choice::ChosenSet;
use crate::config::GameSize;

/// Faces on every die in the game.
pub const SIDES: u8 = 6;

/// The dice outcome of a round. Same length as the chosen set; repeats
/// allowed. Rerolls produce a fresh `Roll` rather than mutating this one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Roll {
    /// Rolled faces, one per die, in position order.
    pub faces: Vec<u8>,
}

impl Roll {
    /// Number of dice rolled.
    pub fn len(&self) -> usize {
        self.faces.len()
    }

    /// True if no dice were rolled.
    pub fn is_empty(&self) -> bool {
        self.faces.is_empty()
    }
}

impl std::fmt::Display for Roll {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let faces: Vec<String> = self.faces.iter().map(u8::to_string).collect();
        write!(f, "[{}]", faces.join(", "))
    }
}

/// Roll the dice for a round: independent uniform faces in 1-6.
pub fn roll(size: GameSize, rng: &mut StdRng) -> Roll {
    let faces = (0..size.dice()).map(|_| reroll_one(rng)).collect();
    Roll { faces }
}

/// Draw a single uniform face. Used for every bonus reroll.
pub fn reroll_one(rng: &mut StdRng) -> u8 {
    rng.random_range(1..=SIDES)
}

/// Pick a uniformly random valid chosen set: `size` distinct faces.
///
/// This is the "pick my numbers for me" helper every front-end offers.
pub fn random_choice(size: GameSize, rng: &mut StdRng) -> ChosenSet {
    let faces = index::sample(rng, usize::from(SIDES), size.dice())
        .iter()
        .map(|i| i as u8 + 1)
        .collect();
    ChosenSet::from_raw(faces)
}
