//! Automatic bonus: every mismatched die is rerolled once.

use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};

use crate::choice::ChosenSet;
use crate::dice::{self, Roll};
use crate::matching::MatchRule;

/// Outcome of the automatic bonus pass.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FullAutoBonus {
    /// The roll after rerolling, matching positions carried over untouched.
    pub roll: Roll,
    /// Match count of the new roll under the round's rule.
    pub matches: u8,
    /// Indices that were rerolled, in index order.
    pub rerolled: Vec<usize>,
}

/// Reroll every positionally mismatched die exactly once.
///
/// Dice that already match keep their face, so they can never be lost to
/// the bonus. The new count uses the same `rule` as the initial roll —
/// including under [`MatchRule::SetMembership`], where eligibility is still
/// positional (documented carry-over from the original game).
pub fn apply(chosen: &ChosenSet, roll: &Roll, rule: MatchRule, rng: &mut StdRng) -> FullAutoBonus {
    let rerolled = super::eligible(chosen, roll);
    let mut faces = roll.faces.clone();
    for &i in &rerolled {
        faces[i] = dice::reroll_one(rng);
    }
    let roll = Roll { faces };
    let matches = rule.count(chosen, &roll);
    FullAutoBonus {
        roll,
        matches,
        rerolled,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameSize;
    use crate::matching::positional;
    use rand::SeedableRng;

    fn set(faces: &[u8]) -> ChosenSet {
        let size = GameSize::new(faces.len() as u8).unwrap();
        ChosenSet::new(faces.to_vec(), size).unwrap()
    }

    #[test]
    fn matching_positions_are_never_touched() {
        let chosen = set(&[1, 2, 3, 4]);
        let roll = Roll { faces: vec![1, 6, 3, 6] };
        let mut rng = StdRng::seed_from_u64(5);
        for _ in 0..100 {
            let out = apply(&chosen, &roll, MatchRule::Positional, &mut rng);
            assert_eq!(out.rerolled, vec![1, 3]);
            assert_eq!(out.roll.faces[0], 1);
            assert_eq!(out.roll.faces[2], 3);
        }
    }

    #[test]
    fn never_decreases_positional_count() {
        let mut rng = StdRng::seed_from_u64(11);
        let chosen = set(&[2, 4, 5, 6]);
        for _ in 0..200 {
            let roll = dice::roll(GameSize::Four, &mut rng);
            let before = positional::count(&chosen, &roll);
            let out = apply(&chosen, &roll, MatchRule::Positional, &mut rng);
            assert!(out.matches >= before, "bonus lost matches: {before} -> {}", out.matches);
        }
    }

    #[test]
    fn perfect_roll_is_a_no_op() {
        let chosen = set(&[3, 5]);
        let roll = Roll { faces: vec![3, 5] };
        let mut rng = StdRng::seed_from_u64(1);
        let out = apply(&chosen, &roll, MatchRule::Positional, &mut rng);
        assert!(out.rerolled.is_empty());
        assert_eq!(out.roll, roll);
        assert_eq!(out.matches, 2);
    }

    #[test]
    fn recounts_under_membership_rule() {
        // Eligibility is positional, but the recount honors the round's rule.
        let chosen = set(&[3, 5]);
        let roll = Roll { faces: vec![5, 3] };
        let mut rng = StdRng::seed_from_u64(3);
        let out = apply(&chosen, &roll, MatchRule::SetMembership, &mut rng);
        assert_eq!(out.rerolled, vec![0, 1]);
        assert_eq!(out.matches, MatchRule::SetMembership.count(&chosen, &out.roll));
    }

    #[test]
    fn deterministic_with_seed() {
        let chosen = set(&[1, 2]);
        let roll = Roll { faces: vec![6, 6] };
        let mut rng1 = StdRng::seed_from_u64(77);
        let mut rng2 = StdRng::seed_from_u64(77);
        let a = apply(&chosen, &roll, MatchRule::Positional, &mut rng1);
        let b = apply(&chosen, &roll, MatchRule::Positional, &mut rng2);
        assert_eq!(a.roll, b.roll);
        assert_eq!(a.matches, b.matches);
    }
}
