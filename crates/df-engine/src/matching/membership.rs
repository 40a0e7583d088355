//! Set-membership matching ("Orden Libre"): position is irrelevant.

use crate::choice::ChosenSet;
use crate::dice::Roll;

/// Count how many distinct chosen faces appear anywhere in the roll.
///
/// Set semantics on both sides: the chosen set is duplicate-free by
/// construction, and a face repeated in the roll still counts once. So
/// chosen `[1, 2, 3, 4]` against roll `[1, 1, 2, 3]` scores 3.
pub fn count(chosen: &ChosenSet, roll: &Roll) -> u8 {
    chosen
        .faces()
        .iter()
        .filter(|face| roll.faces.contains(face))
        .count() as u8
}
