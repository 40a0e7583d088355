//! Positional matching ("Original"): equal face at equal index.

use crate::choice::ChosenSet;
use crate::dice::Roll;

/// Count positions where the roll shows exactly the chosen face.
///
/// Order-sensitive: a chosen face appearing at the wrong position does not
/// count.
pub fn count(chosen: &ChosenSet, roll: &Roll) -> u8 {
    chosen
        .faces()
        .iter()
        .zip(&roll.faces)
        .filter(|(c, r)| c == r)
        .count() as u8
}
