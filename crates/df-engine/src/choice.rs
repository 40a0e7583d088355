//! The player's chosen set of faces.

use serde::{Deserialize, Serialize};

use crate::config::GameSize;
use crate::dice::SIDES;
use crate::error::{EngineError, EngineResult};

/// A player's picked faces: as many as the game size, each in 1-6, no
/// repeats. Immutable once built; a round takes it by value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChosenSet {
    faces: Vec<u8>,
}

impl ChosenSet {
    /// Build a chosen set, checking the count, range, and no-repeat rules.
    ///
    /// Rejecting bad input before a round starts is the front-end's job;
    /// this constructor is the typed check it calls.
    pub fn new(faces: Vec<u8>, size: GameSize) -> EngineResult<Self> {
        if faces.len() != size.dice() {
            return Err(EngineError::WrongCount {
                expected: size.dice(),
                got: faces.len(),
            });
        }
        for &face in &faces {
            if !(1..=SIDES).contains(&face) {
                return Err(EngineError::FaceOutOfRange(face));
            }
        }
        for (i, &face) in faces.iter().enumerate() {
            if faces[..i].contains(&face) {
                return Err(EngineError::DuplicateFace(face));
            }
        }
        Ok(Self { faces })
    }

    /// Internal constructor for faces already known to satisfy the
    /// invariants (e.g. a random distinct sample).
    pub(crate) fn from_raw(faces: Vec<u8>) -> Self {
        Self { faces }
    }

    /// The picked faces, in pick order.
    pub fn faces(&self) -> &[u8] {
        &self.faces
    }

    /// Number of picked faces.
    pub fn len(&self) -> usize {
        self.faces.len()
    }

    /// True if no faces were picked (never the case for a valid set).
    pub fn is_empty(&self) -> bool {
        self.faces.is_empty()
    }

    /// True if `face` is one of the picked faces.
    pub fn contains(&self, face: u8) -> bool {
        self.faces.contains(&face)
    }
}

impl std::fmt::Display for ChosenSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let faces: Vec<String> = self.faces.iter().map(u8::to_string).collect();
        write!(f, "[{}]", faces.join(", "))
    }
}
