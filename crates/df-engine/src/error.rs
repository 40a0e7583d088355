//! Error types for the lottery engine.

use thiserror::Error;

/// Result type for engine operations.
pub type EngineResult<T> = Result<T, EngineError>;

/// Errors that can occur at the engine boundary.
///
/// The evaluators, classifier, and orchestrator are total over validated
/// inputs; errors only arise when raw configuration or player input is
/// turned into engine types, and when a selective reroll asks for more dice
/// than are eligible.
#[derive(Debug, Error)]
pub enum EngineError {
    /// The dice count is not one of the supported game sizes.
    #[error("invalid dice count: {0} (expected 2 or 4)")]
    InvalidSize(u8),

    /// A match rule name was not recognized.
    #[error("unknown match rule: {0}")]
    UnknownRule(String),

    /// A bonus mode name was not recognized.
    #[error("unknown bonus mode: {0}")]
    UnknownBonus(String),

    /// A chosen set has the wrong number of faces for the game size.
    #[error("wrong number of chosen faces: expected {expected}, got {got}")]
    WrongCount {
        /// Faces required by the game size.
        expected: usize,
        /// Faces actually supplied.
        got: usize,
    },

    /// A chosen face is outside 1-6.
    #[error("face out of range: {0} (faces run 1-6)")]
    FaceOutOfRange(u8),

    /// The same face appears twice in a chosen set.
    #[error("duplicate face: {0}")]
    DuplicateFace(u8),

    /// A selective reroll asked for more dice than are eligible.
    #[error("cannot reroll {requested} dice: only {eligible} eligible")]
    TooManyRerolls {
        /// Rerolls requested by the player.
        requested: usize,
        /// Mismatched positions available for rerolling.
        eligible: usize,
    },
}
