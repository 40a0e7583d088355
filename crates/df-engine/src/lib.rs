//! Rules engine for the dice lottery "Los Dados de la Fortuna".
//!
//! A player picks a set of distinct faces, the bank rolls the same number of
//! dice, and the degree of agreement between pick and roll decides a prize
//! tier. The engine covers the two match rules (positional and
//! set-membership), the optional reroll bonus in its automatic and
//! player-selective forms, prize classification, and the theoretical
//! probability tables used to sanity-check the whole thing. Presentation is
//! somebody else's job: callers hand in a validated [`ChosenSet`] plus a
//! [`GameConfig`] and render the [`RoundResult`] they get back.

pub mod bonus;
pub mod choice;
pub mod config;
pub mod dice;
pub mod error;
pub mod matching;
pub mod prize;
pub mod probability;
pub mod round;
pub mod session;

pub use bonus::{BonusMode, FullAutoBonus, RerollOutcome, SelectiveBonus};
pub use choice::ChosenSet;
pub use config::{GameConfig, GameSize};
pub use dice::Roll;
pub use error::{EngineError, EngineResult};
pub use matching::MatchRule;
pub use prize::{Prize, classify};
pub use round::{BonusReport, PendingReroll, RerollDecision, RoundPhase, RoundResult};
pub use session::{Session, SessionConfig};
