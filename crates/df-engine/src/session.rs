//! A seeded play session: one configuration, many sequential rounds.
//!
//! Front-ends keep a list of players and call [`Session::play`] once per
//! player per round. The engine never sees that list — rounds are fully
//! independent and only share the configuration and the RNG stream, so the
//! session is just those two things.

use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::choice::ChosenSet;
use crate::config::GameConfig;
use crate::dice;
use crate::error::EngineResult;
use crate::prize::Prize;
use crate::probability;
use crate::round::{self, PendingReroll, RerollDecision, RoundPhase, RoundResult};

/// Session-level knobs. Only the RNG seed for now.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// RNG seed for reproducible rounds.
    pub seed: u64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self { seed: 42 }
    }
}

impl SessionConfig {
    /// Set the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }
}

/// A running session: a game configuration plus the dice stream.
#[derive(Debug)]
pub struct Session {
    config: GameConfig,
    rng: StdRng,
}

impl Session {
    /// Start a session.
    pub fn new(config: GameConfig, session: SessionConfig) -> Self {
        Self {
            config,
            rng: StdRng::seed_from_u64(session.seed),
        }
    }

    /// The game configuration shared by every round.
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Play one player's round.
    pub fn play(&mut self, chosen: ChosenSet) -> RoundPhase {
        round::play(self.config, chosen, &mut self.rng)
    }

    /// Finish a paused round with the player's decision.
    pub fn finish(
        &mut self,
        pending: PendingReroll,
        decision: RerollDecision,
    ) -> EngineResult<RoundResult> {
        pending.resolve(decision, &mut self.rng)
    }

    /// Pick a random valid chosen set for the session's game size — the
    /// "choose my numbers" button.
    pub fn random_choice(&mut self) -> ChosenSet {
        dice::random_choice(self.config.size, &mut self.rng)
    }

    /// The theoretical distribution for this session's configuration, if
    /// one was derived.
    pub fn reference_table(&self) -> Option<&'static [(Prize, f64)]> {
        probability::for_config(&self.config)
    }
}
