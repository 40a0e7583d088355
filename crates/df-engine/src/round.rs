//! One full round: roll, evaluate, optionally reroll, classify.
//!
//! For the automatic bonus modes a round is a single call. The selective
//! bonus needs a player decision in the middle, so the round comes back as
//! [`RoundPhase::AwaitingReroll`]: the caller shows the initial roll, asks
//! how many dice to risk, and finishes the round with a second call. The
//! pause is plain data — nothing in the engine blocks or holds hidden
//! state between the two calls.

use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};

use crate::bonus::{self, BonusMode, RerollOutcome};
use crate::choice::ChosenSet;
use crate::config::GameConfig;
use crate::dice::{self, Roll};
use crate::error::EngineResult;
use crate::prize::{Prize, classify};

/// How the bonus ended for a round. `NoEligibleDice` (every die already
/// matched — nothing to reroll) is deliberately distinct from `Declined`
/// (the player could have rerolled and chose not to).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum BonusReport {
    /// Bonus disabled by configuration.
    Off,
    /// Bonus enabled, but the initial roll left nothing to reroll.
    NoEligibleDice,
    /// The player passed on the reroll.
    Declined,
    /// Every mismatched die was rerolled automatically.
    FullAuto {
        /// Indices that were rerolled, in index order.
        rerolled: Vec<usize>,
    },
    /// The player risked some dice.
    Selective {
        /// Per-die breakdown, in reroll order.
        rerolls: Vec<RerollOutcome>,
        /// Hits minus misses among the risked dice.
        net: i32,
    },
}

/// Everything that happened in one round, ready for display.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoundResult {
    /// The configuration the round was played under.
    pub config: GameConfig,
    /// The player's picked faces.
    pub chosen: ChosenSet,
    /// The first roll.
    pub initial_roll: Roll,
    /// Match count of the first roll.
    pub initial_matches: u8,
    /// How the bonus ended.
    pub bonus: BonusReport,
    /// The roll that was scored (same as `initial_roll` unless dice were
    /// rerolled).
    pub final_roll: Roll,
    /// The scored match count.
    pub final_matches: u8,
    /// The resulting prize tier.
    pub prize: Prize,
}

/// A round paused between the initial roll and the player's reroll
/// decision. Snapshot of the round so far; consume it with [`decline`],
/// [`reroll`], or [`resolve`] to get the [`RoundResult`].
///
/// [`decline`]: PendingReroll::decline
/// [`reroll`]: PendingReroll::reroll
/// [`resolve`]: PendingReroll::resolve
#[derive(Debug, Clone)]
pub struct PendingReroll {
    config: GameConfig,
    chosen: ChosenSet,
    roll: Roll,
    initial_matches: u8,
    eligible: Vec<usize>,
}

/// What the player decided to do with a pending reroll.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RerollDecision {
    /// Keep the initial roll.
    Decline,
    /// Risk this many of the eligible dice.
    Reroll(usize),
}

/// The state of a round after [`play`]: finished, or waiting on the
/// player's reroll decision.
#[derive(Debug, Clone)]
pub enum RoundPhase {
    /// The round ran to completion.
    Complete(RoundResult),
    /// Selective bonus: the caller must decide how many dice to risk.
    AwaitingReroll(PendingReroll),
}

impl PendingReroll {
    /// The player's picked faces.
    pub fn chosen(&self) -> &ChosenSet {
        &self.chosen
    }

    /// The initial roll being reconsidered.
    pub fn roll(&self) -> &Roll {
        &self.roll
    }

    /// Match count of the initial roll.
    pub fn initial_matches(&self) -> u8 {
        self.initial_matches
    }

    /// Positions the player may risk, in index order. Never empty — a roll
    /// with nothing to reroll completes immediately in [`play`].
    pub fn eligible(&self) -> &[usize] {
        &self.eligible
    }

    /// Upper bound for the reroll count.
    pub fn max_rerolls(&self) -> usize {
        self.eligible.len()
    }

    /// Keep the initial roll and finish the round.
    pub fn decline(self) -> RoundResult {
        let final_roll = self.roll.clone();
        finish(
            self.config,
            self.chosen,
            self.roll,
            self.initial_matches,
            BonusReport::Declined,
            final_roll,
            self.initial_matches,
        )
    }

    /// Reroll the first `k` eligible dice and finish the round.
    ///
    /// `k = 0` is a valid (if pointless) play; `k` above
    /// [`max_rerolls`](Self::max_rerolls) is an error and the pending round
    /// is lost with it.
    pub fn reroll(self, k: usize, rng: &mut StdRng) -> EngineResult<RoundResult> {
        let out = bonus::selective::apply(&self.chosen, &self.roll, self.initial_matches, k, rng)?;
        Ok(finish(
            self.config,
            self.chosen,
            self.roll,
            self.initial_matches,
            BonusReport::Selective {
                rerolls: out.rerolls,
                net: out.net,
            },
            out.roll,
            out.matches,
        ))
    }

    /// Apply a [`RerollDecision`].
    pub fn resolve(self, decision: RerollDecision, rng: &mut StdRng) -> EngineResult<RoundResult> {
        match decision {
            RerollDecision::Decline => Ok(self.decline()),
            RerollDecision::Reroll(k) => self.reroll(k, rng),
        }
    }
}

/// Play one round for one player: roll, count matches under the
/// configured rule, run the configured bonus, classify.
///
/// `chosen` must already satisfy the [`ChosenSet`] invariants for
/// `config.size`; building one through [`ChosenSet::new`] guarantees that.
pub fn play(config: GameConfig, chosen: ChosenSet, rng: &mut StdRng) -> RoundPhase {
    let roll = dice::roll(config.size, rng);
    let initial_matches = config.rule.count(&chosen, &roll);

    match config.bonus {
        BonusMode::Off => {
            let final_roll = roll.clone();
            RoundPhase::Complete(finish(
                config,
                chosen,
                roll,
                initial_matches,
                BonusReport::Off,
                final_roll,
                initial_matches,
            ))
        }
        BonusMode::FullAuto => {
            let out = bonus::full_auto::apply(&chosen, &roll, config.rule, rng);
            let report = if out.rerolled.is_empty() {
                BonusReport::NoEligibleDice
            } else {
                BonusReport::FullAuto {
                    rerolled: out.rerolled,
                }
            };
            RoundPhase::Complete(finish(
                config,
                chosen,
                roll,
                initial_matches,
                report,
                out.roll,
                out.matches,
            ))
        }
        BonusMode::Selective => {
            let eligible = bonus::eligible(&chosen, &roll);
            if eligible.is_empty() {
                let final_roll = roll.clone();
                RoundPhase::Complete(finish(
                    config,
                    chosen,
                    roll,
                    initial_matches,
                    BonusReport::NoEligibleDice,
                    final_roll,
                    initial_matches,
                ))
            } else {
                RoundPhase::AwaitingReroll(PendingReroll {
                    config,
                    chosen,
                    roll,
                    initial_matches,
                    eligible,
                })
            }
        }
    }
}

fn finish(
    config: GameConfig,
    chosen: ChosenSet,
    initial_roll: Roll,
    initial_matches: u8,
    bonus: BonusReport,
    final_roll: Roll,
    final_matches: u8,
) -> RoundResult {
    let prize = classify(config.size, final_matches);
    RoundResult {
        config,
        chosen,
        initial_roll,
        initial_matches,
        bonus,
        final_roll,
        final_matches,
        prize,
    }
}
