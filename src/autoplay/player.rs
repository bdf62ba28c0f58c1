//! Turn loop driving a session with a policy.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::session::{GameSession, SessionPhase};

use super::policy::PlayPolicy;

/// Summary of an automated playthrough.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayOutcome {
    pub won: bool,
    pub elapsed_seconds: u64,
    /// Pairs of cards turned.
    pub turns: u32,
    pub mismatches: u32,
}

/// Plays a session to completion (or a turn limit) using a policy.
#[derive(Clone, Debug)]
pub struct Autoplayer<P: PlayPolicy> {
    policy: P,
    max_turns: u32,
}

impl<P: PlayPolicy> Autoplayer<P> {
    /// Default turn limit; generous enough for a random policy on 10 pairs.
    pub const DEFAULT_MAX_TURNS: u32 = 10_000;

    #[must_use]
    pub fn new(policy: P) -> Self {
        Self {
            policy,
            max_turns: Self::DEFAULT_MAX_TURNS,
        }
    }

    #[must_use]
    pub fn with_max_turns(mut self, max_turns: u32) -> Self {
        self.max_turns = max_turns;
        self
    }

    #[must_use]
    pub fn policy(&self) -> &P {
        &self.policy
    }

    /// Play until the session is won, the policy gives up, or the turn
    /// limit is reached.
    ///
    /// A `Ready` session is started first. Each turn selects two cards and
    /// advances the clock through match evaluation and, on a mismatch,
    /// the flip-back delay.
    pub fn play(&mut self, session: &mut GameSession) -> PlayOutcome {
        self.policy.forget();
        if session.phase() == SessionPhase::Ready {
            session.start();
        }

        let match_delay = session.config().timing.match_delay();
        let flip_back_delay = session.config().timing.flip_back_delay();
        let mut turns = 0;
        let mut mismatches = 0;

        while session.is_active() && turns < self.max_turns {
            while !session.selection().is_full() {
                let Some(index) = self.policy.choose(session) else {
                    break;
                };
                session.select_card(index);
                self.policy.observe(session);
            }
            if !session.selection().is_full() {
                debug!(policy = self.policy.name(), "policy gave up");
                break;
            }

            turns += 1;
            session.advance(match_delay);
            self.policy.observe(session);

            if let Some((first, second)) = session.revealed() {
                mismatches += 1;
                debug!(turn = turns, first, second, "autoplay mismatch");
                session.advance(flip_back_delay);
            }
        }

        let outcome = PlayOutcome {
            won: session.is_won(),
            elapsed_seconds: session.elapsed_seconds(),
            turns,
            mismatches,
        };
        info!(
            policy = self.policy.name(),
            won = outcome.won,
            turns = outcome.turns,
            mismatches = outcome.mismatches,
            elapsed_seconds = outcome.elapsed_seconds,
            "autoplay finished"
        );
        outcome
    }
}
