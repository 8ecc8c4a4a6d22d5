//! Single-session runner.

use crate::strategy::Strategy;
use crate::wheel::Wheel;
use redline_types::{SessionResult, StopPolicy};
use tracing::trace;

/// Plays one progression for up to `rounds` spins under a stopping policy.
///
/// Both policies share this code path; they differ only in the termination check after a
/// winning spin.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SessionRunner {
    rounds: u32,
    policy: StopPolicy,
}

impl SessionRunner {
    /// `rounds` must be positive; requests are validated before a runner is built.
    pub fn new(rounds: u32, policy: StopPolicy) -> Self {
        debug_assert!(rounds > 0, "rounds must be validated before running");
        Self { rounds, policy }
    }

    pub fn rounds(&self) -> u32 {
        self.rounds
    }

    pub fn policy(&self) -> StopPolicy {
        self.policy
    }

    /// Reset `strategy` and play one session against `wheel`.
    pub fn play<S, W>(&self, session_index: u32, strategy: &mut S, wheel: &mut W) -> SessionResult
    where
        S: Strategy + ?Sized,
        W: Wheel + ?Sized,
    {
        strategy.reset();
        let mut balance: i64 = 0;
        let mut total_staked: u64 = 0;
        let mut rounds_played = 0;

        for round in 1..=self.rounds {
            rounds_played = round;
            let stake = strategy.next_stake();
            total_staked += stake;
            let won = wheel.spin();
            // Stakes never exceed MAX_STAKE, so the conversion is lossless.
            let signed = stake as i64;
            balance += if won { signed } else { -signed };
            strategy.record_outcome(won);
            if won && self.policy.stops_on_win() {
                break;
            }
        }

        trace!(
            session_index,
            policy = self.policy.label(),
            rounds_played,
            balance,
            total_staked,
            "session complete"
        );
        SessionResult {
            session_index,
            rounds_played,
            final_balance: balance,
            total_staked,
        }
    }
}
