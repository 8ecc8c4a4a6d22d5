//! Betting progressions.
//!
//! Every progression implements [`Strategy`]:
//! - `next_stake` returns the stake for the upcoming spin, always within `[MIN_STAKE, MAX_STAKE]`
//! - `record_outcome` is called exactly once per spin, after the stake was placed
//! - `reset` restores the state of a freshly built instance
//!
//! Progressions are built per session through [`build`] so no state leaks between sessions.

mod dalembert;
mod fibonacci;
mod flat;
mod martingale;
mod random_stake;

pub use dalembert::DAlembert;
pub use fibonacci::Fibonacci;
pub use flat::Flat;
pub use martingale::Martingale;
pub use random_stake::RandomStake;

use crate::rng::SimRng;
use redline_types::{StrategyKind, MAX_STAKE, MIN_STAKE};

/// A stake progression for the red wager.
pub trait Strategy {
    fn kind(&self) -> StrategyKind;

    /// Restore the starting condition.
    fn reset(&mut self);

    /// Stake for the upcoming spin.
    fn next_stake(&mut self) -> u64;

    /// Update state once the spin resolved.
    fn record_outcome(&mut self, won: bool);
}

impl<S: Strategy + ?Sized> Strategy for Box<S> {
    fn kind(&self) -> StrategyKind {
        (**self).kind()
    }

    fn reset(&mut self) {
        (**self).reset()
    }

    fn next_stake(&mut self) -> u64 {
        (**self).next_stake()
    }

    fn record_outcome(&mut self, won: bool) {
        (**self).record_outcome(won)
    }
}

/// Build a fresh progression.
///
/// `stakes` is only consumed by [`RandomStake`]; the other progressions are deterministic.
pub fn build(kind: StrategyKind, base: u64, stakes: SimRng) -> Box<dyn Strategy> {
    match kind {
        StrategyKind::Flat => Box::new(Flat::new(base)),
        StrategyKind::Martingale => Box::new(Martingale::new(base)),
        StrategyKind::Fibonacci => Box::new(Fibonacci::new(base)),
        StrategyKind::DAlembert => Box::new(DAlembert::new(base)),
        StrategyKind::RandomStake => Box::new(RandomStake::new(base, stakes)),
    }
}

/// Clamp a stake into the permitted range.
pub(crate) fn clamp_stake(stake: u64) -> u64 {
    stake.clamp(MIN_STAKE, MAX_STAKE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::{any, prop_assert, proptest};
    use rand::SeedableRng;

    fn built(kind: StrategyKind, base: u64) -> Box<dyn Strategy> {
        build(kind, base, SimRng::seed_from_u64(9))
    }

    #[test]
    fn test_build_matches_kind() {
        for kind in StrategyKind::ALL {
            assert_eq!(built(kind, 1).kind(), kind);
        }
    }

    #[test]
    fn test_first_stake_is_base() {
        for kind in StrategyKind::ALL {
            assert_eq!(built(kind, 3).next_stake(), 3, "{kind}");
        }
    }

    #[test]
    fn test_base_is_clamped() {
        for kind in StrategyKind::ALL {
            assert_eq!(built(kind, 0).next_stake(), MIN_STAKE, "{kind}");
            assert_eq!(built(kind, MAX_STAKE * 2).next_stake(), MAX_STAKE, "{kind}");
        }
    }

    #[test]
    fn test_reset_matches_fresh_instance() {
        let outcomes = [false, false, true, false, false, false, true, true, false];
        for kind in StrategyKind::ALL {
            let mut played = built(kind, 2);
            for won in outcomes {
                played.next_stake();
                played.record_outcome(won);
            }
            played.reset();
            let mut fresh = built(kind, 2);
            assert_eq!(played.next_stake(), fresh.next_stake(), "{kind}");
            for won in outcomes {
                played.record_outcome(won);
                fresh.record_outcome(won);
                assert_eq!(played.next_stake(), fresh.next_stake(), "{kind}");
            }
        }
    }

    proptest! {
        #[test]
        fn prop_stakes_stay_in_range(
            base in MIN_STAKE..=MAX_STAKE,
            seed in any::<u64>(),
            outcomes in proptest::collection::vec(any::<bool>(), 0..400),
        ) {
            for kind in StrategyKind::ALL {
                let mut strategy = build(kind, base, SimRng::seed_from_u64(seed));
                for won in &outcomes {
                    let stake = strategy.next_stake();
                    prop_assert!((MIN_STAKE..=MAX_STAKE).contains(&stake));
                    strategy.record_outcome(*won);
                }
                let stake = strategy.next_stake();
                prop_assert!((MIN_STAKE..=MAX_STAKE).contains(&stake));
            }
        }
    }
}
