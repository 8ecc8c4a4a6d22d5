use super::{clamp_stake, Strategy};
use crate::rng::SimRng;
use rand::Rng;
use redline_types::{StrategyKind, RANDOM_STAKE_MAX, RANDOM_STAKE_MIN};

/// Opens with the base stake, then draws every following stake uniformly from 1..=10.
///
/// The stake stream is private to the instance and rewound by [`Strategy::reset`].
pub struct RandomStake {
    base: u64,
    stake: u64,
    origin: SimRng,
    rng: SimRng,
}

impl RandomStake {
    pub fn new(base: u64, rng: SimRng) -> Self {
        let base = clamp_stake(base);
        Self {
            base,
            stake: base,
            origin: rng.clone(),
            rng,
        }
    }
}

impl Strategy for RandomStake {
    fn kind(&self) -> StrategyKind {
        StrategyKind::RandomStake
    }

    fn reset(&mut self) {
        self.stake = self.base;
        self.rng = self.origin.clone();
    }

    fn next_stake(&mut self) -> u64 {
        self.stake
    }

    fn record_outcome(&mut self, _won: bool) {
        self.stake = self.rng.gen_range(RANDOM_STAKE_MIN..=RANDOM_STAKE_MAX);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn test_draws_cover_range() {
        let mut strategy = RandomStake::new(1, SimRng::seed_from_u64(21));
        let mut seen = [false; RANDOM_STAKE_MAX as usize + 1];
        for i in 0..2_000 {
            strategy.record_outcome(i % 2 == 0);
            let stake = strategy.next_stake();
            assert!((RANDOM_STAKE_MIN..=RANDOM_STAKE_MAX).contains(&stake));
            seen[stake as usize] = true;
        }
        assert!(seen[RANDOM_STAKE_MIN as usize..].iter().all(|hit| *hit));
    }

    #[test]
    fn test_same_stream_same_stakes() {
        let mut a = RandomStake::new(1, SimRng::seed_from_u64(4));
        let mut b = RandomStake::new(1, SimRng::seed_from_u64(4));
        for won in [true, false, false, true] {
            a.record_outcome(won);
            b.record_outcome(!won);
            assert_eq!(a.next_stake(), b.next_stake());
        }
    }

    #[test]
    fn test_reset_replays_stake_stream() {
        let mut strategy = RandomStake::new(1, SimRng::seed_from_u64(13));
        let first: Vec<u64> = (0..20)
            .map(|_| {
                strategy.record_outcome(false);
                strategy.next_stake()
            })
            .collect();
        strategy.reset();
        assert_eq!(strategy.next_stake(), 1);
        let replay: Vec<u64> = (0..20)
            .map(|_| {
                strategy.record_outcome(true);
                strategy.next_stake()
            })
            .collect();
        assert_eq!(first, replay);
    }

    #[test]
    fn test_reset_restores_base() {
        let mut strategy = RandomStake::new(7, SimRng::seed_from_u64(8));
        strategy.record_outcome(false);
        strategy.reset();
        assert_eq!(strategy.next_stake(), 7);
    }
}
