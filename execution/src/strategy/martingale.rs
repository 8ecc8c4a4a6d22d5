use super::{clamp_stake, Strategy};
use redline_types::{StrategyKind, MAX_STAKE};

/// Double after a loss, back to base after a win.
#[derive(Clone, Debug)]
pub struct Martingale {
    base: u64,
    stake: u64,
}

impl Martingale {
    pub fn new(base: u64) -> Self {
        let base = clamp_stake(base);
        Self { base, stake: base }
    }
}

impl Strategy for Martingale {
    fn kind(&self) -> StrategyKind {
        StrategyKind::Martingale
    }

    fn reset(&mut self) {
        self.stake = self.base;
    }

    fn next_stake(&mut self) -> u64 {
        self.stake
    }

    fn record_outcome(&mut self, won: bool) {
        self.stake = if won {
            self.base
        } else {
            self.stake.saturating_mul(2).min(MAX_STAKE)
        };
    }
}
