use super::{clamp_stake, Strategy};
use redline_types::{StrategyKind, MAX_STAKE};

/// One unit up after a loss, one unit down after a win, never below base.
#[derive(Clone, Debug)]
pub struct DAlembert {
    base: u64,
    stake: u64,
}

impl DAlembert {
    pub fn new(base: u64) -> Self {
        let base = clamp_stake(base);
        Self { base, stake: base }
    }
}

impl Strategy for DAlembert {
    fn kind(&self) -> StrategyKind {
        StrategyKind::DAlembert
    }

    fn reset(&mut self) {
        self.stake = self.base;
    }

    fn next_stake(&mut self) -> u64 {
        self.stake
    }

    fn record_outcome(&mut self, won: bool) {
        self.stake = if won {
            self.stake.saturating_sub(1).max(self.base)
        } else {
            (self.stake + 1).min(MAX_STAKE)
        };
    }
}
