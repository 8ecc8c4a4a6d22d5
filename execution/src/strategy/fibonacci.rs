use super::{clamp_stake, Strategy};
use redline_types::{StrategyKind, MAX_STAKE};

/// Walks the Fibonacci sequence: one step forward after a loss, two steps back after a win.
///
/// The sequence starts as `[1, 1]` and is extended on demand by summing its last two terms.
/// Terms saturate at `u64::MAX`; the stake itself is capped at [`MAX_STAKE`].
#[derive(Clone, Debug)]
pub struct Fibonacci {
    base: u64,
    sequence: Vec<u64>,
    index: usize,
    stake: u64,
}

impl Fibonacci {
    pub fn new(base: u64) -> Self {
        let base = clamp_stake(base);
        Self {
            base,
            sequence: vec![1, 1],
            index: 0,
            stake: base,
        }
    }

    /// Current position in the sequence.
    pub fn index(&self) -> usize {
        self.index
    }

    fn extend_to(&mut self, index: usize) {
        while self.sequence.len() <= index {
            let len = self.sequence.len();
            let next = self.sequence[len - 1].saturating_add(self.sequence[len - 2]);
            self.sequence.push(next);
        }
    }

    fn stake_at(&mut self, index: usize) -> u64 {
        self.extend_to(index);
        self.sequence[index].saturating_mul(self.base).min(MAX_STAKE)
    }
}

impl Strategy for Fibonacci {
    fn kind(&self) -> StrategyKind {
        StrategyKind::Fibonacci
    }

    fn reset(&mut self) {
        self.sequence.truncate(2);
        self.index = 0;
        self.stake = self.base;
    }

    fn next_stake(&mut self) -> u64 {
        self.stake = self.stake_at(self.index);
        self.stake
    }

    fn record_outcome(&mut self, won: bool) {
        self.index = if won {
            self.index.saturating_sub(2)
        } else {
            self.index + 1
        };
        self.stake = self.stake_at(self.index);
    }
}
