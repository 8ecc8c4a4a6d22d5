use super::{clamp_stake, Strategy};
use redline_types::StrategyKind;

/// Same stake on every spin.
#[derive(Clone, Debug)]
pub struct Flat {
    base: u64,
}

impl Flat {
    pub fn new(base: u64) -> Self {
        Self {
            base: clamp_stake(base),
        }
    }
}

impl Strategy for Flat {
    fn kind(&self) -> StrategyKind {
        StrategyKind::Flat
    }

    fn reset(&mut self) {}

    fn next_stake(&mut self) -> u64 {
        self.base
    }

    fn record_outcome(&mut self, _won: bool) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stake_never_changes() {
        let mut flat = Flat::new(5);
        for won in [false, false, true, false, true, true] {
            assert_eq!(flat.next_stake(), 5);
            flat.record_outcome(won);
        }
        assert_eq!(flat.next_stake(), 5);
    }
}
