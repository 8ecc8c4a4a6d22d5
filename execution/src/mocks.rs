//! Deterministic test doubles for wheels and strategies.

use crate::strategy::Strategy;
use crate::wheel::Wheel;
use redline_types::StrategyKind;

/// Wheel that replays a fixed outcome script, cycling when it runs out.
#[derive(Clone, Debug)]
pub struct ScriptedWheel {
    outcomes: Vec<bool>,
    spins: usize,
}

impl ScriptedWheel {
    pub fn new(outcomes: Vec<bool>) -> Self {
        assert!(!outcomes.is_empty(), "script must contain at least one outcome");
        Self { outcomes, spins: 0 }
    }

    pub fn always(won: bool) -> Self {
        Self::new(vec![won])
    }

    /// `losses` losing spins followed by a win.
    pub fn losses_then_win(losses: usize) -> Self {
        let mut outcomes = vec![false; losses];
        outcomes.push(true);
        Self::new(outcomes)
    }

    /// Number of spins served so far.
    pub fn spins(&self) -> usize {
        self.spins
    }
}

impl Wheel for ScriptedWheel {
    fn spin(&mut self) -> bool {
        let won = self.outcomes[self.spins % self.outcomes.len()];
        self.spins += 1;
        won
    }
}

/// Wheel wrapper that keeps every outcome it served.
pub struct RecordingWheel<W> {
    inner: W,
    history: Vec<bool>,
}

impl<W: Wheel> RecordingWheel<W> {
    pub fn new(inner: W) -> Self {
        Self {
            inner,
            history: Vec::new(),
        }
    }

    pub fn history(&self) -> &[bool] {
        &self.history
    }
}

impl<W: Wheel> Wheel for RecordingWheel<W> {
    fn spin(&mut self) -> bool {
        let won = self.inner.spin();
        self.history.push(won);
        won
    }
}

/// Strategy wrapper that keeps the stakes placed since the last reset.
pub struct Recording<S> {
    inner: S,
    stakes: Vec<u64>,
}

impl<S: Strategy> Recording<S> {
    pub fn new(inner: S) -> Self {
        Self {
            inner,
            stakes: Vec::new(),
        }
    }

    pub fn stakes(&self) -> &[u64] {
        &self.stakes
    }
}

impl<S: Strategy> Strategy for Recording<S> {
    fn kind(&self) -> StrategyKind {
        self.inner.kind()
    }

    fn reset(&mut self) {
        self.stakes.clear();
        self.inner.reset();
    }

    fn next_stake(&mut self) -> u64 {
        let stake = self.inner.next_stake();
        self.stakes.push(stake);
        stake
    }

    fn record_outcome(&mut self, won: bool) {
        self.inner.record_outcome(won);
    }
}
