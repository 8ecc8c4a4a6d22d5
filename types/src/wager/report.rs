use serde::{Deserialize, Serialize};

use super::{StopPolicy, StrategyKind};

/// Outcome of one session. Never mutated once recorded.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionResult {
    /// 1-based position of the session within its policy family.
    pub session_index: u32,
    pub rounds_played: u32,
    /// Net result, the sum of `+stake` for wins and `-stake` for losses.
    pub final_balance: i64,
    pub total_staked: u64,
}

impl SessionResult {
    pub fn is_profitable(&self) -> bool {
        self.final_balance > 0
    }
}

/// Summary of N sessions played under one stopping policy.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AggregateReport {
    pub strategy: StrategyKind,
    pub policy: StopPolicy,
    pub rounds: u32,
    pub sessions: u32,
    pub base_stake: u64,
    pub results: Vec<SessionResult>,
    pub total_balance: i64,
    pub total_staked: u64,
    pub mean_balance: f64,
    /// Standard error of `mean_balance`.
    pub balance_stderr: f64,
    pub mean_rounds: f64,
    pub mean_staked: f64,
    pub profitable_sessions: u32,
    /// `total_balance / total_staked`, or 0 when nothing was staked.
    pub empirical_edge: f64,
    pub theoretical_edge: f64,
}

impl AggregateReport {
    /// Distance between the observed and the exact edge.
    pub fn edge_deviation(&self) -> f64 {
        self.empirical_edge - self.theoretical_edge
    }
}

/// Both policy reports produced by a single calculation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ReportPair {
    /// Master seed every session stream was derived from.
    pub seed: u64,
    pub stop_on_first_win: AggregateReport,
    pub play_all_rounds: AggregateReport,
}

impl ReportPair {
    pub fn get(&self, policy: StopPolicy) -> &AggregateReport {
        match policy {
            StopPolicy::StopOnFirstWin => &self.stop_on_first_win,
            StopPolicy::PlayAllRounds => &self.play_all_rounds,
        }
    }

    pub fn strategy(&self) -> StrategyKind {
        self.stop_on_first_win.strategy
    }
}
