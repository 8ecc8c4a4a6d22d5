//! Monte Carlo aggregation over many independent sessions.
//!
//! [`Aggregator::run`] plays N sessions under each stopping policy and reduces them into a
//! [`ReportPair`]. Each session builds a fresh strategy and wheel on its own derived
//! random streams (see [`crate::rng`]), so the two policy families never share draws and
//! the result only depends on the master seed and the request.
//!
//! With the `parallel` feature, sessions can be spread over a caller-provided rayon pool.
//! Results are collected in session order, so pooled and sequential runs are identical.

use crate::rng::{Purpose, StreamSeed};
use crate::session::SessionRunner;
use crate::strategy;
use crate::wheel::RouletteWheel;
use redline_types::{
    AggregateReport, ConfigError, ReportPair, SessionResult, SimulationRequest, StopPolicy,
    THEORETICAL_EDGE,
};
use tracing::{debug, info};

#[cfg(feature = "parallel")]
use rayon::prelude::*;
#[cfg(feature = "parallel")]
use std::sync::Arc;

/// Running sums over session results.
#[derive(Default, Clone, Debug)]
struct Stats {
    sessions: u64,
    total_balance: i64,
    total_balance_sq: f64,
    total_staked: u64,
    total_rounds: u64,
    profitable: u32,
}

impl Stats {
    fn add(&mut self, result: &SessionResult) {
        let balance = result.final_balance as f64;
        self.sessions += 1;
        self.total_balance += result.final_balance;
        self.total_balance_sq += balance * balance;
        self.total_staked += result.total_staked;
        self.total_rounds += u64::from(result.rounds_played);
        if result.is_profitable() {
            self.profitable += 1;
        }
    }

    fn mean(&self, total: f64) -> f64 {
        if self.sessions == 0 {
            0.0
        } else {
            total / self.sessions as f64
        }
    }

    fn mean_balance(&self) -> f64 {
        self.mean(self.total_balance as f64)
    }

    fn mean_staked(&self) -> f64 {
        self.mean(self.total_staked as f64)
    }

    fn mean_rounds(&self) -> f64 {
        self.mean(self.total_rounds as f64)
    }

    fn empirical_edge(&self) -> f64 {
        if self.total_staked == 0 {
            0.0
        } else {
            self.total_balance as f64 / self.total_staked as f64
        }
    }

    fn stderr(&self) -> f64 {
        if self.sessions <= 1 {
            return 0.0;
        }
        let mean = self.mean_balance();
        let var = (self.total_balance_sq / self.sessions as f64) - mean * mean;
        let var = if var < 0.0 { 0.0 } else { var };
        (var / self.sessions as f64).sqrt()
    }
}

/// Reduce the sessions of one policy into its report.
fn summarize(
    request: &SimulationRequest,
    policy: StopPolicy,
    results: Vec<SessionResult>,
) -> AggregateReport {
    let mut stats = Stats::default();
    for result in &results {
        stats.add(result);
    }
    AggregateReport {
        strategy: request.strategy,
        policy,
        rounds: request.rounds,
        sessions: request.sessions,
        base_stake: request.base_stake,
        total_balance: stats.total_balance,
        total_staked: stats.total_staked,
        mean_balance: stats.mean_balance(),
        balance_stderr: stats.stderr(),
        mean_rounds: stats.mean_rounds(),
        mean_staked: stats.mean_staked(),
        profitable_sessions: stats.profitable,
        empirical_edge: stats.empirical_edge(),
        theoretical_edge: THEORETICAL_EDGE,
        results,
    }
}

/// Runs both policy families for a request.
#[derive(Clone, Debug)]
pub struct Aggregator {
    seed: StreamSeed,
    #[cfg(feature = "parallel")]
    pool: Option<Arc<rayon::ThreadPool>>,
}

impl Aggregator {
    pub fn new(seed: u64) -> Self {
        Self {
            seed: StreamSeed::new(seed),
            #[cfg(feature = "parallel")]
            pool: None,
        }
    }

    /// Aggregator seeded from OS entropy. The chosen seed is reported in [`ReportPair::seed`].
    pub fn from_entropy() -> Self {
        Self::new(StreamSeed::from_entropy().master())
    }

    /// Spread sessions over `pool`.
    #[cfg(feature = "parallel")]
    pub fn with_pool(mut self, pool: Arc<rayon::ThreadPool>) -> Self {
        self.pool = Some(pool);
        self
    }

    pub fn seed(&self) -> u64 {
        self.seed.master()
    }

    /// Validate `request`, then play N sessions under each stopping policy.
    pub fn run(&self, request: &SimulationRequest) -> Result<ReportPair, ConfigError> {
        request.validate()?;
        info!(
            strategy = %request.strategy,
            rounds = request.rounds,
            sessions = request.sessions,
            base_stake = request.base_stake,
            seed = self.seed(),
            "starting simulation"
        );

        let stop_on_first_win = self.play_policy(request, StopPolicy::StopOnFirstWin);
        let play_all_rounds = self.play_policy(request, StopPolicy::PlayAllRounds);

        info!(
            strategy = %request.strategy,
            stop_on_first_win_edge = stop_on_first_win.empirical_edge,
            play_all_rounds_edge = play_all_rounds.empirical_edge,
            theoretical_edge = THEORETICAL_EDGE,
            "simulation complete"
        );
        Ok(ReportPair {
            seed: self.seed(),
            stop_on_first_win,
            play_all_rounds,
        })
    }

    /// Validate `request`, then play the N sessions of a single policy.
    pub fn run_policy(
        &self,
        request: &SimulationRequest,
        policy: StopPolicy,
    ) -> Result<AggregateReport, ConfigError> {
        request.validate()?;
        Ok(self.play_policy(request, policy))
    }

    fn play_policy(&self, request: &SimulationRequest, policy: StopPolicy) -> AggregateReport {
        let runner = SessionRunner::new(request.rounds, policy);
        let results = self.play_sessions(request, runner);
        let report = summarize(request, policy, results);
        debug!(
            policy = policy.label(),
            mean_balance = report.mean_balance,
            empirical_edge = report.empirical_edge,
            total_staked = report.total_staked,
            "policy complete"
        );
        report
    }

    fn play_session(
        &self,
        request: &SimulationRequest,
        runner: SessionRunner,
        session_index: u32,
    ) -> SessionResult {
        let policy = runner.policy();
        let stakes = self.seed.stream(session_index, policy, Purpose::Stakes);
        let mut strategy = strategy::build(request.strategy, request.base_stake, stakes);
        let mut wheel =
            RouletteWheel::new(self.seed.stream(session_index, policy, Purpose::Wheel));
        runner.play(session_index, strategy.as_mut(), &mut wheel)
    }

    fn play_sessions(
        &self,
        request: &SimulationRequest,
        runner: SessionRunner,
    ) -> Vec<SessionResult> {
        #[cfg(feature = "parallel")]
        if let Some(pool) = &self.pool {
            return pool.install(|| {
                (1..=request.sessions)
                    .into_par_iter()
                    .map(|index| self.play_session(request, runner, index))
                    .collect()
            });
        }

        (1..=request.sessions)
            .map(|index| self.play_session(request, runner, index))
            .collect()
    }
}

/// Run a simulation by strategy name with the default base stake and a fresh entropy seed.
pub fn simulate(strategy: &str, rounds: u32, sessions: u32) -> Result<ReportPair, ConfigError> {
    let request = SimulationRequest::parse(strategy, rounds, sessions)?;
    Aggregator::from_entropy().run(&request)
}
