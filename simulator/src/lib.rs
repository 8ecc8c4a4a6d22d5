//! Command-line front end for redline simulations.
//!
//! Resolves a [`SimulatorConfig`] (YAML file plus flags), runs the aggregator on a rayon
//! pool and renders the resulting [`ReportPair`] as text, CSV or JSON.

mod config;
mod render;

pub use config::{
    FileConfig, OutputFormat, SimulatorConfig, DEFAULT_LOG_LEVEL, DEFAULT_ROUNDS,
    DEFAULT_SESSIONS,
};
pub use render::{render, render_csv, render_strategy_list, render_text};

use anyhow::{Context, Result};
use redline_execution::Aggregator;
use redline_types::ReportPair;
use std::sync::Arc;
use tracing::info;

/// Run the simulation described by `config`.
pub fn run(config: &SimulatorConfig) -> Result<ReportPair> {
    let request = config.request()?;
    let threads = config.worker_threads();
    let aggregator = match config.seed {
        Some(seed) => Aggregator::new(seed),
        None => Aggregator::from_entropy(),
    };
    let aggregator = if threads > 1 {
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .thread_name(|index| format!("redline-worker-{index}"))
            .build()
            .context("failed to create simulation pool")?;
        aggregator.with_pool(Arc::new(pool))
    } else {
        aggregator
    };
    info!(threads, seed = aggregator.seed(), "running simulation");
    Ok(aggregator.run(&request)?)
}
