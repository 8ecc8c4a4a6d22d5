use anyhow::{Context, Result};
use redline_types::{ConfigError, SimulationRequest, StrategyKind, DEFAULT_BASE_STAKE};
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_ROUNDS: u32 = 10;
pub const DEFAULT_SESSIONS: u32 = 1_000;
pub const DEFAULT_LOG_LEVEL: &str = "info";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    Text,
    Json,
    Csv,
}

impl std::str::FromStr for OutputFormat {
    type Err = &'static str;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.to_ascii_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            "csv" => Ok(Self::Csv),
            _ => Err("valid values: text, json, csv"),
        }
    }
}

/// Optional settings read from a YAML file. Command-line flags take precedence.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    pub strategy: Option<String>,
    pub rounds: Option<u32>,
    pub sessions: Option<u32>,
    pub base_stake: Option<u64>,
    pub seed: Option<u64>,
    pub workers: Option<usize>,
    pub format: Option<OutputFormat>,
    pub log_level: Option<String>,
}

impl FileConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("could not read config file {}", path.display()))?;
        Self::parse(&raw).with_context(|| format!("could not parse config file {}", path.display()))
    }

    pub fn parse(raw: &str) -> Result<Self> {
        if raw.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(raw)?)
    }
}

/// Fully resolved settings for one invocation.
#[derive(Clone, Debug, Serialize)]
pub struct SimulatorConfig {
    pub strategy: StrategyKind,
    pub rounds: u32,
    pub sessions: u32,
    pub base_stake: u64,
    /// Master seed; a fresh one is drawn from OS entropy when unset.
    pub seed: Option<u64>,
    /// Worker threads for session execution (None or 0 uses logical cores).
    pub workers: Option<usize>,
    pub format: OutputFormat,
    pub log_level: String,
}

impl SimulatorConfig {
    pub fn new(strategy: StrategyKind) -> Self {
        Self {
            strategy,
            rounds: DEFAULT_ROUNDS,
            sessions: DEFAULT_SESSIONS,
            base_stake: DEFAULT_BASE_STAKE,
            seed: None,
            workers: None,
            format: OutputFormat::Text,
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }

    pub fn request(&self) -> Result<SimulationRequest, ConfigError> {
        SimulationRequest::new(self.strategy, self.rounds, self.sessions, self.base_stake)
    }

    pub fn worker_threads(&self) -> usize {
        let fallback = std::thread::available_parallelism()
            .map(|count| count.get())
            .unwrap_or(1);
        match self.workers {
            Some(0) | None => fallback,
            Some(value) => value,
        }
        .max(1)
    }
}
