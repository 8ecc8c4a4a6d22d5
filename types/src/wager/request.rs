use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error as ThisError;

use super::{StrategyKind, DEFAULT_BASE_STAKE, MAX_STAKE, MIN_STAKE};

/// Rejected simulation input. Raised before any session runs.
#[derive(Debug, ThisError, PartialEq, Eq)]
pub enum ConfigError {
    #[error("rounds per session must be positive")]
    ZeroRounds,
    #[error("number of sessions must be positive")]
    ZeroSessions,
    #[error("unknown strategy: {0:?} (valid: flat, martingale, fibonacci, dalembert, random)")]
    UnknownStrategy(String),
    #[error("base stake out of range (got={got}, min={min}, max={max})")]
    BaseStakeOutOfRange { got: u64, min: u64, max: u64 },
}

/// When a session ends early.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StopPolicy {
    /// Leave the table after the first winning spin.
    StopOnFirstWin,
    /// Play every round regardless of outcome.
    PlayAllRounds,
}

impl StopPolicy {
    pub const ALL: [StopPolicy; 2] = [StopPolicy::StopOnFirstWin, StopPolicy::PlayAllRounds];

    pub fn stops_on_win(self) -> bool {
        matches!(self, Self::StopOnFirstWin)
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::StopOnFirstWin => "stop_on_first_win",
            Self::PlayAllRounds => "play_all_rounds",
        }
    }
}

impl fmt::Display for StopPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::StopOnFirstWin => "Stop on first win",
            Self::PlayAllRounds => "Play all rounds",
        })
    }
}

/// A validated simulation request.
///
/// Construct with [`SimulationRequest::new`] or [`SimulationRequest::parse`]; both reject
/// zero counts and out-of-range base stakes so a request that exists is always runnable.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationRequest {
    pub strategy: StrategyKind,
    /// Maximum spins per session (R).
    pub rounds: u32,
    /// Sessions per stopping policy (N).
    pub sessions: u32,
    pub base_stake: u64,
}

impl SimulationRequest {
    pub fn new(
        strategy: StrategyKind,
        rounds: u32,
        sessions: u32,
        base_stake: u64,
    ) -> Result<Self, ConfigError> {
        let request = Self {
            strategy,
            rounds,
            sessions,
            base_stake,
        };
        request.validate()?;
        Ok(request)
    }

    /// Build a request from a strategy name with the default base stake.
    pub fn parse(strategy: &str, rounds: u32, sessions: u32) -> Result<Self, ConfigError> {
        Self::new(strategy.parse()?, rounds, sessions, DEFAULT_BASE_STAKE)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.rounds == 0 {
            return Err(ConfigError::ZeroRounds);
        }
        if self.sessions == 0 {
            return Err(ConfigError::ZeroSessions);
        }
        if !(MIN_STAKE..=MAX_STAKE).contains(&self.base_stake) {
            return Err(ConfigError::BaseStakeOutOfRange {
                got: self.base_stake,
                min: MIN_STAKE,
                max: MAX_STAKE,
            });
        }
        Ok(())
    }
}
