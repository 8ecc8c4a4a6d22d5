use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ConfigError;

/// Betting progressions available to a simulation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StrategyKind {
    Flat,
    Martingale,
    Fibonacci,
    DAlembert,
    RandomStake,
}

impl StrategyKind {
    /// Every strategy, in display order.
    pub const ALL: [StrategyKind; 5] = [
        StrategyKind::Flat,
        StrategyKind::Martingale,
        StrategyKind::Fibonacci,
        StrategyKind::DAlembert,
        StrategyKind::RandomStake,
    ];

    /// Display name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Flat => "Flat",
            Self::Martingale => "Martingale",
            Self::Fibonacci => "Fibonacci",
            Self::DAlembert => "D'Alembert",
            Self::RandomStake => "Random-stake",
        }
    }

    /// Human readable explanation of the progression, for display only.
    pub fn description(self) -> &'static str {
        match self {
            Self::Flat => "Flat betting: the same base stake is placed on every spin.",
            Self::Martingale => {
                "Martingale: the stake doubles after every loss and returns to the base unit after a win."
            }
            Self::Fibonacci => {
                "Fibonacci: the stake follows the Fibonacci sequence, one step forward after a loss and two steps back after a win."
            }
            Self::DAlembert => {
                "D'Alembert: the stake grows by one unit after a loss and shrinks by one unit after a win, never below the base."
            }
            Self::RandomStake => {
                "Random stake: after every spin the next stake is drawn uniformly between 1 and 10."
            }
        }
    }
}

/// Look up the description of a strategy by name.
pub fn strategy_description(name: &str) -> Result<&'static str, ConfigError> {
    name.parse::<StrategyKind>().map(StrategyKind::description)
}

impl fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for StrategyKind {
    type Err = ConfigError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let normalized: String = value
            .trim()
            .chars()
            .filter(|c| !matches!(c, '\'' | '’' | '-' | '_' | ' '))
            .flat_map(char::to_lowercase)
            .collect();
        match normalized.as_str() {
            "flat" | "fixed" | "constant" => Ok(Self::Flat),
            "martingale" => Ok(Self::Martingale),
            "fibonacci" => Ok(Self::Fibonacci),
            "dalembert" => Ok(Self::DAlembert),
            "random" | "randomstake" => Ok(Self::RandomStake),
            _ => Err(ConfigError::UnknownStrategy(value.to_string())),
        }
    }
}
