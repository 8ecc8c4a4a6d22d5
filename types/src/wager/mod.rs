//! Wager domain types.
//!
//! Defines the red-wager constants, the strategy catalogue, validated simulation requests and
//! the per-policy reports used by the execution layer and clients.

mod constants;
mod report;
mod request;
mod strategy;

pub use constants::*;
pub use report::*;
pub use request::*;
pub use strategy::*;

#[cfg(test)]
mod tests;
