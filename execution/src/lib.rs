//! Redline execution layer.
//!
//! This crate contains the betting progressions, the session runner and the Monte Carlo
//! aggregator that estimates the expected return of each progression on the red wager.
//!
//! ## Determinism requirements
//! - All randomness comes from streams derived from one master seed ([`rng::StreamSeed`]).
//! - Strategy state is private to one session and reset before it starts.
//! - Session results are collected in session order, with or without the `parallel` feature.
//!
//! The primary entrypoint is [`Aggregator`].
//!
//! ## Example
//! ```rust
//! use redline_execution::Aggregator;
//! use redline_types::{SimulationRequest, THEORETICAL_EDGE};
//!
//! let request = SimulationRequest::parse("martingale", 10, 100).unwrap();
//! let pair = Aggregator::new(7).run(&request).unwrap();
//! assert_eq!(pair.stop_on_first_win.results.len(), 100);
//! assert_eq!(pair.play_all_rounds.theoretical_edge, THEORETICAL_EDGE);
//! ```

pub mod aggregator;
pub mod rng;
pub mod session;
pub mod strategy;
pub mod wheel;

#[cfg(any(test, feature = "mocks"))]
pub mod mocks;

pub use aggregator::{simulate, Aggregator};
pub use rng::{Purpose, SimRng, StreamSeed};
pub use session::SessionRunner;
pub use strategy::Strategy;
pub use wheel::{RouletteWheel, Wheel};
