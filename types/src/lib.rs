//! Common types used throughout redline.
//!
//! Holds the wager constants, the strategy catalogue, simulation requests and the
//! report structures emitted by the execution layer and consumed by front ends.

pub mod wager;

pub use wager::*;
