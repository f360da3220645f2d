//! Injectable environment for the engine.
//!
//! The only external input a skirmish needs is randomness for placement.
mod rng;

pub use rng::{PcgRng, RngOracle, compute_seed};
