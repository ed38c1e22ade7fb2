//! Synthetic electric-vehicle charger load data for a single day.

pub mod cli;
pub mod config;
pub mod error;
/// Sampling, expansion, clock normalization, and power draws.
pub mod generator;
pub mod io;
