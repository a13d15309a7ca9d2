//! Wohnwert: a Rust CLI demo for apartment price estimation
//!
//! This library provides a hand-coded linear price model over room count,
//! floor area and town, plus a single-feature sensitivity sweep that drives
//! the influence charts.

pub mod cli;
pub mod model;
pub mod sweep;
pub mod viz;

// Re-export public items for easier access
pub use cli::Args;
pub use model::{estimate_price, known_towns, location_factor};
pub use sweep::{sweep_prices, SweepFeature, SweepResult};
pub use viz::create_influence_chart;

/// Common result type used throughout the application
pub type Result<T> = anyhow::Result<T>;
