//! RTT Summarizer
//!
//! Reads newline-delimited CSV logs of round-trip-time measurements and
//! folds them into summary statistics: count, mean, min, max, sample
//! standard deviation, a threshold-exceedance count and, when timestamps
//! are present, the covered duration.

pub mod app;
pub mod cli;
pub mod config;
pub mod error;
pub mod input;
pub mod logging;
pub mod models;
pub mod output;
pub mod stats;
pub mod types;

// Re-export commonly used types
pub use error::{AppError, Result};
pub use input::{RowError, RowLayout};
pub use models::{Config, Spread, SummaryReport};
pub use stats::{Accumulator, Summarizer, SummaryConfig};
pub use output::{OutputFormatter, ColoredFormatter, PlainFormatter, JsonFormatter, OutputFormatterFactory};

/// Application version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const PKG_NAME: &str = env!("CARGO_PKG_NAME");
pub const PKG_DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");

/// Default configuration values
pub mod defaults {
    pub const DEFAULT_INPUT_PATH: &str = "rtt_times.csv";
    pub const DEFAULT_RTT_FIELD_INDEX: usize = 1;
    pub const DEFAULT_TIMESTAMP_FIELD_INDEX: Option<usize> = Some(0);
    pub const DEFAULT_EXCEED_THRESHOLD_MS: f64 = 5000.0;
    pub const DEFAULT_SKIP_BLANK_LINES: bool = true;
    pub const DEFAULT_ENABLE_COLOR: bool = true;
}
