//! Data models and structures for the RTT summarizer

pub mod config;
pub mod report;

// Re-export main model types
pub use config::Config;
pub use report::{Spread, SummaryReport};
