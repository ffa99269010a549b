//! Summary statistics over RTT logs
//!
//! [`Summarizer`] ties the pipeline together: text is split into lines,
//! each line is parsed with the configured [`RowLayout`], and valid rows are
//! folded into an [`Accumulator`]. Malformed rows either abort the run
//! ([`ParseMode::Strict`]) or are recorded and skipped ([`ParseMode::Lenient`]).

pub mod accumulator;

pub use accumulator::{Accumulator, MS_PER_MINUTE};

use crate::{
    error::{AppError, Result},
    input::{self, RowError, RowLayout},
    models::report::SummaryReport,
    types::ParseMode,
};
use std::path::Path;

/// Configuration for one summarization
#[derive(Debug, Clone, PartialEq)]
pub struct SummaryConfig {
    /// Which columns hold the RTT and timestamp
    pub layout: RowLayout,
    /// RTTs strictly above this value count as exceedances
    pub exceed_threshold_ms: f64,
    /// Drop zero-length lines before parsing
    pub skip_blank_lines: bool,
    /// What to do with malformed rows
    pub parse_mode: ParseMode,
}

impl Default for SummaryConfig {
    fn default() -> Self {
        Self {
            layout: RowLayout::new(
                crate::defaults::DEFAULT_RTT_FIELD_INDEX,
                crate::defaults::DEFAULT_TIMESTAMP_FIELD_INDEX,
            ),
            exceed_threshold_ms: crate::defaults::DEFAULT_EXCEED_THRESHOLD_MS,
            skip_blank_lines: crate::defaults::DEFAULT_SKIP_BLANK_LINES,
            parse_mode: ParseMode::Strict,
        }
    }
}

impl SummaryConfig {
    pub fn validate(&self) -> Result<()> {
        if self.layout.timestamp_field_index == Some(self.layout.rtt_field_index) {
            return Err(AppError::config(format!(
                "RTT and timestamp cannot share field {}",
                self.layout.rtt_field_index
            )));
        }

        if !self.exceed_threshold_ms.is_finite() {
            return Err(AppError::config("Exceed threshold must be a finite number"));
        }

        if self.exceed_threshold_ms < 0.0 {
            return Err(AppError::config(format!(
                "Exceed threshold cannot be negative: {}",
                self.exceed_threshold_ms
            )));
        }

        Ok(())
    }
}

/// Computes a [`SummaryReport`] from RTT log text
pub struct Summarizer {
    config: SummaryConfig,
}

impl Summarizer {
    /// Create a summarizer, validating the configuration
    pub fn new(config: SummaryConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Create a summarizer with default configuration
    pub fn with_defaults() -> Self {
        Self {
            config: SummaryConfig::default(),
        }
    }

    pub fn config(&self) -> &SummaryConfig {
        &self.config
    }

    /// Summarize already-loaded text
    pub fn summarize_str(&self, text: &str) -> Result<SummaryReport> {
        let mut accumulator = Accumulator::new(self.config.exceed_threshold_ms);
        let mut skipped: Vec<RowError> = Vec::new();

        for line in input::tokenize(text, self.config.skip_blank_lines) {
            match input::parse_row(line.number, line.content, &self.config.layout) {
                Ok(row) => accumulator.push(&row),
                Err(error) => match self.config.parse_mode {
                    ParseMode::Strict => return Err(error.into()),
                    ParseMode::Lenient => skipped.push(error),
                },
            }
        }

        accumulator.finish(skipped)
    }

    /// Load a file and summarize it
    pub fn summarize_file(&self, path: &Path) -> Result<SummaryReport> {
        let text = input::load_text(path)?;
        self.summarize_str(&text)
    }
}

// Property-based and edge case tests live in a separate module
#[cfg(test)]
mod comprehensive_tests;
