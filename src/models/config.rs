//! Configuration data model and validation

use crate::input::RowLayout;
use crate::stats::SummaryConfig;
use crate::types::{AppError, OutputFormat, ParseMode, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// CSV file to summarize
    #[serde(default = "default_input_path")]
    pub input_path: PathBuf,

    /// Column holding the RTT value
    #[serde(default = "default_rtt_field_index")]
    pub rtt_field_index: usize,

    /// Column holding the millisecond timestamp, if any
    #[serde(default = "default_timestamp_field_index")]
    pub timestamp_field_index: Option<usize>,

    /// RTTs strictly above this value are counted as exceedances
    #[serde(default = "default_exceed_threshold_ms")]
    pub exceed_threshold_ms: f64,

    /// Drop zero-length lines before parsing
    #[serde(default = "default_skip_blank_lines")]
    pub skip_blank_lines: bool,

    /// Strict or lenient handling of malformed rows
    #[serde(default)]
    pub parse_mode: ParseMode,

    /// Report rendering
    #[serde(default)]
    pub output_format: OutputFormat,

    /// Enable colored terminal output
    #[serde(default = "default_enable_color")]
    pub enable_color: bool,

    /// Enable verbose output
    #[serde(default)]
    pub verbose: bool,

    /// Enable debug output
    #[serde(default)]
    pub debug: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input_path: default_input_path(),
            rtt_field_index: default_rtt_field_index(),
            timestamp_field_index: default_timestamp_field_index(),
            exceed_threshold_ms: default_exceed_threshold_ms(),
            skip_blank_lines: default_skip_blank_lines(),
            parse_mode: ParseMode::default(),
            output_format: OutputFormat::default(),
            enable_color: default_enable_color(),
            verbose: false,
            debug: false,
        }
    }
}

impl Config {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Column layout of the input rows
    pub fn layout(&self) -> RowLayout {
        RowLayout::new(self.rtt_field_index, self.timestamp_field_index)
    }

    /// Settings consumed by the summarizer
    pub fn summary_config(&self) -> SummaryConfig {
        SummaryConfig {
            layout: self.layout(),
            exceed_threshold_ms: self.exceed_threshold_ms,
            skip_blank_lines: self.skip_blank_lines,
            parse_mode: self.parse_mode,
        }
    }

    /// Validate the configuration and return any errors
    pub fn validate(&self) -> Result<()> {
        if self.input_path.as_os_str().is_empty() {
            return Err(AppError::config("Input path cannot be empty"));
        }

        self.summary_config().validate()
    }

    /// Merge environment variables into this configuration
    pub fn merge_from_env(&mut self) -> Result<()> {
        if let Ok(path) = std::env::var("RTT_INPUT_PATH") {
            let path = path.trim();
            if !path.is_empty() {
                self.input_path = PathBuf::from(path);
            }
        }

        if let Ok(index) = std::env::var("RTT_FIELD_INDEX") {
            self.rtt_field_index = index.trim().parse()
                .map_err(|e| AppError::config(format!("Invalid RTT_FIELD_INDEX value '{}': {}", index, e)))?;
        }

        if let Ok(index) = std::env::var("TIMESTAMP_FIELD_INDEX") {
            self.timestamp_field_index = parse_optional_index(&index)
                .map_err(|e| AppError::config(format!("Invalid TIMESTAMP_FIELD_INDEX value '{}': {}", index, e)))?;
        }

        if let Ok(threshold) = std::env::var("EXCEED_THRESHOLD_MS") {
            self.exceed_threshold_ms = threshold.trim().parse()
                .map_err(|e| AppError::config(format!("Invalid EXCEED_THRESHOLD_MS value '{}': {}", threshold, e)))?;
        }

        if let Ok(skip) = std::env::var("SKIP_BLANK_LINES") {
            self.skip_blank_lines = skip.trim().parse()
                .map_err(|e| AppError::config(format!("Invalid SKIP_BLANK_LINES value '{}': {}", skip, e)))?;
        }

        if let Ok(mode) = std::env::var("PARSE_MODE") {
            self.parse_mode = mode.parse()
                .map_err(|e| AppError::config(format!("Invalid PARSE_MODE value: {}", e)))?;
        }

        if let Ok(format) = std::env::var("OUTPUT_FORMAT") {
            self.output_format = format.parse()
                .map_err(|e| AppError::config(format!("Invalid OUTPUT_FORMAT value: {}", e)))?;
        }

        if let Ok(enable_color) = std::env::var("ENABLE_COLOR") {
            self.enable_color = enable_color.trim().parse()
                .map_err(|e| AppError::config(format!("Invalid ENABLE_COLOR value '{}': {}", enable_color, e)))?;
        }

        Ok(())
    }
}

/// Parse an optional column index; `none` or an empty value disables the column
pub fn parse_optional_index(value: &str) -> std::result::Result<Option<usize>, std::num::ParseIntError> {
    let value = value.trim();
    if value.is_empty() || value.eq_ignore_ascii_case("none") {
        Ok(None)
    } else {
        value.parse().map(Some)
    }
}

// Default value functions for serde
fn default_input_path() -> PathBuf {
    PathBuf::from(crate::defaults::DEFAULT_INPUT_PATH)
}

fn default_rtt_field_index() -> usize {
    crate::defaults::DEFAULT_RTT_FIELD_INDEX
}

fn default_timestamp_field_index() -> Option<usize> {
    crate::defaults::DEFAULT_TIMESTAMP_FIELD_INDEX
}

fn default_exceed_threshold_ms() -> f64 {
    crate::defaults::DEFAULT_EXCEED_THRESHOLD_MS
}

fn default_skip_blank_lines() -> bool {
    crate::defaults::DEFAULT_SKIP_BLANK_LINES
}

fn default_enable_color() -> bool {
    crate::defaults::DEFAULT_ENABLE_COLOR
}
