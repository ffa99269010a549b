//! Command-line interface

use crate::types::{OutputFormat, RowShape};
use clap::Parser;
use std::path::PathBuf;

const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (commit ", env!("GIT_COMMIT"),
    ", built ", env!("BUILD_TIME"), ")"
);

/// RTT Summarizer - summary statistics for round-trip-time logs
#[derive(Parser, Debug, Clone)]
#[command(name = "rtts")]
#[command(version, long_version = LONG_VERSION, about, long_about = None)]
pub struct Cli {
    /// CSV file with RTT measurements [default: rtt_times.csv]
    #[arg(value_name = "PATH")]
    pub path: Option<PathBuf>,

    /// Row layout preset: a = timestamp,rtt; b = col0,col1,rtt
    #[arg(long, value_enum)]
    pub shape: Option<RowShape>,

    /// Column holding the RTT value (overrides --shape)
    #[arg(long, value_name = "INDEX")]
    pub rtt_field: Option<usize>,

    /// Column holding the millisecond timestamp (overrides --shape)
    #[arg(long, value_name = "INDEX")]
    pub timestamp_field: Option<usize>,

    /// Input has no timestamp column; duration is not reported
    #[arg(long)]
    pub no_timestamp: bool,

    /// Count RTTs strictly above this many milliseconds
    #[arg(short, long, value_name = "MS", value_parser = parse_threshold)]
    pub threshold: Option<f64>,

    /// Treat blank lines as rows instead of dropping them
    #[arg(long)]
    pub keep_blank_lines: bool,

    /// Abort on the first malformed row (default)
    #[arg(long)]
    pub strict: bool,

    /// Skip malformed rows and report how many were skipped
    #[arg(long)]
    pub lenient: bool,

    /// Output format
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Force colored output
    #[arg(long)]
    pub color: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Enable verbose output
    #[arg(long)]
    pub verbose: bool,

    /// Enable debug output
    #[arg(long)]
    pub debug: bool,

    /// Print an example .env file and exit
    #[arg(long)]
    pub print_env_example: bool,
}

impl Cli {
    /// Validate CLI arguments for conflicts and requirements
    pub fn validate(&self) -> Result<(), String> {
        if self.color && self.no_color {
            return Err("Cannot specify both --color and --no-color".to_string());
        }

        if self.strict && self.lenient {
            return Err("Cannot specify both --strict and --lenient".to_string());
        }

        if self.no_timestamp && self.timestamp_field.is_some() {
            return Err("Cannot specify both --timestamp-field and --no-timestamp".to_string());
        }

        Ok(())
    }

    /// Check if colors should be enabled, given the configured default
    pub fn use_colors(&self, configured: bool) -> bool {
        if self.color {
            true  // Force color output when --color is specified
        } else if self.no_color {
            false // Disable color output when --no-color is specified
        } else {
            configured && supports_color()
        }
    }

    /// Get configuration summary for display
    pub fn get_config_summary(&self) -> String {
        let mut summary = String::new();

        summary.push_str("Command Line:\n");
        if let Some(ref path) = self.path {
            summary.push_str(&format!("  Input: {}\n", path.display()));
        }
        if let Some(shape) = self.shape {
            summary.push_str(&format!("  Shape: {:?}\n", shape));
        }
        if let Some(index) = self.rtt_field {
            summary.push_str(&format!("  RTT field: {}\n", index));
        }
        if let Some(index) = self.timestamp_field {
            summary.push_str(&format!("  Timestamp field: {}\n", index));
        }
        if self.no_timestamp {
            summary.push_str("  Timestamp field: none\n");
        }
        if let Some(threshold) = self.threshold {
            summary.push_str(&format!("  Threshold: {}ms\n", threshold));
        }
        summary.push_str(&format!("  Verbose mode: {}\n", self.verbose));
        summary.push_str(&format!("  Debug mode: {}\n", self.debug));

        summary
    }
}

/// Parse an exceedance threshold in milliseconds
fn parse_threshold(s: &str) -> Result<f64, String> {
    let value: f64 = s
        .trim()
        .parse()
        .map_err(|_| format!("Invalid threshold: {}", s))?;

    if !value.is_finite() {
        Err(format!("Threshold must be a finite number: {}", s))
    } else if value < 0.0 {
        Err(format!("Threshold cannot be negative: {}", s))
    } else {
        Ok(value)
    }
}

/// Check if the terminal supports color output
fn supports_color() -> bool {
    if let Ok(term) = std::env::var("TERM") {
        if term == "dumb" {
            return false;
        }
    }

    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }

    if std::env::var("FORCE_COLOR").is_ok() {
        return true;
    }

    #[cfg(target_os = "windows")]
    {
        if std::env::var("ANSICON").is_ok() || std::env::var("ConEmuANSI").is_ok() {
            return true;
        }
    }

    // Default to true on Unix-like systems, false on Windows
    #[cfg(unix)]
    {
        true
    }
    #[cfg(not(unix))]
    {
        false
    }
}
