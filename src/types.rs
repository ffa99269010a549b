//! Type definitions and aliases

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// Re-export commonly used types
pub use crate::error::{AppError, Result};

/// How malformed rows are treated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ParseMode {
    /// The first malformed row aborts the run
    #[default]
    Strict,
    /// Malformed rows are skipped and counted
    Lenient,
}

impl ParseMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ParseMode::Strict => "strict",
            ParseMode::Lenient => "lenient",
        }
    }
}

impl fmt::Display for ParseMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ParseMode {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "strict" => Ok(ParseMode::Strict),
            "lenient" => Ok(ParseMode::Lenient),
            _ => Err(AppError::parse(format!("Invalid parse mode '{}': expected strict or lenient", s))),
        }
    }
}

/// Rendering used for the final report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One metric per line, scrape-friendly
    #[default]
    Text,
    /// Pretty-printed JSON document
    Json,
}

impl FromStr for OutputFormat {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(AppError::parse(format!("Invalid output format '{}': expected text or json", s))),
        }
    }
}

/// Known row layouts of RTT logs
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum RowShape {
    /// `timestamp,rtt`
    A,
    /// `col0,col1,rtt`, no timestamp
    B,
}

impl RowShape {
    /// Column holding the RTT value
    pub fn rtt_field_index(&self) -> usize {
        match self {
            RowShape::A => 1,
            RowShape::B => 2,
        }
    }

    /// Column holding the timestamp, if the layout has one
    pub fn timestamp_field_index(&self) -> Option<usize> {
        match self {
            RowShape::A => Some(0),
            RowShape::B => None,
        }
    }
}
