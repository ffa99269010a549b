//! Parsing of a single CSV row into a measurement

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Which comma-separated columns hold the measurement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RowLayout {
    pub rtt_field_index: usize,
    pub timestamp_field_index: Option<usize>,
}

impl RowLayout {
    pub fn new(rtt_field_index: usize, timestamp_field_index: Option<usize>) -> Self {
        Self {
            rtt_field_index,
            timestamp_field_index,
        }
    }

    /// Minimum number of fields a row must have
    pub fn required_fields(&self) -> usize {
        let rtt = self.rtt_field_index + 1;
        match self.timestamp_field_index {
            Some(ts) => rtt.max(ts + 1),
            None => rtt,
        }
    }
}

/// One measurement extracted from a row
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParsedRow {
    /// 1-based line number in the input
    pub line: usize,
    /// Timestamp in milliseconds, when the layout has one
    pub timestamp: Option<i64>,
    /// Round-trip time in milliseconds
    pub rtt: f64,
}

/// A row that could not be turned into a measurement
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[error("line {line}: {reason} (row: {content:?})")]
pub struct RowError {
    pub line: usize,
    pub content: String,
    pub reason: String,
}

impl RowError {
    pub fn new<C: Into<String>, R: Into<String>>(line: usize, content: C, reason: R) -> Self {
        Self {
            line,
            content: content.into(),
            reason: reason.into(),
        }
    }
}

fn field_at<'a>(
    fields: &[&'a str],
    index: usize,
    name: &str,
    line: usize,
    content: &str,
) -> Result<&'a str, RowError> {
    fields.get(index).copied().ok_or_else(|| {
        RowError::new(
            line,
            content,
            format!("{} field {} missing (row has {} field(s))", name, index, fields.len()),
        )
    })
}

/// Parse one line according to `layout`
pub fn parse_row(line: usize, content: &str, layout: &RowLayout) -> Result<ParsedRow, RowError> {
    if content.is_empty() {
        return Err(RowError::new(line, content, "line is empty"));
    }

    let fields: Vec<&str> = content.split(',').map(str::trim).collect();

    let raw_rtt = field_at(&fields, layout.rtt_field_index, "RTT", line, content)?;
    let rtt: f64 = raw_rtt.parse().map_err(|_| {
        RowError::new(
            line,
            content,
            format!("RTT field {} is not a number: '{}'", layout.rtt_field_index, raw_rtt),
        )
    })?;
    if !rtt.is_finite() {
        return Err(RowError::new(
            line,
            content,
            format!("RTT field {} is not finite: '{}'", layout.rtt_field_index, raw_rtt),
        ));
    }

    let timestamp = match layout.timestamp_field_index {
        Some(index) => {
            let raw_ts = field_at(&fields, index, "timestamp", line, content)?;
            let ts: i64 = raw_ts.parse().map_err(|_| {
                RowError::new(
                    line,
                    content,
                    format!("timestamp field {} is not an integer: '{}'", index, raw_ts),
                )
            })?;
            Some(ts)
        }
        None => None,
    };

    Ok(ParsedRow { line, timestamp, rtt })
}
