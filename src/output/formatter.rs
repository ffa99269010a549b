//! Core formatting traits and implementations
//!
//! This module defines the output formatting interface and provides
//! a plain text implementation that prints one metric per line.

use crate::{
    error::{AppError, Result},
    models::SummaryReport,
};
use std::fmt::Write as _;

/// Main trait for output formatting
pub trait OutputFormatter {
    /// Format a complete summary report
    fn format_report(&self, report: &SummaryReport) -> Result<String>;

    /// Format error messages
    fn format_error(&self, error: &str) -> Result<String>;

    /// Format warning messages
    fn format_warning(&self, warning: &str) -> Result<String>;
}

/// Configuration options for formatting
#[derive(Debug, Clone)]
pub struct FormattingOptions {
    /// Enable colored output
    pub enable_color: bool,
    /// Enable verbose mode with detailed information
    pub verbose_mode: bool,
}

impl Default for FormattingOptions {
    fn default() -> Self {
        Self {
            enable_color: true,
            verbose_mode: false,
        }
    }
}

/// One labelled line of the text report
#[derive(Debug, Clone, PartialEq)]
pub struct MetricLine {
    pub label: String,
    pub value: String,
}

impl MetricLine {
    fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

/// Label of the exceedance line, generated from the configured threshold
pub fn exceed_label(threshold_ms: f64) -> String {
    format!("Above {}ms", threshold_ms)
}

/// Build the metric lines in their fixed order: exceedance, average, count,
/// max, min, standard deviation and (with timestamps) duration.
pub fn metric_lines(report: &SummaryReport) -> Vec<MetricLine> {
    let mut lines = vec![
        MetricLine::new(
            exceed_label(report.exceed_threshold_ms),
            format!("{}, total: {}", report.exceed_count, report.count),
        ),
        MetricLine::new("Average Rtt", report.mean.to_string()),
        MetricLine::new("Total Num", report.count.to_string()),
        MetricLine::new("Max Rtt", report.max.to_string()),
        MetricLine::new("Min Rtt", report.min.to_string()),
        MetricLine::new(
            "Std Dev",
            report
                .stddev()
                .map(|s| s.to_string())
                .unwrap_or_else(|| "undefined".to_string()),
        ),
    ];

    if let Some(duration) = report.duration_minutes {
        lines.push(MetricLine::new("Duration", duration.to_string()));
    }

    lines
}

/// Extra lines printed in verbose mode
pub fn verbose_lines(report: &SummaryReport) -> Vec<MetricLine> {
    vec![
        MetricLine::new(
            "Variance",
            report
                .variance()
                .map(|v| v.to_string())
                .unwrap_or_else(|| "undefined".to_string()),
        ),
        MetricLine::new("Skipped Rows", report.skipped_count().to_string()),
    ]
}

/// Plain text formatter implementation
pub struct PlainFormatter {
    options: FormattingOptions,
}

impl PlainFormatter {
    /// Create a new plain formatter with options
    pub fn new(options: FormattingOptions) -> Self {
        Self { options }
    }
}

impl OutputFormatter for PlainFormatter {
    fn format_report(&self, report: &SummaryReport) -> Result<String> {
        let mut output = String::new();

        for line in metric_lines(report) {
            writeln!(output, "{}: {}", line.label, line.value)
                .map_err(|e| AppError::internal(format!("Failed to format report: {}", e)))?;
        }

        if self.options.verbose_mode {
            for line in verbose_lines(report) {
                writeln!(output, "{}: {}", line.label, line.value)
                    .map_err(|e| AppError::internal(format!("Failed to format report: {}", e)))?;
            }
            for row in &report.skipped_rows {
                writeln!(output, "  skipped {}", row)
                    .map_err(|e| AppError::internal(format!("Failed to format report: {}", e)))?;
            }
        }

        Ok(output)
    }

    fn format_error(&self, error: &str) -> Result<String> {
        Ok(format!("ERROR: {}", error))
    }

    fn format_warning(&self, warning: &str) -> Result<String> {
        Ok(format!("WARNING: {}", warning))
    }
}
