//! Output formatting and display system
//!
//! This module renders a `SummaryReport` as plain text, colored text
//! or JSON. Text output prints one metric per line in a fixed order.

mod formatter;
mod colored;
mod json;

pub use formatter::{
    OutputFormatter,
    PlainFormatter,
    FormattingOptions,
    MetricLine,
    exceed_label,
    metric_lines,
};
pub use colored::{
    ColoredFormatter,
    ColorScheme,
    ExceedLevel,
};
pub use json::JsonFormatter;

use crate::types::OutputFormat;

/// Output formatting factory for creating appropriate formatters
pub struct OutputFormatterFactory;

impl OutputFormatterFactory {
    /// Create a formatter based on output format, color support and preferences
    pub fn create_formatter(format: OutputFormat, enable_color: bool, verbose: bool) -> Box<dyn OutputFormatter> {
        let options = FormattingOptions {
            enable_color,
            verbose_mode: verbose,
        };

        match format {
            OutputFormat::Json => Box::new(JsonFormatter::new(verbose)),
            OutputFormat::Text if enable_color => Box::new(ColoredFormatter::new(options)),
            OutputFormat::Text => Box::new(PlainFormatter::new(options)),
        }
    }

    /// Create a plain text formatter for scripts/logs
    pub fn create_plain_formatter() -> Box<dyn OutputFormatter> {
        Self::create_formatter(OutputFormat::Text, false, false)
    }
}
