//! Colored formatter implementation with terminal color support
//!
//! Prints the same metric lines as the plain formatter, with colored
//! labels and the exceedance count colored by its share of rows.

use crate::{
    error::{AppError, Result},
    models::SummaryReport,
};
use super::formatter::{metric_lines, verbose_lines, FormattingOptions, OutputFormatter};
use std::fmt::Write as _;
use colored::*;

/// Classification of the exceedance share for color coding
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ExceedLevel {
    None,      // no row above the threshold
    Low,       // < 5% of rows
    High,      // >= 5% of rows
}

impl ExceedLevel {
    /// Determine the level from the percentage of rows above the threshold
    pub fn from_percentage(percentage: f64) -> Self {
        if percentage <= 0.0 {
            Self::None
        } else if percentage < 5.0 {
            Self::Low
        } else {
            Self::High
        }
    }

    /// Get color for this level
    pub fn color(&self) -> Color {
        match self {
            Self::None => Color::Green,
            Self::Low => Color::Yellow,
            Self::High => Color::Red,
        }
    }
}

/// Color scheme configuration
#[derive(Debug, Clone)]
pub struct ColorScheme {
    pub label: Color,
    pub value: Color,
    pub warning: Color,
    pub error: Color,
    pub muted: Color,
}

impl Default for ColorScheme {
    fn default() -> Self {
        Self {
            label: Color::Cyan,
            value: Color::White,
            warning: Color::Yellow,
            error: Color::Red,
            muted: Color::BrightBlack,
        }
    }
}

/// Colored formatter implementation
pub struct ColoredFormatter {
    options: FormattingOptions,
    color_scheme: ColorScheme,
}

impl ColoredFormatter {
    /// Create a new colored formatter with options
    pub fn new(options: FormattingOptions) -> Self {
        Self {
            options,
            color_scheme: ColorScheme::default(),
        }
    }

    /// Apply color to text if colors are enabled
    fn colorize(&self, text: &str, color: Color) -> ColoredString {
        if self.options.enable_color {
            text.color(color)
        } else {
            text.normal()
        }
    }

    /// Bold and colored, if colors are enabled
    fn emphasize(&self, text: &str, color: Color) -> ColoredString {
        if self.options.enable_color {
            text.bold().color(color)
        } else {
            text.normal()
        }
    }

    fn write_line(&self, output: &mut String, label: &str, value: ColoredString) -> Result<()> {
        writeln!(output, "{}: {}", self.colorize(label, self.color_scheme.label), value)
            .map_err(|e| AppError::internal(format!("Failed to format report: {}", e)))
    }
}

impl OutputFormatter for ColoredFormatter {
    fn format_report(&self, report: &SummaryReport) -> Result<String> {
        let mut output = String::new();
        let level = ExceedLevel::from_percentage(report.exceed_percentage());

        for (index, line) in metric_lines(report).into_iter().enumerate() {
            // The exceedance summary always comes first
            let value = if index == 0 {
                self.emphasize(&line.value, level.color())
            } else if line.value == "undefined" {
                self.colorize(&line.value, self.color_scheme.warning)
            } else {
                self.colorize(&line.value, self.color_scheme.value)
            };
            self.write_line(&mut output, &line.label, value)?;
        }

        if self.options.verbose_mode {
            for line in verbose_lines(report) {
                let value = self.colorize(&line.value, self.color_scheme.muted);
                self.write_line(&mut output, &line.label, value)?;
            }
            for row in &report.skipped_rows {
                writeln!(output, "  {}", self.colorize(&format!("skipped {}", row), self.color_scheme.warning))
                    .map_err(|e| AppError::internal(format!("Failed to format report: {}", e)))?;
            }
        }

        Ok(output)
    }

    fn format_error(&self, error: &str) -> Result<String> {
        Ok(format!("{} {}", self.emphasize("ERROR:", self.color_scheme.error), self.colorize(error, self.color_scheme.error)))
    }

    fn format_warning(&self, warning: &str) -> Result<String> {
        Ok(format!("{} {}", self.emphasize("WARNING:", self.color_scheme.warning), self.colorize(warning, self.color_scheme.warning)))
    }
}
