//! Error handling for the RTT summarizer

use crate::input::RowError;
use thiserror::Error;

/// Custom error types for the RTT summarizer
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(String),

    /// I/O errors (missing or unreadable input)
    #[error("I/O error: {0}")]
    Io(String),

    /// Parsing errors for scalar values (environment, flags)
    #[error("Parsing error: {0}")]
    Parse(String),

    /// A CSV row whose fields could not be parsed
    #[error("Parsing error: {0}")]
    RowParse(#[from] RowError),

    /// No valid rows were left to summarize
    #[error("Empty input: {0}")]
    EmptyInput(String),

    /// Sample variance undefined for one row, or beyond the f64 range
    #[error("Degenerate sample: {0}")]
    DegenerateSample(String),

    /// Generic internal errors
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Create a new configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config(message.into())
    }

    /// Create a new validation error
    pub fn validation<S: Into<String>>(message: S) -> Self {
        Self::Validation(message.into())
    }

    /// Create a new I/O error
    pub fn io<S: Into<String>>(message: S) -> Self {
        Self::Io(message.into())
    }

    /// Create a new parsing error
    pub fn parse<S: Into<String>>(message: S) -> Self {
        Self::Parse(message.into())
    }

    /// Create a new empty input error
    pub fn empty_input<S: Into<String>>(message: S) -> Self {
        Self::EmptyInput(message.into())
    }

    /// Create a new degenerate sample error
    pub fn degenerate_sample<S: Into<String>>(message: S) -> Self {
        Self::DegenerateSample(message.into())
    }

    /// Create a new internal error
    pub fn internal<S: Into<String>>(message: S) -> Self {
        Self::Internal(message.into())
    }

    /// Get error category for logging and reporting
    pub fn category(&self) -> &'static str {
        match self {
            Self::Config(_) => "CONFIG",
            Self::Validation(_) => "VALIDATION",
            Self::Io(_) => "IO",
            Self::Parse(_) | Self::RowParse(_) => "PARSE",
            Self::EmptyInput(_) => "EMPTY",
            Self::DegenerateSample(_) => "STATS",
            Self::Internal(_) => "INTERNAL",
        }
    }

    /// Get user-friendly error message with suggestions
    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::Config(msg) => {
                format!("Configuration problem: {}\n\nSuggestion: Check your .env file, environment variables or command line arguments.", msg)
            }
            Self::Validation(msg) => {
                format!("Invalid input: {}\n\nSuggestion: Check the field indices and threshold you passed.", msg)
            }
            Self::Io(msg) => {
                format!("File operation failed: {}\n\nSuggestion: Check that the file exists and is readable, or pass a path explicitly.", msg)
            }
            Self::Parse(msg) => {
                format!("Failed to parse value: {}\n\nSuggestion: Check the format of your configuration values.", msg)
            }
            Self::RowParse(row) => {
                format!("Failed to parse row: {}\n\nSuggestion: Check the row shape (--shape, --rtt-field) or rerun with --lenient to skip malformed rows.", row)
            }
            Self::EmptyInput(msg) => {
                format!("Nothing to summarize: {}\n\nSuggestion: Make sure the file contains at least one measurement row.", msg)
            }
            Self::DegenerateSample(msg) => {
                format!("Statistics unavailable: {}\n\nSuggestion: A standard deviation needs at least two measurements whose spread fits in an f64.", msg)
            }
            Self::Internal(msg) => {
                format!("Internal error: {}\n\nThis is likely a bug. Please report this issue with the error details.", msg)
            }
        }
    }

    /// Get exit code for this error type
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Config(_) | Self::Validation(_) | Self::Parse(_) | Self::RowParse(_) => 1,  // Invalid configuration/input
            Self::Io(_) => 5,  // I/O issues
            Self::EmptyInput(_) | Self::DegenerateSample(_) => 6,  // Nothing to compute
            Self::Internal(_) => 99,  // Internal/unexpected errors
        }
    }

    /// Format error for console display with color coding
    pub fn format_for_console(&self, use_color: bool) -> String {
        let category = self.category();
        let message = self.to_string();

        if use_color {
            use colored::Colorize;
            match self {
                Self::Config(_) | Self::Validation(_) | Self::Parse(_) | Self::RowParse(_) => {
                    format!("[{}] {}", category.red().bold(), message.red())
                }
                Self::Io(_) | Self::EmptyInput(_) | Self::DegenerateSample(_) => {
                    format!("[{}] {}", category.cyan().bold(), message.cyan())
                }
                Self::Internal(_) => {
                    format!("[{}] {}", category.bright_red().bold(), message.bright_red())
                }
            }
        } else {
            format!("[{}] {}", category, message)
        }
    }
}

// Standard library error conversions
impl From<std::io::Error> for AppError {
    fn from(error: std::io::Error) -> Self {
        Self::io(error.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(error: serde_json::Error) -> Self {
        Self::internal(format!("JSON serialization error: {}", error))
    }
}

impl From<dotenv::Error> for AppError {
    fn from(error: dotenv::Error) -> Self {
        Self::config(format!("Environment file error: {}", error))
    }
}

impl From<std::num::ParseIntError> for AppError {
    fn from(error: std::num::ParseIntError) -> Self {
        Self::parse(format!("Integer parse error: {}", error))
    }
}

impl From<std::num::ParseFloatError> for AppError {
    fn from(error: std::num::ParseFloatError) -> Self {
        Self::parse(format!("Float parse error: {}", error))
    }
}

impl From<std::str::ParseBoolError> for AppError {
    fn from(error: std::str::ParseBoolError) -> Self {
        Self::parse(format!("Boolean parse error: {}", error))
    }
}

/// Custom Result type for the application
pub type Result<T> = std::result::Result<T, AppError>;

/// Error context trait for adding context to errors
pub trait ErrorContext<T> {
    /// Add context to an error
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;

    /// Add static context to an error
    fn context(self, message: &'static str) -> Result<T>;
}

impl<T, E> ErrorContext<T> for std::result::Result<T, E>
where
    E: Into<AppError>,
{
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| {
            let original_error = e.into();
            let context = f();
            // Keep the category of the underlying failure so exit codes stay meaningful
            match original_error {
                AppError::Io(msg) => AppError::Io(format!("{}: {}", context, msg)),
                AppError::Config(msg) => AppError::Config(format!("{}: {}", context, msg)),
                other => AppError::internal(format!("{}: {}", context, other)),
            }
        })
    }

    fn context(self, message: &'static str) -> Result<T> {
        self.with_context(|| message.to_string())
    }
}

/// Error reporter for structured error output and user feedback
pub struct ErrorReporter {
    pub use_color: bool,
    pub verbose: bool,
}

impl ErrorReporter {
    /// Create a new error reporter
    pub fn new(use_color: bool, verbose: bool) -> Self {
        Self { use_color, verbose }
    }

    /// Report an error to the user
    pub fn report_error(&self, error: &AppError) {
        eprintln!("{}", error.format_for_console(self.use_color));

        if self.verbose {
            eprintln!();
            eprintln!("{}", error.user_friendly_message());
        }
    }

    /// Get formatted error summary
    pub fn format_error_summary(&self, errors: &[AppError]) -> String {
        if errors.is_empty() {
            return "No errors".to_string();
        }

        let mut summary = format!("Found {} error(s):", errors.len());

        // Group errors by category, in first-seen order
        let mut error_groups: Vec<(&'static str, Vec<&AppError>)> = Vec::new();
        for error in errors {
            match error_groups.iter_mut().find(|(category, _)| *category == error.category()) {
                Some((_, group)) => group.push(error),
                None => error_groups.push((error.category(), vec![error])),
            }
        }

        for (category, group_errors) in error_groups {
            summary.push_str(&format!("\n  {}: {} error(s)", category, group_errors.len()));
            if self.verbose {
                for error in group_errors {
                    summary.push_str(&format!("\n    - {}", error));
                }
            }
        }

        summary
    }
}

impl Default for ErrorReporter {
    fn default() -> Self {
        Self::new(true, false)
    }
}
