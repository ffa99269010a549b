//! Configuration validation utilities and rules

use crate::{
    models::Config,
    error::Result,
    types::ParseMode,
};
use colored::*;

/// Configuration validator with advisory rules on top of `Config::validate`
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate configuration with comprehensive checks
    pub fn validate_comprehensive(config: &Config) -> Result<Vec<ValidationWarning>> {
        let mut warnings = Vec::new();

        // Basic validation (already done in Config::validate)
        config.validate()?;

        warnings.extend(Self::validate_input_path(config));
        warnings.extend(Self::validate_layout(config));
        warnings.extend(Self::validate_threshold(config));
        warnings.extend(Self::validate_blank_line_policy(config));

        Ok(warnings)
    }

    /// The input file is only read later; flag problems early
    fn validate_input_path(config: &Config) -> Vec<ValidationWarning> {
        let mut warnings = Vec::new();
        let path = &config.input_path;

        if !path.exists() {
            warnings.push(ValidationWarning::new(
                ValidationLevel::Warning,
                format!("Input file '{}' does not exist", path.display())
            ));
        } else if path.is_dir() {
            warnings.push(ValidationWarning::new(
                ValidationLevel::Warning,
                format!("Input path '{}' is a directory", path.display())
            ));
        }

        warnings
    }

    /// Check column indices for unusual layouts
    fn validate_layout(config: &Config) -> Vec<ValidationWarning> {
        let mut warnings = Vec::new();

        if let Some(timestamp) = config.timestamp_field_index {
            if timestamp > config.rtt_field_index {
                warnings.push(ValidationWarning::new(
                    ValidationLevel::Info,
                    format!(
                        "Timestamp column {} comes after RTT column {}",
                        timestamp, config.rtt_field_index
                    )
                ));
            }
        }

        let required = config.layout().required_fields();
        if required > 8 {
            warnings.push(ValidationWarning::new(
                ValidationLevel::Info,
                format!("Rows need at least {} fields for this layout", required)
            ));
        }

        warnings
    }

    fn validate_threshold(config: &Config) -> Vec<ValidationWarning> {
        let mut warnings = Vec::new();

        if config.exceed_threshold_ms == 0.0 {
            warnings.push(ValidationWarning::new(
                ValidationLevel::Warning,
                "Exceedance threshold is 0ms; every positive RTT will be counted".to_string()
            ));
        }

        warnings
    }

    fn validate_blank_line_policy(config: &Config) -> Vec<ValidationWarning> {
        let mut warnings = Vec::new();

        if !config.skip_blank_lines && config.parse_mode == ParseMode::Strict {
            warnings.push(ValidationWarning::new(
                ValidationLevel::Info,
                "Blank lines are kept in strict mode; any blank line will abort the run".to_string()
            ));
        }

        warnings
    }
}

/// Validation warning levels
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationLevel {
    Info,
    Warning,
    Error,
}

impl ValidationLevel {
    /// Get display string for level
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Info => "INFO",
            Self::Warning => "WARNING",
            Self::Error => "ERROR",
        }
    }

    /// Get color for terminal display
    pub fn color(&self) -> Color {
        match self {
            Self::Info => Color::Blue,
            Self::Warning => Color::Yellow,
            Self::Error => Color::Red,
        }
    }
}

/// Configuration validation warning
#[derive(Debug, Clone)]
pub struct ValidationWarning {
    pub level: ValidationLevel,
    pub message: String,
}

impl ValidationWarning {
    /// Create a new validation warning
    pub fn new(level: ValidationLevel, message: String) -> Self {
        Self { level, message }
    }

    /// Format warning for display
    pub fn format(&self, use_color: bool) -> String {
        let tag = format!("[{}]", self.level.as_str());
        if use_color {
            format!("{} {}", tag.color(self.level.color()).bold(), self.message)
        } else {
            format!("{} {}", tag, self.message)
        }
    }
}

/// Convenience function for comprehensive configuration validation
pub fn validate_config(config: &Config) -> Result<Vec<ValidationWarning>> {
    ConfigValidator::validate_comprehensive(config)
}
