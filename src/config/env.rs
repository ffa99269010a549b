//! Environment variable handling and .env file management

use crate::config::parser;
use crate::error::{AppError, Result};
use crate::models::config::parse_optional_index;
use crate::types::{OutputFormat, ParseMode};
use std::path::Path;

/// Environment variable configuration manager
pub struct EnvManager;

impl EnvManager {
    /// Load .env file if it exists
    pub fn load_env_file(debug: bool) -> Result<()> {
        Self::load_env_file_from(Path::new(".env"), debug)
    }

    /// Load a specific env file if it exists; existing variables win
    pub fn load_env_file_from(path: &Path, debug: bool) -> Result<()> {
        if path.exists() {
            dotenv::from_path(path)
                .map_err(|e| AppError::config(format!("Failed to load {}: {}", path.display(), e)))?;

            if debug {
                eprintln!("Loaded configuration from {}", path.display());
            }
        } else if debug {
            eprintln!("No {} file found, using defaults and CLI arguments", path.display());
        }

        Ok(())
    }

    /// Create example .env file content
    pub fn create_example_env_content() -> String {
        r#"# RTT Summarizer Configuration
#
# Values specified here are used as defaults and can be overridden by
# command-line arguments.

# Input file when no path argument is given
# RTT_INPUT_PATH=rtt_times.csv

# Column holding the RTT value (0-based)
# RTT_FIELD_INDEX=1

# Column holding the millisecond timestamp, or "none"
# TIMESTAMP_FIELD_INDEX=0

# Count RTTs strictly above this many milliseconds
# EXCEED_THRESHOLD_MS=5000

# Drop blank lines before parsing (true/false)
# SKIP_BLANK_LINES=true

# strict: abort on the first malformed row; lenient: skip and count it
# PARSE_MODE=strict

# text or json
# OUTPUT_FORMAT=text

# Enable colored output (true/false)
# ENABLE_COLOR=true

# Example: three-column logs without timestamps
# RTT_FIELD_INDEX=2
# TIMESTAMP_FIELD_INDEX=none
# EXCEED_THRESHOLD_MS=6000
"#.to_string()
    }

    /// Validate environment variable format before parsing
    pub fn validate_env_var(key: &str, value: &str) -> Result<()> {
        match key {
            "RTT_INPUT_PATH" => {
                if value.trim().is_empty() {
                    return Err(AppError::config("RTT_INPUT_PATH cannot be empty"));
                }
            }
            "RTT_FIELD_INDEX" => {
                value.trim().parse::<usize>()
                    .map_err(|e| AppError::config(format!("Invalid RTT_FIELD_INDEX value '{}': {}", value, e)))?;
            }
            "TIMESTAMP_FIELD_INDEX" => {
                parse_optional_index(value)
                    .map_err(|e| AppError::config(format!("Invalid TIMESTAMP_FIELD_INDEX value '{}': {}", value, e)))?;
            }
            "EXCEED_THRESHOLD_MS" => {
                let threshold: f64 = value.trim().parse()
                    .map_err(|e| AppError::config(format!("Invalid EXCEED_THRESHOLD_MS value '{}': {}", value, e)))?;
                if !threshold.is_finite() || threshold < 0.0 {
                    return Err(AppError::config(format!("EXCEED_THRESHOLD_MS must be a non-negative number, got: {}", value)));
                }
            }
            "SKIP_BLANK_LINES" | "ENABLE_COLOR" => {
                value.trim().parse::<bool>()
                    .map_err(|e| AppError::config(format!("Invalid {} value '{}': {}", key, value, e)))?;
            }
            "PARSE_MODE" => {
                value.parse::<ParseMode>()
                    .map_err(|e| AppError::config(format!("Invalid PARSE_MODE value: {}", e)))?;
            }
            "OUTPUT_FORMAT" => {
                value.parse::<OutputFormat>()
                    .map_err(|e| AppError::config(format!("Invalid OUTPUT_FORMAT value: {}", e)))?;
            }
            _ => {
                // Unknown environment variable, ignore
            }
        }

        Ok(())
    }

    /// Validate every supported variable currently set in the environment
    pub fn validate_environment() -> Result<()> {
        for (key, _) in Self::get_supported_env_vars() {
            if let Ok(value) = std::env::var(key) {
                Self::validate_env_var(key, &value)?;
            }
        }
        Ok(())
    }

    /// Get list of all supported environment variables with descriptions
    pub fn get_supported_env_vars() -> Vec<(&'static str, &'static str)> {
        vec![
            ("RTT_INPUT_PATH", "Input file when no path argument is given"),
            ("RTT_FIELD_INDEX", "Column holding the RTT value"),
            ("TIMESTAMP_FIELD_INDEX", "Column holding the timestamp, or 'none'"),
            ("EXCEED_THRESHOLD_MS", "Exceedance threshold in milliseconds"),
            ("SKIP_BLANK_LINES", "Drop blank lines before parsing (true/false)"),
            ("PARSE_MODE", "strict or lenient handling of malformed rows"),
            ("OUTPUT_FORMAT", "text or json"),
            ("ENABLE_COLOR", "Enable colored output (true/false)"),
        ]
    }

    /// Print the supported variables, for debug output
    pub fn describe_env_vars() -> String {
        let mut out = String::from("Supported environment variables:\n");
        for (key, description) in Self::get_supported_env_vars() {
            let current = std::env::var(key).unwrap_or_else(|_| "(unset)".to_string());
            out.push_str(&format!("  {:<22} {} [{}]\n", key, description, current));
        }
        out.push_str(&format!("Defaults:\n{}\n", parser::display_config_summary(&crate::models::Config::default())));
        out
    }
}
