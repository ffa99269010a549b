//! Configuration parsing from CLI arguments and environment variables

use crate::{
    cli::Cli,
    models::Config,
    error::{AppError, Result},
    config::env::EnvManager,
    types::ParseMode,
};

/// Configuration parser that combines CLI arguments with environment variables
pub struct ConfigParser {
    cli: Cli,
}

impl ConfigParser {
    /// Create a new configuration parser with CLI arguments
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Parse and build the complete configuration
    pub fn parse(&self) -> Result<Config> {
        self.cli.validate().map_err(AppError::validation)?;

        // Load from environment file if it exists
        EnvManager::load_env_file(self.cli.debug)?;

        self.parse_without_env_file()
    }

    /// Build the configuration from defaults, the process environment and CLI flags
    pub fn parse_without_env_file(&self) -> Result<Config> {
        let mut config = Config::default();

        // Merge environment variables into config
        EnvManager::validate_environment()?;
        config.merge_from_env()?;

        // Override with CLI arguments
        self.apply_cli_overrides(&mut config);

        // Validate the final configuration
        config.validate()?;

        Ok(config)
    }

    /// Apply CLI argument overrides to configuration
    fn apply_cli_overrides(&self, config: &mut Config) {
        if let Some(ref path) = self.cli.path {
            config.input_path = path.clone();
        }

        // Shape first so explicit field flags win over the preset
        if let Some(shape) = self.cli.shape {
            config.rtt_field_index = shape.rtt_field_index();
            config.timestamp_field_index = shape.timestamp_field_index();
        }

        if let Some(index) = self.cli.rtt_field {
            config.rtt_field_index = index;
        }

        if let Some(index) = self.cli.timestamp_field {
            config.timestamp_field_index = Some(index);
        }

        if self.cli.no_timestamp {
            config.timestamp_field_index = None;
        }

        if let Some(threshold) = self.cli.threshold {
            config.exceed_threshold_ms = threshold;
        }

        if self.cli.keep_blank_lines {
            config.skip_blank_lines = false;
        }

        if self.cli.lenient {
            config.parse_mode = ParseMode::Lenient;
        } else if self.cli.strict {
            config.parse_mode = ParseMode::Strict;
        }

        if let Some(format) = self.cli.format {
            config.output_format = format;
        }

        config.enable_color = self.cli.use_colors(config.enable_color);

        // Set verbose and debug flags (these are CLI-only)
        config.verbose = self.cli.verbose;
        config.debug = self.cli.debug;
    }
}

/// Convenience function to load complete configuration from CLI arguments
pub fn load_config(cli: Cli) -> Result<Config> {
    let parser = ConfigParser::new(cli);
    parser.parse()
}

/// Display configuration summary for debug purposes
pub fn display_config_summary(config: &Config) -> String {
    let mut summary = Vec::new();

    let timestamp_field = config
        .timestamp_field_index
        .map(|index| index.to_string())
        .unwrap_or_else(|| "none".to_string());

    summary.push(format!("Input: {}", config.input_path.display()));
    summary.push(format!("RTT Field: {}", config.rtt_field_index));
    summary.push(format!("Timestamp Field: {}", timestamp_field));
    summary.push(format!("Threshold: {}ms", config.exceed_threshold_ms));
    summary.push(format!("Skip Blank Lines: {}", config.skip_blank_lines));
    summary.push(format!("Parse Mode: {}", config.parse_mode));
    summary.push(format!("Output Format: {:?}", config.output_format));
    summary.push(format!("Color Output: {}", config.enable_color));
    summary.push(format!("Verbose: {}", config.verbose));
    summary.push(format!("Debug: {}", config.debug));

    summary.join("\n")
}
