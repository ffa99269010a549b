//! Main application orchestration and execution

use crate::{
    config::{display_config_summary, validate_config, EnvManager},
    error::{AppError, ErrorReporter, Result},
    log_debug, log_info,
    logging::{Logger, LoggerFactory},
    models::{Config, SummaryReport},
    output::{OutputFormatter, OutputFormatterFactory},
    stats::Summarizer,
    types::OutputFormat,
};
use std::time::Instant;

/// Main application struct that coordinates all components
pub struct App {
    config: Config,
    formatter: Box<dyn OutputFormatter>,
    logger: Logger,
}

impl App {
    /// Create a new application instance from a loaded configuration
    pub fn new(config: Config) -> Self {
        let formatter = OutputFormatterFactory::create_formatter(
            config.output_format,
            config.enable_color,
            config.verbose,
        );
        let logger = LoggerFactory::new(config.clone()).create_logger("rtts");

        Self {
            config,
            formatter,
            logger,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Run the application, writing the report to stdout
    pub fn run(&self) -> Result<()> {
        let output = self.execute()?;
        print!("{}", output);
        Ok(())
    }

    /// Summarize the configured input and render the report
    pub fn execute(&self) -> Result<String> {
        if self.config.debug {
            eprintln!("Configuration Summary:");
            eprintln!("{}", display_config_summary(&self.config));
            eprintln!();
            eprint!("{}", EnvManager::describe_env_vars());
        }

        for warning in validate_config(&self.config)? {
            eprintln!("{}", warning.format(self.config.enable_color));
        }

        let report = match self.summarize() {
            Ok(report) => report,
            Err(error) => {
                self.logger
                    .error("Summarization failed")
                    .field("input", self.config.input_path.display().to_string())
                    .error_info(&error)
                    .log();

                // JSON consumers still get a parseable document on stdout
                if self.config.output_format == OutputFormat::Json {
                    println!("{}", self.formatter.format_error(&error.to_string())?);
                }
                return Err(error);
            }
        };

        self.report_skipped_rows(&report)?;
        self.formatter.format_report(&report)
    }

    /// Load and fold the input file
    pub fn summarize(&self) -> Result<SummaryReport> {
        let summarizer = Summarizer::new(self.config.summary_config())?;
        let started = Instant::now();

        log_info!(self.logger, "Summarizing {}", self.config.input_path.display());
        log_debug!(self.logger, "Parse mode: {}, skip blank lines: {}", self.config.parse_mode, self.config.skip_blank_lines);

        let report = summarizer.summarize_file(&self.config.input_path)?;

        self.logger
            .info("Report ready")
            .field("rows", report.count)
            .field("skipped", report.skipped_count())
            .field("exceed_count", report.exceed_count)
            .elapsed(started.elapsed())
            .log();

        Ok(report)
    }

    /// Warn about rows dropped in lenient mode
    fn report_skipped_rows(&self, report: &SummaryReport) -> Result<()> {
        if report.skipped_rows.is_empty() {
            return Ok(());
        }

        for row in &report.skipped_rows {
            self.logger
                .warn("Skipped malformed row")
                .field("line", row.line)
                .field("reason", &row.reason)
                .log();
        }

        if self.config.output_format == OutputFormat::Text {
            eprintln!(
                "{}",
                self.formatter.format_warning(&format!(
                    "{} malformed row(s) skipped",
                    report.skipped_count()
                ))?
            );
        }

        if self.config.verbose {
            let errors: Vec<AppError> = report
                .skipped_rows
                .iter()
                .cloned()
                .map(AppError::from)
                .collect();
            let reporter = ErrorReporter::new(self.config.enable_color, self.config.verbose);
            eprintln!("{}", reporter.format_error_summary(&errors));
        }

        Ok(())
    }
}
