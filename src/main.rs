//! RTT Summarizer - Main CLI Application
//!
//! Summarizes a CSV log of round-trip-time measurements and prints one
//! metric per line.

use clap::Parser;
use rtt_summarizer::{
    app::App,
    cli::Cli,
    config::{load_config, EnvManager},
    defaults::DEFAULT_ENABLE_COLOR,
    error::{AppError, ErrorReporter, Result},
    PKG_NAME, VERSION,
};
use std::process;

fn main() {
    // Set up better panic handling
    std::panic::set_hook(Box::new(|panic_info| {
        eprintln!("Application panic: {}", panic_info);
        eprintln!("Please report this issue with the input that triggered it.");
        process::exit(AppError::internal("panic").exit_code());
    }));

    // Parse command line arguments
    let cli = Cli::parse();

    if cli.print_env_example {
        print!("{}", EnvManager::create_example_env_content());
        return;
    }

    let reporter = ErrorReporter::new(cli.use_colors(DEFAULT_ENABLE_COLOR), cli.verbose);

    // Handle the actual application logic
    if let Err(e) = run_application(cli) {
        reporter.report_error(&e);

        if !reporter.verbose {
            print_error_suggestions(&e);
        }

        process::exit(e.exit_code());
    }
}

/// Main application logic
fn run_application(cli: Cli) -> Result<()> {
    // Show debug info if requested
    if cli.debug {
        eprintln!("{} v{} ({})", PKG_NAME, VERSION, env!("TARGET_TRIPLE"));
        eprintln!("Debug mode enabled");
        eprint!("{}", cli.get_config_summary());
        eprintln!();
    }

    // Load and validate configuration
    let config = load_config(cli)?;

    App::new(config).run()
}

/// Print helpful suggestions for common errors
fn print_error_suggestions(error: &AppError) {
    match error {
        AppError::Config(_) | AppError::Validation(_) => {
            eprintln!();
            eprintln!("Configuration help:");
            eprintln!("  - Check your .env file format (see --print-env-example)");
            eprintln!("  - RTT and timestamp columns must differ");
            eprintln!("  - The threshold must be a non-negative number");
        }
        AppError::RowParse(_) => {
            eprintln!();
            eprintln!("Parsing help:");
            eprintln!("  - Pick the row layout with --shape a|b or --rtt-field/--timestamp-field");
            eprintln!("  - Use --no-timestamp for logs without a timestamp column");
            eprintln!("  - Rerun with --lenient to skip malformed rows");
        }
        AppError::Io(_) => {
            eprintln!();
            eprintln!("Input help:");
            eprintln!("  - Pass the CSV path as the first argument");
            eprintln!("  - Or set RTT_INPUT_PATH; the default is rtt_times.csv");
        }
        _ => {}
    }
}
