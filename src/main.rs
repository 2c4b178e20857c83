//! TCP Throughput Tester - Main CLI Application
//!
//! Opens one blocking TCP connection to the peer under test, performs N
//! single-byte echo round-trips, and prints the measured rate in
//! messages per second.

use clap::Parser;
use std::process;
use tcp_throughput_tester::{
    cli::Cli,
    config::load_config,
    error::{AppError, Result},
    logging::Logger,
    output::OutputFormatterFactory,
    runner::BenchmarkRunner,
    PKG_NAME, VERSION,
};

fn main() {
    // Parse command line arguments
    let cli = Cli::parse();

    // Reject conflicting flags before any work happens
    if let Err(message) = cli.validate() {
        eprintln!("Error: {}", message);
        process::exit(1);
    }

    let use_colors = cli.use_colors();

    if let Err(e) = run_application(cli) {
        eprintln!("{}", e.format_for_console(use_colors));
        print_error_suggestions(&e);
        process::exit(e.exit_code());
    }
}

/// Main application logic
fn run_application(cli: Cli) -> Result<()> {
    // Load and validate configuration
    let config = load_config(cli)?;
    let logger = Logger::with_config("RUNNER".to_string(), &config);

    if config.debug {
        logger.debug(&format!("{} v{}", PKG_NAME, VERSION));
        logger.debug(&format!(
            "Configuration: endpoint={}, count={}, color={}",
            config.endpoint(),
            config.message_count,
            config.enable_color
        ));
    }

    let formatter = OutputFormatterFactory::create_formatter(config.enable_color, config.verbose);

    if config.verbose {
        logger.info(
            &formatter.format_run_banner(&config.endpoint().to_string(), config.message_count)?,
        );
    }

    // Execute the benchmark: connect, run the timed loop, report
    let runner = BenchmarkRunner::new(&config);
    let report = runner.run()?;

    if config.debug {
        logger.debug(&format!(
            "Run finished: {} round-trips in {:.3}s, {} bytes received",
            report.message_count,
            report.elapsed_secs(),
            report.bytes_received
        ));
    }

    // The report is the only thing written to stdout
    println!("{}", formatter.format_report(&report)?);

    Ok(())
}

/// Print helpful suggestions for common errors
fn print_error_suggestions(error: &AppError) {
    match error {
        AppError::Config(_) | AppError::Validation(_) => {
            eprintln!();
            eprintln!("Configuration help:");
            eprintln!("  - Check your .env file format");
            eprintln!("  - TARGET_PORT and MESSAGE_COUNT must be positive integers");
            eprintln!("  - The host must not include a port, use --port instead");
        }
        AppError::Connect(_) => {
            eprintln!();
            eprintln!("Connection troubleshooting:");
            eprintln!("  - Verify the peer under test is running and listening");
            eprintln!("  - Check the host and port values");
            eprintln!("  - Verify firewall settings");
        }
        AppError::PeerClosed(_) => {
            eprintln!();
            eprintln!("The peer closed the connection before the run completed.");
            eprintln!("  - Check the peer's logs for crashes or connection limits");
            eprintln!("  - Reduce the round-trip count with --count");
        }
        _ => {}
    }
}
