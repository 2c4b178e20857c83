//! Core formatting trait and the plain text implementation
//!
//! The final stdout line always reads `{rate} messages/sec`; verbose mode
//! prepends the run details (endpoint, round-trips, elapsed time, byte
//! counters in both directions).

use crate::error::Result;
use crate::models::RunReport;
use std::fmt::Write as _;

/// Main trait for output formatting
pub trait OutputFormatter {
    /// Format a completed run report for stdout
    fn format_report(&self, report: &RunReport) -> Result<String>;

    /// Format an error message for stderr
    fn format_error(&self, error: &str) -> Result<String>;

    /// Format a progress/info line shown before the run starts
    fn format_run_banner(&self, target: &str, message_count: u64) -> Result<String>;
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
    fn format_report(&self, report: &RunReport) -> Result<String> {
        let mut output = String::new();

        if self.options.verbose_mode {
            writeln!(output, "Endpoint:        {}", report.endpoint).ok();
            writeln!(output, "Round-trips:     {}", report.message_count).ok();
            writeln!(output, "Elapsed:         {:.3} seconds", report.elapsed_secs()).ok();
            writeln!(output, "Bytes sent:      {}", report.bytes_sent).ok();
            writeln!(output, "Bytes received:  {}", report.bytes_received).ok();
        }

        write!(output, "{} messages/sec", report.throughput()).ok();

        Ok(output)
    }

    fn format_error(&self, error: &str) -> Result<String> {
        Ok(format!("Error: {}", error))
    }

    fn format_run_banner(&self, target: &str, message_count: u64) -> Result<String> {
        Ok(format!(
            "Benchmarking {} with {} round-trips...",
            target, message_count
        ))
    }
}
