//! Colored formatter implementation with terminal color support

use super::formatter::{FormattingOptions, OutputFormatter};
use crate::error::Result;
use crate::models::RunReport;
use colored::*;
use std::fmt::Write as _;

/// Throughput classification for color coding
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RateLevel {
    /// >= 50k messages/sec
    Fast,
    /// 5k - 50k messages/sec
    Moderate,
    /// < 5k messages/sec
    Slow,
}

impl RateLevel {
    /// Classify a messages-per-second rate
    pub fn from_rate(rate: f64) -> Self {
        if rate >= 50_000.0 {
            Self::Fast
        } else if rate >= 5_000.0 {
            Self::Moderate
        } else {
            Self::Slow
        }
    }

    /// Get color for this rate level
    pub fn color(&self) -> Color {
        match self {
            Self::Fast => Color::Green,
            Self::Moderate => Color::Yellow,
            Self::Slow => Color::Red,
        }
    }
}

/// Rich formatter using ANSI colors
pub struct ColoredFormatter {
    options: FormattingOptions,
}

impl ColoredFormatter {
    /// Create a new colored formatter with options
    pub fn new(options: FormattingOptions) -> Self {
        Self { options }
    }
}

impl OutputFormatter for ColoredFormatter {
    fn format_report(&self, report: &RunReport) -> Result<String> {
        let mut output = String::new();

        if self.options.verbose_mode {
            writeln!(
                output,
                "{}        {}",
                "Endpoint:".bold(),
                report.endpoint.to_string().cyan()
            )
            .ok();
            writeln!(output, "{}     {}", "Round-trips:".bold(), report.message_count).ok();
            writeln!(
                output,
                "{}         {:.3} seconds",
                "Elapsed:".bold(),
                report.elapsed_secs()
            )
            .ok();
            writeln!(output, "{}      {}", "Bytes sent:".bold(), report.bytes_sent).ok();
            writeln!(
                output,
                "{}  {}",
                "Bytes received:".bold(),
                report.bytes_received
            )
            .ok();
        }

        let rate = report.throughput();
        let level = RateLevel::from_rate(rate);
        write!(
            output,
            "{} {}",
            format!("{}", rate).color(level.color()).bold(),
            "messages/sec"
        )
        .ok();

        Ok(output)
    }

    fn format_error(&self, error: &str) -> Result<String> {
        Ok(format!("{} {}", "Error:".red().bold(), error.red()))
    }

    fn format_run_banner(&self, target: &str, message_count: u64) -> Result<String> {
        Ok(format!(
            "Benchmarking {} with {} round-trips...",
            target.cyan().bold(),
            message_count.to_string().bold()
        ))
    }
}
