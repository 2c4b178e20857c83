//! Command-line interface module

use clap::Parser;

/// TCP Throughput Tester - measures echo round-trip message rates over one blocking connection
#[derive(Parser, Debug, Clone)]
#[command(name = "tcp-throughput-tester")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Host of the peer under test
    #[arg(long, default_value = crate::defaults::DEFAULT_HOST)]
    pub host: String,

    /// Port of the peer under test
    #[arg(short, long, default_value_t = crate::defaults::DEFAULT_PORT)]
    pub port: u16,

    /// Number of round-trips to perform
    #[arg(short, long, default_value_t = crate::defaults::DEFAULT_MESSAGE_COUNT)]
    pub count: u64,

    /// Force colored output
    #[arg(long)]
    pub color: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Enable verbose output
    #[arg(long)]
    pub verbose: bool,

    /// Enable debug output
    #[arg(long)]
    pub debug: bool,
}

impl Cli {
    /// Validate CLI arguments for conflicts and requirements
    pub fn validate(&self) -> Result<(), String> {
        // Check for conflicting color flags
        if self.color && self.no_color {
            return Err("Cannot specify both --color and --no-color".to_string());
        }

        if self.count == 0 {
            return Err("Round-trip count must be greater than 0".to_string());
        }

        if self.port == 0 {
            return Err("Port must be greater than 0".to_string());
        }

        Ok(())
    }

    /// Check if colors should be enabled
    pub fn use_colors(&self) -> bool {
        if self.color {
            true // Force color output when --color is specified
        } else if self.no_color {
            false // Disable color output when --no-color is specified
        } else {
            supports_color() // Use automatic detection
        }
    }
}

/// Detect whether the terminal supports colored output
fn supports_color() -> bool {
    // Check for common environment variables that indicate color support
    if let Ok(term) = std::env::var("TERM") {
        if term == "dumb" {
            return false;
        }
    }

    // Check for NO_COLOR environment variable
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }

    // Check for FORCE_COLOR environment variable
    if std::env::var("FORCE_COLOR").is_ok() {
        return true;
    }

    true
}
