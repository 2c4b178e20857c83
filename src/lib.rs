//! TCP Throughput Tester
//!
//! A TCP echo throughput testing tool that measures how many single-byte
//! request/response round-trips per second a peer under test can sustain
//! over one blocking connection.

pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod models;
pub mod output;
pub mod probe;
pub mod runner;
pub mod types;

// Re-export commonly used types
pub use error::{AppError, Result};
pub use models::{Config, RunReport};
pub use output::{ColoredFormatter, OutputFormatter, OutputFormatterFactory, PlainFormatter};
pub use probe::{ProbeConnection, Transport};
pub use runner::BenchmarkRunner;
pub use types::Endpoint;

/// Application version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const PKG_NAME: &str = env!("CARGO_PKG_NAME");
pub const PKG_DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");

/// Default configuration values
pub mod defaults {
    /// Host of the peer under test
    pub const DEFAULT_HOST: &str = "localhost";
    /// Port of the peer under test
    pub const DEFAULT_PORT: u16 = 8000;
    /// Number of round-trips per run
    pub const DEFAULT_MESSAGE_COUNT: u64 = 800_000;
    /// Request payload, exactly one byte
    pub const REQUEST_BYTE: u8 = b'x';
    /// Receive buffer size; oversized headroom, not a framing contract
    pub const RECV_BUFFER_SIZE: usize = 1000;
    pub const DEFAULT_ENABLE_COLOR: bool = true;
}
