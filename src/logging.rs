//! Leveled stderr logging
//!
//! Diagnostics and progress lines go through the logger to stderr so that
//! stdout carries nothing but the final report line. The minimum level is
//! derived from the `--debug` and `--verbose` flags.

use crate::error::{AppError, Result};
use crate::models::Config;
use chrono::Utc;

/// Log level enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    /// Debug level - detailed information for debugging
    Debug = 0,
    /// Info level - general application information
    Info = 1,
    /// Warning level - potentially harmful situations
    Warn = 2,
    /// Error level - error events
    Error = 3,
}

impl LogLevel {
    /// Get log level name as string
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Debug => "DEBUG",
            LogLevel::Info => "INFO",
            LogLevel::Warn => "WARN",
            LogLevel::Error => "ERROR",
        }
    }

    /// Get ANSI color code for console output
    pub fn color_code(&self) -> &'static str {
        match self {
            LogLevel::Debug => "\x1b[36m", // Cyan
            LogLevel::Info => "\x1b[32m",  // Green
            LogLevel::Warn => "\x1b[33m",  // Yellow
            LogLevel::Error => "\x1b[31m", // Red
        }
    }

    /// Reset ANSI color code
    pub fn reset_code() -> &'static str {
        "\x1b[0m"
    }
}

impl std::str::FromStr for LogLevel {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_uppercase().as_str() {
            "DEBUG" => Ok(LogLevel::Debug),
            "INFO" => Ok(LogLevel::Info),
            "WARN" | "WARNING" => Ok(LogLevel::Warn),
            "ERROR" => Ok(LogLevel::Error),
            _ => Err(AppError::parse(format!("Invalid log level: {}", s))),
        }
    }
}

/// Simple leveled logger writing timestamped lines to stderr
#[derive(Debug, Clone)]
pub struct Logger {
    /// Logger name included in every line
    pub name: String,
    /// Minimum level that gets emitted
    pub min_level: LogLevel,
    /// Whether to colorize the level tag
    pub use_color: bool,
}

impl Logger {
    /// Create a new logger with default settings
    pub fn new(name: String) -> Self {
        Self {
            name,
            min_level: LogLevel::Warn,
            use_color: true,
        }
    }

    /// Create a logger configured from the application config
    pub fn with_config(name: String, config: &Config) -> Self {
        let min_level = if config.debug {
            LogLevel::Debug
        } else if config.verbose {
            LogLevel::Info
        } else {
            LogLevel::Warn
        };

        Self {
            name,
            min_level,
            use_color: config.enable_color,
        }
    }

    /// Set the minimum log level
    pub fn set_level(&mut self, level: LogLevel) {
        self.min_level = level;
    }

    /// Check whether a message at this level would be emitted
    pub fn would_log(&self, level: LogLevel) -> bool {
        level >= self.min_level
    }

    /// Log a message at the given level
    pub fn log(&self, level: LogLevel, message: &str) {
        if !self.would_log(level) {
            return;
        }

        let timestamp = Utc::now().format("%Y-%m-%dT%H:%M:%S%.3fZ");
        let tag = if self.use_color {
            format!(
                "{}{}{}",
                level.color_code(),
                level.as_str(),
                LogLevel::reset_code()
            )
        } else {
            level.as_str().to_string()
        };

        eprintln!("[{}] [{}] [{}] {}", timestamp, tag, self.name, message);
    }

    /// Log at debug level
    pub fn debug(&self, message: &str) {
        self.log(LogLevel::Debug, message);
    }

    /// Log at info level
    pub fn info(&self, message: &str) {
        self.log(LogLevel::Info, message);
    }

    /// Log at warn level
    pub fn warn(&self, message: &str) {
        self.log(LogLevel::Warn, message);
    }

    /// Log at error level
    pub fn error(&self, message: &str) {
        self.log(LogLevel::Error, message);
    }
}
