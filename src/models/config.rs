//! Configuration data model and validation

use crate::defaults;
use crate::types::{AppError, Endpoint, Result};
use serde::{Deserialize, Serialize};

/// Main application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Host of the peer under test
    #[serde(default = "default_host")]
    pub host: String,

    /// Port of the peer under test
    #[serde(default = "default_port")]
    pub port: u16,

    /// Number of round-trips to perform
    #[serde(default = "default_message_count")]
    pub message_count: u64,

    /// Enable colored terminal output
    #[serde(default = "default_enable_color")]
    pub enable_color: bool,

    /// Enable verbose output
    #[serde(default)]
    pub verbose: bool,

    /// Enable debug output
    #[serde(default)]
    pub debug: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            message_count: default_message_count(),
            enable_color: default_enable_color(),
            verbose: false,
            debug: false,
        }
    }
}

impl Config {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the target endpoint for this run
    pub fn endpoint(&self) -> Endpoint {
        Endpoint::new(self.host.clone(), self.port)
    }

    /// Validate the configuration and return any errors
    pub fn validate(&self) -> Result<()> {
        if self.host.is_empty() {
            return Err(AppError::config("Target host cannot be empty"));
        }

        if self.host.contains(':') && self.host.parse::<std::net::Ipv6Addr>().is_err() {
            return Err(AppError::config(format!(
                "Target host must not contain a port, use --port instead: {}",
                self.host
            )));
        }

        if self.port == 0 {
            return Err(AppError::validation("Target port must be greater than 0"));
        }

        if self.message_count == 0 {
            return Err(AppError::validation("Message count must be greater than 0"));
        }

        if self.message_count > 100_000_000 {
            return Err(AppError::validation(
                "Message count cannot exceed 100000000",
            ));
        }

        Ok(())
    }

    /// Merge environment variables into this configuration
    pub fn merge_from_env(&mut self) -> Result<()> {
        if let Ok(host) = std::env::var("TARGET_HOST") {
            if !host.trim().is_empty() {
                self.host = host.trim().to_string();
            }
        }

        if let Ok(port) = std::env::var("TARGET_PORT") {
            self.port = port.trim().parse().map_err(|e| {
                AppError::config(format!("Invalid TARGET_PORT value '{}': {}", port, e))
            })?;
        }

        if let Ok(count) = std::env::var("MESSAGE_COUNT") {
            self.message_count = count.trim().parse().map_err(|e| {
                AppError::config(format!("Invalid MESSAGE_COUNT value '{}': {}", count, e))
            })?;
        }

        if let Ok(color) = std::env::var("ENABLE_COLOR") {
            self.enable_color = color.trim().parse().map_err(|e| {
                AppError::config(format!("Invalid ENABLE_COLOR value '{}': {}", color, e))
            })?;
        }

        Ok(())
    }
}

fn default_host() -> String {
    defaults::DEFAULT_HOST.to_string()
}

fn default_port() -> u16 {
    defaults::DEFAULT_PORT
}

fn default_message_count() -> u64 {
    defaults::DEFAULT_MESSAGE_COUNT
}

fn default_enable_color() -> bool {
    defaults::DEFAULT_ENABLE_COLOR
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.host, "localhost");
        assert_eq!(config.port, 8000);
        assert_eq!(config.message_count, 800_000);
        assert!(config.enable_color);
        assert!(!config.verbose);
        assert!(!config.debug);
    }

    #[test]
    fn test_default_config_validates() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn test_endpoint_from_config() {
        let config = Config {
            host: "example.com".to_string(),
            port: 9000,
            ..Default::default()
        };
        let endpoint = config.endpoint();
        assert_eq!(endpoint.to_string(), "example.com:9000");
    }

    #[test]
    fn test_validate_rejects_empty_host() {
        let config = Config {
            host: String::new(),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_zero_port() {
        let config = Config {
            port: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_zero_count() {
        let config = Config {
            message_count: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_host_with_port() {
        let config = Config {
            host: "localhost:8000".to_string(),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_accepts_ipv6_host() {
        let config = Config {
            host: "::1".to_string(),
            ..Default::default()
        };
        assert!(config.validate().is_ok());
    }
}
