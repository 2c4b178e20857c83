//! Environment variable handling and .env file management

use crate::error::{AppError, Result};
use std::path::Path;

/// Environment variable configuration manager
pub struct EnvManager;

impl EnvManager {
    /// Load .env file if it exists
    pub fn load_env_file(debug: bool) -> Result<()> {
        // Try to load .env from current directory
        if Path::new(".env").exists() {
            dotenv::from_filename(".env")
                .map_err(|e| AppError::config(format!("Failed to load .env file: {}", e)))?;

            if debug {
                eprintln!("Loaded configuration from .env file");
            }
        } else if debug {
            eprintln!("No .env file found, using defaults and CLI arguments");
        }

        Ok(())
    }

    /// Create example .env file content
    pub fn create_example_env_content() -> String {
        r#"# TCP Throughput Tester Configuration
#
# This file contains environment variables that can be used to configure
# the throughput tester. Values specified here will be used as defaults,
# but can be overridden by command-line arguments.

# Host of the peer under test
# TARGET_HOST=localhost

# Port of the peer under test
# TARGET_PORT=8000

# Number of round-trips to perform per run
# MESSAGE_COUNT=800000

# Enable colored output (true/false)
# ENABLE_COLOR=true
"#
        .to_string()
    }
}
