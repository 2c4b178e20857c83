//! Configuration loading and layering
//!
//! Configuration comes from three layers, later layers winning:
//! built-in defaults, the `.env` file / process environment, and CLI
//! arguments.

pub mod env;
pub mod parser;

pub use env::EnvManager;
pub use parser::{load_config, ConfigParser};
