//! Output formatting for run reports and errors

pub mod colored;
pub mod formatter;

pub use colored::ColoredFormatter;
pub use formatter::{FormattingOptions, OutputFormatter, PlainFormatter};

/// Factory for creating the right formatter for the configuration
pub struct OutputFormatterFactory;

impl OutputFormatterFactory {
    /// Create a formatter based on color and verbosity settings
    pub fn create_formatter(enable_color: bool, verbose: bool) -> Box<dyn OutputFormatter> {
        let options = FormattingOptions {
            enable_color,
            verbose_mode: verbose,
        };

        if enable_color {
            Box::new(ColoredFormatter::new(options))
        } else {
            Box::new(PlainFormatter::new(options))
        }
    }
}
