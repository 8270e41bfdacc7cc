//! Command-line interface for Tempo
//!
//! Provides CLI argument parsing for configuring the application at startup.
//!
//! # Usage
//!
//! ```bash
//! # Show help
//! tempo --help
//!
//! # Start with the settings panel already open
//! tempo --settings
//!
//! # Set log level
//! tempo --log-level debug
//! ```

use clap::Parser;

/// Tempo - rhythm game desktop shell
///
/// A GPU-accelerated desktop shell hosting the Tempo settings overlay,
/// built with Rust and Makepad.
#[derive(Parser, Debug, Clone)]
#[command(name = "tempo")]
#[command(version)]
#[command(about = "Rhythm game desktop shell", long_about = None)]
pub struct Args {
    /// Start with the settings panel open
    ///
    /// When set, the settings panel slides in as soon as the window is up.
    #[arg(long = "settings")]
    pub start_open: bool,

    /// Log level for output
    ///
    /// Controls the verbosity of log output. Available levels:
    /// error, warn, info, debug, trace
    #[arg(long, default_value = "info", value_name = "LEVEL")]
    pub log_level: String,
}

impl Default for Args {
    fn default() -> Self {
        Self {
            start_open: false,
            log_level: "info".to_string(),
        }
    }
}

impl Args {
    /// Parse command-line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Get log level as env_logger filter string
    pub fn log_filter(&self) -> &str {
        match self.log_level.to_lowercase().as_str() {
            "error" => "error",
            "warn" | "warning" => "warn",
            "info" => "info",
            "debug" => "debug",
            "trace" => "trace",
            _ => "info",
        }
    }
}
