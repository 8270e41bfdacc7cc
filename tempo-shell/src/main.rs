//! Tempo - Main entry point
//!
//! Parses command-line arguments and starts the application.
//!
//! # Usage
//!
//! ```bash
//! tempo --help              # Show help
//! tempo --settings          # Start with the settings panel open
//! tempo --log-level debug   # Enable debug logging
//! ```

mod app;
mod cli;

pub use cli::Args;

use clap::Parser;

fn main() {
    // Parse command-line arguments
    let args = Args::parse();

    // Configure logging based on CLI args
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(args.log_filter()),
    )
    .init();

    log::info!("Starting Tempo");
    log::debug!("CLI args: {:?}", args);

    if args.start_open {
        log::info!("Opening settings panel at startup via CLI");
    }

    // Store args for app to access
    app::set_cli_args(args);

    // Start the application
    app::app_main();
}
