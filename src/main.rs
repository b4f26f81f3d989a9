//! # Main Entry Point
//!
//! This file serves as the main entry point for the application. It is responsible for:
//! - Setting up panic handlers for improved error reporting.
//! - Initializing the logging system.
//! - Loading and initializing application configuration.
//! - Parsing and matching command-line arguments to execute corresponding commands.

#[cfg(not(debug_assertions))]
use human_panic::setup_panic;

#[cfg(debug_assertions)]
extern crate better_panic;

mod cli;

use stbuild::utils::app_config::AppConfig;
use stbuild::utils::error::Result;

/// The main entry point of the application.
///
/// - Sets up panic handlers: `human_panic` for release builds and `better_panic` for debug builds.
/// - Initializes logging with `utils::logger::setup_logging`. The guard lives until `main` returns.
/// - Loads the defaults embedded from `resources/default_config.toml` into `AppConfig`.
/// - Dispatches to the matched command via `cli::cli_match`.
fn main() -> Result<()> {
    // Human Panic. Only enabled when *not* debugging.
    #[cfg(not(debug_assertions))]
    {
        setup_panic!();
    }

    // Better Panic. Only enabled *when* debugging.
    #[cfg(debug_assertions)]
    {
        better_panic::Settings::debug()
            .most_recent_first(false)
            .lineno_suffix(true)
            .verbosity(better_panic::Verbosity::Full)
            .install();
    }

    let _guard = stbuild::utils::logger::setup_logging()?;

    // Initialize Configuration
    let config_contents = include_str!("resources/default_config.toml");
    AppConfig::init(Some(config_contents))?;

    // Match Commands
    cli::cli_match()?;

    Ok(())
}
