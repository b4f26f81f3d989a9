//! # Command-Line Interface Module
//!
//! This module defines the command-line interface (CLI) for the application.
//! It uses the `clap` crate to parse arguments and subcommands, and then
//! dispatches to the appropriate handlers in the `core::commands` module.
//!
//! The main components are:
//! - `Cli`: The top-level struct representing the CLI arguments. Without a
//!   subcommand it runs a build and requires `--input-folder` and `--output-file`.
//! - `Commands`: The auxiliary subcommands (`completion`, `config`).
//! - `cli_match()`: Parses CLI input, merges configuration and executes the matched command.

use clap::{CommandFactory, FromArgMatches, Parser, Subcommand};
use clap_complete::{
    generate,
    shells::{Bash, Fish, Zsh},
};
use std::path::PathBuf;

use stbuild::core::commands;
use stbuild::utils::app_config::AppConfig;
use stbuild::utils::error::Result;
use stbuild::utils::types::LogLevel;

const BIN_NAME: &str = "stbuild";

#[derive(Parser, Debug)]
#[command(
    name = "stbuild",
    author,
    about = "Build the StoryTree library with private classes",
    long_about = None,
    version,
    subcommand_negates_reqs = true
)]
/// Represents the command-line interface arguments for the application.
///
/// This struct is parsed by `clap` to define the available commands, options, and flags.
pub struct Cli {
    /// The directory location of the StoryTree components
    /// (`SDB.js`, `Character.js`, `STree.js` and `StoryTree.js`).
    #[arg(long = "input-folder", value_name = "NAME", required = true)]
    pub input_folder: Option<PathBuf>,

    /// The build output javascript file. Overwritten if it exists.
    #[arg(long = "output-file", value_name = "NAME", required = true)]
    pub output_file: Option<PathBuf>,

    /// Specifies a custom configuration file path.
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Enables or disables debug mode.
    #[arg(name = "debug", short, long = "debug", value_name = "DEBUG")]
    pub debug: Option<bool>,

    /// Sets the logging level for the application.
    #[arg(
        name = "log_level",
        short,
        long = "log-level",
        value_name = "LOG_LEVEL"
    )]
    pub log_level: Option<LogLevel>,

    /// An auxiliary subcommand. When absent a build is run.
    #[clap(subcommand)]
    command: Option<Commands>,
}

/// Defines the auxiliary subcommands available in the CLI.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Subcommands for generating shell completion scripts.
    #[clap(
        name = "completion",
        about = "Generate completion scripts",
        long_about = None,
        )]
    Completion {
        /// The shell for which to generate the script.
        #[clap(subcommand)]
        subcommand: CompletionSubcommand,
    },
    /// Displays the current application configuration.
    ///
    /// This command prints the active configuration, which is a result of merging
    /// default settings, environment variables, configuration file values,
    /// and command-line arguments.
    #[clap(
        name = "config",
        about = "Show Configuration",
        long_about = None,
    )]
    Config,
}

/// Defines subcommands for shell completion script generation.
#[derive(Subcommand, PartialEq, Debug)]
enum CompletionSubcommand {
    #[clap(about = "generate the autocompletion script for bash")]
    Bash,
    #[clap(about = "generate the autocompletion script for zsh")]
    Zsh,
    #[clap(about = "generate the autocompletion script for fish")]
    Fish,
}

/// Parses command-line arguments, merges configurations, and executes the appropriate command.
///
/// 1. Parses the raw command-line arguments once and keeps the matches.
/// 2. Merges any configuration specified via the `--config` option with `AppConfig`.
/// 3. Merges command-line overrides (`--debug`, `--log-level`) into `AppConfig`.
/// 4. Applies the resulting log level to the `log` facade.
/// 5. Runs a build, or the matched subcommand.
pub fn cli_match() -> Result<()> {
    let matches = Cli::command().get_matches();
    let cli = Cli::from_arg_matches(&matches)?;

    // Merge clap config file if the value is set
    AppConfig::merge_config(cli.config.as_deref())?;

    AppConfig::merge_args(&matches)?;

    let log_level: LogLevel = AppConfig::get("log_level")?;
    log::set_max_level(log_level.into());

    match &cli.command {
        Some(Commands::Completion { subcommand }) => {
            let mut app = Cli::command();
            match subcommand {
                CompletionSubcommand::Bash => {
                    generate(Bash, &mut app, BIN_NAME, &mut std::io::stdout());
                }
                CompletionSubcommand::Zsh => {
                    generate(Zsh, &mut app, BIN_NAME, &mut std::io::stdout());
                }
                CompletionSubcommand::Fish => {
                    generate(Fish, &mut app, BIN_NAME, &mut std::io::stdout());
                }
            }
        }
        Some(Commands::Config) => commands::config()?,
        None => {
            // clap requires both flags whenever no subcommand is given.
            if let (Some(input_folder), Some(output_file)) =
                (cli.input_folder.as_deref(), cli.output_file.as_deref())
            {
                commands::build(input_folder, output_file)?;
            }
        }
    }

    Ok(())
}
