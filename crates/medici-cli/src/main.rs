//! Medici - terminal demo of the Medici document assistant.
//!
//! Plays scripted terminal sessions: commands are typed character by
//! character, answers and citations fade in line by line. Runs as an
//! interactive TUI or headless, printing rendered frames.

#![deny(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::all)]
#![warn(unreachable_pub)]
#![deny(clippy::unwrap_used)]
#![cfg_attr(test, allow(clippy::unwrap_used))]

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;
mod config_bridge;
mod theme;
mod ui;

use commands::{config, list, play, snapshot};

/// Medici - scripted terminal demo
#[derive(Parser)]
#[command(name = "medici")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output (debug logging)
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Extra configuration file, merged above all others
    #[arg(short, long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Play scenarios in the interactive terminal (default)
    Play {
        /// Scenario to start with, by name or zero-based index
        #[arg(short, long)]
        scenario: Option<String>,

        /// Seed for typing jitter
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Render frames headlessly on virtual time
    Snapshot {
        /// Scenario to play, by name or zero-based index
        #[arg(short, long)]
        scenario: Option<String>,

        /// Frame width in columns
        #[arg(long, default_value_t = 100)]
        width: u16,

        /// Frame height in rows
        #[arg(long, default_value_t = 30)]
        height: u16,

        /// Seed for typing jitter
        #[arg(long)]
        seed: Option<u64>,

        /// Also print a frame at this many milliseconds (repeatable)
        #[arg(long = "at-ms", value_name = "MS")]
        at_ms: Vec<u64>,
    },

    /// List the built-in scenarios
    List,

    /// View configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(Subcommand)]
enum ConfigCommands {
    /// Show the resolved configuration and where each value came from
    Show {
        /// Output format: toml or json
        #[arg(long, default_value = "toml")]
        format: String,

        /// Only show one section
        #[arg(long)]
        section: Option<String>,
    },

    /// List the config file paths that are checked
    Paths,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let resolved = config_bridge::load(cli.config.as_deref())?;

    match cli.command.unwrap_or(Commands::Play {
        scenario: None,
        seed: None,
    }) {
        Commands::Play { scenario, seed } => {
            // The alternate screen owns stdout and stderr, so only file logging.
            let _guard = config_bridge::init_file_logging(&resolved.config, cli.verbose);
            play::run_play(&resolved.config, scenario.as_deref(), seed)
        },
        Commands::Snapshot {
            scenario,
            width,
            height,
            seed,
            at_ms,
        } => {
            let _guard = config_bridge::init_logging(&resolved.config, cli.verbose);
            snapshot::run_snapshot(
                &resolved.config,
                &snapshot::SnapshotOptions {
                    scenario,
                    width,
                    height,
                    seed,
                    at_ms,
                },
            )
        },
        Commands::List => {
            let _guard = config_bridge::init_logging(&resolved.config, cli.verbose);
            list::list_scenarios(&resolved.config);
            Ok(())
        },
        Commands::Config { command } => match command {
            ConfigCommands::Show { format, section } => {
                config::show_config(&resolved, &format, section.as_deref())
            },
            ConfigCommands::Paths => config::show_paths(),
        },
    }
}
