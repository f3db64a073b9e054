//! CLI argument parsing using clap.
//!
//! Defines the command-line interface with all options and subcommands.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// telegram-log-driver: check logging options before attaching a sink
///
/// Decodes a container's logging options exactly as the driver would at
/// startup and reports the resolved configuration or the first error.
#[derive(Debug, Parser)]
#[command(name = "telegram-log-driver")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to run (default: check)
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Container details JSON, as sent by the daemon in `StartLogging`
    #[arg(long, value_name = "FILE", global = true)]
    pub details: Option<PathBuf>,

    /// TOML options file
    #[arg(long, short, value_name = "FILE", global = true)]
    pub config: Option<PathBuf>,

    /// Option override in 'KEY=VALUE' format (can be specified multiple times)
    #[arg(long = "opt", short = 'o', value_name = "KEY=VALUE", global = true)]
    pub options: Vec<String>,

    /// Enable verbose logging
    #[arg(long, short, global = true)]
    pub verbose: bool,
}

/// Subcommands for telegram-log-driver
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Decode the options and print the resolved configuration
    Check,

    /// Generate an options file with every default
    Init {
        /// Output path for the options file
        #[arg(long, default_value = "log-opts.toml")]
        output: PathBuf,
    },
}

impl Cli {
    /// Parses CLI arguments from the command line.
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Parses CLI arguments from an iterator (useful for testing).
    pub fn parse_from_iter<I, T>(iter: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        Self::parse_from(iter)
    }

    /// Returns true if this is the init command.
    #[must_use]
    pub const fn is_init(&self) -> bool {
        matches!(self.command, Some(Command::Init { .. }))
    }
}
