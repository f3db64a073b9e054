//! Application startup and utilities.
//!
//! This module contains exit codes, tracing setup, and error hints
//! that support the main entry point.

use telegram_log_driver::config::{LoggerConfigError, OptionsError};
use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Application exit codes.
pub mod exit_code {
    use std::process::ExitCode;

    /// Success (exit code 0).
    pub const SUCCESS: ExitCode = ExitCode::SUCCESS;

    /// Configuration error (exit code 1) - an option failed to decode.
    pub const CONFIG_ERROR: ExitCode = ExitCode::FAILURE;

    /// Input error (exit code 2) - unreadable or malformed input files.
    ///
    /// Note: This is a function rather than a constant because `ExitCode::from()` is not `const fn`.
    pub fn input_error() -> ExitCode {
        ExitCode::from(2)
    }
}

/// Prints helpful hints for common configuration errors.
pub fn print_config_hint(error: &LoggerConfigError) {
    match error {
        LoggerConfigError::FilterRegex { .. } | LoggerConfigError::ExtraAttributes(_) => {
            eprintln!("\nPatterns use Rust regex syntax: https://docs.rs/regex/latest/regex/#syntax");
        }
        LoggerConfigError::MaxBufferSize { .. } => {
            eprintln!("\nSizes are a positive number with an optional KB/MB/GB suffix, e.g. \"100MB\".");
        }
        _ => {
            eprintln!(
                "\nRun 'telegram-log-driver init' to generate an options file with every default."
            );
        }
    }
}

/// Prints helpful hints for input errors.
pub fn print_input_hint(error: &OptionsError) {
    if let OptionsError::FileRead { .. } = error {
        eprintln!("\nRun 'telegram-log-driver init' to generate an options file.");
    }
}

/// Sets up the tracing subscriber for logging.
pub fn setup_tracing(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::INFO };

    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}
