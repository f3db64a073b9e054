//! telegram-log-driver
//!
//! Entry point: decodes logging options the way the driver does at startup.

use std::process::ExitCode;

use telegram_log_driver::config::{
    Cli, Command, LoggerConfig, load_details, parse_logger_config, write_default_options,
};

mod app;

use app::{exit_code, print_config_hint, print_input_hint, setup_tracing};

/// Main entry point.
///
/// Excluded from coverage as it's the thin wrapper around testable components.
#[cfg(not(tarpaulin_include))]
fn main() -> ExitCode {
    let cli = Cli::parse_args();

    // Handle init subcommand
    if let Some(Command::Init { output }) = &cli.command {
        return handle_init(output);
    }

    setup_tracing(cli.verbose);

    let details = match load_details(&cli) {
        Ok(details) => details,
        Err(e) => {
            eprintln!("Input error: {e}");
            print_input_hint(&e);
            return exit_code::input_error();
        }
    };

    match parse_logger_config(&details) {
        Ok(config) => {
            report(&config);
            exit_code::SUCCESS
        }
        Err(e) => {
            eprintln!("Configuration error: {e}");
            print_config_hint(&e);
            exit_code::CONFIG_ERROR
        }
    }
}

/// Handles the `init` subcommand.
fn handle_init(output: &std::path::Path) -> ExitCode {
    match write_default_options(output) {
        Ok(()) => {
            println!("Options template written to: {}", output.display());
            exit_code::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {e}");
            exit_code::input_error()
        }
    }
}

fn report(config: &LoggerConfig) {
    tracing::info!("{config}");

    if config.client.token.is_empty() || config.client.chat_id.is_empty() {
        tracing::warn!("\"token\" and \"chat-id\" must be set before the driver can deliver logs");
    }

    let mut attrs: Vec<_> = config.attrs.iter().collect();
    attrs.sort();
    for (key, value) in attrs {
        tracing::debug!("attr {key}={value}");
    }
}
