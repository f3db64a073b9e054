//! Configuration layer for telegram-log-driver.
//!
//! This module provides:
//! - Container details as sent by the host ([`ContainerDetails`])
//! - Client settings decoding ([`parse_client_config`], [`ClientConfig`])
//! - Sink settings decoding ([`parse_logger_config`], [`LoggerConfig`])
//! - Value grammars for durations, byte sizes and booleans ([`units`])
//! - Option keys ([`keys`]) and default values ([`defaults`])
//! - CLI argument parsing and option sources ([`Cli`], [`load_details`])
//!
//! # Decoding rules
//!
//! Every option is optional from the decoder's point of view. An absent key
//! takes its default; a present key that fails to parse is always an error,
//! never silently replaced by the default. The one exception is
//! `message-thread-id`, which falls back to the main chat when malformed.
//!
//! Decoding stops at the first error. Errors name the option (or stage) that
//! failed and carry the underlying cause as their `source`.

mod cli;
mod client;
pub mod defaults;
mod details;
mod error;
pub mod keys;
mod logger;
mod options;
mod sources;
pub mod units;

#[cfg(test)]
mod details_tests;
#[cfg(test)]
mod options_tests;

pub use cli::{Cli, Command};
pub use client::{ClientConfig, parse_client_config};
pub use details::ContainerDetails;
pub use error::{AttrsError, ClientConfigError, LoggerConfigError, OptionsError};
pub use logger::{LoggerConfig, parse_logger_config};
pub use options::{OptionsFile, default_options_template};
pub use sources::{load_details, merge_details, write_default_options};
