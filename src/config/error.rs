//! Error types for configuration decoding.
//!
//! Each decoder has its own error enum. Wrapping variants keep the cause
//! reachable through [`std::error::Error::source`] and also print it, so the
//! message alone is enough for an operator.

use std::num::ParseIntError;
use std::path::PathBuf;

use thiserror::Error;

use super::units::UnitError;

/// Error returned by [`parse_client_config`](super::parse_client_config).
#[derive(Debug, Error)]
pub enum ClientConfigError {
    /// `retries` is not an integer.
    #[error("failed to parse \"retries\" option: {source}")]
    ParseRetries {
        /// Underlying integer parse error
        #[source]
        source: ParseIntError,
    },

    /// `retries` is an integer outside the allowed range.
    #[error("invalid \"retries\" option: {value} is not in 0..={}", u32::MAX)]
    InvalidRetries {
        /// The parsed value
        value: i64,
    },

    /// `timeout` is not a duration.
    #[error("failed to parse \"timeout\" option: {source}")]
    ParseTimeout {
        /// Underlying duration error
        #[source]
        source: UnitError,
    },
}

/// Error returned by [`parse_logger_config`](super::parse_logger_config).
#[derive(Debug, Error)]
pub enum LoggerConfigError {
    /// The embedded client configuration is invalid.
    #[error("failed to parse client config: {0}")]
    Client(#[from] ClientConfigError),

    /// A label or environment selection pattern is invalid.
    #[error("failed to parse extra attributes: {0}")]
    ExtraAttributes(#[from] AttrsError),

    /// `filter-regex` does not compile.
    #[error("failed to parse \"filter-regex\": {source}")]
    FilterRegex {
        /// Underlying regex error
        #[source]
        source: regex::Error,
    },

    /// `max-buffer-size` is malformed or not positive.
    #[error("failed to parse \"max-buffer-size\" option: {source}")]
    MaxBufferSize {
        /// Underlying size error
        #[source]
        source: UnitError,
    },

    /// `batch-enabled` is not a boolean.
    #[error("failed to parse \"batch-enabled\" option: {source}")]
    BatchEnabled {
        /// Underlying boolean error
        #[source]
        source: UnitError,
    },

    /// `batch-flush-interval` is not a duration.
    #[error("failed to parse \"batch-flush-interval\": {source}")]
    BatchFlushInterval {
        /// Underlying duration error
        #[source]
        source: UnitError,
    },

    /// Batching is enabled with a zero flush interval.
    #[error("invalid \"batch-flush-interval\" option: must be greater than 0 when batching is enabled")]
    ZeroBatchFlushInterval,
}

/// Error produced while selecting extra attributes.
#[derive(Debug, Error)]
pub enum AttrsError {
    /// `labels-regex` does not compile.
    #[error("invalid \"labels-regex\" pattern: {source}")]
    LabelsRegex {
        /// Underlying regex error
        #[source]
        source: regex::Error,
    },

    /// `env-regex` does not compile.
    #[error("invalid \"env-regex\" pattern: {source}")]
    EnvRegex {
        /// Underlying regex error
        #[source]
        source: regex::Error,
    },
}

/// Error type for loading option sources from disk or the command line.
#[derive(Debug, Error)]
pub enum OptionsError {
    /// Failed to read an input file.
    #[error("Failed to read '{}': {source}", path.display())]
    FileRead {
        /// Path to the file
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Failed to write the options template (for init command).
    #[error("Failed to write options file '{}': {source}", path.display())]
    FileWrite {
        /// Path to the file
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The options file is not valid TOML.
    #[error("Failed to parse TOML options: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// The container details file is not valid JSON.
    #[error("Failed to parse container details: {0}")]
    JsonParse(#[from] serde_json::Error),

    /// An option in the TOML file is a table, array or datetime.
    #[error("Unsupported value for option '{key}': expected a string, number or boolean, got {kind}")]
    UnsupportedValue {
        /// The option key
        key: String,
        /// TOML type name of the rejected value
        kind: &'static str,
    },

    /// A command-line override is not in `KEY=VALUE` form.
    #[error("Invalid option override '{value}': expected 'KEY=VALUE'")]
    InvalidOverride {
        /// The rejected argument
        value: String,
    },
}
