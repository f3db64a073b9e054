//! Formatting, batching and filtering settings for a container's log sink.

use std::collections::HashMap;
use std::fmt;
use std::time::Duration;

use regex::Regex;

use super::client::{ClientConfig, parse_client_config};
use super::defaults;
use super::error::LoggerConfigError;
use super::keys;
use super::units;
use super::ContainerDetails;

/// Complete configuration of one logging sink.
///
/// Built once from the container's options and never mutated afterwards.
#[derive(Debug, Clone)]
pub struct LoggerConfig {
    /// Delivery settings.
    pub client: ClientConfig,

    /// Message template, rendered downstream.
    pub template: String,

    /// Labels and environment variables selected for inclusion in messages.
    pub attrs: HashMap<String, String>,

    /// Upper bound on buffered log data, in bytes. Always positive.
    pub max_buffer_size: u64,

    /// Only lines matching this pattern are forwarded; `None` forwards all.
    pub filter_regex: Option<Regex>,

    /// Forum topic to post into; 0 posts into the main chat.
    pub message_thread_id: i64,

    /// Whether lines are grouped into a single message.
    pub batch_enabled: bool,

    /// How often a pending batch is flushed. Positive when batching is enabled.
    pub batch_flush_interval: Duration,
}

impl LoggerConfig {
    /// Returns the forum topic, or `None` for the main chat.
    #[must_use]
    pub const fn message_thread(&self) -> Option<i64> {
        if self.message_thread_id == 0 {
            None
        } else {
            Some(self.message_thread_id)
        }
    }

    /// Returns `true` if `line` passes the filter.
    #[must_use]
    pub fn accepts(&self, line: &str) -> bool {
        self.filter_regex.as_ref().is_none_or(|re| re.is_match(line))
    }
}

// `Regex` has no `PartialEq`; two filters are equal when built from the same pattern.
impl PartialEq for LoggerConfig {
    fn eq(&self, other: &Self) -> bool {
        self.client == other.client
            && self.template == other.template
            && self.attrs == other.attrs
            && self.max_buffer_size == other.max_buffer_size
            && self.filter_regex.as_ref().map(Regex::as_str)
                == other.filter_regex.as_ref().map(Regex::as_str)
            && self.message_thread_id == other.message_thread_id
            && self.batch_enabled == other.batch_enabled
            && self.batch_flush_interval == other.batch_flush_interval
    }
}

impl Eq for LoggerConfig {}

impl fmt::Display for LoggerConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let filter = self.filter_regex.as_ref().map_or("none", Regex::as_str);
        let thread = self
            .message_thread()
            .map_or_else(|| "none".to_string(), |id| id.to_string());

        write!(
            f,
            "LoggerConfig {{ {}, template: {:?}, attrs: {}, max_buffer_size: {}B, \
             filter: {filter}, message_thread_id: {thread}, batch: {} every {} }}",
            self.client,
            self.template,
            self.attrs.len(),
            self.max_buffer_size,
            if self.batch_enabled { "on" } else { "off" },
            humantime::format_duration(self.batch_flush_interval),
        )
    }
}

/// Decodes the full sink configuration from a container's details.
///
/// The client settings are decoded first and embedded; then extra
/// attributes, template, filter, buffer size, thread id, batch flag and
/// flush interval, in that order. The first failure is returned and no
/// further option is looked at. Absent options take their value from
/// [`defaults::LOGGER`].
///
/// # Errors
///
/// Returns a [`LoggerConfigError`] naming the stage or option that failed.
///
/// # Example
///
/// ```
/// use std::collections::HashMap;
/// use telegram_log_driver::config::{ContainerDetails, parse_logger_config};
///
/// let details = ContainerDetails::from_options(HashMap::from([
///     ("token".to_string(), "123:abc".to_string()),
///     ("chat-id".to_string(), "-10042".to_string()),
///     ("max-buffer-size".to_string(), "100MB".to_string()),
/// ]));
///
/// let config = parse_logger_config(&details).unwrap();
/// assert_eq!(config.max_buffer_size, 100 * 1024 * 1024);
/// assert!(config.attrs.is_empty());
/// ```
pub fn parse_logger_config(details: &ContainerDetails) -> Result<LoggerConfig, LoggerConfigError> {
    let client = parse_client_config(details)?;
    let attrs = details.extra_attributes()?;

    let template = details
        .non_empty_option(keys::TEMPLATE)
        .unwrap_or(defaults::LOGGER.template)
        .to_string();

    let filter_regex = resolve_filter_regex(details)?;
    let max_buffer_size = resolve_max_buffer_size(details)?;
    let message_thread_id = resolve_message_thread_id(details);
    let batch_enabled = resolve_batch_enabled(details)?;
    let batch_flush_interval = resolve_batch_flush_interval(details)?;

    if batch_enabled && batch_flush_interval.is_zero() {
        return Err(LoggerConfigError::ZeroBatchFlushInterval);
    }

    let config = LoggerConfig {
        client,
        template,
        attrs,
        max_buffer_size,
        filter_regex,
        message_thread_id,
        batch_enabled,
        batch_flush_interval,
    };
    tracing::debug!(container = details.id(), "Decoded logger config: {config}");

    Ok(config)
}

fn resolve_filter_regex(details: &ContainerDetails) -> Result<Option<Regex>, LoggerConfigError> {
    details
        .option(keys::FILTER_REGEX)
        .map(Regex::new)
        .transpose()
        .map_err(|source| LoggerConfigError::FilterRegex { source })
}

fn resolve_max_buffer_size(details: &ContainerDetails) -> Result<u64, LoggerConfigError> {
    details
        .option(keys::MAX_BUFFER_SIZE)
        .map_or(
            Ok(defaults::LOGGER.max_buffer_size),
            units::parse_positive_byte_size,
        )
        .map_err(|source| LoggerConfigError::MaxBufferSize { source })
}

fn resolve_message_thread_id(details: &ContainerDetails) -> i64 {
    let Some(raw) = details.option(keys::MESSAGE_THREAD_ID) else {
        return defaults::LOGGER.message_thread_id;
    };

    raw.trim().parse().unwrap_or_else(|e| {
        tracing::warn!(
            container = details.id(),
            value = raw,
            "Ignoring malformed \"{}\" option: {e}",
            keys::MESSAGE_THREAD_ID
        );
        defaults::LOGGER.message_thread_id
    })
}

fn resolve_batch_enabled(details: &ContainerDetails) -> Result<bool, LoggerConfigError> {
    details
        .option(keys::BATCH_ENABLED)
        .map_or(Ok(defaults::LOGGER.batch_enabled), units::parse_bool)
        .map_err(|source| LoggerConfigError::BatchEnabled { source })
}

fn resolve_batch_flush_interval(details: &ContainerDetails) -> Result<Duration, LoggerConfigError> {
    details
        .option(keys::BATCH_FLUSH_INTERVAL)
        .map_or(
            Ok(defaults::LOGGER.batch_flush_interval),
            units::parse_duration,
        )
        .map_err(|source| LoggerConfigError::BatchFlushInterval { source })
}
