//! Connection and delivery settings for the Telegram client.

use std::fmt;
use std::time::Duration;

use super::ContainerDetails;
use super::defaults;
use super::error::ClientConfigError;
use super::keys;
use super::units;

/// Settings consumed by the HTTP delivery client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Bot API base URL.
    pub api_url: String,

    /// Bot token. Copied through; presence is the host's responsibility.
    pub token: String,

    /// Destination chat. Copied through like the token.
    pub chat_id: String,

    /// Number of delivery retries after the first attempt.
    pub retries: u32,

    /// Per-request timeout.
    pub timeout: Duration,
}

impl fmt::Display for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let token = if self.token.is_empty() {
            "<unset>"
        } else {
            "<redacted>"
        };

        write!(
            f,
            "api_url: {}, token: {token}, chat_id: {}, retries: {}, timeout: {}",
            self.api_url,
            self.chat_id,
            self.retries,
            humantime::format_duration(self.timeout),
        )
    }
}

/// Decodes the client settings from a container's raw options.
///
/// Fields are decoded in a fixed order (URL, token, chat id, retries,
/// timeout) and the first failure is returned. Absent options take their
/// value from [`defaults::CLIENT`].
///
/// # Errors
///
/// - [`ClientConfigError::ParseRetries`] if `retries` is not an integer
/// - [`ClientConfigError::InvalidRetries`] if `retries` is negative
/// - [`ClientConfigError::ParseTimeout`] if `timeout` is not a duration
///
/// # Example
///
/// ```
/// use std::collections::HashMap;
/// use telegram_log_driver::config::{ContainerDetails, parse_client_config};
///
/// let details = ContainerDetails::from_options(HashMap::from([
///     ("token".to_string(), "123:abc".to_string()),
///     ("chat-id".to_string(), "-10042".to_string()),
///     ("retries".to_string(), "2".to_string()),
/// ]));
///
/// let config = parse_client_config(&details).unwrap();
/// assert_eq!(config.retries, 2);
/// assert_eq!(config.api_url, "https://api.telegram.org");
/// ```
pub fn parse_client_config(details: &ContainerDetails) -> Result<ClientConfig, ClientConfigError> {
    let api_url = details
        .non_empty_option(keys::URL)
        .unwrap_or(defaults::CLIENT.api_url)
        .to_string();
    let token = details.option(keys::TOKEN).unwrap_or_default().to_string();
    let chat_id = details.option(keys::CHAT_ID).unwrap_or_default().to_string();
    let retries = resolve_retries(details)?;
    let timeout = resolve_timeout(details)?;

    Ok(ClientConfig {
        api_url,
        token,
        chat_id,
        retries,
        timeout,
    })
}

fn resolve_retries(details: &ContainerDetails) -> Result<u32, ClientConfigError> {
    let Some(raw) = details.option(keys::RETRIES) else {
        return Ok(defaults::CLIENT.retries);
    };

    let value: i64 = raw
        .trim()
        .parse()
        .map_err(|source| ClientConfigError::ParseRetries { source })?;

    u32::try_from(value).map_err(|_| ClientConfigError::InvalidRetries { value })
}

fn resolve_timeout(details: &ContainerDetails) -> Result<Duration, ClientConfigError> {
    details
        .option(keys::TIMEOUT)
        .map_or(Ok(defaults::CLIENT.timeout), units::parse_duration)
        .map_err(|source| ClientConfigError::ParseTimeout { source })
}
