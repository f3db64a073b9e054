//! TOML options file parsing.
//!
//! An options file is a flat table mirroring `--log-opt` pairs, for example
//! `retries = 3` or `filter-regex = "ERROR"`. Scalars are converted to their
//! string form, since that is what the host would hand over.

use std::collections::HashMap;
use std::path::Path;

use super::OptionsError;
use super::defaults;
use super::keys;

/// Raw options loaded from a TOML file.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct OptionsFile {
    /// Option key to raw value.
    pub options: HashMap<String, String>,
}

impl OptionsFile {
    /// Loads options from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self, OptionsError> {
        let content = std::fs::read_to_string(path).map_err(|e| OptionsError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;

        Self::parse(&content)
    }

    /// Parses options from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is invalid or a value is not a scalar.
    pub fn parse(content: &str) -> Result<Self, OptionsError> {
        let table: toml::Table = toml::from_str(content)?;

        let options = table
            .into_iter()
            .map(|(key, value)| {
                let raw = match value {
                    toml::Value::String(s) => s,
                    toml::Value::Integer(i) => i.to_string(),
                    toml::Value::Float(f) => f.to_string(),
                    toml::Value::Boolean(b) => b.to_string(),
                    other => {
                        return Err(OptionsError::UnsupportedValue {
                            key,
                            kind: other.type_str(),
                        });
                    }
                };
                Ok((key, raw))
            })
            .collect::<Result<_, _>>()?;

        Ok(Self { options })
    }

    /// Consumes the file, returning the option map.
    #[must_use]
    pub fn into_options(self) -> HashMap<String, String> {
        self.options
    }
}

/// Generates an options file listing every key with its default.
#[must_use]
pub fn default_options_template() -> String {
    let client = defaults::CLIENT;
    let logger = defaults::LOGGER;

    format!(
        r#"# telegram-log-driver options
# Each key mirrors a `--log-opt key=value` pair.

# Bot token (required)
{token} = ""

# Destination chat ID (required)
{chat_id} = ""

# Bot API base URL
# {url} = "{api_url}"

# Delivery retries after the first attempt
# {retries} = {retries_value}

# Per-request timeout
# {timeout} = "{timeout_value}"

# Message template
# {template} = "{template_value}"

# Only forward lines matching this pattern
# {filter_regex} = "ERROR|WARN"

# Maximum buffered log data; accepts KB/MB/GB suffixes (powers of 1024)
# {max_buffer_size} = "{max_buffer_size_value}"

# Forum topic to post into (0 for the main chat)
# {message_thread_id} = {message_thread_id_value}

# Group lines into a single message
# {batch_enabled} = {batch_enabled_value}

# How often a pending batch is flushed
# {batch_flush_interval} = "{batch_flush_interval_value}"

# Attach container labels / environment variables to messages
# {labels} = "com.example.service,com.example.team"
# {labels_regex} = "^com\\.example\\."
# {env} = "APP_ENV"
# {env_regex} = "^APP_"
"#,
        token = keys::TOKEN,
        chat_id = keys::CHAT_ID,
        url = keys::URL,
        api_url = client.api_url,
        retries = keys::RETRIES,
        retries_value = client.retries,
        timeout = keys::TIMEOUT,
        timeout_value = humantime::format_duration(client.timeout),
        template = keys::TEMPLATE,
        template_value = logger.template,
        filter_regex = keys::FILTER_REGEX,
        max_buffer_size = keys::MAX_BUFFER_SIZE,
        max_buffer_size_value = logger.max_buffer_size,
        message_thread_id = keys::MESSAGE_THREAD_ID,
        message_thread_id_value = logger.message_thread_id,
        batch_enabled = keys::BATCH_ENABLED,
        batch_enabled_value = logger.batch_enabled,
        batch_flush_interval = keys::BATCH_FLUSH_INTERVAL,
        batch_flush_interval_value = humantime::format_duration(logger.batch_flush_interval),
        labels = keys::LABELS,
        labels_regex = keys::LABELS_REGEX,
        env = keys::ENV,
        env_regex = keys::ENV_REGEX,
    )
}
