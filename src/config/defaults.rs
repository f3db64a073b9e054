//! Default values for configuration options.
//!
//! Two immutable tables, one per decoded structure. They are plain `const`
//! values, so any number of decoders may read them concurrently.

use std::time::Duration;

/// Fallback values for [`ClientConfig`](super::ClientConfig).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClientDefaults {
    /// Telegram Bot API base URL.
    pub api_url: &'static str,
    /// Number of delivery retries.
    pub retries: u32,
    /// Per-request timeout.
    pub timeout: Duration,
}

/// Fallback values for [`LoggerConfig`](super::LoggerConfig).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoggerDefaults {
    /// Message template.
    pub template: &'static str,
    /// Maximum buffered log data in bytes.
    pub max_buffer_size: u64,
    /// Forum topic; 0 means the main chat.
    pub message_thread_id: i64,
    /// Whether log lines are batched.
    pub batch_enabled: bool,
    /// Flush interval for pending batches.
    pub batch_flush_interval: Duration,
}

/// Client defaults.
pub const CLIENT: ClientDefaults = ClientDefaults {
    api_url: "https://api.telegram.org",
    retries: 5,
    timeout: Duration::from_secs(10),
};

/// Logger defaults.
pub const LOGGER: LoggerDefaults = LoggerDefaults {
    template: "{log}",
    max_buffer_size: 1024 * 1024,
    message_thread_id: 0,
    batch_enabled: true,
    batch_flush_interval: Duration::from_secs(3),
};
