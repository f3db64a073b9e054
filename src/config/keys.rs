//! Option keys recognised in the raw configuration map.
//!
//! Use these constants instead of string literals so a typo becomes a
//! compile error rather than a silently ignored option.

/// Telegram Bot API base URL.
pub const URL: &str = "url";
/// Bot token.
pub const TOKEN: &str = "token";
/// Destination chat identifier.
pub const CHAT_ID: &str = "chat-id";
/// Number of delivery retries.
pub const RETRIES: &str = "retries";
/// Per-request timeout.
pub const TIMEOUT: &str = "timeout";

/// Message template.
pub const TEMPLATE: &str = "template";
/// Pattern a log line must match to be forwarded.
pub const FILTER_REGEX: &str = "filter-regex";
/// Maximum size of buffered log data.
pub const MAX_BUFFER_SIZE: &str = "max-buffer-size";
/// Forum topic to post into.
pub const MESSAGE_THREAD_ID: &str = "message-thread-id";
/// Whether log lines are batched into a single message.
pub const BATCH_ENABLED: &str = "batch-enabled";
/// How often a pending batch is flushed.
pub const BATCH_FLUSH_INTERVAL: &str = "batch-flush-interval";

/// Comma-separated container label names copied into the extra attributes.
pub const LABELS: &str = "labels";
/// Pattern selecting container labels by key.
pub const LABELS_REGEX: &str = "labels-regex";
/// Comma-separated environment variable names copied into the extra attributes.
pub const ENV: &str = "env";
/// Pattern selecting environment variables by name.
pub const ENV_REGEX: &str = "env-regex";

/// Every key the decoders understand, in decoding order.
pub const ALL: &[&str] = &[
    URL,
    TOKEN,
    CHAT_ID,
    RETRIES,
    TIMEOUT,
    LABELS,
    LABELS_REGEX,
    ENV,
    ENV_REGEX,
    TEMPLATE,
    FILTER_REGEX,
    MAX_BUFFER_SIZE,
    MESSAGE_THREAD_ID,
    BATCH_ENABLED,
    BATCH_FLUSH_INTERVAL,
];

/// Returns `true` if `key` is one of the recognised option keys.
#[must_use]
pub fn is_known(key: &str) -> bool {
    ALL.contains(&key)
}
