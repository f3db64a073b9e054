//! Parsers for the value grammars shared by both decoders.
//!
//! - Durations: `humantime` syntax (`"20s"`, `"1m 30s"`, `"250ms"`).
//! - Byte sizes: a number with an optional binary unit suffix, where every
//!   unit step multiplies by 1024 (`"100MB"` is 104 857 600 bytes).
//! - Booleans: `1`, `t`, `true`, `0`, `f`, `false` in lower, upper or
//!   title case.

use std::sync::LazyLock;
use std::time::Duration;

use regex::Regex;
use thiserror::Error;

/// Error produced when a value does not match its grammar.
#[derive(Debug, Error)]
pub enum UnitError {
    /// The value is not a duration.
    #[error("invalid duration '{input}': {source}")]
    Duration {
        /// The rejected input
        input: String,
        /// Underlying humantime error
        #[source]
        source: humantime::DurationError,
    },

    /// The value is not a byte-size quantity.
    #[error("invalid size '{input}'")]
    Size {
        /// The rejected input
        input: String,
    },

    /// The size parsed but is zero or negative.
    #[error("size must be greater than 0, got {value}")]
    NotPositive {
        /// The parsed value in bytes
        value: i64,
    },

    /// The value is not a boolean.
    #[error("invalid boolean '{input}'")]
    Bool {
        /// The rejected input
        input: String,
    },
}

// Optional sign, integer or decimal mantissa, optional unit letter, optional
// `i` (as in MiB) and optional `b`.
static SIZE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([+-]?\d+(?:\.\d+)?) ?([kKmMgGtTpP])?[iI]?[bB]?$")
        .expect("size pattern is a valid regex")
});

/// Parses a duration string such as `"20s"`.
///
/// # Errors
///
/// Returns [`UnitError::Duration`] if the input is not a valid duration.
pub fn parse_duration(input: &str) -> Result<Duration, UnitError> {
    humantime::parse_duration(input.trim()).map_err(|source| UnitError::Duration {
        input: input.to_string(),
        source,
    })
}

/// Parses a byte-size quantity with binary units.
///
/// A bare number is a count of bytes. `k`, `m`, `g`, `t` and `p` multiply by
/// successive powers of 1024; a trailing `i` and/or `b` is accepted and
/// ignored, so `"100M"`, `"100MB"` and `"100MiB"` are equal. Fractional
/// results are truncated toward zero. Negative values are returned as-is;
/// use [`parse_positive_byte_size`] when the quantity must be positive.
///
/// # Errors
///
/// Returns [`UnitError::Size`] if the input does not match the grammar or
/// does not fit in an `i64`.
pub fn parse_byte_size(input: &str) -> Result<i64, UnitError> {
    let malformed = || UnitError::Size {
        input: input.to_string(),
    };

    let captures = SIZE_PATTERN.captures(input.trim()).ok_or_else(malformed)?;
    let mantissa: f64 = captures[1].parse().map_err(|_| malformed())?;
    let exponent = captures
        .get(2)
        .map_or(0, |unit| unit_exponent(unit.as_str()));

    let bytes = mantissa * 1024_f64.powi(exponent);
    // i64::MAX as f64 rounds up to 2^63, so the upper bound is exclusive.
    #[allow(clippy::cast_precision_loss)]
    let limit = i64::MAX as f64;
    if !bytes.is_finite() || bytes >= limit || bytes < -limit {
        return Err(malformed());
    }

    #[allow(clippy::cast_possible_truncation)]
    let bytes = bytes as i64;
    Ok(bytes)
}

/// Parses a byte-size quantity that must be strictly positive.
///
/// # Errors
///
/// Returns [`UnitError::Size`] for malformed input and
/// [`UnitError::NotPositive`] for zero or negative sizes.
pub fn parse_positive_byte_size(input: &str) -> Result<u64, UnitError> {
    let value = parse_byte_size(input)?;
    u64::try_from(value)
        .ok()
        .filter(|bytes| *bytes > 0)
        .ok_or(UnitError::NotPositive { value })
}

/// Parses a boolean flag.
///
/// # Errors
///
/// Returns [`UnitError::Bool`] for anything but the accepted spellings.
pub fn parse_bool(input: &str) -> Result<bool, UnitError> {
    match input.trim() {
        "1" | "t" | "T" | "true" | "TRUE" | "True" => Ok(true),
        "0" | "f" | "F" | "false" | "FALSE" | "False" => Ok(false),
        _ => Err(UnitError::Bool {
            input: input.to_string(),
        }),
    }
}

fn unit_exponent(unit: &str) -> i32 {
    match unit.to_ascii_lowercase().as_str() {
        "k" => 1,
        "m" => 2,
        "g" => 3,
        "t" => 4,
        "p" => 5,
        _ => 0,
    }
}
