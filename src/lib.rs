//! telegram-log-driver: typed configuration for a Telegram logging sink
//!
//! Decodes the flat option map a container runtime hands to a logging
//! driver into validated client and sink settings.

pub mod config;
