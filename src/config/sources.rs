//! Assembles container details from the sources given on the command line.
//!
//! # Priority
//!
//! Option values are resolved with the following priority (highest to lowest):
//!
//! 1. **`--opt KEY=VALUE` overrides**
//! 2. **TOML options file** (`--config`)
//! 3. **`Config` of the container details file** (`--details`)
//!
//! Labels and environment only ever come from the details file.

use std::path::Path;

use super::OptionsError;
use super::cli::Cli;
use super::details::ContainerDetails;
use super::keys;
use super::options::{OptionsFile, default_options_template};

/// Loads and merges every option source named by `cli`.
///
/// Unknown keys are kept, since other collaborators may read them, but each
/// one is reported with a warning.
///
/// # Errors
///
/// Returns an error if a file cannot be read or parsed, or an override is
/// not in `KEY=VALUE` form.
pub fn load_details(cli: &Cli) -> Result<ContainerDetails, OptionsError> {
    let file = cli.config.as_deref().map(OptionsFile::load).transpose()?;
    merge_details(cli, file)
}

/// Merges already-loaded sources; split from [`load_details`] for testing.
///
/// # Errors
///
/// Returns an error if the details file cannot be read or parsed, or an
/// override is not in `KEY=VALUE` form.
pub fn merge_details(
    cli: &Cli,
    file: Option<OptionsFile>,
) -> Result<ContainerDetails, OptionsError> {
    let mut details = match cli.details.as_deref() {
        Some(path) => read_details(path)?,
        None => ContainerDetails::default(),
    };

    if let Some(file) = file {
        details.config.extend(file.into_options());
    }

    for raw in &cli.options {
        let (key, value) = parse_override(raw)?;
        details.config.insert(key, value);
    }

    for key in details.config.keys().filter(|k| !keys::is_known(k)) {
        tracing::warn!("Unknown option '{key}' will be ignored");
    }

    Ok(details)
}

/// Writes the default options template to a file.
///
/// # Errors
///
/// Returns an error if the file cannot be written.
pub fn write_default_options(path: &Path) -> Result<(), OptionsError> {
    std::fs::write(path, default_options_template()).map_err(|e| OptionsError::FileWrite {
        path: path.to_path_buf(),
        source: e,
    })
}

fn read_details(path: &Path) -> Result<ContainerDetails, OptionsError> {
    let content = std::fs::read_to_string(path).map_err(|e| OptionsError::FileRead {
        path: path.to_path_buf(),
        source: e,
    })?;

    Ok(ContainerDetails::from_json(&content)?)
}

fn parse_override(raw: &str) -> Result<(String, String), OptionsError> {
    match raw.split_once('=') {
        Some((key, value)) if !key.trim().is_empty() => {
            Ok((key.trim().to_string(), value.to_string()))
        }
        _ => Err(OptionsError::InvalidOverride {
            value: raw.to_string(),
        }),
    }
}
