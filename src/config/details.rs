//! Per-container description handed over by the host runtime.
//!
//! The JSON shape follows the `Info` object a Docker logging plugin receives
//! in its `StartLogging` request. Go encodes empty maps and slices as `null`,
//! so every collection field tolerates it.

use std::collections::HashMap;

use regex::Regex;
use serde::{Deserialize, Deserializer};

use super::error::AttrsError;
use super::keys;

/// Metadata about the container a sink is attached to, including its raw
/// logging options.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct ContainerDetails {
    /// Raw logging options (`--log-opt key=value`).
    #[serde(deserialize_with = "null_as_default")]
    pub config: HashMap<String, String>,

    /// Full container ID.
    #[serde(rename = "ContainerID")]
    pub container_id: String,

    /// Container name as reported by the daemon (with a leading `/`).
    pub container_name: String,

    /// Entrypoint path.
    pub container_entrypoint: String,

    /// Entrypoint arguments.
    #[serde(deserialize_with = "null_as_default")]
    pub container_args: Vec<String>,

    /// Image ID.
    #[serde(rename = "ContainerImageID")]
    pub container_image_id: String,

    /// Image name.
    pub container_image_name: String,

    /// Creation timestamp, as sent by the daemon.
    pub container_created: String,

    /// Environment in `KEY=VALUE` form.
    #[serde(deserialize_with = "null_as_default")]
    pub container_env: Vec<String>,

    /// Container labels.
    #[serde(deserialize_with = "null_as_default")]
    pub container_labels: HashMap<String, String>,

    /// Path of the daemon-side log file.
    pub log_path: String,

    /// Name of the daemon.
    pub daemon_name: String,
}

impl ContainerDetails {
    /// Creates details carrying only raw options.
    #[must_use]
    pub fn from_options(config: HashMap<String, String>) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// Parses details from the daemon's JSON encoding.
    ///
    /// # Errors
    ///
    /// Returns an error if the input is not valid JSON or has the wrong shape.
    pub fn from_json(content: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(content)
    }

    /// Replaces the container labels.
    #[must_use]
    pub fn with_labels(mut self, labels: HashMap<String, String>) -> Self {
        self.container_labels = labels;
        self
    }

    /// Replaces the container environment.
    #[must_use]
    pub fn with_env(mut self, env: Vec<String>) -> Self {
        self.container_env = env;
        self
    }

    /// Returns the raw value of an option, if set.
    #[must_use]
    pub fn option(&self, key: &str) -> Option<&str> {
        self.config.get(key).map(String::as_str)
    }

    /// Returns the raw value of an option, treating an empty string as unset.
    #[must_use]
    pub fn non_empty_option(&self, key: &str) -> Option<&str> {
        self.option(key).filter(|value| !value.is_empty())
    }

    /// Short (12 character) container ID.
    #[must_use]
    pub fn id(&self) -> &str {
        self.container_id
            .get(..12)
            .unwrap_or(self.container_id.as_str())
    }

    /// Container name without the leading `/`.
    #[must_use]
    pub fn name(&self) -> &str {
        self.container_name
            .strip_prefix('/')
            .unwrap_or(&self.container_name)
    }

    /// Selects labels and environment variables into an attribute map.
    ///
    /// Four options drive the selection:
    /// - `labels`: comma-separated label names
    /// - `labels-regex`: pattern matched against every label key
    /// - `env`: comma-separated variable names
    /// - `env-regex`: pattern matched against every variable name
    ///
    /// Names listed but not present on the container are skipped. The result
    /// is empty when none of the options is set.
    ///
    /// # Errors
    ///
    /// Returns an error if `labels-regex` or `env-regex` does not compile.
    pub fn extra_attributes(&self) -> Result<HashMap<String, String>, AttrsError> {
        let mut attrs = HashMap::new();

        select_listed(&mut attrs, self.non_empty_option(keys::LABELS), |name| {
            self.container_labels.get(name).map(String::as_str)
        });

        if let Some(pattern) = self.non_empty_option(keys::LABELS_REGEX) {
            let re = Regex::new(pattern).map_err(|source| AttrsError::LabelsRegex { source })?;
            select_matching(&mut attrs, &re, self.labels());
        }

        let env: HashMap<&str, &str> = self
            .container_env
            .iter()
            .filter_map(|entry| entry.split_once('='))
            .collect();

        select_listed(&mut attrs, self.non_empty_option(keys::ENV), |name| {
            env.get(name).copied()
        });

        if let Some(pattern) = self.non_empty_option(keys::ENV_REGEX) {
            let re = Regex::new(pattern).map_err(|source| AttrsError::EnvRegex { source })?;
            select_matching(&mut attrs, &re, env.iter().map(|(k, v)| (*k, *v)));
        }

        Ok(attrs)
    }

    fn labels(&self) -> impl Iterator<Item = (&str, &str)> {
        self.container_labels
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

fn select_listed<'a>(
    attrs: &mut HashMap<String, String>,
    list: Option<&str>,
    lookup: impl Fn(&str) -> Option<&'a str>,
) {
    let Some(list) = list else {
        return;
    };

    for name in list.split(',').map(str::trim).filter(|n| !n.is_empty()) {
        if let Some(value) = lookup(name) {
            attrs.insert(name.to_string(), value.to_string());
        }
    }
}

fn select_matching<'a>(
    attrs: &mut HashMap<String, String>,
    re: &Regex,
    entries: impl Iterator<Item = (&'a str, &'a str)>,
) {
    for (key, value) in entries.filter(|(key, _)| re.is_match(key)) {
        attrs.insert(key.to_string(), value.to_string());
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}
