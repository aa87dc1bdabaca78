// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Team → chat channel and team → issue-tracker project maps.
//!
//! ```yaml
//! "@datadog/agent-devx": "#agent-devx-ops"
//! "@datadog/agent-delivery": DEFAULT_SLACK_CHANNEL
//! ```

use crate::error::OwnersError;
use indexmap::IndexMap;
use serde_yaml::Value;
use std::path::Path;

/// Placeholder meaning "use the default chat channel".
pub const SLACK_PLACEHOLDER: &str = "DEFAULT_SLACK_CHANNEL";
/// Placeholder meaning "use the default issue-tracker project".
pub const JIRA_PLACEHOLDER: &str = "DEFAULT_JIRA_PROJECT";

/// Case-insensitive team handle → value map with a default.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChannelMap {
    entries: IndexMap<String, String>,
    default: String,
}

impl ChannelMap {
    /// Parse a YAML mapping, substituting `default` wherever a value equals
    /// `placeholder`. Non-string keys or values abort the load.
    pub fn parse(
        content: &str,
        path: &Path,
        placeholder: &str,
        default: &str,
    ) -> Result<Self, OwnersError> {
        let doc: Value = serde_yaml::from_str(content)
            .map_err(|source| OwnersError::Yaml { path: path.to_path_buf(), source })?;
        let mapping = match doc {
            Value::Null => return Ok(Self::from_entries(Vec::<(String, String)>::new(), default)),
            Value::Mapping(mapping) => mapping,
            _ => return Err(OwnersError::NotAMapping { path: path.to_path_buf() }),
        };

        let mut entries = IndexMap::with_capacity(mapping.len());
        for (key, value) in mapping {
            let (Value::String(key), Value::String(value)) = (&key, &value) else {
                return Err(OwnersError::NonStringEntry {
                    path: path.to_path_buf(),
                    key: render(&key),
                    value: render(&value),
                });
            };
            let value = if value == placeholder { default.to_string() } else { value.clone() };
            if let Some(previous) = entries.insert(key.to_lowercase(), value) {
                tracing::warn!(
                    path = %path.display(),
                    team = %key,
                    %previous,
                    "team mapped more than once ignoring case, keeping the last entry"
                );
            }
        }
        tracing::debug!(path = %path.display(), entries = entries.len(), "loaded channel map");
        Ok(Self { entries, default: default.to_string() })
    }

    pub fn load(path: &Path, placeholder: &str, default: &str) -> Result<Self, OwnersError> {
        let content = std::fs::read_to_string(path)
            .map_err(|source| OwnersError::Io { path: path.to_path_buf(), source })?;
        Self::parse(&content, path, placeholder, default)
    }

    pub fn from_entries<K, V>(entries: impl IntoIterator<Item = (K, V)>, default: &str) -> Self
    where
        K: AsRef<str>,
        V: Into<String>,
    {
        Self {
            entries: entries.into_iter().map(|(k, v)| (k.as_ref().to_lowercase(), v.into())).collect(),
            default: default.to_string(),
        }
    }

    pub fn get(&self, team: &str) -> Option<&str> {
        self.entries.get(&team.to_lowercase()).map(String::as_str)
    }

    pub fn contains(&self, team: &str) -> bool {
        self.entries.contains_key(&team.to_lowercase())
    }

    /// The team's value, or the default when the team is not mapped.
    pub fn get_or_default(&self, team: &str) -> &str {
        self.get(team).unwrap_or(&self.default)
    }

    pub fn default_value(&self) -> &str {
        &self.default
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

fn render(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::String(s) => s.clone(),
        other => serde_yaml::to_string(other).map(|s| s.trim().to_string()).unwrap_or_default(),
    }
}

#[cfg(test)]
#[path = "channels_tests.rs"]
mod tests;
