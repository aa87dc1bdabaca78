// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Triage configuration file (`triage.toml`).
//!
//! Every key is optional; missing keys fall back to the defaults used by the
//! datadog-agent pipelines.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const DEFAULT_GITHUB_ORG_URL: &str = "https://github.com/DataDog";
pub const DEFAULT_FALLBACK_TEAM: &str = "@DataDog/agent-e2e-testing";
pub const DEFAULT_SLACK_CHANNEL: &str = "#agent-developer-experience";
pub const DEFAULT_JIRA_PROJECT: &str = "AGNTR";
pub const DEFAULT_PIPELINE_CHANNEL: &str = "#datadog-agent-pipelines";
pub const DEFAULT_PACKAGE_PREFIX: &str = "github.com/DataDog/datadog-agent/";

/// Errors from loading the configuration file
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config {}: {source}", path.display())]
    Toml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TriageConfig {
    /// GitHub organization URL used for commit and pull-request links
    pub github_org_url: String,
    /// Team notified of mandatory e2e infrastructure failures
    pub fallback_team: String,
    /// Channel substituted for `DEFAULT_SLACK_CHANNEL` and unmapped teams
    pub default_slack_channel: String,
    /// Project substituted for `DEFAULT_JIRA_PROJECT` and unmapped teams
    pub default_jira_project: String,
    /// Channel receiving the pipeline-wide failure message
    pub pipeline_channel: String,
    /// Module prefix stripped from test packages before ownership lookup
    pub package_prefix: String,
    /// Job-name patterns of the e2e infrastructure job set
    pub e2e_infra_jobs: Vec<String>,
}

impl Default for TriageConfig {
    fn default() -> Self {
        Self {
            github_org_url: DEFAULT_GITHUB_ORG_URL.to_string(),
            fallback_team: DEFAULT_FALLBACK_TEAM.to_string(),
            default_slack_channel: DEFAULT_SLACK_CHANNEL.to_string(),
            default_jira_project: DEFAULT_JIRA_PROJECT.to_string(),
            pipeline_channel: DEFAULT_PIPELINE_CHANNEL.to_string(),
            package_prefix: DEFAULT_PACKAGE_PREFIX.to_string(),
            e2e_infra_jobs: Vec::new(),
        }
    }
}

impl TriageConfig {
    pub fn parse(content: &str, path: &Path) -> Result<Self, ConfigError> {
        toml::from_str(content)
            .map_err(|source| ConfigError::Toml { path: path.to_path_buf(), source })
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)
            .map_err(|source| ConfigError::Io { path: path.to_path_buf(), source })?;
        Self::parse(&content, path)
    }

    /// Load `path` if given, otherwise use the defaults.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
