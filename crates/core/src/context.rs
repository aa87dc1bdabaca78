// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Pipeline metadata used to give notifications their context.

use serde::{Deserialize, Serialize};

/// Commit and pipeline metadata for one pipeline run.
///
/// Built once per run from CI metadata and never mutated afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationContext {
    /// Project title, also the GitHub repository name
    pub project_title: String,
    /// Project URL on the CI provider
    pub project_url: String,
    pub commit_sha: String,
    pub commit_short_sha: String,
    pub commit_title: String,
    /// Branch or tag the pipeline ran for
    pub commit_ref: String,
    pub pipeline_id: String,
    pub pipeline_url: String,
    pub author: String,
}

impl NotificationContext {
    /// Short form of a commit SHA when the provider does not supply one.
    pub fn short_sha(sha: &str) -> &str {
        const SHORT_SHA_LEN: usize = 8;
        match sha.char_indices().nth(SHORT_SHA_LEN) {
            Some((end, _)) => &sha[..end],
            None => sha,
        }
    }

    /// Commit link on the CI provider.
    pub fn provider_commit_url(&self) -> String {
        format!("{}/commit/{}", self.project_url, self.commit_sha)
    }

    /// Commit link on GitHub under the given organization URL.
    pub fn github_commit_url(&self, org_url: &str) -> String {
        format!("{}/{}/commit/{}", org_url, self.project_title, self.commit_sha)
    }
}

/// Completion state announced in a pipeline message.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PipelineState {
    Succeeded,
    #[default]
    Failed,
}

crate::simple_display! {
    PipelineState {
        Succeeded => "succeeded",
        Failed => "failed",
    }
}

#[cfg(test)]
#[path = "context_tests.rs"]
mod tests;
