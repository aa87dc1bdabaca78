// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Centralized environment variable access for the CLI.

use triage_core::NotificationContext;

/// Log filter directive variable, e.g. `CI_TRIAGE_LOG=triage_engine=debug`
pub const LOG_ENV: &str = "CI_TRIAGE_LOG";

const DEFAULT_LOG_FILTER: &str = "warn";

/// Log filter directives: `CI_TRIAGE_LOG` > `warn`
pub fn log_filter() -> String {
    std::env::var(LOG_ENV).ok().filter(|s| !s.is_empty()).unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string())
}

fn var(name: &str) -> String {
    std::env::var(name).unwrap_or_default()
}

/// Notification context of the running GitLab CI job.
///
/// Unset variables are empty. `CI_COMMIT_SHORT_SHA` falls back to a prefix
/// of `CI_COMMIT_SHA`.
pub fn notification_context() -> NotificationContext {
    let commit_sha = var("CI_COMMIT_SHA");
    let commit_short_sha = std::env::var("CI_COMMIT_SHORT_SHA")
        .ok()
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| NotificationContext::short_sha(&commit_sha).to_string());
    NotificationContext {
        project_title: var("CI_PROJECT_TITLE"),
        project_url: var("CI_PROJECT_URL"),
        commit_short_sha,
        commit_title: var("CI_COMMIT_TITLE"),
        commit_ref: var("CI_COMMIT_REF_NAME"),
        pipeline_id: var("CI_PIPELINE_ID"),
        pipeline_url: var("CI_PIPELINE_URL"),
        author: var("CI_COMMIT_AUTHOR"),
        commit_sha,
    }
}

#[cfg(test)]
#[path = "env_tests.rs"]
mod tests;
