// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! One triage run: classify failed jobs, route them, and plan the
//! notifications to send.

use crate::classify::{failed_job, ClassifierRules};
use crate::error::EngineError;
use crate::message::{compose, Audience, FailureMessage};
use crate::route::{collect_tests, route, route_tests, RoutingResult};
use crate::test_output::{parse_test_output, read_test_output, TEST_OUTPUT_FILE};
use serde::Serialize;
use std::collections::BTreeSet;
use std::path::Path;
use triage_adapters::NotifyAdapter;
use triage_core::{CiJob, FailedJobs, NotificationContext, PipelineState, TriageConfig};
use triage_owners::{ChannelMap, OwnershipTable};

/// Tables loaded once at startup and shared by reference for the whole run.
///
/// Code ownership is applied when failed tests are collected and travels
/// on each [`triage_core::TestRecord`], so it is not kept here.
#[derive(Debug, Clone, Default)]
pub struct Tables {
    pub job_owners: OwnershipTable,
    pub slack: ChannelMap,
}

/// Load the jobs document: a JSON array of failed CI jobs.
pub fn load_jobs(path: &Path) -> Result<Vec<CiJob>, EngineError> {
    let content = std::fs::read_to_string(path)
        .map_err(|source| EngineError::Io { path: path.to_path_buf(), source })?;
    serde_json::from_str(&content)
        .map_err(|source| EngineError::Jobs { path: path.to_path_buf(), source })
}

/// Classify failed jobs, attaching the failed tests found in
/// `<artifacts>/<job id>/test_output.json`.
pub fn collect_failed_jobs(
    jobs: &[CiJob],
    artifacts: Option<&Path>,
    code_owners: &OwnershipTable,
    config: &TriageConfig,
    rules: &ClassifierRules,
) -> FailedJobs {
    jobs.iter()
        .map(|job| {
            let tests = match artifacts {
                Some(dir) => {
                    let path = dir.join(job.id.to_string()).join(TEST_OUTPUT_FILE);
                    parse_test_output(&read_test_output(&path), code_owners, &config.package_prefix)
                        .into_values()
                        .collect()
                }
                None => Vec::new(),
            };
            failed_job(job, tests, rules)
        })
        .collect()
}

/// Everything needed to plan the notifications of a pipeline run.
#[derive(Debug, Clone, Copy)]
pub struct TriageInput<'a> {
    pub context: &'a NotificationContext,
    pub header: &'a str,
    pub state: PipelineState,
    pub failed_jobs: &'a FailedJobs,
    pub tables: &'a Tables,
    pub config: &'a TriageConfig,
}

/// A message ready for delivery.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notification {
    pub recipient: String,
    pub text: String,
}

/// Route an input's failures.
pub fn route_input(input: &TriageInput<'_>) -> RoutingResult {
    route(input.failed_jobs, &input.tables.job_owners, &input.config.fallback_team)
}

/// Plan the notifications of a pipeline run.
///
/// The pipeline channel hears about every failure when a mandatory job
/// failed. Each team then gets one message with the jobs and tests it owns,
/// in team order.
pub fn plan(input: &TriageInput<'_>) -> Vec<Notification> {
    let base = compose(input.context, input.header, input.state, &input.config.github_org_url);
    let mut notifications = Vec::new();

    if !input.failed_jobs.all_mandatory_failures().is_empty() {
        let message = FailureMessage::new(base.clone(), Audience::Pipeline, input.failed_jobs.clone())
            .with_tests(collect_tests(input.failed_jobs.iter()));
        notifications.push(Notification {
            recipient: input.config.pipeline_channel.clone(),
            text: message.to_string(),
        });
    }

    let routing = route_input(input);
    let mut routed_tests = route_tests(input.failed_jobs);
    let teams: BTreeSet<String> =
        routing.teams.keys().chain(routed_tests.keys()).cloned().collect();

    for team in teams {
        let jobs = routing.get(&team).cloned().unwrap_or_default();
        let tests = routed_tests.remove(&team).unwrap_or_default();
        let message = FailureMessage::new(base.clone(), Audience::Team, jobs).with_tests(tests);
        let recipient = input.tables.slack.get_or_default(&team).to_string();
        tracing::debug!(%team, %recipient, "planned team notification");
        notifications.push(Notification { recipient, text: message.to_string() });
    }

    notifications
}

/// Outcome of delivering a batch of notifications.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Delivery {
    pub sent: usize,
    pub failed: usize,
}

/// Deliver every notification, carrying on past failures.
pub async fn send_all<A: NotifyAdapter>(adapter: &A, notifications: &[Notification]) -> Delivery {
    let mut delivery = Delivery::default();
    for notification in notifications {
        match adapter.send(&notification.recipient, &notification.text).await {
            Ok(()) => delivery.sent += 1,
            Err(e) => {
                tracing::error!(recipient = %notification.recipient, error = %e, "notification failed");
                delivery.failed += 1;
            }
        }
    }
    delivery
}

#[cfg(test)]
#[path = "triage_tests.rs"]
mod tests;
