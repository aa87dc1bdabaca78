// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Routing failures to the teams responsible for them.

use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};
use triage_core::{FailedJob, FailedJobReason, FailedJobs, JobKey, TestKey, TestRecord};
use triage_owners::OwnershipTable;

/// Team handle → failed jobs the team is responsible for.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RoutingResult {
    pub teams: BTreeMap<String, FailedJobs>,
    /// Non-infra jobs no team owns
    pub unrouted: BTreeSet<JobKey>,
}

impl RoutingResult {
    fn assign(&mut self, team: &str, job: &FailedJob) {
        self.teams.entry(team.to_string()).or_default().add_failed_job(job.clone());
    }

    pub fn get(&self, team: &str) -> Option<&FailedJobs> {
        self.teams.get(team)
    }

    pub fn team_names(&self) -> impl Iterator<Item = &str> {
        self.teams.keys().map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.teams.is_empty()
    }
}

/// Route failed jobs to teams.
///
/// Mandatory e2e infrastructure failures go to `fallback_team`. Every
/// non-infra failure goes to each team owning the job name in `job_owners`;
/// username-only owners are not notified. Other infra failures are not
/// routed to teams.
pub fn route(failed_jobs: &FailedJobs, job_owners: &OwnershipTable, fallback_team: &str) -> RoutingResult {
    let mut result = RoutingResult::default();

    for job in failed_jobs.mandatory_infra_job_failures() {
        if job.reason == FailedJobReason::E2eInfraFailure {
            result.assign(fallback_team, job);
        }
    }

    for job in failed_jobs.all_non_infra_failures() {
        let teams = job_owners.teams(job.name());
        if teams.is_empty() {
            tracing::debug!(job = %job.key, "no team owns failed job");
            result.unrouted.insert(job.key.clone());
            continue;
        }
        for team in &teams {
            result.assign(team, job);
        }
    }

    tracing::debug!(
        teams = result.teams.len(),
        unrouted = result.unrouted.len(),
        "routed failed jobs"
    );
    result
}

/// A job a test failed in, with enough to link to it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct JobLink {
    pub id: u64,
    pub name: String,
    pub url: String,
}

impl From<&FailedJob> for JobLink {
    fn from(job: &FailedJob) -> Self {
        Self { id: job.id(), name: job.name().to_string(), url: job.url.clone() }
    }
}

/// A failed test together with every job it failed in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoutedTest {
    pub test: TestRecord,
    pub jobs: Vec<JobLink>,
}

/// Group failed tests of non-infra jobs, keeping every job each test failed
/// in. Ordered by (package, name).
pub fn collect_tests<'a>(jobs: impl IntoIterator<Item = &'a FailedJob>) -> Vec<RoutedTest> {
    let mut tests: BTreeMap<TestKey, RoutedTest> = BTreeMap::new();
    for job in jobs {
        if job.is_infra() {
            continue;
        }
        for test in &job.tests {
            let key = TestKey::new(&test.package, &test.name);
            let routed =
                tests.entry(key).or_insert_with(|| RoutedTest { test: test.clone(), jobs: Vec::new() });
            if !routed.jobs.iter().any(|j| j.id == job.id() && j.name == job.name()) {
                routed.jobs.push(JobLink::from(job));
            }
        }
    }
    tests.into_values().collect()
}

/// Route failed tests to their code owners.
pub fn route_tests(failed_jobs: &FailedJobs) -> BTreeMap<String, Vec<RoutedTest>> {
    let mut routed: BTreeMap<String, Vec<RoutedTest>> = BTreeMap::new();
    for test in collect_tests(failed_jobs.iter()) {
        for team in &test.test.owners {
            routed.entry(team.clone()).or_default().push(test.clone());
        }
    }
    routed
}

#[cfg(test)]
#[path = "route_tests.rs"]
mod tests;
