// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! CI jobs and the failed-job model used by routing.

use crate::test_record::TestRecord;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A job as reported by the CI provider for one pipeline.
///
/// This is the input record: the jobs document handed to the triage run is a
/// JSON array of these.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CiJob {
    /// Pipeline-scoped job id
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub stage: String,
    #[serde(default)]
    pub url: String,
    /// Whether the pipeline tolerates this job failing
    #[serde(default)]
    pub allow_failure: bool,
    /// Failure reason reported by the CI provider (e.g. `script_failure`)
    #[serde(default)]
    pub failure_reason: Option<String>,
    /// Number of retries before the final attempt
    #[serde(default)]
    pub retries: u32,
}

crate::builder! {
    pub struct CiJobBuilder => CiJob {
        into {
            name: String = "tests_deb-x64-py3",
            stage: String = "source_test",
            url: String = "https://gitlab.example.com/project/-/jobs/1",
        }
        set {
            id: u64 = 1,
            allow_failure: bool = false,
            failure_reason: Option<String> = None,
            retries: u32 = 0,
        }
    }
}

/// Identity of a failed job: pipeline-scoped id plus name.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct JobKey {
    pub id: u64,
    pub name: String,
}

impl std::fmt::Display for JobKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}#{}", self.name, self.id)
    }
}

/// Why a job failed. Drives routing overrides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailedJobReason {
    /// The job script failed: tests, build, lint (generic failure)
    FailedJobScript,
    /// The e2e test infrastructure failed, not the code under test
    E2eInfraFailure,
    /// The runner system failed
    Runner,
    /// The CI provider failed: timeouts, scheduling, API or data errors
    CiProvider,
}

impl FailedJobReason {
    /// Map a CI provider failure reason to an infrastructure reason.
    ///
    /// Returns `None` for reasons that do not denote an infrastructure
    /// problem (including `script_failure`).
    pub fn from_provider_reason(reason: &str) -> Option<Self> {
        match reason {
            "runner_system_failure" => Some(FailedJobReason::Runner),
            "stuck_or_timeout_failure"
            | "unknown_failure"
            | "api_failure"
            | "scheduler_failure"
            | "stale_schedule"
            | "data_integrity_failure" => Some(FailedJobReason::CiProvider),
            _ => None,
        }
    }

    /// Infra failures are attributed to CI infrastructure, not to job owners.
    pub fn is_infra(self) -> bool {
        !matches!(self, FailedJobReason::FailedJobScript)
    }
}

crate::simple_display! {
    FailedJobReason {
        FailedJobScript => "failed_job_script",
        E2eInfraFailure => "e2e_infra_failure",
        Runner => "runner",
        CiProvider => "ci_provider",
    }
}

/// A failed job, classified and with its failed tests attached.
///
/// Immutable once built for a triage run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FailedJob {
    #[serde(flatten)]
    pub key: JobKey,
    pub stage: String,
    pub url: String,
    pub mandatory: bool,
    pub reason: FailedJobReason,
    pub retries: u32,
    #[serde(default)]
    pub tests: Vec<TestRecord>,
}

impl FailedJob {
    pub fn new(job: &CiJob, reason: FailedJobReason, tests: Vec<TestRecord>) -> Self {
        Self {
            key: JobKey { id: job.id, name: job.name.clone() },
            stage: job.stage.clone(),
            url: job.url.clone(),
            mandatory: !job.allow_failure,
            reason,
            retries: job.retries,
            tests,
        }
    }

    pub fn id(&self) -> u64 {
        self.key.id
    }

    pub fn name(&self) -> &str {
        &self.key.name
    }

    pub fn is_infra(&self) -> bool {
        self.reason.is_infra()
    }
}

/// A set of failed jobs, with the category views used for routing and
/// message rendering.
///
/// Keyed by [`JobKey`]: adding the same job twice keeps a single copy, and
/// iteration order is by job id regardless of insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FailedJobs {
    jobs: BTreeMap<JobKey, FailedJob>,
}

impl FailedJobs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a job; returns false if it was already present.
    pub fn add_failed_job(&mut self, job: FailedJob) -> bool {
        if self.jobs.contains_key(&job.key) {
            return false;
        }
        self.jobs.insert(job.key.clone(), job);
        true
    }

    pub fn contains(&self, key: &JobKey) -> bool {
        self.jobs.contains_key(key)
    }

    pub fn get(&self, key: &JobKey) -> Option<&FailedJob> {
        self.jobs.get(key)
    }

    pub fn len(&self) -> usize {
        self.jobs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.jobs.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &FailedJob> {
        self.jobs.values()
    }

    pub fn keys(&self) -> impl Iterator<Item = &JobKey> {
        self.jobs.keys()
    }

    fn filtered(&self, infra: bool, mandatory: bool) -> Vec<&FailedJob> {
        self.iter().filter(|j| j.is_infra() == infra && j.mandatory == mandatory).collect()
    }

    pub fn mandatory_job_failures(&self) -> Vec<&FailedJob> {
        self.filtered(false, true)
    }

    pub fn optional_job_failures(&self) -> Vec<&FailedJob> {
        self.filtered(false, false)
    }

    pub fn mandatory_infra_job_failures(&self) -> Vec<&FailedJob> {
        self.filtered(true, true)
    }

    pub fn optional_infra_job_failures(&self) -> Vec<&FailedJob> {
        self.filtered(true, false)
    }

    pub fn all_non_infra_failures(&self) -> Vec<&FailedJob> {
        self.iter().filter(|j| !j.is_infra()).collect()
    }

    pub fn all_mandatory_failures(&self) -> Vec<&FailedJob> {
        self.iter().filter(|j| j.mandatory).collect()
    }

    pub fn all_failures(&self) -> Vec<&FailedJob> {
        self.iter().collect()
    }
}

impl FromIterator<FailedJob> for FailedJobs {
    fn from_iter<I: IntoIterator<Item = FailedJob>>(iter: I) -> Self {
        let mut jobs = FailedJobs::new();
        for job in iter {
            jobs.add_failed_job(job);
        }
        jobs
    }
}

impl Extend<FailedJob> for FailedJobs {
    fn extend<I: IntoIterator<Item = FailedJob>>(&mut self, iter: I) {
        for job in iter {
            self.add_failed_job(job);
        }
    }
}

// Serialized as a plain list: JSON object keys must be strings.
impl Serialize for FailedJobs {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_seq(self.jobs.values())
    }
}

impl<'de> Deserialize<'de> for FailedJobs {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let jobs = Vec::<FailedJob>::deserialize(deserializer)?;
        Ok(jobs.into_iter().collect())
    }
}

#[cfg(test)]
#[path = "job_tests.rs"]
mod tests;
