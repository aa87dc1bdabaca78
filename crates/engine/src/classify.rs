// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Failure classification: why did a job fail?
//!
//! Provider-reported reasons win over job-name rules, so a runner crash in
//! an e2e job is reported as a runner failure.

use crate::error::EngineError;
use triage_core::{CiJob, FailedJob, FailedJobReason, TestRecord, TriageConfig};
use triage_owners::OwnershipPattern;

/// Job-name rules for classifying e2e infrastructure failures.
#[derive(Debug, Clone, Default)]
pub struct ClassifierRules {
    e2e_infra_jobs: Vec<OwnershipPattern>,
}

impl ClassifierRules {
    pub fn new<I, S>(patterns: I) -> Result<Self, EngineError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let e2e_infra_jobs = patterns
            .into_iter()
            .map(|p| {
                let pattern = p.as_ref();
                OwnershipPattern::new(pattern)
                    .map_err(|source| EngineError::Pattern { pattern: pattern.to_string(), source })
            })
            .collect::<Result<_, _>>()?;
        Ok(Self { e2e_infra_jobs })
    }

    pub fn from_config(config: &TriageConfig) -> Result<Self, EngineError> {
        Self::new(&config.e2e_infra_jobs)
    }

    pub fn is_e2e_infra_job(&self, name: &str) -> bool {
        self.e2e_infra_jobs.iter().any(|p| p.matches(name))
    }
}

/// Classify a failed job.
pub fn classify(job: &CiJob, rules: &ClassifierRules) -> FailedJobReason {
    if let Some(reason) = job.failure_reason.as_deref().and_then(FailedJobReason::from_provider_reason)
    {
        return reason;
    }
    if rules.is_e2e_infra_job(&job.name) {
        return FailedJobReason::E2eInfraFailure;
    }
    FailedJobReason::FailedJobScript
}

/// Classify a job and attach its failed tests.
///
/// Infrastructure failures never carry tests: whatever the tests reported,
/// they did not run against a healthy environment.
pub fn failed_job(job: &CiJob, tests: Vec<TestRecord>, rules: &ClassifierRules) -> FailedJob {
    let reason = classify(job, rules);
    let tests = if reason.is_infra() { Vec::new() } else { tests };
    tracing::debug!(job = %job.name, id = job.id, %reason, tests = tests.len(), "classified job");
    FailedJob::new(job, reason, tests)
}

#[cfg(test)]
#[path = "classify_tests.rs"]
mod tests;
