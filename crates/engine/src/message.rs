// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Notification text.
//!
//! Every message starts with the base message describing the pipeline and
//! commit; failure messages append job and test sections. Links use the
//! chat markup `<url|label>`.

use crate::route::RoutedTest;
use indexmap::IndexMap;
use regex::Regex;
use std::fmt;
use std::sync::LazyLock;
use triage_core::{FailedJob, FailedJobs, NotificationContext, PipelineState};

/// Jobs listed per failed test before collapsing into "and N more".
pub const MAX_JOBS_PER_TEST: usize = 2;

#[allow(clippy::expect_used)]
static PR_SUFFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r".*\(#([0-9]+)\)$").expect("constant regex pattern is valid"));

/// PR number referenced by a squash-merge title such as `Fix bug (#4321)`.
pub fn pr_number(title: &str) -> Option<&str> {
    PR_SUFFIX.captures(title).and_then(|c| c.get(1)).map(|m| m.as_str())
}

/// Turn the `#<digits>` PR reference of a commit title into a link.
pub fn enhance_commit_title(title: &str, project: &str, org_url: &str) -> String {
    match pr_number(title) {
        Some(pr) => {
            let reference = format!("#{pr}");
            title.replace(&reference, &format!("<{org_url}/{project}/pull/{pr}|{reference}>"))
        }
        None => title.to_string(),
    }
}

/// Base message for a pipeline run.
pub fn compose(
    context: &NotificationContext,
    header: &str,
    state: PipelineState,
    org_url: &str,
) -> String {
    let title = enhance_commit_title(&context.commit_title, &context.project_title, org_url);
    format!(
        "{header} pipeline <{}|{}> for {} {state}.\n\
         {title} (<{}|{}>)(:github: <{}|link>) by {}",
        context.pipeline_url,
        context.pipeline_id,
        context.commit_ref,
        context.provider_commit_url(),
        context.commit_short_sha,
        context.github_commit_url(org_url),
        context.author,
    )
}

/// Who a failure message is addressed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Audience {
    /// The pipeline channel: every failure
    Pipeline,
    /// One team: the failures it owns
    Team,
}

impl Audience {
    fn jobs_header(self) -> &'static str {
        match self {
            Audience::Pipeline => "Failed jobs:",
            Audience::Team => "Failed jobs you own:",
        }
    }

    fn optional_jobs_header(self) -> &'static str {
        match self {
            Audience::Pipeline => "Failed optional jobs:",
            Audience::Team => "Failed optional jobs you own:",
        }
    }

    fn tests_header(self) -> &'static str {
        match self {
            Audience::Pipeline => "Failed unit tests:",
            Audience::Team => "Failed unit tests you own:",
        }
    }
}

/// Base message followed by job and test sections.
#[derive(Debug, Clone)]
pub struct FailureMessage {
    base: String,
    audience: Audience,
    jobs: FailedJobs,
    tests: Vec<RoutedTest>,
}

impl FailureMessage {
    pub fn new(base: impl Into<String>, audience: Audience, jobs: FailedJobs) -> Self {
        Self { base: base.into(), audience, jobs, tests: Vec::new() }
    }

    pub fn with_tests(mut self, tests: Vec<RoutedTest>) -> Self {
        self.tests = tests;
        self
    }

    /// True when there is nothing to report beyond the base message.
    pub fn is_empty(&self) -> bool {
        self.jobs.is_empty() && self.tests.is_empty()
    }
}

impl fmt::Display for FailureMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.base)?;

        write_jobs_section(f, self.audience.jobs_header(), &self.jobs.mandatory_job_failures())?;
        write_jobs_section(
            f,
            self.audience.optional_jobs_header(),
            &self.jobs.optional_job_failures(),
        )?;
        write_jobs_section(
            f,
            "Infrastructure failures:",
            &self.jobs.mandatory_infra_job_failures(),
        )?;

        if !self.tests.is_empty() {
            write!(f, "\n{}", self.audience.tests_header())?;
            for routed in &self.tests {
                write!(
                    f,
                    "\n- `{}` from package `{}` (in {})",
                    routed.test.name,
                    routed.test.package,
                    job_list(routed)
                )?;
            }
        }
        Ok(())
    }
}

fn write_jobs_section(f: &mut fmt::Formatter<'_>, header: &str, jobs: &[&FailedJob]) -> fmt::Result {
    if jobs.is_empty() {
        return Ok(());
    }
    write!(f, "\n{header}")?;

    let mut by_stage: IndexMap<&str, Vec<&FailedJob>> = IndexMap::new();
    for job in jobs {
        by_stage.entry(job.stage.as_str()).or_default().push(job);
    }
    for (stage, jobs) in by_stage {
        let links: Vec<String> = jobs.iter().map(|job| job_link(job)).collect();
        write!(f, "\n- {}", links.join(", "))?;
        if !stage.is_empty() {
            write!(f, " (`{stage}` stage)")?;
        }
    }
    Ok(())
}

fn job_link(job: &FailedJob) -> String {
    match job.retries {
        0 => format!("<{}|{}>", job.url, job.name()),
        1 => format!("<{}|{}> (1 retry)", job.url, job.name()),
        n => format!("<{}|{}> ({n} retries)", job.url, job.name()),
    }
}

fn job_list(routed: &RoutedTest) -> String {
    let shown: Vec<String> = routed
        .jobs
        .iter()
        .take(MAX_JOBS_PER_TEST)
        .map(|job| format!("<{}|{}>", job.url, job.name))
        .collect();
    let mut list = shown.join(", ");
    let hidden = routed.jobs.len().saturating_sub(MAX_JOBS_PER_TEST);
    if hidden > 0 {
        list.push_str(&format!(" and {hidden} more"));
    }
    list
}

#[cfg(test)]
#[path = "message_tests.rs"]
mod tests;
