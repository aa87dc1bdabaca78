// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! CLI command implementations

pub mod audit;
pub mod message;
pub mod notify;
pub mod route;
pub mod test_output;

use anyhow::Result;
use clap::Args;
use std::path::{Path, PathBuf};
use triage_core::{FailedJobs, TriageConfig};
use triage_engine::{collect_failed_jobs, load_jobs, ClassifierRules};
use triage_owners::{ChannelMap, OwnershipTable, SLACK_PLACEHOLDER};

/// Inputs shared by commands that triage a jobs document.
#[derive(Args, Debug, Clone)]
pub struct JobsArgs {
    /// Failed jobs document (JSON array)
    #[arg(long, value_name = "PATH")]
    pub jobs: PathBuf,

    /// Job ownership table (e.g. .gitlab/JOBOWNERS)
    #[arg(long, value_name = "PATH")]
    pub job_owners: Option<PathBuf>,

    /// Code ownership table (e.g. .github/CODEOWNERS)
    #[arg(long, value_name = "PATH")]
    pub code_owners: Option<PathBuf>,

    /// Directory holding `<job id>/test_output.json` artifacts
    #[arg(long, value_name = "DIR")]
    pub artifacts: Option<PathBuf>,
}

pub(crate) struct LoadedJobs {
    pub job_owners: OwnershipTable,
    pub failed_jobs: FailedJobs,
}

impl JobsArgs {
    pub(crate) fn load(&self, config: &TriageConfig) -> Result<LoadedJobs> {
        let job_owners = load_table(self.job_owners.as_deref())?;
        let code_owners = load_table(self.code_owners.as_deref())?;
        let rules = ClassifierRules::from_config(config)?;
        let jobs = load_jobs(&self.jobs)?;
        let failed_jobs =
            collect_failed_jobs(&jobs, self.artifacts.as_deref(), &code_owners, config, &rules);
        tracing::debug!(jobs = jobs.len(), failed = failed_jobs.len(), "loaded jobs");
        Ok(LoadedJobs { job_owners, failed_jobs })
    }
}

/// Ownership table at `path`; no path means nobody owns anything.
pub(crate) fn load_table(path: Option<&Path>) -> Result<OwnershipTable> {
    match path {
        Some(path) => Ok(OwnershipTable::load(path)?),
        None => Ok(OwnershipTable::default()),
    }
}

/// Team → chat channel map at `path`; no path sends everything to the
/// default channel.
pub(crate) fn load_slack_map(path: Option<&Path>, config: &TriageConfig) -> Result<ChannelMap> {
    let default = &config.default_slack_channel;
    match path {
        Some(path) => Ok(ChannelMap::load(path, SLACK_PLACEHOLDER, default)?),
        None => Ok(ChannelMap::from_entries(Vec::<(String, String)>::new(), default)),
    }
}
