// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `ci-triage audit` — every owning team needs a chat channel and an
//! issue-tracker project.

use anyhow::Result;
use clap::Args;
use std::path::PathBuf;
use triage_core::TriageConfig;
use triage_owners::{audit, ChannelMap, OwnershipTable, JIRA_PLACEHOLDER, SLACK_PLACEHOLDER};

use crate::exit_error::ExitError;
use crate::output::{format_or_json, OutputFormat};

#[derive(Args)]
pub struct AuditArgs {
    /// Code ownership table (e.g. .github/CODEOWNERS)
    #[arg(long, value_name = "PATH")]
    pub code_owners: PathBuf,

    /// Team → slack channel map (YAML)
    #[arg(long, value_name = "PATH")]
    pub slack_map: PathBuf,

    /// Team → jira project map (YAML)
    #[arg(long, value_name = "PATH")]
    pub jira_map: PathBuf,

    /// Print nothing; only set the exit code
    #[arg(short, long)]
    pub quiet: bool,
}

pub fn handle(args: AuditArgs, config: &TriageConfig, format: OutputFormat) -> Result<()> {
    let table = OwnershipTable::load(&args.code_owners)?;
    let slack = ChannelMap::load(&args.slack_map, SLACK_PLACEHOLDER, &config.default_slack_channel)?;
    let jira = ChannelMap::load(&args.jira_map, JIRA_PLACEHOLDER, &config.default_jira_project)?;

    let report = audit(&table, &slack, &jira);

    if !args.quiet {
        format_or_json(format, &report, || {
            for message in report.messages() {
                println!("{message}");
            }
            if !report.has_gaps() {
                println!(
                    "All {} teams have a slack channel and a jira project",
                    report.teams_checked
                );
            }
        })?;
    }

    if report.has_gaps() {
        return Err(ExitError::silent(1).into());
    }
    Ok(())
}
