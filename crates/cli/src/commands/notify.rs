// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `ci-triage notify` — plan and deliver the notifications of a pipeline.

use anyhow::Result;
use clap::Args;
use std::path::PathBuf;
use triage_adapters::ConsoleNotifyAdapter;
use triage_core::TriageConfig;
use triage_engine::{plan, send_all, Tables, TriageInput};

use super::message::MessageArgs;
use super::JobsArgs;
use crate::env;
use crate::exit_error::ExitError;
use crate::output::OutputFormat;

#[derive(Args)]
pub struct NotifyArgs {
    #[command(flatten)]
    pub jobs: JobsArgs,

    /// Team → slack channel map (YAML)
    #[arg(long, value_name = "PATH")]
    pub slack_map: Option<PathBuf>,

    #[command(flatten)]
    pub message: MessageArgs,
}

/// With `--output json` the planned notifications are printed instead of
/// delivered.
pub async fn handle(args: NotifyArgs, config: &TriageConfig, format: OutputFormat) -> Result<()> {
    let loaded = args.jobs.load(config)?;
    let tables = Tables {
        job_owners: loaded.job_owners,
        slack: super::load_slack_map(args.slack_map.as_deref(), config)?,
    };
    let context = env::notification_context();
    let input = TriageInput {
        context: &context,
        header: &args.message.header,
        state: args.message.state.into(),
        failed_jobs: &loaded.failed_jobs,
        tables: &tables,
        config,
    };

    let notifications = plan(&input);

    if format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(&notifications)?);
        return Ok(());
    }
    if notifications.is_empty() {
        println!("Nothing to notify");
        return Ok(());
    }

    let delivery = send_all(&ConsoleNotifyAdapter::stdout(), &notifications).await;
    if delivery.failed > 0 {
        return Err(ExitError::new(
            1,
            format!("{} of {} notifications failed", delivery.failed, notifications.len()),
        )
        .into());
    }
    Ok(())
}
