// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `ci-triage message` — base message for the current pipeline.

use anyhow::Result;
use clap::{Args, ValueEnum};
use triage_core::{PipelineState, TriageConfig};
use triage_engine::compose;

use crate::env;
use crate::output::{format_or_json, OutputFormat};

#[derive(Clone, Copy, Debug, Default, PartialEq, ValueEnum)]
pub enum StateArg {
    Succeeded,
    #[default]
    Failed,
}

impl From<StateArg> for PipelineState {
    fn from(state: StateArg) -> Self {
        match state {
            StateArg::Succeeded => PipelineState::Succeeded,
            StateArg::Failed => PipelineState::Failed,
        }
    }
}

#[derive(Args, Debug, Clone)]
pub struct MessageArgs {
    /// Text leading the message, e.g. an emoji or "Nightly"
    #[arg(long, default_value = ":red_circle:")]
    pub header: String,

    /// Announced pipeline state
    #[arg(long, value_enum, default_value_t = StateArg::Failed)]
    pub state: StateArg,
}

pub fn handle(args: &MessageArgs, config: &TriageConfig, format: OutputFormat) -> Result<()> {
    let context = env::notification_context();
    let text = compose(&context, &args.header, args.state.into(), &config.github_org_url);
    format_or_json(format, &serde_json::json!({ "text": text }), || println!("{text}"))
}
