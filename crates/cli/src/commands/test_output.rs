// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `ci-triage tests` — failed tests of a test output stream.

use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;
use triage_core::{TestRecord, TriageConfig};
use triage_engine::parse_test_output;

use crate::color;
use crate::output::{handle_list, owners_text, OutputFormat};

#[derive(Args)]
pub struct TestsArgs {
    /// Test output stream (newline-delimited JSON test events)
    pub file: PathBuf,

    /// Code ownership table (e.g. .github/CODEOWNERS)
    #[arg(long, value_name = "PATH")]
    pub code_owners: Option<PathBuf>,
}

pub fn handle(args: TestsArgs, config: &TriageConfig, format: OutputFormat) -> Result<()> {
    let code_owners = super::load_table(args.code_owners.as_deref())?;
    let stream = std::fs::read_to_string(&args.file)
        .with_context(|| format!("failed to read {}", args.file.display()))?;

    let failed: Vec<TestRecord> =
        parse_test_output(&stream, &code_owners, &config.package_prefix).into_values().collect();

    handle_list(format, &failed, "No failed tests", |tests, out| {
        for test in tests {
            writeln!(out, "{} {} {}", test.package, test.name, color::muted(&owners_text(&test.owners)))?;
        }
        Ok(())
    })
}
