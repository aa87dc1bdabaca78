// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! ci-triage: route CI pipeline failures to the teams that own them

mod color;
mod commands;
mod env;
mod exit_error;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use triage_core::TriageConfig;

use commands::{audit, message, notify, route, test_output};
use exit_error::ExitError;
use output::OutputFormat;

#[derive(Parser)]
#[command(
    name = "ci-triage",
    version,
    about = "Route CI pipeline failures to the teams that own them",
    styles = color::styles()
)]
struct Cli {
    /// Configuration file (TOML)
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Output format
    #[arg(short = 'o', long = "output", value_enum, global = true, default_value_t = OutputFormat::Text)]
    output: OutputFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the failed tests of a test output stream
    Tests(test_output::TestsArgs),
    /// Classify failed jobs and route them to their owning teams
    Route(route::RouteArgs),
    /// Plan notifications for the current pipeline and deliver them
    Notify(notify::NotifyArgs),
    /// Print the base message for the current pipeline
    Message(message::MessageArgs),
    /// Check that every owning team has a slack channel and a jira project
    Audit(audit::AuditArgs),
}

#[tokio::main]
async fn main() {
    init_tracing();

    if let Err(e) = run().await {
        if let Some(exit) = e.downcast_ref::<ExitError>() {
            if !exit.message.is_empty() {
                eprintln!("error: {}", exit.message);
            }
            std::process::exit(exit.code);
        }
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let cli = Cli::parse();
    let config = TriageConfig::load_or_default(cli.config.as_deref())?;
    let format = cli.output;

    match cli.command {
        Commands::Tests(args) => test_output::handle(args, &config, format),
        Commands::Route(args) => route::handle(args, &config, format),
        Commands::Notify(args) => notify::handle(args, &config, format).await,
        Commands::Message(args) => message::handle(&args, &config, format),
        Commands::Audit(args) => audit::handle(args, &config, format),
    }
}

/// Logs go to stderr so stdout stays a clean payload.
fn init_tracing() {
    let filter = EnvFilter::try_new(env::log_filter()).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
