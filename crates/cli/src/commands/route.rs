// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `ci-triage route` — classify failed jobs and show who owns what.

use anyhow::Result;
use clap::Args;
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};
use std::fmt::Write;
use triage_core::{FailedJobs, JobKey, TriageConfig};
use triage_engine::{route, route_tests, RoutedTest, RoutingResult};

use super::JobsArgs;
use crate::color;
use crate::output::{format_or_json, OutputFormat};

#[derive(Args)]
pub struct RouteArgs {
    #[command(flatten)]
    pub jobs: JobsArgs,
}

#[derive(Debug, Serialize)]
pub(crate) struct RouteReport {
    pub teams: BTreeMap<String, FailedJobs>,
    pub tests: BTreeMap<String, Vec<RoutedTest>>,
    pub unrouted: BTreeSet<JobKey>,
}

impl RouteReport {
    pub(crate) fn new(routing: RoutingResult, tests: BTreeMap<String, Vec<RoutedTest>>) -> Self {
        Self { teams: routing.teams, tests, unrouted: routing.unrouted }
    }

    /// One block per team, jobs first, then tests.
    pub(crate) fn render(&self) -> String {
        let teams: BTreeSet<&String> = self.teams.keys().chain(self.tests.keys()).collect();
        let mut out = String::new();
        if teams.is_empty() && self.unrouted.is_empty() {
            out.push_str("No failures to route\n");
            return out;
        }
        for team in teams {
            let _ = writeln!(out, "{}", color::header(team));
            for job in self.teams.get(team).into_iter().flat_map(FailedJobs::iter) {
                let _ = writeln!(out, "  job  {} {}", job.key, color::muted(&job.reason.to_string()));
            }
            for routed in self.tests.get(team).into_iter().flatten() {
                let _ = writeln!(out, "  test {} {}", routed.test.package, routed.test.name);
            }
        }
        if !self.unrouted.is_empty() {
            let _ = writeln!(out, "{}", color::header("Unrouted jobs"));
            for key in &self.unrouted {
                let _ = writeln!(out, "  job  {key}");
            }
        }
        out
    }
}

pub fn handle(args: RouteArgs, config: &TriageConfig, format: OutputFormat) -> Result<()> {
    let loaded = args.jobs.load(config)?;
    let routing = route(&loaded.failed_jobs, &loaded.job_owners, &config.fallback_team);
    let report = RouteReport::new(routing, route_tests(&loaded.failed_jobs));

    format_or_json(format, &report, || print!("{}", report.render()))
}

#[cfg(test)]
#[path = "route_tests.rs"]
mod tests;
