// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Consistency check between code ownership and the notification registries.

use crate::channels::ChannelMap;
use crate::table::OwnershipTable;
use serde::Serialize;
use std::collections::HashSet;
use std::fmt;

/// A team missing from the chat-channel map, the project map, or both.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TeamGap {
    /// Team handle as first spelled in the ownership table
    pub team: String,
    pub missing_channel: bool,
    pub missing_project: bool,
}

impl fmt::Display for TeamGap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let missing = match (self.missing_channel, self.missing_project) {
            (true, true) => "a slack channel or a jira project",
            (true, false) => "a slack channel",
            _ => "a jira project",
        };
        write!(f, "The team {} doesn't have {} assigned", self.team, missing)
    }
}

/// Result of [`audit`]. Gaps are in first-seen order, one per team.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AuditReport {
    pub gaps: Vec<TeamGap>,
    /// Distinct teams checked
    pub teams_checked: usize,
}

impl AuditReport {
    pub fn has_gaps(&self) -> bool {
        !self.gaps.is_empty()
    }

    /// Human-readable diagnostics, one line per team.
    pub fn messages(&self) -> Vec<String> {
        self.gaps.iter().map(ToString::to_string).collect()
    }
}

/// Check that every team listed first on a table entry has both a chat
/// channel and an issue-tracker project.
///
/// Never fails: gaps are reported and the caller decides their severity.
pub fn audit(table: &OwnershipTable, slack: &ChannelMap, jira: &ChannelMap) -> AuditReport {
    let mut seen = HashSet::new();
    let mut report = AuditReport::default();
    for team in table.entries().iter().filter_map(|e| e.first_team()) {
        if !seen.insert(team.to_lowercase()) {
            continue;
        }
        report.teams_checked += 1;
        let missing_channel = !slack.contains(team);
        let missing_project = !jira.contains(team);
        if missing_channel || missing_project {
            tracing::debug!(team, missing_channel, missing_project, "team registry gap");
            report.gaps.push(TeamGap { team: team.to_string(), missing_channel, missing_project });
        }
    }
    report
}

#[cfg(test)]
#[path = "registry_tests.rs"]
mod tests;
