// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Ownership tables (`.github/CODEOWNERS`, `.gitlab/JOBOWNERS`).
//!
//! ```text
//! # comment
//! /pkg/util/            @DataDog/agent-shared-components
//! tests_deb-*           @DataDog/agent-delivery @octocat
//! /docs/legacy/
//! ```
//!
//! Entries are kept in declaration order. An entry with no owners is legal
//! and marks the pattern as explicitly unowned.

use crate::error::OwnersError;
use crate::pattern::OwnershipPattern;
use std::path::Path;
use triage_core::Owner;

/// How matches from several entries combine.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MatchMode {
    /// The first matching entry in declaration order decides.
    FirstMatch,
    /// Owners of every matching entry accumulate in declaration order,
    /// without duplicates.
    #[default]
    Cumulative,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OwnershipEntry {
    /// 1-based line number in the source file
    pub line: usize,
    pub pattern: OwnershipPattern,
    pub owners: Vec<Owner>,
}

impl OwnershipEntry {
    /// The first-listed owner if it is a team.
    pub fn first_team(&self) -> Option<&str> {
        self.owners.first().and_then(Owner::as_team)
    }
}

/// Ordered pattern → owners table. Immutable once loaded.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OwnershipTable {
    entries: Vec<OwnershipEntry>,
    mode: MatchMode,
}

impl OwnershipTable {
    /// Parse table content. `origin` names the source in error messages.
    pub fn parse(content: &str, origin: &str) -> Result<Self, OwnersError> {
        let mut entries = Vec::new();
        for (idx, raw_line) in content.lines().enumerate() {
            let line = idx + 1;
            let mut tokens = raw_line.split_whitespace();
            let pattern = match tokens.next() {
                Some(token) if !token.starts_with('#') => token,
                _ => continue,
            };

            let mut owners = Vec::new();
            for token in tokens.take_while(|t| !t.starts_with('#')) {
                let owner = Owner::parse(token).ok_or_else(|| OwnersError::InvalidOwner {
                    origin: origin.to_string(),
                    line,
                    token: token.to_string(),
                })?;
                owners.push(owner);
            }

            let pattern =
                OwnershipPattern::new(pattern).map_err(|source| OwnersError::InvalidPattern {
                    origin: origin.to_string(),
                    line,
                    pattern: pattern.to_string(),
                    source,
                })?;
            entries.push(OwnershipEntry { line, pattern, owners });
        }
        tracing::debug!(origin, entries = entries.len(), "parsed ownership table");
        Ok(Self { entries, mode: MatchMode::default() })
    }

    pub fn load(path: &Path) -> Result<Self, OwnersError> {
        let content = std::fs::read_to_string(path)
            .map_err(|source| OwnersError::Io { path: path.to_path_buf(), source })?;
        Self::parse(&content, &path.display().to_string())
    }

    pub fn with_mode(mut self, mode: MatchMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn mode(&self) -> MatchMode {
        self.mode
    }

    pub fn entries(&self) -> &[OwnershipEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Owners of a path or job name, in table order.
    ///
    /// An empty result means nobody owns the key; callers decide what that
    /// implies.
    pub fn resolve(&self, key: &str) -> Vec<Owner> {
        let mut matching = self.entries.iter().filter(|e| e.pattern.matches(key));
        match self.mode {
            MatchMode::FirstMatch => matching.next().map(|e| e.owners.clone()).unwrap_or_default(),
            MatchMode::Cumulative => {
                let mut owners: Vec<Owner> = Vec::new();
                for entry in matching {
                    for owner in &entry.owners {
                        if !owners.contains(owner) {
                            owners.push(owner.clone());
                        }
                    }
                }
                owners
            }
        }
    }

    /// Team handles owning a path or job name, in table order.
    pub fn teams(&self, key: &str) -> Vec<String> {
        self.resolve(key).into_iter().filter_map(|o| o.as_team().map(str::to_string)).collect()
    }
}

#[cfg(test)]
#[path = "table_tests.rs"]
mod tests;
