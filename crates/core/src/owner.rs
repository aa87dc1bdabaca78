// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Owner identification for ownership tables.
//!
//! An ownership entry lists owners that are either a team handle
//! (`@Org/team`) or an individual (`@user` or an e-mail address). Routing only
//! ever notifies teams, so the kind is part of the type rather than a string
//! tag carried next to the name.

use serde::{Deserialize, Serialize};

/// Kind of an [`Owner`], without the name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OwnerKind {
    Team,
    Username,
}

crate::simple_display! {
    OwnerKind {
        Team => "TEAM",
        Username => "USERNAME",
    }
}

/// Owner listed in an ownership table entry.
///
/// Serializes as a tagged pair:
/// - `{"kind": "TEAM", "name": "@DataDog/agent-ci-experience"}`
/// - `{"kind": "USERNAME", "name": "@octocat"}`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "name", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Owner {
    /// Team handle, `@Org/name`
    Team(String),
    /// Individual, `@login` or an e-mail address
    Username(String),
}

impl Owner {
    /// Classify a raw owner token from an ownership file.
    ///
    /// Returns `None` for tokens that are neither a handle nor an e-mail.
    pub fn parse(token: &str) -> Option<Self> {
        if let Some(handle) = token.strip_prefix('@') {
            return match handle.split_once('/') {
                Some((org, team)) if !org.is_empty() && !team.is_empty() => {
                    Some(Owner::Team(token.to_string()))
                }
                Some(_) => None,
                None if handle.is_empty() => None,
                None => Some(Owner::Username(token.to_string())),
            };
        }
        match token.split_once('@') {
            Some((user, domain)) if !user.is_empty() && domain.contains('.') => {
                Some(Owner::Username(token.to_string()))
            }
            _ => None,
        }
    }

    pub fn kind(&self) -> OwnerKind {
        match self {
            Owner::Team(_) => OwnerKind::Team,
            Owner::Username(_) => OwnerKind::Username,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Owner::Team(name) | Owner::Username(name) => name,
        }
    }

    /// Returns the team handle if this is a Team owner.
    pub fn as_team(&self) -> Option<&str> {
        match self {
            Owner::Team(name) => Some(name),
            Owner::Username(_) => None,
        }
    }

    pub fn is_team(&self) -> bool {
        matches!(self, Owner::Team(_))
    }
}

impl std::fmt::Display for Owner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
#[path = "owner_tests.rs"]
mod tests;
