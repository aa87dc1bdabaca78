// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! triage-owners: ownership tables and notification channel registries
//!
//! - [`OwnershipTable`] maps file paths (CODEOWNERS) or job names (JOBOWNERS)
//!   to owners
//! - [`ChannelMap`] maps team handles to chat channels or issue-tracker projects
//! - [`audit`] checks that every owning team has both

mod channels;
mod error;
mod pattern;
mod registry;
mod table;

pub use channels::{ChannelMap, JIRA_PLACEHOLDER, SLACK_PLACEHOLDER};
pub use error::OwnersError;
pub use pattern::{normalize_key, OwnershipPattern};
pub use registry::{audit, AuditReport, TeamGap};
pub use table::{MatchMode, OwnershipEntry, OwnershipTable};
