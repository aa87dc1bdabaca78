// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! triage-core: Data model for CI failure triage

pub mod macros;

pub mod config;
pub mod context;
pub mod job;
pub mod owner;
pub mod test_record;

pub use config::{ConfigError, TriageConfig};
pub use context::{NotificationContext, PipelineState};
#[cfg(any(test, feature = "test-support"))]
pub use job::CiJobBuilder;
pub use job::{CiJob, FailedJob, FailedJobReason, FailedJobs, JobKey};
pub use owner::{Owner, OwnerKind};
pub use test_record::{strip_package_prefix, TestKey, TestRecord};
