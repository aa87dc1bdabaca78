// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! triage-engine: from CI artifacts to notifications
//!
//! Test output is parsed into failed tests, failed jobs are classified and
//! routed to their owning teams, and the resulting messages are planned and
//! delivered through a [`NotifyAdapter`](triage_adapters::NotifyAdapter).

pub mod classify;
mod error;
pub mod message;
pub mod route;
pub mod test_output;
pub mod triage;

pub use classify::{classify, failed_job, ClassifierRules};
pub use error::EngineError;
pub use message::{compose, enhance_commit_title, Audience, FailureMessage, MAX_JOBS_PER_TEST};
pub use route::{collect_tests, route, route_tests, JobLink, RoutedTest, RoutingResult};
pub use test_output::{parse_test_output, read_test_output, FailedTests, TEST_OUTPUT_FILE};
pub use triage::{
    collect_failed_jobs, load_jobs, plan, route_input, send_all, Delivery, Notification, Tables,
    TriageInput,
};
