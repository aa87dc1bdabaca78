// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Failed tests from `go test -json` style event streams.
//!
//! Each line is a JSON object:
//!
//! ```json
//! {"Action":"fail","Package":"github.com/DataDog/datadog-agent/pkg/util","Test":"TestFoo"}
//! ```
//!
//! Only top-level tests are reported: subtests (`TestFoo/case`) are skipped
//! so a failing subtest and its parent are not reported twice. A test that
//! fails and later passes in the same stream was retried successfully and is
//! dropped.

use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;
use triage_core::{strip_package_prefix, TestKey, TestRecord};
use triage_owners::OwnershipTable;

/// Failed tests of one stream, keyed by (package, name).
pub type FailedTests = BTreeMap<TestKey, TestRecord>;

/// Artifact holding a job's test events.
pub const TEST_OUTPUT_FILE: &str = "test_output.json";

#[derive(Debug, Deserialize)]
struct TestEvent {
    #[serde(rename = "Action", default)]
    action: String,
    #[serde(rename = "Package", default)]
    package: String,
    #[serde(rename = "Test")]
    test: Option<String>,
}

/// Fold a test event stream into its failed tests.
///
/// Owners are resolved from `code_owners` on `./<package>` after stripping
/// `package_prefix`. Malformed lines are skipped; an empty stream yields an
/// empty map.
pub fn parse_test_output(
    stream: &str,
    code_owners: &OwnershipTable,
    package_prefix: &str,
) -> FailedTests {
    let mut failed = FailedTests::new();
    for (idx, line) in stream.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let event: TestEvent = match serde_json::from_str(line) {
            Ok(event) => event,
            Err(e) => {
                tracing::warn!(line = idx + 1, error = %e, "skipping malformed test event");
                continue;
            }
        };
        // Package-level output lines carry no test name
        let Some(name) = event.test else {
            continue;
        };
        if name.contains('/') {
            continue;
        }

        let key = TestKey::new(event.package, name);
        match event.action.as_str() {
            "fail" => {
                let record = test_record(&key, code_owners, package_prefix);
                failed.insert(key, record);
            }
            "pass" => {
                if failed.remove(&key).is_some() {
                    tracing::info!(
                        test = %key.name,
                        package = %key.package,
                        "test passed after retry, removing from failures"
                    );
                }
            }
            _ => {}
        }
    }
    failed
}

fn test_record(key: &TestKey, code_owners: &OwnershipTable, package_prefix: &str) -> TestRecord {
    let mut record = TestRecord {
        name: key.name.clone(),
        package: strip_package_prefix(&key.package, package_prefix).to_string(),
        owners: Vec::new(),
    };
    // Packages are directories: `/pkg/util/` must own `./pkg/util`
    record.owners = code_owners.teams(&format!("{}/", record.path()));
    record
}

/// Read a test output artifact.
///
/// A missing or unreadable artifact means no failed tests, so this returns
/// an empty stream instead of an error.
pub fn read_test_output(path: &Path) -> String {
    match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!(path = %path.display(), "no test output artifact");
            String::new()
        }
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "unreadable test output artifact");
            String::new()
        }
    }
}

#[cfg(test)]
#[path = "test_output_tests.rs"]
mod tests;
