// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Failed test records extracted from test-result streams.

use serde::{Deserialize, Serialize};

/// Identity of a test within one stream: the package as reported by the test
/// runner plus the top-level test name.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TestKey {
    pub package: String,
    pub name: String,
}

impl TestKey {
    pub fn new(package: impl Into<String>, name: impl Into<String>) -> Self {
        Self { package: package.into(), name: name.into() }
    }
}

/// A test whose terminal outcome in a stream was a failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestRecord {
    pub name: String,
    /// Package relative to the repository root (module prefix stripped)
    pub package: String,
    /// Team handles owning the package, in ownership-table order
    #[serde(default)]
    pub owners: Vec<String>,
}

impl TestRecord {
    /// Path used for code-ownership lookups: `./<package>`.
    pub fn path(&self) -> String {
        format!("./{}", self.package)
    }

    pub fn is_owned_by(&self, team: &str) -> bool {
        self.owners.iter().any(|owner| owner == team)
    }
}

/// Strip the module prefix from a fully qualified package, e.g.
/// `github.com/DataDog/datadog-agent/pkg/util` → `pkg/util`.
pub fn strip_package_prefix<'a>(package: &'a str, prefix: &str) -> &'a str {
    if prefix.is_empty() {
        return package;
    }
    package.strip_prefix(prefix).unwrap_or(package)
}

#[cfg(test)]
#[path = "test_record_tests.rs"]
mod tests;
