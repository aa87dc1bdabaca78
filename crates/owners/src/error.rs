// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use std::path::PathBuf;
use thiserror::Error;

/// Errors from loading ownership tables and channel maps.
///
/// All of these are configuration errors: loading stops at the first one.
#[derive(Debug, Error)]
pub enum OwnersError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("{origin}:{line}: invalid owner '{token}'")]
    InvalidOwner { origin: String, line: usize, token: String },
    #[error("{origin}:{line}: invalid pattern '{pattern}': {source}")]
    InvalidPattern {
        origin: String,
        line: usize,
        pattern: String,
        #[source]
        source: regex::Error,
    },
    #[error("invalid YAML in {}: {source}", path.display())]
    Yaml {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
    #[error("{} must be a mapping of team handle to string", path.display())]
    NotAMapping { path: PathBuf },
    #[error("{} contains a non-string key or value. Key: {key}, Value: {value}", path.display())]
    NonStringEntry { path: PathBuf, key: String, value: String },
}
