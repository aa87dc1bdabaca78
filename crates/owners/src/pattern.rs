// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! CODEOWNERS-style patterns compiled to regular expressions.
//!
//! Semantics follow gitignore:
//! - a leading `/` anchors the pattern to the root
//! - a pattern without an inner `/` matches at any depth
//! - `*` and `?` never cross `/`; `**` does
//! - a trailing `/` matches only what is inside the directory
//! - a pattern matching a directory matches everything beneath it
//! - a bare `/` matches everything

use regex::Regex;

#[derive(Debug, Clone)]
pub struct OwnershipPattern {
    raw: String,
    regex: Regex,
}

impl OwnershipPattern {
    pub fn new(raw: &str) -> Result<Self, regex::Error> {
        let regex = Regex::new(&translate(raw))?;
        Ok(Self { raw: raw.to_string(), regex })
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Match a path or job name. The key is normalized first.
    pub fn matches(&self, key: &str) -> bool {
        self.regex.is_match(normalize_key(key))
    }
}

impl PartialEq for OwnershipPattern {
    fn eq(&self, other: &Self) -> bool {
        self.raw == other.raw
    }
}

impl Eq for OwnershipPattern {}

/// Strip a leading `./` or `/` so `./pkg/util` and `pkg/util` look the same.
pub fn normalize_key(key: &str) -> &str {
    let key = key.strip_prefix("./").unwrap_or(key);
    key.trim_start_matches('/')
}

fn translate(raw: &str) -> String {
    let mut body = raw;
    let rooted = body.starts_with('/');
    body = body.trim_start_matches('/');
    let dir_only = body.ends_with('/') && !body.is_empty();
    body = body.trim_end_matches('/');
    if body.is_empty() {
        // `/` is the repository root
        return "^.*$".to_string();
    }
    let anchored = rooted || body.contains('/');

    let mut out = String::with_capacity(body.len() * 2 + 16);
    out.push_str(if anchored { "^" } else { "^(?:.*/)?" });

    let chars: Vec<char> = body.chars().collect();
    let mut i = 0;
    while i < chars.len() {
        match chars[i] {
            '*' if chars.get(i + 1) == Some(&'*') => {
                if chars.get(i + 2) == Some(&'/') {
                    out.push_str("(?:.*/)?");
                    i += 3;
                } else {
                    out.push_str(".*");
                    i += 2;
                }
            }
            '*' => {
                out.push_str("[^/]*");
                i += 1;
            }
            '?' => {
                out.push_str("[^/]");
                i += 1;
            }
            c => {
                let mut buf = [0u8; 4];
                out.push_str(&regex::escape(c.encode_utf8(&mut buf)));
                i += 1;
            }
        }
    }

    out.push_str(if dir_only { "/.*$" } else { "(?:/.*)?$" });
    out
}

#[cfg(test)]
#[path = "pattern_tests.rs"]
mod tests;
