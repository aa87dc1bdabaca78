//! CLI help output specs
//!
//! Verify help text displays for all commands.

use crate::prelude::*;

#[test]
fn help_shows_usage() {
    cli().args(&["--help"]).passes().stdout_has("Usage:");
}

#[test]
fn help_lists_subcommands() {
    cli()
        .args(&["--help"])
        .passes()
        .stdout_has("tests")
        .stdout_has("route")
        .stdout_has("notify")
        .stdout_has("message")
        .stdout_has("audit");
}

#[test]
fn audit_help_shows_flags() {
    cli()
        .args(&["audit", "--help"])
        .passes()
        .stdout_has("--code-owners")
        .stdout_has("--slack-map")
        .stdout_has("--jira-map")
        .stdout_has("--quiet");
}

#[test]
fn version_shows_version() {
    cli().args(&["--version"]).passes().stdout_has("0.2");
}

#[test]
fn missing_subcommand_fails() {
    cli().fails().stderr_has("Usage:");
}
