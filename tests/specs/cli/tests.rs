//! `ci-triage tests` specs
//!
//! Failed tests are folded from a test event stream: retried tests that
//! passed disappear, subtests are ignored, owners come from CODEOWNERS.

use crate::prelude::*;

const STREAM: &str = r#"{"Action":"run","Package":"github.com/DataDog/datadog-agent/pkg/util/log","Test":"TestFlaky"}
{"Action":"fail","Package":"github.com/DataDog/datadog-agent/pkg/util/log","Test":"TestFlaky"}
{"Action":"fail","Package":"github.com/DataDog/datadog-agent/pkg/util/log","Test":"TestBroken/case"}
{"Action":"fail","Package":"github.com/DataDog/datadog-agent/pkg/util/log","Test":"TestBroken"}
not json at all
{"Action":"fail","Package":"github.com/DataDog/datadog-agent/cmd/agent","Test":"TestStart"}
{"Action":"pass","Package":"github.com/DataDog/datadog-agent/pkg/util/log","Test":"TestFlaky"}
"#;

const CODEOWNERS: &str = "\
# comment
/pkg/util/      @DataDog/agent-shared-components
";

fn project() -> Project {
    let project = Project::empty();
    project.file("test_output.json", STREAM).file("CODEOWNERS", CODEOWNERS);
    project
}

#[test]
fn prints_terminal_failures_with_owners() {
    let project = project();
    cli()
        .args(&["tests", "test_output.json", "--code-owners", "CODEOWNERS"])
        .pwd(project.root())
        .passes()
        .stdout_eq(
            "cmd/agent TestStart (no owner)\n\
             pkg/util/log TestBroken @DataDog/agent-shared-components\n",
        );
}

#[test]
fn json_output_lists_records() {
    let project = project();
    let run = cli()
        .args(&["tests", "test_output.json", "--code-owners", "CODEOWNERS", "-o", "json"])
        .pwd(project.root())
        .passes();

    let json = run.stdout_json();
    let names: Vec<&str> =
        json.as_array().unwrap().iter().map(|t| t["name"].as_str().unwrap()).collect();
    assert_eq!(names, vec!["TestStart", "TestBroken"]);
    assert_eq!(json[1]["owners"][0], "@DataDog/agent-shared-components");
}

#[test]
fn empty_stream_has_no_failures() {
    let project = Project::empty();
    project.file("test_output.json", "");
    cli()
        .args(&["tests", "test_output.json"])
        .pwd(project.root())
        .passes()
        .stdout_has("No failed tests");
}

#[test]
fn missing_stream_is_an_error() {
    let project = Project::empty();
    cli()
        .args(&["tests", "nope.json"])
        .pwd(project.root())
        .fails()
        .stderr_has("failed to read nope.json");
}

#[test]
fn invalid_code_owner_is_an_error() {
    let project = project();
    project.file("BAD_OWNERS", "/pkg/  not-an-owner\n");
    cli()
        .args(&["tests", "test_output.json", "--code-owners", "BAD_OWNERS"])
        .pwd(project.root())
        .fails()
        .stderr_has("BAD_OWNERS:1: invalid owner 'not-an-owner'");
}
