//! `ci-triage message` specs
//!
//! The base message is built from the GitLab CI environment.

use crate::prelude::*;

fn ci() -> CliBuilder {
    cli()
        .env("CI_PROJECT_TITLE", "datadog-agent")
        .env("CI_PROJECT_URL", "https://gitlab.ddbuild.io/DataDog/datadog-agent")
        .env("CI_COMMIT_SHA", "0123456789abcdef")
        .env("CI_COMMIT_TITLE", "Fix flaky tracer test (#4321)")
        .env("CI_COMMIT_REF_NAME", "main")
        .env("CI_PIPELINE_ID", "42")
        .env("CI_PIPELINE_URL", "https://gitlab.ddbuild.io/DataDog/datadog-agent/-/pipelines/42")
        .env("CI_COMMIT_AUTHOR", "Jane Doe")
}

#[test]
fn composes_from_ci_environment() {
    ci().args(&["message", "--header", ":host-red:"]).passes().stdout_eq(
        ":host-red: pipeline <https://gitlab.ddbuild.io/DataDog/datadog-agent/-/pipelines/42|42> for main failed.\n\
         Fix flaky tracer test (<https://github.com/DataDog/datadog-agent/pull/4321|#4321>) \
         (<https://gitlab.ddbuild.io/DataDog/datadog-agent/commit/0123456789abcdef|01234567>)\
         (:github: <https://github.com/DataDog/datadog-agent/commit/0123456789abcdef|link>) by Jane Doe\n",
    );
}

#[test]
fn state_succeeded() {
    ci().args(&["message", "--state", "succeeded"]).passes().stdout_has("for main succeeded.");
}

#[test]
fn org_url_comes_from_config() {
    let project = Project::empty();
    project.file("triage.toml", "github_org_url = \"https://github.example.com/acme\"\n");
    ci().args(&["message", "--config", "triage.toml"])
        .pwd(project.root())
        .passes()
        .stdout_has("<https://github.example.com/acme/datadog-agent/pull/4321|#4321>");
}

#[test]
fn json_output_wraps_text() {
    let run = ci().args(&["message", "-o", "json"]).passes();
    let json = run.stdout_json();
    assert!(json["text"].as_str().unwrap().starts_with(":red_circle: pipeline"));
}
