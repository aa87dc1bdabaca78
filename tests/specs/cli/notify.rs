//! `ci-triage notify` specs
//!
//! Notifications go to the pipeline channel and to each owning team's
//! channel; the console adapter prints them framed by recipient.

use crate::prelude::*;

const JOBS: &str = r#"[
  {"id": 7, "name": "tests_deb-x64-py3", "stage": "source_test", "url": "https://ci/jobs/7", "retries": 2},
  {"id": 8, "name": "kmt_run_x64", "stage": "kernel", "url": "https://ci/jobs/8", "allow_failure": true}
]"#;

const JOBOWNERS: &str = "\
tests_deb-*   @DataDog/agent-delivery
kmt_*         @DataDog/ebpf-platform
";

fn project() -> Project {
    let project = Project::empty();
    project
        .file("jobs.json", JOBS)
        .file("JOBOWNERS", JOBOWNERS)
        .file("slack.yaml", "'@datadog/agent-delivery': '#agent-delivery-ops'\n");
    project
}

const NOTIFY_ARGS: &[&str] =
    &["notify", "--jobs", "jobs.json", "--job-owners", "JOBOWNERS", "--slack-map", "slack.yaml"];

#[test]
fn delivers_pipeline_and_team_messages() {
    let project = project();
    cli()
        .args(NOTIFY_ARGS)
        .env("CI_PIPELINE_ID", "42")
        .env("CI_COMMIT_REF_NAME", "main")
        .pwd(project.root())
        .passes()
        .stdout_has("--- #datadog-agent-pipelines ---\n:red_circle: pipeline <|42> for main failed.")
        .stdout_has("Failed jobs:\n- <https://ci/jobs/7|tests_deb-x64-py3> (2 retries) (`source_test` stage)")
        .stdout_has("Failed optional jobs:\n- <https://ci/jobs/8|kmt_run_x64> (`kernel` stage)")
        .stdout_has("--- #agent-delivery-ops ---")
        .stdout_has("Failed jobs you own:")
        .stdout_has("--- #agent-developer-experience ---")
        .stdout_has("Failed optional jobs you own:");
}

#[test]
fn json_output_plans_without_sending() {
    let project = project();
    let mut args = NOTIFY_ARGS.to_vec();
    args.extend(["-o", "json"]);
    let run = cli().args(&args).pwd(project.root()).passes();

    let json = run.stdout_json();
    let recipients: Vec<&str> =
        json.as_array().unwrap().iter().map(|n| n["recipient"].as_str().unwrap()).collect();
    assert_eq!(
        recipients,
        vec!["#datadog-agent-pipelines", "#agent-delivery-ops", "#agent-developer-experience"]
    );
}

#[test]
fn nothing_to_notify_without_failures() {
    let project = project();
    project.file("jobs.json", "[]");
    cli().args(NOTIFY_ARGS).pwd(project.root()).passes().stdout_eq("Nothing to notify\n");
}
