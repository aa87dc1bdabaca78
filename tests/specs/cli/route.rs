//! `ci-triage route` specs
//!
//! Failed jobs are classified and routed to the teams owning their names;
//! mandatory e2e infrastructure failures go to the fallback team.

use crate::prelude::*;

const JOBS: &str = r#"[
  {"id": 101, "name": "tests_deb-x64-py3", "stage": "source_test", "url": "https://ci/jobs/101", "failure_reason": "script_failure"},
  {"id": 102, "name": "new-e2e-agent-platform", "stage": "e2e", "url": "https://ci/jobs/102", "failure_reason": "script_failure"},
  {"id": 103, "name": "kmt_run_x64", "stage": "kernel_matrix_testing", "url": "https://ci/jobs/103", "failure_reason": "runner_system_failure"},
  {"id": 104, "name": "lint_go", "stage": "lint", "url": "https://ci/jobs/104"}
]"#;

const JOBOWNERS: &str = "\
tests_deb-*        @DataDog/agent-delivery
kmt_*              @DataDog/ebpf-platform
lint_*             @octocat
";

const CODEOWNERS: &str = "/pkg/network/  @DataDog/networks\n";

const CONFIG: &str = r#"e2e_infra_jobs = ["new-e2e-*"]
"#;

fn project() -> Project {
    let project = Project::empty();
    project
        .file("jobs.json", JOBS)
        .file("JOBOWNERS", JOBOWNERS)
        .file("CODEOWNERS", CODEOWNERS)
        .file("triage.toml", CONFIG)
        .file(
            "artifacts/101/test_output.json",
            r#"{"Action":"fail","Package":"github.com/DataDog/datadog-agent/pkg/network/tracer","Test":"TestTracer"}"#,
        );
    project
}

const ROUTE_ARGS: &[&str] = &[
    "route",
    "--config",
    "triage.toml",
    "--jobs",
    "jobs.json",
    "--job-owners",
    "JOBOWNERS",
    "--code-owners",
    "CODEOWNERS",
    "--artifacts",
    "artifacts",
];

#[test]
fn routes_jobs_and_tests_to_teams() {
    let project = project();
    cli().args(ROUTE_ARGS).pwd(project.root()).passes().stdout_eq(
        "@DataDog/agent-delivery\n\
         \x20 job  tests_deb-x64-py3#101 failed_job_script\n\
         @DataDog/agent-e2e-testing\n\
         \x20 job  new-e2e-agent-platform#102 e2e_infra_failure\n\
         @DataDog/networks\n\
         \x20 test pkg/network/tracer TestTracer\n\
         Unrouted jobs\n\
         \x20 job  lint_go#104\n",
    );
}

#[test]
fn json_report_has_buckets() {
    let project = project();
    let mut args = ROUTE_ARGS.to_vec();
    args.extend(["-o", "json"]);
    let run = cli().args(&args).pwd(project.root()).passes();

    let json = run.stdout_json();
    assert_eq!(json["teams"]["@DataDog/agent-delivery"][0]["name"], "tests_deb-x64-py3");
    assert_eq!(json["teams"]["@DataDog/agent-e2e-testing"][0]["reason"], "e2e_infra_failure");
    assert_eq!(json["tests"]["@DataDog/networks"][0]["test"]["name"], "TestTracer");
    assert_eq!(json["unrouted"][0]["id"], 104);
}

#[test]
fn without_config_e2e_failures_route_by_owner() {
    let project = project();
    let args: Vec<&str> = ROUTE_ARGS.iter().copied().filter(|a| *a != "--config" && *a != "triage.toml").collect();
    cli()
        .args(&args)
        .pwd(project.root())
        .passes()
        .stdout_lacks("@DataDog/agent-e2e-testing")
        .stdout_has("new-e2e-agent-platform#102");
}

#[test]
fn invalid_jobs_document_is_an_error() {
    let project = project();
    project.file("jobs.json", "{");
    cli()
        .args(ROUTE_ARGS)
        .pwd(project.root())
        .fails()
        .stderr_has("invalid jobs document jobs.json");
}

#[test]
fn unknown_config_key_is_an_error() {
    let project = project();
    project.file("triage.toml", "unknown_key = 1\n");
    cli().args(ROUTE_ARGS).pwd(project.root()).fails().stderr_has("triage.toml");
}
