//! `ci-triage audit` specs
//!
//! Every team listed first in CODEOWNERS needs a slack channel and a jira
//! project. Gaps are printed once per team and exit with code 1.

use crate::prelude::*;

const CODEOWNERS: &str = "\
/pkg/util/       @DataDog/agent-shared-components
/pkg/network/    @DataDog/networks @DataDog/ebpf-platform
/pkg/network/ebpf/ @DataDog/networks
/cmd/agent/      @DataDog/agent-runtimes
/docs/           @octocat
";

const SLACK_MAP: &str = "\
'@datadog/agent-shared-components': '#agent-shared-components'
'@datadog/networks': DEFAULT_SLACK_CHANNEL
";

const JIRA_MAP: &str = "\
'@datadog/agent-shared-components': ASCII
'@datadog/agent-runtimes': ARUN
";

fn project() -> Project {
    let project = Project::empty();
    project
        .file("CODEOWNERS", CODEOWNERS)
        .file("slack.yaml", SLACK_MAP)
        .file("jira.yaml", JIRA_MAP);
    project
}

const AUDIT_ARGS: &[&str] =
    &["audit", "--code-owners", "CODEOWNERS", "--slack-map", "slack.yaml", "--jira-map", "jira.yaml"];

#[test]
fn reports_each_team_once_and_exits_one() {
    let project = project();
    cli().args(AUDIT_ARGS).pwd(project.root()).exits(1).stdout_eq(
        "The team @DataDog/networks doesn't have a jira project assigned\n\
         The team @DataDog/agent-runtimes doesn't have a slack channel assigned\n",
    );
}

#[test]
fn quiet_prints_nothing() {
    let project = project();
    let mut args = AUDIT_ARGS.to_vec();
    args.push("--quiet");
    cli().args(&args).pwd(project.root()).exits(1).stdout_eq("");
}

#[test]
fn complete_registry_passes() {
    let project = project();
    project
        .file(
            "slack.yaml",
            "'@datadog/agent-shared-components': '#a'\n'@datadog/networks': '#b'\n'@datadog/agent-runtimes': '#c'\n",
        )
        .file(
            "jira.yaml",
            "'@datadog/agent-shared-components': A\n'@datadog/networks': B\n'@datadog/agent-runtimes': C\n",
        );
    cli()
        .args(AUDIT_ARGS)
        .pwd(project.root())
        .passes()
        .stdout_has("All 3 teams have a slack channel and a jira project");
}

#[test]
fn json_report() {
    let project = project();
    let mut args = AUDIT_ARGS.to_vec();
    args.extend(["-o", "json"]);
    let run = cli().args(&args).pwd(project.root()).exits(1);

    let json = run.stdout_json();
    assert_eq!(json["teams_checked"], 3);
    assert_eq!(json["gaps"][0]["team"], "@DataDog/networks");
    assert_eq!(json["gaps"][0]["missing_project"], true);
    assert_eq!(json["gaps"][0]["missing_channel"], false);
}

#[test]
fn non_string_map_value_is_an_error() {
    let project = project();
    project.file("jira.yaml", "'@datadog/networks': [NET]\n");
    cli().args(AUDIT_ARGS).pwd(project.root()).exits(1).stderr_has("jira.yaml");
}
