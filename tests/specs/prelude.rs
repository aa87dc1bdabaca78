//! Shared helpers for CLI specs.

use assert_cmd::Command;
use std::path::Path;
use tempfile::TempDir;

/// Environment the binary reads; cleared so the host CI cannot leak in.
const CI_VARS: &[&str] = &[
    "CI_PROJECT_TITLE",
    "CI_PROJECT_URL",
    "CI_COMMIT_SHA",
    "CI_COMMIT_SHORT_SHA",
    "CI_COMMIT_TITLE",
    "CI_COMMIT_REF_NAME",
    "CI_PIPELINE_ID",
    "CI_PIPELINE_URL",
    "CI_COMMIT_AUTHOR",
    "CI_TRIAGE_LOG",
    "COLOR",
];

/// A scratch directory holding input files.
pub struct Project {
    dir: TempDir,
}

impl Project {
    pub fn empty() -> Self {
        Self { dir: tempfile::tempdir().unwrap() }
    }

    /// Write `content` at `rel`, creating parent directories.
    pub fn file(&self, rel: &str, content: &str) -> &Self {
        let path = self.dir.path().join(rel);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(path, content).unwrap();
        self
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }
}

pub struct CliBuilder {
    cmd: Command,
}

pub fn cli() -> CliBuilder {
    let mut cmd = Command::cargo_bin("ci-triage").unwrap();
    for var in CI_VARS {
        cmd.env_remove(var);
    }
    cmd.env("NO_COLOR", "1");
    CliBuilder { cmd }
}

impl CliBuilder {
    pub fn args(mut self, args: &[&str]) -> Self {
        self.cmd.args(args);
        self
    }

    pub fn env(mut self, key: &str, value: &str) -> Self {
        self.cmd.env(key, value);
        self
    }

    pub fn pwd(mut self, dir: &Path) -> Self {
        self.cmd.current_dir(dir);
        self
    }

    pub fn passes(self) -> RunAssert {
        self.exits(0)
    }

    pub fn fails(self) -> RunAssert {
        let run = self.run();
        assert!(!run.output.status.success(), "expected failure\n{}", run.describe());
        run
    }

    pub fn exits(self, code: i32) -> RunAssert {
        let run = self.run();
        assert_eq!(run.output.status.code(), Some(code), "{}", run.describe());
        run
    }

    fn run(mut self) -> RunAssert {
        RunAssert { output: self.cmd.output().unwrap() }
    }
}

pub struct RunAssert {
    output: std::process::Output,
}

impl RunAssert {
    pub fn stdout(&self) -> String {
        String::from_utf8_lossy(&self.output.stdout).into_owned()
    }

    pub fn stderr(&self) -> String {
        String::from_utf8_lossy(&self.output.stderr).into_owned()
    }

    pub fn stdout_has(self, expected: &str) -> Self {
        assert!(self.stdout().contains(expected), "stdout lacks {expected:?}\n{}", self.describe());
        self
    }

    pub fn stdout_lacks(self, unexpected: &str) -> Self {
        assert!(!self.stdout().contains(unexpected), "stdout has {unexpected:?}\n{}", self.describe());
        self
    }

    pub fn stderr_has(self, expected: &str) -> Self {
        assert!(self.stderr().contains(expected), "stderr lacks {expected:?}\n{}", self.describe());
        self
    }

    pub fn stdout_eq(self, expected: &str) -> Self {
        similar_asserts::assert_eq!(self.stdout(), expected);
        self
    }

    pub fn stdout_json(&self) -> serde_json::Value {
        serde_json::from_str(&self.stdout()).unwrap()
    }

    fn describe(&self) -> String {
        format!(
            "status: {:?}\nstdout:\n{}\nstderr:\n{}",
            self.output.status.code(),
            self.stdout(),
            self.stderr()
        )
    }
}
