//! Common test utilities for labeltree CLI tests.
//!
//! `TestEnv` gives each test an isolated working directory and HOME, writes
//! fixtures into it and runs the built binary.

#![allow(dead_code)]

use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Output, Stdio};

use tempfile::TempDir;

/// Tree used by most CLI tests
pub const REEF_TREE: &str = r#"[
  {"id": "1", "name": "2025", "children": [
    {"id": "1.1", "name": "coral"},
    {"id": "1.2", "name": "algae"}
  ]},
  {"id": "2", "name": "shapes", "children": [
    {"id": "2.1", "name": "cube"},
    {"id": "2.2", "name": "cone"}
  ]},
  {"id": "3", "name": "loose"}
]"#;

/// Backend label listing
pub const BACKEND_LABELS: &str = r#"[
  {"id": 4, "name": "Reef", "categories": [{"id": 41, "name": "coral"}, {"id": 42, "name": "sponge"}]},
  {"id": 5, "name": "Empty", "categories": []}
]"#;

/// Result of running the labeltree binary
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub stdout: String,
    pub stderr: String,
}

pub struct TestEnv {
    pub work_dir: TempDir,
    pub home_dir: TempDir,
    bin: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        Self {
            work_dir: tempfile::tempdir().expect("work dir"),
            home_dir: tempfile::tempdir().expect("home dir"),
            bin: PathBuf::from(env!("CARGO_BIN_EXE_labeltree")),
        }
    }

    /// Write `content` to `name` inside the working directory
    pub fn write(&self, name: &str, content: &str) -> PathBuf {
        let path = self.work_dir.path().join(name);
        std::fs::write(&path, content).expect("write fixture");
        path
    }

    pub fn run(&self, args: &[&str]) -> TestResult {
        self.run_with_stdin(args, None)
    }

    pub fn run_with_env(&self, args: &[&str], env: &[(&str, &str)]) -> TestResult {
        let mut cmd = self.command(args);
        for (key, value) in env {
            cmd.env(key, value);
        }
        to_result(cmd.output().expect("failed to execute labeltree"))
    }

    pub fn run_with_stdin(&self, args: &[&str], stdin: Option<&str>) -> TestResult {
        let mut cmd = self.command(args);
        cmd.stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());
        let mut child = cmd.spawn().expect("failed to execute labeltree");
        {
            let mut pipe = child.stdin.take().expect("stdin");
            if let Some(input) = stdin {
                pipe.write_all(input.as_bytes()).expect("write stdin");
            }
        }
        to_result(child.wait_with_output().expect("wait for labeltree"))
    }

    fn command(&self, args: &[&str]) -> Command {
        let mut cmd = Command::new(&self.bin);
        cmd.current_dir(self.work_dir.path())
            .args(args)
            .env("HOME", self.home_dir.path())
            .env("XDG_CONFIG_HOME", self.home_dir.path().join(".config"))
            .env("NO_COLOR", "1")
            .env("TERM", "xterm-256color")
            .env("LANG", "en_US.UTF-8")
            .env_remove("LC_ALL")
            .env_remove("LC_CTYPE")
            .env_remove("RUST_LOG");
        for key in [
            "LABELTREE_CASCADE",
            "LABELTREE_MULTI_SELECT",
            "LABELTREE_VERBOSITY",
            "LABELTREE_UNICODE",
        ] {
            cmd.env_remove(key);
        }
        cmd
    }
}

fn to_result(output: Output) -> TestResult {
    TestResult {
        success: output.status.success(),
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
    }
}
