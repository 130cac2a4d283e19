//! # External Process Runner
//!
//! Everything gis does to a module goes through the [`ProcessRunner`] trait:
//! run a program with arguments in a working directory and hand back its
//! captured standard output together with the exit code. Standard error is
//! never inspected.
//!
//! The trait separates the dispatch logic from the concrete way processes are
//! started:
//!
//! - **`SystemRunner`** spawns real processes with `std::process::Command`.
//! - **`DryRunRunner`** starts nothing and returns the command line it would
//!   have executed, so `--dry-run` flows through the normal render path.
//!
//! Tests substitute mock runners to simulate module output, non-zero exits
//! and launch failures without a git installation.

use std::path::Path;
use std::process::{Command, Stdio};

use crate::error::{Error, Result};

/// Captured result of one process execution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessOutput {
    /// Standard output, decoded lossily as UTF-8.
    pub stdout: String,
    /// Exit code; `-1` when the process was terminated by a signal.
    pub exit_code: i32,
}

impl ProcessOutput {
    pub fn new(stdout: impl Into<String>, exit_code: i32) -> Self {
        Self {
            stdout: stdout.into(),
            exit_code,
        }
    }

    pub fn success(&self) -> bool {
        self.exit_code == 0
    }
}

/// Trait for starting external processes - allows mocking in tests
pub trait ProcessRunner: Send + Sync {
    /// Run `program` with `args` in `dir` and wait for it to finish.
    ///
    /// A non-zero exit is reported through [`ProcessOutput::exit_code`]; only a
    /// failure to start or wait for the process is an error.
    fn run(&self, dir: &Path, program: &str, args: &[String]) -> Result<ProcessOutput>;
}

/// Format a command line for logs and error messages.
pub fn command_line(program: &str, args: &[String]) -> String {
    std::iter::once(program)
        .chain(args.iter().map(String::as_str))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Runs processes on the host system.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemRunner;

impl ProcessRunner for SystemRunner {
    fn run(&self, dir: &Path, program: &str, args: &[String]) -> Result<ProcessOutput> {
        let output = Command::new(program)
            .args(args)
            .current_dir(dir)
            .stdin(Stdio::null())
            .output()
            .map_err(|e| Error::ProcessLaunch {
                module: dir.display().to_string(),
                command: command_line(program, args),
                message: e.to_string(),
            })?;

        Ok(ProcessOutput {
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            exit_code: output.status.code().unwrap_or(-1),
        })
    }
}

/// Prints instead of running: the returned output is the command line.
#[derive(Debug, Default, Clone, Copy)]
pub struct DryRunRunner;

impl ProcessRunner for DryRunRunner {
    fn run(&self, _dir: &Path, program: &str, args: &[String]) -> Result<ProcessOutput> {
        Ok(ProcessOutput::new(command_line(program, args), 0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_command_line_joins_program_and_args() {
        assert_eq!(
            command_line("git", &args(&["status", "-sb"])),
            "git status -sb"
        );
        assert_eq!(command_line("git", &[]), "git");
    }

    #[test]
    fn test_dry_run_returns_command_line() {
        let temp = TempDir::new().unwrap();
        let output = DryRunRunner
            .run(temp.path(), "git", &args(&["checkout", "-b", "feature/x"]))
            .unwrap();
        assert_eq!(output, ProcessOutput::new("git checkout -b feature/x", 0));
        assert!(output.success());
    }

    #[cfg(unix)]
    #[test]
    fn test_system_runner_captures_stdout_and_exit_code() {
        let temp = TempDir::new().unwrap();
        std::fs::write(temp.path().join("marker.txt"), "").unwrap();

        let output = SystemRunner.run(temp.path(), "ls", &[]).unwrap();
        assert!(output.success());
        assert!(output.stdout.contains("marker.txt"));

        let output = SystemRunner
            .run(temp.path(), "sh", &args(&["-c", "echo partial; exit 3"]))
            .unwrap();
        assert_eq!(output.exit_code, 3);
        assert_eq!(output.stdout, "partial\n");
    }

    #[test]
    fn test_system_runner_launch_failure_is_error() {
        let temp = TempDir::new().unwrap();
        let result = SystemRunner.run(temp.path(), "/nonexistent/gis-test-binary", &[]);
        match result {
            Err(Error::ProcessLaunch {
                module, command, ..
            }) => {
                assert_eq!(module, temp.path().display().to_string());
                assert_eq!(command, "/nonexistent/gis-test-binary");
            }
            other => panic!("expected launch failure, got {:?}", other),
        }
    }
}
