//! Shared test utilities for E2E tests.
//!
//! This module provides a fixture that lays out a root git repository with
//! declared modules, plus helpers to run the `gis` binary against it.
//!
//! ## Usage
//!
//! Add `mod common;` to your test file, then use the helpers:
//!
//! ```rust,ignore
//! mod common;
//! use common::prelude::*;
//!
//! #[test]
//! fn test_example() {
//!     if should_skip_git_tests() {
//!         return;
//!     }
//!     let fixture = GisFixture::new().with_module("lib");
//!     fixture.command().arg("status").assert().success();
//! }
//! ```

use assert_fs::prelude::*;
use std::env;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Re-export commonly used test dependencies for convenience.
pub mod prelude {
    #![allow(unused_imports)]

    pub use assert_cmd::cargo::cargo_bin_cmd;
    pub use assert_fs::prelude::*;
    pub use assert_fs::TempDir;
    pub use predicates::prelude::*;

    pub use super::{git, lines, should_skip_git_tests, GisFixture};
}

/// Check if tests that drive a real `git` should be skipped.
///
/// Returns `true` if `SKIP_GIT_TESTS` is set or no `git` binary can be
/// started.
///
/// # Example
///
/// ```rust,ignore
/// if should_skip_git_tests() {
///     println!("Skipping git test");
///     return;
/// }
/// ```
pub fn should_skip_git_tests() -> bool {
    if env::var("SKIP_GIT_TESTS").is_ok() {
        return true;
    }
    !Command::new("git")
        .arg("--version")
        .output()
        .map(|o| o.status.success())
        .unwrap_or(false)
}

/// Run git in `dir`, panicking on failure.
#[allow(dead_code)]
pub fn git(dir: &Path, args: &[&str]) -> String {
    let output = Command::new("git")
        .args([
            "-c",
            "user.name=gis",
            "-c",
            "user.email=gis@example.com",
            "-c",
            "commit.gpgsign=false",
        ])
        .args(args)
        .current_dir(dir)
        .output()
        .expect("Failed to start git");
    assert!(
        output.status.success(),
        "git {:?} failed in {}: {}",
        args,
        dir.display(),
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8_lossy(&output.stdout).into_owned()
}

/// Create an empty repository on branch `master` in `dir`.
fn init_repository(dir: &Path) {
    fs::create_dir_all(dir).expect("Failed to create repository directory");
    git(dir, &["init", "-q"]);
    git(dir, &["symbolic-ref", "HEAD", "refs/heads/master"]);
}

/// A root repository with declared modules in a temporary directory.
///
/// Module directories and the marker file are hidden from the root's own
/// status through `.git/info/exclude`, so a fresh fixture reports every
/// module as clean.
pub struct GisFixture {
    temp_dir: assert_fs::TempDir,
    config_dir: assert_fs::TempDir,
    modules: Vec<String>,
}

#[allow(dead_code)]
impl GisFixture {
    /// Create a fixture whose root is an empty git repository with an empty
    /// `.gis-modules`.
    pub fn new() -> Self {
        let temp_dir = assert_fs::TempDir::new().expect("Failed to create temp directory");
        init_repository(temp_dir.path());
        let fixture = Self::in_dir(temp_dir);
        fixture.exclude(".gis-modules");
        fixture.write_marker();
        fixture
    }

    /// Create an empty directory that is neither a repository nor has a
    /// marker file.
    pub fn bare_root() -> Self {
        Self::in_dir(assert_fs::TempDir::new().expect("Failed to create temp directory"))
    }

    fn in_dir(temp_dir: assert_fs::TempDir) -> Self {
        let fixture = Self {
            temp_dir,
            config_dir: assert_fs::TempDir::new().expect("Failed to create config directory"),
            modules: Vec::new(),
        };
        fixture.with_config("")
    }

    /// Create a git repository under the root without declaring it.
    pub fn with_repository(self, name: &str) -> Self {
        init_repository(&self.path().join(name));
        self
    }

    fn exclude(&self, pattern: &str) {
        let exclude = self.path().join(".git").join("info").join("exclude");
        fs::create_dir_all(exclude.parent().unwrap()).unwrap();
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(exclude)
            .expect("Failed to open exclude file");
        writeln!(file, "/{}", pattern).unwrap();
    }

    fn write_marker(&self) {
        let content: String = self
            .modules
            .iter()
            .map(|m| format!("path = {}\n", m))
            .collect();
        self.temp_dir
            .child(".gis-modules")
            .write_str(&content)
            .expect("Failed to write marker file");
    }

    /// Add a module that is an empty git repository on `master`.
    pub fn with_module(self, name: &str) -> Self {
        init_repository(&self.path().join(name));
        self.declare(name)
    }

    /// Add a module with one committed file, `README.md`.
    pub fn with_committed_module(self, name: &str) -> Self {
        let fixture = self.with_module(name);
        let dir = fixture.path().join(name);
        fs::write(dir.join("README.md"), "# module\n").unwrap();
        git(&dir, &["add", "README.md"]);
        git(&dir, &["commit", "-q", "-m", "init"]);
        fixture
    }

    /// Add a module directory that is not a git repository.
    pub fn with_plain_module(self, name: &str) -> Self {
        fs::create_dir_all(self.path().join(name)).unwrap();
        self.declare(name)
    }

    /// Declare a module without creating its directory.
    pub fn with_declared_module(self, name: &str) -> Self {
        self.declare(name)
    }

    fn declare(mut self, name: &str) -> Self {
        if self.path().join(".git").exists() {
            self.exclude(name);
        }
        self.modules.push(name.to_string());
        self.write_marker();
        self
    }

    /// Replace the gis configuration file used by [`GisFixture::command`].
    pub fn with_config(self, content: &str) -> Self {
        fs::write(self.config_path(), content).expect("Failed to write config file");
        self
    }

    /// Add a file with the given path and content.
    pub fn with_file(self, path: &str, content: &str) -> Self {
        self.temp_dir
            .child(path)
            .write_str(content)
            .expect("Failed to write file");
        self
    }

    /// Get the path to the temporary directory.
    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// The configuration file, kept outside the root so it never shows up
    /// in the root's status.
    pub fn config_path(&self) -> PathBuf {
        self.config_dir.path().join("gis.toml")
    }

    /// The short name gis prints for the root module.
    pub fn root_name(&self) -> String {
        self.canonical_path()
            .file_name()
            .unwrap()
            .to_string_lossy()
            .into_owned()
    }

    fn canonical_path(&self) -> PathBuf {
        fs::canonicalize(self.path()).expect("Failed to canonicalize temp directory")
    }

    /// Create a child path in the temp directory.
    #[allow(dead_code)]
    pub fn child(&self, path: &str) -> assert_fs::fixture::ChildPath {
        self.temp_dir.child(path)
    }

    /// A `gis` command running in the root with colors off.
    pub fn command(&self) -> assert_cmd::Command {
        self.command_with_color("never")
    }

    /// A `gis` command running in the root with the given `--color` value.
    ///
    /// Git is prevented from searching above the root, so a declared module
    /// that is not a repository makes `git` fail there.
    pub fn command_with_color(&self, color: &str) -> assert_cmd::Command {
        let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("gis");
        cmd.current_dir(self.path())
            .env("GIS_CONFIG", self.config_path())
            .env_remove("GIS_GIT")
            .env("GIT_CEILING_DIRECTORIES", self.canonical_path())
            .env("GIT_AUTHOR_NAME", "gis")
            .env("GIT_AUTHOR_EMAIL", "gis@example.com")
            .env("GIT_COMMITTER_NAME", "gis")
            .env("GIT_COMMITTER_EMAIL", "gis@example.com")
            .arg("--color")
            .arg(color);
        cmd
    }
}

impl Default for GisFixture {
    fn default() -> Self {
        Self::new()
    }
}

/// Split captured output into lines.
#[allow(dead_code)]
pub fn lines(output: &[u8]) -> Vec<String> {
    String::from_utf8_lossy(output)
        .lines()
        .map(str::to_string)
        .collect()
}
