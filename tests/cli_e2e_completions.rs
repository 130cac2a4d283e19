//! End-to-end tests for the `gis completions` command.

#[allow(dead_code)]
mod common;
#[allow(unused_imports)]
use common::prelude::*;

#[test]
fn test_completions_help() {
    let mut cmd = cargo_bin_cmd!("gis");
    cmd.arg("completions")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Generate shell completion scripts"))
        .stdout(predicate::str::contains("bash"))
        .stdout(predicate::str::contains("zsh"))
        .stdout(predicate::str::contains("fish"));
}

#[test]
fn test_completions_bash() {
    let mut cmd = cargo_bin_cmd!("gis");
    cmd.arg("completions")
        .arg("bash")
        .assert()
        .success()
        .stdout(predicate::str::contains("_gis()"))
        .stdout(predicate::str::contains("status"))
        .stdout(predicate::str::contains("checkout-branch"))
        .stdout(predicate::str::contains("remove-branch"));
}

#[test]
fn test_completions_zsh() {
    let mut cmd = cargo_bin_cmd!("gis");
    cmd.arg("completions")
        .arg("zsh")
        .assert()
        .success()
        .stdout(predicate::str::contains("#compdef gis"));
}

#[test]
fn test_completions_need_no_marker_file() {
    let temp = TempDir::new().unwrap();
    let mut cmd = cargo_bin_cmd!("gis");
    cmd.current_dir(temp.path())
        .arg("completions")
        .arg("fish")
        .assert()
        .success()
        .stdout(predicate::str::is_empty().not());
}

#[test]
fn test_completions_invalid_shell() {
    let mut cmd = cargo_bin_cmd!("gis");
    cmd.arg("completions")
        .arg("invalid-shell")
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("invalid value"));
}
