use assert_cmd::Command;
use predicates::prelude::*;

fn depsweep() -> Command {
    Command::cargo_bin("depsweep").unwrap()
}

#[test]
fn shows_help() {
    depsweep()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("dependency-cache cleanup"));
}

#[test]
fn shows_version() {
    depsweep()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn requires_subcommand() {
    depsweep()
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage:"));
}

#[test]
fn scan_subcommand_help() {
    depsweep()
        .args(["scan", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("List dependency-cache"));
}

#[test]
fn clean_subcommand_help() {
    depsweep()
        .args(["clean", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("after confirmation"));
}

#[test]
fn tui_subcommand_help() {
    depsweep()
        .args(["tui", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("interactive"));
}

#[test]
fn verbose_flag_accepted() {
    depsweep().args(["-vvv", "scan", "."]).assert().success();
}

#[test]
fn invalid_config_path_fails() {
    depsweep()
        .args(["--config", "/nonexistent/path.toml", "scan"])
        .assert()
        .failure();
}

#[test]
fn completions_are_generated() {
    depsweep()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("depsweep"));
}
