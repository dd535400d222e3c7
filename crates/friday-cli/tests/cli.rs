//! Smoke tests for the `is-it-friday` binary.
#![expect(clippy::expect_used, reason = "tests fail fast on harness errors")]

use std::path::Path;
use std::str;

use assert_cmd::Command;
use rstest::{fixture, rstest};
use tempfile::TempDir;

const PASSING: &str = "\
Feature: Passing
  Scenario: Friday is Friday
    Given today is Friday
    When I ask whether it's Friday yet
    Then I should be told \"TGIF\"
";

const FAILING: &str = "\
Feature: Failing
  Scenario: Monday isn't Friday
    Given today is Monday
    When I ask whether it's Friday yet
    Then I should be told \"TGIF\"
";

const PENDING: &str = "\
Feature: Pending
  Scenario: Tuesday is still to come
    Given today is Tuesday
    When I ask whether it's Friday yet
    Then I should be told \"Nope\"
";

fn bin() -> Command {
    let mut cmd = Command::cargo_bin("is-it-friday").expect("binary exists");
    cmd.env_remove("FRIDAY_FAIL_ON_PENDING")
        .env_remove("FRIDAY_LOG_LEVEL")
        .env_remove("FRIDAY_REPORT_FORMAT");
    cmd
}

#[fixture]
fn workspace() -> TempDir {
    let dir = tempfile::tempdir().expect("tempdir");
    write(dir.path(), "passing.feature", PASSING);
    write(dir.path(), "nested/failing.feature", FAILING);
    write(dir.path(), "pending.feature", PENDING);
    dir
}

fn write(root: &Path, name: &str, text: &str) {
    let path = root.join(name);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).expect("create feature dir");
    }
    std::fs::write(path, text).expect("write feature");
}

fn stdout_of(output: &std::process::Output) -> &str {
    str::from_utf8(&output.stdout).expect("utf8")
}

#[rstest]
#[case("Friday", "TGIF")]
#[case("friday", "Nope")]
#[case("Sunday", "Nope")]
fn ask_answers_the_question(#[case] day: &str, #[case] answer: &str) {
    let output = bin().args(["ask", day]).output().expect("runs");
    assert!(output.status.success());
    assert_eq!(stdout_of(&output), format!("{answer}\n"));
}

#[test]
fn steps_lists_every_binding() {
    let output = bin().arg("steps").output().expect("runs");
    assert!(output.status.success());
    let stdout = stdout_of(&output);
    assert_eq!(stdout.lines().count(), 7);
    assert!(stdout.contains("Given 'today is Tuesday'"));
    assert!(stdout.contains("Then 'I should be told {expected:string}'"));
    let mut locations: Vec<&str> = stdout
        .lines()
        .filter_map(|line| line.rsplit_once(" ("))
        .map(|(_, location)| location)
        .collect();
    locations.sort_unstable();
    locations.dedup();
    assert_eq!(locations.len(), 7, "{stdout}");
}

#[rstest]
fn passing_feature_succeeds(workspace: TempDir) {
    let output = bin()
        .arg("run")
        .arg(workspace.path().join("passing.feature"))
        .output()
        .expect("runs");
    assert!(output.status.success());
    assert!(stdout_of(&output).contains("1 scenarios (1 passed, 0 failed, 0 pending)"));
}

#[rstest]
fn failing_feature_exits_non_zero(workspace: TempDir) {
    let output = bin()
        .arg("run")
        .arg(workspace.path().join("nested/failing.feature"))
        .output()
        .expect("runs");
    assert_eq!(output.status.code(), Some(1));
    assert!(stdout_of(&output).contains("expected \"TGIF\", got \"Nope\""));
}

#[rstest]
fn pending_is_tolerated_by_default(workspace: TempDir) {
    let output = bin()
        .arg("run")
        .arg(workspace.path().join("pending.feature"))
        .output()
        .expect("runs");
    assert!(output.status.success());
    assert!(stdout_of(&output).contains("step not yet implemented: today is Tuesday"));
}

#[rstest]
fn fail_on_pending_flag_fails_the_run(workspace: TempDir) {
    let output = bin()
        .arg("run")
        .arg(workspace.path().join("pending.feature"))
        .arg("--fail-on-pending")
        .output()
        .expect("runs");
    assert_eq!(output.status.code(), Some(1));
}

#[rstest]
fn fail_on_pending_env_fails_the_run(workspace: TempDir) {
    let output = bin()
        .env("FRIDAY_FAIL_ON_PENDING", "yes")
        .arg("run")
        .arg(workspace.path().join("pending.feature"))
        .output()
        .expect("runs");
    assert_eq!(output.status.code(), Some(1));
}

#[rstest]
fn directories_are_searched_recursively(workspace: TempDir) {
    let output = bin()
        .args(["run", "--format", "json"])
        .arg(workspace.path())
        .output()
        .expect("runs");
    assert_eq!(output.status.code(), Some(1));
    let report: serde_json::Value =
        serde_json::from_str(stdout_of(&output)).expect("stdout is JSON");
    assert_eq!(report["summary"]["total"], 3);
    assert_eq!(report["summary"]["failed"], 1);
    assert_eq!(report["summary"]["pending"], 1);
}

#[rstest]
fn report_format_can_come_from_the_environment(workspace: TempDir) {
    let output = bin()
        .env("FRIDAY_REPORT_FORMAT", "junit")
        .arg("run")
        .arg(workspace.path().join("passing.feature"))
        .output()
        .expect("runs");
    assert!(output.status.success());
    assert!(stdout_of(&output).starts_with("<?xml"));
}

#[test]
fn missing_paths_are_reported() {
    let output = bin()
        .args(["run", "definitely/not/here.feature"])
        .output()
        .expect("runs");
    assert_eq!(output.status.code(), Some(2));
    let stderr = str::from_utf8(&output.stderr).expect("utf8");
    assert!(stderr.contains("definitely/not/here.feature"));
}

#[test]
fn invalid_log_level_is_a_configuration_error() {
    let output = bin()
        .env("FRIDAY_LOG_LEVEL", "shouty")
        .args(["ask", "Friday"])
        .output()
        .expect("runs");
    assert_eq!(output.status.code(), Some(2));
    let stderr = str::from_utf8(&output.stderr).expect("utf8");
    assert!(stderr.contains("unknown log level 'shouty'"));
}
