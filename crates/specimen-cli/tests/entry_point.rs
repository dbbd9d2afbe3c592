//! Runs the compiled `specimen` binary end to end.

use std::process::{Command, Stdio};

use pretty_assertions::assert_eq;
use specimen_core::STATUS_LINE;

fn specimen() -> Command {
    let mut command = Command::new(env!("CARGO_BIN_EXE_specimen"));
    command.env_remove("SPECIMEN_LOG");
    command
}

#[test]
fn bare_invocation_prints_status_line_and_exits_zero() {
    let output = specimen().output().expect("binary runs");

    assert!(output.status.success());
    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8(output.stdout).expect("utf-8 stdout");
    assert_eq!(stdout, format!("{STATUS_LINE}\n"));
}

#[test]
fn closed_stdout_still_exits_zero() {
    let mut child = specimen()
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("binary spawns");
    drop(child.stdout.take());

    let output = child.wait_with_output().expect("binary finishes");
    assert_eq!(output.status.code(), Some(0));
    let stderr = String::from_utf8(output.stderr).expect("utf-8 stderr");
    assert!(!stderr.contains("specimen error"));
}

#[test]
fn verbose_logging_stays_off_stdout() {
    let output = specimen().arg("--verbose").output().expect("binary runs");

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).expect("utf-8 stdout");
    assert_eq!(stdout.lines().collect::<Vec<_>>(), vec![STATUS_LINE]);
    let stderr = String::from_utf8(output.stderr).expect("utf-8 stderr");
    assert!(stderr.contains("fixture constructed"));
}

#[test]
fn json_field_copy_via_binary() {
    let output = specimen()
        .args(["--format", "raw", "json", "--field", "comments"])
        .env_remove("SPECIMEN_INSPECT__MAX_DEPTH")
        .env_remove("SPECIMEN_INSPECT__PRETTY")
        .output()
        .expect("binary runs");

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).expect("utf-8 stdout");
    assert_eq!(stdout.trim_end(), r#"["评论1","评论2","评论3"]"#);
}

#[test]
fn unknown_field_exits_non_zero() {
    let output = specimen()
        .args(["json", "--field", "nope"])
        .output()
        .expect("binary runs");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8(output.stderr).expect("utf-8 stderr");
    assert!(stderr.contains("specimen error"));
}

#[test]
fn projects_round_trip_through_the_store_file() {
    let dir = tempfile::tempdir().expect("tempdir");
    let project = dir.path().join("alpha");
    std::fs::create_dir(&project).expect("create project dir");
    let store = dir.path().join("state").join("projects.json");

    let projects = |args: &[&str]| {
        specimen()
            .current_dir(dir.path())
            .env("SPECIMEN_PROJECTS__STORE_PATH", &store)
            .args(["--format", "raw", "projects"])
            .args(args)
            .output()
            .expect("binary runs")
    };

    let added = projects(&["add", "alpha", "--alias", "主项目"]);
    assert!(added.status.success());
    let added: serde_json::Value = serde_json::from_slice(&added.stdout).expect("json stdout");
    assert_eq!(added["displayName"], "主项目");
    let path = added["path"].as_str().expect("path");
    assert!(std::path::Path::new(path).is_absolute());
    assert!(path.ends_with("alpha"));
    assert!(store.exists());

    let listed = projects(&["list"]);
    let listed: serde_json::Value = serde_json::from_slice(&listed.stdout).expect("json stdout");
    assert_eq!(listed["total"], 1);
    assert_eq!(listed["items"][0]["id"], added["id"]);

    let missing = projects(&["rm", "no-such-id"]);
    assert_eq!(missing.status.code(), Some(1));
    let stderr = String::from_utf8(missing.stderr).expect("utf-8 stderr");
    assert!(stderr.contains("project not found"));
}
