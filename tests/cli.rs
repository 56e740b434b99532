use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn expenses(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("expenses").unwrap();
    cmd.env("EXPENSE_TRACKER_DIR", dir.path());
    cmd
}

#[test]
fn test_help_lists_subcommands() {
    let dir = TempDir::new().unwrap();
    expenses(&dir)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("tui"))
        .stdout(predicate::str::contains("config"));
}

#[test]
fn test_config_shows_paths() {
    let dir = TempDir::new().unwrap();
    expenses(&dir)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains(dir.path().to_string_lossy().to_string()))
        .stdout(predicate::str::contains("config.json"))
        .stdout(predicate::str::contains("\"recent_count\": 5"));
}

#[test]
fn test_init_writes_config_once() {
    let dir = TempDir::new().unwrap();
    expenses(&dir)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote default configuration"));
    assert!(dir.path().join("config.json").exists());

    expenses(&dir)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("already exists"));
}

#[test]
fn test_config_reads_saved_settings() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("config.json"),
        r#"{ "recent_count": 8, "export_dir": "/tmp/expense-exports" }"#,
    )
    .unwrap();

    expenses(&dir)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"recent_count\": 8"))
        .stdout(predicate::str::contains("/tmp/expense-exports"));
}

#[test]
fn test_invalid_config_fails() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("config.json"), "not json").unwrap();

    expenses(&dir)
        .arg("config")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse settings file"));
}

#[test]
fn test_unknown_date_format_fails() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("config.json"), r#"{ "date_format": "%Q" }"#).unwrap();

    expenses(&dir)
        .arg("config")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid date_format"));
}
