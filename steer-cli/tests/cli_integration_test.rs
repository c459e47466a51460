//! End-to-end tests for the `steer` binary.
//!
//! Each test runs the real binary in an isolated temporary directory
//! with its own log directory, so log files and `.env` handling can be
//! asserted without touching the host environment.

use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Isolated working directory plus log directory for one test.
struct TestEnv {
    temp_dir: TempDir,
    logs_dir: PathBuf,
}

impl TestEnv {
    fn new() -> Self {
        let temp_dir = TempDir::new().unwrap();
        let logs_dir = temp_dir.path().join("logs");
        TestEnv { temp_dir, logs_dir }
    }

    fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// A `steer` command rooted in the test directory with the logging
    /// switches cleared, so only what a test sets explicitly applies.
    fn steer_cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("steer").unwrap();
        cmd.current_dir(self.temp_dir.path());
        cmd.env("STEER_LOGS_DIR", &self.logs_dir);
        cmd.env_remove("LOG.COMMANDS");
        cmd.env_remove("LOG.ERRORS");
        cmd.env_remove("LOG.FILE_TYPE");
        cmd.env_remove("RUST_LOG");
        cmd
    }

    fn write_file(&self, name: &str, contents: &str) {
        fs::write(self.temp_dir.path().join(name), contents).unwrap();
    }

    fn log_exists(&self, name: &str) -> bool {
        self.logs_dir.join(name).is_file()
    }

    fn read_log(&self, name: &str) -> String {
        fs::read_to_string(self.logs_dir.join(name)).unwrap()
    }
}

#[test]
fn bare_invocation_prints_the_usage_signature() {
    let env = TestEnv::new();
    env.steer_cmd()
        .assert()
        .success()
        .stdout(predicate::str::contains("./steer help"));
}

#[test]
fn unknown_command_reports_not_found_without_logging() {
    let env = TestEnv::new();
    env.steer_cmd()
        .arg("deploy")
        .arg("env=prod")
        .assert()
        .success()
        .stdout(predicate::str::contains("Controller not found for deploy"));
    assert!(!env.log_exists("error.log"));
}

#[test]
fn unknown_subcommand_names_both_tokens() {
    let env = TestEnv::new();
    env.steer_cmd()
        .arg("files")
        .arg("wipe")
        .assert()
        .success()
        .stdout(predicate::str::contains("Controller not found for files wipe"));
}

#[test]
fn bare_namespace_without_default_reports_the_command_alone() {
    let env = TestEnv::new();
    env.steer_cmd()
        .arg("files")
        .assert()
        .success()
        .stdout(predicate::str::contains("Controller not found for files\n"));
}

#[test]
fn missing_required_parameter_is_printed_and_logged_masked() {
    let env = TestEnv::new();
    env.steer_cmd()
        .arg("login")
        .arg("token=secret123")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Missing Parameter: Account user name (user=<name>)",
        ));

    let errors = env.read_log("error.log");
    assert!(errors.contains("login token=***"));
    assert!(errors.contains("->\tMissing Parameter: Account user name (user=<name>)"));
    assert!(!errors.contains("secret123"));
}

#[test]
fn login_succeeds_and_keeps_the_token_out_of_the_info_log() {
    let env = TestEnv::new();
    env.steer_cmd()
        .arg("login")
        .arg("user=amy")
        .arg("token=secret123")
        .assert()
        .success()
        .stdout(predicate::str::contains("Authenticated as amy"));

    let info = env.read_log("info.log");
    assert!(info.contains(r#"login - {"user":"amy"}"#));
    assert!(!info.contains("secret123"));
}

#[test]
fn command_audit_log_is_opt_in() {
    let env = TestEnv::new();
    env.steer_cmd()
        .arg("login")
        .arg("user=amy")
        .arg("token=secret123")
        .assert()
        .success();
    assert!(!env.read_log("info.log").contains("token=***"));

    let audited = TestEnv::new();
    audited
        .steer_cmd()
        .env("LOG.COMMANDS", "true")
        .arg("login")
        .arg("user=amy")
        .arg("token=secret123")
        .assert()
        .success();
    let info = audited.read_log("info.log");
    assert!(info.contains("login user=amy token=***"));
    assert!(!info.contains("secret123"));
}

#[test]
fn files_copy_round_trips_through_the_filesystem() {
    let env = TestEnv::new();
    env.write_file("a.txt", "hello");
    env.steer_cmd()
        .arg("files")
        .arg("copy")
        .arg("from=a.txt")
        .arg("to=nested/b.txt")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Copied a.txt to nested/b.txt (5 bytes)",
        ));
    assert_eq!(
        fs::read_to_string(env.path().join("nested/b.txt")).unwrap(),
        "hello"
    );
}

#[test]
fn files_copy_missing_source_is_reported_and_logged_when_enabled() {
    let env = TestEnv::new();
    env.steer_cmd()
        .env("LOG.ERRORS", "true")
        .arg("files")
        .arg("copy")
        .arg("from=ghost.txt")
        .arg("to=out.txt")
        .assert()
        .success()
        .stdout(predicate::str::contains("Source file not found: 'ghost.txt'"));

    let errors = env.read_log("error.log");
    assert!(errors.contains("files copy from=ghost.txt to=out.txt"));
    assert!(errors.contains("\tSource file not found: 'ghost.txt'"));
}

#[test]
fn files_copy_missing_source_stays_out_of_the_log_by_default() {
    let env = TestEnv::new();
    env.steer_cmd()
        .arg("files")
        .arg("copy")
        .arg("from=ghost.txt")
        .arg("to=out.txt")
        .assert()
        .success();
    assert!(!env.log_exists("error.log"));
}

#[test]
fn files_read_limits_output_to_the_requested_lines() {
    let env = TestEnv::new();
    env.write_file("f.txt", "one\ntwo\nthree\n");
    env.steer_cmd()
        .arg("files")
        .arg("read")
        .arg("path=f.txt")
        .arg("lines=2")
        .assert()
        .success()
        .stdout(predicate::str::contains("one\ntwo"))
        .stdout(predicate::str::contains("three").not());
}

#[test]
fn help_menu_lists_the_registered_commands() {
    let env = TestEnv::new();
    env.steer_cmd()
        .arg("help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Available Commands:"))
        .stdout(predicate::str::contains("login"))
        .stdout(predicate::str::contains("copy"))
        .stdout(predicate::str::contains("read"));
}

#[test]
fn help_screen_details_a_command() {
    let env = TestEnv::new();
    env.steer_cmd()
        .arg("help")
        .arg("login")
        .assert()
        .success()
        .stdout(predicate::str::contains("user=<name>"))
        .stdout(predicate::str::contains("API token used to authenticate"));
}

#[test]
fn help_screen_for_a_subcommand_links_its_siblings() {
    let env = TestEnv::new();
    env.steer_cmd()
        .arg("help")
        .arg("files")
        .arg("copy")
        .assert()
        .success()
        .stdout(predicate::str::contains("from=<path>"))
        .stdout(predicate::str::contains("help files read"));
}

#[test]
fn about_prints_the_package_version() {
    let env = TestEnv::new();
    env.steer_cmd()
        .arg("about")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")))
        .stdout(predicate::str::contains("File and session toolbox"));
}

#[test]
fn daily_log_style_dates_the_file_names() {
    let env = TestEnv::new();
    env.steer_cmd()
        .env("LOG.FILE_TYPE", "daily")
        .arg("login")
        .arg("token=secret123")
        .assert()
        .success();

    let dated = format!("error-{}.log", chrono::Local::now().format("%Y-%m-%d"));
    assert!(env.log_exists(&dated));
    assert!(!env.log_exists("error.log"));
}

#[test]
fn dotenv_file_configures_the_log_directory() {
    let env = TestEnv::new();
    let custom = env.path().join("custom-logs");
    env.write_file(".env", &format!("STEER_LOGS_DIR={}\n", custom.display()));

    let mut cmd = Command::cargo_bin("steer").unwrap();
    cmd.current_dir(env.path());
    cmd.env_remove("STEER_LOGS_DIR");
    cmd.env_remove("LOG.COMMANDS");
    cmd.env_remove("LOG.ERRORS");
    cmd.env_remove("LOG.FILE_TYPE");
    cmd.arg("login").arg("token=x").assert().success();

    assert!(custom.join("error.log").is_file());
    assert!(!env.log_exists("error.log"));
}
