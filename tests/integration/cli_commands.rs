//! End-to-end tests driving the built binary.

use composer_codegen::config::DEFAULT_OUTPUT;
use composer_codegen::generator::Generator;
use std::process::{Command, Output};
use tempfile::TempDir;

fn run(root: &std::path::Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_composer-codegen"))
        .env_remove("COMPOSER_CODEGEN_LOG")
        .env_remove("COMPOSER_CODEGEN_LOG_FORMAT")
        .arg("--root")
        .arg(root)
        .args(args)
        .output()
        .unwrap()
}

#[test]
fn test_no_arguments_generates_default_file() {
    let temp_dir = TempDir::new().unwrap();
    let output = run(temp_dir.path(), &[]);
    assert!(
        output.status.success(),
        "stderr={:?}",
        String::from_utf8_lossy(&output.stderr)
    );

    let written = std::fs::read_to_string(temp_dir.path().join(DEFAULT_OUTPUT)).unwrap();
    assert_eq!(written, Generator::default().render());
}

#[test]
fn test_two_runs_are_byte_identical() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("Contexts.kt");

    assert!(run(temp_dir.path(), &["--output", "Contexts.kt", "generate"]).status.success());
    let first = std::fs::read(&path).unwrap();
    assert!(run(temp_dir.path(), &["--output", "Contexts.kt", "generate"]).status.success());
    let second = std::fs::read(&path).unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_check_exit_status_follows_freshness() {
    let temp_dir = TempDir::new().unwrap();
    let with = |command: &'static str| -> Vec<&'static str> {
        vec!["--interface-count", "5", "--output", "Contexts.kt", command]
    };

    let missing = run(temp_dir.path(), &with("check"));
    assert!(!missing.status.success());
    assert!(String::from_utf8_lossy(&missing.stderr).contains("does not exist"));

    assert!(run(temp_dir.path(), &with("generate")).status.success());
    assert!(run(temp_dir.path(), &with("check")).status.success());

    let stale = run(
        temp_dir.path(),
        &["--interface-count", "6", "--output", "Contexts.kt", "check"],
    );
    assert!(!stale.status.success());
    assert!(String::from_utf8_lossy(&stale.stderr).contains("out of date"));
}

#[test]
fn test_print_writes_rendered_text_to_stdout() {
    let temp_dir = TempDir::new().unwrap();
    let output = run(temp_dir.path(), &["--interface-count", "3", "print"]);
    assert!(output.status.success());
    assert_eq!(
        String::from_utf8(output.stdout).unwrap(),
        Generator::new(3).render()
    );
    assert!(!temp_dir.path().join(DEFAULT_OUTPUT).exists());
}

#[test]
fn test_negative_count_is_rejected() {
    let temp_dir = TempDir::new().unwrap();
    let output = run(temp_dir.path(), &["--interface-count", "-1", "generate"]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Invalid interface count"));
    assert!(!temp_dir.path().join(DEFAULT_OUTPUT).exists());
}

#[test]
fn test_environment_override() {
    let temp_dir = TempDir::new().unwrap();
    let output = Command::new(env!("CARGO_BIN_EXE_composer-codegen"))
        .env("COMPOSER_CODEGEN__GENERATOR__INTERFACE_COUNT", "2")
        .arg("--root")
        .arg(temp_dir.path())
        .arg("print")
        .output()
        .unwrap();
    assert!(output.status.success());
    assert_eq!(
        String::from_utf8(output.stdout).unwrap(),
        Generator::new(2).render()
    );
}

#[test]
fn test_logging_output_off_runs_silently() {
    let temp_dir = TempDir::new().unwrap();
    std::fs::write(
        temp_dir.path().join("composer-codegen.toml"),
        "[logging]\noutput = \"off\"\nlevel = \"debug\"\n",
    )
    .unwrap();

    let output = run(temp_dir.path(), &["--interface-count", "2", "print"]);
    assert!(
        output.status.success(),
        "stderr={:?}",
        String::from_utf8_lossy(&output.stderr)
    );
    assert!(output.stderr.is_empty());
    assert_eq!(
        String::from_utf8(output.stdout).unwrap(),
        Generator::new(2).render()
    );
}

#[test]
fn test_cli_count_overrides_invalid_project_count() {
    let temp_dir = TempDir::new().unwrap();
    std::fs::write(
        temp_dir.path().join("composer-codegen.toml"),
        "[generator]\ninterface_count = -1\n",
    )
    .unwrap();

    let rejected = run(temp_dir.path(), &["print"]);
    assert!(!rejected.status.success());

    let output = run(temp_dir.path(), &["--interface-count", "3", "print"]);
    assert!(output.status.success());
    assert_eq!(
        String::from_utf8(output.stdout).unwrap(),
        Generator::new(3).render()
    );
}
