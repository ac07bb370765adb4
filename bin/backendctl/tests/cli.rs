//! ---
//! backend_section: "cli"
//! backend_subsection: "integration-tests"
//! backend_type: "source"
//! backend_scope: "code"
//! backend_description: "End-to-end tests for the backendctl binary."
//! backend_version: "v0.1.0"
//! backend_owner: "tbd"
//! ---
use std::path::Path;

use assert_cmd::Command;

fn backendctl(workdir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("backendctl").expect("binary built");
    cmd.current_dir(workdir)
        .env_remove("BACKEND_CONFIG")
        .env_remove("BACKEND_LOG")
        .env_remove("RUST_LOG");
    cmd
}

fn stdout_of(cmd: &mut Command) -> String {
    let output = cmd.output().expect("command runs");
    assert!(output.status.success(), "command failed: {output:?}");
    String::from_utf8(output.stdout).expect("utf8 stdout")
}

#[test]
fn version_flag_prints_description() {
    let dir = tempfile::tempdir().expect("tempdir");
    backendctl(dir.path())
        .arg("--version")
        .assert()
        .success()
        .stdout("backend version 0.1, build on go 1.5+\n");
}

#[test]
fn no_subcommand_describes() {
    let dir = tempfile::tempdir().expect("tempdir");
    let stdout = stdout_of(&mut backendctl(dir.path()));
    assert_eq!(stdout, "backend version 0.1, build on go 1.5+\n");
}

#[test]
fn legacy_format_keeps_old_spelling() {
    let dir = tempfile::tempdir().expect("tempdir");
    let stdout = stdout_of(backendctl(dir.path()).args(["describe", "--format", "legacy"]));
    assert_eq!(stdout, "backend verion 0.1, build on go 1.5+\n");
}

#[test]
fn json_format_is_machine_readable() {
    let dir = tempfile::tempdir().expect("tempdir");
    let stdout = stdout_of(backendctl(dir.path()).args(["describe", "--format", "json"]));
    let value: serde_json::Value = serde_json::from_str(&stdout).expect("valid json");
    assert_eq!(value["description"], "backend version 0.1, build on go 1.5+");
    assert_eq!(value["toolchain_version"], "1.5+");
}

#[test]
fn config_file_overrides_versions() {
    let dir = tempfile::tempdir().expect("tempdir");
    let config = dir.path().join("custom.toml");
    std::fs::write(&config, "[version]\nproduct = \"2.3.1\"\ntoolchain = \"1.21+\"\n")
        .expect("write config");

    let stdout = stdout_of(backendctl(dir.path()).arg("--config").arg(&config).arg("describe"));
    assert_eq!(stdout, "backend version 2.3.1, build on go 1.21+\n");
}

#[test]
fn default_config_location_is_used() {
    let dir = tempfile::tempdir().expect("tempdir");
    std::fs::create_dir(dir.path().join("configs")).expect("mkdir");
    std::fs::write(
        dir.path().join("configs/backend.toml"),
        "[version]\nproduct = \"0.7\"\n",
    )
    .expect("write config");

    let stdout = stdout_of(&mut backendctl(dir.path()));
    assert_eq!(stdout, "backend version 0.7, build on go 1.5+\n");
}

#[test]
fn invalid_config_fails_with_message() {
    let dir = tempfile::tempdir().expect("tempdir");
    let config = dir.path().join("bad.toml");
    std::fs::write(&config, "[version]\ntoolchain = \"\"\n").expect("write config");

    let output = backendctl(dir.path())
        .arg("--config")
        .arg(&config)
        .output()
        .expect("command runs");
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("toolchain version must not be empty"), "{stderr}");
    assert!(output.stdout.is_empty());
}

#[test]
fn build_info_starts_with_description() {
    let dir = tempfile::tempdir().expect("tempdir");
    let stdout = stdout_of(backendctl(dir.path()).arg("build-info"));
    let mut lines = stdout.lines();
    assert_eq!(lines.next(), Some("backend version 0.1, build on go 1.5+"));
    assert!(stdout.contains("Target: "));
}

#[test]
fn backend_config_env_overrides_versions() {
    let dir = tempfile::tempdir().expect("tempdir");
    let config = dir.path().join("env.toml");
    std::fs::write(&config, "[version]\nproduct = \"5.0\"\n").expect("write config");

    let stdout = stdout_of(backendctl(dir.path()).env("BACKEND_CONFIG", &config));
    assert_eq!(stdout, "backend version 5.0, build on go 1.5+\n");
}

#[test]
fn backend_config_env_pointing_nowhere_fails() {
    let dir = tempfile::tempdir().expect("tempdir");
    let output = backendctl(dir.path())
        .env("BACKEND_CONFIG", dir.path().join("missing.toml"))
        .output()
        .expect("command runs");
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("missing.toml"), "{stderr}");
    assert!(stderr.contains("does not exist"), "{stderr}");
    assert!(output.stdout.is_empty());
}

#[test]
fn blank_backend_config_env_is_ignored() {
    let dir = tempfile::tempdir().expect("tempdir");
    let stdout = stdout_of(backendctl(dir.path()).env("BACKEND_CONFIG", "   "));
    assert_eq!(stdout, "backend version 0.1, build on go 1.5+\n");
}
