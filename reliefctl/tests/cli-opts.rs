use assert_cmd::Command;

const BIN: &str = "reliefctl";

#[test]
fn test_empty_args() {
    let mut cmd = Command::cargo_bin(BIN).unwrap();
    cmd.assert().failure();
}

#[test]
fn test_help() {
    let mut cmd = Command::cargo_bin(BIN).unwrap();
    cmd.arg("-h").assert().success();
}

#[test]
fn test_version_cmd() {
    let mut cmd = Command::cargo_bin(BIN).unwrap();
    cmd.arg("version").assert().success();
}

#[test]
fn test_invalid_subcmd() {
    let mut cmd = Command::cargo_bin(BIN).unwrap();
    cmd.arg("blah").assert().failure();
}

#[test]
fn test_completion() {
    let mut cmd = Command::cargo_bin(BIN).unwrap();
    cmd.arg("completion").arg("bash").assert().success();
}

#[test]
fn test_list_formats() {
    let mut cmd = Command::cargo_bin(BIN).unwrap();
    cmd.arg("list").arg("formats").assert().success();
}

#[test]
fn test_list_sources_builtin() {
    // No registry file given, the builtin one is used.
    //
    let mut cmd = Command::cargo_bin(BIN).unwrap();
    cmd.arg("list").arg("sources").assert().success();
}

#[test]
fn test_bad_sources_file() {
    let mut cmd = Command::cargo_bin(BIN).unwrap();
    cmd.arg("-S")
        .arg("/nonexistent/sources.hcl")
        .arg("list")
        .arg("sources")
        .assert()
        .failure();
}
