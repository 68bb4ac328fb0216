use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn cli_help_includes_usage() {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("backoffice"));

    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage"))
        .stdout(predicate::str::contains("clients"))
        .stdout(predicate::str::contains("admins"));
}

#[test]
fn clients_help_lists_operations() {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("backoffice"));

    cmd.args(["clients", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("delete"))
        .stdout(predicate::str::contains("by-admin"));
}
