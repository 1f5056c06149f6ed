use assert_cmd::Command;
use predicates::str::contains;

const BIN_NAME: &str = "spendwise";

fn spendwise() -> Command {
    Command::cargo_bin(BIN_NAME).expect("binary exists")
}

#[test]
fn cli_help_prints_overview() {
    spendwise()
        .arg("--help")
        .assert()
        .success()
        .stdout(contains("budgeting"))
        .stdout(contains("--salary"));
}

#[test]
fn cli_version_prints_version_info() {
    spendwise()
        .arg("--version")
        .assert()
        .success()
        .stdout(contains("spendwise"));
}

#[test]
fn cli_rejects_unknown_flag() {
    spendwise().arg("--bogus").assert().failure();
}
