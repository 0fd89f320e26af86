//! Integration tests for the `oid` binary.
//!
//! Every test points `--config` at a file inside a temp directory so the
//! user's own configuration never leaks in.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const IANA: &str = "{iso(1) identified-organization(3) dod(6) internet(1) private(4) \
                    enterprise(1) 56521 example(999)}";

/// A command for running `oid` against an isolated config file.
struct Oid {
    dir: TempDir,
}

impl Oid {
    fn new() -> Self {
        Self {
            dir: TempDir::new().expect("failed to create temp dir"),
        }
    }

    fn cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("oid").unwrap();
        cmd.arg("--config").arg(self.dir.path().join("config.toml"));
        cmd
    }
}

// =============================================================================
// Global flags
// =============================================================================

#[test]
fn version_flag_works() {
    Oid::new()
        .cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("oid"));
}

#[test]
fn help_flag_works() {
    Oid::new()
        .cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("object identifiers"));
}

#[test]
fn debug_logs_to_stderr() {
    Oid::new()
        .cmd()
        .args(["--debug", "dot", "1.3.6"])
        .assert()
        .success()
        .stdout("1.3.6\n")
        .stderr(predicate::str::contains("[debug]"));
}

// =============================================================================
// Views
// =============================================================================

#[test]
fn dot_of_bracket_notation() {
    Oid::new()
        .cmd()
        .args(["dot", IANA])
        .assert()
        .success()
        .stdout("1.3.6.1.4.1.56521.999\n");
}

#[test]
fn dot_of_single_arc_fails() {
    Oid::new()
        .cmd()
        .args(["dot", "{iso(1)}"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("single arc"));
}

#[test]
fn asn_of_dot_notation() {
    Oid::new()
        .cmd()
        .args(["asn", "1.3.6"])
        .assert()
        .success()
        .stdout("{1 3 6}\n");
}

#[test]
fn asn_condenses_whitespace() {
    Oid::new()
        .cmd()
        .args(["asn", "  {iso(1)   3\tdod(6) }  "])
        .assert()
        .success()
        .stdout("{iso(1) 3 dod(6)}\n");
}

#[test]
fn show_lists_every_view() {
    Oid::new()
        .cmd()
        .args(["show", IANA])
        .assert()
        .success()
        .stdout(predicate::str::contains("1.3.6.1.4.1.56521.999"))
        .stdout(predicate::str::contains("iso(1)"))
        .stdout(predicate::str::contains("example(999)"));
}

#[test]
fn show_json() {
    let out = Oid::new()
        .cmd()
        .args(["show", IANA, "--json"])
        .output()
        .unwrap();
    assert!(out.status.success());

    let value: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(value["length"], 8);
    assert_eq!(value["root"], "iso(1)");
    assert_eq!(value["parent"], "56521");
    assert_eq!(value["leaf"], "example(999)");
}

#[test]
fn invalid_input_reports_error() {
    Oid::new()
        .cmd()
        .args(["show", "{iso(1) Bad(2)}"])
        .assert()
        .code(1)
        .stderr(predicate::str::starts_with("error:"))
        .stderr(predicate::str::contains("Bad(2)"));
}

// =============================================================================
// Hierarchy
// =============================================================================

#[test]
fn index_positions() {
    let oid = Oid::new();
    for (position, expected) in [("1", "3\n"), ("-1", "5\n"), ("100", "5\n"), ("-100", "1\n")] {
        oid.cmd()
            .args(["index", "1.3.6.1.4.1.56521.999.5", position])
            .assert()
            .success()
            .stdout(expected);
    }
}

#[test]
fn ancestry_lists_prefixes() {
    Oid::new()
        .cmd()
        .args(["ancestry", "1.3.6"])
        .assert()
        .success()
        .stdout("1\n1.3\n1.3.6\n");
}

#[test]
fn ancestor_exit_status() {
    let oid = Oid::new();
    oid.cmd()
        .args(["ancestor", "1.3.6", "1.3.6.1.4"])
        .assert()
        .success()
        .stdout("true\n");
    oid.cmd()
        .args(["ancestor", "1.3.6", "1.3.6"])
        .assert()
        .success();
    oid.cmd()
        .args(["ancestor", "1.3.6.1.4", "1.3.6"])
        .assert()
        .code(1)
        .stdout("false\n");
}

#[test]
fn child_keeps_input_notation() {
    let oid = Oid::new();
    oid.cmd()
        .args(["child", "1.3.6.1.4.1.56521.999", "5"])
        .assert()
        .success()
        .stdout("1.3.6.1.4.1.56521.999.5\n");
    oid.cmd()
        .args(["child", "{iso(1) 3}", "dod(6)"])
        .assert()
        .success()
        .stdout("{iso(1) 3 dod(6)}\n");
}

#[test]
fn child_rejects_bad_arc() {
    Oid::new()
        .cmd()
        .args(["child", "1.3", "-6"])
        .assert()
        .failure();
}

// =============================================================================
// Utilities
// =============================================================================

#[test]
fn compare_arcs() {
    let oid = Oid::new();
    oid.cmd().args(["compare", "5", "7"]).assert().success().stdout("<\n");
    oid.cmd().args(["compare", "007", "7"]).assert().success().stdout("=\n");
    oid.cmd()
        .args(["compare", "340282366920938463463374607431768211455", "7"])
        .assert()
        .success()
        .stdout(">\n");
    oid.cmd()
        .args(["compare", "-1", "7"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("'-1'"));
}

#[test]
fn validate_mixed_inputs() {
    Oid::new()
        .cmd()
        .args(["validate", "1.3.6.1", "1..3", "{iso(1)}"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("ok       1.3.6.1"))
        .stdout(predicate::str::contains("invalid  1..3"));
}

#[test]
fn validate_all_valid() {
    Oid::new()
        .cmd()
        .args(["validate", "1.3.6.1", IANA])
        .assert()
        .success();
}

#[test]
fn uuid_to_oid() {
    Oid::new()
        .cmd()
        .args(["uuid", "f81d4fae-7dec-11d0-a765-00a0c91e6bf6"])
        .assert()
        .success()
        .stdout("2.25.329800735698586629295641978511506172918\n");
}

#[test]
fn uuid_rejects_garbage() {
    Oid::new()
        .cmd()
        .args(["uuid", "not-a-uuid"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid UUID"));
}

// =============================================================================
// Configuration
// =============================================================================

#[test]
fn alias_roundtrip() {
    let oid = Oid::new();
    oid.cmd()
        .args(["config", "set", "aliases.pen", "1.3.6.1.4.1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Set aliases.pen = 1.3.6.1.4.1"));
    oid.cmd()
        .args(["config", "get", "aliases.pen"])
        .assert()
        .success()
        .stdout("1.3.6.1.4.1\n");
    oid.cmd()
        .args(["dot", "@pen.56521"])
        .assert()
        .success()
        .stdout("1.3.6.1.4.1.56521\n");
}

#[test]
fn configured_json_format() {
    let oid = Oid::new();
    oid.cmd()
        .args(["config", "set", "format", "json"])
        .assert()
        .success();
    oid.cmd()
        .args(["dot", "1.3.6"])
        .assert()
        .success()
        .stdout("\"1.3.6\"\n");
}

#[test]
fn config_rejects_unknown_key() {
    Oid::new()
        .cmd()
        .args(["config", "set", "trunk", "main"])
        .assert()
        .failure();
}

#[test]
fn unknown_alias_fails() {
    Oid::new()
        .cmd()
        .args(["dot", "@missing"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("@missing"));
}

#[test]
fn malformed_config_is_reported() {
    let oid = Oid::new();
    std::fs::write(oid.dir.path().join("config.toml"), "format = [").unwrap();
    oid.cmd()
        .args(["dot", "1.3"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("config"));
}

#[test]
fn completion_bash() {
    Oid::new()
        .cmd()
        .args(["completion", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("oid"));
}
