//! Integration tests for CLI behavior
//!
//! These tests run the `rulegraph` binary and check what it prints and how
//! it exits.

use std::path::PathBuf;

use assert_cmd::Command;
use assert_fs::TempDir;
use assert_fs::prelude::*;
use predicates::prelude::*;

/// Helper to create a command for the rulegraph CLI, run inside `dir` so no
/// config file from the surrounding tree is picked up.
fn rulegraph_cmd(dir: &TempDir) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_rulegraph"));
    cmd.current_dir(dir.path());
    cmd
}

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name)
}

const ORDERS_TEXT: &str = "\
Rules Engine
  AlphaNode[Order]
    PropertyNode[Order].Amount (Decimal)
      CompareNode[Order,Decimal] > 100
        DelegateProductionNode[Order]
    JoinNode[Order]
      OuterJoinNode[Order,Customer] => Order,Customer
    EachNode[Order]
  AlphaNode[Customer]
    NotNullNode[Customer] != null
      ValueNode[Customer] == gold
        AddFactProductionNode[Order] => Shop.Invoice
    EqualNode[Customer] (String)
";

mod help_command {
    use super::*;

    #[test]
    fn shows_help_with_flag() {
        let dir = TempDir::new().unwrap();
        rulegraph_cmd(&dir)
            .arg("--help")
            .assert()
            .success()
            .stdout(predicate::str::contains("Usage:"))
            .stdout(predicate::str::contains("render"));
    }

    #[test]
    fn shows_version_with_flag() {
        let dir = TempDir::new().unwrap();
        rulegraph_cmd(&dir)
            .arg("--version")
            .assert()
            .success()
            .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    }
}

mod render_command {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn renders_text_by_default() {
        let dir = TempDir::new().unwrap();
        let output = rulegraph_cmd(&dir)
            .arg("render")
            .arg(fixture("orders.jsonc"))
            .output()
            .unwrap();

        assert!(output.status.success());
        assert_eq!(String::from_utf8(output.stdout).unwrap(), ORDERS_TEXT);
    }

    #[test]
    fn renders_normalized_json() {
        let dir = TempDir::new().unwrap();
        let output = rulegraph_cmd(&dir)
            .args(["render", "--format", "json"])
            .arg(fixture("orders.jsonc"))
            .output()
            .unwrap();

        assert!(output.status.success());
        let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
        assert_eq!(json["kind"], "RulesEngine");
        assert_eq!(json["children"][0]["kind"], "Alpha");
        assert_eq!(
            json["children"][0]["children"][0]["property"],
            serde_json::json!("Amount")
        );
    }

    #[test]
    fn json_output_renders_back_to_the_same_text() {
        let dir = TempDir::new().unwrap();
        let output = rulegraph_cmd(&dir)
            .args(["render", "--format", "json"])
            .arg(fixture("orders.jsonc"))
            .output()
            .unwrap();
        let normalized = dir.child("normalized.json");
        normalized.write_binary(&output.stdout).unwrap();

        rulegraph_cmd(&dir)
            .args(["render", "normalized.json"])
            .assert()
            .success()
            .stdout(ORDERS_TEXT);
    }

    #[test]
    fn limit_truncates_and_still_succeeds() {
        let dir = TempDir::new().unwrap();
        rulegraph_cmd(&dir)
            .args(["render", "--limit", "2"])
            .arg(fixture("orders.jsonc"))
            .assert()
            .success()
            .stdout("Rules Engine\n  AlphaNode[Order]\n")
            .stderr(predicate::str::contains("truncated"));
    }

    #[test]
    fn reads_format_from_config_file() {
        let dir = TempDir::new().unwrap();
        dir.child(".rulegraph.jsonc")
            .write_str(r#"{ "format": "json" }"#)
            .unwrap();

        rulegraph_cmd(&dir)
            .arg("render")
            .arg(fixture("orders.jsonc"))
            .assert()
            .success()
            .stdout(predicate::str::starts_with("{"));
    }

    #[test]
    fn flags_override_config_file() {
        let dir = TempDir::new().unwrap();
        dir.child(".rulegraph.json")
            .write_str(r#"{ "format": "json", "limit": 1 }"#)
            .unwrap();

        rulegraph_cmd(&dir)
            .args(["render", "--format", "text", "--limit", "3"])
            .arg(fixture("orders.jsonc"))
            .assert()
            .success()
            .stdout("Rules Engine\n  AlphaNode[Order]\n    PropertyNode[Order].Amount (Decimal)\n");
    }

    #[test]
    fn explicit_config_path_is_used() {
        let dir = TempDir::new().unwrap();
        dir.child("custom.jsonc").write_str(r#"{ "limit": 1 }"#).unwrap();

        rulegraph_cmd(&dir)
            .args(["--config", "custom.jsonc", "render"])
            .arg(fixture("orders.jsonc"))
            .assert()
            .success()
            .stdout("Rules Engine\n");
    }

    #[test]
    fn unknown_kinds_render_nothing() {
        let dir = TempDir::new().unwrap();
        dir.child("net.json")
            .write_str(
                r#"{ "kind": "RulesEngine", "children": [
                    { "kind": "Mystery", "children": [{ "kind": "Alpha", "types": ["A.B"] }] }
                ] }"#,
            )
            .unwrap();

        rulegraph_cmd(&dir)
            .args(["render", "net.json"])
            .assert()
            .success()
            .stdout("Rules Engine\n  AlphaNode[B]\n")
            .stderr(predicate::str::contains("unknown node kind"));
    }

    #[test]
    fn fails_for_missing_file() {
        let dir = TempDir::new().unwrap();
        rulegraph_cmd(&dir)
            .args(["render", "missing.json"])
            .assert()
            .code(2)
            .stderr(predicate::str::contains("Failed to read missing.json"));
    }

    #[test]
    fn reports_arity_errors() {
        let dir = TempDir::new().unwrap();
        dir.child("bad.json")
            .write_str(r#"{ "kind": "RulesEngine", "children": [{ "kind": "LeftJoin", "types": ["A"] }] }"#)
            .unwrap();

        rulegraph_cmd(&dir)
            .args(["render", "bad.json"])
            .assert()
            .code(2)
            .stdout(predicate::str::is_empty())
            .stderr(predicate::str::contains(
                "LeftJoin node at $.children[0] expects 2 type(s), found 1",
            ));
    }

    #[test]
    fn rejects_deeply_nested_documents() {
        let dir = TempDir::new().unwrap();
        let levels = 5_000;
        let mut source = String::new();
        for _ in 0..levels {
            source.push_str(r#"{"kind":"Alpha","types":["A"],"children":["#);
        }
        source.push_str(r#"{"kind":"Alpha","types":["A"]}"#);
        source.push_str(&"]}".repeat(levels));
        dir.child("deep.json").write_str(&source).unwrap();

        rulegraph_cmd(&dir)
            .args(["render", "deep.json"])
            .assert()
            .code(2)
            .stdout(predicate::str::is_empty())
            .stderr(predicate::str::contains("nested deeper than"));
    }

    #[test]
    fn rejects_unknown_format() {
        let dir = TempDir::new().unwrap();
        rulegraph_cmd(&dir)
            .args(["render", "--format", "yaml"])
            .arg(fixture("orders.jsonc"))
            .assert()
            .failure();
    }
}

mod init_command {
    use super::*;

    #[test]
    fn creates_default_config() {
        let dir = TempDir::new().unwrap();
        rulegraph_cmd(&dir).arg("init").assert().success();

        dir.child(".rulegraph.jsonc")
            .assert(predicate::str::contains(r#""format": "text""#));
    }

    #[test]
    fn refuses_to_overwrite_without_force() {
        let dir = TempDir::new().unwrap();
        dir.child(".rulegraph.jsonc").write_str("{}").unwrap();

        rulegraph_cmd(&dir)
            .arg("init")
            .assert()
            .code(2)
            .stderr(predicate::str::contains("--force"));

        dir.child(".rulegraph.jsonc").assert("{}");
    }

    #[test]
    fn stores_given_settings_for_later_renders() {
        let dir = TempDir::new().unwrap();
        rulegraph_cmd(&dir)
            .args(["init", "--limit", "2"])
            .assert()
            .success();

        rulegraph_cmd(&dir)
            .arg("render")
            .arg(fixture("orders.jsonc"))
            .assert()
            .success()
            .stdout("Rules Engine\n  AlphaNode[Order]\n");
    }

    #[test]
    fn writes_to_config_path_when_given() {
        let dir = TempDir::new().unwrap();
        rulegraph_cmd(&dir)
            .args(["--config", "custom.jsonc", "init", "--format", "json"])
            .assert()
            .success();

        dir.child("custom.jsonc")
            .assert(predicate::str::contains(r#""format": "json""#));
        dir.child(".rulegraph.jsonc").assert(predicate::path::missing());
    }

    #[test]
    fn overwrites_with_force() {
        let dir = TempDir::new().unwrap();
        dir.child(".rulegraph.jsonc").write_str("{}").unwrap();

        rulegraph_cmd(&dir).args(["init", "--force"]).assert().success();

        dir.child(".rulegraph.jsonc")
            .assert(predicate::str::contains(r#""format": "text""#));
    }
}
