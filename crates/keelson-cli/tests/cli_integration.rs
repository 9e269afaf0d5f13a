//! CLI subprocess integration tests.
//!
//! These tests invoke the `keelson` binary as a subprocess and verify
//! exit codes, stdout content, and JSON output stability.

use std::path::Path;
use std::process::Command;

fn keelson_bin() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_keelson"));
    cmd.env_remove("KEELSON_LOG");
    cmd
}

fn write_chart(dir: &Path) {
    let templates = dir.join("templates");
    std::fs::create_dir_all(&templates).unwrap();
    std::fs::write(
        templates.join("deployment.yaml"),
        "kind: Deployment\napiVersion: apps/v1\nmetadata:\n  name: web\n",
    )
    .unwrap();
    std::fs::write(
        templates.join("config.yaml"),
        "kind: Namespace\napiVersion: v1\nmetadata:\n  name: app\n---\nkind: ConfigMap\napiVersion: v1\nmetadata:\n  name: settings\n",
    )
    .unwrap();
    std::fs::write(
        templates.join("test-connection.yaml"),
        "kind: Pod\napiVersion: v1\nmetadata:\n  name: web-test\n  annotations:\n    \"helm.sh/hook\": test\n",
    )
    .unwrap();
    std::fs::write(templates.join("_helpers.tpl"), "{{ define \"x\" }}{{ end }}").unwrap();
    std::fs::write(templates.join("NOTES.yaml"), "").unwrap();
}

fn sorted_json(dir: &Path, extra: &[&str]) -> serde_json::Value {
    let output = keelson_bin()
        .args(["sort", "--json"])
        .args(extra)
        .arg(dir)
        .current_dir(dir)
        .output()
        .unwrap();
    assert!(
        output.status.success(),
        "keelson sort must exit 0: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    serde_json::from_slice(&output.stdout).unwrap()
}

fn manifest_sources(value: &serde_json::Value) -> Vec<String> {
    value["manifests"]
        .as_array()
        .unwrap()
        .iter()
        .map(|m| format!("{}:{}", m["head"]["kind"].as_str().unwrap(), m["name"].as_str().unwrap()))
        .collect()
}

#[test]
fn cli_version_exits_zero() {
    let output = keelson_bin().arg("--version").output().unwrap();
    assert!(output.status.success(), "keelson --version must exit 0");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("keelson"), "version output must contain 'keelson': {stdout}");
}

#[test]
fn cli_help_lists_commands() {
    let output = keelson_bin().arg("--help").output().unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("sort"), "help must list 'sort' command");
    assert!(stdout.contains("kinds"), "help must list 'kinds' command");
}

#[test]
fn cli_sort_install_json() {
    let dir = tempfile::tempdir().unwrap();
    write_chart(dir.path());

    let value = sorted_json(dir.path(), &[]);
    assert_eq!(
        manifest_sources(&value),
        vec![
            "Namespace:templates/config.yaml",
            "ConfigMap:templates/config.yaml",
            "Deployment:templates/deployment.yaml",
        ]
    );
    let hooks = value["hooks"].as_array().unwrap();
    assert_eq!(hooks.len(), 1);
    assert_eq!(hooks[0]["name"], "web-test");
    assert_eq!(hooks[0]["events"], serde_json::json!(["test"]));
    assert_eq!(hooks[0]["path"], "templates/test-connection.yaml");
}

#[test]
fn cli_sort_uninstall_json() {
    let dir = tempfile::tempdir().unwrap();
    write_chart(dir.path());

    let value = sorted_json(dir.path(), &["--uninstall"]);
    assert_eq!(
        manifest_sources(&value),
        vec![
            "Deployment:templates/deployment.yaml",
            "ConfigMap:templates/config.yaml",
            "Namespace:templates/config.yaml",
        ]
    );
}

#[test]
fn cli_sort_output_is_stable() {
    let dir = tempfile::tempdir().unwrap();
    write_chart(dir.path());

    let first = sorted_json(dir.path(), &["--order", "uninstall"]);
    let second = sorted_json(dir.path(), &["--order", "uninstall"]);
    assert_eq!(first, second);
}

#[test]
fn cli_sort_reads_default_order_from_config() {
    let dir = tempfile::tempdir().unwrap();
    write_chart(dir.path());
    std::fs::write(
        dir.path().join("keelson.toml"),
        "default_order = \"uninstall\"\napi_versions = [\"v1\", \"apps/v1\"]\n",
    )
    .unwrap();

    // keelson.toml is read from the working directory and is itself not a document.
    let chart = dir.path().join("templates");
    let output = keelson_bin()
        .args(["sort", "--json"])
        .arg(&chart)
        .current_dir(dir.path())
        .output()
        .unwrap();
    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(
        manifest_sources(&value),
        vec![
            "Deployment:deployment.yaml",
            "ConfigMap:config.yaml",
            "Namespace:config.yaml",
        ]
    );
}

#[test]
fn cli_sort_malformed_document_fails() {
    let dir = tempfile::tempdir().unwrap();
    write_chart(dir.path());
    std::fs::write(
        dir.path().join("templates/broken.yaml"),
        "kind: Service\nmetadata: {name: [oops\n",
    )
    .unwrap();

    let output = keelson_bin()
        .args(["sort", "--json"])
        .arg(dir.path())
        .current_dir(dir.path())
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(2), "malformed documents exit 2");
    assert!(output.stdout.is_empty(), "no partial results on failure");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("templates/broken.yaml"), "{stderr}");
}

#[test]
fn cli_invalid_config_fails() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("bad.toml");
    std::fs::write(&config, "not_a_setting = 1\n").unwrap();

    let output = keelson_bin()
        .args(["kinds", "--config"])
        .arg(&config)
        .current_dir(dir.path())
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(3));
}

#[test]
fn cli_kinds_uninstall_ends_with_unknown() {
    let dir = tempfile::tempdir().unwrap();
    let output = keelson_bin()
        .args(["kinds", "--json", "--order", "uninstall"])
        .current_dir(dir.path())
        .output()
        .unwrap();
    assert!(output.status.success());
    let kinds: Vec<String> = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(kinds.first().map(String::as_str), Some("APIService"));
    assert_eq!(kinds.last().map(String::as_str), Some("Unknown"));
}

#[test]
fn cli_closed_stdout_exits_quietly() {
    let dir = tempfile::tempdir().unwrap();
    let mut child = keelson_bin()
        .args(["kinds"])
        .current_dir(dir.path())
        .stdout(std::process::Stdio::piped())
        .stderr(std::process::Stdio::piped())
        .spawn()
        .unwrap();
    // Close the read end before the table is written.
    drop(child.stdout.take());

    let output = child.wait_with_output().unwrap();
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert_eq!(output.status.code(), Some(0), "{stderr}");
    assert!(!stderr.contains("panicked"), "{stderr}");
}
