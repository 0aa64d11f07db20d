//! Integration tests for the uiconf CLI binary.
//!
//! These tests exercise the actual compiled binary using assert_cmd.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

/// Get a Command for the uiconf binary
fn uiconf_cmd() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("uiconf"));
    cmd.env_remove("UICONF_CONFIG")
        .env_remove("RUST_LOG")
        .env("NO_COLOR", "1");
    cmd
}

// ============================================================================
// Help and Version Tests
// ============================================================================

#[test]
fn test_help_output() {
    uiconf_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("layered UI configuration"));
}

#[test]
fn test_version_output() {
    uiconf_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("uiconf"));
}

#[test]
fn test_no_command_shows_help_hint() {
    uiconf_cmd()
        .assert()
        .success()
        .stdout(predicate::str::contains("uiconf --help"));
}

// ============================================================================
// Get Command Tests
// ============================================================================

#[test]
fn test_get_uses_core_platform_by_default() {
    uiconf_cmd()
        .args(["get", "spinner"])
        .assert()
        .success()
        .stdout("crescent\n");
}

#[test]
fn test_get_follows_most_specific_platform() {
    uiconf_cmd()
        .args(["get", "spinner", "-p", "mobile", "-p", "ios"])
        .assert()
        .success()
        .stdout("ios\n");
}

#[test]
fn test_get_as_number() {
    uiconf_cmd()
        .args(["get", "keyboardHeight", "--as", "number", "-p", "android"])
        .assert()
        .success()
        .stdout("300\n");
}

#[test]
fn test_get_missing_number_is_nan() {
    uiconf_cmd()
        .args(["get", "nothingHere", "--as", "number"])
        .assert()
        .success()
        .stdout("NaN\n");
}

#[test]
fn test_get_as_bool_with_fallback() {
    uiconf_cmd()
        .args(["get", "hoverCSS", "--as", "bool", "--fallback", "true"])
        .assert()
        .success()
        .stdout("true\n");

    uiconf_cmd()
        .args(["get", "hoverCSS", "--as", "bool", "-p", "ios", "--fallback", "true"])
        .assert()
        .success()
        .stdout("false\n");
}

#[test]
fn test_get_raw_fallback() {
    uiconf_cmd()
        .args(["get", "nothingHere", "--fallback", "top"])
        .assert()
        .success()
        .stdout("top\n");
}

#[test]
fn test_get_invalid_bool_fallback_fails() {
    uiconf_cmd()
        .args(["get", "hoverCSS", "--as", "bool", "--fallback", "yes"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid boolean fallback"));
}

#[test]
fn test_get_empty_key_fails() {
    uiconf_cmd()
        .args(["get", ""])
        .assert()
        .failure()
        .stderr(predicate::str::contains("config key is not defined"));
}

#[test]
fn test_get_json_output() {
    uiconf_cmd()
        .args(["get", "tabsPlacement", "-p", "windows", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"key\": \"tabsPlacement\""))
        .stdout(predicate::str::contains("\"value\": \"top\""));
}

// ============================================================================
// URL Override Tests
// ============================================================================

#[test]
fn test_url_override_wins() {
    uiconf_cmd()
        .args([
            "get",
            "tabsPlacement",
            "-p",
            "ios",
            "--url",
            "https://app.test/?vmTabsPlacement=top",
        ])
        .assert()
        .success()
        .stdout("top\n");
}

#[test]
fn test_url_boolean_is_coerced() {
    uiconf_cmd()
        .args(["get", "hoverCSS", "--json", "--url", "https://app.test/#/page?vmHoverCSS=true"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"value\": true"));
}

#[test]
fn test_invalid_url_fails() {
    uiconf_cmd()
        .args(["get", "spinner", "--url", "not a url"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("error"));
}

// ============================================================================
// Config File Tests
// ============================================================================

#[test]
fn test_json_config_platform_mode() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("uiconf.json");
    fs::write(&path, r#"{ "platforms": { "ios": { "mode": "md" } } }"#).unwrap();

    uiconf_cmd()
        .args(["get", "spinner", "-p", "mobile", "-p", "ios", "-c"])
        .arg(&path)
        .assert()
        .success()
        .stdout("crescent\n");
}

#[test]
fn test_toml_config_global_value() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("uiconf.toml");
    fs::write(
        &path,
        "tabsPlacement = \"top\"\n\n[platforms.ios]\nbackButtonText = \"Zurück\"\n",
    )
    .unwrap();

    uiconf_cmd()
        .args(["get", "tabsPlacement", "--config"])
        .arg(&path)
        .assert()
        .success()
        .stdout("top\n");

    uiconf_cmd()
        .args(["get", "backButtonText", "-p", "ios", "--config"])
        .arg(&path)
        .assert()
        .success()
        .stdout("Zurück\n");
}

#[test]
fn test_config_from_environment() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("uiconf.json");
    fs::write(&path, r#"{ "menuType": "push" }"#).unwrap();

    uiconf_cmd()
        .env("UICONF_CONFIG", &path)
        .args(["get", "menuType"])
        .assert()
        .success()
        .stdout("push\n");
}

#[test]
fn test_missing_config_fails() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("absent.json");

    uiconf_cmd()
        .args(["get", "spinner", "-c"])
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("error"))
        .stderr(predicate::str::contains("cannot read"));
}

#[test]
fn test_malformed_config_fails() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("uiconf.json");
    fs::write(&path, "{ not json").unwrap();

    uiconf_cmd()
        .args(["get", "spinner", "-c"])
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("JSON error"));
}

// ============================================================================
// Resolve, Modes and Platforms Tests
// ============================================================================

#[test]
fn test_resolve_all_keys_json() {
    uiconf_cmd()
        .args(["resolve", "--json", "-p", "mobile", "-p", "ios"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"spinner\": \"ios\""))
        .stdout(predicate::str::contains("\"swipeBackEnabled\": true"));
}

#[test]
fn test_resolve_selected_keys() {
    uiconf_cmd()
        .args(["resolve", "activator", "nothingHere", "-p", "android"])
        .assert()
        .success()
        .stdout(predicate::str::contains("ripple"))
        .stdout(predicate::str::contains("(unset)"))
        .stdout(predicate::str::contains("spinner").not());
}

#[test]
fn test_modes_lists_builtins() {
    uiconf_cmd()
        .arg("modes")
        .assert()
        .success()
        .stdout(predicate::str::contains("ios"))
        .stdout(predicate::str::contains("md"))
        .stdout(predicate::str::contains("wp"));
}

#[test]
fn test_modes_shows_one_mode() {
    uiconf_cmd()
        .args(["modes", "wp", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"tabsPlacement\": \"top\""));
}

#[test]
fn test_unknown_mode_fails() {
    uiconf_cmd()
        .args(["modes", "fancy"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown mode 'fancy'"));
}

#[test]
fn test_platforms_json_marks_active() {
    uiconf_cmd()
        .args(["platforms", "--json", "-p", "mobile", "-p", "ios"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"mode\": \"ios\""))
        .stdout(predicate::str::contains("\"active\": true"));
}

#[test]
fn test_platforms_lists_custom_active_platform() {
    uiconf_cmd()
        .args(["platforms", "-p", "core", "-p", "kiosk"])
        .assert()
        .success()
        .stdout(predicate::str::contains("kiosk"))
        .stdout(predicate::str::contains("(no defaults)"));
}

#[test]
fn test_verbose_logs_resolution() {
    uiconf_cmd()
        .args(["-v", "get", "spinner"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Config resolved"));
}
