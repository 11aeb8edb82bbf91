//! Integration tests for the `wizard` binary.
//!
//! Only paths that never reach the network are exercised here: help output,
//! the scene listing and argument validation.

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;

const IP: &str = "192.0.2.1";

fn cli() -> assert_cmd::Command {
    cargo_bin_cmd!("wizard")
}

#[test]
fn cli_help_lists_commands() {
    cli()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("toggle"))
        .stdout(predicate::str::contains("sceneid"))
        .stdout(predicate::str::contains("temp"));
}

#[test]
fn cli_version_prints_version() {
    cli()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn cli_scenes_needs_no_bulb() {
    cli()
        .args([IP, "scenes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Ocean: 1"))
        .stdout(predicate::str::contains("Pastel Colors: 8"))
        .stdout(predicate::str::contains("Rhythm: 1000"));
}

#[test]
fn cli_rejects_bad_ip() {
    cli().args(["not-an-ip", "on"]).assert().code(2);
}

#[test]
fn cli_rejects_out_of_range_values() {
    cli().args([IP, "brightness", "101"]).assert().code(2);
    cli().args([IP, "speed", "0"]).assert().code(2);
    cli().args([IP, "speed", "201"]).assert().code(2);
    cli().args([IP, "temp", "9000"]).assert().code(2);
    cli().args([IP, "rgb", "0", "256", "0"]).assert().code(2);
}

#[test]
fn cli_rejects_malformed_colors() {
    cli().args([IP, "color", "FF80"]).assert().code(2);
    cli().args([IP, "color", "ultraviolet"]).assert().code(2);
}

#[test]
fn cli_unknown_scene_lists_catalog() {
    cli()
        .args([IP, "scene", "Disco"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Invalid scene value"))
        .stdout(predicate::str::contains("Steampunk: 32"))
        .stderr(predicate::str::contains("unknown scene"));
}

#[test]
fn cli_unknown_scene_id_lists_catalog() {
    cli()
        .args([IP, "sceneid", "99"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Invalid scene ID"));
}

#[test]
fn cli_color_help_allows_leading_hash() {
    cli()
        .args([IP, "color", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("leading # optional"));
    cli().args([IP, "color", "#FF80"]).assert().code(2);
}
