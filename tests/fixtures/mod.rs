//! Shared test fixtures for E2E CLI tests.
#![allow(dead_code)] // Not every test binary uses every fixture

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

/// Path to the cvgen binary
pub fn cvgen_bin() -> &'static str {
    env!("CARGO_BIN_EXE_cvgen")
}

/// Runs cvgen with `args`, using `config_dir` as an isolated config directory.
pub fn run_cvgen(args: &[&str], config_dir: &Path) -> Output {
    Command::new(cvgen_bin())
        .env("CVGEN_CONFIG_DIR", config_dir)
        .env_remove("RUST_LOG")
        .args(args)
        .output()
        .expect("Failed to execute command")
}

/// Creates a temp workspace with an empty `config/` directory inside.
///
/// Returns the workspace and the config directory path.
pub fn temp_workspace() -> (TempDir, PathBuf) {
    let temp = TempDir::new().expect("Failed to create temp dir");
    let config_dir = temp.path().join("config");
    fs::create_dir_all(&config_dir).expect("Failed to create config dir");
    (temp, config_dir)
}

/// Writes a palette JSON file into `dir` and returns its path.
pub fn write_palette(dir: &Path, colors: &[(&str, &str, &str)]) -> PathBuf {
    let colors: Vec<serde_json::Value> = colors
        .iter()
        .map(|(name, light, dark)| serde_json::json!({"name": name, "light": light, "dark": dark}))
        .collect();
    let path = dir.join("palette.json");
    fs::write(
        &path,
        serde_json::to_string_pretty(&serde_json::json!({ "colors": colors })).unwrap(),
    )
    .expect("Failed to write palette");
    path
}

/// Names of the built-in palette colors, in generation order.
pub const BUILTIN_COLORS: [&str; 8] = [
    "PrimaryBackground",
    "CardBackground",
    "PrimaryText",
    "SecondaryText",
    "AccentBlue",
    "AccentPurple",
    "MutedTeal",
    "Divider",
];

/// Converts a path to &str for use as a CLI argument.
pub fn arg(path: &Path) -> &str {
    path.to_str().expect("temp paths are UTF-8")
}

/// Asserts the command exited with `code`, showing stderr on failure.
pub fn assert_exit(output: &Output, code: i32) {
    assert_eq!(
        output.status.code(),
        Some(code),
        "unexpected exit code. stdout: {} stderr: {}",
        String::from_utf8_lossy(&output.stdout),
        String::from_utf8_lossy(&output.stderr)
    );
}
