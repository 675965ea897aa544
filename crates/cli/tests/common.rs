// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

// Allow unused items: test helpers are shared across multiple test binaries,
// and not every test file uses every helper.
#![allow(dead_code)]
#![allow(unused_imports)]
#![allow(clippy::unwrap_used)]

use std::path::{Path, PathBuf};

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;

pub use predicates::prelude::*;
pub use tempfile::TempDir;

/// `spotfix` running in `dir`, isolated from the user's config and environment.
pub fn spotfix_in(dir: &Path) -> Command {
    let mut cmd = cargo_bin_cmd!("spotfix");
    cmd.current_dir(dir)
        .env("HOME", dir)
        .env("XDG_CONFIG_HOME", dir.join(".config"))
        .env("NO_COLOR", "1")
        .env_remove("COLOR")
        .env_remove("SPOTFIX_CONFIG")
        .env_remove("SPOTFIX_LOG");
    cmd
}

/// A fresh working directory with nothing in it.
pub fn temp() -> TempDir {
    TempDir::new().unwrap()
}

/// Write a JSON Lines dataset into `dir` and return its path.
pub fn write_dataset(dir: &Path, lines: &[&str]) -> PathBuf {
    let path = dir.join("issues.jsonl");
    std::fs::write(&path, lines.join("\n")).unwrap();
    path
}

pub const WATER_LEAK: &str = r#"{"id":"SF-W1","title":"Leaking hydrant","category":"water","status":"reported","severity":"low","location":{"address":"Pine Road"},"reported_by":"Ann","reported_at":"2024-02-01T09:00:00Z"}"#;

pub const PINE_POTHOLE: &str = r#"{"id":"SF-P1","title":"Pothole","category":"pothole","status":"assigned","severity":"high","location":{"address":"Pine Road"},"reported_by":"Ben","reported_at":"2024-02-02T09:00:00Z","assigned_to":"Road Crew #1"}"#;

pub fn json(output: &[u8]) -> serde_json::Value {
    serde_json::from_slice(output).unwrap()
}
