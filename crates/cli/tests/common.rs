// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

// Allow unused items: test helpers are shared across multiple test binaries,
// and not every test file uses every helper.
#![allow(dead_code)]
#![allow(unused_imports)]
#![allow(clippy::unwrap_used)]

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;

pub use predicates::prelude::*;
pub use tempfile::TempDir;

/// A `lingo` command isolated to `temp` as its data directory.
pub fn lingo(temp: &TempDir) -> Command {
    let mut cmd = cargo_bin_cmd!("lingo");
    cmd.arg("--data-dir")
        .arg(temp.path())
        .env_remove("LINGO_OFFLINE")
        .env_remove("RUST_LOG");
    cmd
}

/// Same as [`lingo`] with connectivity turned off.
pub fn lingo_offline(temp: &TempDir) -> Command {
    let mut cmd = lingo(temp);
    cmd.arg("--offline");
    cmd
}

/// Log in while online so the session is cached.
pub fn login(temp: &TempDir) {
    lingo(temp)
        .args(["login", "alex@example.com", "--password", "secret"])
        .assert()
        .success();
}

/// Create a card and return its id parsed from the output.
pub fn create_card(cmd: &mut Command, word: &str) -> u64 {
    let output = cmd.args(["new-card", word, "--output", "json"]).output().unwrap();
    assert!(output.status.success());
    let card: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    card["id"].as_u64().unwrap()
}
