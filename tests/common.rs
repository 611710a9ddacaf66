#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn flog() -> Command {
    cargo_bin_cmd!("focuslog")
}

/// Create a unique test file path inside the system temp dir and remove any
/// existing file.
pub fn temp_path(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_focuslog.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

pub fn setup_test_db(name: &str) -> String {
    temp_path(name, "sqlite")
}

pub fn setup_entries_file(name: &str) -> String {
    temp_path(name, "json")
}

pub fn setup_identity_file(name: &str) -> String {
    temp_path(name, "identity")
}
