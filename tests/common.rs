#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn rl() -> Command {
    cargo_bin_cmd!("runlogger")
}

/// Create a unique test store path inside the system temp dir and remove any existing file
pub fn setup_test_store(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_runlogger.json", name));
    let store_path = path.to_string_lossy().to_string();
    fs::remove_file(&store_path).ok();
    store_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Initialize a store and add a small dataset useful for many tests
pub fn init_store_with_data(store_path: &str) {
    // init creates the store file
    rl().args(["--db", store_path, "--test", "init"])
        .assert()
        .success();

    rl().args([
        "--db",
        store_path,
        "add",
        "Morning Run",
        "--date",
        "2025-09-01",
        "--time",
        "07:30",
        "--notes",
        "felt great",
    ])
    .assert()
    .success();

    rl().args([
        "--db",
        store_path,
        "add",
        "Evening Jog",
        "--date",
        "2025-09-15",
        "--time",
        "18:00",
        "--notes",
        "easy pace",
    ])
    .assert()
    .success();
}
