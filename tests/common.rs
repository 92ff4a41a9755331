#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn hb() -> Command {
    cargo_bin_cmd!("hourbank")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_hourbank.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Initialize DB and add a small dataset useful for many tests
pub fn init_db_with_data(db_path: &str) {
    // init DB (creates tables)
    hb().args(["--db", db_path, "--test", "init"])
        .assert()
        .success();

    hb().args([
        "--db", db_path, "--test", "add", "Ana Souza", "--reg", "001", "--hours", "3", "--date",
        "01/01/2025", "--rate", "10",
    ])
    .assert()
    .success();

    hb().args([
        "--db",
        db_path,
        "--test",
        "add",
        "Bruno Lima",
        "--reg",
        "002",
        "--hours",
        "2,5",
        "--date",
        "02/01/2025",
        "--rate",
        "20",
    ])
    .assert()
    .success();
}
