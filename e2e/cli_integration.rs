//! CLI integration tests: drive the `binsearch` binary as a black box via
//! `std::process::Command`.

use std::fs::File;
use std::io::Write;
use std::path::PathBuf;
use std::process::Command;
use tempfile::TempDir;

fn binsearch_bin() -> PathBuf {
    if let Ok(p) = std::env::var("CARGO_BIN_EXE_binsearch") {
        return PathBuf::from(p);
    }
    let mut p = std::env::current_exe().unwrap();
    p.pop();
    if p.ends_with("deps") {
        p.pop();
    }
    p.push("binsearch");
    p
}

/// A column-oriented file with a footer declaring `doffset`/`dlength`/`nrows`.
fn make_footed_column_file(dir: &TempDir, values: &[u32]) -> PathBuf {
    let path = dir.path().join("footed.bin");
    let doffset: u64 = 16;
    let dlength: u64 = (values.len() * 4) as u64;
    let mut f = File::create(&path).unwrap();
    f.write_all(&vec![0u8; doffset as usize - 4]).unwrap();
    f.write_all(&(values.len() as u32).to_le_bytes()).unwrap();
    for v in values {
        f.write_all(&v.to_be_bytes()).unwrap();
    }
    f.write_all(&doffset.to_be_bytes()).unwrap();
    f.write_all(&dlength.to_be_bytes()).unwrap();
    path
}

#[test]
fn info_reports_footer_fields() {
    let dir = TempDir::new().unwrap();
    let path = make_footed_column_file(&dir, &[1, 3, 5, 7, 9]);

    let output = Command::new(binsearch_bin())
        .args(["info", path.to_str().unwrap()])
        .output()
        .expect("failed to run binsearch info");
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("doffset: 16"));
    assert!(stdout.contains("nrows:   5"));
}

#[test]
fn lookup_finds_value_in_column_layout() {
    let dir = TempDir::new().unwrap();
    let path = make_footed_column_file(&dir, &[1, 3, 5, 7, 9]);

    let output = Command::new(binsearch_bin())
        .args([
            "lookup",
            path.to_str().unwrap(),
            "--width",
            "32",
            "--endian",
            "be",
            "--blklen",
            "4",
            "--blkpos",
            "0",
            "--family",
            "first",
            "5",
        ])
        .output()
        .expect("failed to run binsearch lookup");
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(stdout.trim(), "2");
}

#[test]
fn lookup_reports_not_found_for_missing_value() {
    let dir = TempDir::new().unwrap();
    let path = make_footed_column_file(&dir, &[1, 3, 5, 7, 9]);

    let output = Command::new(binsearch_bin())
        .args([
            "lookup",
            path.to_str().unwrap(),
            "--width",
            "32",
            "--endian",
            "be",
            "--blklen",
            "4",
            "--blkpos",
            "0",
            "--family",
            "first",
            "4",
        ])
        .output()
        .expect("failed to run binsearch lookup");
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(stdout.trim(), "not found");
}

#[test]
fn bench_prints_an_elapsed_nanosecond_count() {
    let dir = TempDir::new().unwrap();
    let path = make_footed_column_file(&dir, &[1, 3, 5, 7, 9]);

    let output = Command::new(binsearch_bin())
        .args([
            "bench",
            path.to_str().unwrap(),
            "--width",
            "32",
            "--endian",
            "be",
            "--blklen",
            "4",
            "--blkpos",
            "0",
            "--family",
            "first",
            "5",
            "--iters",
            "100",
        ])
        .output()
        .expect("failed to run binsearch bench");
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.trim().parse::<u64>().is_ok());
}
