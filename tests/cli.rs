//! End-to-end CLI tests: argument validation and batch output on disk.

use std::path::{Path, PathBuf};

use assert_cmd::Command;
use predicates::prelude::*;

fn cmd() -> Command {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("samplegen");
    // Keep a developer's own config out of the way.
    cmd.env("SAMPLEGEN_CONFIG", "/nonexistent/samplegen/config.toml");
    cmd.env_remove("RUST_LOG");
    cmd
}

/// Fresh scratch directory under the system temp dir.
fn scratch(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(name);
    let _ = std::fs::remove_dir_all(&dir);
    dir
}

fn file_names(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = std::fs::read_dir(dir)
        .unwrap()
        .flatten()
        .map(|e| e.file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}

#[test]
fn portrait_fraction_out_of_range_exits_with_error() {
    let out = scratch("samplegen_cli_bad_fraction");
    cmd()
        .args(["-p", "1.5", "-o", out.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Portrait fraction must be between 0.0 and 1.0"));
    assert!(!out.exists(), "Nothing should be created on validation failure");
}

#[test]
fn invalid_aspect_ratio_exits_with_error() {
    cmd()
        .args(["-a", "3-2"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid aspect ratio format: 3-2"));
}

#[test]
fn degenerate_aspect_ratio_exits_with_error() {
    cmd().args(["-a", "3:0"]).assert().failure().stderr(predicate::str::contains("Aspect ratio 3:0"));
}

#[test]
fn invalid_background_exits_with_error() {
    cmd()
        .args(["-b", "notacolor"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid background color: Unknown color format: notacolor"));
}

#[test]
fn invalid_foreground_exits_with_error() {
    cmd()
        .args(["-f", "1,2"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid foreground color"));
}

#[test]
fn malformed_config_exits_with_error() {
    let dir = scratch("samplegen_cli_bad_config");
    std::fs::create_dir_all(&dir).unwrap();
    let config = dir.join("config.toml");
    std::fs::write(&config, "[fonts\ncandidates = 3").unwrap();

    cmd()
        .args(["-n", "0", "-o", dir.join("out").to_str().unwrap()])
        .args(["--config", config.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Config error"));

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn seeded_batch_writes_numbered_jpegs() {
    let out = scratch("samplegen_cli_batch");

    cmd()
        .args(["-n", "3", "-s", "42", "-p", "0.5", "-l", "300", "-o", out.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Generating 3 images..."))
        .stdout(predicate::str::contains("Landscape dimensions: 300x200"))
        .stdout(predicate::str::contains("Portrait dimensions: 200x300"))
        .stdout(predicate::str::contains("[3/3] 0003.jpg"))
        .stdout(predicate::str::contains("Done! Generated 3 images in"));

    assert_eq!(file_names(&out), ["0001.jpg", "0002.jpg", "0003.jpg"]);
    for name in file_names(&out) {
        let img = image::open(out.join(&name)).unwrap();
        let size = (img.width(), img.height());
        assert!(size == (300, 200) || size == (200, 300), "{name} is {size:?}");
    }

    let _ = std::fs::remove_dir_all(&out);
}

#[test]
fn same_seed_reproduces_report() {
    let run = |dir: &Path| {
        let output = cmd()
            .args(["-n", "12", "-s", "7", "-l", "90", "-o", dir.to_str().unwrap()])
            .output()
            .unwrap();
        assert!(output.status.success());
        String::from_utf8(output.stdout)
            .unwrap()
            .lines()
            .filter(|l| l.trim_start().starts_with('['))
            .map(str::to_owned)
            .collect::<Vec<_>>()
    };

    let first_dir = scratch("samplegen_cli_seed_a");
    let second_dir = scratch("samplegen_cli_seed_b");
    let first = run(&first_dir);
    let second = run(&second_dir);
    assert_eq!(first.len(), 12);
    assert_eq!(first, second);

    let _ = std::fs::remove_dir_all(&first_dir);
    let _ = std::fs::remove_dir_all(&second_dir);
}

#[test]
fn negative_seed_runs_and_reproduces() {
    let run = |dir: &Path| {
        let output = cmd()
            .args(["-n", "6", "-s", "-1", "-l", "60", "-o", dir.to_str().unwrap()])
            .output()
            .unwrap();
        assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));
        assert_eq!(file_names(dir).len(), 6);
        String::from_utf8(output.stdout)
            .unwrap()
            .lines()
            .filter(|l| l.trim_start().starts_with('['))
            .map(str::to_owned)
            .collect::<Vec<_>>()
    };

    let first_dir = scratch("samplegen_cli_negative_seed_a");
    let second_dir = scratch("samplegen_cli_negative_seed_b");
    let first = run(&first_dir);
    assert_eq!(first.len(), 6);
    assert_eq!(first, run(&second_dir));

    let _ = std::fs::remove_dir_all(&first_dir);
    let _ = std::fs::remove_dir_all(&second_dir);
}

#[test]
fn whole_fraction_is_reported_with_decimal_point() {
    let out = scratch("samplegen_cli_fraction_report");

    cmd()
        .args(["-n", "1", "-p", "1.0", "-l", "60", "-o", out.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("  Portrait fraction: 1.0\n"));

    let _ = std::fs::remove_dir_all(&out);
}

#[test]
fn all_portrait_with_missing_user_font() {
    let out = scratch("samplegen_cli_portrait");

    cmd()
        .args(["-n", "4", "-p", "1.0", "-a", "4:3", "-l", "80"])
        .args(["--font", "/nonexistent/font.ttf", "-o", out.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("(portrait, 60x80)").count(4))
        .stdout(predicate::str::contains("landscape,").not());

    assert_eq!(file_names(&out).len(), 4);
    let _ = std::fs::remove_dir_all(&out);
}
