// tests/blank_lines.rs

mod common;

use assert_cmd::prelude::*;
use common::demojibake_cmd;
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

// Blank ratio 0.5: above the default 0.4 trigger.
const DOUBLED: &str = "a\n\n\nb\n";
// Blank ratio 0.1: healthy spacing.
const HEALTHY: &str = "1\n2\n3\n4\n\n5\n6\n7\n8\n9\n";

#[test]
fn test_normalization_off_by_default() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    fs::write(temp.path().join("doubled.ts"), DOUBLED)?;

    demojibake_cmd()
        .arg(temp.path().to_str().unwrap())
        .assert()
        .success()
        .stdout(predicate::str::contains("Repaired: 0"));

    assert_eq!(fs::read_to_string(temp.path().join("doubled.ts"))?, DOUBLED);
    temp.close()?;
    Ok(())
}

#[test]
fn test_collapse_policy() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    fs::write(temp.path().join("doubled.ts"), DOUBLED)?;

    demojibake_cmd()
        .arg(temp.path().to_str().unwrap())
        .arg("--blank-lines")
        .arg("collapse")
        .assert()
        .success()
        .stdout(predicate::str::contains("repaired: doubled.ts"))
        .stdout(predicate::str::contains("blank-lines -1"));

    assert_eq!(fs::read_to_string(temp.path().join("doubled.ts"))?, "a\n\nb\n");
    temp.close()?;
    Ok(())
}

#[test]
fn test_strip_policy() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    fs::write(temp.path().join("doubled.ts"), DOUBLED)?;

    demojibake_cmd()
        .arg(temp.path().to_str().unwrap())
        .arg("--blank-lines")
        .arg("strip")
        .assert()
        .success()
        .stdout(predicate::str::contains("blank-lines -2"));

    assert_eq!(fs::read_to_string(temp.path().join("doubled.ts"))?, "a\nb\n");
    temp.close()?;
    Ok(())
}

#[test]
fn test_healthy_spacing_untouched_under_both_policies(
) -> Result<(), Box<dyn std::error::Error>> {
    for policy in ["collapse", "strip"] {
        let temp = tempdir()?;
        fs::write(temp.path().join("healthy.ts"), HEALTHY)?;

        demojibake_cmd()
            .arg(temp.path().to_str().unwrap())
            .arg("--blank-lines")
            .arg(policy)
            .assert()
            .success()
            .stdout(predicate::str::contains("Repaired: 0"));

        assert_eq!(fs::read_to_string(temp.path().join("healthy.ts"))?, HEALTHY);
        temp.close()?;
    }
    Ok(())
}

#[test]
fn test_custom_threshold() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    // Ratio 0.3: below the default trigger, above a 0.2 one.
    fs::write(
        temp.path().join("spaced.ts"),
        "a\nb\n\nc\nd\ne\nf\n\ng\n\nh\n",
    )?;

    demojibake_cmd()
        .arg(temp.path().to_str().unwrap())
        .arg("--blank-lines")
        .arg("strip")
        .arg("--blank-line-threshold")
        .arg("0.2")
        .assert()
        .success()
        .stdout(predicate::str::contains("repaired: spaced.ts"));

    assert_eq!(
        fs::read_to_string(temp.path().join("spaced.ts"))?,
        "a\nb\nc\nd\ne\nf\ng\nh\n"
    );
    temp.close()?;
    Ok(())
}

#[test]
fn test_invalid_threshold_aborts_before_any_write() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    fs::write(temp.path().join("doubled.ts"), DOUBLED)?;

    demojibake_cmd()
        .arg(temp.path().to_str().unwrap())
        .arg("--blank-lines")
        .arg("strip")
        .arg("--blank-line-threshold")
        .arg("1.5")
        .assert()
        .failure()
        .stderr(predicate::str::contains("blank-line threshold"));

    assert_eq!(fs::read_to_string(temp.path().join("doubled.ts"))?, DOUBLED);
    temp.close()?;
    Ok(())
}
