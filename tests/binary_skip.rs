// tests/binary_skip.rs

mod common;

use assert_cmd::prelude::*;
use common::demojibake_cmd;
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

const PNG_HEADER: &[u8] = b"\x89PNG\r\n\x1a\n\x00\x00\x00\x0DIHDR\x00\x00";

#[test]
fn test_binary_file_is_reported_and_untouched() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    fs::write(temp.path().join("logo.png"), PNG_HEADER)?;
    fs::write(temp.path().join("app.tsx"), "sparkle Ã¢Å“Â¨\n")?;

    demojibake_cmd()
        .arg(temp.path().to_str().unwrap())
        .assert()
        .success()
        .stdout(predicate::str::contains("skipped (binary): logo.png"))
        .stdout(predicate::str::contains("repaired: app.tsx"))
        .stdout(predicate::str::contains(
            "Repaired: 1 | Unchanged: 0 | Skipped: 1 | Failed: 0",
        ));

    assert_eq!(fs::read(temp.path().join("logo.png"))?, PNG_HEADER);
    temp.close()?;
    Ok(())
}

#[test]
fn test_invalid_utf8_text_is_not_treated_as_binary() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    // Mid-file invalid bytes: a lossy decode flags them, but with nothing
    // in the rule table to fix, the original bytes must stay on disk.
    let bytes = [b'k', b'e', b'e', b'p', 0x80, b'm', b'e', b'\n'];
    fs::write(temp.path().join("odd.ts"), bytes)?;

    demojibake_cmd()
        .arg(temp.path().to_str().unwrap())
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Repaired: 0 | Unchanged: 1 | Skipped: 0 | Failed: 0",
        ));

    assert_eq!(fs::read(temp.path().join("odd.ts"))?, bytes);
    temp.close()?;
    Ok(())
}

#[test]
fn test_leading_garbage_bytes_are_repaired() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    // Undecodable bytes at the head of the file become leading replacement
    // characters under the lossy decode and are stripped like a BOM.
    let bytes = [0x80, 0x81, b'o', b'k', b'\n'];
    fs::write(temp.path().join("garbled.ts"), bytes)?;

    demojibake_cmd()
        .arg(temp.path().to_str().unwrap())
        .assert()
        .success()
        .stdout(predicate::str::contains("repaired: garbled.ts"));

    assert_eq!(fs::read(temp.path().join("garbled.ts"))?, b"ok\n");
    temp.close()?;
    Ok(())
}

#[test]
fn test_latin1_reinterpretation_repairs_mojibake() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    // A Latin-1 encoded footer line. The 0xE9 ('é') makes the strict UTF-8
    // pass fail; under --latin1 the bytes are reinterpreted, the mojibake
    // copyright sign is repaired, and the rewrite lands as UTF-8.
    let mut bytes = vec![0xC2, 0xA9]; // "Â©" once reinterpreted
    bytes.extend_from_slice(b" 2024 Myark. All rights reserved. caf");
    bytes.push(0xE9);
    bytes.push(b'\n');
    fs::write(temp.path().join("footer.tsx"), &bytes)?;

    demojibake_cmd()
        .arg(temp.path().to_str().unwrap())
        .arg("--latin1")
        .assert()
        .success()
        .stdout(predicate::str::contains("repaired: footer.tsx (copyright x1)"));

    assert_eq!(
        fs::read_to_string(temp.path().join("footer.tsx"))?,
        "© 2024 Myark. All rights reserved. café\n"
    );
    temp.close()?;
    Ok(())
}

#[test]
fn test_latin1_without_repairs_is_unchanged() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    // Reinterpretation alone is not a repair: with nothing for the rule
    // table to fix, the file keeps its original encoding on disk.
    let latin1_bytes = [b'c', b'a', b'f', 0xE9, b'\n'];
    fs::write(temp.path().join("menu.ts"), latin1_bytes)?;

    demojibake_cmd()
        .arg(temp.path().to_str().unwrap())
        .arg("--latin1")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Repaired: 0 | Unchanged: 1 | Skipped: 0 | Failed: 0",
        ));

    assert_eq!(fs::read(temp.path().join("menu.ts"))?, latin1_bytes);
    temp.close()?;
    Ok(())
}
