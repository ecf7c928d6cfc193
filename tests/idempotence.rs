// tests/idempotence.rs

//! Running the tool twice over the same tree must be a no-op the second
//! time, byte for byte.

mod common;

use assert_cmd::prelude::*;
use common::demojibake_cmd;
use predicates::prelude::*;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use tempfile::tempdir;

fn snapshot(root: &Path) -> BTreeMap<String, Vec<u8>> {
    fn walk(root: &Path, dir: &Path, out: &mut BTreeMap<String, Vec<u8>>) {
        for entry in fs::read_dir(dir).unwrap() {
            let path = entry.unwrap().path();
            if path.is_dir() {
                walk(root, &path, out);
            } else {
                let key = path.strip_prefix(root).unwrap().display().to_string();
                out.insert(key, fs::read(&path).unwrap());
            }
        }
    }
    let mut out = BTreeMap::new();
    walk(root, root, &mut out);
    out
}

#[test]
fn test_second_run_changes_nothing() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    fs::create_dir(temp.path().join("src"))?;
    // A spread of corruption classes: BOM, double and single mojibake,
    // scoped toast repair, degraded bytes at the head of a file.
    let mut bom_file = vec![0xEF, 0xBB, 0xBF];
    bom_file.extend_from_slice("Ã¢Å“Â¨ start\n".as_bytes());
    fs::write(temp.path().join("src/a.tsx"), &bom_file)?;
    fs::write(
        temp.path().join("src/b.tsx"),
        "toast({ title: \"+50 XP x\", description: \"School saved!\" });\n",
    )?;
    fs::write(temp.path().join("src/c.ts"), "plain âœ… and ðŸš€\n")?;
    fs::write(temp.path().join("src/clean.ts"), "nothing to do\n")?;

    demojibake_cmd()
        .arg(temp.path().to_str().unwrap())
        .assert()
        .success()
        .stdout(predicate::str::contains("Repaired: 3"));

    let after_first = snapshot(temp.path());

    demojibake_cmd()
        .arg(temp.path().to_str().unwrap())
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Repaired: 0 | Unchanged: 4 | Skipped: 0 | Failed: 0",
        ));

    let after_second = snapshot(temp.path());
    assert_eq!(after_first, after_second);

    temp.close()?;
    Ok(())
}

#[test]
fn test_second_run_with_blank_line_policy_changes_nothing(
) -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    fs::write(
        temp.path().join("doubled.ts"),
        "import a\n\nimport b\n\nconst x = 1\n\n",
    )?;

    let run = || {
        demojibake_cmd()
            .arg(temp.path().to_str().unwrap())
            .arg("--blank-lines")
            .arg("strip")
            .assert()
            .success()
    };

    run();
    let after_first = fs::read(temp.path().join("doubled.ts"))?;
    assert_eq!(after_first, b"import a\nimport b\nconst x = 1\n");

    run().stdout(predicate::str::contains("Repaired: 0"));
    assert_eq!(fs::read(temp.path().join("doubled.ts"))?, after_first);

    temp.close()?;
    Ok(())
}

#[test]
fn test_repair_is_deterministic_across_runs() -> Result<(), Box<dyn std::error::Error>> {
    let content = "win ðŸ† Ã¢Å“â€¦ done\n";
    let mut outputs = Vec::new();

    for _ in 0..2 {
        let temp = tempdir()?;
        fs::write(temp.path().join("same.tsx"), content)?;
        demojibake_cmd()
            .arg(temp.path().to_str().unwrap())
            .assert()
            .success();
        outputs.push(fs::read(temp.path().join("same.tsx"))?);
        temp.close()?;
    }

    assert_eq!(outputs[0], outputs[1]);
    assert_eq!(outputs[0], "win 🏆 ✅ done\n".as_bytes());
    Ok(())
}
