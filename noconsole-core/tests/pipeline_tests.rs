// noconsole-core/tests/pipeline_tests.rs
//! Collect, scan and remove end to end, driven through the public core API.

use anyhow::Result;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::{tempdir, TempDir};
use test_log::test;

use noconsole_core::{
    collect_files, remove_statements, RegexScanner, RunOptions, ScanResult,
};

fn tree(files: &[(&str, &str)]) -> Result<TempDir> {
    let dir = tempdir()?;
    for (rel, content) in files {
        let path = dir.path().join(rel);
        fs::create_dir_all(path.parent().unwrap())?;
        fs::write(path, content)?;
    }
    Ok(dir)
}

/// Runs one auto-confirmed pass and returns the number of statements removed.
fn strip_tree(options: &RunOptions) -> Result<usize> {
    let scanner = RegexScanner::new();
    let mut removed = 0;
    for file in collect_files(options)? {
        let result = ScanResult::from_file(&options.root_directory, &file, &scanner)?;
        if result.has_matches() {
            removed += remove_statements(&options.root_directory, &result, &scanner, options.dry_run)?;
        }
    }
    Ok(removed)
}

fn snapshot(root: &Path, rels: &[&str]) -> Vec<Vec<u8>> {
    rels.iter().map(|rel| fs::read(root.join(rel)).unwrap()).collect()
}

#[test]
fn user_exclusions_are_merged_with_defaults() -> Result<()> {
    let dir = tree(&[
        ("vendor/app.js", "console.log(1);"),
        ("build/out.js", "console.log(2);"),
        ("src/vendor.js", "console.log(3);"),
    ])?;

    let options = RunOptions::new(dir.path()).with_excludes(["vendor"]);
    assert_eq!(collect_files(&options)?, vec![PathBuf::from("src/vendor.js")]);
    Ok(())
}

#[test]
fn second_pass_changes_nothing() -> Result<()> {
    let rels = ["a.js", "lib/b.ts", "lib/c.tsx"];
    let dir = tree(&[
        (rels[0], "console.log(\"hi\");\nlet a = 1;\n"),
        (rels[1], "if (x) console.error(x)\nelse console.warn (y) ;\n"),
        (rels[2], "export {};\n"),
    ])?;
    let options = RunOptions::new(dir.path());

    assert_eq!(strip_tree(&options)?, 3);
    let after_first = snapshot(dir.path(), &rels);

    assert_eq!(strip_tree(&options)?, 0);
    assert_eq!(snapshot(dir.path(), &rels), after_first);
    Ok(())
}

#[test]
fn dry_run_and_clean_files_stay_byte_identical() -> Result<()> {
    let rels = ["dirty.js", "clean.js", "notes.txt"];
    let dir = tree(&[
        (rels[0], "console.info('x');\r\n\tkeep();\r\n"),
        (rels[1], "// console is mentioned but never called\nconst c = 'console';\n"),
        (rels[2], "console.log('not a source file');\n"),
    ])?;
    let before = snapshot(dir.path(), &rels);

    let dry = RunOptions::new(dir.path()).with_dry_run(true);
    assert_eq!(strip_tree(&dry)?, 1);
    assert_eq!(snapshot(dir.path(), &rels), before);

    assert_eq!(strip_tree(&RunOptions::new(dir.path()))?, 1);
    let after = snapshot(dir.path(), &rels);
    assert_eq!(after[0], b"\r\n\tkeep();\r\n".to_vec());
    assert_eq!(after[1], before[1]);
    assert_eq!(after[2], before[2]);
    Ok(())
}
