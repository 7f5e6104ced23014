use std::fs;

use clap::Parser;
use listgram::config::ListgramConfig;
use listgram::error::ListError;
use listgram::listing::{list_directory, EntryKind, SortOrder};
use listgram::tooling::cli::{CliContext, DirListCli};
use tempfile::TempDir;

fn run(args: &[&str]) -> Result<String, ListError> {
    let cli = DirListCli::try_parse_from(args).unwrap();
    CliContext::with_config(ListgramConfig::default()).list_directory(&cli)
}

#[test]
fn files_are_listed_smallest_first() -> anyhow::Result<()> {
    let temp = TempDir::new()?;
    fs::write(temp.path().join("big.bin"), vec![0u8; 300])?;
    fs::write(temp.path().join("mid.bin"), vec![0u8; 100])?;
    fs::write(temp.path().join("tiny.bin"), vec![0u8; 50])?;

    let entries = list_directory(temp.path(), SortOrder::Ascending)?;
    let names: Vec<&str> = entries.iter().map(|e| e.name.as_str()).collect();
    assert_eq!(names, vec!["tiny.bin", "mid.bin", "big.bin"]);
    assert!(entries.iter().all(|e| e.kind == EntryKind::File));
    Ok(())
}

#[test]
fn equal_sizes_keep_enumeration_order() -> anyhow::Result<()> {
    let temp = TempDir::new()?;
    for name in ["a", "b", "c", "d"] {
        fs::write(temp.path().join(name), "same")?;
    }

    let enumerated = listgram::listing::enumerate(temp.path())?;
    let sorted = list_directory(temp.path(), SortOrder::Ascending)?;
    assert_eq!(enumerated, sorted);
    Ok(())
}

#[test]
fn text_output_matches_line_contract() -> anyhow::Result<()> {
    let temp = TempDir::new()?;
    fs::write(temp.path().join("note.txt"), "hello")?;
    let dir = temp.path().to_str().unwrap();

    let output = run(&["dirlist", dir])?;
    let expected_path = temp.path().join("note.txt");
    assert_eq!(
        output,
        format!(
            "File Path:{}, File Name:note.txt, File Size:5 bytes\n",
            expected_path.display()
        )
    );
    Ok(())
}

#[test]
fn subdirectories_use_directory_label() -> anyhow::Result<()> {
    let temp = TempDir::new()?;
    fs::create_dir(temp.path().join("nested"))?;
    fs::write(temp.path().join("nested").join("inner.txt"), "not listed")?;

    let output = run(&["dirlist", temp.path().to_str().unwrap()])?;
    let lines: Vec<&str> = output.lines().collect();
    assert_eq!(lines.len(), 1);
    assert!(lines[0].starts_with("Directory Path:"));
    assert!(lines[0].contains("Directory Name:nested, "));
    assert!(!output.contains("inner.txt"));
    Ok(())
}

#[test]
fn nonexistent_path_reports_not_found() {
    let temp = TempDir::new().unwrap();
    let missing = temp.path().join("does-not-exist");

    let err = run(&["dirlist", missing.to_str().unwrap()]).unwrap_err();
    assert!(matches!(err, ListError::NotFound(_)));
    assert_eq!(err.to_string(), "Directory given doesn't exist");
}

#[test]
fn regular_file_reports_not_a_directory() {
    let temp = TempDir::new().unwrap();
    let file = temp.path().join("plain.txt");
    fs::write(&file, "x").unwrap();

    let err = run(&["dirlist", file.to_str().unwrap()]).unwrap_err();
    assert!(matches!(err, ListError::NotADirectory(_)));
    assert_eq!(err.to_string(), "File given but directory is expected");
}

#[test]
fn missing_argument_is_reported() {
    let err = run(&["dirlist"]).unwrap_err();
    assert!(matches!(err, ListError::MissingArgument));
    assert!(err.is_user_error());
}

#[test]
fn empty_directory_prints_nothing() -> anyhow::Result<()> {
    let temp = TempDir::new()?;
    assert_eq!(run(&["dirlist", temp.path().to_str().unwrap()])?, "");
    Ok(())
}

#[test]
fn reverse_flag_lists_largest_first() -> anyhow::Result<()> {
    let temp = TempDir::new()?;
    fs::write(temp.path().join("small"), "1")?;
    fs::write(temp.path().join("large"), "1234567890")?;

    let output = run(&["dirlist", "--reverse", temp.path().to_str().unwrap()])?;
    let lines: Vec<&str> = output.lines().collect();
    assert!(lines[0].contains("File Name:large, "));
    assert!(lines[1].contains("File Name:small, "));
    Ok(())
}

#[cfg(unix)]
#[test]
fn symlinks_are_silently_skipped() -> anyhow::Result<()> {
    let temp = TempDir::new()?;
    fs::write(temp.path().join("real.txt"), "abc")?;
    std::os::unix::fs::symlink(temp.path().join("real.txt"), temp.path().join("alias"))?;

    let output = run(&["dirlist", temp.path().to_str().unwrap()])?;
    assert_eq!(output.lines().count(), 1);
    assert!(output.contains("File Name:real.txt, "));
    assert!(!output.contains("alias"));
    Ok(())
}

#[test]
fn json_output_lists_entries() -> anyhow::Result<()> {
    let temp = TempDir::new()?;
    fs::write(temp.path().join("one"), "1")?;
    fs::write(temp.path().join("three"), "333")?;

    let output = run(&["dirlist", "--format", "json", temp.path().to_str().unwrap()])?;
    let parsed: serde_json::Value = serde_json::from_str(&output)?;
    let entries = parsed.as_array().expect("entries array should exist");
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0]["name"], "one");
    assert_eq!(entries[0]["size_bytes"], 1);
    assert_eq!(entries[1]["name"], "three");
    Ok(())
}
