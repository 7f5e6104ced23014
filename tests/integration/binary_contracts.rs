use std::fs;
use std::path::Path;
use std::process::{Command, Output};

use listgram::anagram::{find_pairs, BUILTIN_WORDS};
use tempfile::TempDir;

fn run_bin(bin: &str, args: &[&str]) -> Output {
    Command::new(bin)
        .args(args)
        .env_remove("LISTGRAM_LOG")
        .env_remove("LISTGRAM_LOG_OUTPUT")
        .env_remove("LISTGRAM_LOG_FORMAT")
        .env_remove("LISTGRAM_LOG_MODULES")
        .env_remove("LISTGRAM__OUTPUT__FORMAT")
        .output()
        .expect("binary should start")
}

fn dirlist(args: &[&str]) -> Output {
    run_bin(env!("CARGO_BIN_EXE_dirlist"), args)
}

fn assert_rejected(output: &Output, message: &str) {
    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty(), "stdout should be empty on error");
    assert_eq!(String::from_utf8_lossy(&output.stderr), format!("Error: {message}\n"));
}

#[test]
fn dirlist_without_argument_fails() {
    let output = dirlist(&[]);
    assert_rejected(&output, "Please provide a directory filepath as input");
}

#[test]
fn dirlist_nonexistent_path_fails() {
    let temp = TempDir::new().unwrap();
    let missing = temp.path().join("nowhere");
    let output = dirlist(&[missing.to_str().unwrap()]);
    assert_rejected(&output, "Directory given doesn't exist");
}

#[test]
fn dirlist_regular_file_fails() {
    let temp = TempDir::new().unwrap();
    let file = temp.path().join("plain.txt");
    fs::write(&file, "contents").unwrap();
    let output = dirlist(&[file.to_str().unwrap()]);
    assert_rejected(&output, "File given but directory is expected");
}

#[test]
fn dirlist_lists_directory_on_stdout() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("big"), "0123456789").unwrap();
    fs::write(temp.path().join("small"), "0").unwrap();
    let dir = temp.path().to_str().unwrap();

    let output = dirlist(&[dir]);
    assert_eq!(output.status.code(), Some(0));
    assert!(output.stderr.is_empty());
    let line = |name: &str, size: usize| {
        format!(
            "File Path:{}, File Name:{name}, File Size:{size} bytes\n",
            Path::new(dir).join(name).display()
        )
    };
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        format!("{}{}", line("small", 1), line("big", 10))
    );
}

#[test]
fn anagrams_prints_builtin_pairs() {
    let output = run_bin(env!("CARGO_BIN_EXE_anagrams"), &[]);
    assert_eq!(output.status.code(), Some(0));
    assert!(output.stderr.is_empty());

    let expected: String = find_pairs(BUILTIN_WORDS)
        .iter()
        .map(|(a, b)| format!("{a} - {b}\n"))
        .collect();
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout, expected);
    assert_eq!(stdout.lines().count(), 14);
    assert!(stdout.starts_with("vase - save\n"));
}
