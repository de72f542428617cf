//! End-to-end tests of the pawbook binary.

use super::common::run_pawbook;
use std::fs;
use tempfile::tempdir;

#[test]
fn test_exit_returns_zero() {
    let dir = tempdir().unwrap();
    let (code, stdout, _) = run_pawbook(dir.path(), &[], "hello\nexit\n");

    assert_eq!(code, 0, "Expected exit code 0");
    assert!(stdout.contains("Meow! How can I help you?"));
    assert!(stdout.ends_with("Good bye!\n"));
}

#[test]
fn test_closed_stdin_says_good_bye() {
    let dir = tempdir().unwrap();
    let (code, stdout, _) = run_pawbook(dir.path(), &[], "");

    assert_eq!(code, 0);
    assert!(stdout.contains("Good bye!"));
}

#[test]
fn test_books_are_written_to_the_given_paths() {
    let dir = tempdir().unwrap();
    let script = "add_contact Ann 0501234567\n\n\n\nnote_add Vet\n\nexit\n";

    let (code, stdout, _) = run_pawbook(dir.path(), &[], script);

    assert_eq!(code, 0);
    assert!(stdout.contains("Contact add successfully"));
    let contacts = fs::read_to_string(dir.path().join("contacts.json")).unwrap();
    assert!(contacts.contains("0501234567"));
    assert!(dir.path().join("notes.json").exists());

    let (_, stdout, _) = run_pawbook(dir.path(), &[], "show_all\nexit\n");
    assert!(stdout.contains("Ann"));
}

#[test]
fn test_bad_config_exits_with_error() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("config.toml"), "[storage\n").unwrap();

    let (code, _, stderr) = run_pawbook(dir.path(), &[], "exit\n");

    assert_eq!(code, 1);
    assert!(stderr.contains("Error: Configuration error"), "{stderr}");
}

#[test]
fn test_corrupt_store_exits_with_error() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("contacts.json"), "not json").unwrap();

    let (code, _, stderr) = run_pawbook(dir.path(), &[], "exit\n");

    assert_eq!(code, 1);
    assert!(stderr.contains("Failed to load the books"), "{stderr}");
}
