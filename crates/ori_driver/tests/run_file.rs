//! Integration tests for running scripts from disk.

use ori_driver::{DriverError, RunOptions, Session};
use std::fs;

#[test]
fn test_run_file_scans_script() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("hello.ori");
    fs::write(&path, "print \"hello\";\n// done\n").expect("Failed to write script");

    let mut session = Session::new(RunOptions::quiet());
    let scanned = session.run_file(&path).expect("script should be readable");

    let lexemes: Vec<_> = scanned.tokens.iter().map(|t| t.lexeme.as_str()).collect();
    assert_eq!(lexemes, vec!["print", "\"hello\"", ";", ""]);
    assert_eq!(scanned.tokens.last().map(|t| t.line), Some(3));
    assert!(session.finish().is_ok());
}

#[test]
fn test_run_file_reports_lexical_errors() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("broken.ori");
    fs::write(&path, "var a = 1 & 2;\n\"never closed").expect("Failed to write script");

    let mut session = Session::new(RunOptions::quiet());
    session.run_file(&path).expect("script should be readable");

    let err = session.finish().unwrap_err();
    assert!(matches!(err, DriverError::Lex { count: 2 }));
    assert_eq!(err.exit_code(), 65);
}

#[test]
fn test_missing_file() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("missing.ori");

    let mut session = Session::new(RunOptions::quiet());
    let err = session.run_file(&path).unwrap_err();

    assert!(matches!(err, DriverError::Io { .. }));
    assert_eq!(err.exit_code(), 74);
    assert!(!session.had_error());
}
