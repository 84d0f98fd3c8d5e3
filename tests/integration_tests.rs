//! Integration tests for end-to-end scanning.
//!
//! These tests drive the library the way the binary does: read a source
//! file, scan it, and write the `;`-delimited export.

use clap::Parser;
use std::fs;
use toy_scanner::{
    analyze_file,
    config::config::Config,
    lexer::{
        scanner::scan_source,
        tokens::{Category, State},
    },
    read_source,
    report::{diagnostics::render_diagnostics, export::export_to_path},
};

const SAMPLE: &str = "tests/sample.toy";

fn quiet_config(input: &str, output: &std::path::Path) -> Config {
    Config::parse_from([
        "toy_scanner",
        input,
        "--quiet",
        "--output",
        output.to_str().unwrap(),
    ])
}

#[test]
fn test_analyze_sample_file() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("resultado_lexico.csv");

    let analysis = analyze_file(&quiet_config(SAMPLE, &output)).unwrap();

    assert_eq!(analysis.tokens.len(), 44);
    assert_eq!(analysis.error_count(), 2);
    assert!(output.exists());
}

#[test]
fn test_export_matches_golden_file() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("out.csv");

    analyze_file(&quiet_config(SAMPLE, &output)).unwrap();

    let written = fs::read_to_string(&output).unwrap();
    let expected = fs::read_to_string("tests/sample_expected.csv").unwrap();
    assert_eq!(written, expected);
}

#[test]
fn test_sample_tokens() {
    let source = read_source(std::path::Path::new(SAMPLE)).unwrap();
    let tokens = scan_source(&source);

    assert_eq!(tokens[0].category, Category::Comment);
    assert_eq!(tokens[0].line_number, 1);

    let pi = tokens.iter().find(|t| t.lexeme == "3.14159").unwrap();
    assert_eq!((pi.line_number, pi.state), (3, Some(State::Q3)));

    let compound = tokens.iter().find(|t| t.lexeme == "+=").unwrap();
    assert_eq!((compound.line_number, compound.state), (8, Some(State::Q10)));

    // the blank line 6 contributes nothing
    assert!(tokens.iter().all(|t| t.line_number != 6));

    let last = tokens.last().unwrap();
    assert_eq!(last.line_number, 9);
    assert_eq!(last.category, Category::Error);
}

#[test]
fn test_sample_diagnostics() {
    let source = read_source(std::path::Path::new(SAMPLE)).unwrap();
    let tokens = scan_source(&source);
    let report = render_diagnostics(&tokens, &source, SAMPLE);

    assert!(report.contains("8 | x += 1 # stray\n  | -------^"));
    assert!(report.contains("Error: UnterminatedString"));
    assert!(report.contains("9 | label = \"unterminated\n  | --------^"));
}

#[test]
fn test_missing_source_file() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("out.csv");
    let missing = dir.path().join("does_not_exist.toy");

    let error = analyze_file(&quiet_config(missing.to_str().unwrap(), &output)).unwrap_err();

    assert_eq!(error.get_error_name(), "SourceNotFound");
    assert!(!output.exists());
}

#[test]
fn test_no_export_flag() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("out.csv");
    let config = Config::parse_from([
        "toy_scanner",
        SAMPLE,
        "--quiet",
        "--no-export",
        "-o",
        output.to_str().unwrap(),
    ]);

    let analysis = analyze_file(&config).unwrap();

    assert_eq!(analysis.tokens.len(), 44);
    assert!(!output.exists());
}

#[test]
fn test_export_to_unwritable_path() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("no_such_dir").join("out.csv");
    let tokens = scan_source("x = 1");

    let error = export_to_path(&output, &tokens).unwrap_err();

    assert_eq!(error.get_error_name(), "ExportFailed");
}

#[test]
fn test_read_directory_is_read_failure() {
    let dir = tempfile::tempdir().unwrap();

    let error = read_source(dir.path()).unwrap_err();

    assert_eq!(error.get_error_name(), "ReadFailed");
}
