//! Integration tests for the spreadsheet loader.
//!
//! These tests verify that:
//! - Workbooks round-trip through `read_directory` with normalized identifiers
//! - Header validation names the missing column
//! - The sample fallback only runs when enabled, only on a missing file, and
//!   only for `.xlsx` paths

use rust_xlsxwriter::Workbook;
use std::path::Path;
use std::sync::Arc;
use std::thread;
use talaba_core::{DirectorySource, LoadError, StudentRecord};
use talaba_sheet::{SampleFallback, SpreadsheetSource, read_directory, write_workbook};
use tempfile::TempDir;

fn write_raw(path: &Path, rows: &[&[&str]]) {
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    for (r, row) in (0u32..).zip(rows) {
        for (c, value) in (0u16..).zip(row.iter()) {
            sheet.write_string(r, c, *value).unwrap();
        }
    }
    workbook.save(path).unwrap();
}

#[test]
fn test_reads_records_in_file_order() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("talabalar.xlsx");
    write_raw(
        &path,
        &[
            &["passport_id", "full_name", "faculty", "group_name", "group_link"],
            &[" ab1234567 ", "Ali Valiyev", "Dasturiy injiniring fakulteti", "DI-21-01", "https://t.me/di2101_group"],
            &["CD9876543", "Gulnora Xasanova", "Axborot texnologiyalari fakulteti", "AT-20-02", "https://t.me/at2002_group"],
        ],
    );

    let directory = read_directory(&path).unwrap();
    assert_eq!(directory.len(), 2);
    assert_eq!(directory.records()[0].identifier, "AB1234567");
    assert_eq!(directory.records()[1].full_name, "Gulnora Xasanova");
    assert!(directory.find_by_identifier("ab1234567").is_some());
}

#[test]
fn test_column_order_is_irrelevant() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("shuffled.xlsx");
    write_raw(
        &path,
        &[
            &["group_link", "notes", "group_name", "faculty", "full_name", "passport_id"],
            &["https://t.me/x", "ignored", "TK-22-01", "Telekommunikatsiya fakulteti", "Shoxrux Qodirov", "EF5555555"],
        ],
    );

    let directory = read_directory(&path).unwrap();
    let record = directory.find_by_identifier("EF5555555").unwrap();
    assert_eq!(record.group_name, "TK-22-01");
    assert_eq!(record.group_link, "https://t.me/x");
    assert_eq!(record.full_name, "Shoxrux Qodirov");
}

#[test]
fn test_numeric_identifier_cell() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("numeric.xlsx");
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    for (c, name) in (0u16..).zip(talaba_core::REQUIRED_COLUMNS) {
        sheet.write_string(0, c, name).unwrap();
    }
    sheet.write_number(1, 0, 1_234_567.0).unwrap();
    sheet.write_string(1, 1, "Ali Valiyev").unwrap();
    workbook.save(&path).unwrap();

    let directory = read_directory(&path).unwrap();
    assert_eq!(directory.records()[0].identifier, "1234567");
    assert_eq!(directory.records()[0].faculty, "");
}

#[test]
fn test_missing_column_is_schema_invalid() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("bad.xlsx");
    write_raw(
        &path,
        &[
            &["passport_id", "full_name", "group_name", "group_link"],
            &["AB1234567", "Ali Valiyev", "DI-21-01", "https://t.me/di2101_group"],
        ],
    );

    match read_directory(&path) {
        Err(LoadError::SchemaInvalid(column)) => assert_eq!(column, "faculty"),
        other => panic!("Expected SchemaInvalid error, got {other:?}"),
    }
}

#[test]
fn test_missing_file_without_fallback() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("absent.xlsx");
    let source = SpreadsheetSource::new(&path, SampleFallback::Disabled);

    assert!(matches!(source.load(), Err(LoadError::FileMissing(p)) if p == path));
    assert!(!path.exists());
}

#[test]
fn test_missing_file_with_fallback_generates_sample() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("talabalar.xlsx");
    let source = SpreadsheetSource::new(&path, SampleFallback::Generate);

    let directory = source.load().unwrap();
    assert!(path.exists());
    assert_eq!(directory.len(), 5);
    assert_eq!(
        directory.find_by_identifier("ij2222222").map(|r| r.full_name.as_str()),
        Some("Javohir Tursunov")
    );
}

#[test]
fn test_fallback_does_not_mask_schema_errors() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("broken.xlsx");
    write_raw(&path, &[&["passport_id"]]);
    let source = SpreadsheetSource::new(&path, SampleFallback::Generate);

    assert!(matches!(source.load(), Err(LoadError::SchemaInvalid(c)) if c == "full_name"));
}

#[test]
fn test_blank_rows_are_skipped() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("gaps.xlsx");
    let records = vec![
        StudentRecord::new("A1", "One", "F", "G", "l"),
        StudentRecord::new("", "", "", "", ""),
        StudentRecord::new("A2", "Two", "F", "G", "l"),
    ];
    write_workbook(&path, &records).unwrap();

    let directory = read_directory(&path).unwrap();
    let ids: Vec<&str> = directory.records().iter().map(|r| r.identifier.as_str()).collect();
    assert_eq!(ids, ["A1", "A2"]);
}

#[test]
fn test_fallback_refuses_non_xlsx_path() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("talabalar.ods");
    let source = SpreadsheetSource::new(&path, SampleFallback::Generate);

    for _ in 0..2 {
        match source.load() {
            Err(LoadError::SampleWrite(msg)) => assert!(msg.contains(".xlsx")),
            other => panic!("Expected SampleWrite error, got {other:?}"),
        }
        assert!(!path.exists());
    }
}

#[test]
fn test_concurrent_fallback_loads_see_complete_sample() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("talabalar.xlsx");
    let source = Arc::new(SpreadsheetSource::new(&path, SampleFallback::Generate));

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let source = Arc::clone(&source);
            thread::spawn(move || source.load().map(|d| d.len()))
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap().unwrap(), 5);
    }
    let entries = std::fs::read_dir(dir.path()).unwrap().count();
    assert_eq!(entries, 1);
}
