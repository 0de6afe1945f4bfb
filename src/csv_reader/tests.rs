use std::path::PathBuf;
use crate::csv_reader::{read_form_rows, read_sales_rows, CsvError};

#[test]
fn test_read_sales_rows() {
    let rows = read_sales_rows(&fixture_filename("sales_data.csv")).unwrap();
    assert_eq!(rows.len(), 4);
    assert_eq!(rows[0].date, "2025-07-01");
    assert_eq!(rows[0].slot, "昼営業");
    assert_eq!(rows[0].method, "lunch");
    assert_eq!(rows[0].amount, "52000");
    assert_eq!(rows[0].note, "");
    assert_eq!(rows[3].note, "雨");
}

#[test]
fn test_read_sales_rows_missing_file() {
    let result = read_sales_rows(&fixture_filename("no_such_file.csv"));
    assert_eq!(result, Err(CsvError::FileNotFoundError("File not found".to_string())));
}

#[test]
fn test_read_sales_rows_missing_column() {
    let result = read_sales_rows(&fixture_filename("sales_missing_column.csv"));
    assert_eq!(
        result,
        Err(CsvError::InvalidFileError("missing required column 売上金額".to_string()))
    );
}

#[test]
fn test_read_form_rows_with_header() {
    let columns = form_columns();
    let rows = read_form_rows(&fixture_filename("form_2025_07.csv"), &columns).unwrap();
    assert_eq!(rows.len(), 3);
    assert_eq!(rows[0].day, 1);
    // Cells stay raw: full-width digits and commas untouched
    assert_eq!(rows[0].cells[0], ("lunch".to_string(), "５２０００".to_string()));
    assert_eq!(rows[0].cells[2], ("card".to_string(), "34,000".to_string()));
    assert_eq!(rows[2].day, 15);
    assert_eq!(rows[2].cells[0], ("lunch".to_string(), "１，２００".to_string()));
    assert_eq!(rows[2].cells[4], ("stella".to_string(), "300".to_string()));
}

#[test]
fn test_read_form_rows_without_header() {
    let columns = form_columns();
    let rows = read_form_rows(&fixture_filename("form_no_header.csv"), &columns).unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].day, 1);
    assert_eq!(rows[0].cells[1], ("dinner".to_string(), "98000".to_string()));
    assert_eq!(rows[1].cells[3], ("paypay".to_string(), "5600".to_string()));
}

#[test]
fn test_read_form_rows_missing_column() {
    let mut columns = form_columns();
    columns.push("voucher".to_string());
    let result = read_form_rows(&fixture_filename("form_2025_07.csv"), &columns);
    assert_eq!(
        result,
        Err(CsvError::InvalidFileError("missing required column voucher".to_string()))
    );
}

fn form_columns() -> Vec<String> {
    ["lunch", "dinner", "card", "paypay", "stella"]
        .iter()
        .map(|c| c.to_string())
        .collect()
}

/// Return the path to a file within the test data directory
pub(crate) fn fixture_filename(filename: &str) -> PathBuf {
    let mut dir = fixture_dir();
    dir.push(filename);
    dir
}

pub(crate) fn fixture_dir() -> PathBuf {
    let mut dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    dir.push("fixture");
    dir
}
