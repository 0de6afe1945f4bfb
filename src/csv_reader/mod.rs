#[cfg(test)]
mod tests;

use std::fmt;
use std::path::Path;

use csv::StringRecord;
use lazy_static::lazy_static;
use log::info;
use regex::Regex;

use crate::record::{AMOUNT_COLUMN, DATE_COLUMN, METHOD_COLUMN, NOTE_COLUMN, SLOT_COLUMN};

/// A raw row from the persisted sales file, before standardization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct RawSalesRow {
    pub(crate) date: String,
    pub(crate) slot: String,
    pub(crate) method: String,
    pub(crate) amount: String,
    pub(crate) note: String,
}

/// One day's row from a monthly entry form. Cells hold the raw text the
/// operator typed, paired with the column name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct FormRow {
    pub(crate) day: u32,
    pub(crate) cells: Vec<(String, String)>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CsvError {
    FileNotFoundError(String),
    InvalidFileError(String),
}

impl fmt::Display for CsvError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "csv reading error: {}",
            match self {
                CsvError::FileNotFoundError(s) => s,
                CsvError::InvalidFileError(s) => s,
            }
        )
    }
}

impl std::error::Error for CsvError {}

struct SalesHeaderIndex {
    date: usize,
    slot: usize,
    method: usize,
    amount: usize,
    note: Option<usize>,
}

/// Read the persisted sales file into raw rows. The header row is
/// required; columns are located by name.
pub(crate) fn read_sales_rows(file_path: &Path) -> Result<Vec<RawSalesRow>, CsvError> {
    if !file_path.exists() {
        return Err(CsvError::FileNotFoundError("File not found".to_string()));
    }

    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(file_path)
        .map_err(|e| CsvError::InvalidFileError(e.to_string()))?;

    let mut rows = vec![];
    let mut header_index: Option<SalesHeaderIndex> = None;
    for record in rdr.records() {
        let record = record.map_err(|e| CsvError::InvalidFileError(e.to_string()))?;
        match &header_index {
            None => header_index = Some(parse_sales_header_index(&record)?),
            Some(index) => {
                if record.iter().all(|cell| cell.trim().is_empty()) {
                    continue;
                }
                rows.push(RawSalesRow {
                    date: cell_at(&record, index.date),
                    slot: cell_at(&record, index.slot),
                    method: cell_at(&record, index.method),
                    amount: cell_at(&record, index.amount),
                    note: index.note.map(|i| cell_at(&record, i)).unwrap_or_default(),
                });
            }
        }
    }

    // A file holding nothing but the header row is a valid empty store
    Ok(rows)
}

fn cell_at(record: &StringRecord, index: usize) -> String {
    record.get(index).unwrap_or("").to_string()
}

fn parse_sales_header_index(header: &StringRecord) -> Result<SalesHeaderIndex, CsvError> {
    let position = |name: &str| header.iter().position(|cell| cell.trim() == name);
    let required = |name: &str| {
        position(name)
            .ok_or_else(|| CsvError::InvalidFileError(format!("missing required column {}", name)))
    };

    Ok(SalesHeaderIndex {
        date: required(DATE_COLUMN)?,
        slot: required(SLOT_COLUMN)?,
        method: required(METHOD_COLUMN)?,
        amount: required(AMOUNT_COLUMN)?,
        note: position(NOTE_COLUMN),
    })
}

lazy_static! {
    static ref FORM_HEADER_PATTERN: Regex = Regex::new(r"(?i)day|lunch|dinner").unwrap();
}

/// Read a monthly entry form. `columns` names the amount columns in
/// their positional order (lunch, dinner, then the itemized methods).
/// A header row is detected by pattern match; with a header present the
/// columns are located by name instead.
pub(crate) fn read_form_rows(file_path: &Path, columns: &[String]) -> Result<Vec<FormRow>, CsvError> {
    if !file_path.exists() {
        return Err(CsvError::FileNotFoundError("File not found".to_string()));
    }

    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(file_path)
        .map_err(|e| CsvError::InvalidFileError(e.to_string()))?;

    let mut records = vec![];
    for record in rdr.records() {
        let record = record.map_err(|e| CsvError::InvalidFileError(e.to_string()))?;
        if !record.iter().all(|cell| cell.trim().is_empty()) {
            records.push(record);
        }
    }

    if records.is_empty() {
        return Ok(vec![]);
    }

    let mut first_row_joined = String::new();
    for column in records[0].iter() {
        first_row_joined.push_str(column);
        first_row_joined.push('|');
    }
    info!("Analysing first row: {}", first_row_joined.as_str());

    let has_header = FORM_HEADER_PATTERN.is_match(first_row_joined.as_str());

    // (day column index, amount column indexes in `columns` order)
    let (day_index, column_indexes) = if has_header {
        info!("Header row detected");
        let header = &records[0];
        let position = |name: &str| {
            header
                .iter()
                .position(|cell| cell.trim().eq_ignore_ascii_case(name))
                .ok_or_else(|| CsvError::InvalidFileError(format!("missing required column {}", name)))
        };
        let day_index = position("day")?;
        let mut column_indexes = vec![];
        for column in columns {
            column_indexes.push(position(column)?);
        }
        (day_index, column_indexes)
    } else {
        info!("No header row detected");
        (0, (1..=columns.len()).collect())
    };

    let data_rows = if has_header { &records[1..] } else { &records[..] };

    let mut rows = vec![];
    for record in data_rows {
        let day_cell = cell_at(record, day_index);
        let day: u32 = day_cell
            .trim()
            .parse()
            .map_err(|_| CsvError::InvalidFileError(format!("day '{}' is not a number", day_cell)))?;

        let cells = columns
            .iter()
            .zip(&column_indexes)
            .map(|(column, index)| (column.clone(), cell_at(record, *index)))
            .collect();

        rows.push(FormRow { day, cells });
    }

    Ok(rows)
}
