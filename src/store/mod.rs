use std::ops::Range;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use csv::WriterBuilder;
use log::info;

use crate::common::{ResultError, StoreError};
use crate::csv_reader::{self, RawSalesRow};
use crate::normalize::normalize_amount;
use crate::record::{
    SalesRecord, TimeSlot, AMOUNT_COLUMN, DATE_COLUMN, METHOD_COLUMN, NOTE_COLUMN, SLOT_COLUMN,
};
use crate::util;

/// The in-memory sales dataset plus the flat file backing it.
///
/// Mutations build the next record set, persist it, and only then swap
/// it in; a failed write leaves the session at the last persisted state.
pub(crate) struct Store {
    records: Vec<SalesRecord>,
    file_path: PathBuf,
}

impl Store {
    pub(crate) fn new(file_path: PathBuf) -> Store {
        Store { records: vec![], file_path }
    }

    pub(crate) fn load(path_str: &str) -> ResultError<Store> {
        let path = Path::new(path_str);
        if path.exists() {
            let rows = csv_reader::read_sales_rows(path)?;
            let records = standardize(rows)?;
            info!("Loaded {} sales records from {}", records.len(), path_str);
            Ok(Store { records, file_path: path.to_path_buf() })
        } else {
            Ok(Store::new(path.to_path_buf()))
        }
    }

    fn commit(&mut self, records: Vec<SalesRecord>) -> Result<(), StoreError> {
        write_sales_csv(&self.file_path, &records)?;
        self.records = records;
        Ok(())
    }

    /// Replace one month's records wholesale. Existing rows inside the
    /// month are removed and the new set appended. An empty set is a
    /// no-op: the month keeps its prior data. Returns the number of
    /// records written.
    pub(crate) fn replace_month(
        &mut self,
        year: i32,
        month: u32,
        new_records: Vec<SalesRecord>,
    ) -> Result<usize, StoreError> {
        if new_records.is_empty() {
            return Ok(0);
        }

        let range = util::month_of(year, month);
        let written = new_records.len();
        let mut next: Vec<SalesRecord> = self
            .records
            .iter()
            .filter(|r| !range.contains(&r.date))
            .cloned()
            .collect();
        next.extend(new_records);

        self.commit(next)?;
        Ok(written)
    }

    /// Delete one month's records. Returns how many were removed.
    pub(crate) fn delete_month(&mut self, year: i32, month: u32) -> Result<usize, StoreError> {
        let range = util::month_of(year, month);
        let next: Vec<SalesRecord> = self
            .records
            .iter()
            .filter(|r| !range.contains(&r.date))
            .cloned()
            .collect();
        let deleted = self.records.len() - next.len();
        if deleted > 0 {
            self.commit(next)?;
        }
        Ok(deleted)
    }

    pub(crate) fn wipe(&mut self) -> Result<usize, StoreError> {
        let deleted = self.records.len();
        self.commit(vec![])?;
        Ok(deleted)
    }

    /// Persist the standardized in-memory records, fixing up any
    /// irregular rows left on disk.
    pub(crate) fn repair(&mut self) -> Result<(), StoreError> {
        self.commit(self.records.clone())
    }

    pub(crate) fn select_range(&self, range: &Range<NaiveDate>) -> Vec<SalesRecord> {
        let mut rows: Vec<SalesRecord> = self
            .records
            .iter()
            .filter(|r| range.contains(&r.date))
            .cloned()
            .collect();
        rows.sort_by(|a, b| a.date.cmp(&b.date));
        rows
    }

    pub(crate) fn all(&self) -> Vec<SalesRecord> {
        let mut rows = self.records.clone();
        rows.sort_by(|a, b| a.date.cmp(&b.date));
        rows
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Write records in the store schema. The header row is always present,
/// even for an empty record set.
pub(crate) fn write_sales_csv(path: &Path, records: &[SalesRecord]) -> Result<(), StoreError> {
    let mut writer = WriterBuilder::new()
        .has_headers(false)
        .from_path(path)
        .map_err(|e| StoreError::Persistence(e.to_string()))?;

    writer
        .write_record([DATE_COLUMN, SLOT_COLUMN, METHOD_COLUMN, AMOUNT_COLUMN, NOTE_COLUMN])
        .map_err(|e| StoreError::Persistence(e.to_string()))?;
    for record in records {
        writer
            .serialize(record)
            .map_err(|e| StoreError::Persistence(e.to_string()))?;
    }
    writer.flush().map_err(|e| StoreError::Persistence(e.to_string()))?;

    Ok(())
}

/// Standardize raw file rows into typed records: dates must parse,
/// amounts must be numeric, unknown time slots fall back to Lunch and a
/// blank payment method takes the slot's own token.
pub(crate) fn standardize(rows: Vec<RawSalesRow>) -> Result<Vec<SalesRecord>, StoreError> {
    let mut records = vec![];
    for row in rows {
        let date = NaiveDate::parse_from_str(row.date.trim(), "%Y-%m-%d")
            .map_err(|_| StoreError::Validation(format!("unparseable date '{}'", row.date)))?;
        let slot = TimeSlot::from_label(row.slot.trim()).unwrap_or(TimeSlot::Lunch);
        let amount = normalize_amount(&row.amount)
            .map_err(|e| StoreError::Validation(format!("{} ('{}')", e, row.amount)))?;
        let method = match row.method.trim() {
            "" => slot.default_method().to_string(),
            method => method.to_string(),
        };

        records.push(SalesRecord { date, slot, method, amount, note: row.note });
    }

    Ok(records)
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    fn rec(date: &str, slot: TimeSlot, method: &str, amount: u64) -> SalesRecord {
        SalesRecord {
            date: NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
            slot,
            method: method.to_string(),
            amount,
            note: String::new(),
        }
    }

    fn temp_store() -> (TempDir, Store) {
        let dir = TempDir::new().unwrap();
        let store = Store::new(dir.path().join("sales_data.csv"));
        (dir, store)
    }

    fn sorted(mut records: Vec<SalesRecord>) -> Vec<SalesRecord> {
        records.sort_by(|a, b| (&a.date, &a.method).cmp(&(&b.date, &b.method)));
        records
    }

    #[test]
    fn test_load_missing_file_is_empty() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("sales_data.csv");
        let store = Store::load(path.to_str().unwrap()).unwrap();
        assert!(store.is_empty());
    }

    #[test]
    fn test_replace_month_round_trip() {
        let (dir, mut store) = temp_store();
        let records = vec![
            rec("2025-07-01", TimeSlot::Lunch, "lunch", 52000),
            rec("2025-07-01", TimeSlot::Dinner, "dinner", 98000),
            rec("2025-07-02", TimeSlot::Dinner, "card", 34000),
        ];

        assert_eq!(store.replace_month(2025, 7, records.clone()).unwrap(), 3);

        let reloaded = Store::load(dir.path().join("sales_data.csv").to_str().unwrap()).unwrap();
        assert_eq!(sorted(reloaded.all()), sorted(records));
    }

    #[test]
    fn test_replace_month_replaces_only_that_month() {
        let (_dir, mut store) = temp_store();
        store
            .replace_month(2025, 6, vec![rec("2025-06-10", TimeSlot::Lunch, "lunch", 40000)])
            .unwrap();
        store
            .replace_month(2025, 7, vec![rec("2025-07-01", TimeSlot::Lunch, "lunch", 52000)])
            .unwrap();

        // Resubmitting July replaces July and leaves June alone
        store
            .replace_month(2025, 7, vec![rec("2025-07-02", TimeSlot::Dinner, "dinner", 98000)])
            .unwrap();

        let rows = store.all();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].date, NaiveDate::from_ymd_opt(2025, 6, 10).unwrap());
        assert_eq!(rows[1].date, NaiveDate::from_ymd_opt(2025, 7, 2).unwrap());
        assert_eq!(rows[1].amount, 98000);
    }

    #[test]
    fn test_replace_month_empty_is_noop() {
        let (_dir, mut store) = temp_store();
        store
            .replace_month(2025, 7, vec![rec("2025-07-01", TimeSlot::Lunch, "lunch", 52000)])
            .unwrap();

        assert_eq!(store.replace_month(2025, 7, vec![]).unwrap(), 0);
        assert_eq!(store.all().len(), 1);
    }

    #[test]
    fn test_delete_month() {
        let (_dir, mut store) = temp_store();
        store
            .replace_month(2025, 6, vec![rec("2025-06-10", TimeSlot::Lunch, "lunch", 40000)])
            .unwrap();
        store
            .replace_month(2025, 7, vec![rec("2025-07-01", TimeSlot::Lunch, "lunch", 52000)])
            .unwrap();

        assert_eq!(store.delete_month(2025, 7).unwrap(), 1);
        assert_eq!(store.delete_month(2025, 7).unwrap(), 0);
        assert_eq!(store.all().len(), 1);
    }

    #[test]
    fn test_wipe_leaves_loadable_empty_file() {
        let (dir, mut store) = temp_store();
        store
            .replace_month(2025, 7, vec![rec("2025-07-01", TimeSlot::Lunch, "lunch", 52000)])
            .unwrap();

        assert_eq!(store.wipe().unwrap(), 1);

        let reloaded = Store::load(dir.path().join("sales_data.csv").to_str().unwrap()).unwrap();
        assert!(reloaded.is_empty());
    }

    #[test]
    fn test_select_range_sorts_by_date() {
        let (_dir, mut store) = temp_store();
        store
            .replace_month(
                2025,
                7,
                vec![
                    rec("2025-07-20", TimeSlot::Lunch, "lunch", 1),
                    rec("2025-07-03", TimeSlot::Lunch, "lunch", 2),
                    rec("2025-07-11", TimeSlot::Lunch, "lunch", 3),
                ],
            )
            .unwrap();

        let rows = store.select_range(&util::month_of(2025, 7));
        let days: Vec<u32> = rows.iter().map(|r| chrono::Datelike::day(&r.date)).collect();
        assert_eq!(days, vec![3, 11, 20]);

        assert!(store.select_range(&util::month_of(2025, 8)).is_empty());
    }

    fn raw(date: &str, slot: &str, method: &str, amount: &str) -> RawSalesRow {
        RawSalesRow {
            date: date.to_string(),
            slot: slot.to_string(),
            method: method.to_string(),
            amount: amount.to_string(),
            note: String::new(),
        }
    }

    #[test]
    fn test_standardize_coerces_unknown_slot_to_lunch() {
        let records = standardize(vec![raw("2025-07-01", "深夜営業", "card", "100")]).unwrap();
        assert_eq!(records[0].slot, TimeSlot::Lunch);
    }

    #[test]
    fn test_standardize_defaults_blank_method_from_slot() {
        let records = standardize(vec![
            raw("2025-07-01", "昼営業", "", "100"),
            raw("2025-07-01", "夜営業", "", "200"),
        ])
        .unwrap();
        assert_eq!(records[0].method, "lunch");
        assert_eq!(records[1].method, "dinner");
    }

    #[test]
    fn test_standardize_rejects_bad_date() {
        let result = standardize(vec![raw("07/01/2025", "昼営業", "lunch", "100")]);
        assert!(matches!(result, Err(StoreError::Validation(_))));
    }

    #[test]
    fn test_standardize_rejects_bad_amount() {
        let result = standardize(vec![raw("2025-07-01", "昼営業", "lunch", "lots")]);
        assert!(matches!(result, Err(StoreError::Validation(_))));
    }
}
