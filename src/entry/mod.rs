use std::collections::BTreeMap;

use chrono::{NaiveDate, Utc};

use crate::common::StoreError;
use crate::csv_reader::FormRow;
use crate::normalize::{normalize_amount, FieldErrors};
use crate::record::{SalesRecord, TimeSlot};
use crate::util;

/// Amounts keyed by day of month, then by form column.
pub(crate) type MonthAmounts = BTreeMap<u32, BTreeMap<String, u64>>;

/// Normalize every form cell, recording failures per field. Field ids
/// are `<column>_<day>`, stable across resubmissions, so an error on one
/// field never disturbs another field's state. Errored fields count as
/// zero.
pub(crate) fn collect_month(rows: &[FormRow], errors: &mut FieldErrors) -> MonthAmounts {
    let mut per_day = MonthAmounts::new();
    for row in rows {
        let day_amounts = per_day.entry(row.day).or_default();
        for (column, raw) in &row.cells {
            let field_id = format!("{}_{}", column, row.day);
            let amount = errors.record(&field_id, normalize_amount(raw));
            *day_amounts.entry(column.clone()).or_insert(0) += amount;
        }
    }

    per_day
}

/// Build the record set for one month of entries: one record per day
/// and column with a positive amount. The `lunch` column is stored
/// under the lunch slot, every other column under dinner.
pub(crate) fn build_month_records(
    year: i32,
    month: u32,
    per_day: &MonthAmounts,
) -> Result<Vec<SalesRecord>, StoreError> {
    let last_day = util::last_day_of(year, month);
    let today = Utc::now().date_naive();

    let mut records = vec![];
    for (day, amounts) in per_day {
        if *day < 1 || *day > last_day {
            return Err(StoreError::Validation(format!(
                "day {} is outside {}-{:02}",
                day, year, month
            )));
        }
        let date = NaiveDate::from_ymd_opt(year, month, *day).unwrap();
        if date > today {
            return Err(StoreError::Validation(format!("date {} is in the future", date)));
        }

        for (method, amount) in amounts {
            if *amount > 0 {
                let slot = if method == "lunch" { TimeSlot::Lunch } else { TimeSlot::Dinner };
                records.push(SalesRecord {
                    date,
                    slot,
                    method: method.clone(),
                    amount: *amount,
                    note: String::new(),
                });
            }
        }
    }

    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form_row(day: u32, cells: &[(&str, &str)]) -> FormRow {
        FormRow {
            day,
            cells: cells.iter().map(|(c, v)| (c.to_string(), v.to_string())).collect(),
        }
    }

    #[test]
    fn test_collect_month() {
        let rows = vec![
            form_row(1, &[("lunch", "５２０００"), ("dinner", "98,000"), ("card", "")]),
            form_row(2, &[("lunch", ""), ("dinner", "101500"), ("card", "5600")]),
        ];
        let mut errors = FieldErrors::new();
        let per_day = collect_month(&rows, &mut errors);

        assert!(errors.is_empty());
        assert_eq!(per_day[&1]["lunch"], 52000);
        assert_eq!(per_day[&1]["dinner"], 98000);
        assert_eq!(per_day[&1]["card"], 0);
        assert_eq!(per_day[&2]["card"], 5600);
    }

    #[test]
    fn test_collect_month_records_field_errors() {
        let rows = vec![form_row(1, &[("lunch", "abc"), ("dinner", "98000")])];
        let mut errors = FieldErrors::new();
        let per_day = collect_month(&rows, &mut errors);

        assert_eq!(errors.len(), 1);
        assert_eq!(
            errors.iter().next().unwrap(),
            (&"lunch_1".to_string(), &"amount must be numeric".to_string())
        );
        // The bad field contributes zero, the good one is untouched
        assert_eq!(per_day[&1]["lunch"], 0);
        assert_eq!(per_day[&1]["dinner"], 98000);
    }

    #[test]
    fn test_build_month_records_slot_assignment() {
        let mut per_day = MonthAmounts::new();
        per_day.insert(
            1,
            [("lunch", 52000), ("dinner", 98000), ("card", 34000), ("paypay", 0)]
                .iter()
                .map(|(m, a)| (m.to_string(), *a))
                .collect(),
        );

        let records = build_month_records(2025, 7, &per_day).unwrap();

        // Zero amounts are skipped
        assert_eq!(records.len(), 3);
        let slot_of = |method: &str| records.iter().find(|r| r.method == method).unwrap().slot;
        assert_eq!(slot_of("lunch"), TimeSlot::Lunch);
        assert_eq!(slot_of("dinner"), TimeSlot::Dinner);
        // Itemized methods are recorded under the dinner slot
        assert_eq!(slot_of("card"), TimeSlot::Dinner);
    }

    #[test]
    fn test_build_month_records_rejects_day_outside_month() {
        let mut per_day = MonthAmounts::new();
        per_day.insert(31, [("lunch".to_string(), 100)].into_iter().collect());

        let result = build_month_records(2025, 4, &per_day);
        assert!(matches!(result, Err(StoreError::Validation(_))));
    }

    #[test]
    fn test_build_month_records_rejects_future_dates() {
        let mut per_day = MonthAmounts::new();
        per_day.insert(1, [("lunch".to_string(), 100)].into_iter().collect());

        let result = build_month_records(9999, 1, &per_day);
        assert!(matches!(result, Err(StoreError::Validation(_))));
    }
}
