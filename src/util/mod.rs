use std::ops::Range;
use chrono::{Datelike, NaiveDate, Weekday};

pub(crate) fn year_of(year: i32) -> Range<NaiveDate> {
    let first_day = NaiveDate::from_ymd_opt(year, 1, 1).unwrap();
    let first_day_next_year = NaiveDate::from_ymd_opt(year + 1, 1, 1).unwrap();
    first_day..first_day_next_year
}

/// Compute the date range covering one calendar month. Callers are
/// expected to pass a month in 1..=12.
pub(crate) fn month_of(year: i32, month: u32) -> Range<NaiveDate> {
    let first_day = NaiveDate::from_ymd_opt(year, month, 1).unwrap();
    let next_month = if month == 12 { 1 } else { month + 1 };
    let next_month_year = if month == 12 { year + 1 } else { year };
    let first_day_next_month = NaiveDate::from_ymd_opt(next_month_year, next_month, 1).unwrap();

    first_day..first_day_next_month
}

pub(crate) fn last_day_of(year: i32, month: u32) -> u32 {
    month_of(year, month).end.pred_opt().unwrap().day()
}

/// Format a yen amount with thousands separators, e.g. ¥1,234,567
pub(crate) fn format_yen(amount: u64) -> String {
    let digits = amount.to_string();
    let mut grouped = String::new();
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    format!("¥{}", grouped)
}

pub(crate) fn weekday_label(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}
