use chrono::NaiveDate;
use comfy_table::{Cell, CellAlignment};
use log::info;

use crate::controller::{amount_cell, format_date, new_table};
use crate::parser::YearMonth;
use crate::record::SalesRecord;
use crate::report;
use crate::store::Store;
use crate::util;

pub(crate) fn run_daily(store: &Store, year: i32, month: u32) {
    let records = store.select_range(&util::month_of(year, month));
    if records.is_empty() {
        info!("No sales data for {}-{:02}. Use ENTRY to record sales.", year, month);
        return;
    }

    let mut table = new_table();
    table.set_header(vec!["Day", "Lunch", "Dinner", "Total"]);
    for (day, breakdown) in report::daily_pivot(&records, year, month) {
        table.add_row(vec![
            Cell::new(day.to_string().as_str()).set_alignment(CellAlignment::Right),
            amount_cell(breakdown.lunch),
            amount_cell(breakdown.dinner),
            amount_cell(breakdown.total()),
        ]);
    }
    println!("{table}");

    print_summary(&records, "Month total");
}

pub(crate) fn run_monthly(store: &Store, year: i32) {
    let records = store.select_range(&util::year_of(year));
    if records.is_empty() {
        info!("No sales data for {}. Use ENTRY to record sales.", year);
        return;
    }

    let mut table = new_table();
    table.set_header(vec!["Month", "Lunch", "Dinner", "Total"]);
    for (month, breakdown) in report::monthly_pivot(&records) {
        table.add_row(vec![
            Cell::new(month.to_string().as_str()).set_alignment(CellAlignment::Right),
            amount_cell(breakdown.lunch),
            amount_cell(breakdown.dinner),
            amount_cell(breakdown.total()),
        ]);
    }
    println!("{table}");

    print_summary(&records, "Year total");
}

pub(crate) fn run_trend(store: &Store, start: NaiveDate, end: NaiveDate) {
    let range = start..end.succ_opt().unwrap();
    let records = store.select_range(&range);
    if records.is_empty() {
        info!("No sales data between {} and {}", format_date(start), format_date(end));
        return;
    }

    let mut table = new_table();
    table.set_header(vec!["Date", "Sales", "7-day average"]);
    for point in report::daily_trend(&records, &range) {
        let average_cell = match point.moving_average {
            Some(average) => amount_cell(average.round() as u64),
            None => Cell::new(""),
        };
        table.add_row(vec![
            Cell::new(format_date(point.date).as_str()),
            amount_cell(point.total),
            average_cell,
        ]);
    }
    println!("{table}");
}

pub(crate) fn run_weekday(store: &Store, year: i32, month: u32) {
    let records = store.select_range(&util::month_of(year, month));
    if records.is_empty() {
        info!("No sales data for {}-{:02}", year, month);
        return;
    }

    let mut table = new_table();
    table.set_header(vec!["Weekday", "Lunch", "Dinner", "Total"]);
    for (weekday, breakdown) in report::weekday_pivot(&records) {
        table.add_row(vec![
            Cell::new(util::weekday_label(weekday)),
            amount_cell(breakdown.lunch),
            amount_cell(breakdown.dinner),
            amount_cell(breakdown.total()),
        ]);
    }
    println!("{table}");
}

pub(crate) fn run_payment(store: &Store, year: i32, month: u32) {
    let records = store.select_range(&util::month_of(year, month));
    if records.is_empty() {
        info!("No sales data for {}-{:02}", year, month);
        return;
    }

    let mut table = new_table();
    table.set_header(vec!["Method", "Amount"]);
    for (method, amount) in report::totals_by_method(&records) {
        table.add_row(vec![Cell::new(method.as_str()), amount_cell(amount)]);
    }
    println!("{table}");

    let mut table = new_table();
    table.set_header(vec!["Method", "Lunch", "Dinner", "Total"]);
    for (method, breakdown) in report::method_slot_pivot(&records) {
        table.add_row(vec![
            Cell::new(method.as_str()),
            amount_cell(breakdown.lunch),
            amount_cell(breakdown.dinner),
            amount_cell(breakdown.total()),
        ]);
    }
    println!("{table}");
}

pub(crate) fn run_list(store: &Store, range: Option<(YearMonth, YearMonth)>) {
    let records = match range {
        Some(((start_year, start_month), (end_year, end_month))) => store.select_range(
            &(util::month_of(start_year, start_month).start..util::month_of(end_year, end_month).end),
        ),
        None => store.all(),
    };
    if records.is_empty() {
        info!("No sales data in the requested range");
        return;
    }

    let mut table = new_table();
    table.set_header(vec!["Date", "Slot", "Method", "Amount", "Note"]);
    for record in &records {
        table.add_row(vec![
            Cell::new(format_date(record.date).as_str()),
            Cell::new(record.slot.to_string().as_str()),
            Cell::new(record.method.as_str()),
            amount_cell(record.amount),
            Cell::new(record.note.as_str()),
        ]);
    }
    println!("{table}");
    println!("{} records", records.len());
}

/// An empty dataset yields an all-zero row rather than an error.
pub(crate) fn run_stats(store: &Store, range: Option<(NaiveDate, NaiveDate)>) {
    let records = match range {
        Some((start, end)) => store.select_range(&(start..end.succ_opt().unwrap())),
        None => store.all(),
    };

    let stats = report::statistics(&records);
    let mut table = new_table();
    table.set_header(vec!["Grand total", "Daily average", "Lunch total", "Dinner total"]);
    table.add_row(vec![
        amount_cell(stats.total),
        amount_cell(stats.daily_average.round() as u64),
        amount_cell(stats.lunch_total),
        amount_cell(stats.dinner_total),
    ]);
    println!("{table}");
}

fn print_summary(records: &[SalesRecord], total_label: &str) {
    let stats = report::statistics(records);
    let mut table = new_table();
    table.set_header(vec!["Lunch total", "Dinner total", total_label]);
    table.add_row(vec![
        amount_cell(stats.lunch_total),
        amount_cell(stats.dinner_total),
        amount_cell(stats.total),
    ]);
    println!("{table}");
}
