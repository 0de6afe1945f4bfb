mod delete;
mod entry;
mod export;
mod report;

use chrono::NaiveDate;
use comfy_table::{Cell, CellAlignment, Table, TableComponent};

use crate::config::Config;
use crate::parser::{self, Statement};
use crate::store::Store;
use crate::util::format_yen;

pub(crate) fn parse_and_run_command(
    store: &mut Store,
    config: &Config,
    command: &str,
) -> Result<(), String> {
    let statement = parser::parse(command)?;

    let result = match statement {
        Statement::Entry { year, month, file } => {
            entry::execute_entry(store, config, year, month, &file)
        }
        Statement::Daily { year, month } => {
            report::run_daily(store, year, month);
            Ok(())
        }
        Statement::Monthly { year } => {
            report::run_monthly(store, year);
            Ok(())
        }
        Statement::Trend { start, end } => {
            report::run_trend(store, start, end);
            Ok(())
        }
        Statement::Weekday { year, month } => {
            report::run_weekday(store, year, month);
            Ok(())
        }
        Statement::Payment { year, month } => {
            report::run_payment(store, year, month);
            Ok(())
        }
        Statement::List { range } => {
            report::run_list(store, range);
            Ok(())
        }
        Statement::Stats { range } => {
            report::run_stats(store, range);
            Ok(())
        }
        Statement::Export { file, range } => export::execute_export(store, &file, range),
        Statement::Delete { year, month } => delete::execute_delete(store, year, month),
        Statement::Wipe { confirmation } => delete::execute_wipe(store, &confirmation),
        Statement::Repair => delete::execute_repair(store),
    };

    result.map_err(|e| e.to_string())
}

fn new_table() -> Table {
    let mut table = Table::new();
    table.remove_style(TableComponent::HorizontalLines);
    table.remove_style(TableComponent::MiddleIntersections);
    table.remove_style(TableComponent::LeftBorderIntersections);
    table.remove_style(TableComponent::RightBorderIntersections);
    table
}

fn amount_cell(amount: u64) -> Cell {
    Cell::new(format_yen(amount).as_str()).set_alignment(CellAlignment::Right)
}

fn format_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}
