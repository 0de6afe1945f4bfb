use std::path::Path;

use anyhow::{anyhow, Result};
use comfy_table::Cell;
use log::info;

use crate::config::Config;
use crate::controller::new_table;
use crate::csv_reader;
use crate::entry;
use crate::normalize::FieldErrors;
use crate::store::Store;

/// Run a monthly entry: read the form file, normalize every field,
/// then replace the month's records wholesale.
pub(crate) fn execute_entry(
    store: &mut Store,
    config: &Config,
    year: i32,
    month: u32,
    file_path: &str,
) -> Result<()> {
    let mut columns = vec!["lunch".to_string(), "dinner".to_string()];
    columns.extend(config.methods.iter().cloned());

    let rows = csv_reader::read_form_rows(Path::new(file_path), &columns)?;
    if rows.is_empty() {
        info!("Form {} holds no rows, nothing saved", file_path);
        return Ok(());
    }

    let mut errors = FieldErrors::new();
    let per_day = entry::collect_month(&rows, &mut errors);
    if !errors.is_empty() {
        let mut table = new_table();
        table.set_header(vec!["Field", "Error"]);
        for (field, message) in errors.iter() {
            table.add_row(vec![Cell::new(field.as_str()), Cell::new(message.as_str())]);
        }
        println!("{table}");
        return Err(anyhow!("{} field(s) failed validation, nothing saved", errors.len()));
    }

    let records = entry::build_month_records(year, month, &per_day)?;
    let written = store.replace_month(year, month, records)?;
    if written > 0 {
        info!("Saved {} records for {}-{:02}", written, year, month);
    } else {
        info!(
            "No positive amounts in form; existing data for {}-{:02} left unchanged",
            year, month
        );
    }

    Ok(())
}
