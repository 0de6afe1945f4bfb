use std::path::Path;

use anyhow::Result;
use log::info;

use crate::parser::YearMonth;
use crate::store::{self, Store};
use crate::util;

/// Export records to a file in the store schema
pub(crate) fn execute_export(
    store: &Store,
    file_path: &str,
    range: Option<(YearMonth, YearMonth)>,
) -> Result<()> {
    let records = match range {
        Some(((start_year, start_month), (end_year, end_month))) => store.select_range(
            &(util::month_of(start_year, start_month).start..util::month_of(end_year, end_month).end),
        ),
        None => store.all(),
    };
    if records.is_empty() {
        info!("No data in the requested range, nothing exported");
        return Ok(());
    }

    store::write_sales_csv(Path::new(file_path), &records)?;
    info!("Exported {} records to {}", records.len(), file_path);

    Ok(())
}
