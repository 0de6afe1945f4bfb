use anyhow::{anyhow, Result};
use log::info;

use crate::store::Store;

const WIPE_CONFIRMATION: &str = "DELETE ALL DATA";

pub(crate) fn execute_delete(store: &mut Store, year: i32, month: u32) -> Result<()> {
    let deleted = store.delete_month(year, month)?;
    if deleted > 0 {
        info!("Deleted {} records for {}-{:02}", deleted, year, month);
    } else {
        info!("No data for {}-{:02}", year, month);
    }
    Ok(())
}

pub(crate) fn execute_wipe(store: &mut Store, confirmation: &str) -> Result<()> {
    if confirmation != WIPE_CONFIRMATION {
        return Err(anyhow!(
            "Confirmation phrase does not match; type WIPE '{}'",
            WIPE_CONFIRMATION
        ));
    }

    let deleted = store.wipe()?;
    info!("Deleted all {} records", deleted);
    Ok(())
}

pub(crate) fn execute_repair(store: &mut Store) -> Result<()> {
    store.repair()?;
    info!("Data file rewritten in standard form");
    Ok(())
}
