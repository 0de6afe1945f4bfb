use std::fmt;

use chrono::NaiveDate;
use serde::Serialize;

/// Column headers of the persisted sales file.
pub(crate) const DATE_COLUMN: &str = "日付";
pub(crate) const SLOT_COLUMN: &str = "時間帯";
pub(crate) const METHOD_COLUMN: &str = "支払方法";
pub(crate) const AMOUNT_COLUMN: &str = "売上金額";
pub(crate) const NOTE_COLUMN: &str = "備考";

/// Service period of a sales record. Stored values other than the two
/// labels are coerced to Lunch during standardization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub(crate) enum TimeSlot {
    #[serde(rename = "昼営業")]
    Lunch,
    #[serde(rename = "夜営業")]
    Dinner,
}

impl TimeSlot {
    pub(crate) fn from_label(label: &str) -> Option<TimeSlot> {
        match label {
            "昼営業" => Some(TimeSlot::Lunch),
            "夜営業" => Some(TimeSlot::Dinner),
            _ => None,
        }
    }

    /// Method token recorded for a blank payment method. The two
    /// non-itemized service totals live under these tokens.
    pub(crate) fn default_method(&self) -> &'static str {
        match self {
            TimeSlot::Lunch => "lunch",
            TimeSlot::Dinner => "dinner",
        }
    }
}

impl fmt::Display for TimeSlot {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            TimeSlot::Lunch => write!(f, "Lunch"),
            TimeSlot::Dinner => write!(f, "Dinner"),
        }
    }
}

/// One row of the sales dataset. `(date, slot, method)` is not unique;
/// several rows per key are summed by the reports.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub(crate) struct SalesRecord {
    #[serde(rename = "日付")]
    pub(crate) date: NaiveDate,
    #[serde(rename = "時間帯")]
    pub(crate) slot: TimeSlot,
    #[serde(rename = "支払方法")]
    pub(crate) method: String,
    #[serde(rename = "売上金額")]
    pub(crate) amount: u64,
    #[serde(rename = "備考")]
    pub(crate) note: String,
}
