use std::collections::BTreeMap;
use std::ops::Range;

use chrono::{Datelike, NaiveDate, Weekday};

use crate::record::{SalesRecord, TimeSlot};
use crate::util;

/// Combined statistics over a record set.
#[derive(Debug, PartialEq)]
pub(crate) struct SalesStats {
    pub(crate) total: u64,
    /// Mean of the per-date totals, over distinct dates present.
    pub(crate) daily_average: f64,
    pub(crate) lunch_total: u64,
    pub(crate) dinner_total: u64,
}

/// Lunch/dinner totals for one pivot bucket.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct SlotBreakdown {
    pub(crate) lunch: u64,
    pub(crate) dinner: u64,
}

impl SlotBreakdown {
    fn add(&mut self, slot: TimeSlot, amount: u64) {
        match slot {
            TimeSlot::Lunch => self.lunch += amount,
            TimeSlot::Dinner => self.dinner += amount,
        }
    }

    pub(crate) fn total(&self) -> u64 {
        self.lunch + self.dinner
    }
}

/// One day of the trend report.
#[derive(Debug, PartialEq)]
pub(crate) struct TrendPoint {
    pub(crate) date: NaiveDate,
    pub(crate) total: u64,
    /// Mean of the last seven days, present from the seventh day on.
    pub(crate) moving_average: Option<f64>,
}

pub(crate) fn totals_by_date(records: &[SalesRecord]) -> BTreeMap<NaiveDate, u64> {
    let mut totals = BTreeMap::new();
    for record in records {
        *totals.entry(record.date).or_insert(0) += record.amount;
    }
    totals
}

pub(crate) fn totals_by_slot(records: &[SalesRecord]) -> BTreeMap<TimeSlot, u64> {
    let mut totals = BTreeMap::new();
    for record in records {
        *totals.entry(record.slot).or_insert(0) += record.amount;
    }
    totals
}

pub(crate) fn totals_by_method(records: &[SalesRecord]) -> BTreeMap<String, u64> {
    let mut totals = BTreeMap::new();
    for record in records {
        *totals.entry(record.method.clone()).or_insert(0) += record.amount;
    }
    totals
}

pub(crate) fn statistics(records: &[SalesRecord]) -> SalesStats {
    let by_date = totals_by_date(records);
    let total: u64 = by_date.values().sum();
    let daily_average = if by_date.is_empty() {
        0.0
    } else {
        total as f64 / by_date.len() as f64
    };

    let by_slot = totals_by_slot(records);
    SalesStats {
        total,
        daily_average,
        lunch_total: by_slot.get(&TimeSlot::Lunch).copied().unwrap_or(0),
        dinner_total: by_slot.get(&TimeSlot::Dinner).copied().unwrap_or(0),
    }
}

/// Per-day pivot for one month. Every day of the month gets a row;
/// days without records are zero.
pub(crate) fn daily_pivot(records: &[SalesRecord], year: i32, month: u32) -> Vec<(u32, SlotBreakdown)> {
    let mut buckets: BTreeMap<u32, SlotBreakdown> = BTreeMap::new();
    for record in records {
        buckets.entry(record.date.day()).or_default().add(record.slot, record.amount);
    }

    (1..=util::last_day_of(year, month))
        .map(|day| (day, buckets.get(&day).copied().unwrap_or_default()))
        .collect()
}

/// Per-month pivot for one year: always twelve rows, zero-filled.
pub(crate) fn monthly_pivot(records: &[SalesRecord]) -> Vec<(u32, SlotBreakdown)> {
    let mut buckets: BTreeMap<u32, SlotBreakdown> = BTreeMap::new();
    for record in records {
        buckets.entry(record.date.month()).or_default().add(record.slot, record.amount);
    }

    (1..=12)
        .map(|month| (month, buckets.get(&month).copied().unwrap_or_default()))
        .collect()
}

/// Per-weekday pivot, Monday through Sunday, zero-filled.
pub(crate) fn weekday_pivot(records: &[SalesRecord]) -> Vec<(Weekday, SlotBreakdown)> {
    let mut buckets: BTreeMap<u8, SlotBreakdown> = BTreeMap::new();
    for record in records {
        buckets
            .entry(record.date.weekday().num_days_from_monday() as u8)
            .or_default()
            .add(record.slot, record.amount);
    }

    let mut weekday = Weekday::Mon;
    let mut rows = vec![];
    for i in 0..7u8 {
        rows.push((weekday, buckets.get(&i).copied().unwrap_or_default()));
        weekday = weekday.succ();
    }
    rows
}

/// Per-method lunch/dinner cross-tab, sorted by method.
pub(crate) fn method_slot_pivot(records: &[SalesRecord]) -> Vec<(String, SlotBreakdown)> {
    let mut buckets: BTreeMap<String, SlotBreakdown> = BTreeMap::new();
    for record in records {
        buckets.entry(record.method.clone()).or_default().add(record.slot, record.amount);
    }

    buckets.into_iter().collect()
}

/// Per-day totals over a range, zero-filled so the sequence is
/// contiguous, with a 7-day moving average once seven days are in.
pub(crate) fn daily_trend(records: &[SalesRecord], range: &Range<NaiveDate>) -> Vec<TrendPoint> {
    let by_date = totals_by_date(records);

    let totals: Vec<(NaiveDate, u64)> = range
        .start
        .iter_days()
        .take_while(|date| *date < range.end)
        .map(|date| (date, by_date.get(&date).copied().unwrap_or(0)))
        .collect();

    totals
        .iter()
        .enumerate()
        .map(|(i, (date, total))| {
            let moving_average = if i >= 6 {
                let window: u64 = totals[i - 6..=i].iter().map(|(_, t)| t).sum();
                Some(window as f64 / 7.0)
            } else {
                None
            };
            TrendPoint { date: *date, total: *total, moving_average }
        })
        .collect()
}
