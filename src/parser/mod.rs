mod delete;
mod entry;
mod export;
mod report;

use chrono::NaiveDate;
use nom::branch::alt;
use nom::bytes::complete::{is_not, tag_no_case};
use nom::character::complete::{char, i32, multispace1, u32};
use nom::error::ErrorKind;
use nom::sequence::delimited;
use nom::IResult;

pub(crate) type YearMonth = (i32, u32);

#[derive(Debug, PartialEq)]
pub(crate) enum Statement {
    /// ENTRY yyyy-mm FROM 'form.csv'
    Entry { year: i32, month: u32, file: String },
    /// DAILY yyyy-mm
    Daily { year: i32, month: u32 },
    /// MONTHLY yyyy
    Monthly { year: i32 },
    /// TREND FROM yyyy-mm-dd TO yyyy-mm-dd (inclusive)
    Trend { start: NaiveDate, end: NaiveDate },
    /// WEEKDAY yyyy-mm
    Weekday { year: i32, month: u32 },
    /// PAYMENT yyyy-mm
    Payment { year: i32, month: u32 },
    /// LIST [FROM yyyy-mm TO yyyy-mm]
    List { range: Option<(YearMonth, YearMonth)> },
    /// STATS [FROM yyyy-mm-dd TO yyyy-mm-dd]
    Stats { range: Option<(NaiveDate, NaiveDate)> },
    /// EXPORT TO 'file.csv' [FROM yyyy-mm TO yyyy-mm]
    Export { file: String, range: Option<(YearMonth, YearMonth)> },
    /// DELETE yyyy-mm
    Delete { year: i32, month: u32 },
    /// WIPE 'DELETE ALL DATA'
    Wipe { confirmation: String },
    /// REPAIR
    Repair,
}

pub(crate) fn parse(command: &str) -> Result<Statement, String> {
    let result = alt((
        entry::entry,
        report::daily,
        report::monthly,
        report::trend,
        report::weekday,
        report::payment,
        report::list,
        report::stats,
        export::export,
        delete::delete,
        delete::wipe,
        delete::repair,
    ))(command.trim());

    match result {
        Ok((_, statement)) => Ok(statement),
        Err(e) => Err(format!("Unable to parse command: {}", e)),
    }
}

/// yyyy-mm with the month checked against 1..=12
pub(crate) fn year_month(input: &str) -> IResult<&str, YearMonth> {
    let (input, year) = i32(input)?;
    let (input, _) = char('-')(input)?;
    let (input, month) = u32(input)?;
    if !(1..=12).contains(&month) {
        return Err(nom::Err::Error(nom::error::Error::new(input, ErrorKind::Verify)));
    }
    Ok((input, (year, month)))
}

pub(crate) fn yyyy_mm_dd_date(input: &str) -> IResult<&str, NaiveDate> {
    let (input, year) = i32(input)?;
    let (input, _) = char('-')(input)?;
    let (input, month) = u32(input)?;
    let (input, _) = char('-')(input)?;
    let (input, day) = u32(input)?;
    match NaiveDate::from_ymd_opt(year, month, day) {
        Some(date) => Ok((input, date)),
        None => Err(nom::Err::Error(nom::error::Error::new(input, ErrorKind::Verify))),
    }
}

/// '...' single-quoted file path
pub(crate) fn quoted_path(input: &str) -> IResult<&str, String> {
    let (input, path) = delimited(char('\''), is_not("'"), char('\''))(input)?;
    Ok((input, path.to_string()))
}

/// FROM yyyy-mm TO yyyy-mm
pub(crate) fn month_range(input: &str) -> IResult<&str, (YearMonth, YearMonth)> {
    let (input, _) = tag_no_case("FROM")(input)?;
    let (input, _) = multispace1(input)?;
    let (input, start) = year_month(input)?;
    let (input, _) = multispace1(input)?;
    let (input, _) = tag_no_case("TO")(input)?;
    let (input, _) = multispace1(input)?;
    let (input, end) = year_month(input)?;
    Ok((input, (start, end)))
}

/// FROM yyyy-mm-dd TO yyyy-mm-dd
pub(crate) fn date_range(input: &str) -> IResult<&str, (NaiveDate, NaiveDate)> {
    let (input, _) = tag_no_case("FROM")(input)?;
    let (input, _) = multispace1(input)?;
    let (input, start) = yyyy_mm_dd_date(input)?;
    let (input, _) = multispace1(input)?;
    let (input, _) = tag_no_case("TO")(input)?;
    let (input, _) = multispace1(input)?;
    let (input, end) = yyyy_mm_dd_date(input)?;
    Ok((input, (start, end)))
}
