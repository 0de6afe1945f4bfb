use nom::bytes::complete::tag_no_case;
use nom::character::complete::{i32, multispace1};
use nom::combinator::opt;
use nom::sequence::preceded;
use nom::IResult;

use crate::parser::{date_range, month_range, year_month, Statement};

/// DAILY yyyy-mm
pub(crate) fn daily(input: &str) -> IResult<&str, Statement> {
    let (input, _) = tag_no_case("DAILY")(input)?;
    let (input, _) = multispace1(input)?;
    let (input, (year, month)) = year_month(input)?;
    Ok((input, Statement::Daily { year, month }))
}

/// MONTHLY yyyy
pub(crate) fn monthly(input: &str) -> IResult<&str, Statement> {
    let (input, _) = tag_no_case("MONTHLY")(input)?;
    let (input, _) = multispace1(input)?;
    let (input, year) = i32(input)?;
    Ok((input, Statement::Monthly { year }))
}

/// TREND FROM yyyy-mm-dd TO yyyy-mm-dd
pub(crate) fn trend(input: &str) -> IResult<&str, Statement> {
    let (input, _) = tag_no_case("TREND")(input)?;
    let (input, _) = multispace1(input)?;
    let (input, (start, end)) = date_range(input)?;
    Ok((input, Statement::Trend { start, end }))
}

/// WEEKDAY yyyy-mm
pub(crate) fn weekday(input: &str) -> IResult<&str, Statement> {
    let (input, _) = tag_no_case("WEEKDAY")(input)?;
    let (input, _) = multispace1(input)?;
    let (input, (year, month)) = year_month(input)?;
    Ok((input, Statement::Weekday { year, month }))
}

/// PAYMENT yyyy-mm
pub(crate) fn payment(input: &str) -> IResult<&str, Statement> {
    let (input, _) = tag_no_case("PAYMENT")(input)?;
    let (input, _) = multispace1(input)?;
    let (input, (year, month)) = year_month(input)?;
    Ok((input, Statement::Payment { year, month }))
}

/// LIST [FROM yyyy-mm TO yyyy-mm]
pub(crate) fn list(input: &str) -> IResult<&str, Statement> {
    let (input, _) = tag_no_case("LIST")(input)?;
    let (input, range) = opt(preceded(multispace1, month_range))(input)?;
    Ok((input, Statement::List { range }))
}

/// STATS [FROM yyyy-mm-dd TO yyyy-mm-dd]
pub(crate) fn stats(input: &str) -> IResult<&str, Statement> {
    let (input, _) = tag_no_case("STATS")(input)?;
    let (input, range) = opt(preceded(multispace1, date_range))(input)?;
    Ok((input, Statement::Stats { range }))
}
