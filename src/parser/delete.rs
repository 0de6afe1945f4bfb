use nom::bytes::complete::tag_no_case;
use nom::character::complete::multispace1;
use nom::IResult;

use crate::parser::{quoted_path, year_month, Statement};

/// DELETE yyyy-mm
pub(crate) fn delete(input: &str) -> IResult<&str, Statement> {
    let (input, _) = tag_no_case("DELETE")(input)?;
    let (input, _) = multispace1(input)?;
    let (input, (year, month)) = year_month(input)?;
    Ok((input, Statement::Delete { year, month }))
}

/// WIPE 'DELETE ALL DATA'. The confirmation phrase is checked by the
/// controller, not here.
pub(crate) fn wipe(input: &str) -> IResult<&str, Statement> {
    let (input, _) = tag_no_case("WIPE")(input)?;
    let (input, _) = multispace1(input)?;
    let (input, confirmation) = quoted_path(input)?;
    Ok((input, Statement::Wipe { confirmation }))
}

/// REPAIR
pub(crate) fn repair(input: &str) -> IResult<&str, Statement> {
    let (input, _) = tag_no_case("REPAIR")(input)?;
    Ok((input, Statement::Repair))
}
