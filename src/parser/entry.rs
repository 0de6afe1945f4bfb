use nom::bytes::complete::tag_no_case;
use nom::character::complete::multispace1;
use nom::IResult;

use crate::parser::{quoted_path, year_month, Statement};

/// ENTRY yyyy-mm FROM 'form.csv'
pub(crate) fn entry(input: &str) -> IResult<&str, Statement> {
    let (input, _) = tag_no_case("ENTRY")(input)?;
    let (input, _) = multispace1(input)?;
    let (input, (year, month)) = year_month(input)?;
    let (input, _) = multispace1(input)?;
    let (input, _) = tag_no_case("FROM")(input)?;
    let (input, _) = multispace1(input)?;
    let (input, file) = quoted_path(input)?;
    Ok((input, Statement::Entry { year, month, file }))
}
