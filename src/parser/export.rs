use nom::bytes::complete::tag_no_case;
use nom::character::complete::multispace1;
use nom::combinator::opt;
use nom::sequence::preceded;
use nom::IResult;

use crate::parser::{month_range, quoted_path, Statement};

/// EXPORT TO 'file.csv' [FROM yyyy-mm TO yyyy-mm]
pub(crate) fn export(input: &str) -> IResult<&str, Statement> {
    let (input, _) = tag_no_case("EXPORT")(input)?;
    let (input, _) = multispace1(input)?;
    let (input, _) = tag_no_case("TO")(input)?;
    let (input, _) = multispace1(input)?;
    let (input, file) = quoted_path(input)?;
    let (input, range) = opt(preceded(multispace1, month_range))(input)?;
    Ok((input, Statement::Export { file, range }))
}
