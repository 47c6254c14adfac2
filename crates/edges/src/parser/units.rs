use nom::{
    IResult,
    branch::alt,
    bytes::complete::tag,
    character::complete::{char, digit1},
    combinator::{map, map_res, opt, recognize},
    sequence::{pair, tuple},
};

/// Parse a floating point or integer number, optionally negative.
///
/// Also accepts `inf`, `-inf` and `NaN`, the spellings `f64` displays
/// non-finite values with.
pub fn parse_number(input: &str) -> IResult<&str, f64> {
    alt((
        map(tag("NaN"), |_| f64::NAN),
        map(tag("-inf"), |_| f64::NEG_INFINITY),
        map(tag("inf"), |_| f64::INFINITY),
        map_res(
            recognize(tuple((
                opt(char('-')),
                digit1,
                opt(pair(char('.'), digit1)),
            ))),
            |s: &str| s.parse::<f64>(),
        ),
    ))(input)
}
