use crate::check_digit::CheckDigit;
use nom::bytes::complete::take_while_m_n;
use nom::character::complete::{char, digit1, one_of};
use nom::combinator::{eof, recognize};
use nom::multi::many0_count;
use nom::sequence::{preceded, tuple};
use nom::IResult;

type ParseResult<'a, T> = IResult<&'a str, T>;

const CHECK_DIGIT_CHARS: &str = "0123456789kK";

/// Checks the canonical grouped shape, e.g. `5.126.663-3` or `13-4`.
/// The first group has 1 to 3 digits and every following group exactly 3.
pub fn is_rut_perfectly_formatted(input: &str) -> bool {
    perfect_rut(input).is_ok()
}

/// Checks the permissive shape accepted as input: `5.126.663-3`, `5126663-3` or `51266633`.
/// Leading zeros are allowed, the dots and the dash are optional. This only validates the
/// shape, not the checksum.
pub fn is_rut_format(input: &str) -> bool {
    let Some(check) = input.chars().next_back() else {
        return false;
    };
    if CheckDigit::from_char(check).is_none() {
        return false;
    }
    let body = &input[..input.len() - check.len_utf8()];
    let body = body.strip_suffix('-').unwrap_or(body);
    loose_body(body).is_ok()
}

fn perfect_rut(input: &str) -> ParseResult<&str> {
    recognize(tuple((
        take_while_m_n(1, 3, |c: char| c.is_ascii_digit()),
        many0_count(thousands_group),
        char('-'),
        one_of(CHECK_DIGIT_CHARS),
        eof,
    )))(input)
}

// The first group is unbounded so that any run of leading zeros is accepted
fn loose_body(input: &str) -> ParseResult<&str> {
    recognize(tuple((digit1, many0_count(thousands_group), eof)))(input)
}

fn thousands_group(input: &str) -> ParseResult<&str> {
    preceded(
        char('.'),
        take_while_m_n(3, 3, |c: char| c.is_ascii_digit()),
    )(input)
}
