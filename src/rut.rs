use crate::check_digit::CheckDigit;
use crate::error::{ProcessingError, ProcessingErrorReason};
use crate::normalization::clean_rut_string;
use crate::parser::rut_parser::{is_rut_format, is_rut_perfectly_formatted};
use crate::secondary_validation::compute_check_digit;
use serde_with::{DeserializeFromStr, SerializeDisplay};
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Bounds (inclusive) on the body length accepted by the check digit computation
const MIN_BODY_LENGTH: usize = 3;
const MAX_BODY_LENGTH: usize = 8;

/// Bounds (inclusive) on the compact token (body + check digit) accepted by format/clean
const MIN_TOKEN_LENGTH: usize = 3;
const MAX_TOKEN_LENGTH: usize = 9;

/// Checks if a RUT is valid, e.g. `5126663-3`, `5.126.663-3` or `51266633`.
///
/// Never fails: absent, malformed or leading-zero input is simply not valid.
pub fn is_valid<'a>(rut: impl Into<Option<&'a str>>) -> bool {
    let Some(rut) = rut.into() else {
        return false;
    };

    // The zero check applies to the input as given, not to its cleaned version.
    if rut.starts_with('0') || !is_rut_format(rut) {
        return false;
    }

    let token = clean_rut_string(Some(rut));
    match split_check_digit(&token) {
        Some((body, check_digit)) => {
            matches!(get_verification_digit(body), Ok(expected) if expected == check_digit)
        }
        None => false,
    }
}

/// Calculates the check digit of a RUT body, e.g. `5126663`.
/// No dots, no dash and no check digit are allowed. The body must have 3 to 8 digits.
pub fn get_verification_digit<'a>(
    body: impl Into<Option<&'a str>>,
) -> Result<CheckDigit, ProcessingError> {
    let body = body.into();
    let only_numbers = |digits: &str| {
        (MIN_BODY_LENGTH..=MAX_BODY_LENGTH).contains(&digits.len())
            && digits.chars().all(|c| c.is_ascii_digit())
    };

    body.filter(|digits| only_numbers(*digits))
        .and_then(compute_check_digit)
        .ok_or_else(|| ProcessingError::new(body, ProcessingErrorReason::OnlyNumbers))
}

/// Formats a RUT with dots as thousands separator and a dash before the check digit,
/// e.g. `173176848` becomes `17.317.684-8`.
///
/// When `validate` is set, the checksum of the original input is verified first.
pub fn format_rut<'a>(
    rut: impl Into<Option<&'a str>>,
    validate: bool,
) -> Result<String, ProcessingError> {
    let rut = rut.into();
    let token = compact_token(rut)?;
    let (body, check_digit) = split_check_digit(&token)
        .ok_or_else(|| ProcessingError::new(rut, ProcessingErrorReason::InvalidFormat))?;
    let grouped_body = group_thousands(body);

    if validate && !is_valid(rut) {
        return Err(ProcessingError::new(rut, ProcessingErrorReason::InvalidRut));
    }

    let formatted = format!("{grouped_body}-{check_digit}");
    if !is_rut_perfectly_formatted(&formatted) {
        return Err(ProcessingError::new(
            rut,
            ProcessingErrorReason::Inconsistent,
        ));
    }
    Ok(formatted)
}

/// Removes the dots and the dash of a RUT, e.g. `17.317.684-8` becomes `173176848`.
///
/// When `validate` is set, the original input is verified first, exactly as [format_rut] does.
pub fn clean_rut<'a>(
    rut: impl Into<Option<&'a str>>,
    validate: bool,
) -> Result<String, ProcessingError> {
    let rut = rut.into();
    let token = compact_token(rut)?;

    if validate && !is_valid(rut) {
        return Err(ProcessingError::new(rut, ProcessingErrorReason::InvalidRut));
    }
    Ok(token)
}

/// Normalizes the input and checks the shape and length of the result
fn compact_token(rut: Option<&str>) -> Result<String, ProcessingError> {
    let token = clean_rut_string(rut);
    if !is_rut_format(&token) || !(MIN_TOKEN_LENGTH..=MAX_TOKEN_LENGTH).contains(&token.len()) {
        return Err(ProcessingError::new(
            rut,
            ProcessingErrorReason::InvalidFormat,
        ));
    }
    Ok(token)
}

fn split_check_digit(token: &str) -> Option<(&str, CheckDigit)> {
    let last = token.chars().next_back()?;
    let check_digit = CheckDigit::from_char(last)?;
    Some((&token[..token.len() - last.len_utf8()], check_digit))
}

/// Renders a digit string as a number with a dot every three digits from the right.
/// Leading zeros are dropped, an all-zero string renders as `0`.
fn group_thousands(digits: &str) -> String {
    let digits = digits.trim_start_matches('0');
    let digits = if digits.is_empty() { "0" } else { digits };

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (idx, c) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(c);
    }
    grouped
}

/// A valid RUT. It serializes to its grouped form (`17.317.684-8`) and deserializes from
/// any form accepted by [is_valid].
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, SerializeDisplay, DeserializeFromStr,
)]
pub struct Rut {
    body: u32,
    check_digit: CheckDigit,
}

impl Rut {
    /// Builds a RUT from its body, deriving the check digit
    pub fn new(body: u32) -> Result<Self, ProcessingError> {
        let digits = body.to_string();
        let check_digit = get_verification_digit(digits.as_str())?;
        Ok(Self { body, check_digit })
    }

    pub fn body(&self) -> u32 {
        self.body
    }

    pub fn check_digit(&self) -> CheckDigit {
        self.check_digit
    }

    /// The compact form, e.g. `173176848`
    pub fn compact(&self) -> String {
        format!("{}{}", self.body, self.check_digit)
    }
}

impl Display for Rut {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}-{}",
            group_thousands(&self.body.to_string()),
            self.check_digit
        )
    }
}

impl FromStr for Rut {
    type Err = ProcessingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if !is_valid(s) {
            // report shape problems before checksum ones
            compact_token(Some(s))?;
            return Err(ProcessingError::new(
                Some(s),
                ProcessingErrorReason::InvalidRut,
            ));
        }

        let token = clean_rut_string(Some(s));
        let invalid_format = || ProcessingError::new(Some(s), ProcessingErrorReason::InvalidFormat);
        let (body, check_digit) = split_check_digit(&token).ok_or_else(invalid_format)?;
        let body = body.parse().map_err(|_| invalid_format())?;
        Ok(Self { body, check_digit })
    }
}
