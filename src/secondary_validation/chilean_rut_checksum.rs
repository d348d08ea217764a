use crate::check_digit::CheckDigit;
use crate::rut::is_valid;
use crate::secondary_validation::Validator;

pub struct ChileanRutChecksum;

const WEIGHTS: [u32; 6] = [2, 3, 4, 5, 6, 7];
const MODULUS: u32 = 11;

/// Computes the check digit of a RUT body (digits only, no separators).
/// Returns `None` when the body is empty or has a non digit character.
///
/// Digits are weighted from the least significant one with 2, 3, 4, 5, 6, 7, 2, 3, ...
/// and the check digit is `11 - (sum mod 11)`, where 11 maps to 0 and 10 to `k`.
pub fn compute_check_digit(body: &str) -> Option<CheckDigit> {
    if body.is_empty() {
        return None;
    }
    let mut sum: u32 = 0;
    for (c, weight) in body.chars().rev().zip(WEIGHTS.iter().cycle()) {
        sum += c.to_digit(10)? * weight;
    }
    CheckDigit::from_value((MODULUS - sum % MODULUS) % MODULUS)
}

impl Validator for ChileanRutChecksum {
    // https://es.wikipedia.org/wiki/Rol_%C3%9Anico_Tributario
    fn is_valid_match(&self, candidate: &str) -> bool {
        is_valid(candidate)
    }
}
