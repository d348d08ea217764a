// This blocks accidental use of `println`. If one is actually needed, you can
// override with `#[allow(clippy::print_stdout)]`.
#![deny(clippy::print_stdout)]

mod check_digit;
mod error;
mod normalization;
mod observability;
mod parser;
mod processor;
mod rut;
mod secondary_validation;

// This is the public API of the RUT library
pub use check_digit::CheckDigit;
pub use error::{ProcessingError, ProcessingErrorReason};
pub use observability::labels::Labels;
pub use processor::{config::RutConfig, metrics::RutMetrics, RutProcessor};
pub use rut::{clean_rut, format_rut, get_verification_digit, is_valid, Rut};
pub use secondary_validation::{ChileanRutChecksum, Validator};

#[cfg(feature = "bench")]
pub use crate::{
    normalization::clean_rut_string,
    parser::rut_parser::{is_rut_format, is_rut_perfectly_formatted},
    secondary_validation::compute_check_digit,
};
