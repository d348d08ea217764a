mod chilean_rut_checksum;

pub use crate::secondary_validation::chilean_rut_checksum::{
    compute_check_digit, ChileanRutChecksum,
};

/// A check that can be applied to a candidate string that already looks like an identifier.
pub trait Validator: Send + Sync {
    fn is_valid_match(&self, candidate: &str) -> bool;
}
