use std::fmt::{Display, Formatter};
use strum::IntoStaticStr;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error, IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
pub enum ProcessingErrorReason {
    /// The body handed to the check digit computation has non digits or a bad length
    #[error("is not valid to be processed (only numbers)")]
    OnlyNumbers,

    #[error("is not a valid format to be processed")]
    InvalidFormat,

    #[error("is not a valid Chilean RUT number")]
    InvalidRut,

    /// The formatter produced something that is not in canonical grouped form
    #[error("something went wrong with this RUT number")]
    Inconsistent,
}

impl ProcessingErrorReason {
    /// Stable name used as a metric label
    pub fn name(&self) -> &'static str {
        self.into()
    }
}

/// Raised for any input that can't be processed. It keeps the offending value as it was given.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{}: {reason}", DisplayValue(.value))]
pub struct ProcessingError {
    pub value: Option<String>,
    pub reason: ProcessingErrorReason,
}

impl ProcessingError {
    pub(crate) fn new(value: Option<&str>, reason: ProcessingErrorReason) -> Self {
        Self {
            value: value.map(str::to_owned),
            reason,
        }
    }
}

struct DisplayValue<'a>(&'a Option<String>);

impl Display for DisplayValue<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self.0 {
            Some(value) => f.write_str(value),
            None => f.write_str("None"),
        }
    }
}
