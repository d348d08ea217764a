use crate::check_digit::CheckDigit;
use crate::error::ProcessingError;
use crate::processor::config::RutConfig;
use crate::processor::metrics::RutMetrics;
use crate::rut::{self, Rut};
use ::metrics::Counter;

pub mod config;
pub mod metrics;

#[cfg(test)]
mod test;

/// Applies a [RutConfig] to the RUT operations and reports their outcome as metrics.
///
/// Counters are registered with the recorder installed when the processor is built.
pub struct RutProcessor {
    validate: bool,
    metrics: RutMetrics,
}

impl RutProcessor {
    pub fn new(config: &RutConfig) -> Self {
        Self {
            validate: config.validate,
            metrics: RutMetrics::new(&config.labels),
        }
    }

    pub fn is_valid<'a>(&self, rut: impl Into<Option<&'a str>>) -> bool {
        let valid = rut::is_valid(rut);
        if valid {
            self.metrics.valid.increment(1);
        } else {
            self.metrics.invalid.increment(1);
        }
        valid
    }

    pub fn get_verification_digit<'a>(
        &self,
        body: impl Into<Option<&'a str>>,
    ) -> Result<CheckDigit, ProcessingError> {
        self.observe(
            rut::get_verification_digit(body),
            &self.metrics.verification_digits,
        )
    }

    /// Grouped form, e.g. `17.317.684-8`
    pub fn format<'a>(&self, rut: impl Into<Option<&'a str>>) -> Result<String, ProcessingError> {
        self.observe(
            rut::format_rut(rut, self.validate),
            &self.metrics.formatted_grouped,
        )
    }

    /// Compact form, e.g. `173176848`
    pub fn clean<'a>(&self, rut: impl Into<Option<&'a str>>) -> Result<String, ProcessingError> {
        self.observe(
            rut::clean_rut(rut, self.validate),
            &self.metrics.formatted_compact,
        )
    }

    /// Parses a RUT. The checksum is always verified, whatever the configuration says.
    pub fn parse(&self, rut: &str) -> Result<Rut, ProcessingError> {
        let result = rut.parse::<Rut>();
        match &result {
            Ok(_) => self.metrics.valid.increment(1),
            Err(err) => {
                self.metrics.invalid.increment(1);
                self.metrics.record_error(err);
            }
        }
        result
    }

    fn observe<T>(
        &self,
        result: Result<T, ProcessingError>,
        success: &Counter,
    ) -> Result<T, ProcessingError> {
        match &result {
            Ok(_) => success.increment(1),
            Err(err) => self.metrics.record_error(err),
        }
        result
    }
}

impl Default for RutProcessor {
    fn default() -> Self {
        RutConfig::default().build()
    }
}
