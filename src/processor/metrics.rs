use crate::error::ProcessingError;
use crate::observability::labels::Labels;
use metrics::{counter, Counter};

pub struct RutMetrics {
    pub valid: Counter,
    pub invalid: Counter,
    pub verification_digits: Counter,
    pub formatted_grouped: Counter,
    pub formatted_compact: Counter,
    labels: Labels,
}

const RESULT: &str = "result";
const STYLE: &str = "style";
const REASON: &str = "reason";

impl RutMetrics {
    pub fn new(labels: &Labels) -> Self {
        RutMetrics {
            valid: counter!(
                "rut.validations",
                labels.clone_with_labels(&[(RESULT, "valid")])
            ),
            invalid: counter!(
                "rut.validations",
                labels.clone_with_labels(&[(RESULT, "invalid")])
            ),
            verification_digits: counter!("rut.verification_digits", labels.clone()),
            formatted_grouped: counter!(
                "rut.formatted",
                labels.clone_with_labels(&[(STYLE, "grouped")])
            ),
            formatted_compact: counter!(
                "rut.formatted",
                labels.clone_with_labels(&[(STYLE, "compact")])
            ),
            labels: labels.clone(),
        }
    }

    pub fn record_error(&self, error: &ProcessingError) {
        counter!(
            "rut.processing_errors",
            self.labels
                .clone_with_labels(&[(REASON, error.reason.name())])
        )
        .increment(1);
    }
}

impl Default for RutMetrics {
    fn default() -> Self {
        RutMetrics::new(&Labels::empty())
    }
}
