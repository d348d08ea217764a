use crate::observability::labels::Labels;
use crate::processor::config::RutConfig;
use crate::{CheckDigit, ProcessingErrorReason};
use metrics::{Key, Label, SharedString, Unit};
use metrics_util::debugging::{DebugValue, DebuggingRecorder};
use metrics_util::CompositeKey;
use metrics_util::MetricKind::Counter;
use std::collections::HashMap;

type Snapshot = HashMap<CompositeKey, (Option<Unit>, Option<SharedString>, DebugValue)>;

fn counter_value(snapshot: &Snapshot, name: &'static str, labels: Vec<Label>) -> u64 {
    let key = CompositeKey::new(Counter, Key::from_parts(name, labels));
    match snapshot.get(&key).expect("metric not found") {
        (_, _, DebugValue::Counter(value)) => *value,
        _ => panic!("{name} is not a counter"),
    }
}

#[test]
fn should_submit_validation_metrics() {
    let recorder = DebuggingRecorder::new();
    let snapshotter = recorder.snapshotter();

    metrics::with_local_recorder(&recorder, || {
        let processor = RutConfig::new().build();
        assert!(processor.is_valid("17317684-8"));
        assert!(processor.is_valid("12.450.547-k"));
        assert!(!processor.is_valid("17317684-2"));
        assert!(!processor.is_valid(None));
    });

    let snapshot = snapshotter.snapshot().into_hashmap();
    assert_eq!(
        counter_value(
            &snapshot,
            "rut.validations",
            vec![Label::new("result", "valid")]
        ),
        2
    );
    assert_eq!(
        counter_value(
            &snapshot,
            "rut.validations",
            vec![Label::new("result", "invalid")]
        ),
        2
    );
}

#[test]
fn should_submit_format_and_error_metrics() {
    let recorder = DebuggingRecorder::new();
    let snapshotter = recorder.snapshotter();

    metrics::with_local_recorder(&recorder, || {
        let processor = RutConfig::new().build();
        assert_eq!(processor.format("173176848").unwrap(), "17.317.684-8");
        assert_eq!(processor.clean("17.317.684-8").unwrap(), "173176848");
        assert_eq!(
            processor.format("24752955-2").unwrap_err().reason,
            ProcessingErrorReason::InvalidRut
        );
        assert_eq!(
            processor.clean("*").unwrap_err().reason,
            ProcessingErrorReason::InvalidFormat
        );
        assert_eq!(
            processor.get_verification_digit("10065654").unwrap(),
            CheckDigit::K
        );
        assert!(processor.get_verification_digit("2k").is_err());
    });

    let snapshot = snapshotter.snapshot().into_hashmap();
    assert_eq!(
        counter_value(
            &snapshot,
            "rut.formatted",
            vec![Label::new("style", "grouped")]
        ),
        1
    );
    assert_eq!(
        counter_value(
            &snapshot,
            "rut.formatted",
            vec![Label::new("style", "compact")]
        ),
        1
    );
    assert_eq!(
        counter_value(&snapshot, "rut.verification_digits", vec![]),
        1
    );
    for reason in ["invalid_rut", "invalid_format", "only_numbers"] {
        assert_eq!(
            counter_value(
                &snapshot,
                "rut.processing_errors",
                vec![Label::new("reason", reason)]
            ),
            1
        );
    }
}

#[test]
fn should_add_configured_labels() {
    let recorder = DebuggingRecorder::new();
    let snapshotter = recorder.snapshotter();

    metrics::with_local_recorder(&recorder, || {
        let processor = RutConfig::new()
            .labels(Labels::new(&[("team", "billing")]))
            .build();
        assert!(processor.is_valid("6.141.076-7"));
    });

    let snapshot = snapshotter.snapshot().into_hashmap();
    assert_eq!(
        counter_value(
            &snapshot,
            "rut.validations",
            vec![
                Label::new("result", "valid"),
                Label::new("team", "billing")
            ]
        ),
        1
    );
}

#[test]
fn should_skip_validation_when_configured() {
    let processor = RutConfig::new().validate(false).build();
    assert_eq!(processor.format("17317684-2").unwrap(), "17.317.684-2");
    assert_eq!(processor.clean("17.317.684-2").unwrap(), "173176842");

    let processor = RutConfig::new().build();
    assert!(processor.format("17317684-2").is_err());
    assert!(processor.clean("17.317.684-2").is_err());
}

#[test]
fn should_parse_with_metrics() {
    let recorder = DebuggingRecorder::new();
    let snapshotter = recorder.snapshotter();

    metrics::with_local_recorder(&recorder, || {
        // parsing verifies the checksum even if the processor doesn't
        let processor = RutConfig::new().validate(false).build();
        assert_eq!(
            processor.parse("5.440.241-4").unwrap().to_string(),
            "5.440.241-4"
        );
        assert!(processor.parse("5.440.241-2").is_err());
    });

    let snapshot = snapshotter.snapshot().into_hashmap();
    assert_eq!(
        counter_value(
            &snapshot,
            "rut.processing_errors",
            vec![Label::new("reason", "invalid_rut")]
        ),
        1
    );
}
