#![allow(clippy::unwrap_used, clippy::expect_used)]

use domain_audit_core::errors::{AuditError, DecodeStage};
use domain_audit_core::logging_facility::test_capture::init_test_capture;
use domain_audit_core::schema::{EVENT_END, EVENT_END_ERROR, EVENT_START};
use domain_audit_core::{log_op_end, log_op_error, log_op_start};
use tracing::Level;

#[test]
fn test_log_op_start_macro() {
    let capture = init_test_capture();
    let op_name = "test_log_op_start_unique_1";

    log_op_start!(op_name, domain_id = "d-start");

    let events = capture.events_for(op_name, Some(EVENT_START));
    assert_eq!(events.len(), 1, "Should have exactly one start event");
    assert_eq!(events[0].field("domain_id"), Some("d-start"));
    assert_eq!(events[0].level, Level::INFO);
}

#[test]
fn test_log_op_end_macro_records_duration() {
    let capture = init_test_capture();
    let op_name = "test_log_op_end_unique_2";

    log_op_end!(op_name, duration_ms = 42, num_events = 3);

    let events = capture.events_for(op_name, Some(EVENT_END));
    assert_eq!(events.len(), 1, "Should have exactly one end event");
    assert_eq!(events[0].field("duration_ms"), Some("42"));
    assert_eq!(events[0].field("num_events"), Some("3"));
}

#[test]
fn test_log_op_error_includes_kind_and_code() {
    let capture = init_test_capture();
    let op_name = "test_log_op_error_unique_3";

    let err = AuditError::Decode {
        stage: DecodeStage::Decompress,
        message: "corrupt input".to_string(),
    };
    log_op_error!(op_name, err, duration_ms = 10);

    let events = capture.events_for(op_name, Some(EVENT_END_ERROR));
    assert_eq!(events.len(), 1, "Should have exactly one error event");

    let event = &events[0];
    assert_eq!(event.level, Level::ERROR);
    assert_eq!(event.field("err_code"), Some("ERR_DECODE"));
    assert_eq!(event.field("err_kind"), Some("Decode"));
    assert!(event.field("error").unwrap().contains("corrupt input"));
}

#[test]
fn test_boundary_single_start_end_pair() {
    let capture = init_test_capture();
    let op_name = "test_boundary_pair_unique_4";

    log_op_start!(op_name, domain_id = "d-pair");
    log_op_end!(op_name, duration_ms = 1);

    let starts = capture.count_events(|e| {
        e.op.as_deref() == Some(op_name) && e.event.as_deref() == Some(EVENT_START)
    });
    let ends = capture.count_events(|e| {
        e.op.as_deref() == Some(op_name) && e.event.as_deref() == Some(EVENT_END)
    });
    assert_eq!(starts, 1);
    assert_eq!(ends, 1);
}

#[test]
fn test_component_is_module_path() {
    let capture = init_test_capture();
    let op_name = "test_component_unique_5";

    log_op_start!(op_name);

    let events = capture.events_for(op_name, Some(EVENT_START));
    assert_eq!(
        events[0].component.as_deref(),
        Some("logging_facility_tests")
    );
}
