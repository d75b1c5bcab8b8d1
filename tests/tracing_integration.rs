//! Integration tests for predicate instrumentation

use stillcheck::predicate::*;
use stillcheck::{and, Value};

fn init_subscriber() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_test_writer()
        .try_init();
}

#[test]
fn test_instrumented_predicate_keeps_semantics() {
    init_subscriber();

    let p = and![
        float().instrument(tracing::info_span!("kind")),
        negative().instrument(tracing::info_span!("sign")),
    ];
    assert!(p.check(&Value::from(-0.1)).unwrap());
    assert!(!p.check(&Value::from(-1)).unwrap());
    assert!(!p.check(&Value::from(0.1)).unwrap());
}

#[test]
fn test_instrumented_error_propagates() {
    init_subscriber();

    let p = even().instrument(tracing::debug_span!("parity", field = "count"));
    assert!(p.check(&Value::from(1.5)).is_err());
    assert!(p.check(&Value::from(4)).unwrap());
}
