//! Integration tests for checking deserialized documents

use serde::Deserialize;
use stillcheck::predicate::*;
use stillcheck::{and, Value};

#[derive(Debug, Deserialize)]
struct Submission {
    form: String,
    payload: Value,
}

#[test]
fn test_validate_json_document() {
    let doc: Value = serde_json::from_str(
        r#"{
            "id": 42,
            "email": "ada@example.com",
            "scores": [0.5, 0.75, 1.0],
            "nickname": null
        }"#,
    )
    .unwrap();

    let schema = and![
        at("id", integer().and(positive())),
        at("email", pattern(r"[^@\s]+@[^@\s]+\.[a-z]+").unwrap()),
        at("scores", every(float().and(range(0, 1).unwrap()))),
        at("nickname", opt(string())),
    ];
    assert!(schema.check(&doc).unwrap());
}

#[test]
fn test_numeric_object_keys_address_indices() {
    let doc: Value = serde_json::from_str(r#"{"0": "zero", "1": 1}"#).unwrap();
    assert!(at(1, integer()).check(&doc).unwrap());
    assert!(at("0", exact("zero")).check(&doc).unwrap());
}

#[test]
fn test_round_trip_preserves_order() {
    let text = r#"{"b":1,"a":[true,null,"x"]}"#;
    let doc: Value = serde_json::from_str(text).unwrap();
    assert_eq!(serde_json::to_string(&doc).unwrap(), text);
}

#[test]
fn test_value_field_of_derived_struct() {
    let submission: Submission = serde_json::from_str(
        r#"{"form": "signup", "payload": {"age": 30, "tags": ["new", "beta"]}}"#,
    )
    .unwrap();
    assert_eq!(submission.form, "signup");

    let payload = and![
        at("age", integer().and(range(18, 120).unwrap())),
        at("tags", every(lowercase())),
    ];
    assert!(payload.check(&submission.payload).unwrap());
    assert!(!at("age", odd()).check(&submission.payload).unwrap());
}
