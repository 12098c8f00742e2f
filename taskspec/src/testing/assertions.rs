//! Test assertions for validation outcomes.

use crate::errors::{quote, FieldError, FieldErrorKind};

/// Asserts that the outcome is a success.
pub fn assert_valid(outcome: &Result<(), FieldError>) {
    assert!(
        outcome.is_ok(),
        "Expected validation to pass, got: {:?}",
        outcome
    );
}

fn expect_error<'a>(outcome: &'a Result<(), FieldError>, kind: FieldErrorKind) -> &'a FieldError {
    match outcome {
        Ok(()) => panic!("Expected a {kind} error, but validation passed"),
        Err(err) => {
            assert_eq!(
                err.kind, kind,
                "Expected a {:?} error, got {:?}: {}",
                kind, err.kind, err
            );
            err
        }
    }
}

/// Asserts that the outcome rejects `value` as a key name on `path`.
pub fn assert_invalid_key_name(outcome: &Result<(), FieldError>, path: &str, value: &str) {
    let err = expect_error(outcome, FieldErrorKind::InvalidKeyName);
    assert_eq!(err.paths, vec![path.to_string()], "Unexpected paths for {err}");
    assert_eq!(
        err.message,
        format!("invalid key name {}", quote(value)),
        "Expected rejected value {value:?} to be echoed"
    );
}

/// Asserts that the outcome rejects `value` on `path`.
pub fn assert_invalid_value(outcome: &Result<(), FieldError>, path: &str, value: &str) {
    let err = expect_error(outcome, FieldErrorKind::InvalidValue);
    assert_eq!(err.paths, vec![path.to_string()], "Unexpected paths for {err}");
    assert_eq!(
        err.message,
        format!("invalid value: {value}"),
        "Expected rejected value {value:?} to be echoed"
    );
}

/// Asserts that the outcome is a gating error for `feature`.
pub fn assert_feature_disabled(outcome: &Result<(), FieldError>, feature: &str) {
    let err = expect_error(outcome, FieldErrorKind::FeatureDisabled);
    assert!(
        err.message.starts_with(&format!("{feature} requires")),
        "Expected gating error for '{feature}', got: {err}"
    );
}
