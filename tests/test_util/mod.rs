//! Shared helpers for integration tests.
//!
//! These wrap the common "parse, then inspect the error" pattern so the
//! individual test tables stay short.

#![expect(
    dead_code,
    reason = "helpers are reused across multiple tests so some may be unused"
)]

use objident::{ErrorKind, IdentifierError};

/// Assert that `result` failed with an error of `kind` and return the error.
///
/// # Panics
/// Panics if `result` is `Ok` or the error kind differs.
#[track_caller]
pub fn assert_error_kind<T: std::fmt::Debug>(
    result: Result<T, IdentifierError>,
    kind: ErrorKind,
) -> IdentifierError {
    match result {
        Ok(value) => panic!("expected {kind:?} error, parsed {value:?}"),
        Err(err) => {
            assert_eq!(err.kind(), kind, "unexpected error: {err}");
            err
        }
    }
}

/// Assert that the rendered error contains `fragment`.
///
/// # Panics
/// Panics if the message does not contain `fragment`.
#[track_caller]
pub fn assert_message_contains(err: &IdentifierError, fragment: &str) {
    let rendered = err.to_string();
    assert!(
        rendered.contains(fragment),
        "expected error to contain '{fragment}', got '{rendered}'"
    );
}

/// Unwrap a parse result, panicking with the rendered error.
///
/// # Panics
/// Panics if `result` is `Err`.
#[track_caller]
pub fn parsed<T>(result: Result<T, IdentifierError>) -> T {
    result.unwrap_or_else(|e| panic!("parse failed: {e}"))
}
