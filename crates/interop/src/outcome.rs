//! Operations that may fail with a diagnosable cause.

use std::panic::{self, AssertUnwindSafe};

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::{CaughtPanic, ParseError};

/// Parse `text` as JSON.
///
/// Any JSON shape is accepted (object, array, string, number, boolean, null).
/// Malformed input yields `Err(ParseError)`; this never panics.
pub fn parse(text: &str) -> Result<Value, ParseError> {
    parse_as(text)
}

/// Parse `text` as JSON and decode it into `T`.
///
/// Shape mismatches are reported the same way as syntax errors, with
/// [`ParseErrorKind::Data`](crate::error::ParseErrorKind::Data).
pub fn parse_as<T: DeserializeOwned>(text: &str) -> Result<T, ParseError> {
    serde_json::from_str(text).map_err(|err| {
        let error = ParseError::from(err);
        tracing::debug!(
            kind = ?error.kind,
            line = error.line,
            column = error.column,
            "captured parse failure: {}",
            error.message
        );
        error
    })
}

/// Run `thunk`, converting a panic into `Err(on_panic(caught))`.
///
/// State captured by `thunk` may be left partially updated when it panics.
/// The process panic hook still runs before the panic is caught.
pub fn try_catch<T, E>(
    thunk: impl FnOnce() -> T,
    on_panic: impl FnOnce(CaughtPanic) -> E,
) -> Result<T, E> {
    panic::catch_unwind(AssertUnwindSafe(thunk)).map_err(|payload| {
        let caught = CaughtPanic::from_payload(payload);
        tracing::debug!(message = %caught.message, "captured panic");
        on_panic(caught)
    })
}

/// The success payload, or the result of `default` on failure.
///
/// `default` is invoked only for `Err`, exactly once.
pub fn get_or_else<T, E>(outcome: Result<T, E>, default: impl FnOnce() -> T) -> T {
    match outcome {
        Ok(value) => value,
        Err(_) => default(),
    }
}

/// Curried [`get_or_else`]: fix the default once, apply to many outcomes.
pub fn get_or_else_with<T, E>(default: impl Fn() -> T) -> impl Fn(Result<T, E>) -> T {
    move |outcome| get_or_else(outcome, &default)
}

/// Build a handler that dispatches on a `Result`, invoking exactly one branch.
pub fn match_result<T, E, R>(
    on_err: impl Fn(E) -> R,
    on_ok: impl Fn(T) -> R,
) -> impl Fn(Result<T, E>) -> R {
    move |outcome| match outcome {
        Ok(value) => on_ok(value),
        Err(err) => on_err(err),
    }
}
