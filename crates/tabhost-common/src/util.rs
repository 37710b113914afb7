//! Small helpers shared by the control plane.

use std::time::Duration;

use crate::errors::CommonError;

const DEFAULT_NULL_MESSAGE: &str = "Value cannot be null";

/// Unwrap `value` or fail the calling operation with `message`.
///
/// This guards programmer invariants, so unlike control-plane misses the
/// failure is surfaced to the caller.
pub fn assert_not_null<T>(value: Option<T>, message: &str) -> Result<T, CommonError> {
    value.ok_or_else(|| CommonError::NullValue(message.to_string()))
}

/// [`assert_not_null`] with the default message.
pub fn require<T>(value: Option<T>) -> Result<T, CommonError> {
    assert_not_null(value, DEFAULT_NULL_MESSAGE)
}

/// Suspend the current task for `ms` milliseconds.
///
/// Not cancellable on its own; wrap it in `tokio::select!` or
/// `tokio::time::timeout` when the caller needs to abandon the wait.
pub async fn sleep(ms: u64) {
    tokio::time::sleep(Duration::from_millis(ms)).await;
}
