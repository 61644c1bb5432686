//! Guard functions for validating arguments at the top of a routine.
//!
//! Every check either hands the validated value back unchanged or fails with
//! [`RequireError::InvalidArgument`]. Absent values are modelled as `None`.

use std::fmt::Display;

use crate::empty::IsEmpty;
use crate::error::{RequireError, Result};

const CANNOT_BE_NULL: &str = "Cannot be null";
const CANNOT_BE_EMPTY: &str = "Cannot be empty";
const CANNOT_BE_BLANK: &str = "Cannot be blank";

/// Returns the value if present.
pub fn not_null<T>(value: Option<T>) -> Result<T> {
    value.ok_or_else(|| invalid_argument(CANNOT_BE_NULL))
}

/// Returns the value if present; `name` is appended to the error message.
pub fn not_null_named<T>(value: Option<T>, name: &str) -> Result<T> {
    value.ok_or_else(|| invalid_argument_named(CANNOT_BE_NULL, name))
}

/// Returns the value if present and non-empty.
///
/// Works for strings, slices, fixed-size arrays and the std collections via
/// the [`IsEmpty`] trait.
pub fn not_empty<T: IsEmpty>(value: Option<T>) -> Result<T> {
    match value {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(invalid_argument(CANNOT_BE_EMPTY)),
    }
}

/// Returns the value if present and non-empty; `name` is appended to the
/// error message.
pub fn not_empty_named<T: IsEmpty>(value: Option<T>, name: &str) -> Result<T> {
    match value {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(invalid_argument_named(CANNOT_BE_EMPTY, name)),
    }
}

/// Returns the string if present and not whitespace-only.
pub fn not_blank<S: AsRef<str>>(value: Option<S>) -> Result<S> {
    match value {
        Some(s) if !s.as_ref().trim().is_empty() => Ok(s),
        _ => Err(invalid_argument(CANNOT_BE_BLANK)),
    }
}

/// Returns the string if present and not whitespace-only; `name` is appended
/// to the error message.
pub fn not_blank_named<S: AsRef<str>>(value: Option<S>, name: &str) -> Result<S> {
    match value {
        Some(s) if !s.as_ref().trim().is_empty() => Ok(s),
        _ => Err(invalid_argument_named(CANNOT_BE_BLANK, name)),
    }
}

/// Returns the value if it lies within `[min, max]` (inclusive).
pub fn in_range<T: PartialOrd + Display + Copy>(value: T, min: T, max: T) -> Result<T> {
    if value < min || value > max {
        return Err(invalid_argument(&range_message(min, max)));
    }
    Ok(value)
}

/// Returns the value if it lies within `[min, max]` (inclusive); `name` is
/// appended to the error message.
pub fn in_range_named<T: PartialOrd + Display + Copy>(
    value: T,
    min: T,
    max: T,
    name: &str,
) -> Result<T> {
    if value < min || value > max {
        return Err(invalid_argument_named(&range_message(min, max), name));
    }
    Ok(value)
}

/// Requires the condition to hold; fails with `msg` verbatim otherwise.
pub fn verify(condition: bool, msg: &str) -> Result<()> {
    if !condition {
        return Err(invalid_argument(msg));
    }
    Ok(())
}

/// Requires the lazily produced condition to hold; fails with `msg` verbatim
/// otherwise.
///
/// The producer is evaluated exactly once. It may yield a plain `bool` or an
/// `Option<bool>`, in which case `None` counts as a failed condition.
pub fn verify_with<R, F>(producer: F, msg: &str) -> Result<()>
where
    R: Into<Option<bool>>,
    F: FnOnce() -> R,
{
    match producer().into() {
        Some(true) => Ok(()),
        _ => Err(invalid_argument(msg)),
    }
}

/// True if the value is absent or contains nothing. Never fails.
pub fn is_empty<T: IsEmpty>(value: Option<T>) -> bool {
    match value {
        Some(v) => v.is_empty(),
        None => true,
    }
}

fn range_message<T: Display>(min: T, max: T) -> String {
    format!("Must be between {} and {}", min, max)
}

fn invalid_argument(message: &str) -> RequireError {
    tracing::debug!("Argument check failed: {}", message);
    RequireError::invalid_argument(message)
}

fn invalid_argument_named(message: &str, name: &str) -> RequireError {
    tracing::debug!("Argument check failed: {}: {}", message, name);
    RequireError::invalid_argument(format!("{}: {}", message, name))
}
