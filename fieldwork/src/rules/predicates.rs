//! Pure predicates used by the built-in rule builders.
//!
//! All functions here are stateless and side-effect free. The length
//! bounds are exclusive: `min_length(n)` passes only for lengths strictly
//! greater than `n`, `max_length(n)` only for lengths strictly less than
//! `n`. Callers wanting an inclusive bound offset `n` by one; existing
//! call sites rely on the exclusive behavior, so it must not change.

use email_address::EmailAddress;

use crate::value::{HasLength, Value};

/// Value is present: not [`Value::Unset`] and not the empty string
pub fn populated(value: &Value) -> bool {
    match value {
        Value::Unset => false,
        Value::Str(s) => !s.is_empty(),
        _ => true,
    }
}

/// Text parses under the RFC 5322 email grammar. The empty string is
/// invalid; pair with a populated rule only when a separate "required"
/// message is wanted.
pub fn email(value: &str) -> bool {
    EmailAddress::is_valid(value)
}

/// Value is exactly `true`
pub fn true_only(value: &Value) -> bool {
    matches!(value, Value::Bool(true))
}

/// Value is a boolean, either `true` or `false`
pub fn boolean(value: &Value) -> bool {
    matches!(value, Value::Bool(_))
}

/// Value is a string
pub fn string_typed(value: &Value) -> bool {
    matches!(value, Value::Str(_))
}

/// Value is a number, or a string whose trimmed text parses as one
pub fn number(value: &Value) -> bool {
    match value {
        Value::Int(_) | Value::Float(_) => true,
        Value::Str(s) => {
            let s = s.trim();
            !s.is_empty() && s.parse::<f64>().is_ok()
        }
        _ => false,
    }
}

/// Value is a number primitive; numeric strings do not count
pub fn number_primitive(value: &Value) -> bool {
    matches!(value, Value::Int(_) | Value::Float(_))
}

/// Length is strictly greater than `n`. Values without a length fail.
pub fn min_length<V: HasLength>(n: usize) -> impl Fn(&V) -> bool {
    move |value| value.length().is_some_and(|len| len > n)
}

/// Length is strictly less than `n`. Values without a length fail.
pub fn max_length<V: HasLength>(n: usize) -> impl Fn(&V) -> bool {
    move |value| value.length().is_some_and(|len| len < n)
}
