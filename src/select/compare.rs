//! Total ordering over metadata values.
//!
//! Numbers and dates share one numeric axis (dates compare by epoch
//! milliseconds), strings compare lexicographically, booleans `false < true`.
//! Null sorts below every other value. Values of unrelated kinds never fail
//! to compare: they are ordered by kind so the comparator stays a total order
//! for `sort_by`.

use std::cmp::Ordering;

use crate::common::Value;

fn kind_rank(value: &Value) -> u8 {
    match value {
        Value::Null => 0,
        Value::Bool(_) => 1,
        Value::Number(_) | Value::Date(_) => 2,
        Value::String(_) => 3,
        Value::Bytes(_) => 4,
        Value::Array(_) => 5,
        Value::Map(_) => 6,
    }
}

fn numeric(value: &Value) -> f64 {
    match value {
        Value::Number(n) => *n,
        Value::Date(d) => d.timestamp_millis() as f64,
        _ => f64::NAN,
    }
}

/// Compare two present values.
pub fn compare_values(a: &Value, b: &Value) -> Ordering {
    match (a, b) {
        (Value::Bool(x), Value::Bool(y)) => x.cmp(y),
        (Value::Number(_) | Value::Date(_), Value::Number(_) | Value::Date(_)) => {
            numeric(a).total_cmp(&numeric(b))
        }
        (Value::String(x), Value::String(y)) => x.cmp(y),
        (Value::Bytes(x), Value::Bytes(y)) => x.cmp(y),
        (Value::Array(x), Value::Array(y)) => x
            .iter()
            .zip(y.iter())
            .map(|(l, r)| compare_values(l, r))
            .find(|ord| ord.is_ne())
            .unwrap_or_else(|| x.len().cmp(&y.len())),
        (Value::Map(_), Value::Map(_)) | (Value::Null, Value::Null) => Ordering::Equal,
        _ => kind_rank(a).cmp(&kind_rank(b)),
    }
}

/// Compare two sort keys where `None` means the field is absent.
///
/// Ascending order puts absent keys last. `reverse` flips every outcome,
/// absent keys included, so they come first in descending order. Equal keys
/// stay equal in both directions.
pub fn compare_sort_keys(a: Option<&Value>, b: Option<&Value>, reverse: bool) -> Ordering {
    let ascending = match (a, b) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Greater,
        (Some(_), None) => Ordering::Less,
        (Some(x), Some(y)) => compare_values(x, y),
    };

    if reverse {
        ascending.reverse()
    } else {
        ascending
    }
}
