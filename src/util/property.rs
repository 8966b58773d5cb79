//! Dot-path field lookup.

use crate::common::{Metadata, Value};

/// Resolve a dot-separated field path such as `meta.date` against a record.
///
/// Map segments are looked up by key and array segments by index. Returns
/// `None` when the path is empty, when any segment is missing, or when an
/// intermediate value (null included) cannot be descended into. A field
/// that exists and holds null resolves to `Value::Null`. Never panics.
///
/// # Example
/// ```
/// use simple_pagination::{FileRecord, Metadata, Value};
/// use simple_pagination::util::get_nested_property;
///
/// let mut meta = Metadata::new();
/// meta.insert("date".to_string(), Value::from("2022-01-01"));
/// let record = FileRecord::new().with_field("meta", Value::Map(meta));
///
/// let found = get_nested_property(record.fields(), "meta.date");
/// assert_eq!(found.and_then(Value::as_str), Some("2022-01-01"));
/// assert!(get_nested_property(record.fields(), "meta.missing.deeper").is_none());
/// ```
pub fn get_nested_property<'a>(fields: &'a Metadata, path: &str) -> Option<&'a Value> {
    if path.is_empty() {
        return None;
    }

    let mut parts = path.split('.');
    let mut current = fields.get(parts.next()?)?;

    for part in parts {
        current = match current {
            Value::Map(map) => map.get(part)?,
            Value::Array(items) => part.parse::<usize>().ok().and_then(|i| items.get(i))?,
            _ => return None,
        };
    }

    Some(current)
}
