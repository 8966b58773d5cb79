//! Representative dates for index pages.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

use crate::common::{MissingDate, Value};
use crate::select::PageEntry;

/// Naive formats tried after RFC 3339 and RFC 2822. Read as UTC.
const NAIVE_DATETIME_FORMATS: [&str; 6] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
    "%Y/%m/%d %H:%M:%S",
    "%B %d, %Y %H:%M:%S",
];

/// Date-only formats, read as midnight UTC. `%B` also accepts short month names.
const NAIVE_DATE_FORMATS: [&str; 4] = ["%Y-%m-%d", "%Y/%m/%d", "%B %d, %Y", "%d %B %Y"];

/// Interpret a value as a date.
///
/// Dates pass through. Strings are parsed as RFC 3339, RFC 2822, a naive
/// date-time, or a bare date such as `2022-01-05`, `2022/01/05`,
/// `January 5, 2022` or `5 Jan 2022` (midnight UTC). Anything else is `None`.
///
/// # Example
/// ```
/// use simple_pagination::Value;
/// use simple_pagination::page::parse_date;
///
/// let parsed = parse_date(&Value::from("2022-01-03")).unwrap();
/// assert_eq!(parsed.to_rfc3339(), "2022-01-03T00:00:00+00:00");
/// assert!(parse_date(&Value::from("next tuesday")).is_none());
/// ```
pub fn parse_date(value: &Value) -> Option<DateTime<Utc>> {
    match value {
        Value::Date(date) => Some(*date),
        Value::String(s) => parse_date_str(s.trim()),
        _ => None,
    }
}

fn parse_date_str(s: &str) -> Option<DateTime<Utc>> {
    if s.is_empty() {
        return None;
    }

    if let Ok(date) = DateTime::parse_from_rfc3339(s) {
        return Some(date.with_timezone(&Utc));
    }
    if let Ok(date) = DateTime::parse_from_rfc2822(s) {
        return Some(date.with_timezone(&Utc));
    }

    NAIVE_DATETIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
        .or_else(|| {
            NAIVE_DATE_FORMATS
                .iter()
                .find_map(|fmt| NaiveDate::parse_from_str(s, fmt).ok())
                .and_then(|d| d.and_hms_opt(0, 0, 0))
        })
        .map(|naive| naive.and_utc())
}

/// First date found under `sort_by`, scanning entries in page order.
///
/// Entries are already sorted, so with the default descending sort this is
/// the most recent date on the page.
pub fn find_most_recent_date(entries: &[PageEntry], sort_by: &str) -> Option<DateTime<Utc>> {
    entries
        .iter()
        .find_map(|entry| entry.field(sort_by).as_ref().and_then(parse_date))
}

/// Date for a page's index record under the configured fallback.
pub fn representative_date(
    entries: &[PageEntry],
    sort_by: &str,
    missing: MissingDate,
    now: DateTime<Utc>,
) -> Option<DateTime<Utc>> {
    match (find_most_recent_date(entries, sort_by), missing) {
        (Some(found), _) => Some(found),
        (None, MissingDate::Now) => Some(now),
        (None, MissingDate::None) => None,
    }
}
