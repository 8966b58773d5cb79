//! Per-file summaries and the `pagination` record.

use chrono::{DateTime, Utc};

use crate::common::{AddressingStyle, Metadata, Value, CONTENTS_FIELD};
use crate::select::PageEntry;
use crate::util::{public_file_url, PaginationUrls};

/// Content-free snapshot of a paginated file.
///
/// Carries every field of the record except `contents`, plus `path` set to
/// the file's public URL.
#[derive(Debug, Clone, PartialEq)]
pub struct FileDetail {
    pub path: String,
    pub fields: Metadata,
}

/// Build the [`FileDetail`] for `entry` now living at `new_path`.
///
/// # Example
/// ```
/// use simple_pagination::{AddressingStyle, FileRecord};
/// use simple_pagination::page::create_file_details;
/// use simple_pagination::select::PageEntry;
///
/// let entry = PageEntry::new(
///     "blog/post1.md",
///     FileRecord::new().with_field("title", "Post 1").with_contents(b"# Post 1".to_vec()),
/// );
/// let detail = create_file_details(&entry, "blog/post1/index.md", AddressingStyle::Permalink);
/// assert_eq!(detail.path, "/blog/post1/");
/// assert!(!detail.fields.contains_key("contents"));
/// ```
pub fn create_file_details(entry: &PageEntry, new_path: &str, style: AddressingStyle) -> FileDetail {
    let mut fields = entry.record.fields().clone();
    fields.remove(CONTENTS_FIELD);

    FileDetail {
        path: public_file_url(new_path, style),
        fields,
    }
}

impl From<FileDetail> for Value {
    fn from(detail: FileDetail) -> Self {
        let mut fields = detail.fields;
        fields.insert("path".to_string(), Value::String(detail.path));
        Value::Map(fields)
    }
}

/// Pagination metadata attached to an index record.
///
/// Field names follow the shape templates written for the common
/// `pagination` plugin expect.
#[derive(Debug, Clone, PartialEq)]
pub struct PaginationMetadata {
    /// The paginated directory.
    pub name: String,
    /// Current page (1-based).
    pub num: usize,
    /// Page count; emitted as both `pages` and `total`.
    pub pages: usize,
    pub files: Vec<FileDetail>,
    pub next: Option<String>,
    pub previous: Option<String>,
    pub first: String,
    pub last: String,
    pub use_permalinks: bool,
}

impl PaginationMetadata {
    pub fn new(
        directory: &str,
        num: usize,
        pages: usize,
        files: Vec<FileDetail>,
        urls: PaginationUrls,
        style: AddressingStyle,
    ) -> Self {
        Self {
            name: directory.to_string(),
            num,
            pages,
            files,
            next: urls.next,
            previous: urls.previous,
            first: urls.first,
            last: urls.last,
            use_permalinks: style.is_permalink(),
        }
    }
}

impl From<PaginationMetadata> for Value {
    fn from(meta: PaginationMetadata) -> Self {
        let mut map = Metadata::new();
        map.insert("name".to_string(), Value::String(meta.name));
        map.insert("num".to_string(), Value::from(meta.num));
        map.insert("total".to_string(), Value::from(meta.pages));
        map.insert("pages".to_string(), Value::from(meta.pages));
        map.insert("files".to_string(), Value::from(meta.files));
        map.insert("next".to_string(), Value::from(meta.next));
        map.insert("previous".to_string(), Value::from(meta.previous));
        map.insert("first".to_string(), Value::String(meta.first));
        map.insert("last".to_string(), Value::String(meta.last));
        map.insert("usePermalinks".to_string(), Value::Bool(meta.use_permalinks));
        Value::Map(map)
    }
}

/// Placeholder file stats for a generated record, all set to `now`.
pub fn file_stats(now: DateTime<Utc>) -> Value {
    let mut stats = Metadata::new();
    for key in ["atime", "mtime", "ctime", "birthtime"] {
        stats.insert(key.to_string(), Value::Date(now));
    }
    Value::Map(stats)
}
