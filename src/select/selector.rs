//! Directory selection and sorting.

use tracing::debug;

use crate::common::{Config, FileMap, FileRecord, Value};
use crate::select::compare::compare_sort_keys;
use crate::util::get_nested_property;
use crate::LOG_TARGET;

/// A selected file: its key in the file map plus a snapshot of its record.
///
/// The snapshot is taken before any page is materialized, so relocations
/// always copy the record as it was when the run started.
#[derive(Debug, Clone, PartialEq)]
pub struct PageEntry {
    pub path: String,
    pub record: FileRecord,
}

impl PageEntry {
    pub fn new(path: impl Into<String>, record: FileRecord) -> Self {
        Self {
            path: path.into(),
            record,
        }
    }

    /// Value of `field_path` for this file.
    ///
    /// Fields come from the record; a record with no `path` field of its own
    /// resolves `path` to the file's key.
    pub fn field(&self, field_path: &str) -> Option<Value> {
        get_nested_property(self.record.fields(), field_path)
            .cloned()
            .or_else(|| (field_path == "path").then(|| Value::from(self.path.as_str())))
    }
}

/// Collect every file under `<directory>/` and sort it by `sort_by`.
///
/// Returns an empty vector when nothing matches; callers treat that as a
/// no-op. The sort is stable, so files with equal or both-absent keys keep
/// their file-map order.
///
/// # Example
/// ```
/// use simple_pagination::{Config, FileMap, FileRecord};
/// use simple_pagination::select::select_files;
///
/// let files: FileMap = vec![
///     ("blog/a.md", FileRecord::new().with_field("weight", 2i64)),
///     ("blog/b.md", FileRecord::new().with_field("weight", 1i64)),
///     ("about.md", FileRecord::new()),
/// ]
/// .into_iter()
/// .collect();
///
/// let config = Config::default().with_sort_by("weight").with_reverse(false);
/// let selected = select_files(&files, &config);
/// let paths: Vec<_> = selected.iter().map(|e| e.path.as_str()).collect();
/// assert_eq!(paths, vec!["blog/b.md", "blog/a.md"]);
/// ```
pub fn select_files(files: &FileMap, config: &Config) -> Vec<PageEntry> {
    let prefix = format!("{}/", config.directory);

    let mut keyed: Vec<(Option<Value>, PageEntry)> = files
        .iter()
        .filter(|(path, _)| path.starts_with(&prefix))
        .map(|(path, record)| {
            let entry = PageEntry::new(path.clone(), record.clone());
            (entry.field(&config.sort_by), entry)
        })
        .collect();

    debug!(
        target: LOG_TARGET,
        "Found {} files in directory {}",
        keyed.len(),
        config.directory
    );
    if keyed.is_empty() {
        return Vec::new();
    }

    keyed.sort_by(|(a, _), (b, _)| compare_sort_keys(a.as_ref(), b.as_ref(), config.reverse));
    debug!(
        target: LOG_TARGET,
        "Files sorted by {} in {} order",
        config.sort_by,
        if config.reverse { "descending" } else { "ascending" }
    );

    keyed.into_iter().map(|(_, entry)| entry).collect()
}
