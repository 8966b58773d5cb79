//! File records and the file map shared with the host pipeline.

use std::collections::btree_map;
use std::collections::BTreeMap;

use serde::Serialize;

use crate::common::value::{Metadata, Value};

/// Field holding a file's raw bytes.
pub const CONTENTS_FIELD: &str = "contents";

/// One file's metadata fields, including its `contents` buffer.
///
/// # Example
/// ```
/// use simple_pagination::FileRecord;
///
/// let record = FileRecord::new()
///     .with_field("title", "Post 1")
///     .with_contents(b"# Post 1".to_vec());
/// assert_eq!(record.get("title").and_then(|v| v.as_str()), Some("Post 1"));
/// assert_eq!(record.contents(), Some(&b"# Post 1"[..]));
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(transparent)]
pub struct FileRecord {
    fields: Metadata,
}

impl FileRecord {
    /// Create an empty record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style field insert.
    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(key, value);
        self
    }

    /// Builder-style contents insert.
    pub fn with_contents(mut self, contents: Vec<u8>) -> Self {
        self.fields.insert(CONTENTS_FIELD.to_string(), Value::Bytes(contents));
        self
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    pub fn get_mut(&mut self, key: &str) -> Option<&mut Value> {
        self.fields.get_mut(key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.fields.contains_key(key)
    }

    /// Set a field, returning the previous value.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.fields.insert(key.into(), value.into())
    }

    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.fields.remove(key)
    }

    /// Raw contents, if the record carries a byte buffer.
    pub fn contents(&self) -> Option<&[u8]> {
        match self.fields.get(CONTENTS_FIELD) {
            Some(Value::Bytes(bytes)) => Some(bytes),
            _ => None,
        }
    }

    /// Shallow-merge every field of `other` into this record.
    pub fn extend(&mut self, other: &Metadata) {
        self.fields
            .extend(other.iter().map(|(k, v)| (k.clone(), v.clone())));
    }

    pub fn fields(&self) -> &Metadata {
        &self.fields
    }

    pub fn into_fields(self) -> Metadata {
        self.fields
    }

    /// Whether a field is present and truthy (see [`Value::is_truthy`]).
    ///
    /// Only `date` uses this: a missing, null, `false` or empty date may be
    /// filled in, an author-supplied one never is.
    pub fn has_value(&self, key: &str) -> bool {
        self.fields.get(key).is_some_and(Value::is_truthy)
    }
}

impl From<Metadata> for FileRecord {
    fn from(fields: Metadata) -> Self {
        Self { fields }
    }
}

impl From<FileRecord> for Value {
    fn from(record: FileRecord) -> Self {
        Value::Map(record.fields)
    }
}

/// Mapping from file path to record.
///
/// This is the single mutable structure a pagination run reads and writes.
/// Keys are unique and kept sorted.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(transparent)]
pub struct FileMap {
    files: BTreeMap<String, FileRecord>,
}

impl FileMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, path: &str) -> Option<&FileRecord> {
        self.files.get(path)
    }

    pub fn get_mut(&mut self, path: &str) -> Option<&mut FileRecord> {
        self.files.get_mut(path)
    }

    pub fn contains(&self, path: &str) -> bool {
        self.files.contains_key(path)
    }

    /// Insert or overwrite the record at `path`.
    pub fn insert(&mut self, path: impl Into<String>, record: FileRecord) -> Option<FileRecord> {
        self.files.insert(path.into(), record)
    }

    pub fn remove(&mut self, path: &str) -> Option<FileRecord> {
        self.files.remove(path)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.files.keys().map(String::as_str)
    }

    pub fn iter(&self) -> btree_map::Iter<'_, String, FileRecord> {
        self.files.iter()
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

impl<K: Into<String>> FromIterator<(K, FileRecord)> for FileMap {
    fn from_iter<I: IntoIterator<Item = (K, FileRecord)>>(iter: I) -> Self {
        Self {
            files: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}

impl<'a> IntoIterator for &'a FileMap {
    type Item = (&'a String, &'a FileRecord);
    type IntoIter = btree_map::Iter<'a, String, FileRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.files.iter()
    }
}
