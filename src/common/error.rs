//! Error types for simple-pagination.

use thiserror::Error;

/// Convenient Result type alias.
///
/// Instead of writing `Result<T, Error>` everywhere, we can write `Result<T>`.
pub type Result<T> = std::result::Result<T, Error>;

/// All possible errors raised by a pagination run.
///
/// Missing sort fields, an empty directory and a missing first index file are
/// not errors; they degrade to no-ops and only show up in the debug log.
#[derive(Debug, Error)]
pub enum Error {
    /// `perPage` must be at least 1.
    #[error("perPage must be greater than zero, got {0}")]
    InvalidPerPage(usize),

    /// A member file to be stamped in place is not in the file map.
    ///
    /// A run never removes a file it later stamps, so this only fires when a
    /// page is materialized against a map that no longer holds the files it
    /// was selected from.
    #[error("file {0} is missing from the file map")]
    MissingFile(String),

    /// Options could not be parsed from JSON.
    #[error("invalid pagination options: {0}")]
    Json(#[from] serde_json::Error),

    /// A panic was trapped at the plugin boundary.
    #[error("pagination aborted: {0}")]
    Panicked(String),
}
