//! simple-pagination - paginates a directory of content files inside a
//! static-site build pipeline.
//!
//! Given the pipeline's in-memory file map, the files under one directory are
//! sorted, split into fixed-size pages, relocated (or stamped) per page, and
//! decorated with `pagination` metadata: next/previous/first/last links and
//! per-page file listings.
//!
//! # Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                    SimplePagination (plugin)                    │
//! │          options → Config, failure boundary, callback           │
//! ├─────────────────────────────────────────────────────────────────┤
//! │  ┌─────────────────────────────────────────────────────────┐   │
//! │  │           Selector (select/)                             │   │
//! │  │     files under `directory/` sorted by `sortBy`          │   │
//! │  └─────────────────────────────────────────────────────────┘   │
//! │                              ↓                                  │
//! │  ┌─────────────────────────────────────────────────────────┐   │
//! │  │           Paginator (paginate/)                          │   │
//! │  │          ceil(N / perPage) ordered PageGroups            │   │
//! │  └─────────────────────────────────────────────────────────┘   │
//! │                              ↓                                  │
//! │  ┌─────────────────────────────────────────────────────────┐   │
//! │  │           Materializer (page/)                           │   │
//! │  │   pages 2..N: move files, write index records            │   │
//! │  │   page 1:     move files, update `firstIndexFile`        │   │
//! │  └─────────────────────────────────────────────────────────┘   │
//! │                              ↓                                  │
//! │  ┌─────────────────────────────────────────────────────────┐   │
//! │  │           Path/URL helpers (util/)                       │   │
//! │  └─────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//! - [`common`] - Shared primitives (Config, Error, Value, FileRecord, FileMap)
//! - [`util`] - Path and URL helpers
//! - [`select`] - Directory selection and sorting
//! - [`paginate`] - Page partitioning
//! - [`page`] - Page materialization
//! - [`plugin`] - The build step entry point
//!
//! # Quick Start
//! ```
//! use simple_pagination::{FileMap, FileRecord, Metadata, Plugin, SimplePagination};
//!
//! let mut files = FileMap::new();
//! files.insert("blog/hello.md", FileRecord::new().with_field("date", "2022-01-01"));
//! files.insert("blog.md", FileRecord::new().with_field("title", "Blog"));
//!
//! SimplePagination::default().run(&mut files, &Metadata::new()).unwrap();
//!
//! let blog = files.get("blog.md").unwrap();
//! assert!(blog.contains("pagination"));
//! assert!(files.contains("blog/hello/index.md"));
//! ```
//!
//! # Logging
//! Progress is reported through `tracing` under the `simple_pagination`
//! target. The library never installs a subscriber.

pub mod common;
pub mod page;
pub mod paginate;
pub mod plugin;
pub mod select;
pub mod util;

/// Log target for every event this crate emits.
pub const LOG_TARGET: &str = "simple_pagination";

// Re-export commonly used items at crate root for convenience
pub use common::{
    AddressingStyle, Config, Error, FileMap, FileRecord, Metadata, MissingDate, Options, Result,
    Value,
};

pub use page::{FileDetail, PaginationMetadata};
pub use plugin::{Plugin, SimplePagination};
