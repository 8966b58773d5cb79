//! Page materialization.
//!
//! # Components
//! - [`Materializer`] - relocates member files and writes index records
//! - [`FileDetail`] / [`PaginationMetadata`] - the records templates read
//! - [`parse_date`] / [`representative_date`] - the date shown on an index

mod date;
mod materialize;
mod metadata;

pub use date::{find_most_recent_date, parse_date, representative_date};
pub use materialize::Materializer;
pub use metadata::{create_file_details, file_stats, FileDetail, PaginationMetadata};
