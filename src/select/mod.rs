//! File selection and ordering.
//!
//! - [`select_files`] - filter the file map to one directory and sort it
//! - [`compare_values`] / [`compare_sort_keys`] - the comparator behind the sort

mod compare;
mod selector;

pub use compare::{compare_sort_keys, compare_values};
pub use selector::{select_files, PageEntry};
