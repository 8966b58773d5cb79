//! Pure path and URL helpers.
//!
//! - [`get_nested_property`] - dot-path field lookup
//! - [`create_clean_url`] / [`public_file_url`] - public URL normalization
//! - [`generate_pagination_urls`] - first/last/next/previous links
//! - [`split_file_name`] / [`permalink_path`] - member file relocation

mod filename;
mod property;
mod url;

pub use filename::{permalink_path, split_file_name, DEFAULT_EXTENSION};
pub use property::get_nested_property;
pub use url::{
    create_clean_url, generate_pagination_urls, index_file_path, page_path, page_url,
    public_file_url, PaginationUrls,
};
