//! Common types shared across simple-pagination.
//!
//! This module contains the primitives every component works with:
//! - Configuration (defaults, overrides, addressing style)
//! - Error types
//! - The metadata value model, file records and the file map

pub mod config;
pub mod error;
mod record;
mod value;

pub use config::{AddressingStyle, Config, MissingDate, Options};
pub use error::{Error, Result};
pub use record::{FileMap, FileRecord, CONTENTS_FIELD};
pub use value::{Metadata, Value};
