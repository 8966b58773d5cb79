//! Pagination configuration.
//!
//! [`Options`] holds caller overrides (every field optional, camelCase when
//! read from JSON). [`Config`] is the immutable, fully-resolved form built by
//! merging the overrides onto the defaults key by key.

use serde::Deserialize;

use crate::common::Result;

/// Default source directory.
pub const DEFAULT_DIRECTORY: &str = "blog";

/// Default page capacity.
pub const DEFAULT_PER_PAGE: usize = 10;

/// Default sort field.
pub const DEFAULT_SORT_BY: &str = "date";

/// Default output pattern for pages 2..N.
pub const DEFAULT_OUTPUT_DIR: &str = ":directory/:num";

/// Default layout for generated index records.
pub const DEFAULT_INDEX_LAYOUT: &str = "blog-index.njk";

/// Default first-page index file.
pub const DEFAULT_FIRST_INDEX_FILE: &str = "blog.md";

/// How generated URLs and member file paths are shaped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AddressingStyle {
    /// `/blog/2/`; member files move to `blog/<name>/index.<ext>`.
    Permalink,
    /// `/blog/2.html`; member files keep their paths.
    Extension,
}

impl AddressingStyle {
    #[inline]
    pub fn from_permalinks(use_permalinks: bool) -> Self {
        if use_permalinks {
            AddressingStyle::Permalink
        } else {
            AddressingStyle::Extension
        }
    }

    #[inline]
    pub fn is_permalink(self) -> bool {
        self == AddressingStyle::Permalink
    }
}

/// What date an index gets when none of its members has one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MissingDate {
    /// Use the time of the run.
    #[default]
    Now,
    /// Leave the date empty (`null` on pages 2..N, untouched on page 1).
    None,
}

/// Caller-supplied overrides.
///
/// # Example
/// ```
/// use simple_pagination::{Config, Options};
///
/// let options: Options = serde_json::from_str(r#"{ "perPage": 2, "usePermalinks": false }"#).unwrap();
/// let config = Config::from_options(options);
/// assert_eq!(config.per_page, 2);
/// assert_eq!(config.directory, "blog");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Options {
    pub directory: Option<String>,
    pub per_page: Option<usize>,
    pub sort_by: Option<String>,
    pub reverse: Option<bool>,
    pub output_dir: Option<String>,
    pub index_layout: Option<String>,
    pub first_index_file: Option<String>,
    pub use_permalinks: Option<bool>,
    pub missing_date: Option<MissingDate>,
}

impl Options {
    /// Parse overrides from a JSON object.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Fully-resolved pagination settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Directory whose files get paginated (no trailing slash).
    pub directory: String,
    /// Page capacity.
    pub per_page: usize,
    /// Dot-separated field path to sort by.
    pub sort_by: String,
    /// Descending order when true.
    pub reverse: bool,
    /// Pattern for pages 2..N with `:directory` and `:num` tokens.
    pub output_dir: String,
    /// Layout assigned to generated index records.
    pub index_layout: String,
    /// Existing file that receives page 1's metadata.
    pub first_index_file: String,
    pub use_permalinks: bool,
    pub missing_date: MissingDate,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            directory: DEFAULT_DIRECTORY.to_string(),
            per_page: DEFAULT_PER_PAGE,
            sort_by: DEFAULT_SORT_BY.to_string(),
            reverse: true,
            output_dir: DEFAULT_OUTPUT_DIR.to_string(),
            index_layout: DEFAULT_INDEX_LAYOUT.to_string(),
            first_index_file: DEFAULT_FIRST_INDEX_FILE.to_string(),
            use_permalinks: true,
            missing_date: MissingDate::Now,
        }
    }
}

impl Config {
    /// Merge overrides onto the defaults. Values are not validated here.
    pub fn from_options(options: Options) -> Self {
        let defaults = Config::default();
        Self {
            directory: options.directory.unwrap_or(defaults.directory),
            per_page: options.per_page.unwrap_or(defaults.per_page),
            sort_by: options.sort_by.unwrap_or(defaults.sort_by),
            reverse: options.reverse.unwrap_or(defaults.reverse),
            output_dir: options.output_dir.unwrap_or(defaults.output_dir),
            index_layout: options.index_layout.unwrap_or(defaults.index_layout),
            first_index_file: options.first_index_file.unwrap_or(defaults.first_index_file),
            use_permalinks: options.use_permalinks.unwrap_or(defaults.use_permalinks),
            missing_date: options.missing_date.unwrap_or(defaults.missing_date),
        }
    }

    #[inline]
    pub fn style(&self) -> AddressingStyle {
        AddressingStyle::from_permalinks(self.use_permalinks)
    }

    pub fn with_directory(mut self, directory: impl Into<String>) -> Self {
        self.directory = directory.into();
        self
    }

    pub fn with_per_page(mut self, per_page: usize) -> Self {
        self.per_page = per_page;
        self
    }

    pub fn with_sort_by(mut self, sort_by: impl Into<String>) -> Self {
        self.sort_by = sort_by.into();
        self
    }

    pub fn with_reverse(mut self, reverse: bool) -> Self {
        self.reverse = reverse;
        self
    }

    pub fn with_output_dir(mut self, output_dir: impl Into<String>) -> Self {
        self.output_dir = output_dir.into();
        self
    }

    pub fn with_index_layout(mut self, index_layout: impl Into<String>) -> Self {
        self.index_layout = index_layout.into();
        self
    }

    pub fn with_first_index_file(mut self, first_index_file: impl Into<String>) -> Self {
        self.first_index_file = first_index_file.into();
        self
    }

    pub fn with_permalinks(mut self, use_permalinks: bool) -> Self {
        self.use_permalinks = use_permalinks;
        self
    }

    pub fn with_missing_date(mut self, missing_date: MissingDate) -> Self {
        self.missing_date = missing_date;
        self
    }
}

impl From<Options> for Config {
    fn from(options: Options) -> Self {
        Config::from_options(options)
    }
}
