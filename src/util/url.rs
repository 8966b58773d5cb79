//! Public URL and output path generation.
//!
//! Page 1 always lives at the bare directory. Pages 2..N live at the
//! `outputDir` pattern with `:directory` and `:num` substituted:
//!
//! ```text
//!              Permalink           Extension
//! page 1       /blog/              /blog.html
//! page N       /blog/N/            /blog/N.html
//! index file   blog/N/index.html   blog/N.html
//! ```

use crate::common::AddressingStyle;

const INDEX_HTML_SUFFIX: &str = "/index.html";

/// Turn a file path into a public URL.
///
/// A trailing `/index.html` becomes `/`. In permalink style a trailing
/// `.html` is dropped as well. The result always has one leading slash added
/// when missing; nothing else is normalized.
///
/// # Example
/// ```
/// use simple_pagination::AddressingStyle;
/// use simple_pagination::util::create_clean_url;
///
/// assert_eq!(create_clean_url("blog/2/index.html", AddressingStyle::Permalink), "/blog/2/");
/// assert_eq!(create_clean_url("about.html", AddressingStyle::Permalink), "/about");
/// assert_eq!(create_clean_url("about.html", AddressingStyle::Extension), "/about.html");
/// ```
pub fn create_clean_url(path: &str, style: AddressingStyle) -> String {
    let mut normalized = match path.strip_suffix(INDEX_HTML_SUFFIX) {
        Some(stem) => format!("{stem}/"),
        None => path.to_string(),
    };

    if style.is_permalink() && normalized.ends_with(".html") {
        normalized.truncate(normalized.len() - ".html".len());
    }

    if !normalized.starts_with('/') {
        normalized.insert(0, '/');
    }
    normalized
}

/// Public URL of a paginated member file that now lives at `new_path`.
///
/// `.md` is rendered as `.html`, the result is cleaned, a trailing `/index`
/// collapses to `/`, and extension style always ends in `.html`.
pub fn public_file_url(new_path: &str, style: AddressingStyle) -> String {
    let html_path = match new_path.strip_suffix(".md") {
        Some(stem) => format!("{stem}.html"),
        None => new_path.to_string(),
    };

    let mut url = create_clean_url(&html_path, style);
    if let Some(stem) = url.strip_suffix("/index") {
        url = format!("{stem}/");
    }

    if !style.is_permalink() && !url.ends_with(".html") {
        url.push_str(".html");
    }
    url
}

/// Substitute the first `:directory` and then the first `:num` token.
fn expand_pattern(directory: &str, pattern: &str, page_num: usize) -> String {
    pattern
        .replacen(":directory", directory, 1)
        .replacen(":num", &page_num.to_string(), 1)
}

/// Path of a page without leading slash or suffix.
///
/// Page 1 is the bare directory, every other page comes from the pattern.
pub fn page_path(directory: &str, pattern: &str, page_num: usize) -> String {
    if page_num == 1 {
        directory.to_string()
    } else {
        expand_pattern(directory, pattern, page_num)
    }
}

/// Public URL of a page.
pub fn page_url(directory: &str, pattern: &str, page_num: usize, style: AddressingStyle) -> String {
    let path = page_path(directory, pattern, page_num);
    match style {
        AddressingStyle::Permalink => format!("/{path}/"),
        AddressingStyle::Extension => format!("/{path}.html"),
    }
}

/// File-map key of the generated index record for a page past the first.
pub fn index_file_path(
    directory: &str,
    pattern: &str,
    page_num: usize,
    style: AddressingStyle,
) -> String {
    let path = expand_pattern(directory, pattern, page_num);
    match style {
        AddressingStyle::Permalink => format!("{path}{INDEX_HTML_SUFFIX}"),
        AddressingStyle::Extension => format!("{path}.html"),
    }
}

/// Navigation links for one page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaginationUrls {
    pub first: String,
    pub last: String,
    /// `None` on the last page.
    pub next: Option<String>,
    /// `None` on the first page.
    pub previous: Option<String>,
}

/// Compute first/last/next/previous links for `page_num` of `total_pages`.
///
/// Page 2's previous link is the first-page URL, since page 1 always
/// resolves to the bare directory.
///
/// # Example
/// ```
/// use simple_pagination::AddressingStyle;
/// use simple_pagination::util::generate_pagination_urls;
///
/// let urls = generate_pagination_urls("blog", ":directory/:num", 2, 3, AddressingStyle::Permalink);
/// assert_eq!(urls.first, "/blog/");
/// assert_eq!(urls.previous.as_deref(), Some("/blog/"));
/// assert_eq!(urls.next.as_deref(), Some("/blog/3/"));
/// assert_eq!(urls.last, "/blog/3/");
/// ```
pub fn generate_pagination_urls(
    directory: &str,
    pattern: &str,
    page_num: usize,
    total_pages: usize,
    style: AddressingStyle,
) -> PaginationUrls {
    let url = |num: usize| page_url(directory, pattern, num, style);

    PaginationUrls {
        first: url(1),
        last: url(total_pages),
        next: (page_num < total_pages).then(|| url(page_num + 1)),
        previous: (page_num > 1).then(|| url(page_num - 1)),
    }
}
