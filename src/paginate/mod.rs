//! Page partitioning.

use tracing::debug;

use crate::common::{Error, Result};
use crate::select::PageEntry;
use crate::LOG_TARGET;

/// The files assigned to one page, in sort order.
#[derive(Debug, Clone, PartialEq)]
pub struct PageGroup {
    /// 1-based page number.
    pub number: usize,
    pub entries: Vec<PageEntry>,
}

impl PageGroup {
    #[inline]
    pub fn is_first(&self) -> bool {
        self.number == 1
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Number of pages needed for `item_count` files.
#[inline]
pub fn total_pages(item_count: usize, per_page: usize) -> usize {
    item_count.div_ceil(per_page.max(1))
}

/// Split sorted entries into consecutive pages of at most `per_page` files.
///
/// Order is preserved and nothing is dropped or duplicated.
///
/// # Errors
/// Returns `Error::InvalidPerPage` if `per_page` is 0.
///
/// # Example
/// ```
/// use simple_pagination::FileRecord;
/// use simple_pagination::paginate::paginate;
/// use simple_pagination::select::PageEntry;
///
/// let entries: Vec<_> = (0..5)
///     .map(|i| PageEntry::new(format!("blog/{i}.md"), FileRecord::new()))
///     .collect();
/// let pages = paginate(entries, 2).unwrap();
/// assert_eq!(pages.len(), 3);
/// assert_eq!(pages[2].number, 3);
/// assert_eq!(pages[2].len(), 1);
/// ```
pub fn paginate(entries: Vec<PageEntry>, per_page: usize) -> Result<Vec<PageGroup>> {
    if per_page == 0 {
        return Err(Error::InvalidPerPage(per_page));
    }

    let mut pages = Vec::with_capacity(total_pages(entries.len(), per_page));
    let mut remaining = entries.into_iter().peekable();

    while remaining.peek().is_some() {
        pages.push(PageGroup {
            number: pages.len() + 1,
            entries: remaining.by_ref().take(per_page).collect(),
        });
    }

    debug!(
        target: LOG_TARGET,
        "Created {} pages with {} items per page",
        pages.len(),
        per_page
    );
    Ok(pages)
}
