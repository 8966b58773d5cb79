//! Page materialization - applies one page's changes to the file map.
//!
//! For every member file the [`Materializer`] either relocates the record to
//! its permalink destination or stamps it in place, then writes the page's
//! index record:
//!
//! ```text
//!                    member files                     index record
//! Permalink   blog/a.md → blog/a/index.md      new  blog/N/index.html
//! Extension   blog/a.md stamped in place       new  blog/N.html
//! page 1      (same as above)                  update firstIndexFile
//! ```

use chrono::{DateTime, Utc};
use tracing::debug;

use crate::common::{Config, Error, FileMap, FileRecord, Metadata, Result};
use crate::page::date::representative_date;
use crate::page::metadata::{create_file_details, file_stats, FileDetail, PaginationMetadata};
use crate::paginate::PageGroup;
use crate::util::{generate_pagination_urls, index_file_path, permalink_path};
use crate::LOG_TARGET;

/// Writes pages into a file map for one pagination run.
///
/// `total_pages` is fixed at construction; `now` is shared by every record
/// the run creates so a run is reproducible for a given clock.
pub struct Materializer<'a> {
    config: &'a Config,
    metadata: &'a Metadata,
    total_pages: usize,
    now: DateTime<Utc>,
}

impl<'a> Materializer<'a> {
    pub fn new(
        config: &'a Config,
        metadata: &'a Metadata,
        total_pages: usize,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            config,
            metadata,
            total_pages,
            now,
        }
    }

    /// Relocate or stamp every member of `page` and build its file details.
    ///
    /// Permalink style moves `dir/name.ext` to `dir/name/index.ext`, adding
    /// `originalPath`, `pageNumber` and `totalPages`. Extension style (or a
    /// file already at its destination) only gets `pageNumber` and
    /// `totalPages` set on the live record.
    ///
    /// # Errors
    /// Returns `Error::MissingFile` if a file to be stamped is no longer in
    /// the map.
    pub fn process_page_files(&self, files: &mut FileMap, page: &PageGroup) -> Result<Vec<FileDetail>> {
        let style = self.config.style();
        let mut details = Vec::with_capacity(page.len());

        for entry in &page.entries {
            let new_path = if style.is_permalink() {
                permalink_path(&self.config.directory, &entry.path)
            } else {
                entry.path.clone()
            };

            if new_path != entry.path {
                debug!(target: LOG_TARGET, "Moving file from {} to {}", entry.path, new_path);

                let mut moved = entry.record.clone();
                moved.insert("originalPath", entry.path.as_str());
                moved.insert("pageNumber", page.number);
                moved.insert("totalPages", self.total_pages);

                files.insert(new_path.clone(), moved);
                files.remove(&entry.path);
            } else {
                let live = files
                    .get_mut(&entry.path)
                    .ok_or_else(|| Error::MissingFile(entry.path.clone()))?;
                live.insert("pageNumber", page.number);
                live.insert("totalPages", self.total_pages);
            }

            details.push(create_file_details(entry, &new_path, style));
        }

        Ok(details)
    }

    /// Materialize a page after the first and write its index record.
    ///
    /// The index record is created (or overwritten) with `pagination`,
    /// `pageFiles`, `date` and `stats`, then the global metadata, then
    /// `layout` and empty `contents`. Metadata may shadow the first four
    /// but never `layout` or `contents`.
    pub fn process_index_page(&self, files: &mut FileMap, page: &PageGroup) -> Result<()> {
        let config = self.config;
        let style = config.style();
        let index_file = index_file_path(&config.directory, &config.output_dir, page.number, style);
        debug!(target: LOG_TARGET, "Processing page {} with path: {}", page.number, index_file);

        let details = self.process_page_files(files, page)?;
        let date = representative_date(&page.entries, &config.sort_by, config.missing_date, self.now);

        let urls = generate_pagination_urls(
            &config.directory,
            &config.output_dir,
            page.number,
            self.total_pages,
            style,
        );
        debug!(
            target: LOG_TARGET,
            "Pagination URLs for page {}: first={}, prev={:?}, next={:?}, last={}",
            page.number,
            urls.first,
            urls.previous,
            urls.next,
            urls.last
        );

        let pagination = PaginationMetadata::new(
            &config.directory,
            page.number,
            self.total_pages,
            details.clone(),
            urls,
            style,
        );

        let mut record = FileRecord::new()
            .with_field("pagination", pagination)
            .with_field("pageFiles", details)
            .with_field("date", date)
            .with_field("stats", file_stats(self.now));
        record.extend(self.metadata);
        let record = record
            .with_field("layout", config.index_layout.as_str())
            .with_contents(Vec::new());

        files.insert(index_file.clone(), record);
        debug!(target: LOG_TARGET, "Created index file: {}", index_file);
        Ok(())
    }

    /// Materialize page 1 and update the first index file in place.
    ///
    /// Only `pagination` and `pageFiles` are written, plus `date` when the
    /// file has none of its own. A missing first index file is skipped.
    pub fn process_first_index_page(&self, files: &mut FileMap, page: &PageGroup) -> Result<()> {
        let config = self.config;
        let style = config.style();
        debug!(target: LOG_TARGET, "Processing first page with {} files", page.len());

        let details = self.process_page_files(files, page)?;

        let urls = generate_pagination_urls(
            &config.directory,
            &config.output_dir,
            1,
            self.total_pages,
            style,
        );
        debug!(
            target: LOG_TARGET,
            "Pagination URLs for first page: first={}, next={:?}, last={}",
            urls.first,
            urls.next,
            urls.last
        );

        let Some(record) = files.get_mut(&config.first_index_file) else {
            debug!(
                target: LOG_TARGET,
                "First page file {} not found, skipping metadata update",
                config.first_index_file
            );
            return Ok(());
        };
        debug!(
            target: LOG_TARGET,
            "Adding pagination metadata to first page file: {}",
            config.first_index_file
        );

        let pagination = PaginationMetadata::new(
            &config.directory,
            1,
            self.total_pages,
            details.clone(),
            urls,
            style,
        );
        record.insert("pagination", pagination);
        record.insert("pageFiles", details);

        if !record.has_value("date") {
            if let Some(date) =
                representative_date(&page.entries, &config.sort_by, config.missing_date, self.now)
            {
                record.insert("date", date);
            }
        }
        Ok(())
    }
}
