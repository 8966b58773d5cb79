//! The pagination build step.
//!
//! [`SimplePagination`] wires selection, partitioning and materialization
//! into the single entry point a host pipeline calls, and is the failure
//! boundary for the whole run.

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};

use chrono::{DateTime, Utc};
use tracing::{debug, error};

use crate::common::{Config, Error, FileMap, Metadata, Options, Result};
use crate::page::Materializer;
use crate::paginate::paginate;
use crate::select::select_files;
use crate::LOG_TARGET;

/// A build step that transforms the file map in place.
///
/// Hosts call [`Plugin::run`] once per build with exclusive access to the
/// file map and read-only access to the global metadata.
pub trait Plugin {
    /// Namespace used for this step's log output.
    fn name(&self) -> &str;

    /// Apply the step.
    ///
    /// # Errors
    /// Any failure of the step. Implementations must not panic back into
    /// the host.
    fn run(&self, files: &mut FileMap, metadata: &Metadata) -> Result<()>;
}

/// Paginates one directory of the file map.
///
/// # Usage
/// ```
/// use simple_pagination::{FileMap, FileRecord, Metadata, Options, Plugin, SimplePagination};
///
/// let mut files: FileMap = vec![
///     ("blog/post1.md", FileRecord::new().with_field("date", "2022-01-01")),
///     ("blog/post2.md", FileRecord::new().with_field("date", "2022-01-02")),
///     ("blog.md", FileRecord::new()),
/// ]
/// .into_iter()
/// .collect();
///
/// let plugin = SimplePagination::new(Options { per_page: Some(1), ..Options::default() });
/// plugin.run(&mut files, &Metadata::new()).unwrap();
///
/// assert!(files.contains("blog/post2/index.md"));
/// assert!(files.contains("blog/2/index.html"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct SimplePagination {
    config: Config,
}

impl SimplePagination {
    /// Create the step from caller overrides merged onto the defaults.
    pub fn new(options: Options) -> Self {
        Self::with_config(Config::from_options(options))
    }

    pub fn with_config(config: Config) -> Self {
        Self { config }
    }

    /// Create the step from a JSON options object.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(Self::new(Options::from_json(json)?))
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Run the pagination sequence with an explicit clock.
    ///
    /// Pages 2..N are materialized before page 1. Unlike [`Plugin::run`]
    /// this does not trap panics or log failures.
    ///
    /// # Errors
    /// - `Error::InvalidPerPage` if `perPage` is 0
    /// - `Error::MissingFile` if a page member is not in `files`
    pub fn paginate(&self, files: &mut FileMap, metadata: &Metadata, now: DateTime<Utc>) -> Result<()> {
        let config = &self.config;
        debug!(target: LOG_TARGET, "Starting pagination process with options: {:?}", config);

        let selected = select_files(files, config);
        if selected.is_empty() {
            debug!(
                target: LOG_TARGET,
                "No files found in directory {}, skipping pagination",
                config.directory
            );
            return Ok(());
        }

        let pages = paginate(selected, config.per_page)?;
        let materializer = Materializer::new(config, metadata, pages.len(), now);

        for page in pages.iter().skip(1) {
            materializer.process_index_page(files, page)?;
        }
        if let Some(first) = pages.first() {
            materializer.process_first_index_page(files, first)?;
        }

        debug!(target: LOG_TARGET, "Pagination process completed");
        Ok(())
    }

    /// Run the step and report the outcome through `done`.
    ///
    /// `done` is called exactly once, before this returns: with `None` on
    /// success or `Some(error)` on failure.
    pub fn run_with_callback<F>(&self, files: &mut FileMap, metadata: &Metadata, done: F)
    where
        F: FnOnce(Option<Error>),
    {
        run_reporting(self.name(), || self.paginate(files, metadata, Utc::now()), done);
    }
}

impl Plugin for SimplePagination {
    fn name(&self) -> &str {
        LOG_TARGET
    }

    fn run(&self, files: &mut FileMap, metadata: &Metadata) -> Result<()> {
        guarded(self.name(), || self.paginate(files, metadata, Utc::now()))
    }
}

/// Run `job`, turning a panic into `Error::Panicked` and logging any failure.
fn guarded<F>(name: &str, job: F) -> Result<()>
where
    F: FnOnce() -> Result<()>,
{
    let outcome = panic::catch_unwind(AssertUnwindSafe(job))
        .unwrap_or_else(|payload| Err(Error::Panicked(panic_message(payload.as_ref()))));

    if let Err(err) = &outcome {
        error!(target: LOG_TARGET, "Error in {} plugin: {}", name, err);
    }
    outcome
}

/// Run `job` behind the failure boundary and hand the outcome to `done` once.
fn run_reporting<F, D>(name: &str, job: F, done: D)
where
    F: FnOnce() -> Result<()>,
    D: FnOnce(Option<Error>),
{
    done(guarded(name, job).err());
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(msg) = payload.downcast_ref::<&str>() {
        (*msg).to_string()
    } else if let Some(msg) = payload.downcast_ref::<String>() {
        msg.clone()
    } else {
        "unknown panic".to_string()
    }
}
