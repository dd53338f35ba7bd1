//! filebundle file aggregation
//!
//! This crate concatenates an ordered list of source files into one output
//! document. Every source gets a header block followed by either its text
//! content or an inline error marker:
//!
//! ```text
//! \n\n=== File: <path1> ===\n<content1>\n\n=== File: <path2> ===\n[Error reading file]: <reason>
//! ```
//!
//! A source that cannot be opened or decoded as UTF-8 never aborts the run.
//! Only failures on the output side (creating, writing or flushing the bundle)
//! are returned as [`FilesError`].
//!
//! ## Example Usage
//!
//! ```no_run
//! use filebundle_files::aggregate;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let report = aggregate(&["src/lib.rs", "Cargo.toml"], "output.txt")?;
//! println!("{} read, {} failed", report.files_read(), report.files_failed());
//! # Ok(())
//! # }
//! ```

mod aggregator;
mod constants;
mod report;

pub use aggregator::{aggregate, aggregate_into, read_source, write_header, write_read_error};
pub use constants::{ERROR_MARKER, HEADER_PREFIX, HEADER_SUFFIX};
pub use report::{BundleReport, FileOutcome, FileStatus};

use std::path::PathBuf;

/// Errors that can occur while producing a bundle
///
/// Per-file read failures are not represented here; they are embedded in the
/// bundle and recorded as [`FileStatus::Failed`].
#[derive(Debug, thiserror::Error)]
pub enum FilesError {
    /// The output file could not be created or truncated
    #[error("failed to create output file {}: {source}", path.display())]
    CreateOutput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Writing to or flushing the output failed
    #[error("failed to write bundle output: {0}")]
    Write(#[from] std::io::Error),
}
