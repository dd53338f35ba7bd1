//! Per-run summary of what went into a bundle.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Outcome of reading a single source path
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum FileStatus {
    /// Content was copied verbatim into the bundle
    Read { bytes: u64 },
    /// The error marker was written instead of content
    Failed { reason: String },
}

/// One header block in the bundle, in input order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileOutcome {
    /// Source path exactly as supplied by the caller
    pub path: String,
    pub status: FileStatus,
}

impl FileOutcome {
    pub fn is_read(&self) -> bool {
        matches!(self.status, FileStatus::Read { .. })
    }
}

/// Summary returned by a completed aggregation run
///
/// `entries` holds one outcome per input path, including duplicates, in the
/// order the header blocks were written.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BundleReport {
    /// Output file, if the bundle was written to disk
    pub output: Option<PathBuf>,
    pub entries: Vec<FileOutcome>,
}

impl BundleReport {
    pub(crate) fn new(output: Option<&Path>) -> Self {
        Self {
            output: output.map(Path::to_path_buf),
            entries: Vec::new(),
        }
    }

    pub(crate) fn record(&mut self, path: &str, status: FileStatus) {
        self.entries.push(FileOutcome {
            path: path.to_owned(),
            status,
        });
    }

    /// Number of sources whose content was copied.
    #[must_use]
    pub fn files_read(&self) -> usize {
        self.entries.iter().filter(|e| e.is_read()).count()
    }

    /// Number of sources replaced by an error marker.
    #[must_use]
    pub fn files_failed(&self) -> usize {
        self.entries.len() - self.files_read()
    }

    /// Total source content bytes copied, excluding headers and markers.
    #[must_use]
    pub fn bytes_written(&self) -> u64 {
        self.entries
            .iter()
            .map(|e| match e.status {
                FileStatus::Read { bytes } => bytes,
                FileStatus::Failed { .. } => 0,
            })
            .sum()
    }

    /// True when no paths were supplied.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
