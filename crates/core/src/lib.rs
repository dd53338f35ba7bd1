//! # filebundle Core
//!
//! Configuration and orchestration for bundling source files into a single
//! document.
//!
//! This crate contains:
//! - Startup configuration ([`BundleConfig`]) and the resolvers that build it
//! - Manifest parsing (one source path per line)
//! - [`BundleService`], which runs the aggregator for a resolved config
//!
//! **No process concerns**: reading environment variables, parsing arguments
//! and printing belong in the binaries.

pub mod config;
pub mod constants;
mod error;
pub mod manifest;

pub use config::{resolve_output_path, resolve_sources, BundleConfig};
pub use error::{CoreError, CoreResult};
pub use filebundle_files::{BundleReport, FileOutcome, FileStatus};
pub use manifest::{load_manifest, parse_manifest};

/// Runs bundles for a resolved configuration
#[derive(Clone, Debug)]
pub struct BundleService {
    config: BundleConfig,
}

impl BundleService {
    /// Creates a new instance of BundleService.
    pub fn new(config: BundleConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &BundleConfig {
        &self.config
    }

    /// Writes the configured sources into the configured output file.
    ///
    /// Unreadable sources are embedded as error markers and reported in the
    /// returned [`BundleReport`]; they do not fail the run.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Files` if the output file cannot be created or written.
    pub fn run(&self) -> CoreResult<BundleReport> {
        tracing::debug!(
            sources = self.config.sources().len(),
            output = %self.config.output_path().display(),
            "starting bundle"
        );

        let report =
            filebundle_files::aggregate(self.config.sources(), self.config.output_path())?;
        Ok(report)
    }
}

/// Writes the bundle for `sources` into `writer` rather than an output file.
///
/// Produces the same bytes [`BundleService::run`] writes to disk.
///
/// # Errors
///
/// Returns `CoreError::Files` if the writer rejects a write.
pub fn stream_bundle<S: AsRef<str>, W: std::io::Write>(
    sources: &[S],
    writer: W,
) -> CoreResult<BundleReport> {
    let report = filebundle_files::aggregate_into(sources, writer)?;
    Ok(report)
}
