//! Core runtime configuration.
//!
//! Configuration is resolved once at process startup and then passed into
//! [`crate::BundleService`]. Binaries read environment variables and command
//! line arguments; the functions here only ever see plain values.

use crate::constants::DEFAULT_OUTPUT_FILENAME;
use crate::manifest::load_manifest;
use crate::{CoreError, CoreResult};
use filebundle_types::NonEmptyText;
use std::path::{Path, PathBuf};

/// Core configuration resolved at startup.
#[derive(Clone, Debug)]
pub struct BundleConfig {
    sources: Vec<String>,
    output_path: PathBuf,
}

impl BundleConfig {
    /// Create a new `BundleConfig`.
    ///
    /// `sources` may be empty, which produces an empty bundle.
    pub fn new(sources: Vec<String>, output_path: PathBuf) -> CoreResult<Self> {
        if output_path.as_os_str().is_empty() {
            return Err(CoreError::InvalidInput(
                "output path cannot be empty".into(),
            ));
        }

        Ok(Self {
            sources,
            output_path,
        })
    }

    pub fn sources(&self) -> &[String] {
        &self.sources
    }

    pub fn output_path(&self) -> &Path {
        &self.output_path
    }
}

/// Resolve the output path from an optional string value.
///
/// If `value` is `None` or empty/whitespace, returns [`DEFAULT_OUTPUT_FILENAME`].
pub fn resolve_output_path(value: Option<String>) -> PathBuf {
    value
        .and_then(|v| NonEmptyText::new(v).ok())
        .map(|v| PathBuf::from(v.into_string()))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_FILENAME))
}

/// Resolve the ordered source list.
///
/// Manifest entries come first, followed by `inline` paths in the order given.
pub fn resolve_sources(inline: Vec<String>, manifest: Option<&Path>) -> CoreResult<Vec<String>> {
    let mut sources = match manifest {
        Some(path) => load_manifest(path)?
            .into_iter()
            .map(NonEmptyText::into_string)
            .collect(),
        None => Vec::new(),
    };
    sources.extend(inline);

    Ok(sources)
}
