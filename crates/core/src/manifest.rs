//! Manifest files listing bundle sources.
//!
//! A manifest is plain UTF-8 text with one source path per line. Lines are
//! trimmed, blank lines and `#` comments are skipped, and everything else is
//! kept in file order, duplicates included.

use crate::constants::MANIFEST_COMMENT_PREFIX;
use crate::{CoreError, CoreResult};
use filebundle_types::NonEmptyText;
use std::path::Path;

/// Parse manifest text into an ordered list of source paths.
pub fn parse_manifest(text: &str) -> Vec<NonEmptyText> {
    text.lines()
        .filter_map(|line| NonEmptyText::new(line).ok())
        .filter(|entry| !entry.as_str().starts_with(MANIFEST_COMMENT_PREFIX))
        .collect()
}

/// Read and parse the manifest at `path`.
pub fn load_manifest(path: &Path) -> CoreResult<Vec<NonEmptyText>> {
    let text = std::fs::read_to_string(path).map_err(|source| CoreError::ManifestRead {
        path: path.to_path_buf(),
        source,
    })?;

    let entries = parse_manifest(&text);
    tracing::debug!(
        manifest = %path.display(),
        entries = entries.len(),
        "manifest loaded"
    );
    Ok(entries)
}
