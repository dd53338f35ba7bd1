/// Text written before the source path in each header block.
pub const HEADER_PREFIX: &str = "\n\n=== File: ";

/// Text written after the source path in each header block.
pub const HEADER_SUFFIX: &str = " ===\n";

/// Marker written in place of content when a source cannot be read.
pub const ERROR_MARKER: &str = "[Error reading file]: ";
