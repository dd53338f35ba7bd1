//! Constants used throughout the filebundle core crate.

/// Environment variable naming the manifest of source paths.
pub const MANIFEST_ENV_VAR: &str = "FILEBUNDLE_MANIFEST";

/// Environment variable naming the bundle output file.
pub const OUTPUT_ENV_VAR: &str = "FILEBUNDLE_OUTPUT";

/// Output filename used when no explicit output path is configured.
pub const DEFAULT_OUTPUT_FILENAME: &str = "output.txt";

/// Manifest lines starting with this prefix are ignored.
pub const MANIFEST_COMMENT_PREFIX: &str = "#";
