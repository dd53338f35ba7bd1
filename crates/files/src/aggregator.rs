//! Sequential file aggregation
//!
//! The aggregator walks the input paths in order and, for each one, writes a
//! header block followed by the file's content. The output handle is held for
//! the whole run; each source handle is opened, drained and dropped before the
//! next path is touched.
//!
//! # Record format
//!
//! ```text
//! \n\n=== File: <path> ===\n<content or "[Error reading file]: <reason>">
//! ```
//!
//! No trailing newline is added after content, so a source that does not end
//! in a newline runs straight into the next header's leading `\n\n`.
//!
//! # Failure model
//!
//! - Source failures (missing file, permission denied, a directory, invalid
//!   UTF-8) are written inline and recorded in the [`BundleReport`].
//! - Output failures stop the run and surface as [`FilesError`].

use crate::constants::{ERROR_MARKER, HEADER_PREFIX, HEADER_SUFFIX};
use crate::report::{BundleReport, FileStatus};
use crate::FilesError;
use std::fs::File;
use std::io::{self, BufWriter, Read, Write};
use std::path::Path;

/// Bundles `paths` into the file at `output_path`
///
/// The output file is created if missing and truncated if it already exists,
/// so re-running with the same output never appends to a previous bundle. An
/// empty `paths` slice leaves a zero-byte output file.
///
/// # Arguments
///
/// * `paths` - Source paths, processed in order; duplicates are processed again
/// * `output_path` - Destination of the bundle
///
/// # Errors
///
/// Returns `FilesError` if:
/// - The output file cannot be created or truncated
/// - Writing to or flushing the output fails
pub fn aggregate<S: AsRef<str>>(
    paths: &[S],
    output_path: impl AsRef<Path>,
) -> Result<BundleReport, FilesError> {
    let output_path = output_path.as_ref();
    let file = File::create(output_path).map_err(|source| FilesError::CreateOutput {
        path: output_path.to_path_buf(),
        source,
    })?;

    let mut writer = BufWriter::new(file);
    let mut report = BundleReport::new(Some(output_path));
    write_records(paths, &mut writer, &mut report)?;
    writer.flush()?;

    tracing::info!(
        output = %output_path.display(),
        read = report.files_read(),
        failed = report.files_failed(),
        "bundle written"
    );

    Ok(report)
}

/// Writes the bundle record stream for `paths` into an arbitrary sink
///
/// Produces exactly the bytes [`aggregate`] would write to a file. The writer
/// is flushed before returning.
///
/// # Errors
///
/// Returns `FilesError::Write` if the sink rejects a write or flush.
pub fn aggregate_into<S: AsRef<str>, W: Write>(
    paths: &[S],
    mut writer: W,
) -> Result<BundleReport, FilesError> {
    let mut report = BundleReport::new(None);
    write_records(paths, &mut writer, &mut report)?;
    writer.flush()?;

    tracing::debug!(
        read = report.files_read(),
        failed = report.files_failed(),
        "bundle streamed"
    );

    Ok(report)
}

fn write_records<S: AsRef<str>, W: Write>(
    paths: &[S],
    writer: &mut W,
    report: &mut BundleReport,
) -> Result<(), FilesError> {
    for path in paths {
        let path: &str = path.as_ref();
        write_header(writer, path)?;

        match read_source(Path::new(path)) {
            Ok(content) => {
                writer.write_all(content.as_bytes())?;
                tracing::debug!(path, bytes = content.len(), "source appended");
                report.record(
                    path,
                    FileStatus::Read {
                        bytes: content.len() as u64,
                    },
                );
            }
            Err(e) => {
                write_read_error(writer, &e)?;
                tracing::warn!(path, error = %e, "failed to read source file");
                report.record(
                    path,
                    FileStatus::Failed {
                        reason: e.to_string(),
                    },
                );
            }
        }
    }

    Ok(())
}

/// Reads a source file as strict UTF-8 text
///
/// The file is opened read-only and released before this returns, on both the
/// success and the error path.
///
/// # Errors
///
/// Returns the underlying `io::Error` if the file cannot be opened or read.
/// Content that is not valid UTF-8 yields `io::ErrorKind::InvalidData`.
pub fn read_source(path: &Path) -> io::Result<String> {
    let mut file = File::open(path)?;
    let mut content = String::new();
    file.read_to_string(&mut content)?;
    Ok(content)
}

/// Writes the header block that opens every record.
pub fn write_header<W: Write + ?Sized>(writer: &mut W, path: &str) -> io::Result<()> {
    write!(writer, "{HEADER_PREFIX}{path}{HEADER_SUFFIX}")
}

/// Writes the inline marker used in place of unreadable content.
pub fn write_read_error<W: Write + ?Sized>(
    writer: &mut W,
    error: &dyn std::fmt::Display,
) -> io::Result<()> {
    write!(writer, "{ERROR_MARKER}{error}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn path_str(path: &Path) -> String {
        path.to_string_lossy().into_owned()
    }

    fn open_error(path: &Path) -> String {
        File::open(path).unwrap_err().to_string()
    }

    #[test]
    fn test_readable_and_missing_scenario() {
        let temp = TempDir::new().unwrap();
        let a = temp.path().join("a.txt");
        let missing = temp.path().join("missing.txt");
        let out = temp.path().join("out.txt");
        fs::write(&a, "hello").unwrap();

        let paths = vec![path_str(&a), path_str(&missing)];
        let report = aggregate(&paths, &out).unwrap();

        let expected = format!(
            "\n\n=== File: {} ===\nhello\n\n=== File: {} ===\n[Error reading file]: {}",
            paths[0],
            paths[1],
            open_error(&missing)
        );
        assert_eq!(fs::read_to_string(&out).unwrap(), expected);

        assert_eq!(report.output.as_deref(), Some(out.as_path()));
        assert_eq!(report.files_read(), 1);
        assert_eq!(report.files_failed(), 1);
        assert_eq!(report.entries[0].status, FileStatus::Read { bytes: 5 });
    }

    #[test]
    fn test_empty_paths_writes_zero_bytes() {
        let temp = TempDir::new().unwrap();
        let out = temp.path().join("out.txt");

        let paths: Vec<String> = Vec::new();
        let report = aggregate(&paths, &out).unwrap();

        assert!(report.is_empty());
        assert_eq!(fs::metadata(&out).unwrap().len(), 0);
    }

    #[test]
    fn test_rerun_truncates_previous_output() {
        let temp = TempDir::new().unwrap();
        let a = temp.path().join("a.txt");
        let out = temp.path().join("out.txt");
        fs::write(&a, "hello").unwrap();
        fs::write(&out, "stale content from an earlier, much longer run").unwrap();

        let paths = vec![path_str(&a)];
        aggregate(&paths, &out).unwrap();
        let first = fs::read_to_string(&out).unwrap();
        aggregate(&paths, &out).unwrap();
        let second = fs::read_to_string(&out).unwrap();

        assert_eq!(first, second);
        assert_eq!(first, format!("\n\n=== File: {} ===\nhello", paths[0]));
    }

    #[test]
    fn test_content_copied_verbatim() {
        let temp = TempDir::new().unwrap();
        let src = temp.path().join("page.tsx");
        let content = "line one\r\n\ttabbed\n\n=== File: fake ===\nünïcødé ✓\n";
        fs::write(&src, content).unwrap();

        let mut buf = Vec::new();
        let report = aggregate_into(&[path_str(&src)], &mut buf).unwrap();

        let expected = format!("\n\n=== File: {} ===\n{}", path_str(&src), content);
        assert_eq!(String::from_utf8(buf).unwrap(), expected);
        assert_eq!(report.bytes_written(), content.len() as u64);
    }

    #[test]
    fn test_headers_kept_in_input_order_with_duplicates() {
        let temp = TempDir::new().unwrap();
        let a = temp.path().join("a.txt");
        let b = temp.path().join("b.txt");
        fs::write(&a, "A").unwrap();
        fs::write(&b, "B").unwrap();

        let paths = vec![path_str(&b), path_str(&a), path_str(&b)];
        let mut buf = Vec::new();
        let report = aggregate_into(&paths, &mut buf).unwrap();

        let expected = format!(
            "\n\n=== File: {b} ===\nB\n\n=== File: {a} ===\nA\n\n=== File: {b} ===\nB",
            a = paths[1],
            b = paths[0]
        );
        assert_eq!(String::from_utf8(buf).unwrap(), expected);

        let order: Vec<&str> = report.entries.iter().map(|e| e.path.as_str()).collect();
        assert_eq!(order, vec![paths[0].as_str(), paths[1].as_str(), paths[2].as_str()]);
    }

    #[test]
    fn test_invalid_utf8_is_per_file_failure() {
        let temp = TempDir::new().unwrap();
        let bad = temp.path().join("binary.dat");
        let good = temp.path().join("good.txt");
        fs::write(&bad, [0xff, 0xfe, 0x00, 0x80]).unwrap();
        fs::write(&good, "ok").unwrap();

        let paths = vec![path_str(&bad), path_str(&good)];
        let mut buf = Vec::new();
        let report = aggregate_into(&paths, &mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();

        let bad_header = format!("\n\n=== File: {} ===\n[Error reading file]: ", paths[0]);
        assert!(text.starts_with(&bad_header));
        assert!(text.ends_with(&format!("\n\n=== File: {} ===\nok", paths[1])));
        assert!(matches!(
            &report.entries[0].status,
            FileStatus::Failed { reason } if reason.contains("UTF-8")
        ));
        assert!(report.entries[1].is_read());
    }

    #[test]
    fn test_directory_source_is_per_file_failure() {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join("app");
        fs::create_dir_all(&dir).unwrap();

        let mut buf = Vec::new();
        let report = aggregate_into(&[path_str(&dir)], &mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();

        assert!(text.contains("[Error reading file]: "));
        assert_eq!(report.files_failed(), 1);
    }

    #[cfg(unix)]
    #[test]
    fn test_permission_denied_is_per_file_failure() {
        use std::os::unix::fs::PermissionsExt;

        let temp = TempDir::new().unwrap();
        let locked = temp.path().join("locked.txt");
        let open = temp.path().join("open.txt");
        fs::write(&locked, "secret").unwrap();
        fs::write(&open, "visible").unwrap();
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).unwrap();

        // Privileged users bypass file mode bits.
        if fs::read(&locked).is_ok() {
            return;
        }

        let paths = vec![path_str(&locked), path_str(&open)];
        let mut buf = Vec::new();
        let report = aggregate_into(&paths, &mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();

        let expected = format!(
            "\n\n=== File: {} ===\n[Error reading file]: {}\n\n=== File: {} ===\nvisible",
            paths[0],
            open_error(&locked),
            paths[1]
        );
        assert_eq!(text, expected);
        assert_eq!(report.files_failed(), 1);
        assert_eq!(report.files_read(), 1);
    }

    #[test]
    fn test_empty_path_string_is_per_file_failure() {
        let mut buf = Vec::new();
        let report = aggregate_into(&[""], &mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();

        assert!(text.starts_with("\n\n=== File:  ===\n[Error reading file]: "));
        assert_eq!(report.files_failed(), 1);
    }

    #[test]
    fn test_output_in_missing_directory_is_fatal() {
        let temp = TempDir::new().unwrap();
        let out = temp.path().join("no-such-dir").join("out.txt");

        let result = aggregate(&["a.txt"], &out);

        match result {
            Err(FilesError::CreateOutput { path, .. }) => assert_eq!(path, out),
            other => panic!("expected CreateOutput error, got {other:?}"),
        }
    }

    #[test]
    fn test_source_left_untouched() {
        let temp = TempDir::new().unwrap();
        let src = temp.path().join("keep.txt");
        fs::write(&src, "unchanged").unwrap();

        aggregate(&[path_str(&src)], temp.path().join("out.txt")).unwrap();

        assert_eq!(fs::read_to_string(&src).unwrap(), "unchanged");
    }

    #[test]
    fn test_write_header_and_marker() {
        let mut buf = Vec::new();
        write_header(&mut buf, r"C:\app\page.tsx").unwrap();
        write_read_error(&mut buf, &"boom").unwrap();

        assert_eq!(
            String::from_utf8(buf).unwrap(),
            "\n\n=== File: C:\\app\\page.tsx ===\n[Error reading file]: boom"
        );
    }

    struct FailingWriter;

    impl Write for FailingWriter {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::other("disk full"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_sink_failure_is_fatal() {
        let result = aggregate_into(&["a.txt"], FailingWriter);
        assert!(matches!(result, Err(FilesError::Write(_))));
    }
}
