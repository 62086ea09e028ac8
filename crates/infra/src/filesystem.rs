// crates/infra/src/filesystem.rs
use std::path::Path;

use chrono::{DateTime, Local};
use file_input_shared_kernel::{ErrorContext, FileHandle, FileSet, InfrastructureError, Result};
use log::{trace, warn};

use crate::persistence::FileReader;

/// Describes the regular file at `path` the way a native chooser would.
///
/// Only metadata is read; the content stays where it is and is referenced
/// through [`FileHandle::source`].
pub fn file_handle_from_path(path: &Path) -> Result<FileHandle> {
    let metadata = FileReader::metadata(path)?;
    if !metadata.is_file() {
        return Err(InfrastructureError::NotAFile { path: path.to_path_buf() }.into());
    }

    let name = path.file_name().map(|s| s.to_string_lossy().into_owned()).unwrap_or_default();
    let mut handle = FileHandle::new(name, metadata.len()).with_source(path);

    match metadata.modified() {
        Ok(mtime) => handle = handle.with_last_modified(DateTime::<Local>::from(mtime)),
        Err(err) => warn!("no modification time for {}: {err}", path.display()),
    }

    let ext = path.extension().map(|e| e.to_string_lossy().to_lowercase()).unwrap_or_default();
    if let Some(mime) = mime_from_extension(&ext) {
        handle = handle.with_mime_type(mime);
    }
    Ok(handle)
}

/// Builds a selection from filesystem paths, preserving their order.
///
/// # Errors
///
/// Fails on the first path that is missing, unreadable, or not a regular file.
pub fn selection_from_paths<I, P>(paths: I) -> Result<FileSet>
where
    I: IntoIterator<Item = P>,
    P: AsRef<Path>,
{
    let files = paths
        .into_iter()
        .map(|path| {
            let path = path.as_ref();
            file_handle_from_path(path).with_context(|| format!("selecting {}", path.display()))
        })
        .collect::<Result<Vec<_>>>()?;
    trace!("built selection of {} file(s)", files.len());
    Ok(FileSet::new(files))
}

fn mime_from_extension(ext: &str) -> Option<&'static str> {
    let mime = match ext {
        "txt" | "log" => "text/plain",
        "csv" => "text/csv",
        "htm" | "html" => "text/html",
        "json" => "application/json",
        "xml" => "application/xml",
        "pdf" => "application/pdf",
        "zip" => "application/zip",
        "gz" => "application/gzip",
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "svg" => "image/svg+xml",
        "mp3" => "audio/mpeg",
        "wav" => "audio/wav",
        "mp4" => "video/mp4",
        _ => return None,
    };
    Some(mime)
}

#[cfg(test)]
mod tests {
    use std::fs;

    use file_input_shared_kernel::FileInputError;

    use super::*;

    #[test]
    fn reads_size_name_and_mime() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("notes.TXT");
        fs::write(&path, b"hello world").unwrap();

        let handle = file_handle_from_path(&path).unwrap();
        assert_eq!(handle.name.as_str(), "notes.TXT");
        assert_eq!(handle.size.bytes(), 11);
        assert_eq!(handle.mime_type.as_deref(), Some("text/plain"));
        assert!(handle.last_modified.is_some());
        assert_eq!(handle.source.as_deref(), Some(path.as_path()));
    }

    #[test]
    fn unknown_extension_has_no_mime() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data.bin");
        fs::write(&path, [0_u8; 4]).unwrap();
        assert_eq!(file_handle_from_path(&path).unwrap().mime_type, None);
    }

    #[test]
    fn selection_keeps_order_and_sums_sizes() {
        let dir = tempfile::tempdir().unwrap();
        let a = dir.path().join("b.csv");
        let b = dir.path().join("a.png");
        fs::write(&a, vec![0_u8; 100]).unwrap();
        fs::write(&b, vec![0_u8; 50]).unwrap();

        let set = selection_from_paths([&a, &b]).unwrap();
        assert_eq!(set.file_names(), "b.csv, a.png");
        assert_eq!(set.total_size().bytes(), 150);
    }

    #[test]
    fn directories_are_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let err = selection_from_paths([dir.path()]).unwrap_err();
        let FileInputError::Context { source, .. } = err else {
            panic!("expected context, got {err:?}");
        };
        assert!(matches!(*source, FileInputError::Infrastructure(InfrastructureError::NotAFile { .. })));
    }

    #[test]
    fn missing_paths_report_metadata_errors() {
        let dir = tempfile::tempdir().unwrap();
        let err = file_handle_from_path(&dir.path().join("gone.txt")).unwrap_err();
        assert!(matches!(err, FileInputError::Infrastructure(InfrastructureError::FileMetadata { .. })));
    }
}
