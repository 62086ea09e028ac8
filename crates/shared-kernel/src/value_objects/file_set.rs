// crates/shared-kernel/src/value_objects/file_set.rs
use std::{path::PathBuf, slice, sync::Arc};

use serde::{Deserialize, Serialize};

use super::{FileName, FileSize, ModificationTime};

/// Delimiter used by [`FileSet::file_names`].
pub const DEFAULT_NAME_DELIMITER: &str = ", ";

/// Metadata of one file produced by the native chooser.
///
/// `source` is an opaque reference to where the content lives; nothing in this
/// workspace reads through it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileHandle {
    pub name: FileName,
    pub size: FileSize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mime_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_modified: Option<ModificationTime>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<PathBuf>,
}

impl FileHandle {
    pub fn new(name: impl Into<FileName>, size: impl Into<FileSize>) -> Self {
        Self {
            name: name.into(),
            size: size.into(),
            mime_type: None,
            last_modified: None,
            source: None,
        }
    }

    #[must_use]
    pub fn with_mime_type(mut self, mime_type: impl Into<String>) -> Self {
        self.mime_type = Some(mime_type.into());
        self
    }

    #[must_use]
    pub fn with_last_modified(mut self, timestamp: impl Into<ModificationTime>) -> Self {
        self.last_modified = Some(timestamp.into());
        self
    }

    #[must_use]
    pub fn with_source(mut self, source: impl Into<PathBuf>) -> Self {
        self.source = Some(source.into());
        self
    }
}

/// Immutable, ordered selection of files.
///
/// A new set is built for every selection or clear; clones share the same
/// backing slice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FileSet {
    files: Arc<[FileHandle]>,
}

impl FileSet {
    pub fn new(files: Vec<FileHandle>) -> Self {
        Self { files: files.into() }
    }

    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    #[must_use]
    pub fn files(&self) -> &[FileHandle] {
        &self.files
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.files.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    pub fn iter(&self) -> slice::Iter<'_, FileHandle> {
        self.files.iter()
    }

    /// Aggregate content size of every file in the set.
    pub fn total_size(&self) -> FileSize {
        self.files.iter().map(|file| file.size).sum()
    }

    /// File names joined by `", "`.
    #[must_use]
    pub fn file_names(&self) -> String {
        self.file_names_with(DEFAULT_NAME_DELIMITER)
    }

    #[must_use]
    pub fn file_names_with(&self, delimiter: &str) -> String {
        self.files
            .iter()
            .map(|file| file.name.as_str())
            .collect::<Vec<_>>()
            .join(delimiter)
    }
}

impl Default for FileSet {
    fn default() -> Self {
        Self::empty()
    }
}

impl From<Vec<FileHandle>> for FileSet {
    fn from(files: Vec<FileHandle>) -> Self {
        Self::new(files)
    }
}

impl FromIterator<FileHandle> for FileSet {
    fn from_iter<I: IntoIterator<Item = FileHandle>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a FileSet {
    type Item = &'a FileHandle;
    type IntoIter = slice::Iter<'a, FileHandle>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
