// crates/infra/src/persistence/file_reader.rs
use std::{
    fs::{File, Metadata},
    io::BufReader,
    path::Path,
};

use file_input_shared_kernel::{InfraResult, InfrastructureError};

/// Convenience helpers for reading files with consistent error handling.
pub struct FileReader;

impl FileReader {
    /// Open the file at `path`.
    pub fn open(path: &Path) -> InfraResult<File> {
        File::open(path).map_err(|source| InfrastructureError::FileRead { path: path.to_path_buf(), source })
    }

    /// Open the file at `path` with buffered reading.
    pub fn open_buffered(path: &Path) -> InfraResult<BufReader<File>> {
        Self::open(path).map(BufReader::new)
    }

    /// Metadata of `path`, following symlinks.
    pub fn metadata(path: &Path) -> InfraResult<Metadata> {
        std::fs::metadata(path)
            .map_err(|source| InfrastructureError::FileMetadata { path: path.to_path_buf(), source })
    }
}
