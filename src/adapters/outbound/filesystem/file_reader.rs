use crate::ports::outbound::TgfReader;
use crate::shared::error::TgfError;
use crate::shared::security::{validate_regular_file, MAX_FILE_SIZE};
use crate::shared::Result;
use std::fs;
use std::path::Path;

/// FileSystemReader adapter for reading TGF files from the file system
///
/// Before reading, the path must be an existing regular file (symbolic
/// links are rejected) no larger than `max_file_size`.
pub struct FileSystemReader {
    max_file_size: u64,
}

impl FileSystemReader {
    pub fn new() -> Self {
        Self {
            max_file_size: MAX_FILE_SIZE,
        }
    }

    pub fn with_max_file_size(max_file_size: u64) -> Self {
        Self { max_file_size }
    }
}

impl Default for FileSystemReader {
    fn default() -> Self {
        Self::new()
    }
}

impl TgfReader for FileSystemReader {
    fn read_tgf(&self, path: &Path) -> Result<String> {
        validate_regular_file(path, self.max_file_size)?;

        let content = fs::read_to_string(path).map_err(|e| TgfError::FileReadError {
            path: path.to_path_buf(),
            details: e.to_string(),
        })?;

        tracing::debug!(path = %path.display(), bytes = content.len(), "read TGF file");
        Ok(content)
    }
}
