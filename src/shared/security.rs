use crate::shared::error::TgfError;
use crate::shared::Result;
use std::fs;
use std::path::Path;

/// Maximum TGF file size accepted by the reader (100 MB)
pub const MAX_FILE_SIZE: u64 = 100 * 1024 * 1024;

/// Validates that a path is not a symbolic link
///
/// Uses `symlink_metadata()` so the link itself is inspected, not its target.
/// A path that does not exist yet is accepted; writers create it.
pub fn validate_not_symlink(path: &Path, operation: &str) -> Result<()> {
    let metadata = match fs::symlink_metadata(path) {
        Ok(metadata) => metadata,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(()),
        Err(e) => {
            anyhow::bail!(
                "Failed to read metadata for {} operation on {}: {}",
                operation,
                path.display(),
                e
            )
        }
    };

    if metadata.is_symlink() {
        anyhow::bail!(
            "Security: {} is a symbolic link. {} operations on symbolic links are not allowed.",
            path.display(),
            operation
        );
    }

    Ok(())
}

/// Validates that `path` names an existing regular file within the size limit
///
/// # Errors
/// Returns `TgfError::InvalidFilePath` if:
/// - The path doesn't exist
/// - The path is a symbolic link
/// - The path is not a regular file
/// - The file is larger than `max_size`
pub fn validate_regular_file(path: &Path, max_size: u64) -> Result<()> {
    let invalid = |reason: String| TgfError::InvalidFilePath {
        path: path.to_path_buf(),
        reason,
    };

    let metadata = fs::symlink_metadata(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            invalid("File does not exist".to_string())
        } else {
            invalid(format!("Failed to read file metadata: {}", e))
        }
    })?;

    if metadata.is_symlink() {
        return Err(invalid(
            "Security: File is a symbolic link. Symbolic links are not allowed.".to_string(),
        )
        .into());
    }

    if !metadata.is_file() {
        return Err(invalid("Not a regular file".to_string()).into());
    }

    validate_file_size(metadata.len(), path, max_size)
}

/// Validates file size is within acceptable limits
pub fn validate_file_size(file_size: u64, path: &Path, max_size: u64) -> Result<()> {
    if file_size > max_size {
        return Err(TgfError::InvalidFilePath {
            path: path.to_path_buf(),
            reason: format!(
                "Security: File is too large ({} bytes). Maximum allowed size is {} bytes.",
                file_size, max_size
            ),
        }
        .into());
    }
    Ok(())
}
