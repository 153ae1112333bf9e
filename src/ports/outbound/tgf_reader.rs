use crate::shared::Result;
use std::path::Path;

/// TgfReader port for obtaining the text of a TGF file
///
/// The query engine only needs "path in, full text out"; where the bytes
/// come from is left to the adapter.
pub trait TgfReader {
    /// Reads the complete content of the TGF file at `path`
    ///
    /// # Errors
    /// Returns an error if:
    /// - The file does not exist or is not a regular file
    /// - The file cannot be read due to permissions or I/O errors
    /// - The content is not valid UTF-8
    fn read_tgf(&self, path: &Path) -> Result<String>;
}
