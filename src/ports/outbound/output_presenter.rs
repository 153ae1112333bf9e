use crate::shared::Result;

/// OutputPresenter port for presenting final output
///
/// Abstracts where formatted query results end up (stdout, a file, ...).
pub trait OutputPresenter {
    /// Presents the formatted content to the output destination
    ///
    /// # Errors
    /// Returns an error if:
    /// - Writing to the output destination fails
    /// - File permissions prevent writing
    fn present(&self, content: &str) -> Result<()>;
}
