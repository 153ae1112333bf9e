use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// Scripts can tell argument mistakes apart from unreadable or
/// malformed input by the exit status alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success - the query ran and its output was presented
    Success = 0,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Application error (file I/O, malformed TGF, unknown package, etc.)
    ApplicationError = 3,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Errors raised while reading, parsing, or querying a TGF document.
///
/// The library surfaces these through `anyhow::Error`; callers that need
/// to branch on the kind use `downcast_ref::<TgfError>()`.
#[derive(Debug, Error)]
pub enum TgfError {
    #[error("Failed to read file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the file exists and you have read permissions")]
    FileReadError { path: PathBuf, details: String },

    #[error("Invalid TGF file path: {path}\nReason: {reason}\n\n💡 Hint: Please specify a regular TGF file")]
    InvalidFilePath { path: PathBuf, reason: String },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },

    #[error("Malformed TGF document: no '#' separator line between the node and edge sections\n\n💡 Hint: A TGF file lists nodes, then a line containing only '#', then edges")]
    MissingSeparator,

    #[error("Malformed TGF document: the node section is empty\n\n💡 Hint: The first node line is used as the root package, so at least one node is required")]
    EmptyNodeSection,

    #[error("Malformed node line {line_number}: {line:?}\nDetails: {details}\n\n💡 Hint: Node lines look like '<id> group:artifact:type:version' or '<id> group:artifact[:classifier]:version:scope'")]
    MalformedNodeLine {
        line_number: usize,
        line: String,
        details: String,
    },

    #[error("Malformed edge line {line_number}: {line:?}\n\n💡 Hint: Edge lines look like '<from_id> <to_id> [label]'")]
    MalformedEdgeLine { line_number: usize, line: String },

    #[error("Package not found: {package_id}\n\n💡 Hint: Run the 'packages' command to list the identifiers present in the file")]
    PackageNotFound { package_id: String },

    #[error("No TGF document has been parsed yet")]
    NotParsed,

    /// Validation error for configuration values
    #[error("Validation error: {message}")]
    Validation { message: String },
}
