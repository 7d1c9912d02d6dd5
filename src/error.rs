use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, MergeError>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ErrorCode {
    // --- File I/O ---
    FileReadFailed,
    FileWriteFailed,

    // --- Validation ---
    BoundsExceeded,
}

/// Errors raised by the file/CLI layer. The merge engine itself never
/// errors: malformed structured input degrades to a textual fallback and
/// every call returns a string.
#[derive(Debug, Error)]
pub enum MergeError {
    #[error("Validation Error: {message} (context: {context})")]
    Validation { code: ErrorCode, message: String, context: String },

    #[error("File Error: {message} (path: {path:?})")]
    File { code: ErrorCode, message: String, path: PathBuf },
}
