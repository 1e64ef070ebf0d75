//! Error types for the untoc library.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for untoc operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while acquiring spans or emitting outlines.
///
/// The classification pipeline itself never fails: an empty or
/// unclassifiable document is a valid result (empty outline, sentinel
/// title), not an error. Errors only arise at the edges - reading span
/// dumps and writing JSON.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The span dump could not be decoded.
    #[error("Span dump decode error: {0}")]
    SpanDecode(String),

    /// Error serializing an outline result.
    #[error("Rendering error: {0}")]
    Render(String),

    /// Batch input path is not a directory.
    #[error("Not a directory: {}", .0.display())]
    NotADirectory(PathBuf),
}
