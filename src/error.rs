//! Error types for the DWG encoder

use std::io;
use thiserror::Error;

/// Fatal errors raised while encoding a drawing or compressing a buffer.
///
/// Recoverable conditions (handle code mismatches, unhandled classes, bad
/// second-header addresses, ...) are not errors; they are reported through
/// [`crate::notification::NotificationCollection`] and encoding continues.
#[derive(Debug, Error)]
pub enum DxfError {
    /// IO error while writing to a sink
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// The target version cannot be written with the sequential container layout
    #[error("Unsupported CAD version: {0:?}")]
    UnsupportedVersion(String),

    /// A buffer could not be reserved
    #[error("Out of memory: failed to reserve {0} bytes")]
    OutOfMemory(usize),

    /// An object is about to be emitted with a zero or negative size
    #[error("Invalid object size {0} for object {1:#X}")]
    InvalidObjectSize(i64, u64),

    /// Error while producing an LZ77 stream
    #[error("Compression error: {0}")]
    Compression(String),

    /// Error while expanding an LZ77 stream
    #[error("Decompression error: {0}")]
    Decompression(String),

    /// A reference could not be resolved to an object handle
    #[error("Invalid handle: {0:#X}")]
    InvalidHandle(u64),

    /// A payload field does not match the type its schema declares
    #[error("Field `{field}` of {type_name}: {message}")]
    InvalidField {
        type_name: &'static str,
        field: &'static str,
        message: String,
    },

    /// Structurally invalid input (section count, EED record size, ...)
    #[error("Invalid file format: {0}")]
    InvalidFormat(String),

    /// Text could not be represented in the target code page
    #[error("Encoding error: {0}")]
    Encoding(String),

    /// Generic error with custom message
    #[error("{0}")]
    Custom(String),
}

/// Result type alias for encoder operations
pub type Result<T> = std::result::Result<T, DxfError>;

impl From<String> for DxfError {
    fn from(s: String) -> Self {
        DxfError::Custom(s)
    }
}

impl From<&str> for DxfError {
    fn from(s: &str) -> Self {
        DxfError::Custom(s.to_string())
    }
}

impl From<std::collections::TryReserveError> for DxfError {
    fn from(_: std::collections::TryReserveError) -> Self {
        DxfError::OutOfMemory(0)
    }
}
