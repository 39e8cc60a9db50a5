//! Error types shared by the codec and the transform engine.

use thiserror::Error;

/// Errors produced while decoding, encoding or transforming a raster.
///
/// Every failure is terminal for the operation that produced it: all
/// operations are deterministic, so retrying would reproduce the same error.
#[derive(Debug, Error)]
pub enum RasterError {
    /// The header is malformed: bad magic, bad max value or bad dimensions.
    #[error("Invalid PPM header: {0}")]
    Format(String),

    /// Fewer pixel bytes were available than the header declared.
    #[error("Truncated pixel data: expected {expected} bytes, got {actual}")]
    TruncatedData { expected: usize, actual: usize },

    /// The raster's storage disagrees with its dimensions.
    #[error("Invalid raster: {0}")]
    InvalidRaster(String),

    /// Storage for a raster of the requested size could not be obtained.
    #[error("Cannot allocate a {rows}x{cols} raster")]
    Allocation { rows: usize, cols: usize },

    /// A numeric parameter is outside its permitted range.
    #[error("Invalid value for {name}: {reason}")]
    ArgumentRange { name: String, reason: String },

    /// The underlying byte source or sink failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl RasterError {
    pub(crate) fn argument_range(name: &str, reason: impl Into<String>) -> Self {
        RasterError::ArgumentRange {
            name: name.to_string(),
            reason: reason.into(),
        }
    }
}

/// Result alias for rasterkit operations.
pub type Result<T> = std::result::Result<T, RasterError>;

/// Errors produced while selecting an operation from its textual form.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum OperationError {
    /// The operation name is not one of the supported operations.
    #[error("Unsupported image processing operation: {0}")]
    UnknownOperation(String),

    /// The operation was given the wrong number of arguments.
    #[error("{operation} takes {expected} argument(s), got {actual}")]
    WrongArgumentCount {
        operation: &'static str,
        expected: usize,
        actual: usize,
    },

    /// An argument could not be parsed or is outside its permitted range.
    #[error("Invalid value for {name}: {reason}")]
    ArgumentRange { name: String, reason: String },
}
