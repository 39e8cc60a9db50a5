//! Process exit codes and the error type that carries them.

use std::process::ExitCode;

use rasterkit_core::{OperationError, RasterError};

/// Why a run failed, mapped one-to-one onto a process exit code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Failure {
    /// Input or output filename missing, or other usage error.
    MissingFilename = 1,
    /// The input file cannot be opened.
    OpenFailed = 2,
    /// The input cannot be decoded as a PPM image.
    InvalidPpm = 3,
    /// The operation name is not supported.
    InvalidOperation = 4,
    /// The operation got the wrong number of arguments.
    InvalidOperationArgs = 5,
    /// An operation argument is malformed or out of range.
    OperationArgsRange = 6,
    /// The output file cannot be opened or written.
    WriteFailed = 7,
    /// Anything else, such as an allocation failure.
    Unspecified = 8,
}

impl Failure {
    pub fn code(self) -> u8 {
        self as u8
    }
}

impl From<Failure> for ExitCode {
    fn from(failure: Failure) -> Self {
        ExitCode::from(failure.code())
    }
}

/// An error paired with the exit code it should produce.
#[derive(Debug, thiserror::Error)]
#[error("{source:#}")]
pub struct CliError {
    pub failure: Failure,
    #[source]
    pub source: anyhow::Error,
}

impl CliError {
    pub fn new(failure: Failure, source: impl Into<anyhow::Error>) -> Self {
        Self {
            failure,
            source: source.into(),
        }
    }
}

impl From<OperationError> for CliError {
    fn from(err: OperationError) -> Self {
        let failure = match err {
            OperationError::UnknownOperation(_) => Failure::InvalidOperation,
            OperationError::WrongArgumentCount { .. } => Failure::InvalidOperationArgs,
            OperationError::ArgumentRange { .. } => Failure::OperationArgsRange,
        };
        CliError::new(failure, err)
    }
}

/// Map a transform failure to its exit code.
pub fn transform_failure(err: RasterError) -> CliError {
    let failure = match err {
        RasterError::ArgumentRange { .. } => Failure::OperationArgsRange,
        _ => Failure::Unspecified,
    };
    CliError::new(failure, err)
}
