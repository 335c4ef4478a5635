//! Unified error type for all hermes operations.

/// Error type for hermes operations.
///
/// The surface is deliberately small: the logger itself never fails — sink
/// writes are the only fallible operation, and the fan-out loop ignores
/// their results by contract.
#[derive(Debug)]
pub enum Error {
    /// I/O error from an underlying sink.
    Io(std::io::Error),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
