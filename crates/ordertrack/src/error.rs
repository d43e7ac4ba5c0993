#![forbid(unsafe_code)]

//! Application-level errors.

use std::fmt;
use std::io;

use ordertrack_core::SourceError;

/// Everything that can stop the dashboard from starting or running.
#[derive(Debug)]
pub enum Error {
    /// A command-line or environment value could not be used.
    Config(String),
    /// Orders could not be loaded.
    Source(SourceError),
    /// Terminal or output failure.
    Io(io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(msg) => write!(f, "configuration error: {msg}"),
            Self::Source(err) => write!(f, "{err}"),
            Self::Io(err) => write!(f, "I/O error: {err}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Config(_) => None,
            Self::Source(err) => Some(err),
            Self::Io(err) => Some(err),
        }
    }
}

impl From<SourceError> for Error {
    fn from(err: SourceError) -> Self {
        Self::Source(err)
    }
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        Self::Io(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;
    use std::path::PathBuf;

    #[test]
    fn display() {
        assert_eq!(
            Error::Config("bad --width".into()).to_string(),
            "configuration error: bad --width"
        );
        let io = Error::from(io::Error::other("broken pipe"));
        assert_eq!(io.to_string(), "I/O error: broken pipe");
    }

    #[test]
    fn source_error_is_chained() {
        let err = Error::from(SourceError::Io {
            path: PathBuf::from("pedidos.json"),
            source: io::Error::from(io::ErrorKind::NotFound),
        });
        assert!(err.to_string().contains("pedidos.json"));
        assert!(err.source().is_some());
    }
}
