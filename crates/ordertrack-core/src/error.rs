#![forbid(unsafe_code)]

//! Errors raised at the data-ingestion boundary.
//!
//! Only loading can fail. The derivation functions (stage, tone, dates,
//! filter) are total and degrade instead.

use std::fmt;
use std::io;
use std::path::PathBuf;

/// A problem found in a single record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A required text field is empty.
    EmptyField(&'static str),
    /// A date field is not ISO-8601.
    BadDate { field: &'static str, value: String },
    /// The stage label has no leading step number in range.
    BadStage(String),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyField(field) => write!(f, "field `{field}` is empty"),
            Self::BadDate { field, value } => {
                write!(f, "field `{field}` is not an ISO-8601 date: {value:?}")
            }
            Self::BadStage(label) => write!(f, "stage label has no valid step number: {label:?}"),
        }
    }
}

impl std::error::Error for ValidationError {}

/// Failure to produce an order book.
#[derive(Debug)]
pub enum SourceError {
    Io {
        path: PathBuf,
        source: io::Error,
    },
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
    /// Rejected by strict validation.
    Invalid {
        key: String,
        problem: ValidationError,
    },
}

impl fmt::Display for SourceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "cannot read orders from {}: {source}", path.display())
            }
            Self::Parse { path, source } => {
                write!(f, "invalid order file {}: {source}", path.display())
            }
            Self::Invalid { key, problem } => write!(f, "order {key}: {problem}"),
        }
    }
}

impl std::error::Error for SourceError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Parse { source, .. } => Some(source),
            Self::Invalid { problem, .. } => Some(problem),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn display_messages() {
        let e = SourceError::Invalid {
            key: "3101Don Geuroth".into(),
            problem: ValidationError::BadDate {
                field: "previsaoEntrega",
                value: "amanhã".into(),
            },
        };
        assert_eq!(
            e.to_string(),
            "order 3101Don Geuroth: field `previsaoEntrega` is not an ISO-8601 date: \"amanhã\""
        );
        assert!(e.source().is_some());
    }

    #[test]
    fn io_error_names_path() {
        let e = SourceError::Io {
            path: PathBuf::from("/tmp/orders.json"),
            source: io::Error::new(io::ErrorKind::NotFound, "gone"),
        };
        assert!(e.to_string().contains("/tmp/orders.json"));
    }
}
