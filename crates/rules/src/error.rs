use thiserror::Error;

/// Closed set of failure kinds attached to every error that crosses the
/// service boundary.
///
/// The HTTP layer maps codes to status codes and never inspects the
/// underlying cause. Kinds are stable and never combined.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// The requested data does not exist.
    NotFound,
    /// Caller input is malformed.
    InvalidArgument,
    /// Anything unclassified, including I/O and parse failures.
    Unknown,
}

/// Errors that can occur while loading rules from disk.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Reading the rules path or a file under it failed.
    #[error("io error: {0}")]
    Io(String),

    /// A rule file did not parse.
    #[error("parse error: {0}")]
    Parse(String),
}

/// Errors returned by the repository layer.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// The load completed with zero rules.
    #[error("no gathering rules loaded")]
    Empty,

    /// A storage-level failure.
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// A typed error as surfaced by the service layer.
///
/// Lower layers may return loosely-typed errors; [`crate::Service`] is
/// the single normalization point, so every variant here carries
/// exactly one [`ErrorCode`]. Callers match on the variant rather than
/// downcasting.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// The requested data does not exist.
    #[error("{0}")]
    NotFound(String),

    /// Caller input is malformed.
    #[error("{0}")]
    InvalidArgument(String),

    /// Unclassified failure, optionally wrapping the underlying cause.
    #[error("{message}")]
    Unknown {
        /// Human-readable description of the failure.
        message: String,
        /// The wrapped lower-level cause, when one exists.
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl ServiceError {
    /// The failure kind driving the HTTP status mapping.
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::NotFound(_) => ErrorCode::NotFound,
            Self::InvalidArgument(_) => ErrorCode::InvalidArgument,
            Self::Unknown { .. } => ErrorCode::Unknown,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_match_variants() {
        assert_eq!(
            ServiceError::NotFound("x".to_owned()).code(),
            ErrorCode::NotFound
        );
        assert_eq!(
            ServiceError::InvalidArgument("x".to_owned()).code(),
            ErrorCode::InvalidArgument
        );
        assert_eq!(
            ServiceError::Unknown {
                message: "x".to_owned(),
                source: None,
            }
            .code(),
            ErrorCode::Unknown
        );
    }

    #[test]
    fn unknown_preserves_the_wrapped_cause() {
        let err = ServiceError::Unknown {
            message: "failed to read gathering rules".to_owned(),
            source: Some(Box::new(StorageError::Parse("bad file".to_owned()))),
        };
        let cause = std::error::Error::source(&err).expect("cause should be present");
        assert_eq!(cause.to_string(), "parse error: bad file");
    }
}
