//! Error types for the lexicon
//!
//! Only load-time conditions are errors. Empty queries, zero-result searches,
//! dangling references and unplaceable span tags are ordinary results.

use std::path::PathBuf;

use crate::types::EntityKind;

/// Result type used throughout the crate
pub type LexiconResult<T> = Result<T, LexiconError>;

/// Errors raised while loading a snapshot or serving a request
#[derive(Debug, thiserror::Error)]
pub enum LexiconError {
    /// A raw document lacks the mandatory identifier of its kind.
    /// Aborts the whole snapshot: no partial dataset is accepted.
    #[error("{kind} document is missing its identifier ({origin})")]
    MissingIdentifier { kind: EntityKind, origin: String },

    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {}: {source}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid manifest: {0}")]
    InvalidManifest(String),

    #[error("unknown entry: {0}")]
    UnknownEntity(String),

    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A response could not be encoded. Always a server fault.
    #[error("failed to serialize response: {0}")]
    Serialization(#[source] serde_json::Error),
}

impl LexiconError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub fn json(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        Self::Json {
            path: path.into(),
            source,
        }
    }

    /// Short machine-readable code for API responses
    pub fn code(&self) -> &'static str {
        match self {
            LexiconError::MissingIdentifier { .. } => "MISSING_IDENTIFIER",
            LexiconError::Io { .. } => "IO_ERROR",
            LexiconError::Json { .. } => "PARSE_ERROR",
            LexiconError::InvalidManifest(_) => "INVALID_MANIFEST",
            LexiconError::UnknownEntity(_) => "NOT_FOUND",
            LexiconError::InvalidArgument(_) => "BAD_REQUEST",
            LexiconError::Serialization(_) => "INTERNAL_ERROR",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_identifier_message() {
        let err = LexiconError::MissingIdentifier {
            kind: EntityKind::Frame,
            origin: "data/frames/motion.json".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "frame document is missing its identifier (data/frames/motion.json)"
        );
        assert_eq!(err.code(), "MISSING_IDENTIFIER");
    }

    #[test]
    fn test_unknown_entity_code() {
        let err = LexiconError::UnknownEntity("lu:ghost".to_string());
        assert_eq!(err.code(), "NOT_FOUND");
        assert!(err.to_string().contains("lu:ghost"));
    }
}
