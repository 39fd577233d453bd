use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// Stopword file, corpus directory or config file missing, unreadable or invalid.
    #[error("configuration error: {}: {}", .path.display(), .reason)]
    Configuration { path: PathBuf, reason: String },

    /// A corpus file that cannot be mapped to a document identifier.
    #[error("malformed corpus: {}: {}", .path.display(), .reason)]
    MalformedCorpus { path: PathBuf, reason: String },

    /// A document unreadable under both the primary and the fallback encoding.
    #[error("cannot decode {}: {}", .path.display(), .source)]
    Decode {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Structurally invalid boolean expression.
    #[error("malformed query: {0}")]
    MalformedQuery(String),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub fn configuration(path: impl Into<PathBuf>, reason: impl ToString) -> Self {
        Error::Configuration { path: path.into(), reason: reason.to_string() }
    }

    pub fn malformed_corpus(path: impl Into<PathBuf>, reason: impl ToString) -> Self {
        Error::MalformedCorpus { path: path.into(), reason: reason.to_string() }
    }
}
