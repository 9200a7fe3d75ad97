//! Error types for label preparation.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LabelError {
    /// A label file could not be opened.
    #[error("Label file not found or unreadable: {path}")]
    MissingFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A transcript line that cannot be parsed into an utterance.
    #[error("Malformed line {line} in {path}: {reason}")]
    MalformedLine {
        path: PathBuf,
        line: usize,
        reason: String,
    },

    /// A transcript character that is absent from the vocabulary.
    /// The vocabulary is built from the same transcripts, so this is an internal inconsistency.
    #[error("Character {character:?} in transcript {transcript:?} is not in the vocabulary")]
    UnresolvedCharacter { character: char, transcript: String },

    /// A mapping file line that is not `<char>  <index>`.
    #[error("Invalid mapping entry on line {line} of {path}: {entry:?}")]
    InvalidMapping {
        path: PathBuf,
        line: usize,
        entry: String,
    },

    /// A built-in cleaning pattern failed to compile.
    #[error("Invalid cleaning pattern: {0}")]
    Pattern(#[from] regex::Error),

    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl LabelError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        LabelError::Io {
            path: path.into(),
            source,
        }
    }
}

/// Result type alias for label preparation.
pub type Result<T> = std::result::Result<T, LabelError>;
