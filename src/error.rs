// Error kinds for text loading and similarity scoring.
//
// Library functions return `SimilarityError` so callers and tests can match on
// the exact failure. The binary wraps these in anyhow with extra context.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SimilarityError {
    /// A required input file is missing or unreadable.
    #[error("Failed to read {}: {source}", .path.display())]
    Resource {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A reference file was readable but malformed.
    #[error("Malformed input in {} (line {line}): {message}", .path.display())]
    Parse {
        path: PathBuf,
        line: usize,
        message: String,
    },

    /// A ratio or cosine had a zero denominator.
    #[error("Division by zero: {context}")]
    DivisionByZero { context: &'static str },

    /// Two vectors of different length were compared.
    #[error("Dimension mismatch: left vector has {left} components, right has {right}")]
    DimensionMismatch { left: usize, right: usize },

    /// A vector component was NaN or infinite.
    #[error("Non-finite component at index {index} of the {side} vector")]
    NonFinite { side: &'static str, index: usize },

    /// A lemma dictionary maps a form back onto itself through other entries.
    #[error("Lemma dictionary has a cycle through '{form}'")]
    LemmaCycle { form: String },

    /// The dictionary normalizer was selected with no dictionary file and
    /// none ships for the language.
    #[error("No bundled lemma dictionary for {language}; pass one explicitly")]
    NoBundledDictionary { language: &'static str },

    #[error("Topic '{topic}' has no keywords")]
    EmptyKeywords { topic: String },

    #[error("Document contains no words after stopword removal and normalization")]
    EmptyDocument,
}

impl SimilarityError {
    /// Wrap an io::Error for the file at `path`.
    pub fn resource(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        SimilarityError::Resource {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, SimilarityError>;
