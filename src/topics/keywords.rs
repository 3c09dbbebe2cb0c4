// Keyword lists: one whitespace-delimited file per topic.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{Result, SimilarityError};
use crate::text::traits::Normalizer;
use crate::text::WordSet;

/// A named keyword set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Topic {
    pub name: String,
    pub keywords: WordSet,
}

impl Topic {
    /// Build a topic from in-memory keywords.
    ///
    /// Fails when the keyword set is empty: a topic with no keywords could
    /// produce an empty Jaccard union.
    pub fn new<I, S>(name: impl Into<String>, keywords: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let name = name.into();
        let keywords: WordSet = keywords.into_iter().map(Into::into).collect();
        if keywords.is_empty() {
            return Err(SimilarityError::EmptyKeywords { topic: name });
        }
        Ok(Self { name, keywords })
    }

    /// Load a topic's keywords from `path`.
    pub fn load(name: impl Into<String>, path: &Path) -> Result<Self> {
        let topic = Self::new(name, load_keywords(path)?)?;
        debug!(
            topic = %topic.name,
            path = %path.display(),
            keywords = topic.keywords.len(),
            "Loaded topic keywords"
        );
        Ok(topic)
    }

    /// Map every keyword through `normalizer`, so keywords and document words
    /// are reduced the same way.
    pub fn normalized(&self, normalizer: &dyn Normalizer) -> Self {
        Self {
            name: self.name.clone(),
            keywords: self
                .keywords
                .iter()
                .map(|k| normalizer.base_form(k))
                .filter(|k| !k.is_empty())
                .collect(),
        }
    }
}

/// Read a whitespace-delimited keyword file into a set.
pub fn load_keywords(path: &Path) -> Result<WordSet> {
    let content = fs::read_to_string(path).map_err(|e| SimilarityError::resource(path, e))?;
    Ok(content.split_whitespace().map(str::to_string).collect())
}
