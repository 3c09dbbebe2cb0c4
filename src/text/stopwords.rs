// Stopword lists: from a whitespace-separated file or the stop-words crate.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use stop_words::get;
use tracing::debug;

use super::Language;
use crate::error::{Result, SimilarityError};

/// Read a whitespace-separated stopword file into a set.
///
/// Entries are kept exactly as written. Tokens are lowercase, so an entry
/// with capitals never matches.
pub fn load_stopwords(path: &Path) -> Result<HashSet<String>> {
    let content = fs::read_to_string(path).map_err(|e| SimilarityError::resource(path, e))?;
    let stopwords: HashSet<String> = content.split_whitespace().map(str::to_string).collect();

    debug!(path = %path.display(), count = stopwords.len(), "Loaded stopwords");
    Ok(stopwords)
}

/// The built-in stopword list for `language`.
pub fn builtin_stopwords(language: Language) -> HashSet<String> {
    get(language.stop_words_language())
        .into_iter()
        .map(|w| w.to_lowercase())
        .collect()
}
