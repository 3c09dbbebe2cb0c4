// Normalizer backends and the stopword-filter-then-normalize step.
//
// Three backends implement the Normalizer trait:
//   - DictionaryNormalizer: lemma lookup, bundled or from a reference file (default)
//   - SnowballNormalizer: Snowball stemming via rust-stemmers
//   - IdentityNormalizer: token unchanged (tests, pre-lemmatized input)

use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::Path;

use rust_stemmers::Stemmer;
use tracing::debug;

use super::traits::Normalizer;
use super::{Language, WordSet};
use crate::error::{Result, SimilarityError};

/// Filter stopwords out of `tokens`, reduce the rest to base forms, and
/// collapse them into a set.
///
/// Stopword matching is exact and happens before normalization, on the
/// lowercase surface form.
pub fn normalize<S: AsRef<str>>(
    tokens: &[S],
    stopwords: &HashSet<String>,
    normalizer: &dyn Normalizer,
) -> WordSet {
    tokens
        .iter()
        .map(AsRef::<str>::as_ref)
        .filter(|token| !stopwords.contains(*token))
        .map(|token| normalizer.base_form(token))
        .filter(|base| !base.is_empty())
        .collect()
}

/// Returns every token unchanged.
#[derive(Debug, Default, Clone, Copy)]
pub struct IdentityNormalizer;

impl Normalizer for IdentityNormalizer {
    fn base_form(&self, token: &str) -> String {
        token.to_string()
    }

    fn name(&self) -> &'static str {
        "identity"
    }
}

/// Snowball stemmer for one language.
///
/// Produces stems rather than dictionary words. A single Snowball pass is not
/// stable (`событие` -> `событ` -> `соб`), so the stemmer is reapplied until
/// the output stops changing.
pub struct SnowballNormalizer {
    stemmer: Stemmer,
}

impl SnowballNormalizer {
    pub fn new(language: Language) -> Self {
        Self {
            stemmer: Stemmer::create(language.stemmer_algorithm()),
        }
    }
}

impl Normalizer for SnowballNormalizer {
    fn base_form(&self, token: &str) -> String {
        let mut current = token.to_string();
        loop {
            let next = self.stemmer.stem(&current);
            // Stems never grow; stop once a pass removes nothing
            if next.is_empty() || next.len() >= current.len() {
                return current;
            }
            current = next.into_owned();
        }
    }

    fn name(&self) -> &'static str {
        "snowball"
    }
}

/// Dictionary lemmatizer backed by `form lemma` pairs.
///
/// Forms not present in the dictionary pass through unchanged. Chains such as
/// `a -> b, b -> c` are collapsed when the dictionary is built, so every
/// lemma it returns maps to itself.
#[derive(Debug, Default, Clone)]
pub struct DictionaryNormalizer {
    lemmas: HashMap<String, String>,
}

impl DictionaryNormalizer {
    /// Load a lemma dictionary file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| SimilarityError::resource(path, e))?;
        let dict = Self::parse(&content, path)?;

        debug!(path = %path.display(), entries = dict.len(), "Loaded lemma dictionary");
        Ok(dict)
    }

    /// The dictionary shipped with the crate for `language`.
    pub fn bundled(language: Language) -> Result<Self> {
        let content = language
            .bundled_lemmas()
            .ok_or(SimilarityError::NoBundledDictionary {
                language: language.name(),
            })?;
        let origin = format!("<bundled {} lemmas>", language.name());
        let dict = Self::parse(content, Path::new(&origin))?;

        debug!(language = language.name(), entries = dict.len(), "Loaded bundled lemma dictionary");
        Ok(dict)
    }

    /// Parse dictionary text read from `origin`.
    ///
    /// One entry per line: a word form and its lemma separated by a tab or
    /// spaces. Blank lines and lines starting with `#` are skipped.
    pub fn parse(content: &str, origin: &Path) -> Result<Self> {
        let mut lemmas = HashMap::new();
        for (idx, line) in content.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let mut fields = line.split_whitespace();
            match (fields.next(), fields.next()) {
                (Some(form), Some(lemma)) => {
                    lemmas.insert(form.to_lowercase(), lemma.to_lowercase());
                }
                _ => {
                    return Err(SimilarityError::Parse {
                        path: origin.to_path_buf(),
                        line: idx + 1,
                        message: format!("expected '<form> <lemma>', got '{line}'"),
                    });
                }
            }
        }

        Ok(Self {
            lemmas: resolve_chains(lemmas)?,
        })
    }

    /// Build a dictionary from in-memory pairs.
    pub fn from_pairs<I, F, L>(pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (F, L)>,
        F: Into<String>,
        L: Into<String>,
    {
        let lemmas = pairs
            .into_iter()
            .map(|(form, lemma)| (form.into(), lemma.into()))
            .collect();
        Ok(Self {
            lemmas: resolve_chains(lemmas)?,
        })
    }

    pub fn len(&self) -> usize {
        self.lemmas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lemmas.is_empty()
    }
}

impl Normalizer for DictionaryNormalizer {
    fn base_form(&self, token: &str) -> String {
        self.lemmas
            .get(token)
            .cloned()
            .unwrap_or_else(|| token.to_string())
    }

    fn name(&self) -> &'static str {
        "dictionary"
    }
}

// Point every form at the end of its lemma chain.
fn resolve_chains(mut lemmas: HashMap<String, String>) -> Result<HashMap<String, String>> {
    lemmas.retain(|form, lemma| form != lemma);

    let mut resolved = HashMap::with_capacity(lemmas.len());
    for (form, first) in &lemmas {
        let mut seen: HashSet<&str> = HashSet::from([form.as_str()]);
        let mut lemma = first;
        while let Some(next) = lemmas.get(lemma) {
            if !seen.insert(lemma.as_str()) {
                return Err(SimilarityError::LemmaCycle { form: form.clone() });
            }
            lemma = next;
        }
        resolved.insert(form.clone(), lemma.clone());
    }
    Ok(resolved)
}
