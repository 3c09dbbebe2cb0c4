// Text processing: tokenization, stopword filtering, base-form normalization.

pub mod normalizer;
pub mod stopwords;
pub mod tokenizer;
pub mod traits;

use std::collections::BTreeSet;
use std::str::FromStr;

use rust_stemmers::Algorithm;
use stop_words::LANGUAGE;

/// A set of unique normalized words. Ordered so reports print deterministically.
pub type WordSet = BTreeSet<String>;

/// Lemma dictionary shipped with the crate for Russian text.
const RUSSIAN_LEMMAS: &str = include_str!("../../data/lemmas_ru.tsv");

/// Document language: selects the stemmer, the built-in stopword list and
/// the bundled lemma dictionary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    Russian,
    English,
}

impl Language {
    pub fn stemmer_algorithm(self) -> Algorithm {
        match self {
            Language::Russian => Algorithm::Russian,
            Language::English => Algorithm::English,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Language::Russian => "russian",
            Language::English => "english",
        }
    }

    /// Contents of the bundled `form lemma` dictionary, if one ships for
    /// this language.
    pub fn bundled_lemmas(self) -> Option<&'static str> {
        match self {
            Language::Russian => Some(RUSSIAN_LEMMAS),
            Language::English => None,
        }
    }

    pub fn stop_words_language(self) -> LANGUAGE {
        match self {
            Language::Russian => LANGUAGE::Russian,
            Language::English => LANGUAGE::English,
        }
    }
}

impl FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "ru" | "russian" => Ok(Language::Russian),
            "en" | "english" => Ok(Language::English),
            other => Err(format!("unsupported language '{other}' (expected ru or en)")),
        }
    }
}
