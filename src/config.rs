use std::env;
use std::path::PathBuf;
use std::str::FromStr;

use anyhow::{Context, Result};

use crate::text::Language;

/// Default topic list, in report order.
pub const DEFAULT_TOPICS: &str = "science=science_keywords.txt,sport=sport_keywords.txt,\
                                  shopping=shopping_keywords.txt,news=news_keywords.txt";

/// Which base-form normalizer to use.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NormalizerBackend {
    /// Tokens are used as-is
    Identity,
    /// Snowball stemmer for the configured language; yields stems, not words
    Snowball,
    /// Lemma lookup (default): TOPICSIM_LEMMA_DICT, or the bundled dictionary
    Dictionary,
}

impl FromStr for NormalizerBackend {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "identity" | "none" => Ok(NormalizerBackend::Identity),
            "snowball" | "stem" => Ok(NormalizerBackend::Snowball),
            "dictionary" | "dict" => Ok(NormalizerBackend::Dictionary),
            other => Err(format!(
                "unknown normalizer '{other}' (expected identity, snowball or dictionary)"
            )),
        }
    }
}

/// Where stopwords come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StopwordSource {
    /// Whitespace-separated file
    File(PathBuf),
    /// The stop-words crate list for the configured language
    Builtin,
}

/// One topic: a display name and the keyword file it is loaded from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopicSource {
    pub name: String,
    pub path: PathBuf,
}

/// Run configuration loaded from environment variables.
///
/// The .env file is loaded at startup via dotenvy; CLI flags in main.rs
/// override individual fields afterwards.
#[derive(Debug, Clone)]
pub struct Config {
    pub text_path: PathBuf,
    pub stopwords: StopwordSource,
    /// Topics in report order
    pub topics: Vec<TopicSource>,
    pub normalizer: NormalizerBackend,
    /// Lemma dictionary for the dictionary normalizer; unset means bundled
    pub lemma_dict: Option<PathBuf>,
    pub language: Language,
    /// Run keywords through the same normalizer as the document
    pub normalize_keywords: bool,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a config from any key lookup. `load` passes the process
    /// environment; tests pass a map.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let stopwords = if is_truthy(lookup("TOPICSIM_BUILTIN_STOPWORDS").as_deref()) {
            StopwordSource::Builtin
        } else {
            StopwordSource::File(PathBuf::from(
                lookup("TOPICSIM_STOPWORDS").unwrap_or_else(|| "stopwords_ru.txt".to_string()),
            ))
        };

        let topics = parse_topic_list(
            &lookup("TOPICSIM_TOPICS").unwrap_or_else(|| DEFAULT_TOPICS.to_string()),
        )
        .context("Invalid TOPICSIM_TOPICS")?;

        let normalizer = match lookup("TOPICSIM_NORMALIZER") {
            Some(value) => value
                .parse::<NormalizerBackend>()
                .map_err(anyhow::Error::msg)?,
            None => NormalizerBackend::Dictionary,
        };

        let language = match lookup("TOPICSIM_LANGUAGE") {
            Some(value) => value.parse::<Language>().map_err(anyhow::Error::msg)?,
            None => Language::Russian,
        };

        Ok(Self {
            text_path: PathBuf::from(
                lookup("TOPICSIM_TEXT").unwrap_or_else(|| "text.txt".to_string()),
            ),
            stopwords,
            topics,
            normalizer,
            lemma_dict: lookup("TOPICSIM_LEMMA_DICT").map(PathBuf::from),
            language,
            normalize_keywords: !is_truthy(lookup("TOPICSIM_RAW_KEYWORDS").as_deref()),
        })
    }

    /// Check that the chosen normalizer has what it needs.
    /// For Dictionary: a lemma dictionary path, or a bundled one for the language.
    pub fn require_normalizer(&self) -> Result<()> {
        if self.normalizer == NormalizerBackend::Dictionary
            && self.lemma_dict.is_none()
            && self.language.bundled_lemmas().is_none()
        {
            anyhow::bail!(
                "No bundled lemma dictionary for {}.\n\
                 Set TOPICSIM_LEMMA_DICT or pass --lemma-dict <path>.",
                self.language.name()
            );
        }
        Ok(())
    }

    /// Check that at least one topic is configured.
    pub fn require_topics(&self) -> Result<()> {
        if self.topics.is_empty() {
            anyhow::bail!("No topics configured. Set TOPICSIM_TOPICS or pass --topic name=path.");
        }
        Ok(())
    }
}

/// Parse a single `name=path` topic spec.
pub fn parse_topic_spec(spec: &str) -> Result<TopicSource> {
    let (name, path) = spec
        .split_once('=')
        .with_context(|| format!("Topic '{spec}' must look like name=path"))?;

    let (name, path) = (name.trim(), path.trim());
    if name.is_empty() || path.is_empty() {
        anyhow::bail!("Topic '{spec}' has an empty name or path");
    }

    Ok(TopicSource {
        name: name.to_string(),
        path: PathBuf::from(path),
    })
}

/// Parse a comma-separated list of `name=path` topic specs.
pub fn parse_topic_list(list: &str) -> Result<Vec<TopicSource>> {
    let topics: Vec<TopicSource> = list
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(parse_topic_spec)
        .collect::<Result<_>>()?;

    for (i, topic) in topics.iter().enumerate() {
        if topics[..i].iter().any(|t| t.name == topic.name) {
            anyhow::bail!("Topic '{}' is listed more than once", topic.name);
        }
    }

    Ok(topics)
}

fn is_truthy(value: Option<&str>) -> bool {
    matches!(
        value.map(|v| v.trim().to_lowercase()).as_deref(),
        Some("1" | "true" | "yes" | "on")
    )
}
