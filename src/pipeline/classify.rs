// Classification pipeline: load inputs once, score every topic, build a report.
//
// Steps:
//   1. Read the document, the stopwords and every keyword file (all up front)
//   2. Tokenize and normalize the document into a word set
//   3. Jaccard-score each topic independently
//   4. Cosine-score all topics together (the relevance vector spans topics)
//   5. Zip both into a ClassificationReport in topic order

use std::collections::HashSet;
use std::fs;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{debug, info};

use crate::config::{Config, NormalizerBackend, StopwordSource};
use crate::error::SimilarityError;
use crate::similarity::cosine::{cosine_scores, overlap_counts};
use crate::similarity::jaccard::{jaccard, JaccardScore};
use crate::text::normalizer::{
    normalize, DictionaryNormalizer, IdentityNormalizer, SnowballNormalizer,
};
use crate::text::stopwords::{builtin_stopwords, load_stopwords};
use crate::text::tokenizer::tokenize;
use crate::text::traits::Normalizer;
use crate::text::WordSet;
use crate::topics::Topic;

/// Everything the scorers need, loaded and normalized.
#[derive(Debug, Clone)]
pub struct ClassificationInput {
    /// The document's normalized word set
    pub words: WordSet,
    /// Topics in report order
    pub topics: Vec<Topic>,
}

/// Scores for one topic.
#[derive(Debug, Clone, Serialize)]
pub struct TopicScore {
    pub topic: String,
    pub jaccard: JaccardScore,
    /// Number of document words shared with this topic
    pub overlap: usize,
    pub cosine: f64,
}

/// The result of classifying one document.
#[derive(Debug, Clone, Serialize)]
pub struct ClassificationReport {
    pub generated_at: DateTime<Utc>,
    pub document_words: usize,
    pub topics: Vec<TopicScore>,
}

impl ClassificationReport {
    /// The topic with the highest Jaccard coefficient, if any is above zero.
    pub fn best_by_jaccard(&self) -> Option<&TopicScore> {
        best_by(&self.topics, |t| t.jaccard.coefficient)
    }

    /// The topic with the highest cosine score, if any is above zero.
    pub fn best_by_cosine(&self) -> Option<&TopicScore> {
        best_by(&self.topics, |t| t.cosine)
    }
}

// Ties go to the earliest topic.
fn best_by(topics: &[TopicScore], key: impl Fn(&TopicScore) -> f64) -> Option<&TopicScore> {
    topics
        .iter()
        .filter(|t| key(*t) > 0.0)
        .fold(None, |best: Option<&TopicScore>, t| match best {
            Some(b) if key(b) >= key(t) => Some(b),
            _ => Some(t),
        })
}

/// Create the base-form normalizer selected in the config.
pub fn build_normalizer(config: &Config) -> Result<Box<dyn Normalizer>> {
    config.require_normalizer()?;

    let normalizer: Box<dyn Normalizer> = match config.normalizer {
        NormalizerBackend::Identity => Box::new(IdentityNormalizer),
        NormalizerBackend::Snowball => Box::new(SnowballNormalizer::new(config.language)),
        NormalizerBackend::Dictionary => match config.lemma_dict.as_deref() {
            Some(path) => Box::new(DictionaryNormalizer::load(path)?),
            None => Box::new(DictionaryNormalizer::bundled(config.language)?),
        },
    };

    info!(normalizer = normalizer.name(), "Normalizer ready");
    Ok(normalizer)
}

impl ClassificationInput {
    /// Read every input file named in `config`, then normalize the document.
    pub fn load(config: &Config, normalizer: &dyn Normalizer) -> Result<Self> {
        config.require_topics()?;

        let (text, stopwords) = read_document(config)?;
        let topics = load_topics(config, normalizer)?;

        Self::from_text(&text, &stopwords, normalizer, topics)
    }

    /// Tokenize and normalize `text`, pairing it with already-loaded topics.
    pub fn from_text(
        text: &str,
        stopwords: &HashSet<String>,
        normalizer: &dyn Normalizer,
        topics: Vec<Topic>,
    ) -> Result<Self> {
        let words = document_words(text, stopwords, normalizer)?;
        Ok(Self { words, topics })
    }
}

/// Load only the document and stopwords, returning the normalized word set.
pub fn load_words(config: &Config, normalizer: &dyn Normalizer) -> Result<WordSet> {
    let (text, stopwords) = read_document(config)?;
    document_words(&text, &stopwords, normalizer)
}

/// Load every configured topic, normalizing keywords unless disabled.
pub fn load_topics(config: &Config, normalizer: &dyn Normalizer) -> Result<Vec<Topic>> {
    config
        .topics
        .iter()
        .map(|source| {
            let topic = Topic::load(&source.name, &source.path)
                .with_context(|| format!("Could not load topic '{}'", source.name))?;
            Ok(if config.normalize_keywords {
                topic.normalized(normalizer)
            } else {
                topic
            })
        })
        .collect()
}

/// Tokenize and normalize a document. Fails if nothing survives.
pub fn document_words(
    text: &str,
    stopwords: &HashSet<String>,
    normalizer: &dyn Normalizer,
) -> Result<WordSet> {
    let tokens = tokenize(text);
    let words = normalize(&tokens, stopwords, normalizer);

    info!(
        tokens = tokens.len(),
        words = words.len(),
        "Normalized document"
    );

    if words.is_empty() {
        return Err(SimilarityError::EmptyDocument.into());
    }

    Ok(words)
}

fn read_document(config: &Config) -> Result<(String, HashSet<String>)> {
    let text = fs::read_to_string(&config.text_path)
        .map_err(|e| SimilarityError::resource(&config.text_path, e))
        .context("Could not read the document")?;

    let stopwords = match &config.stopwords {
        StopwordSource::File(path) => {
            load_stopwords(path).context("Could not load the stopword list")?
        }
        StopwordSource::Builtin => builtin_stopwords(config.language),
    };

    Ok((text, stopwords))
}

/// Score the document against every topic.
pub fn classify(input: &ClassificationInput) -> Result<ClassificationReport> {
    let jaccard_scores = input
        .topics
        .iter()
        .map(|topic| {
            jaccard(&input.words, &topic.keywords)
                .with_context(|| format!("Jaccard scoring failed for topic '{}'", topic.name))
        })
        .collect::<Result<Vec<_>>>()?;

    let counts = overlap_counts(&input.words, &input.topics);
    let cosines = cosine_scores(&input.words, &input.topics).context("Cosine scoring failed")?;

    let topics: Vec<TopicScore> = input
        .topics
        .iter()
        .zip(jaccard_scores)
        .zip(counts.into_iter().zip(cosines))
        .map(|((topic, jaccard), (overlap, cosine))| {
            debug!(
                topic = %topic.name,
                jaccard = jaccard.coefficient,
                overlap,
                cosine,
                "Scored topic"
            );
            TopicScore {
                topic: topic.name.clone(),
                jaccard,
                overlap,
                cosine,
            }
        })
        .collect();

    let report = ClassificationReport {
        generated_at: Utc::now(),
        document_words: input.words.len(),
        topics,
    };

    info!(
        best_jaccard = report.best_by_jaccard().map(|t| t.topic.as_str()).unwrap_or("none"),
        best_cosine = report.best_by_cosine().map(|t| t.topic.as_str()).unwrap_or("none"),
        "Classification complete"
    );

    Ok(report)
}
