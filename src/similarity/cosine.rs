// Cosine relevance of a document against an ordered list of topics.
//
// 1. Count how many document words each topic shares: c_i = |words ∩ topic_i|
// 2. Normalize by the largest count: v_i = c_i / max(c)
// 3. Score topic i as cosine(v, e_i), where e_i is the one-hot basis vector
//
// Against a one-hot vector this reduces to v_i / |v|, but the score goes
// through the generic cosine primitive so other comparison vectors work too.
//
// When no topic shares any word with the document, max(c) = 0 and the
// relevance vector is all-zero. Every topic then scores 0.0.

use tracing::warn;

use super::vector::cosine;
use crate::error::Result;
use crate::text::WordSet;
use crate::topics::Topic;

/// Number of document words shared with each topic, in topic order.
pub fn overlap_counts(words: &WordSet, topics: &[Topic]) -> Vec<usize> {
    topics
        .iter()
        .map(|topic| words.intersection(&topic.keywords).count())
        .collect()
}

/// Normalize overlap counts by their maximum.
///
/// Returns `None` when every count is zero.
pub fn relevance_vector(counts: &[usize]) -> Option<Vec<f64>> {
    let max = counts.iter().copied().max().unwrap_or(0);
    if max == 0 {
        return None;
    }

    let max = max as f64;
    Some(counts.iter().map(|&c| c as f64 / max).collect())
}

/// The `n`-dimensional one-hot vector with 1.0 at `index`.
pub fn basis_vector(n: usize, index: usize) -> Vec<f64> {
    let mut v = vec![0.0; n];
    if let Some(slot) = v.get_mut(index) {
        *slot = 1.0;
    }
    v
}

/// Cosine similarity between the document's relevance vector and each
/// topic's basis vector, in topic order.
pub fn cosine_scores(words: &WordSet, topics: &[Topic]) -> Result<Vec<f64>> {
    let counts = overlap_counts(words, topics);

    let Some(relevance) = relevance_vector(&counts) else {
        if !topics.is_empty() {
            warn!(
                topics = topics.len(),
                "Document shares no words with any topic, all cosine scores are 0"
            );
        }
        return Ok(vec![0.0; topics.len()]);
    };

    (0..topics.len())
        .map(|i| cosine(&relevance, &basis_vector(topics.len(), i)))
        .collect()
}
