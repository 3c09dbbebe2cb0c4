// Jaccard similarity between the document's word set and one topic.
//
//   coefficient = |words ∩ keywords| / |words ∪ keywords|
//
// 0.0 means no shared words, 1.0 means the two sets are identical. The
// intersection is returned too so the report can show which words matched.

use serde::Serialize;

use crate::error::{Result, SimilarityError};
use crate::text::WordSet;

/// Jaccard result for one topic.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct JaccardScore {
    /// Words present in both the document and the topic
    pub intersection: WordSet,
    /// Size of the union of both sets
    pub union_size: usize,
    /// |intersection| / |union|, in [0, 1]
    pub coefficient: f64,
}

/// Compute the Jaccard coefficient between two word sets.
///
/// Fails with `DivisionByZero` when both sets are empty.
pub fn jaccard(words: &WordSet, keywords: &WordSet) -> Result<JaccardScore> {
    let intersection: WordSet = words.intersection(keywords).cloned().collect();
    let union_size = words.union(keywords).count();

    if union_size == 0 {
        return Err(SimilarityError::DivisionByZero {
            context: "Jaccard coefficient of two empty sets",
        });
    }

    let coefficient = intersection.len() as f64 / union_size as f64;

    Ok(JaccardScore {
        intersection,
        union_size,
        coefficient,
    })
}
