// Similarity measures: Jaccard set overlap and cosine relevance.

pub mod cosine;
pub mod jaccard;
pub mod vector;
