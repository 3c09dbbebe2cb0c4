// topicsim: topic relevance of a document via Jaccard and cosine similarity
//
// This is the library root. Each module corresponds to one stage of the
// classification pipeline.

pub mod config;
pub mod error;
pub mod output;
pub mod pipeline;
pub mod similarity;
pub mod text;
pub mod topics;
