// Pipeline: end-to-end classification of one document against all topics.

pub mod classify;
