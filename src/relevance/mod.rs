// src/relevance/mod.rs
//! Job-posting keyword extraction and relevance-based reordering.

pub mod keywords;
pub mod scorer;
pub mod tokenizer;

pub use keywords::KeywordExtractor;
pub use scorer::{reorder_by_relevance, score_text};

use std::collections::HashSet;

/// Lowercase tokens extracted from a job posting, scoped to one request.
pub type KeywordSet = HashSet<String>;
