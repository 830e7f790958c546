//! Keyword extraction and lexical retrieval

pub mod keywords;
pub mod search;

pub use keywords::KeywordExtractor;
pub use search::RetrievalEngine;
