//! Substring-overlap retrieval over stored documents
//!
//! A query is split into keywords on whitespace and sentence punctuation. Each
//! document scores one point per keyword (repeats included) found anywhere in its
//! lowercased content. No tokenization of the documents themselves is needed, so
//! CJK text without spaces matches as well as Latin text.

use crate::config::RetrievalConfig;
use crate::types::{Document, RetrievalResult};

/// Characters that separate query keywords besides whitespace
const QUERY_SEPARATORS: &[char] = &[',', '，', '。', '、', '？', '?', '！', '!'];

/// Lexical retrieval engine
#[derive(Debug, Clone)]
pub struct RetrievalEngine {
    max_results: usize,
    snippet_chars: usize,
}

impl Default for RetrievalEngine {
    fn default() -> Self {
        Self::new(&RetrievalConfig::default())
    }
}

impl RetrievalEngine {
    pub fn new(config: &RetrievalConfig) -> Self {
        Self {
            max_results: config.max_results,
            snippet_chars: config.snippet_chars,
        }
    }

    /// Lowercased, non-empty query keywords in query order
    pub fn query_keywords(query: &str) -> Vec<String> {
        query
            .to_lowercase()
            .split(|c: char| c.is_whitespace() || QUERY_SEPARATORS.contains(&c))
            .filter(|k| !k.is_empty())
            .map(str::to_string)
            .collect()
    }

    /// Number of keywords contained in the document content
    pub fn score(keywords: &[String], document: &Document) -> usize {
        let content = document.content.to_lowercase();
        keywords
            .iter()
            .filter(|keyword| content.contains(keyword.as_str()))
            .count()
    }

    /// Rank documents against the query; `None` when nothing matches
    pub fn retrieve(&self, query: &str, documents: &[Document]) -> Option<RetrievalResult> {
        if documents.is_empty() {
            return None;
        }

        let keywords = Self::query_keywords(query);
        if keywords.is_empty() {
            return None;
        }

        let mut scored: Vec<(usize, &Document)> = documents
            .iter()
            .map(|doc| (Self::score(&keywords, doc), doc))
            .filter(|(score, _)| *score > 0)
            .collect();

        if scored.is_empty() {
            tracing::debug!("No document matched {} keywords", keywords.len());
            return None;
        }

        // Stable: equal scores keep store order
        scored.sort_by(|a, b| b.0.cmp(&a.0));
        scored.truncate(self.max_results);

        let answer = scored
            .iter()
            .map(|(_, doc)| format!("{}: {}…", doc.title, doc.snippet(self.snippet_chars)))
            .collect::<Vec<_>>()
            .join("\n\n");

        let citations = scored.iter().map(|(_, doc)| doc.title.clone()).collect();

        Some(RetrievalResult { answer, citations })
    }
}
