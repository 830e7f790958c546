//! Ingested documents

use serde::{Deserialize, Serialize};

/// Fixed id of the aggregated sheet document; reused so a re-import replaces it
pub const SHEETS_DOCUMENT_ID: &str = "google-sheets";
/// Title of the aggregated sheet document
pub const SHEETS_DOCUMENT_TITLE: &str = "Google Sheets knowledge base";

/// Origin label for text pasted in by hand
pub const ORIGIN_MANUAL: &str = "Manual entry";
/// Origin label for built-in samples
pub const ORIGIN_SAMPLE: &str = "Sample";
/// Origin label for aggregated sheet content
pub const ORIGIN_SHEETS: &str = "Sheets import";

/// A document held in the knowledge store
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Document {
    /// Unique id, the upsert key
    pub id: String,
    /// Display title, also used as the citation
    pub title: String,
    /// Full text content
    pub content: String,
    /// Number of non-whitespace characters in `content`
    pub word_count: usize,
    /// Where the document came from
    pub origin_label: String,
    /// When this version was stored
    pub created_at: chrono::DateTime<chrono::Utc>,
}

/// Caller-supplied fields of a document; the rest is derived at upsert time
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NewDocument {
    pub id: String,
    pub title: String,
    pub content: String,
    pub origin_label: String,
}

impl NewDocument {
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        content: impl Into<String>,
        origin_label: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            content: content.into(),
            origin_label: origin_label.into(),
        }
    }
}

impl Document {
    /// Stamp a new document with its derived fields
    pub fn from_new(new: NewDocument) -> Self {
        let word_count = count_visible_chars(&new.content);
        Self {
            id: new.id,
            title: new.title,
            content: new.content,
            word_count,
            origin_label: new.origin_label,
            created_at: chrono::Utc::now(),
        }
    }

    /// First `max_chars` characters of the content
    pub fn snippet(&self, max_chars: usize) -> String {
        self.content.chars().take(max_chars).collect()
    }
}

/// Count of characters that are not whitespace (a character count, not a token count)
pub fn count_visible_chars(text: &str) -> usize {
    text.chars().filter(|c| !c.is_whitespace()).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_word_count_ignores_whitespace() {
        let doc = Document::from_new(NewDocument::new(
            "manual-1",
            "Notes",
            "ab c\n\td  ef",
            ORIGIN_MANUAL,
        ));
        assert_eq!(doc.word_count, 6);
    }

    #[test]
    fn test_word_count_counts_cjk_characters() {
        assert_eq!(count_visible_chars("客服 流程"), 4);
    }

    #[test]
    fn test_snippet_is_char_based() {
        let doc = Document::from_new(NewDocument::new("x", "t", "知識庫整合", ORIGIN_SAMPLE));
        assert_eq!(doc.snippet(3), "知識庫");
        assert_eq!(doc.snippet(100), "知識庫整合");
    }
}
