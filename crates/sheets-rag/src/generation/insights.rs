//! Summary, topics and suggested questions over the whole store

use crate::config::InsightsConfig;
use crate::retrieval::KeywordExtractor;
use crate::types::{Document, Insights};

use super::questions::QuestionGenerator;

/// Summary text for an empty store
pub const EMPTY_SUMMARY: &str = "No content yet.";

/// Builds `Insights` from the current documents
#[derive(Debug, Clone)]
pub struct InsightsBuilder {
    config: InsightsConfig,
    extractor: KeywordExtractor,
    questions: QuestionGenerator,
}

impl Default for InsightsBuilder {
    fn default() -> Self {
        Self::new(InsightsConfig::default())
    }
}

impl InsightsBuilder {
    pub fn new(config: InsightsConfig) -> Self {
        Self {
            questions: QuestionGenerator::new(config.max_questions),
            extractor: KeywordExtractor::new(),
            config,
        }
    }

    /// `<title>: <prefix>…` for the first few documents
    pub fn summary(&self, documents: &[Document]) -> String {
        if documents.is_empty() {
            return EMPTY_SUMMARY.to_string();
        }

        documents
            .iter()
            .take(self.config.summary_sources)
            .map(|doc| format!("{}: {}…", doc.title, doc.snippet(self.config.summary_chars)))
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Keywords over every document's content
    pub fn topics(&self, documents: &[Document]) -> Vec<String> {
        if documents.is_empty() {
            return Vec::new();
        }

        let combined = documents
            .iter()
            .map(|doc| doc.content.as_str())
            .collect::<Vec<_>>()
            .join(" ");

        self.extractor.extract(&combined, self.config.top_topics)
    }

    pub fn build(&self, documents: &[Document]) -> Insights {
        let topics = self.topics(documents);
        Insights {
            summary: self.summary(documents),
            questions: self.questions.generate(&topics),
            topics,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::NewDocument;

    fn doc(title: &str, content: &str) -> Document {
        Document::from_new(NewDocument::new(title, title, content, "test"))
    }

    #[test]
    fn test_empty_store() {
        let insights = InsightsBuilder::default().build(&[]);
        assert_eq!(insights.summary, EMPTY_SUMMARY);
        assert!(insights.topics.is_empty());
        assert!(insights.questions.is_empty());
    }

    #[test]
    fn test_summary_uses_first_documents() {
        let docs = vec![
            doc("A", "alpha"),
            doc("B", "beta"),
            doc("C", "gamma"),
            doc("D", "delta"),
        ];
        assert_eq!(
            InsightsBuilder::default().summary(&docs),
            "A: alpha…\nB: beta…\nC: gamma…"
        );
    }

    #[test]
    fn test_summary_truncates_by_chars() {
        let builder = InsightsBuilder::new(InsightsConfig {
            summary_chars: 3,
            ..InsightsConfig::default()
        });
        assert_eq!(builder.summary(&[doc("T", "知識管理")]), "T: 知識管…");
    }

    #[test]
    fn test_topics_and_questions_across_documents() {
        let docs = vec![doc("A", "tokio runtime"), doc("B", "tokio axum")];
        let insights = InsightsBuilder::default().build(&docs);

        assert_eq!(insights.topics, vec!["tokio", "runtime", "axum"]);
        assert_eq!(insights.questions.len(), 3);
        assert_eq!(insights.questions[0], "What are the key points of \"tokio\"?");
    }
}
