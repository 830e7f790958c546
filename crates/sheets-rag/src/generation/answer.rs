//! Chat reply composition

use crate::retrieval::RetrievalEngine;
use crate::types::{ChatReply, Document};

pub const NO_SOURCES_MESSAGE: &str =
    "No sources have been added yet. Add some text or connect a spreadsheet first.";
pub const NOT_FOUND_MESSAGE: &str =
    "Sorry, the current sources contain no clear lead. Try other keywords or add more sources.";
pub const ANSWER_PREFIX: &str = "Here is what the sources say:\n\n";

/// Answer a question from the given documents
pub fn compose_reply(
    engine: &RetrievalEngine,
    question: &str,
    documents: &[Document],
) -> ChatReply {
    if documents.is_empty() {
        return ChatReply::NoSources {
            message: NO_SOURCES_MESSAGE.to_string(),
        };
    }

    match engine.retrieve(question, documents) {
        Some(result) => ChatReply::Answer {
            message: format!("{}{}", ANSWER_PREFIX, result.answer),
            citations: result.citations,
        },
        None => ChatReply::NotFound {
            message: NOT_FOUND_MESSAGE.to_string(),
        },
    }
}
