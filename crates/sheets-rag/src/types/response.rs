//! Response types handed to the UI layer

use serde::{Deserialize, Serialize};

use super::table::TablePreview;

/// Lexical retrieval result
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RetrievalResult {
    /// Title plus content prefix of each contributing document
    pub answer: String,
    /// Titles of the contributing documents, best first
    pub citations: Vec<String>,
}

/// Conversational reply to a chat question
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ChatReply {
    /// The store is empty
    NoSources { message: String },
    /// At least one document matched
    Answer { message: String, citations: Vec<String> },
    /// Nothing scored above zero
    NotFound { message: String },
}

impl ChatReply {
    pub fn message(&self) -> &str {
        match self {
            ChatReply::NoSources { message }
            | ChatReply::Answer { message, .. }
            | ChatReply::NotFound { message } => message,
        }
    }

    pub fn citations(&self) -> &[String] {
        match self {
            ChatReply::Answer { citations, .. } => citations,
            _ => &[],
        }
    }
}

/// Connection badge state
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnectionStatus {
    pub connected: bool,
    pub message: String,
}

impl ConnectionStatus {
    pub fn connected(message: impl Into<String>) -> Self {
        Self {
            connected: true,
            message: message.into(),
        }
    }

    pub fn disconnected(message: impl Into<String>) -> Self {
        Self {
            connected: false,
            message: message.into(),
        }
    }
}

impl Default for ConnectionStatus {
    fn default() -> Self {
        Self::disconnected("Not connected")
    }
}

/// Current sheet connection state
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SheetSnapshot {
    pub status: ConnectionStatus,
    /// Absent until a connect succeeds, and cleared by a failed one
    pub preview: Option<TablePreview>,
    /// Whether an auto-refresh is scheduled
    pub auto_refresh: bool,
}

/// Summary, topics and suggested questions over the whole store
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Insights {
    pub summary: String,
    pub topics: Vec<String>,
    pub questions: Vec<String>,
}
