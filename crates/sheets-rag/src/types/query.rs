//! Request types

use serde::{Deserialize, Serialize};

/// Chat question
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueryRequest {
    /// The question to answer
    pub question: String,
}

/// Free text containing one or more spreadsheet share links
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConnectRequest {
    pub links: String,
}

/// Text pasted in by hand
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ManualSourceRequest {
    /// Optional title (default: "Custom source N")
    #[serde(default)]
    pub title: Option<String>,
    /// Document text
    pub content: String,
}
