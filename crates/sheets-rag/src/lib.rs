//! sheets-rag: keyword-retrieval knowledge base with Google Sheets ingestion
//!
//! Documents come from three places: text pasted in by hand, built-in samples, and
//! one or more spreadsheet exports that are fetched concurrently and merged into a
//! single knowledge table. Questions are answered by lexical keyword overlap with
//! citations back to the contributing documents.

pub mod config;
pub mod error;
pub mod generation;
pub mod ingestion;
pub mod processing;
pub mod providers;
pub mod retrieval;
pub mod server;
pub mod storage;
pub mod types;

pub use config::AppConfig;
pub use error::{Error, Result};
pub use storage::KnowledgeStore;
pub use types::{
    document::{Document, NewDocument},
    response::{ChatReply, ConnectionStatus, Insights, RetrievalResult},
    table::{Table, TablePreview},
};
