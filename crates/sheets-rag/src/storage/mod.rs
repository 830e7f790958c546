//! Storage module for ingested documents
//!
//! Everything lives in memory for the lifetime of the process.

mod knowledge_store;

pub use knowledge_store::KnowledgeStore;
