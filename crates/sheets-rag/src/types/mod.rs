//! Core types for the knowledge service

pub mod document;
pub mod query;
pub mod response;
pub mod table;

pub use document::{
    Document, NewDocument, ORIGIN_MANUAL, ORIGIN_SAMPLE, ORIGIN_SHEETS, SHEETS_DOCUMENT_ID,
    SHEETS_DOCUMENT_TITLE,
};
pub use query::{ConnectRequest, ManualSourceRequest, QueryRequest};
pub use response::{ChatReply, ConnectionStatus, Insights, RetrievalResult, SheetSnapshot};
pub use table::{Table, TablePreview};
