//! Provider abstractions for the spreadsheet network collaborator
//!
//! The aggregation pipeline only sees the `SheetsClient` trait, so it can be
//! driven by the real Google client or by a test double.

pub mod google;
pub mod sheets;

pub use google::GoogleSheetsClient;
pub use sheets::SheetsClient;

#[cfg(test)]
pub use sheets::MockSheetsClient;
