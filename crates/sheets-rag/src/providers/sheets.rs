//! Sheets provider trait for worksheet discovery and CSV export fetches

use async_trait::async_trait;
use crate::error::Result;

/// Network collaborator for spreadsheet access
///
/// Implementations:
/// - `GoogleSheetsClient`: public Google Sheets endpoints over HTTP
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SheetsClient: Send + Sync {
    /// List the worksheet ids (gids) of a workbook
    ///
    /// Fails when the workbook is unreachable or has no worksheets.
    async fn list_worksheet_gids(&self, spreadsheet_id: &str) -> Result<Vec<String>>;

    /// Fetch one worksheet as raw CSV text
    ///
    /// Fails with `Error::Fetch` on a non-success status.
    async fn fetch_csv(&self, url: &str) -> Result<String>;

    /// Get provider name for logging
    fn name(&self) -> &'static str;
}
