//! Multi-endpoint table aggregation
//!
//! Expands workbook ids into per-worksheet endpoints, fetches every endpoint
//! concurrently and merges whatever succeeded into one table. Discovery is
//! all-or-nothing; fetching tolerates partial failure.

use futures::future::{join_all, try_join_all};
use std::sync::Arc;

use crate::error::{Error, Result};
use crate::providers::SheetsClient;
use crate::types::Table;

use super::csv_parser::CsvParser;
use super::locator::{SheetSources, SourceLocator};

/// Result of fetching a single endpoint
#[derive(Debug)]
pub enum FetchOutcome {
    /// Endpoint returned a header plus at least one data row
    Table(Table),
    /// Endpoint failed or returned too little data
    Failed(Error),
}

/// A merged table plus bookkeeping about how it was built
#[derive(Debug, Clone)]
pub struct AggregateOutcome {
    /// Header of the first successful endpoint followed by every data row
    pub table: Table,
    /// Number of endpoints that contributed rows
    pub sheet_count: usize,
    /// Every endpoint that was attempted, in order
    pub endpoints: Vec<String>,
}

/// Fetches and merges sheet tables
pub struct TableAggregator {
    client: Arc<dyn SheetsClient>,
    locator: SourceLocator,
}

impl TableAggregator {
    /// Create a new aggregator
    pub fn new(client: Arc<dyn SheetsClient>, locator: SourceLocator) -> Self {
        Self { client, locator }
    }

    pub fn locator(&self) -> &SourceLocator {
        &self.locator
    }

    /// Turn workbook ids into endpoints and append them to the explicit ones
    ///
    /// Any discovery failure aborts the whole expansion.
    pub async fn expand_endpoints(&self, sources: &SheetSources) -> Result<Vec<String>> {
        let discoveries = sources.spreadsheet_ids.iter().map(|id| async move {
            let gids = self.client.list_worksheet_gids(id).await?;
            tracing::debug!("Workbook {} has {} worksheets", id, gids.len());
            Ok::<_, Error>(
                gids.iter()
                    .map(|gid| self.locator.export_url(id, gid))
                    .collect::<Vec<_>>(),
            )
        });

        let discovered = try_join_all(discoveries).await?;

        let mut endpoints = sources.csv_urls.clone();
        for url in discovered.into_iter().flatten() {
            if !endpoints.contains(&url) {
                endpoints.push(url);
            }
        }

        Ok(endpoints)
    }

    /// Fetch one endpoint and parse it
    pub async fn fetch_table(&self, url: &str) -> FetchOutcome {
        let text = match self.client.fetch_csv(url).await {
            Ok(text) => text,
            Err(e) => return FetchOutcome::Failed(e),
        };

        let table = CsvParser::parse(&text);
        if table.len() < 2 {
            return FetchOutcome::Failed(Error::EmptyData);
        }

        FetchOutcome::Table(table)
    }

    /// Fetch every endpoint concurrently and merge the successes
    pub async fn aggregate(&self, sources: &SheetSources) -> Result<AggregateOutcome> {
        let endpoints = self.expand_endpoints(sources).await?;
        if endpoints.is_empty() {
            return Err(Error::NoEndpoints);
        }

        tracing::info!("Fetching {} worksheet endpoints", endpoints.len());

        let outcomes = join_all(endpoints.iter().map(|url| self.fetch_table(url))).await;

        let mut merged: Vec<Vec<String>> = Vec::new();
        let mut sheet_count = 0;
        let mut not_public = false;

        for (url, outcome) in endpoints.iter().zip(outcomes) {
            match outcome {
                FetchOutcome::Table(table) => {
                    let mut rows = table.rows.into_iter();
                    let header = rows.next();
                    if merged.is_empty() {
                        merged.extend(header);
                    }
                    merged.extend(rows);
                    sheet_count += 1;
                }
                FetchOutcome::Failed(e) => {
                    not_public |= e.is_not_public();
                    tracing::warn!("Skipping worksheet {}: {}", url, e);
                }
            }
        }

        if sheet_count == 0 {
            return Err(Error::NoTableReadable { not_public });
        }

        let table = Table::from_rows(merged);
        if table.len() < 2 {
            return Err(Error::EmptyData);
        }

        tracing::info!(
            "Aggregated {} data rows from {}/{} worksheets",
            table.data_row_count(),
            sheet_count,
            endpoints.len()
        );

        Ok(AggregateOutcome {
            table,
            sheet_count,
            endpoints,
        })
    }
}
