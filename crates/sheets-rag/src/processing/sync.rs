//! Spreadsheet connection lifecycle
//!
//! `SheetSync` owns the current knowledge table, its preview and the connection
//! status. A successful connect replaces all three, upserts the sheet document
//! and schedules a periodic refresh of the same sources. A failed connect or
//! refresh clears the preview but leaves the previous table and document alone.

use futures::FutureExt;
use parking_lot::RwLock;
use std::sync::Arc;
use std::time::Duration;

use crate::config::{PreviewConfig, SheetsConfig};
use crate::error::{connection_failure_message, Error, Result};
use crate::ingestion::{
    sheet_document, AggregateOutcome, SheetSources, SourceLocator, TableAggregator,
};
use crate::providers::SheetsClient;
use crate::storage::KnowledgeStore;
use crate::types::{ConnectionStatus, SheetSnapshot, Table, TablePreview};

use super::refresh::RefreshScheduler;

pub const EMPTY_INPUT_MESSAGE: &str = "Please enter a link";
pub const INVALID_LINK_MESSAGE: &str = "Invalid link format";
pub const FETCHING_MESSAGE: &str = "Fetching…";

#[derive(Default)]
struct SyncState {
    table: Option<Table>,
    preview: Option<TablePreview>,
    status: ConnectionStatus,
}

/// Everything the refresh job needs; holds no reference to the scheduler
struct SyncInner {
    aggregator: TableAggregator,
    store: Arc<KnowledgeStore>,
    state: RwLock<SyncState>,
    document_rows: usize,
    preview: PreviewConfig,
}

/// Connects spreadsheets and keeps the knowledge table fresh
pub struct SheetSync {
    inner: Arc<SyncInner>,
    refresh: RefreshScheduler,
    refresh_interval: Duration,
}

impl SheetSync {
    pub fn new(
        client: Arc<dyn SheetsClient>,
        store: Arc<KnowledgeStore>,
        sheets: &SheetsConfig,
        preview: &PreviewConfig,
    ) -> Self {
        tracing::info!(
            "Sheet sync using {} (refresh every {}s)",
            client.name(),
            sheets.refresh_interval_secs
        );

        let locator = SourceLocator::new(sheets.export_base_url.clone());
        Self {
            inner: Arc::new(SyncInner {
                aggregator: TableAggregator::new(client, locator),
                store,
                state: RwLock::new(SyncState::default()),
                document_rows: sheets.document_rows,
                preview: preview.clone(),
            }),
            refresh: RefreshScheduler::new(),
            refresh_interval: sheets.refresh_interval(),
        }
    }

    /// Parse the links, aggregate every worksheet and ingest the merged table
    pub async fn connect(&self, raw: &str) -> Result<SheetSnapshot> {
        let raw = raw.trim();
        if raw.is_empty() {
            self.inner.set_status(ConnectionStatus::disconnected(EMPTY_INPUT_MESSAGE));
            return Err(Error::InvalidSource(EMPTY_INPUT_MESSAGE.to_string()));
        }

        let sources = self.inner.aggregator.locator().locate(raw);
        if sources.is_empty() {
            self.inner.set_status(ConnectionStatus::disconnected(INVALID_LINK_MESSAGE));
            return Err(Error::InvalidSource(INVALID_LINK_MESSAGE.to_string()));
        }

        tracing::info!(
            "Connecting {} worksheet links and {} workbooks",
            sources.csv_urls.len(),
            sources.spreadsheet_ids.len()
        );
        self.inner.set_status(ConnectionStatus::disconnected(FETCHING_MESSAGE));

        self.inner.sync(&sources).await?;
        self.schedule_refresh(sources);

        Ok(self.snapshot())
    }

    fn schedule_refresh(&self, sources: SheetSources) {
        if self.refresh_interval.is_zero() {
            return;
        }

        let inner = Arc::clone(&self.inner);
        let sources = Arc::new(sources);

        self.refresh.schedule(self.refresh_interval, move || {
            let inner = Arc::clone(&inner);
            let sources = Arc::clone(&sources);
            async move {
                if let Err(e) = inner.sync(&sources).await {
                    tracing::warn!("Scheduled refresh failed: {}", e);
                }
            }
            .boxed()
        });
    }

    /// Stop refreshing; the current table stays
    pub fn stop_refresh(&self) {
        self.refresh.cancel();
    }

    pub fn snapshot(&self) -> SheetSnapshot {
        let state = self.inner.state.read();
        SheetSnapshot {
            status: state.status.clone(),
            preview: state.preview.clone(),
            auto_refresh: self.refresh.is_active(),
        }
    }

    /// Last successfully aggregated table
    pub fn knowledge_table(&self) -> Option<Table> {
        self.inner.state.read().table.clone()
    }
}

impl SyncInner {
    fn set_status(&self, status: ConnectionStatus) {
        self.state.write().status = status;
    }

    /// One aggregation pass, applied to the state
    async fn sync(&self, sources: &SheetSources) -> Result<AggregateOutcome> {
        match self.aggregator.aggregate(sources).await {
            Ok(outcome) => {
                self.apply(&outcome);
                Ok(outcome)
            }
            Err(e) => {
                tracing::error!("Sheet aggregation failed: {}", e);
                let mut state = self.state.write();
                state.status = ConnectionStatus::disconnected(connection_failure_message(&e));
                state.preview = None;
                Err(e)
            }
        }
    }

    fn apply(&self, outcome: &AggregateOutcome) {
        let table = &outcome.table;
        let document = self.store.upsert(sheet_document(table, self.document_rows));

        let status = ConnectionStatus::connected(format!(
            "Connected ({} rows / {} worksheets)",
            table.data_row_count(),
            outcome.sheet_count
        ));
        tracing::info!("{} as document {}", status.message, document.id);
        tracing::debug!("Worksheet endpoints: {}", outcome.endpoints.join(", "));

        let mut state = self.state.write();
        state.preview = Some(table.preview(self.preview.max_columns, self.preview.max_rows));
        state.table = Some(table.clone());
        state.status = status;
    }
}
