//! Application state for the knowledge server

use std::sync::Arc;

use crate::config::AppConfig;
use crate::error::Result;
use crate::generation::InsightsBuilder;
use crate::processing::SheetSync;
use crate::providers::{GoogleSheetsClient, SheetsClient};
use crate::retrieval::RetrievalEngine;
use crate::storage::KnowledgeStore;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    /// Configuration
    config: AppConfig,
    /// Document store shared with the sheet sync
    store: Arc<KnowledgeStore>,
    /// Spreadsheet connection and refresh
    sheets: SheetSync,
    /// Query scoring
    retrieval: RetrievalEngine,
    /// Summary, topics and questions
    insights: InsightsBuilder,
}

impl AppState {
    /// Create state backed by the public Google Sheets client
    pub fn new(config: AppConfig) -> Result<Self> {
        let client = Arc::new(GoogleSheetsClient::new(&config.sheets)?);
        Ok(Self::with_client(config, client))
    }

    /// Create state with a custom sheets client
    pub fn with_client(config: AppConfig, client: Arc<dyn SheetsClient>) -> Self {
        tracing::info!("Initializing application state...");

        let store = Arc::new(KnowledgeStore::new());
        let sheets = SheetSync::new(client, store.clone(), &config.sheets, &config.preview);

        Self {
            inner: Arc::new(AppStateInner {
                retrieval: RetrievalEngine::new(&config.retrieval),
                insights: InsightsBuilder::new(config.insights.clone()),
                config,
                store,
                sheets,
            }),
        }
    }

    pub fn config(&self) -> &AppConfig {
        &self.inner.config
    }

    pub fn store(&self) -> &KnowledgeStore {
        &self.inner.store
    }

    pub fn sheets(&self) -> &SheetSync {
        &self.inner.sheets
    }

    pub fn retrieval(&self) -> &RetrievalEngine {
        &self.inner.retrieval
    }

    pub fn insights(&self) -> &InsightsBuilder {
        &self.inner.insights
    }
}
