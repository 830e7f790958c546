//! Configuration for the knowledge service

use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

use crate::error::Result;

/// Main service configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,
    /// Google Sheets connection configuration
    #[serde(default)]
    pub sheets: SheetsConfig,
    /// Keyword retrieval configuration
    #[serde(default)]
    pub retrieval: RetrievalConfig,
    /// Summary/topic/question configuration
    #[serde(default)]
    pub insights: InsightsConfig,
    /// Table preview limits
    #[serde(default)]
    pub preview: PreviewConfig,
}

impl AppConfig {
    /// Load configuration from a TOML file; missing keys fall back to defaults
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let raw = std::fs::read_to_string(path.as_ref())?;
        Self::from_toml_str(&raw)
    }

    /// Parse configuration from TOML text
    pub fn from_toml_str(raw: &str) -> Result<Self> {
        Ok(toml::from_str(raw)?)
    }
}

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Host address
    pub host: String,
    /// Port number
    pub port: u16,
    /// Enable CORS
    pub enable_cors: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            enable_cors: true,
        }
    }
}

/// Google Sheets connection configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SheetsConfig {
    /// Base URL for per-worksheet CSV exports (`<base>/<id>/gviz/tq?...`)
    pub export_base_url: String,
    /// Base URL for the public worksheet feed (`<base>/<id>/public/basic?alt=json`)
    pub discovery_base_url: String,
    /// Auto-refresh period after a successful connect (default: 15 minutes, 0 disables)
    pub refresh_interval_secs: u64,
    /// HTTP client timeout; the aggregation itself never times out
    pub request_timeout_secs: u64,
    /// Number of data rows rendered into the knowledge document
    pub document_rows: usize,
}

impl Default for SheetsConfig {
    fn default() -> Self {
        Self {
            export_base_url: "https://docs.google.com/spreadsheets/d".to_string(),
            discovery_base_url: "https://spreadsheets.google.com/feeds/worksheets".to_string(),
            refresh_interval_secs: 15 * 60,
            request_timeout_secs: 30,
            document_rows: 20,
        }
    }
}

impl SheetsConfig {
    /// Refresh period as a `Duration`
    pub fn refresh_interval(&self) -> Duration {
        Duration::from_secs(self.refresh_interval_secs)
    }
}

/// Keyword retrieval configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RetrievalConfig {
    /// Maximum number of documents in an answer
    pub max_results: usize,
    /// Characters of content quoted per document
    pub snippet_chars: usize,
}

impl Default for RetrievalConfig {
    fn default() -> Self {
        Self {
            max_results: 2,
            snippet_chars: 140,
        }
    }
}

/// Summary, topic and suggested-question configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct InsightsConfig {
    /// Number of topics extracted across all documents
    pub top_topics: usize,
    /// Maximum suggested questions
    pub max_questions: usize,
    /// Documents included in the summary
    pub summary_sources: usize,
    /// Characters of content per summary line
    pub summary_chars: usize,
}

impl Default for InsightsConfig {
    fn default() -> Self {
        Self {
            top_topics: 6,
            max_questions: 5,
            summary_sources: 3,
            summary_chars: 80,
        }
    }
}

/// Table preview limits
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PreviewConfig {
    /// Columns shown
    pub max_columns: usize,
    /// Data rows shown
    pub max_rows: usize,
}

impl Default for PreviewConfig {
    fn default() -> Self {
        Self {
            max_columns: 5,
            max_rows: 8,
        }
    }
}
