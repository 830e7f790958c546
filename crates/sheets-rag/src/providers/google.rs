//! Google Sheets client
//!
//! Talks to the public worksheet feed for discovery and to the gviz CSV export for
//! worksheet contents. No authentication: sheets must be shared or published.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;

use crate::config::SheetsConfig;
use crate::error::{Error, Result};

use super::sheets::SheetsClient;

/// HTTP client for public Google Sheets
pub struct GoogleSheetsClient {
    /// HTTP client
    client: Client,
    /// Prefix of the worksheet feed
    discovery_base_url: String,
}

#[derive(Deserialize)]
struct WorksheetFeed {
    #[serde(default)]
    feed: Option<FeedBody>,
}

#[derive(Deserialize)]
struct FeedBody {
    #[serde(default)]
    entry: Vec<FeedEntry>,
}

#[derive(Deserialize)]
struct FeedEntry {
    #[serde(default)]
    id: Option<FeedText>,
}

#[derive(Deserialize)]
struct FeedText {
    #[serde(rename = "$t", default)]
    text: String,
}

impl GoogleSheetsClient {
    /// Create a new client
    pub fn new(config: &SheetsConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .pool_max_idle_per_host(5)
            .build()?;

        Ok(Self {
            client,
            discovery_base_url: config.discovery_base_url.trim_end_matches('/').to_string(),
        })
    }

    fn feed_url(&self, spreadsheet_id: &str) -> String {
        format!(
            "{}/{}/public/basic?alt=json",
            self.discovery_base_url, spreadsheet_id
        )
    }
}

/// Extract gids from a worksheet feed body
///
/// Each entry id looks like `https://.../worksheets/<key>/public/basic/<gid>`; the
/// last path segment is the gid.
pub fn parse_worksheet_feed(spreadsheet_id: &str, body: &str) -> Result<Vec<String>> {
    let feed: WorksheetFeed = serde_json::from_str(body)
        .map_err(|e| Error::discovery(spreadsheet_id, None, format!("invalid feed: {}", e)))?;

    let entries = feed.feed.map(|f| f.entry).unwrap_or_default();
    if entries.is_empty() {
        return Err(Error::discovery(spreadsheet_id, None, "no worksheets found"));
    }

    let gids: Vec<String> = entries
        .into_iter()
        .filter_map(|entry| entry.id)
        .filter_map(|id| id.text.rsplit('/').next().map(str::to_string))
        .filter(|gid| !gid.is_empty())
        .collect();

    if gids.is_empty() {
        return Err(Error::discovery(
            spreadsheet_id,
            None,
            "worksheet list could not be parsed",
        ));
    }

    Ok(gids)
}

#[async_trait]
impl SheetsClient for GoogleSheetsClient {
    async fn list_worksheet_gids(&self, spreadsheet_id: &str) -> Result<Vec<String>> {
        let url = self.feed_url(spreadsheet_id);
        tracing::debug!("Discovering worksheets: {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| Error::discovery(spreadsheet_id, None, e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::discovery(
                spreadsheet_id,
                Some(status.as_u16()),
                format!("HTTP {}", status.as_u16()),
            ));
        }

        let body = response
            .text()
            .await
            .map_err(|e| Error::discovery(spreadsheet_id, None, e.to_string()))?;

        parse_worksheet_feed(spreadsheet_id, &body)
    }

    async fn fetch_csv(&self, url: &str) -> Result<String> {
        let response = self.client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::Fetch {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        Ok(response.text().await?)
    }

    fn name(&self) -> &'static str {
        "google-sheets"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_feed_takes_last_segment() {
        let body = r#"{
            "feed": {
                "entry": [
                    {"id": {"$t": "https://example.com/worksheets/abc/public/basic/od6"}},
                    {"id": {"$t": "https://example.com/worksheets/abc/public/basic/1234"}}
                ]
            }
        }"#;
        assert_eq!(parse_worksheet_feed("abc", body).unwrap(), vec!["od6", "1234"]);
    }

    #[test]
    fn test_parse_feed_without_entries() {
        let err = parse_worksheet_feed("abc", r#"{"feed": {}}"#).unwrap_err();
        assert!(matches!(
            err,
            Error::Discovery { ref message, .. } if message == "no worksheets found"
        ));

        let err = parse_worksheet_feed("abc", "{}").unwrap_err();
        assert!(matches!(err, Error::Discovery { .. }));
    }

    #[test]
    fn test_parse_feed_with_unusable_ids() {
        let body = r#"{"feed": {"entry": [{"title": "x"}, {"id": {"$t": "trailing/"}}]}}"#;
        let err = parse_worksheet_feed("abc", body).unwrap_err();
        assert!(matches!(
            err,
            Error::Discovery { ref message, .. } if message == "worksheet list could not be parsed"
        ));
    }

    #[test]
    fn test_parse_feed_rejects_non_json() {
        let err = parse_worksheet_feed("abc", "<html>sign in</html>").unwrap_err();
        assert!(matches!(
            err,
            Error::Discovery { ref spreadsheet_id, .. } if spreadsheet_id == "abc"
        ));
    }

    #[test]
    fn test_feed_url() {
        let client = GoogleSheetsClient::new(&SheetsConfig::default()).unwrap();
        assert_eq!(
            client.feed_url("abc"),
            "https://spreadsheets.google.com/feeds/worksheets/abc/public/basic?alt=json"
        );
    }
}
