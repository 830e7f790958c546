//! Spreadsheet link parsing
//!
//! Turns free text holding one or more share links into fetchable CSV export
//! endpoints. Links that point at a single worksheet (`gid=`) become endpoints
//! directly; links to a whole workbook are returned as bare ids so the caller can
//! discover their worksheets.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

static SPREADSHEET_ID: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"/spreadsheets/d/([^/]+)").expect("valid spreadsheet id pattern"));

static SHEET_GID: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[#&?]gid=(\d+)").expect("valid gid pattern"));

/// Endpoints and workbooks found in the input, each deduplicated in first-seen order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SheetSources {
    /// Per-worksheet CSV export URLs
    pub csv_urls: Vec<String>,
    /// Workbook ids whose worksheets still need to be discovered
    pub spreadsheet_ids: Vec<String>,
}

impl SheetSources {
    /// True when nothing recognizable was found (a format error for the caller)
    pub fn is_empty(&self) -> bool {
        self.csv_urls.is_empty() && self.spreadsheet_ids.is_empty()
    }
}

/// Builds export URLs and parses share links
#[derive(Debug, Clone)]
pub struct SourceLocator {
    export_base_url: String,
}

impl SourceLocator {
    /// `export_base_url` is the prefix before `/<id>/gviz/...`
    pub fn new(export_base_url: impl Into<String>) -> Self {
        Self {
            export_base_url: export_base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// CSV export endpoint for one worksheet
    pub fn export_url(&self, spreadsheet_id: &str, gid: &str) -> String {
        format!(
            "{}/{}/gviz/tq?tqx=out:csv&gid={}",
            self.export_base_url, spreadsheet_id, gid
        )
    }

    /// Split on whitespace and classify each candidate link
    ///
    /// Tokens without a workbook id are ignored.
    pub fn locate(&self, raw: &str) -> SheetSources {
        let mut sources = SheetSources::default();
        let mut seen_urls = HashSet::new();
        let mut seen_ids = HashSet::new();

        for candidate in raw.split_whitespace() {
            let Some(id) = parse_spreadsheet_id(candidate) else {
                tracing::debug!("Ignoring token without a spreadsheet id: {}", candidate);
                continue;
            };

            match parse_sheet_gid(candidate) {
                Some(gid) => {
                    let url = self.export_url(id, gid);
                    if seen_urls.insert(url.clone()) {
                        sources.csv_urls.push(url);
                    }
                }
                None => {
                    if seen_ids.insert(id.to_string()) {
                        sources.spreadsheet_ids.push(id.to_string());
                    }
                }
            }
        }

        sources
    }
}

/// Workbook id from a `/spreadsheets/d/<ID>` path
pub fn parse_spreadsheet_id(link: &str) -> Option<&str> {
    SPREADSHEET_ID
        .captures(link)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Worksheet id from a `gid=` query or fragment parameter
pub fn parse_sheet_gid(link: &str) -> Option<&str> {
    SHEET_GID
        .captures(link)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}
