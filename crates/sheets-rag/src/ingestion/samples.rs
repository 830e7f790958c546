//! Built-in sample sources and sheet-to-document rendering

use crate::types::{NewDocument, Table, ORIGIN_SHEETS, SHEETS_DOCUMENT_ID, SHEETS_DOCUMENT_TITLE};

/// Header text used when a column has no header
pub const FALLBACK_HEADER: &str = "Field";

/// A built-in sample (title, content)
pub struct SampleSource {
    pub title: &'static str,
    pub content: &'static str,
}

/// Demo documents loaded on request
pub const SAMPLE_SOURCES: [SampleSource; 2] = [
    SampleSource {
        title: "產品簡報：OmniPlay AI 3.0",
        content: "OmniPlay AI 3.0 將焦點放在多文件筆記整理與決策支援。\
                  核心功能包含：多來源上傳、引用式回覆、快速摘要與建議問題產生。\
                  目標客群為企業知識管理與客服團隊，期望在 2024 Q4 上線 beta。",
    },
    SampleSource {
        title: "會議紀要：客服流程優化",
        content: "團隊決議將 FAQ 來源整合到同一套知識庫，並在對話中標示引用來源。\
                  KPI 包含平均回覆時間降低 25%、新進人員培訓時間縮短 40%。需新增『快速提問模板』與『重點摘要』區塊。",
    },
];

/// Render the first `max_rows` data rows as `header: cell | header: cell` lines
pub fn table_to_text(table: &Table, max_rows: usize) -> String {
    let headers = table.headers();

    table
        .data_rows()
        .iter()
        .take(max_rows)
        .map(|row| {
            row.iter()
                .enumerate()
                .map(|(i, cell)| {
                    let header = headers
                        .get(i)
                        .map(String::as_str)
                        .filter(|h| !h.is_empty())
                        .unwrap_or(FALLBACK_HEADER);
                    format!("{}: {}", header, cell)
                })
                .collect::<Vec<_>>()
                .join(" | ")
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// The document that represents the current knowledge table
pub fn sheet_document(table: &Table, max_rows: usize) -> NewDocument {
    NewDocument::new(
        SHEETS_DOCUMENT_ID,
        SHEETS_DOCUMENT_TITLE,
        table_to_text(table, max_rows),
        ORIGIN_SHEETS,
    )
}
