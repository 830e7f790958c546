//! Sheet ingestion: link parsing, CSV parsing and multi-endpoint aggregation

mod aggregator;
mod csv_parser;
pub mod locator;
pub mod samples;

pub use aggregator::{AggregateOutcome, FetchOutcome, TableAggregator};
pub use csv_parser::CsvParser;
pub use locator::{SheetSources, SourceLocator};
pub use samples::{sheet_document, table_to_text, SAMPLE_SOURCES};
