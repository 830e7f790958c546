//! Tolerant CSV parser for spreadsheet exports
//!
//! Single pass over the input with two states. Quoted fields may contain commas,
//! newlines and doubled quotes. Malformed quoting never fails: an unterminated
//! quote swallows the rest of the input as field content.

use crate::types::Table;

/// CSV to table parser
pub struct CsvParser;

impl CsvParser {
    /// Parse delimited text into rows of trimmed cells
    ///
    /// Every cell is trimmed, including content that was inside quotes. A trailing
    /// row whose cells are all empty is dropped, so a final blank line does not
    /// become an extra row.
    pub fn parse(text: &str) -> Table {
        let mut rows: Vec<Vec<String>> = Vec::new();
        let mut row: Vec<String> = Vec::new();
        let mut field = String::new();
        let mut in_quotes = false;

        let mut chars = text.chars().peekable();
        while let Some(ch) = chars.next() {
            if in_quotes {
                match ch {
                    '"' if chars.peek() == Some(&'"') => {
                        field.push('"');
                        chars.next();
                    }
                    '"' => in_quotes = false,
                    _ => field.push(ch),
                }
                continue;
            }

            match ch {
                '"' => in_quotes = true,
                ',' => row.push(take_field(&mut field)),
                '\n' => {
                    row.push(take_field(&mut field));
                    rows.push(std::mem::take(&mut row));
                }
                '\r' => {}
                _ => field.push(ch),
            }
        }

        row.push(take_field(&mut field));
        if row.iter().any(|cell| !cell.is_empty()) {
            rows.push(row);
        }

        Table::from_rows(rows)
    }
}

fn take_field(field: &mut String) -> String {
    let value = field.trim().to_string();
    field.clear();
    value
}
