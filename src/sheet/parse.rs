//! Minimal CSV parsing for the published schedule sheet.
//!
//! Covers the subset sheet exports actually produce: a header line, comma
//! separation, double-quoted cells with doubled quotes and embedded
//! commas/newlines, CRLF or LF line ends. Ragged data lines are tolerated:
//! extra cells are dropped, missing cells stay absent from the row.

use crate::sheet::row::{Sheet, SheetRow};

/// Parse CSV text into a header + rows structure.
///
/// Never fails: empty input yields an empty sheet and unbalanced quoting
/// degrades to whatever cells the scan produces. Structural problems (a
/// missing `Name` column) are the schedule board's diagnostics, not parse
/// errors.
pub fn parse_sheet(text: &str) -> Sheet {
    let mut records = split_records(text);
    if records.is_empty() {
        return Sheet::default();
    }

    let header = records.remove(0);
    let columns: Vec<String> = header.iter().map(|c| c.trim().to_string()).collect();

    let mut rows = Vec::new();
    for record in records {
        if record.iter().all(|cell| cell.trim().is_empty()) {
            continue;
        }
        let mut row = SheetRow::default();
        for (column, value) in columns.iter().zip(record) {
            row.insert(column.clone(), value);
        }
        rows.push(row);
    }

    Sheet { columns, rows }
}

/// Split CSV text into records of cells, honoring double quotes.
fn split_records(text: &str) -> Vec<Vec<String>> {
    let mut records: Vec<Vec<String>> = Vec::new();
    let mut record: Vec<String> = Vec::new();
    let mut cell = String::new();
    let mut in_quotes = false;
    let mut chars = text.chars().peekable();

    while let Some(ch) = chars.next() {
        if in_quotes {
            match ch {
                '"' if chars.peek() == Some(&'"') => {
                    chars.next();
                    cell.push('"');
                }
                '"' => in_quotes = false,
                _ => cell.push(ch),
            }
            continue;
        }
        match ch {
            '"' => in_quotes = true,
            ',' => record.push(std::mem::take(&mut cell)),
            '\r' => {
                if chars.peek() == Some(&'\n') {
                    chars.next();
                }
                record.push(std::mem::take(&mut cell));
                records.push(std::mem::take(&mut record));
            }
            '\n' => {
                record.push(std::mem::take(&mut cell));
                records.push(std::mem::take(&mut record));
            }
            _ => cell.push(ch),
        }
    }

    if !cell.is_empty() || !record.is_empty() {
        record.push(cell);
        records.push(record);
    }

    records
}
