//! Raw sheet rows, keyed by column name.

use std::collections::BTreeMap;

/// One data row, keyed by trimmed header name.
///
/// Values are kept verbatim; trimming and defaulting are the schedule
/// board's normalization contract, not the parser's.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SheetRow {
    cells: BTreeMap<String, String>,
}

impl SheetRow {
    pub fn insert(&mut self, column: String, value: String) {
        self.cells.insert(column, value);
    }

    pub fn get(&self, column: &str) -> Option<&str> {
        self.cells.get(column).map(String::as_str)
    }

    pub fn from_pairs<'a, I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut row = SheetRow::default();
        for (column, value) in pairs {
            row.insert(column.to_string(), value.to_string());
        }
        row
    }
}

/// A parsed sheet: the header as seen (trimmed, in file order) plus rows.
///
/// The header is carried separately so a missing mandatory column can be
/// reported with the columns that were actually there.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Sheet {
    pub columns: Vec<String>,
    pub rows: Vec<SheetRow>,
}
