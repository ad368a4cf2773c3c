//! The schedule board: the validated block collection and its queries.
//!
//! A board is loaded wholesale from one parsed sheet, is immutable while a
//! report is computed, and is replaced (never patched) on refresh.

use crate::schedule::clock::{ClockTime, parse_weekday};
use crate::sheet::Sheet;
use chrono::Weekday;
use std::collections::BTreeSet;
use std::fmt;

pub const NAME_COL: &str = "Name";
pub const DAY_COL: &str = "Day";
pub const START_COL: &str = "Start";
pub const END_COL: &str = "End";
pub const ACTIVITY_COL: &str = "Activity";
pub const LOCATION_COL: &str = "Location";

const DEFAULT_LOCATION: &str = "Unknown";

/// One recurring weekly commitment.
///
/// `start`/`end` hold the comparable times when the cells parsed; the raw
/// tokens are kept (zero-padded where possible) for display. A block whose
/// `Day` cell is not a weekday, or whose start/end is unreadable, stays in
/// the collection but can never match a status query.
#[derive(Debug, Clone)]
pub struct TimeBlock {
    pub person: String,
    pub weekday: Option<Weekday>,
    pub start_raw: String,
    pub end_raw: String,
    pub start: Option<ClockTime>,
    pub end: Option<ClockTime>,
    pub activity: String,
    pub location: String,
}

/// Load-time conditions surfaced to the caller without failing the load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadDiagnostic {
    /// The header has no `Name` column: the board is empty but valid.
    SchemaInvalid { columns_seen: Vec<String> },
    /// Rows dropped because `Name` was missing or empty.
    RowsSkipped { count: usize },
    /// A start/end cell that is not a time token; that block never matches.
    MalformedTime { person: String, token: String },
}

impl fmt::Display for LoadDiagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadDiagnostic::SchemaInvalid { columns_seen } if columns_seen.is_empty() => {
                write!(f, "the sheet has no \"Name\" column (no columns found at all)")
            }
            LoadDiagnostic::SchemaInvalid { columns_seen } => write!(
                f,
                "the sheet has no \"Name\" column; columns present: {}",
                columns_seen.join(", ")
            ),
            LoadDiagnostic::RowsSkipped { count } => {
                write!(f, "skipped {count} row(s) with an empty or missing name")
            }
            LoadDiagnostic::MalformedTime { person, token } => write!(
                f,
                "a block for {person} has an unreadable time {token:?}; it will never show as busy"
            ),
        }
    }
}

#[derive(Debug)]
pub struct LoadOutcome {
    pub board: ScheduleBoard,
    pub diagnostics: Vec<LoadDiagnostic>,
}

#[derive(Debug, Default)]
pub struct ScheduleBoard {
    blocks: Vec<TimeBlock>,
}

impl ScheduleBoard {
    /// Build a board from a parsed sheet.
    ///
    /// Per row: trim `Name` and drop the row when it is empty; trim and
    /// zero-pad `Start`/`End` when they parse as times, keep them verbatim
    /// otherwise; default `Location` when absent or blank; keep `Activity`
    /// as-is. A header without a `Name` column yields an empty board plus a
    /// diagnostic naming the columns actually seen, never an error.
    pub fn load(sheet: &Sheet) -> LoadOutcome {
        let mut diagnostics = Vec::new();

        if !sheet.columns.iter().any(|c| c == NAME_COL) {
            tracing::warn!(columns = ?sheet.columns, "sheet has no Name column");
            diagnostics.push(LoadDiagnostic::SchemaInvalid {
                columns_seen: sheet.columns.clone(),
            });
            return LoadOutcome {
                board: ScheduleBoard::default(),
                diagnostics,
            };
        }

        let mut blocks = Vec::new();
        let mut skipped = 0usize;

        for row in &sheet.rows {
            let person = row.get(NAME_COL).map(str::trim).unwrap_or_default();
            if person.is_empty() {
                skipped += 1;
                continue;
            }

            let weekday = row.get(DAY_COL).and_then(parse_weekday);
            if weekday.is_none() {
                tracing::debug!(person, day = ?row.get(DAY_COL), "row has no recognizable Day");
            }

            let (start_raw, start) = normalize_time(row.get(START_COL));
            let (end_raw, end) = normalize_time(row.get(END_COL));
            for (raw, parsed) in [(&start_raw, start), (&end_raw, end)] {
                if parsed.is_none() && !raw.is_empty() {
                    diagnostics.push(LoadDiagnostic::MalformedTime {
                        person: person.to_string(),
                        token: raw.clone(),
                    });
                }
            }

            let location = match row.get(LOCATION_COL).map(str::trim) {
                Some(cell) if !cell.is_empty() => cell.to_string(),
                _ => DEFAULT_LOCATION.to_string(),
            };

            blocks.push(TimeBlock {
                person: person.to_string(),
                weekday,
                start_raw,
                end_raw,
                start,
                end,
                activity: row.get(ACTIVITY_COL).unwrap_or_default().to_string(),
                location,
            });
        }

        if skipped > 0 {
            tracing::debug!(skipped, "dropped rows without a person name");
            diagnostics.push(LoadDiagnostic::RowsSkipped { count: skipped });
        }

        tracing::info!(blocks = blocks.len(), "schedule board loaded");
        LoadOutcome {
            board: ScheduleBoard { blocks },
            diagnostics,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    /// Distinct person names, lexicographically sorted.
    pub fn people(&self) -> Vec<&str> {
        let set: BTreeSet<&str> = self.blocks.iter().map(|b| b.person.as_str()).collect();
        set.into_iter().collect()
    }

    /// A person's blocks on a weekday, in load order.
    ///
    /// This is the scan order the status check is bound to: with overlapping
    /// blocks, the first stored one that covers the query time wins.
    pub fn stored_blocks<'board>(
        &'board self,
        person: &str,
        weekday: Weekday,
    ) -> impl Iterator<Item = &'board TimeBlock> {
        self.blocks
            .iter()
            .filter(move |b| b.person == person && b.weekday == Some(weekday))
    }

    /// A person's blocks on a weekday, sorted ascending by start token.
    /// Empty for unknown people.
    pub fn blocks_for(&self, person: &str, weekday: Weekday) -> Vec<&TimeBlock> {
        let mut blocks: Vec<&TimeBlock> = self.stored_blocks(person, weekday).collect();
        blocks.sort_by(|a, b| a.start_raw.cmp(&b.start_raw));
        blocks
    }

    /// Earliest parseable start strictly after `time` that day, if any.
    ///
    /// Answers "when does the next block begin", not "when does the current
    /// one end": the comparison is strict against the query time and ignores
    /// whether some block is active right now.
    pub fn next_block_start_after(
        &self,
        person: &str,
        weekday: Weekday,
        time: ClockTime,
    ) -> Option<ClockTime> {
        self.stored_blocks(person, weekday)
            .filter_map(|b| b.start)
            .filter(|start| *start > time)
            .min()
    }
}

/// Trim a start/end cell and zero-pad it when it parses as a time.
/// Returns the display token plus the comparable form, if any.
fn normalize_time(cell: Option<&str>) -> (String, Option<ClockTime>) {
    let raw = cell.unwrap_or_default().trim().to_string();
    match ClockTime::parse(&raw) {
        Some(time) => (time.to_string(), Some(time)),
        None => (raw, None),
    }
}
