//! Status engine: classify each person as busy or free at a query point.
//!
//! Everything here is a pure function of (board snapshot, weekday, time):
//! no I/O, no clock access, no cache awareness. The caller samples "now"
//! (or pins it from a flag) and passes the query point in explicitly, so
//! the same inputs always yield the same report.

use crate::schedule::{ClockTime, LoadDiagnostic, ScheduleBoard, weekday_name};
use chrono::Weekday;
use serde::Serialize;
use std::collections::BTreeMap;

/// Outcome of a single-person status check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PersonStatus {
    Busy {
        activity: String,
        until: ClockTime,
        location: String,
    },
    Free,
}

/// Classify one person at (weekday, time).
///
/// Scans that person's blocks in stored (load) order and returns the first
/// whose closed interval covers the query time: a block matches at exactly
/// its start and at exactly its end. Blocks with an unreadable start or end
/// never match. Unknown people have no blocks and come back `Free`.
///
/// With overlapping blocks the first stored one wins. That first-match rule
/// is kept on purpose even though it looks arbitrary; see DESIGN.md before
/// changing it to earliest-start-wins or an overlap error.
pub fn status_of(
    board: &ScheduleBoard,
    person: &str,
    weekday: Weekday,
    time: ClockTime,
) -> PersonStatus {
    for block in board.stored_blocks(person, weekday) {
        let (Some(start), Some(end)) = (block.start, block.end) else {
            continue;
        };
        if start <= time && time <= end {
            return PersonStatus::Busy {
                activity: block.activity.clone(),
                until: end,
                location: block.location.clone(),
            };
        }
    }
    PersonStatus::Free
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BusyEntry {
    pub person: String,
    pub activity: String,
    pub until: String,
    pub location: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FreeEntry {
    pub person: String,
    /// Start of the next block later today; `None` means free for the rest
    /// of the day.
    pub next_start: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GroupReport {
    pub busy: Vec<BusyEntry>,
    pub free: Vec<FreeEntry>,
}

/// Compute the whole-group report.
///
/// Every person on the board lands in exactly one of the two lists, both in
/// sorted person order. Free people carry the start of their next block
/// that day, when one exists.
pub fn group_report(board: &ScheduleBoard, weekday: Weekday, time: ClockTime) -> GroupReport {
    let mut busy = Vec::new();
    let mut free = Vec::new();

    for person in board.people() {
        match status_of(board, person, weekday, time) {
            PersonStatus::Busy {
                activity,
                until,
                location,
            } => busy.push(BusyEntry {
                person: person.to_string(),
                activity,
                until: until.to_string(),
                location,
            }),
            PersonStatus::Free => free.push(FreeEntry {
                person: person.to_string(),
                next_start: board
                    .next_block_start_after(person, weekday, time)
                    .map(|t| t.to_string()),
            }),
        }
    }

    GroupReport { busy, free }
}

/// One block of a person's day, ready for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BlockView {
    pub start: String,
    pub end: String,
    pub activity: String,
    pub location: String,
}

/// A person's blocks for the day, start-sorted, for the personal view.
pub fn personal_day(board: &ScheduleBoard, person: &str, weekday: Weekday) -> Vec<BlockView> {
    board
        .blocks_for(person, weekday)
        .into_iter()
        .map(|b| BlockView {
            start: b.start_raw.clone(),
            end: b.end_raw.clone(),
            activity: b.activity.clone(),
            location: b.location.clone(),
        })
        .collect()
}

/// Everything a presenter needs, serializable for embedding in the HTML
/// report.
#[derive(Debug, Clone, Serialize)]
pub struct ReportData {
    /// Full day name of the query point, e.g. "Monday".
    pub weekday: String,
    /// Query time as zero-padded `HH:MM`.
    pub time: String,
    pub generated_at: String,
    pub busy: Vec<BusyEntry>,
    pub free: Vec<FreeEntry>,
    pub people: Vec<String>,
    /// Per-person day schedule for the personal view.
    pub days: BTreeMap<String, Vec<BlockView>>,
    /// Load diagnostics rendered as display strings.
    pub diagnostics: Vec<String>,
}

pub fn build_report_data(
    board: &ScheduleBoard,
    weekday: Weekday,
    time: ClockTime,
    diagnostics: &[LoadDiagnostic],
    generated_at: String,
) -> ReportData {
    let GroupReport { busy, free } = group_report(board, weekday, time);
    let people: Vec<String> = board.people().iter().map(|p| p.to_string()).collect();
    let days: BTreeMap<String, Vec<BlockView>> = people
        .iter()
        .map(|p| (p.clone(), personal_day(board, p, weekday)))
        .collect();

    ReportData {
        weekday: weekday_name(weekday).to_string(),
        time: time.to_string(),
        generated_at,
        busy,
        free,
        people,
        days,
        diagnostics: diagnostics.iter().map(|d| d.to_string()).collect(),
    }
}
