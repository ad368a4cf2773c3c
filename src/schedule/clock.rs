//! Wall-clock tokens as the sheet stores them.
//!
//! Times are 24-hour `HH:MM` strings compared as same-timezone wall-clock
//! values. `ClockTime` keeps the parsed (hour, minute) pair; the derived
//! ordering matches lexicographic comparison of the zero-padded form, so
//! `"09:00" <= "09:45"` and `ClockTime` ordering agree.

use chrono::Weekday;
use regex::Regex;
use std::fmt;
use std::sync::OnceLock;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ClockTime {
    pub hour: u8,
    pub minute: u8,
}

impl ClockTime {
    pub fn new(hour: u8, minute: u8) -> Option<Self> {
        (hour < 24 && minute < 60).then_some(Self { hour, minute })
    }

    /// Parse a sheet time cell ("9:00", " 09:05 ") into a clock time.
    ///
    /// Returns `None` for anything that is not an in-range `H:M`..`HH:MM`
    /// token; callers treat that as the malformed-time condition.
    pub fn parse(token: &str) -> Option<Self> {
        let caps = time_re().captures(token.trim())?;
        let hour: u8 = caps.get(1)?.as_str().parse().ok()?;
        let minute: u8 = caps.get(2)?.as_str().parse().ok()?;
        Self::new(hour, minute)
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

fn time_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^([0-9]{1,2}):([0-9]{1,2})$").expect("static pattern"))
}

/// Full English day name, matching the sheet's `Day` column spelling.
pub fn weekday_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

/// Parse a `Day` cell: full or abbreviated English names, any case,
/// surrounding whitespace ignored.
pub fn parse_weekday(cell: &str) -> Option<Weekday> {
    cell.trim().parse().ok()
}
