//! Schedule repository: clock tokens, validated time blocks, queries.
//!
//! This layer owns the normalized snapshot the status engine reads. It does
//! no I/O; raw rows come in from the `sheet` loader.

pub mod board;
pub mod clock;

pub use board::{LoadDiagnostic, LoadOutcome, ScheduleBoard, TimeBlock};
pub use clock::{ClockTime, parse_weekday, weekday_name};
