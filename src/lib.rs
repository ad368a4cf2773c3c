//! Busy/free board for a shared weekly schedule.
//!
//! Pipeline: fetch and parse the published sheet (`sheet`), build the
//! validated block collection (`schedule`), classify everyone at a query
//! point (`status`), render the result (`render`).

pub mod render;
pub mod schedule;
pub mod sheet;
pub mod status;

pub type Result<T> = anyhow::Result<T>;
