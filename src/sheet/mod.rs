//! Data loader: fetch the published sheet, parse its CSV, cache by TTL.
//!
//! This layer owns every I/O concern the schedule board and status engine
//! must not see: the HTTP fetch, the staleness window, and raw row access
//! by column name.

pub mod cache;
pub mod fetch;
pub mod parse;
pub mod row;

pub use cache::SheetCache;
pub use fetch::{FetchError, fetch_csv};
pub use parse::parse_sheet;
pub use row::{Sheet, SheetRow};
