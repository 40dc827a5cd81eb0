// src/schedule/mod.rs
//! # Schedule shaping
//!
//! The three pure stages between raw markup and a dated plan:
//!
//! ```text
//! markup ─ table::parse_schedule ─▶ Vec<WeekRow>
//!        ─ flatten::flatten      ─▶ Vec<FlatEntry>   (week asc, Mon→Sun)
//!        ─ align::align          ─▶ Vec<DatedEntry>  (last date = race day)
//! ```
//!
//! Nothing here does I/O; fetching and catalog lookup live in `plan`.
//! Each stage consumes the previous stage's complete output.

pub mod align;
pub mod flatten;
pub mod table;
pub mod types;

pub use align::{align, plan_dates, start_date};
pub use flatten::flatten;
pub use table::{TableLocator, parse_schedule, parse_schedule_with};
pub use types::{DatedEntry, FlatEntry, WEEKDAYS, WeekRow, day_name};
