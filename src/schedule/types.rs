// src/schedule/types.rs
use chrono::{NaiveDate, Weekday};

use crate::config::consts::DAYS_PER_WEEK;

/// Column order of the published grid: index 0 is Monday.
pub const WEEKDAYS: [Weekday; DAYS_PER_WEEK] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

pub fn day_name(day: Weekday) -> &'static str {
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

/// One row of the source table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WeekRow {
    pub week_number: u32,
    pub cells: [String; DAYS_PER_WEEK], // Monday..Sunday
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FlatEntry {
    pub week_number: u32,
    pub day_of_week: Weekday,
    pub description: String,
}

/// Final output row.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DatedEntry {
    pub date: NaiveDate,
    pub week_number: u32,
    pub day_of_week: Weekday,
    pub description: String,
}

impl DatedEntry {
    pub const HEADERS: [&'static str; 4] = ["date", "week_number", "day_of_week", "description"];

    /// Cells in `HEADERS` order, ready for export.
    pub fn to_row(&self) -> Vec<String> {
        vec![
            self.date.format("%Y-%m-%d").to_string(),
            self.week_number.to_string(),
            s!(day_name(self.day_of_week)),
            self.description.clone(),
        ]
    }
}
