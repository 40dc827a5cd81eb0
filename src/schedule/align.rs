// src/schedule/align.rs
use chrono::{Days, NaiveDate};

use crate::config::consts::DAYS_PER_WEEK;
use crate::error::AlignmentError;

use super::types::{DatedEntry, FlatEntry};

/// First day of a plan of `weeks` weeks whose last day is `race_date`.
pub fn start_date(race_date: NaiveDate, weeks: u32) -> Result<NaiveDate, AlignmentError> {
    let back = (weeks as u64 * DAYS_PER_WEEK as u64).saturating_sub(1);
    race_date
        .checked_sub_days(Days::new(back))
        .ok_or(AlignmentError::DateOutOfRange { race_date, weeks })
}

/// Every date of the plan, consecutive, ending on `race_date`.
pub fn plan_dates(race_date: NaiveDate, weeks: u32) -> Result<Vec<NaiveDate>, AlignmentError> {
    let total = weeks as usize * DAYS_PER_WEEK;
    let start = start_date(race_date, weeks)?;
    Ok(start.iter_days().take(total).collect())
}

/// Positional join of dates onto entries. Weekday names of the dates are not looked at:
/// entry `k` gets date `k`, whatever day of the week that is.
pub fn align(
    entries: Vec<FlatEntry>,
    race_date: NaiveDate,
    weeks: u32,
) -> Result<Vec<DatedEntry>, AlignmentError> {
    let expected = weeks as usize * DAYS_PER_WEEK;
    if entries.len() != expected {
        return Err(AlignmentError::LengthMismatch { expected, found: entries.len() });
    }

    let dates = plan_dates(race_date, weeks)?;
    debug_assert_eq!(dates.last(), (expected > 0).then_some(&race_date));

    let dated: Vec<DatedEntry> = dates
        .into_iter()
        .zip(entries)
        .map(|(date, e)| DatedEntry {
            date,
            week_number: e.week_number,
            day_of_week: e.day_of_week,
            description: e.description,
        })
        .collect();

    if let (Some(first), Some(last)) = (dated.first(), dated.last()) {
        logd!("Align: {} days, {} → {}", dated.len(), first.date, last.date);
    }
    Ok(dated)
}
