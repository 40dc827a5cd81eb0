// src/schedule/table.rs
//! Weekly schedule table → `WeekRow`s.
//!
//! Expected shape (one row per week):
//! ```text
//! <table class="tablesaw ...">
//!   <thead><tr><th>Week</th><th>Mon</th> … <th>Sun</th></tr></thead>
//!   <tbody><tr><td>1</td><td>Rest</td> … <td>1.5 m run</td></tr> …</tbody>
//! </table>
//! ```
//! The table is found by a [`TableLocator`]; anything that drifts from the shape above
//! is a [`ParseError`], never a best-effort guess.

use std::fmt;

use scraper::{ElementRef, Html};

use crate::config::consts::{DAYS_PER_WEEK, SCHEDULE_TABLE_CLASS};
use crate::core::html;
use crate::error::ParseError;

use super::types::WeekRow;

/// Which table on the page holds the schedule.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TableLocator {
    /// First `<table>` carrying this class.
    Class(String),
    /// First `<table>` whose first body data row has this many cells.
    BodyRowWidth(usize),
}

impl Default for TableLocator {
    fn default() -> Self {
        TableLocator::Class(s!(SCHEDULE_TABLE_CLASS))
    }
}

impl fmt::Display for TableLocator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TableLocator::Class(c) => write!(f, "table.{c}"),
            TableLocator::BodyRowWidth(n) => write!(f, "table with {n}-cell rows"),
        }
    }
}

impl TableLocator {
    fn matches(&self, table: ElementRef<'_>) -> bool {
        match self {
            TableLocator::Class(c) => html::has_class(table, c),
            TableLocator::BodyRowWidth(n) => html::body_rows(table)
                .into_iter()
                .map(html::row_cells)
                .find(|cells| !html::is_header_row(cells))
                .is_some_and(|cells| cells.len() == *n),
        }
    }
}

/// Parse with the default locator.
pub fn parse_schedule(markup: &str, expected_weeks: u32) -> Result<Vec<WeekRow>, ParseError> {
    parse_schedule_with(markup, expected_weeks, &TableLocator::default())
}

pub fn parse_schedule_with(
    markup: &str,
    expected_weeks: u32,
    locator: &TableLocator,
) -> Result<Vec<WeekRow>, ParseError> {
    let doc = Html::parse_document(markup);

    let table = html::tables(&doc)
        .find(|t| locator.matches(*t))
        .ok_or_else(|| ParseError::TableNotFound { locator: locator.to_string() })?;

    let mut weeks: Vec<WeekRow> = Vec::with_capacity(expected_weeks as usize);

    for tr in html::body_rows(table) {
        let cells = html::row_cells(tr);
        if html::is_header_row(&cells) {
            continue;
        }
        let row = weeks.len() + 1;

        if cells.len() != DAYS_PER_WEEK + 1 {
            return Err(ParseError::RowShapeMismatch { row, found: cells.len().saturating_sub(1) });
        }

        let week_text = html::text_of(cells[0]);
        let week_number = parse_week_number(&week_text)
            .filter(|n| *n as usize == row) // contiguous from 1: no gaps, no repeats
            .ok_or_else(|| ParseError::InvalidWeekNumber { row, text: week_text.clone() })?;

        let days: Vec<String> = cells[1..].iter().map(|c| html::text_of(*c)).collect();
        let found = days.len();
        let cells: [String; DAYS_PER_WEEK] = days
            .try_into()
            .map_err(|_| ParseError::RowShapeMismatch { row, found })?;

        weeks.push(WeekRow { week_number, cells });
    }

    if weeks.len() != expected_weeks as usize {
        return Err(ParseError::RowCountMismatch {
            expected: expected_weeks as usize,
            found: weeks.len(),
        });
    }

    logd!("Parse: {} week rows from {locator}", weeks.len());
    Ok(weeks)
}

fn parse_week_number(text: &str) -> Option<u32> {
    let t = text.trim();
    if t.is_empty() || !t.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    t.parse::<u32>().ok().filter(|n| *n > 0)
}
