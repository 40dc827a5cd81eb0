// src/error.rs
//! Error taxonomy for plan generation.
//!
//! Every failure keeps its specific kind all the way to the caller, so a user can tell
//! a bad input (`NotFound`) from a network problem (`Fetch`), an upstream format change
//! (`Parse`) or a broken internal invariant (`Alignment`).

use std::time::Duration;

use chrono::NaiveDate;
use thiserror::Error;

use crate::catalog::Distance;

/// Top-level error returned by [`crate::plan::generate_plan`].
#[derive(Debug, Error)]
pub enum PlanError {
    #[error(transparent)]
    NotFound(#[from] NotFoundError),

    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Alignment(#[from] AlignmentError),
}

impl PlanError {
    /// Short, stable label for the error family.
    pub fn kind(&self) -> &'static str {
        match self {
            PlanError::NotFound(_) => "not found",
            PlanError::Fetch(_) => "fetch",
            PlanError::Parse(_) => "parse",
            PlanError::Alignment(_) => "alignment",
        }
    }
}

#[derive(Debug, Error)]
pub enum NotFoundError {
    #[error("No training plan for distance '{distance}' at level '{level}'")]
    UnknownPlan { distance: Distance, level: String },
}

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Request to {url} timed out after {}s", .after.as_secs())]
    Timeout { url: String, after: Duration },

    #[error("HTTP error: {status} from {url}")]
    Status { url: String, status: u16 },

    #[error("Request to {url} failed")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Could not read response body from {url}")]
    Body {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Invalid source URL: {url}")]
    InvalidUrl { url: String },

    #[error("Could not build HTTP client")]
    Client(#[source] reqwest::Error),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("Weekly schedule table not found ({locator})")]
    TableNotFound { locator: String },

    #[error("Row {row} has {found} day cells, expected 7")]
    RowShapeMismatch { row: usize, found: usize },

    #[error("Table has {found} week rows, expected {expected}")]
    RowCountMismatch { expected: usize, found: usize },

    #[error("Row {row} has invalid week number '{text}'")]
    InvalidWeekNumber { row: usize, text: String },
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AlignmentError {
    #[error("Got {found} plan entries, expected {expected}")]
    LengthMismatch { expected: usize, found: usize },

    #[error("Plan of {weeks} weeks cannot end on {race_date}")]
    DateOutOfRange { race_date: NaiveDate, weeks: u32 },
}

/// Problems with a catalog definition, caught when the catalog is built.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("{distance} / {level}: duration must be at least one week")]
    ZeroWeeks { distance: Distance, level: String },

    #[error("{distance} / {level}: listed more than once")]
    Duplicate { distance: Distance, level: String },

    #[error("{distance} / {level}: invalid source URL '{source_url}'")]
    InvalidSource { distance: Distance, level: String, source_url: String },
}
