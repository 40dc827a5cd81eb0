// src/lib.rs

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

pub mod catalog;
pub mod config;
pub mod core;
pub mod csv;
pub mod error;
pub mod file;
pub mod plan;
pub mod progress;
pub mod schedule;

#[cfg(feature = "cli")]
pub mod cli;

pub use catalog::{Catalog, CatalogEntry, Distance};
pub use error::PlanError;
pub use plan::{AlignTo, PlanRequest, TrainingPlan, generate_plan};
