// src/plan.rs
//! Plan generation: catalog → fetch → parse → flatten → align.
//!
//! Single-threaded and synchronous. The catalog and fetcher come in as arguments; nothing
//! here holds state between calls, so independent requests can run side by side.
//! Failures are returned as-is from the first stage that fails. No retries.

use chrono::NaiveDate;

use crate::catalog::{Catalog, CatalogEntry, Distance};
use crate::core::Fetch;
use crate::core::sanitize::sanitize_filename;
use crate::config::consts::DEFAULT_FILE;
use crate::error::PlanError;
use crate::progress::{Progress, Stage};
use crate::schedule::{self, DatedEntry};

/// Requested alignment of the plan's last day.
///
/// Accepted and recorded, but it does not change the date math: the last entry always
/// lands on the race date, whatever weekday that is.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AlignTo {
    #[default]
    Sunday,
    RaceDate,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlanRequest {
    pub distance: Distance,
    pub level: String,
    pub race_date: NaiveDate,
    pub align: AlignTo,
}

impl PlanRequest {
    pub fn new(distance: Distance, level: impl Into<String>, race_date: NaiveDate) -> Self {
        Self { distance, level: level.into(), race_date, align: AlignTo::default() }
    }
}

/// A generated plan: which program it is and one dated row per day.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TrainingPlan {
    pub entry: CatalogEntry,
    pub race_date: NaiveDate,
    pub days: Vec<DatedEntry>,
}

impl TrainingPlan {
    pub fn start_date(&self) -> Option<NaiveDate> {
        self.days.first().map(|d| d.date)
    }

    pub fn headers() -> Vec<String> {
        DatedEntry::HEADERS.iter().map(|h| s!(*h)).collect()
    }

    pub fn rows(&self) -> Vec<Vec<String>> {
        self.days.iter().map(DatedEntry::to_row).collect()
    }

    /// Default export file stem, e.g. `5k-novice-2025-06-15`.
    pub fn file_stem(&self) -> String {
        let raw = format!(
            "{}-{}-{}",
            self.entry.distance.slug(),
            self.entry.level,
            self.race_date.format("%Y-%m-%d")
        );
        sanitize_filename(&raw, DEFAULT_FILE)
    }
}

/// Generate the dated plan for one request.
pub fn generate_plan(
    catalog: &Catalog,
    fetcher: &dyn Fetch,
    request: &PlanRequest,
    mut progress: Option<&mut dyn Progress>,
) -> Result<TrainingPlan, PlanError> {
    if let Some(p) = progress.as_deref_mut() {
        p.begin(Stage::ALL.len());
    }

    let result = run_stages(catalog, fetcher, request, &mut progress);

    if let Some(p) = progress.as_deref_mut() {
        if let Err(e) = &result {
            p.log(&format!("Failed ({}): {e}", e.kind()));
        }
        p.finish();
    }
    if let Err(e) = &result {
        loge!("Plan: {} / {} failed: {e}", request.distance, request.level);
    }
    result
}

fn run_stages(
    catalog: &Catalog,
    fetcher: &dyn Fetch,
    request: &PlanRequest,
    progress: &mut Option<&mut dyn Progress>,
) -> Result<TrainingPlan, PlanError> {
    let entry = catalog.lookup(request.distance, &request.level)?;
    logf!(
        "Plan: {} / {} ({} weeks) ending {}",
        entry.distance, entry.level, entry.duration_weeks, request.race_date
    );
    if request.align == AlignTo::Sunday {
        logd!("Plan: align=Sunday requested; dates are anchored on the race date only");
    }
    stage_done(progress, Stage::Lookup);

    let markup = fetcher.fetch(&entry.source)?;
    stage_done(progress, Stage::Fetch);

    let weeks = schedule::parse_schedule(&markup, entry.duration_weeks)?;
    stage_done(progress, Stage::Parse);

    let flat = schedule::flatten(weeks);
    stage_done(progress, Stage::Flatten);

    let days = schedule::align(flat, request.race_date, entry.duration_weeks)?;
    stage_done(progress, Stage::Align);

    logf!("Plan: {} days generated", days.len());
    Ok(TrainingPlan { entry: entry.clone(), race_date: request.race_date, days })
}

/// The pure tail of the pipeline, for markup already in hand.
pub fn plan_from_markup(
    entry: &CatalogEntry,
    markup: &str,
    race_date: NaiveDate,
) -> Result<Vec<DatedEntry>, PlanError> {
    let weeks = schedule::parse_schedule(markup, entry.duration_weeks)?;
    let flat = schedule::flatten(weeks);
    Ok(schedule::align(flat, race_date, entry.duration_weeks)?)
}

fn stage_done(progress: &mut Option<&mut dyn Progress>, stage: Stage) {
    if let Some(p) = progress.as_deref_mut() {
        p.stage_done(stage);
    }
}
