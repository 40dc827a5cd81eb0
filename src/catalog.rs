// src/catalog.rs
//! Registry of known training plans.
//!
//! A [`Catalog`] maps `(distance, level)` to the plan's length in weeks and the page the
//! weekly schedule is published on. It is built once, validated on construction, and then
//! only read. The pipeline takes it as an argument, so tests hand in small fixture catalogs.

use std::fmt;
use std::str::FromStr;

use reqwest::Url;

use crate::config::consts::{DAYS_PER_WEEK, PROGRAMS_BASE_URL};
use crate::error::{CatalogError, NotFoundError};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Distance {
    FiveK,
    EightK,
    TenK,
    FifteenK,
    HalfMarathon,
    Marathon,
}

impl Distance {
    pub const ALL: [Distance; 6] = [
        Distance::FiveK,
        Distance::EightK,
        Distance::TenK,
        Distance::FifteenK,
        Distance::HalfMarathon,
        Distance::Marathon,
    ];

    /// Label as published by the plan source.
    pub fn label(&self) -> &'static str {
        match self {
            Distance::FiveK => "5K",
            Distance::EightK => "8K",
            Distance::TenK => "10K",
            Distance::FifteenK => "15K / 10 Miler",
            Distance::HalfMarathon => "Half-Marathon",
            Distance::Marathon => "Marathon",
        }
    }

    /// Filename-friendly form.
    pub fn slug(&self) -> &'static str {
        match self {
            Distance::FiveK => "5k",
            Distance::EightK => "8k",
            Distance::TenK => "10k",
            Distance::FifteenK => "15k-10mi",
            Distance::HalfMarathon => "half-marathon",
            Distance::Marathon => "marathon",
        }
    }
}

impl fmt::Display for Distance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Distance {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_lowercase();
        if let Some(d) = Distance::ALL.iter().find(|d| d.label().to_ascii_lowercase() == key) {
            return Ok(*d);
        }
        match key.as_str() {
            "5k" => Ok(Distance::FiveK),
            "8k" => Ok(Distance::EightK),
            "10k" => Ok(Distance::TenK),
            "15k" | "10mi" | "10-miler" | "15k-10mi" => Ok(Distance::FifteenK),
            "half" | "half marathon" | "halfmarathon" => Ok(Distance::HalfMarathon),
            "full" | "full-marathon" => Ok(Distance::Marathon),
            other => Err(format!("Unknown distance: {other}")),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CatalogEntry {
    pub distance: Distance,
    pub level: String,
    pub duration_weeks: u32,
    pub source: String,
}

impl CatalogEntry {
    pub fn new(
        distance: Distance,
        level: impl Into<String>,
        duration_weeks: u32,
        source: impl Into<String>,
    ) -> Self {
        Self { distance, level: level.into(), duration_weeks, source: source.into() }
    }

    /// Number of daily entries the plan produces.
    pub fn total_days(&self) -> usize {
        self.duration_weeks as usize * DAYS_PER_WEEK
    }
}

#[derive(Clone, Debug)]
pub struct Catalog {
    entries: Vec<CatalogEntry>,
}

impl Catalog {
    /// Validate and freeze a set of entries. Order is kept as given; it is the order
    /// levels are listed in.
    pub fn new(entries: Vec<CatalogEntry>) -> Result<Self, CatalogError> {
        for (i, e) in entries.iter().enumerate() {
            if e.duration_weeks == 0 {
                return Err(CatalogError::ZeroWeeks { distance: e.distance, level: e.level.clone() });
            }
            let valid_url = Url::parse(&e.source)
                .map(|u| u.scheme() == "http" || u.scheme() == "https")
                .unwrap_or(false);
            if !valid_url {
                return Err(CatalogError::InvalidSource {
                    distance: e.distance,
                    level: e.level.clone(),
                    source_url: e.source.clone(),
                });
            }
            let dup = entries[..i]
                .iter()
                .any(|p| p.distance == e.distance && same_level(&p.level, &e.level));
            if dup {
                return Err(CatalogError::Duplicate { distance: e.distance, level: e.level.clone() });
            }
        }
        Ok(Self { entries })
    }

    /// The published Hal Higdon programs.
    pub fn builtin() -> Result<Self, CatalogError> {
        let entries = BUILTIN
            .iter()
            .map(|&(distance, level, weeks, path)| {
                CatalogEntry::new(distance, level, weeks, join!(PROGRAMS_BASE_URL, path))
            })
            .collect();
        Self::new(entries)
    }

    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    /// Distances with at least one plan, in canonical order.
    pub fn distances(&self) -> Vec<Distance> {
        Distance::ALL
            .into_iter()
            .filter(|d| self.entries.iter().any(|e| e.distance == *d))
            .collect()
    }

    pub fn entries_for(&self, distance: Distance) -> impl Iterator<Item = &CatalogEntry> {
        self.entries.iter().filter(move |e| e.distance == distance)
    }

    /// Level names for a distance, in listing order.
    pub fn levels(&self, distance: Distance) -> Vec<&str> {
        self.entries_for(distance).map(|e| e.level.as_str()).collect()
    }

    /// Find a plan. Level matching ignores ASCII case and surrounding whitespace.
    pub fn lookup(&self, distance: Distance, level: &str) -> Result<&CatalogEntry, NotFoundError> {
        self.entries_for(distance)
            .find(|e| same_level(&e.level, level))
            .ok_or_else(|| NotFoundError::UnknownPlan { distance, level: s!(level.trim()) })
    }
}

fn same_level(a: &str, b: &str) -> bool {
    a.trim().eq_ignore_ascii_case(b.trim())
}

const BUILTIN: &[(Distance, &str, u32, &str)] = &[
    (Distance::FiveK, "Novice", 8, "5k-training/novice-5k/"),
    (Distance::FiveK, "Intermediate", 8, "5k-training/intermediate-5k/"),
    (Distance::FiveK, "Advanced", 8, "5k-training/advanced-5k/"),
    (Distance::FiveK, "Walkers", 8, "5k-training/walkers-5k/"),
    (Distance::EightK, "Novice", 8, "8k-training/novice-8k/"),
    (Distance::EightK, "Intermediate", 8, "8k-training/intermediate-8k/"),
    (Distance::EightK, "Advanced", 8, "8k-training/advanced-8k/"),
    (Distance::TenK, "Novice", 8, "10k-training/novice-10k/"),
    (Distance::TenK, "Intermediate", 8, "10k-training/intermediate-10k/"),
    (Distance::TenK, "Advanced", 8, "10k-training/advanced-10k/"),
    (Distance::FifteenK, "Novice", 10, "15k-10-mile-training/novice-15k-10-mile/"),
    (Distance::FifteenK, "Intermediate", 10, "15k-10-mile-training/intermediate-15k-10-mile/"),
    (Distance::FifteenK, "Advanced", 10, "15k-10-mile-training/advanced-15k-10-mile/"),
    (Distance::HalfMarathon, "Novice 1", 12, "half-marathon-training/novice-1-half-marathon/"),
    (Distance::HalfMarathon, "Novice 2", 12, "half-marathon-training/novice-2-half-marathon/"),
    (Distance::HalfMarathon, "Intermediate 1", 12, "half-marathon-training/intermediate-1-half-marathon/"),
    (Distance::HalfMarathon, "Intermediate 2", 12, "half-marathon-training/intermediate-2-half-marathon/"),
    (Distance::HalfMarathon, "Advanced", 12, "half-marathon-training/advanced-half-marathon/"),
    (Distance::HalfMarathon, "Half Marathon 3", 12, "half-marathon-training/half-marathon-3/"),
    (Distance::HalfMarathon, "Walkers", 12, "half-marathon-training/walkers-half-marathon/"),
    (Distance::Marathon, "Novice 1", 18, "marathon-training/novice-1-marathon/"),
    (Distance::Marathon, "Novice 2", 18, "marathon-training/novice-2-marathon/"),
    (Distance::Marathon, "Intermediate 1", 18, "marathon-training/intermediate-1-marathon/"),
    (Distance::Marathon, "Intermediate 2", 18, "marathon-training/intermediate-2-marathon/"),
    (Distance::Marathon, "Advanced 1", 18, "marathon-training/advanced-1-marathon/"),
    (Distance::Marathon, "Advanced 2", 18, "marathon-training/advanced-2-marathon/"),
    (Distance::Marathon, "Novice Supreme", 30, "marathon-training/novice-supreme/"),
    (Distance::Marathon, "Personal Best", 30, "marathon-training/personal-best/"),
    (Distance::Marathon, "Senior", 8, "marathon-training/senior/"),
    (Distance::Marathon, "Marathon 3", 24, "marathon-training/marathon-3/"),
    (Distance::Marathon, "Dopey Challenge", 18, "marathon-training/dopey-challenge/"),
];
