// tests/common/mod.rs
//
// Shared offline fixtures: a fetcher that serves canned markup and
// a builder for synthetic schedule tables.
#![allow(dead_code)]

use std::cell::Cell;
use std::collections::HashMap;

use race_plan::catalog::{Catalog, CatalogEntry, Distance};
use race_plan::core::Fetch;
use race_plan::error::FetchError;

pub const NOVICE_5K_URL: &str = "https://plans.test/5k/novice/";
pub const ONE_WEEK_URL: &str = "https://plans.test/5k/taper/";

pub fn novice_5k_html() -> String {
    std::fs::read_to_string(concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/novice-5k.html"))
        .expect("read tests/fixtures/novice-5k.html")
}

pub fn fixture_catalog() -> Catalog {
    Catalog::new(vec![
        CatalogEntry::new(Distance::FiveK, "Novice", 8, NOVICE_5K_URL),
        CatalogEntry::new(Distance::FiveK, "Taper", 1, ONE_WEEK_URL),
    ])
    .expect("fixture catalog is valid")
}

/// Serves bodies by URL; unknown URLs answer 404. Counts calls.
pub struct FixtureFetcher {
    pages: HashMap<String, String>,
    pub calls: Cell<usize>,
}

impl FixtureFetcher {
    pub fn new() -> Self {
        Self { pages: HashMap::new(), calls: Cell::new(0) }
    }

    pub fn with(mut self, url: &str, body: impl Into<String>) -> Self {
        self.pages.insert(url.to_string(), body.into());
        self
    }
}

impl Fetch for FixtureFetcher {
    fn fetch(&self, url: &str) -> Result<String, FetchError> {
        self.calls.set(self.calls.get() + 1);
        self.pages
            .get(url)
            .cloned()
            .ok_or_else(|| FetchError::Status { url: url.to_string(), status: 404 })
    }
}

/// `<table class="tablesaw">` with `weeks` rows; every row has a week cell plus
/// `day_cells` day cells reading "W{week} D{day}".
pub fn schedule_html(weeks: u32, day_cells: usize) -> String {
    let mut html = String::from(
        "<html><body><table class=\"tablesaw\"><thead><tr><th>Week</th><th>Mon</th><th>Tue</th>\
         <th>Wed</th><th>Thu</th><th>Fri</th><th>Sat</th><th>Sun</th></tr></thead><tbody>",
    );
    for w in 1..=weeks {
        html.push_str(&format!("<tr><td>{w}</td>"));
        for d in 0..day_cells {
            html.push_str(&format!("<td>W{w} D{d}</td>"));
        }
        html.push_str("</tr>");
    }
    html.push_str("</tbody></table></body></html>");
    html
}

/// Same as `schedule_html(weeks, 7)` but row `bad_row` (1-based) gets `cells` day cells.
pub fn schedule_html_with_bad_row(weeks: u32, bad_row: u32, cells: usize) -> String {
    let mut html = String::from("<table class=\"tablesaw\"><tbody>");
    for w in 1..=weeks {
        let n = if w == bad_row { cells } else { 7 };
        html.push_str(&format!("<tr><td>{w}</td>"));
        for d in 0..n {
            html.push_str(&format!("<td>W{w} D{d}</td>"));
        }
        html.push_str("</tr>");
    }
    html.push_str("</tbody></table>");
    html
}
