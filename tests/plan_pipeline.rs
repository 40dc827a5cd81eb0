// tests/plan_pipeline.rs
//
// End-to-end plan generation against offline fixtures.
//
mod common;

use chrono::{Datelike, NaiveDate, Weekday};

use common::*;
use race_plan::catalog::{Catalog, Distance};
use race_plan::error::{FetchError, NotFoundError, ParseError, PlanError};
use race_plan::plan::{AlignTo, PlanRequest, generate_plan, plan_from_markup};
use race_plan::progress::{Progress, Stage};
use race_plan::schedule::{self, WEEKDAYS};

fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn novice_fetcher() -> FixtureFetcher {
    FixtureFetcher::new().with(NOVICE_5K_URL, novice_5k_html())
}

#[test]
fn novice_5k_lines_up_with_sunday_race() {
    let catalog = fixture_catalog();
    let fetcher = novice_fetcher();
    let req = PlanRequest::new(Distance::FiveK, "Novice", ymd(2025, 6, 15));

    let plan = generate_plan(&catalog, &fetcher, &req, None).unwrap();

    assert_eq!(plan.days.len(), 56);
    assert_eq!(plan.start_date(), Some(ymd(2025, 4, 21)));
    assert_eq!(plan.days[0].date.weekday(), Weekday::Mon);
    assert_eq!(plan.days.last().unwrap().date, ymd(2025, 6, 15));

    for (i, day) in plan.days.iter().enumerate() {
        assert_eq!(day.week_number as usize, i / 7 + 1);
        assert_eq!(day.day_of_week, WEEKDAYS[i % 7]);
    }
    for pair in plan.days.windows(2) {
        assert_eq!(pair[1].date - pair[0].date, chrono::Duration::days(1));
    }

    assert_eq!(plan.days[0].description, "Rest");
    assert_eq!(plan.days[5].description, "30 min walk");
    assert_eq!(plan.days[12].description, "30 min walk");
    assert_eq!(plan.days[55].description, "5-K Race (Good luck!)");
    assert_eq!(fetcher.calls.get(), 1);
}

#[test]
fn race_on_a_wednesday_still_ends_on_race_day() {
    let catalog = fixture_catalog();
    let fetcher = novice_fetcher();
    let mut req = PlanRequest::new(Distance::FiveK, "novice", ymd(2025, 6, 18));
    req.align = AlignTo::RaceDate;

    let plan = generate_plan(&catalog, &fetcher, &req, None).unwrap();

    // positional join: the "Sunday" column lands on the race day regardless of weekday
    let last = plan.days.last().unwrap();
    assert_eq!(last.date, ymd(2025, 6, 18));
    assert_eq!(last.day_of_week, Weekday::Sun);
    assert_eq!(plan.start_date(), Some(ymd(2025, 4, 24)));
}

#[test]
fn align_option_does_not_change_dates() {
    let catalog = fixture_catalog();
    let fetcher = novice_fetcher();
    let mut req = PlanRequest::new(Distance::FiveK, "Novice", ymd(2025, 6, 15));

    let sunday = generate_plan(&catalog, &fetcher, &req, None).unwrap();
    req.align = AlignTo::RaceDate;
    let race_date = generate_plan(&catalog, &fetcher, &req, None).unwrap();

    assert_eq!(sunday, race_date);
}

#[test]
fn repeated_runs_are_identical() {
    let catalog = fixture_catalog();
    let fetcher = novice_fetcher();
    let req = PlanRequest::new(Distance::FiveK, "Novice", ymd(2025, 6, 15));

    let a = generate_plan(&catalog, &fetcher, &req, None).unwrap();
    let b = generate_plan(&catalog, &fetcher, &req, None).unwrap();
    assert_eq!(a, b);
    assert_eq!(fetcher.calls.get(), 2);
}

#[test]
fn one_week_plan_has_seven_days_ending_on_race_day() {
    let catalog = fixture_catalog();
    let fetcher = FixtureFetcher::new().with(ONE_WEEK_URL, schedule_html(1, 7));
    let req = PlanRequest::new(Distance::FiveK, "Taper", ymd(2025, 6, 15));

    let plan = generate_plan(&catalog, &fetcher, &req, None).unwrap();
    assert_eq!(plan.days.len(), 7);
    assert_eq!(plan.days[6].date, ymd(2025, 6, 15));
    assert_eq!(plan.days[6].description, "W1 D6");
}

#[test]
fn unknown_plan_fails_before_fetching() {
    let catalog = fixture_catalog();
    let fetcher = novice_fetcher();
    let req = PlanRequest::new(Distance::Marathon, "Novice", ymd(2025, 6, 15));

    let err = generate_plan(&catalog, &fetcher, &req, None).unwrap_err();
    assert!(matches!(err, PlanError::NotFound(NotFoundError::UnknownPlan { .. })));
    assert_eq!(err.kind(), "not found");
    assert_eq!(fetcher.calls.get(), 0);
}

#[test]
fn fetch_failure_is_passed_through() {
    let catalog = fixture_catalog();
    let fetcher = FixtureFetcher::new(); // serves nothing → 404
    let req = PlanRequest::new(Distance::FiveK, "Novice", ymd(2025, 6, 15));

    let err = generate_plan(&catalog, &fetcher, &req, None).unwrap_err();
    match err {
        PlanError::Fetch(FetchError::Status { status, url }) => {
            assert_eq!(status, 404);
            assert_eq!(url, NOVICE_5K_URL);
        }
        other => panic!("expected fetch error, got {other:?}"),
    }
}

#[test]
fn six_cell_row_is_a_shape_mismatch() {
    let catalog = fixture_catalog();
    let fetcher = FixtureFetcher::new().with(NOVICE_5K_URL, schedule_html_with_bad_row(8, 4, 6));
    let req = PlanRequest::new(Distance::FiveK, "Novice", ymd(2025, 6, 15));

    let err = generate_plan(&catalog, &fetcher, &req, None).unwrap_err();
    assert!(matches!(
        err,
        PlanError::Parse(ParseError::RowShapeMismatch { row: 4, found: 6 })
    ));
}

#[test]
fn nine_rows_for_eight_weeks_is_a_count_mismatch() {
    let catalog = fixture_catalog();
    let fetcher = FixtureFetcher::new().with(NOVICE_5K_URL, schedule_html(9, 7));
    let req = PlanRequest::new(Distance::FiveK, "Novice", ymd(2025, 6, 15));

    let err = generate_plan(&catalog, &fetcher, &req, None).unwrap_err();
    assert!(matches!(
        err,
        PlanError::Parse(ParseError::RowCountMismatch { expected: 8, found: 9 })
    ));
}

#[test]
fn page_without_schedule_table_fails_loudly() {
    let catalog = fixture_catalog();
    let fetcher = FixtureFetcher::new().with(NOVICE_5K_URL, "<html><body><p>Moved!</p></body></html>");
    let req = PlanRequest::new(Distance::FiveK, "Novice", ymd(2025, 6, 15));

    let err = generate_plan(&catalog, &fetcher, &req, None).unwrap_err();
    assert!(matches!(err, PlanError::Parse(ParseError::TableNotFound { .. })));
    assert_eq!(err.kind(), "parse");
}

#[test]
fn every_builtin_plan_flattens_to_weeks_times_seven() {
    let catalog = Catalog::builtin().unwrap();
    for entry in catalog.entries() {
        let html = schedule_html(entry.duration_weeks, 7);
        let rows = schedule::parse_schedule(&html, entry.duration_weeks).unwrap();
        let flat = schedule::flatten(rows);
        assert_eq!(flat.len(), entry.total_days(), "{} / {}", entry.distance, entry.level);

        let days = plan_from_markup(entry, &html, ymd(2026, 1, 4)).unwrap();
        assert_eq!(days.last().unwrap().date, ymd(2026, 1, 4));
        assert_eq!(days.len(), entry.duration_weeks as usize * 7);
    }
}

#[derive(Default)]
struct Recorder {
    total: usize,
    stages: Vec<Stage>,
    logs: Vec<String>,
    finished: bool,
}

impl Progress for Recorder {
    fn begin(&mut self, total: usize) { self.total = total; }
    fn log(&mut self, msg: &str) { self.logs.push(msg.to_string()); }
    fn stage_done(&mut self, stage: Stage) { self.stages.push(stage); }
    fn finish(&mut self) { self.finished = true; }
}

#[test]
fn progress_sees_every_stage_in_order() {
    let catalog = fixture_catalog();
    let fetcher = novice_fetcher();
    let req = PlanRequest::new(Distance::FiveK, "Novice", ymd(2025, 6, 15));
    let mut rec = Recorder::default();

    generate_plan(&catalog, &fetcher, &req, Some(&mut rec)).unwrap();
    assert_eq!(rec.total, 5);
    assert_eq!(rec.stages, Stage::ALL.to_vec());
    assert!(rec.finished);
}

#[test]
fn progress_stops_at_failing_stage_and_reports_it() {
    let catalog = fixture_catalog();
    let fetcher = FixtureFetcher::new().with(NOVICE_5K_URL, schedule_html(9, 7));
    let req = PlanRequest::new(Distance::FiveK, "Novice", ymd(2025, 6, 15));
    let mut rec = Recorder::default();

    assert!(generate_plan(&catalog, &fetcher, &req, Some(&mut rec)).is_err());
    assert_eq!(rec.stages, vec![Stage::Lookup, Stage::Fetch]);
    assert!(rec.finished);
    assert!(rec.logs.iter().any(|l| l.contains("parse")));
}
