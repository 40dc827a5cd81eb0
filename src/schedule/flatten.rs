// src/schedule/flatten.rs
use super::types::{FlatEntry, WEEKDAYS, WeekRow};

/// Week grid → one entry per day, week ascending then Monday→Sunday.
///
/// `cells[i]` is always weekday `i`; header labels on the page are never consulted.
/// The final sort pins the order even if rows arrive out of week order.
pub fn flatten(rows: Vec<WeekRow>) -> Vec<FlatEntry> {
    let mut out: Vec<FlatEntry> = rows
        .into_iter()
        .flat_map(|row| {
            let week_number = row.week_number;
            WEEKDAYS
                .into_iter()
                .zip(row.cells)
                .map(move |(day_of_week, description)| FlatEntry { week_number, day_of_week, description })
        })
        .collect();

    out.sort_by_key(|e| (e.week_number, e.day_of_week.num_days_from_monday()));
    logd!("Flatten: {} daily entries", out.len());
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Weekday;

    fn week(n: u32) -> WeekRow {
        WeekRow {
            week_number: n,
            cells: std::array::from_fn(|i| format!("w{n}d{i}")),
        }
    }

    #[test]
    fn rows_out_of_order_still_come_out_sorted() {
        let out = flatten(vec![week(2), week(1)]);
        assert_eq!(out.len(), 14);
        assert_eq!(out[0].week_number, 1);
        assert_eq!(out[0].day_of_week, Weekday::Mon);
        assert_eq!(out[0].description, "w1d0");
        assert_eq!(out[6].day_of_week, Weekday::Sun);
        assert_eq!(out[7].week_number, 2);
        assert_eq!(out[13].description, "w2d6");
    }

    #[test]
    fn empty_grid_is_empty() {
        assert!(flatten(Vec::new()).is_empty());
    }
}
