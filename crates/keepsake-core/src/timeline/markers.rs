use chrono::{DateTime, Datelike, Months, Utc};
use serde::Serialize;

use super::axis::TimeRange;

/// Length of a year used to size the marker count (365 days)
pub const ONE_YEAR_MS: i64 = 365 * 24 * 60 * 60 * 1000;

/// Yearly tick on the timeline axis
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Marker {
    pub date: DateTime<Utc>,
    pub position_percent: f64,
}

impl Marker {
    pub fn year(&self) -> i32 {
        self.date.year()
    }
}

/// Advance `start` by whole calendar years
///
/// Month, day and time of day are kept. Feb 29 lands on Feb 28 in a
/// non-leap year.
pub fn add_years(start: DateTime<Utc>, years: u32) -> Option<DateTime<Utc>> {
    start.checked_add_months(Months::new(years.checked_mul(12)?))
}

/// Number of candidate years for a range: ceil(span / year) + 1
fn candidate_count(range: &TimeRange) -> u32 {
    let span = range.span_ms().max(0);
    let years = span / ONE_YEAR_MS + i64::from(span % ONE_YEAR_MS != 0);
    u32::try_from(years + 1).unwrap_or(u32::MAX)
}

/// One marker per elapsed year, starting at `range.min`
///
/// The count may over-allocate by one year; generation stops at the first
/// candidate past `range.max`. A degenerate range yields a single marker.
pub fn generate_year_markers(range: &TimeRange) -> Vec<Marker> {
    let count = candidate_count(range);
    let mut markers = Vec::with_capacity(count as usize);

    for i in 0..count {
        let Some(date) = add_years(range.min, i) else {
            break;
        };
        if date > range.max {
            break;
        }
        markers.push(Marker {
            date,
            position_percent: range.position_of(date),
        });
    }

    markers
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn day(y: i32, m: u32, d: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, 0, 0, 0).unwrap()
    }

    #[test]
    fn test_markers_for_four_and_a_half_years() {
        let range = TimeRange {
            min: day(2020, 1, 1),
            max: day(2024, 6, 15),
        };
        let markers = generate_year_markers(&range);

        let years: Vec<i32> = markers.iter().map(Marker::year).collect();
        assert_eq!(years, vec![2020, 2021, 2022, 2023, 2024]);
        assert_eq!(markers[0].position_percent, 0.0);
        assert!(markers
            .windows(2)
            .all(|w| w[0].position_percent < w[1].position_percent));
    }

    #[test]
    fn test_markers_never_pass_range_max() {
        let ranges = [
            (day(2020, 1, 1), day(2024, 6, 15)),
            (day(2018, 11, 30), day(2019, 2, 1)),
            (day(2001, 3, 3), day(2011, 3, 3)),
            (day(2010, 12, 31), day(2011, 1, 1)),
        ];
        for (min, max) in ranges {
            let range = TimeRange { min, max };
            let markers = generate_year_markers(&range);
            assert!(!markers.is_empty());
            assert!(markers.iter().all(|m| m.date <= range.max));
            assert!(markers.iter().all(|m| (0.0..=100.0).contains(&m.position_percent)));
        }
    }

    #[test]
    fn test_exact_year_span_includes_last_year() {
        let range = TimeRange {
            min: day(2001, 3, 3),
            max: day(2011, 3, 3),
        };
        let markers = generate_year_markers(&range);
        assert_eq!(markers.len(), 11);
        assert_eq!(markers.last().unwrap().position_percent, 100.0);
    }

    #[test]
    fn test_degenerate_range_single_centered_marker() {
        let range = TimeRange::instant(day(2023, 7, 1));
        let markers = generate_year_markers(&range);
        assert_eq!(markers.len(), 1);
        assert_eq!(markers[0].date, day(2023, 7, 1));
        assert_eq!(markers[0].position_percent, 50.0);
    }

    #[test]
    fn test_leap_day_clamps_to_feb_28() {
        assert_eq!(add_years(day(2020, 2, 29), 1), Some(day(2021, 2, 28)));
        assert_eq!(add_years(day(2020, 2, 29), 4), Some(day(2024, 2, 29)));

        let range = TimeRange {
            min: day(2020, 2, 29),
            max: day(2022, 3, 1),
        };
        let dates: Vec<DateTime<Utc>> = generate_year_markers(&range).iter().map(|m| m.date).collect();
        assert_eq!(dates, vec![day(2020, 2, 29), day(2021, 2, 28), day(2022, 2, 28)]);
    }

    #[test]
    fn test_candidate_count_rounds_up() {
        let exact = TimeRange {
            min: day(2021, 1, 1),
            max: day(2022, 1, 1),
        };
        assert_eq!(candidate_count(&exact), 2);

        let partial = TimeRange {
            min: day(2021, 1, 1),
            max: day(2022, 1, 2),
        };
        assert_eq!(candidate_count(&partial), 3);
        assert_eq!(candidate_count(&TimeRange::instant(day(2021, 1, 1))), 1);
    }
}
