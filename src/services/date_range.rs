//! Global date window derivation.
//!
//! Scans every payment interval and produces the padded, whole-day window
//! the chart is laid out against. All positioning goes through
//! [`DateWindow::day_index`] so the axis and the blocks can never drift
//! apart.

use chrono::{Duration, NaiveDate};

use crate::models::ChartData;

/// The window shown when the snapshot has no intervals at all.
fn default_window() -> (NaiveDate, NaiveDate) {
    (
        NaiveDate::from_ymd_opt(2025, 8, 1).unwrap(),
        NaiveDate::from_ymd_opt(2025, 8, 31).unwrap(),
    )
}

/// Inclusive calendar window covering every interval plus one day of
/// padding on each side. `start <= end` always holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateWindow {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateWindow {
    /// Derive the window from a snapshot: min/max over all start and end
    /// dates, padded by one calendar day on each side. An empty snapshot
    /// resolves to the fixed default window.
    pub fn resolve(data: &ChartData) -> Self {
        let mut min: Option<NaiveDate> = None;
        let mut max: Option<NaiveDate> = None;

        for payments in data.teams.values() {
            for payment in payments {
                for date in [payment.start, payment.end] {
                    min = Some(min.map_or(date, |m| m.min(date)));
                    max = Some(max.map_or(date, |m| m.max(date)));
                }
            }
        }

        match (min, max) {
            (Some(lo), Some(hi)) => Self {
                start: lo - Duration::days(1),
                end: hi + Duration::days(1),
            },
            _ => {
                let (start, end) = default_window();
                Self { start, end }
            }
        }
    }

    /// Whole days between `date` and the window start. The single source
    /// of truth for all vertical positioning; month and year boundaries
    /// are exact because this is calendar-day subtraction, not field
    /// arithmetic.
    pub fn day_index(&self, date: NaiveDate) -> i64 {
        (date - self.start).num_days()
    }

    /// Number of calendar days in the window, inclusive of both ends.
    pub fn total_days(&self) -> i64 {
        self.day_index(self.end) + 1
    }

    /// Every calendar day from `start` to `end` inclusive.
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.start.iter_days().take_while(|d| *d <= self.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PaymentInterval;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn snapshot(teams: &[(&str, &[(NaiveDate, NaiveDate)])]) -> ChartData {
        let mut data = ChartData::default();
        for (name, intervals) in teams {
            data.teams.insert(
                name.to_string(),
                intervals
                    .iter()
                    .map(|(s, e)| PaymentInterval::new(*s, *e))
                    .collect(),
            );
        }
        data
    }

    #[test]
    fn test_empty_snapshot_uses_default_window() {
        let window = DateWindow::resolve(&ChartData::default());
        assert_eq!(window.start, date(2025, 8, 1));
        assert_eq!(window.end, date(2025, 8, 31));
    }

    #[test]
    fn test_team_with_no_intervals_uses_default_window() {
        let data = snapshot(&[("TeamA", &[])]);
        let window = DateWindow::resolve(&data);
        assert_eq!(window.start, date(2025, 8, 1));
        assert_eq!(window.end, date(2025, 8, 31));
    }

    #[test]
    fn test_padding_is_exactly_one_day_each_side() {
        let data = snapshot(&[(
            "TeamA",
            &[(date(2025, 7, 31), date(2025, 8, 2))],
        )]);
        let window = DateWindow::resolve(&data);
        assert_eq!(window.start, date(2025, 7, 30));
        assert_eq!(window.end, date(2025, 8, 3));
        assert_eq!(window.total_days(), 5);
    }

    #[test]
    fn test_single_day_interval_still_padded() {
        let data = snapshot(&[("A", &[(date(2025, 8, 15), date(2025, 8, 15))])]);
        let window = DateWindow::resolve(&data);
        assert_eq!(window.start, date(2025, 8, 14));
        assert_eq!(window.end, date(2025, 8, 16));
    }

    #[test]
    fn test_window_spans_all_teams() {
        let data = snapshot(&[
            ("A", &[(date(2025, 8, 1), date(2025, 8, 5))]),
            ("B", &[(date(2025, 8, 3), date(2025, 8, 3))]),
        ]);
        let window = DateWindow::resolve(&data);
        assert_eq!(window.start, date(2025, 7, 31));
        assert_eq!(window.end, date(2025, 8, 6));
    }

    #[test]
    fn test_day_index_identities() {
        let data = snapshot(&[("A", &[(date(2025, 7, 31), date(2025, 8, 2))])]);
        let window = DateWindow::resolve(&data);
        assert_eq!(window.day_index(window.start), 0);
        assert_eq!(window.day_index(window.end), window.total_days() - 1);
    }

    #[test]
    fn test_day_index_across_year_boundary() {
        let data = snapshot(&[("A", &[(date(2025, 12, 30), date(2026, 1, 2))])]);
        let window = DateWindow::resolve(&data);
        assert_eq!(window.start, date(2025, 12, 29));
        assert_eq!(window.day_index(date(2026, 1, 3)), 5);
        assert_eq!(window.total_days(), 6);
    }

    #[test]
    fn test_days_iterates_inclusive() {
        let window = DateWindow {
            start: date(2025, 7, 30),
            end: date(2025, 8, 3),
        };
        let days: Vec<NaiveDate> = window.days().collect();
        assert_eq!(days.len(), 5);
        assert_eq!(days[0], date(2025, 7, 30));
        assert_eq!(days[4], date(2025, 8, 3));
    }
}
