// File: ./src/model/window.rs
use crate::model::event::CalendarEvent;
use chrono::{Datelike, Duration, NaiveDate, Weekday};

/// Length of the bulletin window in days, first and last day included.
pub const WINDOW_DAYS: i64 = 14;

/// The inclusive date range an event has to touch to be printed.
///
/// In include-all mode the range instead grows to cover every date it is
/// shown through [`ReportingWindow::observe`], so by the end of a run the
/// filter lets everything through.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportingWindow {
    start: NaiveDate,
    end: NaiveDate,
    include_all: bool,
}

impl ReportingWindow {
    /// Two weeks starting at `start`.
    pub fn two_weeks_from(start: NaiveDate) -> Self {
        Self {
            start,
            end: start + Duration::days(WINDOW_DAYS - 1),
            include_all: false,
        }
    }

    /// Two weeks starting at the first Thursday on or after `today`.
    pub fn upcoming(today: NaiveDate) -> Self {
        Self::two_weeks_from(next_thursday(today))
    }

    pub fn include_all(mut self, include_all: bool) -> Self {
        self.include_all = include_all;
        self
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }

    pub fn is_include_all(&self) -> bool {
        self.include_all
    }

    /// Moves the window to a new two-week start, keeping the mode.
    pub fn reset(&mut self, start: NaiveDate) {
        let include_all = self.include_all;
        *self = Self::two_weeks_from(start).include_all(include_all);
    }

    /// Widens the bounds to cover `date`. No-op outside include-all mode.
    pub fn observe(&mut self, date: NaiveDate) {
        if !self.include_all {
            return;
        }
        if date < self.start {
            self.start = date;
        }
        if date > self.end {
            self.end = date;
        }
    }

    pub fn includes(&self, event: &CalendarEvent) -> bool {
        self.include_all || event.overlaps(self.start, self.end)
    }
}

/// First Thursday that is not before `today`.
pub fn next_thursday(today: NaiveDate) -> NaiveDate {
    let from = today.weekday().num_days_from_monday() as i64;
    let target = Weekday::Thu.num_days_from_monday() as i64;
    today + Duration::days((target - from).rem_euclid(7))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2023, m, day).unwrap()
    }

    #[test]
    fn test_next_thursday() {
        assert_eq!(next_thursday(d(12, 7)), d(12, 7), "Thursday maps to itself");
        assert_eq!(next_thursday(d(12, 8)), d(12, 14));
        assert_eq!(next_thursday(d(12, 4)), d(12, 7));
        assert_eq!(next_thursday(d(12, 29)), NaiveDate::from_ymd_opt(2024, 1, 4).unwrap());
    }

    #[test]
    fn test_two_week_bounds() {
        let w = ReportingWindow::two_weeks_from(d(12, 7));
        assert_eq!(w.end(), d(12, 20));
    }

    #[test]
    fn test_includes_by_start_or_end() {
        let w = ReportingWindow::two_weeks_from(d(12, 7));
        let inside = CalendarEvent::all_day(d(12, 20), "x");
        let before = CalendarEvent::all_day(d(12, 6), "x");
        let after = CalendarEvent::all_day(d(12, 21), "x");
        let mut straddle = CalendarEvent::all_day(d(12, 6), "x");
        straddle.extend_to(d(12, 7));

        assert!(w.includes(&inside));
        assert!(!w.includes(&before));
        assert!(!w.includes(&after));
        assert!(w.includes(&straddle));
    }

    #[test]
    fn test_event_spanning_whole_window_is_included() {
        let w = ReportingWindow::two_weeks_from(d(7, 6));
        let mut camp = CalendarEvent::all_day(d(7, 5), "Trek");
        for day in 6..=20 {
            camp.extend_to(d(7, day));
        }
        assert_eq!(camp.start_date(), d(7, 5));
        assert_eq!(camp.end_date(), d(7, 20));
        assert!(w.includes(&camp));
    }

    #[test]
    fn test_observe_only_widens_in_include_all() {
        let mut fixed = ReportingWindow::two_weeks_from(d(12, 7));
        fixed.observe(d(1, 1));
        assert_eq!(fixed.start(), d(12, 7));

        let mut all = ReportingWindow::two_weeks_from(d(12, 7)).include_all(true);
        all.observe(d(11, 1));
        all.observe(d(12, 31));
        all.observe(d(12, 10));
        assert_eq!(all.start(), d(11, 1));
        assert_eq!(all.end(), d(12, 31));
    }

    #[test]
    fn test_reset_keeps_mode() {
        let mut w = ReportingWindow::two_weeks_from(d(12, 7)).include_all(true);
        w.reset(d(1, 4));
        assert!(w.is_include_all());
        assert_eq!(w.end(), d(1, 17));
    }
}
