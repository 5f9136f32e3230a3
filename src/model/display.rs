// File: ./src/model/display.rs
use crate::model::event::CalendarEvent;
use crate::model::window::ReportingWindow;
use chrono::{Datelike, NaiveDate};

const WEEKDAY_DATE: &str = "%a, %b %-d";
const MONTH_DAY: &str = "%b %-d";
const DAY_ONLY: &str = "%-d";
const NUMERIC_DATE: &str = "%-m/%-d";
const HEADER_DATE: &str = "%B %-d";
const CLOCK_TIME: &str = "%-I:%M %p";

/// Punctuation used for ranges and separators, picked once per run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Punctuation {
    /// En dash, for word-processor output.
    #[default]
    Document,
    /// ASCII hyphen, for the terminal.
    Plain,
}

impl Punctuation {
    pub fn dash(self) -> &'static str {
        match self {
            Punctuation::Document => "\u{2013}",
            Punctuation::Plain => "-",
        }
    }

    /// The dash with a space on each side.
    pub fn separator(self) -> &'static str {
        match self {
            Punctuation::Document => " \u{2013} ",
            Punctuation::Plain => " - ",
        }
    }
}

fn same_month(a: NaiveDate, b: NaiveDate) -> bool {
    a.year() == b.year() && a.month() == b.month()
}

pub trait EventDisplay {
    /// `"7:00 PM"`, or empty for all-day events.
    fn time_string(&self) -> String;
    /// Bulletin form of a multi-day range: `"Thu, Dec 7 – 8"`.
    fn range_string(&self, punct: Punctuation) -> String;
    /// Digest date: `"12/7"`, `"12/7-8"` or `"11/30-12/2"`. The range always
    /// takes an ASCII hyphen, whatever the run's punctuation.
    fn digest_date(&self) -> String;
    /// Full digest line: `"12/7 – Stake Choir Practice"`.
    fn digest_line(&self, punct: Punctuation) -> String;
}

impl EventDisplay for CalendarEvent {
    fn time_string(&self) -> String {
        match self.start_time() {
            Some(t) => t.format(CLOCK_TIME).to_string(),
            None => String::new(),
        }
    }

    fn range_string(&self, punct: Punctuation) -> String {
        let (start, end) = (self.start_date(), self.end_date());
        let end_fmt = if same_month(start, end) { DAY_ONLY } else { MONTH_DAY };
        format!(
            "{}{}{}",
            start.format(WEEKDAY_DATE),
            punct.separator(),
            end.format(end_fmt)
        )
    }

    fn digest_date(&self) -> String {
        let start = self.start_date();
        if !self.is_multi_day() {
            return start.format(NUMERIC_DATE).to_string();
        }
        let end = self.end_date();
        let end_fmt = if same_month(start, end) { DAY_ONLY } else { NUMERIC_DATE };
        format!("{}-{}", start.format(NUMERIC_DATE), end.format(end_fmt))
    }

    fn digest_line(&self, punct: Punctuation) -> String {
        format!(
            "{} {} {}",
            self.digest_date(),
            punct.dash(),
            self.description()
        )
    }
}

/// Remembers the last single-day date written in a listing so that a run of
/// events on the same day only shows the date once.
#[derive(Debug, Clone, Copy, Default)]
pub struct DateHeaders {
    last_printed: Option<NaiveDate>,
}

impl DateHeaders {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new section; the next single-day event prints its date again.
    pub fn reset(&mut self) {
        self.last_printed = None;
    }

    pub fn last_printed(&self) -> Option<NaiveDate> {
        self.last_printed
    }

    /// Date column for the bulletin. Multi-day ranges are always written and
    /// leave the remembered date alone.
    pub fn date_string(&mut self, event: &CalendarEvent, punct: Punctuation) -> String {
        if event.is_multi_day() {
            return event.range_string(punct);
        }
        let date = event.start_date();
        if self.last_printed == Some(date) {
            return String::new();
        }
        self.last_printed = Some(date);
        date.format(WEEKDAY_DATE).to_string()
    }
}

/// One line of the bulletin: date, time and description columns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BulletinRow {
    pub date: String,
    pub time: String,
    pub description: String,
}

impl BulletinRow {
    pub fn to_plain_line(&self) -> String {
        format!("{:<16} {:<10} {}", self.date, self.time, self.description)
    }
}

/// `"December 7 – December 20"`.
pub fn window_header(window: &ReportingWindow, punct: Punctuation) -> String {
    format!(
        "{}{}{}",
        window.start().format(HEADER_DATE),
        punct.separator(),
        window.end().format(HEADER_DATE)
    )
}
