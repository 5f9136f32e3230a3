// File: ./src/model/parser.rs
//! Classifies raw calendar text, one paragraph at a time.
//!
//! Two layouts of pasted calendar data are understood:
//!
//! - `Classic`: the old clerk-resources export, where a date line
//!   (`12/7/2023`), an optional time line (`7:00p` or `All Day`) and one or
//!   more description lines follow each other.
//! - `Agenda`: the agenda-view print, where a long date header
//!   (`Thursday, December 7th, 2023`) is followed by lines of the form
//!   `7 - 9pm - Stake Choir Practice` or `All Day - Youth Camp`.
//!
//! Anything that does not match a pattern is treated as text, never as an
//! error. Deciding whether text before the first date is fatal is left to the
//! builder, which is the only place that knows whether a date has been seen.

use chrono::{Month, NaiveDate, NaiveTime};
use once_cell::sync::Lazy;
use regex::{Captures, Regex};

static CLASSIC_DATE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\d{1,2})/(\d{1,2})/(\d{4})$").expect("valid regex"));

static CLASSIC_TIME: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(?:All Day|(\d{1,2}):(\d{2})([ap]))$").expect("valid regex"));

static AGENDA_DATE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Z][a-z]+, ([A-Z][a-z]+) (\d\d?)[a-z][a-z], (\d{4})$").expect("valid regex")
});

static AGENDA_ENTRY: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(All Day|(\d{1,2}(?::\d{2})?)(am|pm)? - \d{1,2}(?::\d{2})?(am|pm)) - (.+)$")
        .expect("valid regex")
});

pub const ALL_DAY: &str = "All Day";

/// Which layout the pasted calendar text uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputFormat {
    /// Separate date / time / description paragraphs.
    Classic,
    /// Weekday-prefixed date headers followed by `time - time - text` lines.
    #[default]
    Agenda,
}

/// What a single paragraph of input turned out to be.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Fragment {
    /// A date marker or agenda date header.
    Date(NaiveDate),
    /// A classic time marker; `None` means "All Day".
    Time(Option<NaiveTime>),
    /// A classic description line. May be empty.
    Event(String),
    /// An agenda line carrying both its time (or all-day) and description.
    TimedEntry {
        time: Option<NaiveTime>,
        description: String,
    },
    /// Agenda text that is neither a header nor an entry (page furniture).
    Noise,
}

pub fn classify(text: &str, format: InputFormat) -> Fragment {
    match format {
        InputFormat::Classic => classify_classic(text),
        InputFormat::Agenda => classify_agenda(text),
    }
}

fn classify_classic(text: &str) -> Fragment {
    if let Some(date) = CLASSIC_DATE.captures(text).and_then(|c| numeric_date(&c)) {
        return Fragment::Date(date);
    }

    if let Some(caps) = CLASSIC_TIME.captures(text) {
        if text == ALL_DAY {
            return Fragment::Time(None);
        }
        let parsed = (|| {
            let h = caps.get(1)?.as_str().parse::<u32>().ok()?;
            let m = caps.get(2)?.as_str().parse::<u32>().ok()?;
            let is_pm = caps.get(3)?.as_str() == "p";
            to_24h(h, m, is_pm)
        })();
        if let Some(time) = parsed {
            return Fragment::Time(Some(time));
        }
        log::debug!("Time-like line '{}' is out of range, keeping as text", text);
    }

    Fragment::Event(text.to_string())
}

fn classify_agenda(text: &str) -> Fragment {
    if let Some(caps) = AGENDA_DATE.captures(text) {
        if let Some(date) = long_date(&caps) {
            return Fragment::Date(date);
        }
        log::debug!("Date header '{}' does not name a real day", text);
        return Fragment::Noise;
    }

    if let Some(caps) = AGENDA_ENTRY.captures(text) {
        let description = caps.get(5).map_or("", |m| m.as_str()).to_string();
        if caps.get(1).map(|m| m.as_str()) == Some(ALL_DAY) {
            return Fragment::TimedEntry {
                time: None,
                description,
            };
        }
        match range_start(&caps) {
            Some(time) => {
                return Fragment::TimedEntry {
                    time: Some(time),
                    description,
                };
            }
            None => log::warn!("Could not read start time of '{}', ignoring line", text),
        }
    }

    Fragment::Noise
}

fn numeric_date(caps: &Captures<'_>) -> Option<NaiveDate> {
    let month = caps.get(1)?.as_str().parse().ok()?;
    let day = caps.get(2)?.as_str().parse().ok()?;
    let year = caps.get(3)?.as_str().parse().ok()?;
    NaiveDate::from_ymd_opt(year, month, day)
}

fn long_date(caps: &Captures<'_>) -> Option<NaiveDate> {
    let month = caps.get(1)?.as_str().parse::<Month>().ok()?;
    let day = caps.get(2)?.as_str().parse().ok()?;
    let year = caps.get(3)?.as_str().parse().ok()?;
    NaiveDate::from_ymd_opt(year, month.number_from_month(), day)
}

/// Start of a `start - end` range. A bare hour gets `:00`, and a start with
/// no am/pm borrows the one at the end of the range, even when the range
/// crosses noon (`11 - 1pm` reads as 11:00 PM).
fn range_start(caps: &Captures<'_>) -> Option<NaiveTime> {
    let start = caps.get(2)?.as_str();
    let suffix = caps.get(3).or_else(|| caps.get(4))?.as_str();

    let (h, m) = match start.split_once(':') {
        Some((h, m)) => (h.parse().ok()?, m.parse().ok()?),
        None => (start.parse().ok()?, 0),
    };
    to_24h(h, m, suffix == "pm")
}

fn to_24h(h: u32, m: u32, is_pm: bool) -> Option<NaiveTime> {
    if !(1..=12).contains(&h) || m > 59 {
        return None;
    }
    let h_24 = if h == 12 {
        if is_pm { 12 } else { 0 }
    } else if is_pm {
        h + 12
    } else {
        h
    };
    NaiveTime::from_hms_opt(h_24, m, 0)
}
