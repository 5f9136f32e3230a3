// File: ./src/model/builder.rs
use crate::error::CalendarError;
use crate::model::event::CalendarEvent;
use crate::model::parser::Fragment;
use chrono::{NaiveDate, NaiveTime};

/// An event about to be built: the description paired with the running
/// date and time at the moment it was read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub date: NaiveDate,
    pub time: Option<NaiveTime>,
    pub description: String,
}

impl Candidate {
    pub fn is_all_day(&self) -> bool {
        self.time.is_none()
    }

    pub fn into_event(self) -> CalendarEvent {
        match self.time {
            Some(time) => CalendarEvent::timed(self.date, time, self.description),
            None => CalendarEvent::all_day(self.date, self.description),
        }
    }
}

/// The date/time context carried from one fragment to the next.
///
/// A date marker sets the date and drops back to all-day. A time marker sets
/// the time until the next date or "All Day". Descriptions never clear either.
#[derive(Debug, Default, Clone)]
pub struct ParseState {
    current_date: Option<NaiveDate>,
    current_time: Option<NaiveTime>,
}

impl ParseState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current_date(&self) -> Option<NaiveDate> {
        self.current_date
    }

    pub fn current_time(&self) -> Option<NaiveTime> {
        self.current_time
    }

    /// Applies one classified fragment. Returns a candidate for description
    /// fragments, `None` for markers and noise.
    pub fn feed(&mut self, fragment: Fragment) -> Result<Option<Candidate>, CalendarError> {
        match fragment {
            Fragment::Date(date) => {
                self.current_date = Some(date);
                self.current_time = None;
                Ok(None)
            }
            Fragment::Time(time) => {
                self.current_time = time;
                Ok(None)
            }
            Fragment::Event(description) => self.candidate(description).map(Some),
            Fragment::TimedEntry { time, description } => {
                if self.current_date.is_none() {
                    return Err(CalendarError::DateMustPrecedeEvents {
                        fragment: description,
                    });
                }
                self.current_time = time;
                self.candidate(description).map(Some)
            }
            Fragment::Noise => Ok(None),
        }
    }

    fn candidate(&self, description: String) -> Result<Candidate, CalendarError> {
        let date = self
            .current_date
            .ok_or_else(|| CalendarError::DateMustPrecedeEvents {
                fragment: description.clone(),
            })?;
        Ok(Candidate {
            date,
            time: self.current_time,
            description,
        })
    }
}
