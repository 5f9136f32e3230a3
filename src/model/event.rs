// File: ./src/model/event.rs
use chrono::{Duration, NaiveDate, NaiveTime};
use std::ops::Index;

/// A single calendar event, possibly spanning several consecutive days.
///
/// Fields are private so that `end_date >= start_date` and the one-way
/// `multi_day` flag cannot be broken from outside. The only mutation after
/// construction is [`CalendarEvent::extend_to`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarEvent {
    start_date: NaiveDate,
    end_date: NaiveDate,
    start_time: Option<NaiveTime>,
    description: String,
    multi_day: bool,
}

impl CalendarEvent {
    /// An event with no time of day. Only these take part in multi-day merging.
    pub fn all_day(date: NaiveDate, description: impl Into<String>) -> Self {
        Self {
            start_date: date,
            end_date: date,
            start_time: None,
            description: description.into(),
            multi_day: false,
        }
    }

    pub fn timed(date: NaiveDate, time: NaiveTime, description: impl Into<String>) -> Self {
        Self {
            start_date: date,
            end_date: date,
            start_time: Some(time),
            description: description.into(),
            multi_day: false,
        }
    }

    pub fn start_date(&self) -> NaiveDate {
        self.start_date
    }

    pub fn end_date(&self) -> NaiveDate {
        self.end_date
    }

    pub fn start_time(&self) -> Option<NaiveTime> {
        self.start_time
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn is_all_day(&self) -> bool {
        self.start_time.is_none()
    }

    pub fn is_multi_day(&self) -> bool {
        self.multi_day
    }

    /// True when `date` is the day right after the current end date.
    pub fn is_next_day(&self, date: NaiveDate) -> bool {
        date.checked_sub_signed(Duration::days(1)) == Some(self.end_date)
    }

    /// Pushes the end date out to `date` if it continues the event.
    /// Returns false and leaves the event untouched otherwise.
    pub fn extend_to(&mut self, date: NaiveDate) -> bool {
        if !self.is_next_day(date) {
            return false;
        }
        self.end_date = date;
        self.multi_day = true;
        true
    }

    /// Whether any day of the event falls inside `[from, to]`.
    pub fn overlaps(&self, from: NaiveDate, to: NaiveDate) -> bool {
        self.start_date <= to && self.end_date >= from
    }
}

/// Handle into an [`EventArena`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EventId(usize);

impl EventId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// Append-only storage for every event built during a run.
///
/// Output lists and the merge lookup both hold `EventId`s, so an event can be
/// "open" for merging and already filed in a list without two owners.
#[derive(Debug, Default, Clone)]
pub struct EventArena {
    events: Vec<CalendarEvent>,
}

impl EventArena {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, event: CalendarEvent) -> EventId {
        self.events.push(event);
        EventId(self.events.len() - 1)
    }

    pub fn get(&self, id: EventId) -> Option<&CalendarEvent> {
        self.events.get(id.0)
    }

    pub fn get_mut(&mut self, id: EventId) -> Option<&mut CalendarEvent> {
        self.events.get_mut(id.0)
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Resolves a list of ids in order, skipping any that do not belong here.
    pub fn resolve<'a, 'b>(
        &'a self,
        ids: &'b [EventId],
    ) -> impl Iterator<Item = &'a CalendarEvent> + 'b
    where
        'a: 'b,
    {
        ids.iter().filter_map(move |id| self.get(*id))
    }
}

impl Index<EventId> for EventArena {
    type Output = CalendarEvent;

    fn index(&self, id: EventId) -> &Self::Output {
        &self.events[id.0]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2023, m, day).unwrap()
    }

    #[test]
    fn test_extend_only_on_next_day() {
        let mut ev = CalendarEvent::all_day(d(12, 7), "Youth Camp");
        assert!(!ev.extend_to(d(12, 9)), "gap of one day must not extend");
        assert_eq!(ev.end_date(), d(12, 7));
        assert!(!ev.is_multi_day());

        assert!(ev.extend_to(d(12, 8)));
        assert_eq!(ev.end_date(), d(12, 8));
        assert!(ev.is_multi_day());

        assert!(!ev.extend_to(d(12, 8)), "same day again is not a continuation");
        assert!(ev.is_multi_day(), "multi-day flag never goes back");
    }

    #[test]
    fn test_extend_across_month_boundary() {
        let mut ev = CalendarEvent::all_day(d(11, 30), "Food Drive");
        assert!(ev.extend_to(d(12, 1)));
        assert_eq!(ev.end_date(), d(12, 1));
    }

    #[test]
    fn test_all_day_flag_follows_time() {
        let t = NaiveTime::from_hms_opt(19, 0, 0).unwrap();
        assert!(CalendarEvent::all_day(d(1, 1), "x").is_all_day());
        assert!(!CalendarEvent::timed(d(1, 1), t, "x").is_all_day());
    }

    #[test]
    fn test_arena_ids_are_stable() {
        let mut arena = EventArena::new();
        let a = arena.push(CalendarEvent::all_day(d(1, 1), "a"));
        let b = arena.push(CalendarEvent::all_day(d(1, 2), "b"));
        arena.get_mut(a).unwrap().extend_to(d(1, 2));
        assert_eq!(arena[a].end_date(), d(1, 2));
        assert_eq!(arena[b].description(), "b");
        let names: Vec<_> = arena.resolve(&[b, a]).map(|e| e.description()).collect();
        assert_eq!(names, vec!["b", "a"]);
    }

    #[test]
    fn test_resolved_events_outlive_the_id_list() {
        let mut arena = EventArena::new();
        let a = arena.push(CalendarEvent::all_day(d(1, 1), "a"));
        let found: Vec<&CalendarEvent> = {
            let ids = vec![a];
            arena.resolve(&ids).collect()
        };
        assert_eq!(found[0].description(), "a");
    }
}
