// File: ./src/model/merge.rs
use crate::model::builder::Candidate;
use crate::model::event::{EventArena, EventId};
use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MergeOutcome {
    /// The candidate continued an open all-day event, which now ends later.
    Extended(EventId),
    /// A new event was pushed into the arena.
    Created(EventId),
}

/// Collapses consecutive all-day entries with the same description.
///
/// Works in a single forward pass: an event is only extended by a candidate
/// dated exactly one day after its current end. Input that is not in date
/// order simply produces separate events.
#[derive(Debug, Default)]
pub struct MultiDayMerger {
    open: HashMap<String, EventId>,
}

impl MultiDayMerger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn absorb(&mut self, arena: &mut EventArena, candidate: Candidate) -> MergeOutcome {
        if !candidate.is_all_day() {
            return MergeOutcome::Created(arena.push(candidate.into_event()));
        }

        if let Some(&id) = self.open.get(&candidate.description)
            && let Some(existing) = arena.get_mut(id)
            && existing.extend_to(candidate.date)
        {
            log::debug!(
                "Extended '{}' through {}",
                candidate.description,
                candidate.date
            );
            return MergeOutcome::Extended(id);
        }

        let key = candidate.description.clone();
        let id = arena.push(candidate.into_event());
        // Replacing the entry closes the previous event for good.
        self.open.insert(key, id);
        MergeOutcome::Created(id)
    }

    /// The event currently open for `description`, if any.
    pub fn open_event(&self, description: &str) -> Option<EventId> {
        self.open.get(description).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveTime};

    fn all_day(day: u32, desc: &str) -> Candidate {
        Candidate {
            date: NaiveDate::from_ymd_opt(2023, 12, day).unwrap(),
            time: None,
            description: desc.to_string(),
        }
    }

    #[test]
    fn test_adjacent_days_merge() {
        let mut arena = EventArena::new();
        let mut merger = MultiDayMerger::new();

        let first = merger.absorb(&mut arena, all_day(7, "Youth Camp"));
        let second = merger.absorb(&mut arena, all_day(8, "Youth Camp"));
        let third = merger.absorb(&mut arena, all_day(9, "Youth Camp"));

        let MergeOutcome::Created(id) = first else {
            panic!("first sighting must create");
        };
        assert_eq!(second, MergeOutcome::Extended(id));
        assert_eq!(third, MergeOutcome::Extended(id));
        assert_eq!(arena.len(), 1);
        assert_eq!(arena[id].end_date().to_string(), "2023-12-09");
        assert!(arena[id].is_multi_day());
    }

    #[test]
    fn test_gap_starts_new_event_and_replaces_lookup() {
        let mut arena = EventArena::new();
        let mut merger = MultiDayMerger::new();

        let MergeOutcome::Created(a) = merger.absorb(&mut arena, all_day(7, "Temple Day")) else {
            panic!()
        };
        let MergeOutcome::Created(b) = merger.absorb(&mut arena, all_day(9, "Temple Day")) else {
            panic!("non-adjacent date must create a new event")
        };
        assert_ne!(a, b);
        assert_eq!(merger.open_event("Temple Day"), Some(b));

        // The old event stays closed even for a date right after it.
        merger.absorb(&mut arena, all_day(10, "Temple Day"));
        assert!(!arena[a].is_multi_day());
        assert!(arena[b].is_multi_day());
    }

    #[test]
    fn test_timed_events_never_merge() {
        let mut arena = EventArena::new();
        let mut merger = MultiDayMerger::new();
        let time = NaiveTime::from_hms_opt(19, 0, 0).unwrap();

        for day in [7, 8] {
            let mut c = all_day(day, "Choir");
            c.time = Some(time);
            assert!(matches!(
                merger.absorb(&mut arena, c),
                MergeOutcome::Created(_)
            ));
        }
        assert_eq!(arena.len(), 2);
        assert_eq!(merger.open_event("Choir"), None);
    }

    #[test]
    fn test_out_of_order_input_does_not_merge() {
        let mut arena = EventArena::new();
        let mut merger = MultiDayMerger::new();
        merger.absorb(&mut arena, all_day(8, "Camp"));
        merger.absorb(&mut arena, all_day(7, "Camp"));
        assert_eq!(arena.len(), 2);
    }
}
