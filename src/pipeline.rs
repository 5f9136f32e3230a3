// File: ./src/pipeline.rs
//! Drives paragraphs through classification, building, skipping, merging and
//! routing, in that order, in one pass.
//!
//! Every candidate goes through the skip check before merging, so a skipped
//! event never opens a multi-day run and each skipped day is tallied. Only
//! kept events widen an include-all window.

use crate::error::CalendarError;
use crate::model::event::{CalendarEvent, EventArena, EventId};
use crate::model::merge::{MergeOutcome, MultiDayMerger};
use crate::model::parser::{InputFormat, classify};
use crate::model::skip::{SkipClassifier, SkipRules, SkipTally};
use crate::model::ward::{Routing, Ward, WardClassifier};
use crate::model::window::ReportingWindow;
use crate::model::builder::ParseState;

/// Where kept events go once they survive the skip check.
pub trait EventSink {
    fn file(&mut self, id: EventId, event: &CalendarEvent);
}

/// Stake-wide and ward-specific lists for the two-week bulletin.
#[derive(Debug, Default)]
pub struct BulletinLists {
    pub stake: Vec<EventId>,
    pub ward: Vec<EventId>,
    classifier: WardClassifier,
}

impl BulletinLists {
    pub fn new(only: Option<Ward>) -> Self {
        Self {
            classifier: WardClassifier::new(only),
            ..Self::default()
        }
    }
}

impl EventSink for BulletinLists {
    fn file(&mut self, id: EventId, event: &CalendarEvent) {
        match self.classifier.route(event.description()) {
            Routing::Stake => self.stake.push(id),
            Routing::Ward => self.ward.push(id),
            Routing::Dropped => {
                log::debug!("Dropping '{}' (not for selected ward)", event.description())
            }
        }
    }
}

/// The single list used by the upcoming-events digest.
#[derive(Debug, Default)]
pub struct DigestList {
    pub events: Vec<EventId>,
}

impl EventSink for DigestList {
    fn file(&mut self, id: EventId, _event: &CalendarEvent) {
        self.events.push(id);
    }
}

/// Everything the ingestion pass produced.
#[derive(Debug)]
pub struct Ingested<S> {
    pub arena: EventArena,
    pub lists: S,
    pub tally: SkipTally,
}

pub type Bulletin = Ingested<BulletinLists>;
pub type Digest = Ingested<DigestList>;

pub struct Ingest<'w, S> {
    format: InputFormat,
    state: ParseState,
    merger: MultiDayMerger,
    skipper: SkipClassifier,
    arena: EventArena,
    window: Option<&'w mut ReportingWindow>,
    sink: S,
}

impl<'w, S: EventSink> Ingest<'w, S> {
    pub fn new(format: InputFormat, rules: SkipRules, sink: S) -> Self {
        Self {
            format,
            state: ParseState::new(),
            merger: MultiDayMerger::new(),
            skipper: SkipClassifier::new(rules),
            arena: EventArena::new(),
            window: None,
            sink,
        }
    }

    /// Lets an include-all window grow with every event date seen.
    pub fn with_window(mut self, window: &'w mut ReportingWindow) -> Self {
        self.window = Some(window);
        self
    }

    pub fn push(&mut self, text: &str) -> Result<(), CalendarError> {
        let fragment = classify(text, self.format);
        log::trace!("{:?} <- '{}'", fragment, text);

        let Some(candidate) = self.state.feed(fragment)? else {
            return Ok(());
        };
        if self.skipper.decide(&candidate.description).is_skip() {
            return Ok(());
        }

        let date = candidate.date;
        let outcome = self.merger.absorb(&mut self.arena, candidate);
        if let Some(window) = self.window.as_deref_mut() {
            window.observe(date);
        }
        if let MergeOutcome::Created(id) = outcome {
            self.sink.file(id, &self.arena[id]);
        }
        Ok(())
    }

    pub fn push_all<I, T>(&mut self, paragraphs: I) -> Result<(), CalendarError>
    where
        I: IntoIterator<Item = T>,
        T: AsRef<str>,
    {
        for p in paragraphs {
            self.push(p.as_ref())?;
        }
        Ok(())
    }

    pub fn finish(self) -> Ingested<S> {
        log::info!(
            "Built {} events, skipped {}",
            self.arena.len(),
            self.skipper.tally().total()
        );
        Ingested {
            arena: self.arena,
            lists: self.sink,
            tally: self.skipper.into_tally(),
        }
    }
}

/// Options for the two-week bulletin pass.
#[derive(Debug, Clone, Default)]
pub struct BulletinOptions {
    pub format: InputFormat,
    pub rules: SkipRules,
    pub ward: Option<Ward>,
}

pub fn build_bulletin<I, T>(
    paragraphs: I,
    options: BulletinOptions,
    window: &mut ReportingWindow,
) -> Result<Bulletin, CalendarError>
where
    I: IntoIterator<Item = T>,
    T: AsRef<str>,
{
    let mut ingest = Ingest::new(options.format, options.rules, BulletinLists::new(options.ward))
        .with_window(window);
    ingest.push_all(paragraphs)?;
    Ok(ingest.finish())
}

/// The digest reads agenda-format text and drops every ward event.
pub fn build_digest<I, T>(paragraphs: I, mut rules: SkipRules) -> Result<Digest, CalendarError>
where
    I: IntoIterator<Item = T>,
    T: AsRef<str>,
{
    rules.skip_ward_events = true;
    let mut ingest = Ingest::new(InputFormat::Agenda, rules, DigestList::default());
    ingest.push_all(paragraphs)?;
    Ok(ingest.finish())
}

impl Bulletin {
    pub fn stake_events(&self) -> impl Iterator<Item = &CalendarEvent> {
        self.arena.resolve(&self.lists.stake)
    }

    pub fn ward_events(&self) -> impl Iterator<Item = &CalendarEvent> {
        self.arena.resolve(&self.lists.ward)
    }
}

impl Digest {
    pub fn events(&self) -> impl Iterator<Item = &CalendarEvent> {
        self.arena.resolve(&self.lists.events)
    }
}
