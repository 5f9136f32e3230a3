// File: ./src/model/skip.rs
//! Decides which events are dropped before they reach an output list, and
//! keeps count of what was dropped so the operator can review it.

use crate::model::ward;
use std::collections::{BTreeMap, HashSet};

/// Skip lists plus the switches that change how they apply.
#[derive(Debug, Clone, Default)]
pub struct SkipRules {
    /// Descriptions dropped on an exact match.
    pub exact: HashSet<String>,
    /// Descriptions dropped when they contain any of these.
    pub contains: HashSet<String>,
    /// Never skip anything (`-k`).
    pub keep_all: bool,
    /// Skip events that name a ward in the digest's sense (used by the digest).
    pub skip_ward_events: bool,
}

impl SkipRules {
    pub fn new(exact: HashSet<String>, contains: HashSet<String>) -> Self {
        Self {
            exact,
            contains,
            ..Self::default()
        }
    }

    fn matches(&self, description: &str) -> bool {
        self.contains.iter().any(|s| description.contains(s.as_str()))
            || (self.skip_ward_events && ward::is_digest_ward_event(description))
            || self.exact.contains(description)
    }
}

/// Per-description drop counts, ordered by description.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SkipTally {
    counts: BTreeMap<String, u32>,
}

impl SkipTally {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read-modify-write through `&mut self`, so no two increments can race.
    pub fn record(&mut self, description: &str) {
        *self.counts.entry(description.to_string()).or_insert(0) += 1;
    }

    pub fn count(&self, description: &str) -> u32 {
        self.counts.get(description).copied().unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> {
        self.counts.iter().map(|(k, v)| (k.as_str(), *v))
    }

    /// Total number of dropped events across all descriptions.
    pub fn total(&self) -> u32 {
        self.counts.values().sum()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipDecision {
    Keep,
    /// Matched a skip rule and was tallied.
    Skipped,
    /// Blank description, dropped without a tally entry.
    Blank,
}

impl SkipDecision {
    pub fn is_skip(self) -> bool {
        self != Self::Keep
    }
}

#[derive(Debug, Default)]
pub struct SkipClassifier {
    rules: SkipRules,
    tally: SkipTally,
}

impl SkipClassifier {
    pub fn new(rules: SkipRules) -> Self {
        Self {
            rules,
            tally: SkipTally::new(),
        }
    }

    pub fn decide(&mut self, description: &str) -> SkipDecision {
        if self.rules.keep_all {
            return SkipDecision::Keep;
        }
        if self.rules.matches(description) {
            log::debug!("Skipping '{}'", description);
            self.tally.record(description);
            return SkipDecision::Skipped;
        }
        if description.trim().is_empty() {
            return SkipDecision::Blank;
        }
        SkipDecision::Keep
    }

    pub fn tally(&self) -> &SkipTally {
        &self.tally
    }

    pub fn into_tally(self) -> SkipTally {
        self.tally
    }
}
