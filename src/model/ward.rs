// File: ./src/model/ward.rs
//! Stake-wide vs ward-specific classification.
//!
//! Matching is plain substring search. Short codes like "CY" or "CR" also hit
//! inside unrelated words ("CRAFT", "CYCLE"); the skip lists are where such
//! false positives get cleaned up.

use std::fmt;
use strum::{EnumIter, EnumString, IntoEnumIterator};

/// Checked case-insensitively, and before any ward marker.
const STAKE_WIDE_MARKERS: [&str; 5] = [
    "STAKE",
    "SEMINARY",
    "WARD CONFERENCE",
    "BRANCH CONFERENCE",
    "FAMILY HISTORY MARATHON",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, EnumString)]
#[strum(ascii_case_insensitive)]
pub enum Ward {
    #[strum(serialize = "BP")]
    BuenaPark,
    #[strum(serialize = "CY")]
    Cypress,
    #[strum(serialize = "LP")]
    LaPalma,
    #[strum(serialize = "CR")]
    Crescent,
    #[strum(serialize = "VV")]
    ValleyView,
    #[strum(serialize = "CP")]
    CypressPark,
    #[strum(serialize = "WG")]
    WestGrove,
    #[strum(serialize = "GG")]
    GardenGrove,
}

impl Ward {
    pub fn code(self) -> &'static str {
        match self {
            Ward::BuenaPark => "BP",
            Ward::Cypress => "CY",
            Ward::LaPalma => "LP",
            Ward::Crescent => "CR",
            Ward::ValleyView => "VV",
            Ward::CypressPark => "CP",
            Ward::WestGrove => "WG",
            Ward::GardenGrove => "GG",
        }
    }

    /// Case-sensitive substrings that mark an event as belonging to some ward.
    fn markers(self) -> &'static [&'static str] {
        match self {
            Ward::BuenaPark => &["BP", "Buena Park"],
            Ward::Cypress => &["CY", "Cyp", "Cypress"],
            Ward::LaPalma => &["LP", "La Palma"],
            Ward::Crescent => &["CR", "Crescent"],
            Ward::ValleyView => &["VV", "V V", "V. V.", "Valley View"],
            Ward::CypressPark => &["CP", "Cypress Park"],
            Ward::WestGrove => &["WG", "West Grove"],
            Ward::GardenGrove => &["GG", "Garden Grove", "Korean"],
        }
    }

    /// Stricter substrings that must match when output is restricted to this ward.
    pub fn filter_markers(self) -> &'static [&'static str] {
        match self {
            Ward::BuenaPark => &["BP", "Buena Park Ward"],
            Ward::Cypress => &["CY", "Cypress Ward"],
            Ward::LaPalma => &["LP", "La Palma Ward"],
            Ward::Crescent => &["CR", "Crescent Ward"],
            Ward::ValleyView => &["VV", "V V", "V. V.", "Valley View Ward"],
            Ward::CypressPark => &["CP", "Cypress Park Ward"],
            Ward::WestGrove => &["WG", "West Grove Ward"],
            Ward::GardenGrove => &["GG", "Garden Grove 11th Branch", "Korean"],
        }
    }

    /// What the upcoming-events digest treats as a ward event. Close to the
    /// filter markers, so a city name alone ("Garden Grove Temple") is kept.
    fn digest_markers(self) -> &'static [&'static str] {
        match self {
            Ward::Cypress => &["CY", "Cyp", "Cypress Ward"],
            other => other.filter_markers(),
        }
    }

    pub fn matches(self, description: &str) -> bool {
        self.filter_markers()
            .iter()
            .any(|m| description.contains(m))
    }

    /// All valid codes joined with `|`, for usage text.
    pub fn code_list() -> String {
        Ward::iter().map(Ward::code).collect::<Vec<_>>().join("|")
    }
}

impl fmt::Display for Ward {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

pub fn is_stake_wide(description: &str) -> bool {
    let upper = description.to_uppercase();
    STAKE_WIDE_MARKERS.iter().any(|m| upper.contains(m))
}

/// A description is a ward event when it is not stake-wide and mentions any ward.
pub fn is_ward_event(description: &str) -> bool {
    if is_stake_wide(description) {
        return false;
    }
    Ward::iter().any(|w| w.markers().iter().any(|m| description.contains(m)))
}

/// The digest's narrower notion of a ward event. Stake-wide vocabulary still
/// wins first.
pub fn is_digest_ward_event(description: &str) -> bool {
    if is_stake_wide(description) {
        return false;
    }
    Ward::iter().any(|w| w.digest_markers().iter().any(|m| description.contains(m)))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Routing {
    Stake,
    Ward,
    /// A ward event for some other ward while a ward filter is active.
    Dropped,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct WardClassifier {
    only: Option<Ward>,
}

impl WardClassifier {
    pub fn new(only: Option<Ward>) -> Self {
        Self { only }
    }

    pub fn filter(&self) -> Option<Ward> {
        self.only
    }

    pub fn route(&self, description: &str) -> Routing {
        if !is_ward_event(description) {
            return Routing::Stake;
        }
        match self.only {
            Some(ward) if !ward.matches(description) => Routing::Dropped,
            _ => Routing::Ward,
        }
    }
}
