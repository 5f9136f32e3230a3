// File: ./src/error.rs
//! Error taxonomy for calendar ingestion and argument handling.
//!
//! I/O plumbing (documents, config, skip lists) reports through `anyhow`
//! with context; the variants here are the failures callers branch on.

use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CalendarError {
    /// An event fragment showed up before any date fragment.
    #[error("Date must precede any events in list! (found \"{fragment}\" first)")]
    DateMustPrecedeEvents { fragment: String },

    /// A ward code passed to `-w` is not one of the known wards.
    #[error("Invalid ward pattern specified!  {0}")]
    InvalidWard(String),

    /// Anything else on the command line we could not make sense of.
    #[error("Invalid argument passed!  {0}")]
    InvalidArgument(String),
}

impl CalendarError {
    /// True for errors that should abort a run without writing output.
    pub fn is_fatal_parse(&self) -> bool {
        matches!(self, Self::DateMustPrecedeEvents { .. })
    }
}
