// File: ./src/model/mod.rs
pub mod builder;
pub mod display;
pub mod event;
pub mod merge;
pub mod parser;
pub mod skip;
pub mod ward;
pub mod window;

pub use builder::{Candidate, ParseState};
pub use display::{BulletinRow, DateHeaders, EventDisplay, Punctuation};
pub use event::{CalendarEvent, EventArena, EventId};
pub use merge::{MergeOutcome, MultiDayMerger};
pub use parser::{Fragment, InputFormat, classify};
pub use skip::{SkipClassifier, SkipDecision, SkipRules, SkipTally};
pub use ward::{Routing, Ward, WardClassifier};
pub use window::ReportingWindow;
