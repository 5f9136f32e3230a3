// Crate root library declaration and module exports.
pub mod cli;
pub mod config;
pub mod context;
pub mod document;
pub mod error;
pub mod logging;
pub mod model;
pub mod pipeline;
pub mod report;
pub mod session;
pub mod skiplist;

pub use error::CalendarError;
