// File: ./src/session.rs
//! Per-run rendering state.
//!
//! The reporting window, punctuation choice and "last date printed" marker
//! live here instead of in statics, so two runs (or two tests) never see
//! each other's state. Pass the session to whatever renders or filters.

use crate::model::display::{BulletinRow, DateHeaders, EventDisplay, Punctuation, window_header};
use crate::model::event::{CalendarEvent, EventArena, EventId};
use crate::model::window::ReportingWindow;

#[derive(Debug, Clone)]
pub struct RunSession {
    pub window: ReportingWindow,
    pub punctuation: Punctuation,
    headers: DateHeaders,
}

impl RunSession {
    pub fn new(window: ReportingWindow, punctuation: Punctuation) -> Self {
        Self {
            window,
            punctuation,
            headers: DateHeaders::new(),
        }
    }

    /// Start-of-run reset: new window, fresh date de-duplication.
    pub fn reset(&mut self, window: ReportingWindow) {
        self.window = window;
        self.headers.reset();
    }

    /// Call between output sections so each restarts its own date headers.
    pub fn begin_section(&mut self) {
        self.headers.reset();
    }

    pub fn header(&self) -> String {
        window_header(&self.window, self.punctuation)
    }

    pub fn is_included(&self, event: &CalendarEvent) -> bool {
        self.window.includes(event)
    }

    pub fn row(&mut self, event: &CalendarEvent) -> BulletinRow {
        BulletinRow {
            date: self.headers.date_string(event, self.punctuation),
            time: event.time_string(),
            description: event.description().to_string(),
        }
    }

    /// Renders one section: filters by window, then formats in list order.
    pub fn render_section(&mut self, arena: &EventArena, ids: &[EventId]) -> Vec<BulletinRow> {
        self.begin_section();
        let mut rows = Vec::new();
        for event in arena.resolve(ids) {
            if self.is_included(event) {
                rows.push(self.row(event));
            }
        }
        rows
    }
}
