// File: ./src/report.rs
//! Turns ingested lists into the finished bulletin or digest, either as
//! terminal text or as a `.docx` document.

use crate::document::{DocxDocument, Paragraph, RunStyle};
use crate::model::display::{BulletinRow, EventDisplay, Punctuation};
use crate::model::skip::SkipTally;
use crate::pipeline::{Bulletin, Digest};
use crate::session::RunSession;

pub const STAKE_SECTION: &str = "Stake-wide";
pub const WARD_SECTION: &str = "Ward Specific";

const HEADER_INDENT: usize = 28;
const DATE_COLUMN_TWIPS: u32 = 2160;
const DESCRIPTION_COLUMN_TWIPS: u32 = 3600;

/// The two-week bulletin after window filtering and date de-duplication.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BulletinReport {
    pub header: String,
    pub stake: Vec<BulletinRow>,
    pub ward: Vec<BulletinRow>,
}

impl BulletinReport {
    /// Each section restarts its own date headers.
    pub fn render(bulletin: &Bulletin, session: &mut RunSession) -> Self {
        let header = session.header();
        let stake = session.render_section(&bulletin.arena, &bulletin.lists.stake);
        let ward = session.render_section(&bulletin.arena, &bulletin.lists.ward);
        log::debug!(
            "Bulletin {}: {} stake rows, {} ward rows",
            header,
            stake.len(),
            ward.len()
        );
        Self {
            header,
            stake,
            ward,
        }
    }

    pub fn to_plain_text(&self) -> String {
        let mut out = String::from("\n");
        out.push_str(&format!("{:indent$}{}\n", "", self.header, indent = HEADER_INDENT));
        out.push_str(STAKE_SECTION);
        out.push('\n');
        for row in &self.stake {
            out.push_str(&row.to_plain_line());
            out.push('\n');
        }
        out.push('\n');
        out.push_str(WARD_SECTION);
        out.push('\n');
        for row in &self.ward {
            out.push_str(&row.to_plain_line());
            out.push('\n');
        }
        out
    }

    pub fn to_docx(&self, font: &str) -> DocxDocument {
        let plain = RunStyle {
            font: Some(font.to_string()),
            ..RunStyle::default()
        };
        let bold = RunStyle {
            bold: true,
            ..plain.clone()
        };
        let title = RunStyle {
            underline: true,
            ..bold.clone()
        };
        let layout = |style: &RunStyle| {
            Paragraph::new(style.clone())
                .tab_stops(&[DATE_COLUMN_TWIPS, DESCRIPTION_COLUMN_TWIPS])
                .hanging_indent(DESCRIPTION_COLUMN_TWIPS)
                .single_spaced()
        };
        let row_paragraph = |row: &BulletinRow| {
            layout(&plain)
                .text(row.date.as_str())
                .tab()
                .text(row.time.as_str())
                .tab()
                .text(row.description.as_str())
        };

        let mut doc = DocxDocument::new();
        doc.push(layout(&bold).tab().tab().text(self.header.as_str()));
        doc.push(layout(&title).text(STAKE_SECTION));
        for row in &self.stake {
            doc.push(row_paragraph(row));
        }
        doc.push(layout(&plain).text(""));
        doc.push(layout(&title).text(WARD_SECTION));
        for row in &self.ward {
            doc.push(row_paragraph(row));
        }
        doc
    }
}

/// The upcoming-events digest: one line per retained event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DigestReport {
    pub lines: Vec<String>,
}

impl DigestReport {
    pub fn render(digest: &Digest, punct: Punctuation) -> Self {
        Self {
            lines: digest.events().map(|e| e.digest_line(punct)).collect(),
        }
    }

    pub fn to_plain_text(&self) -> String {
        let mut out = String::from("\n");
        for line in &self.lines {
            out.push_str(line);
            out.push('\n');
        }
        out
    }

    pub fn to_docx(&self, font: &str, size_points: u32) -> DocxDocument {
        let style = RunStyle {
            font: Some(font.to_string()),
            size_half_points: Some(size_points * 2),
            ..RunStyle::default()
        };
        let mut doc = DocxDocument::new();
        for line in &self.lines {
            doc.push(Paragraph::new(style.clone()).single_spaced().text(line.as_str()));
        }
        doc
    }
}

/// The operator's review list, ordered by description.
pub fn skipped_events_text(tally: &SkipTally) -> String {
    let mut out = String::from("\nSKIPPED EVENTS\n");
    for (description, count) in tally.iter() {
        out.push_str(&format!("{} ({})\n", description, count));
    }
    out.push('\n');
    out
}
