// File: ./src/document.rs
//! Reading pasted calendar paragraphs and writing the formatted output.
//!
//! `.docx` files are handled directly as their zip container: paragraphs
//! are read from `word/document.xml`, and output is written as a minimal
//! WordprocessingML package. Any other extension is read as plain text
//! with one paragraph per line.

use anyhow::{Context, Result, anyhow};
use quick_xml::escape::escape;
use std::fs::{self, File};
use std::io::{Read, Write};
use std::path::Path;
use zip::ZipArchive;
use zip::write::{FileOptions, ZipWriter};

const WORD_NS: &str = "http://schemas.openxmlformats.org/wordprocessingml/2006/main";
const DOCUMENT_PART: &str = "word/document.xml";

const CONTENT_TYPES: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types"><Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/><Default Extension="xml" ContentType="application/xml"/><Override PartName="/word/document.xml" ContentType="application/vnd.openxmlformats-officedocument.wordprocessingml.document.main+xml"/></Types>"#;

const PACKAGE_RELS: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships"><Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument" Target="word/document.xml"/></Relationships>"#;

fn is_docx(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("docx"))
}

/// Reads the input document as an ordered list of paragraph texts.
pub fn read_paragraphs(path: &Path) -> Result<Vec<String>> {
    if is_docx(path) {
        let file =
            File::open(path).with_context(|| format!("Failed to open {}", path.display()))?;
        let mut archive = ZipArchive::new(file)
            .with_context(|| format!("{} is not a valid .docx file", path.display()))?;
        let mut xml = String::new();
        archive
            .by_name(DOCUMENT_PART)
            .with_context(|| format!("{} has no {}", path.display(), DOCUMENT_PART))?
            .read_to_string(&mut xml)?;
        return paragraphs_from_xml(&xml);
    }

    let text =
        fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))?;
    Ok(text.lines().map(str::to_string).collect())
}

/// Text of each top-level `w:p` in the document body. Runs are concatenated
/// and `w:tab` becomes a tab character.
pub fn paragraphs_from_xml(xml: &str) -> Result<Vec<String>> {
    let doc = roxmltree::Document::parse(xml).context("Malformed document.xml")?;
    let body = doc
        .descendants()
        .find(|n| n.has_tag_name((WORD_NS, "body")))
        .ok_or_else(|| anyhow!("document.xml has no body"))?;

    let paragraphs = body
        .children()
        .filter(|n| n.has_tag_name((WORD_NS, "p")))
        .map(|p| {
            let mut text = String::new();
            // Only run content; `w:tab` under `w:pPr` is a tab stop definition.
            for run in p.descendants().filter(|n| n.has_tag_name((WORD_NS, "r"))) {
                for node in run.children() {
                    if node.has_tag_name((WORD_NS, "t")) {
                        text.push_str(node.text().unwrap_or_default());
                    } else if node.has_tag_name((WORD_NS, "tab")) {
                        text.push('\t');
                    }
                }
            }
            text
        })
        .collect();
    Ok(paragraphs)
}

// --- Output ---

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RunStyle {
    pub font: Option<String>,
    /// Half-points, as WordprocessingML stores them.
    pub size_half_points: Option<u32>,
    pub bold: bool,
    pub underline: bool,
}

#[derive(Debug, Clone, PartialEq)]
enum Piece {
    Text(String),
    Tab,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Paragraph {
    style: RunStyle,
    pieces: Vec<Piece>,
    tab_stops: Vec<u32>,
    hanging_indent: Option<u32>,
    single_spaced: bool,
}

impl Paragraph {
    pub fn new(style: RunStyle) -> Self {
        Self {
            style,
            ..Self::default()
        }
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.pieces.push(Piece::Text(text.into()));
        self
    }

    pub fn tab(mut self) -> Self {
        self.pieces.push(Piece::Tab);
        self
    }

    /// Left tab stops, in twips (1440 per inch).
    pub fn tab_stops(mut self, stops: &[u32]) -> Self {
        self.tab_stops = stops.to_vec();
        self
    }

    /// Left indent with the first line hanging back by the same amount, in twips.
    pub fn hanging_indent(mut self, twips: u32) -> Self {
        self.hanging_indent = Some(twips);
        self
    }

    /// No space after the paragraph, single line spacing.
    pub fn single_spaced(mut self) -> Self {
        self.single_spaced = true;
        self
    }

    fn write_xml(&self, out: &mut String) {
        out.push_str("<w:p><w:pPr>");
        if !self.tab_stops.is_empty() {
            out.push_str("<w:tabs>");
            for pos in &self.tab_stops {
                out.push_str(&format!(r#"<w:tab w:val="left" w:pos="{}"/>"#, pos));
            }
            out.push_str("</w:tabs>");
        }
        if self.single_spaced {
            out.push_str(r#"<w:spacing w:after="0" w:line="240" w:lineRule="auto"/>"#);
        }
        if let Some(twips) = self.hanging_indent {
            out.push_str(&format!(r#"<w:ind w:left="{0}" w:hanging="{0}"/>"#, twips));
        }
        out.push_str("</w:pPr><w:r><w:rPr>");
        if let Some(font) = &self.style.font {
            let font = escape(font.as_str());
            out.push_str(&format!(
                r#"<w:rFonts w:ascii="{0}" w:hAnsi="{0}" w:cs="{0}"/>"#,
                font
            ));
        }
        if self.style.bold {
            out.push_str("<w:b/>");
        }
        if self.style.underline {
            out.push_str(r#"<w:u w:val="single"/>"#);
        }
        if let Some(size) = self.style.size_half_points {
            out.push_str(&format!(r#"<w:sz w:val="{}"/>"#, size));
        }
        out.push_str("</w:rPr>");
        for piece in &self.pieces {
            match piece {
                Piece::Tab => out.push_str("<w:tab/>"),
                Piece::Text(t) => {
                    out.push_str(r#"<w:t xml:space="preserve">"#);
                    out.push_str(&escape(t.as_str()));
                    out.push_str("</w:t>");
                }
            }
        }
        out.push_str("</w:r></w:p>");
    }
}

/// A document being assembled paragraph by paragraph.
#[derive(Debug, Clone, Default)]
pub struct DocxDocument {
    paragraphs: Vec<Paragraph>,
}

impl DocxDocument {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, paragraph: Paragraph) {
        self.paragraphs.push(paragraph);
    }

    pub fn len(&self) -> usize {
        self.paragraphs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paragraphs.is_empty()
    }

    pub fn to_document_xml(&self) -> String {
        let mut out = String::from(
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#,
        );
        out.push_str(&format!(r#"<w:document xmlns:w="{}"><w:body>"#, WORD_NS));
        for p in &self.paragraphs {
            p.write_xml(&mut out);
        }
        out.push_str("</w:body></w:document>");
        out
    }

    /// Writes the package next to `path` and renames it into place, so a
    /// failed write never leaves a half-written document behind. The temp
    /// file is removed again when either step fails.
    pub fn save(&self, path: &Path) -> Result<()> {
        let tmp_path = path.with_extension("docx.tmp");
        let written = self.write_package(&tmp_path).and_then(|()| {
            fs::rename(&tmp_path, path)
                .with_context(|| format!("Failed to write {}", path.display()))
        });
        if let Err(e) = written {
            if tmp_path.exists()
                && let Err(cleanup) = fs::remove_file(&tmp_path)
            {
                log::warn!("Could not remove {}: {}", tmp_path.display(), cleanup);
            }
            return Err(e);
        }
        log::info!("Wrote {}", path.display());
        Ok(())
    }

    fn write_package(&self, tmp_path: &Path) -> Result<()> {
        let file = File::create(tmp_path)
            .with_context(|| format!("Failed to create {}", tmp_path.display()))?;
        let mut zip = ZipWriter::new(file);
        let options: FileOptions<'_, ()> =
            FileOptions::default().compression_method(zip::CompressionMethod::Deflated);

        zip.start_file("[Content_Types].xml", options)?;
        zip.write_all(CONTENT_TYPES.as_bytes())?;
        zip.start_file("_rels/.rels", options)?;
        zip.write_all(PACKAGE_RELS.as_bytes())?;
        zip.start_file(DOCUMENT_PART, options)?;
        zip.write_all(self.to_document_xml().as_bytes())?;
        zip.finish()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paragraphs_from_xml_reads_body_paragraphs_only() {
        let xml = format!(
            r#"<w:document xmlns:w="{ns}"><w:body>
                <w:p><w:r><w:t>12/7/</w:t></w:r><w:r><w:t>2023</w:t></w:r></w:p>
                <w:p/>
                <w:tbl><w:tr><w:tc><w:p><w:r><w:t>in a table</w:t></w:r></w:p></w:tc></w:tr></w:tbl>
                <w:p><w:pPr><w:tabs><w:tab w:val="left" w:pos="2160"/></w:tabs></w:pPr><w:r><w:t>A</w:t><w:tab/><w:t>B &amp; C</w:t></w:r></w:p>
            </w:body></w:document>"#,
            ns = WORD_NS
        );
        let paras = paragraphs_from_xml(&xml).unwrap();
        assert_eq!(paras, vec!["12/7/2023", "", "A\tB & C"]);
    }

    #[test]
    fn test_document_xml_escapes_and_styles() {
        let mut doc = DocxDocument::new();
        doc.push(
            Paragraph::new(RunStyle {
                font: Some("Times New Roman".into()),
                bold: true,
                underline: true,
                ..RunStyle::default()
            })
            .tab_stops(&[2160, 3600])
            .text("R&R <night>"),
        );
        let xml = doc.to_document_xml();
        assert!(xml.contains("R&amp;R &lt;night&gt;"));
        assert!(xml.contains("<w:b/>"));
        assert!(xml.contains(r#"<w:u w:val="single"/>"#));
        assert!(xml.contains(r#"w:pos="3600""#));
    }
}
