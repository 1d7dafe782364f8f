//! Styled DOCX rendering of the canonical resume layout

use crate::builder::assembler::SECTION_HEADERS;
use crate::error::{Result, ResumeForgeError};
use docx_rs::{AlignmentType, Docx, LineSpacing, PageMargin, Paragraph, Run};
use serde::{Deserialize, Serialize};
use std::io::{Cursor, Seek, Write};

pub const ACCENT_COLOR: &str = "1F4E79";
const TITLE_COLOR: &str = "000000";

// Page margins in twips: 0.5in top/bottom, 0.75in left/right.
const MARGIN_VERTICAL: i32 = 720;
const MARGIN_HORIZONTAL: i32 = 1080;

// Run sizes in half-points.
const TITLE_SIZE: usize = 36;
const HEADING_SIZE: usize = 24;
const BODY_SIZE: usize = 20;

// Heading spacing in twentieths of a point: 10pt before, 6pt after.
const HEADING_SPACE_BEFORE: u32 = 200;
const HEADING_SPACE_AFTER: u32 = 120;

// Bullet indent in twips: 0.25in.
const BULLET_INDENT: i32 = 360;

/// How title and contact lines are identified.
///
/// `Positional` replays the legacy behavior: the absolute line index in
/// the raw text decides, so a leading blank line shifts every style
/// decision. `RoleBased` classifies the first and second non-blank lines
/// instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StyleMode {
    Positional,
    RoleBased,
}

impl Default for StyleMode {
    fn default() -> Self {
        StyleMode::RoleBased
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LineStyle {
    Title,
    Contact,
    SectionHeading,
    Bullet,
    Body,
}

pub struct DocxRenderer {
    style_mode: StyleMode,
}

impl DocxRenderer {
    pub fn new() -> Self {
        Self {
            style_mode: StyleMode::default(),
        }
    }

    pub fn with_style_mode(style_mode: StyleMode) -> Self {
        Self { style_mode }
    }

    /// Render canonical resume text into DOCX bytes.
    ///
    /// Empty input yields a valid, empty document.
    pub fn render(&self, content: &str) -> Result<Vec<u8>> {
        let mut cursor = Cursor::new(Vec::new());
        self.render_to(content, &mut cursor)?;
        Ok(cursor.into_inner())
    }

    /// Render into a caller-provided sink.
    pub fn render_to<W: Write + Seek>(&self, content: &str, writer: W) -> Result<()> {
        self.build_document(content)
            .build()
            .pack(writer)
            .map_err(|e| {
                ResumeForgeError::OutputFormatting(format!("Failed to package DOCX: {}", e))
            })
    }

    fn build_document(&self, content: &str) -> Docx {
        let mut docx = Docx::new().page_margin(
            PageMargin::new()
                .top(MARGIN_VERTICAL)
                .bottom(MARGIN_VERTICAL)
                .left(MARGIN_HORIZONTAL)
                .right(MARGIN_HORIZONTAL),
        );

        let mut body_index = 0;
        for (raw_index, line) in content.split('\n').enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            let style = self.classify(raw_index, body_index, line);
            body_index += 1;
            docx = docx.add_paragraph(styled_paragraph(style, line));
        }

        docx
    }

    fn classify(&self, raw_index: usize, body_index: usize, line: &str) -> LineStyle {
        let position = match self.style_mode {
            StyleMode::Positional => raw_index,
            StyleMode::RoleBased => body_index,
        };
        let trimmed = line.trim();

        if position == 0 {
            LineStyle::Title
        } else if position == 1 {
            LineStyle::Contact
        } else if SECTION_HEADERS.contains(&trimmed) {
            LineStyle::SectionHeading
        } else if trimmed.starts_with('•') || trimmed.starts_with('-') {
            LineStyle::Bullet
        } else {
            LineStyle::Body
        }
    }
}

impl Default for DocxRenderer {
    fn default() -> Self {
        Self::new()
    }
}

fn styled_paragraph(style: LineStyle, line: &str) -> Paragraph {
    let trimmed = line.trim();
    match style {
        LineStyle::Title => Paragraph::new().align(AlignmentType::Center).add_run(
            Run::new()
                .add_text(line)
                .size(TITLE_SIZE)
                .bold()
                .color(TITLE_COLOR),
        ),
        LineStyle::Contact => Paragraph::new()
            .align(AlignmentType::Center)
            .add_run(Run::new().add_text(line).size(BODY_SIZE)),
        LineStyle::SectionHeading => Paragraph::new()
            .line_spacing(
                LineSpacing::new()
                    .before(HEADING_SPACE_BEFORE)
                    .after(HEADING_SPACE_AFTER),
            )
            .add_run(
                Run::new()
                    .add_text(trimmed.to_uppercase())
                    .size(HEADING_SIZE)
                    .bold()
                    .color(ACCENT_COLOR),
            ),
        LineStyle::Bullet => Paragraph::new()
            .indent(Some(BULLET_INDENT), None, None, None)
            .add_run(Run::new().add_text(trimmed).size(BODY_SIZE)),
        LineStyle::Body => Paragraph::new().add_run(Run::new().add_text(line).size(BODY_SIZE)),
    }
}

/// Download filename for a rendered resume, stamped with the render date.
pub fn download_filename(user_id: &str) -> String {
    format!(
        "Resume_{}_{}.docx",
        user_id,
        chrono::Local::now().format("%Y%m%d")
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::text_extractor::{DocxExtractor, TextExtractor};

    const SAMPLE: &str = "Jane Doe\nCity | 555-0000 | jane@x.com\n\nEducation\nBS CS\nMIT | 2020\n";

    #[test]
    fn test_classify_role_based() {
        let renderer = DocxRenderer::new();

        assert_eq!(renderer.classify(0, 0, "Jane Doe"), LineStyle::Title);
        assert_eq!(renderer.classify(1, 1, "City | jane@x.com"), LineStyle::Contact);
        assert_eq!(renderer.classify(3, 2, "Education"), LineStyle::SectionHeading);
        assert_eq!(renderer.classify(4, 3, "• Led a team"), LineStyle::Bullet);
        assert_eq!(renderer.classify(5, 4, "BS CS"), LineStyle::Body);
    }

    #[test]
    fn test_leading_blank_line_does_not_shift_roles() {
        // With a leading blank line, raw indices shift by one but
        // role-based classification still styles the name as the title.
        let renderer = DocxRenderer::new();
        assert_eq!(renderer.classify(1, 0, "Jane Doe"), LineStyle::Title);

        let legacy = DocxRenderer::with_style_mode(StyleMode::Positional);
        assert_eq!(legacy.classify(1, 0, "Jane Doe"), LineStyle::Contact);
    }

    #[test]
    fn test_render_produces_docx_container() {
        let bytes = DocxRenderer::new().render(SAMPLE).unwrap();
        // DOCX is a zip container
        assert_eq!(&bytes[..2], b"PK");
    }

    #[test]
    fn test_rendered_text_roundtrip() {
        let bytes = DocxRenderer::new().render(SAMPLE).unwrap();
        let text = DocxExtractor.extract(&bytes).unwrap();

        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(
            lines,
            vec![
                "Jane Doe",
                "City | 555-0000 | jane@x.com",
                "EDUCATION",
                "BS CS",
                "MIT | 2020",
            ]
        );
        // Blank source lines produce no paragraphs at all
        assert!(!text.contains("\n\n"));
    }

    #[test]
    fn test_heading_styling_in_document_xml() {
        use std::io::Read;

        let bytes = DocxRenderer::new().render(SAMPLE).unwrap();
        let mut archive = zip::ZipArchive::new(Cursor::new(&bytes[..])).unwrap();
        let mut xml = String::new();
        archive
            .by_name("word/document.xml")
            .unwrap()
            .read_to_string(&mut xml)
            .unwrap();

        assert!(xml.contains("EDUCATION"));
        assert!(xml.contains(ACCENT_COLOR));
        assert!(xml.contains("center"));
    }

    #[test]
    fn test_empty_content_renders_valid_document() {
        let bytes = DocxRenderer::new().render("").unwrap();
        assert_eq!(&bytes[..2], b"PK");

        let text = DocxExtractor.extract(&bytes).unwrap();
        assert!(text.is_empty());
    }

    #[test]
    fn test_download_filename_shape() {
        let name = download_filename("42");
        assert!(name.starts_with("Resume_42_"));
        assert!(name.ends_with(".docx"));
        // Resume_42_YYYYMMDD.docx
        assert_eq!(name.len(), "Resume_42_".len() + 8 + ".docx".len());
    }
}
