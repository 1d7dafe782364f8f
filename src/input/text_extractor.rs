//! Text extraction from various file formats

use crate::error::{Result, ResumeForgeError};
use log::warn;
use quick_xml::events::Event;
use quick_xml::Reader;
use std::io::{Cursor, Read};

pub trait TextExtractor {
    fn extract(&self, bytes: &[u8]) -> Result<String>;
}

pub struct PlainTextExtractor;

impl TextExtractor for PlainTextExtractor {
    fn extract(&self, bytes: &[u8]) -> Result<String> {
        let content = std::str::from_utf8(bytes)
            .map_err(|e| ResumeForgeError::Decode(format!("Invalid UTF-8 in text file: {}", e)))?;
        Ok(content.trim().to_string())
    }
}

pub struct PdfExtractor;

impl TextExtractor for PdfExtractor {
    fn extract(&self, bytes: &[u8]) -> Result<String> {
        // Unreadable documents yield empty text; the manager turns that
        // into an extraction failure instead of a crash.
        match pdf_extract::extract_text_from_mem(bytes) {
            Ok(text) => Ok(text.trim().to_string()),
            Err(e) => {
                warn!("Error extracting PDF: {}", e);
                Ok(String::new())
            }
        }
    }
}

pub struct DocxExtractor;

impl TextExtractor for DocxExtractor {
    fn extract(&self, bytes: &[u8]) -> Result<String> {
        match docx_paragraph_text(bytes) {
            Ok(text) => Ok(text),
            Err(e) => {
                warn!("Error extracting DOCX: {}", e);
                Ok(String::new())
            }
        }
    }
}

/// Pull the paragraph texts out of the OOXML main document part,
/// newline-joined in document order.
fn docx_paragraph_text(bytes: &[u8]) -> std::result::Result<String, String> {
    let mut archive = zip::ZipArchive::new(Cursor::new(bytes))
        .map_err(|e| format!("not a DOCX container: {}", e))?;

    let mut document_xml = String::new();
    archive
        .by_name("word/document.xml")
        .map_err(|e| format!("missing word/document.xml: {}", e))?
        .read_to_string(&mut document_xml)
        .map_err(|e| format!("unreadable document part: {}", e))?;

    let mut reader = Reader::from_str(&document_xml);
    let mut paragraphs: Vec<String> = Vec::new();
    let mut current = String::new();
    let mut in_text = false;

    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) => {
                if e.name().as_ref() == b"w:t" {
                    in_text = true;
                }
            }
            Ok(Event::End(e)) => match e.name().as_ref() {
                b"w:t" => in_text = false,
                b"w:p" => paragraphs.push(std::mem::take(&mut current)),
                _ => {}
            },
            Ok(Event::Text(t)) if in_text => {
                let text = t
                    .unescape()
                    .map_err(|e| format!("malformed document XML: {}", e))?;
                current.push_str(&text);
            }
            Ok(Event::Eof) => break,
            Ok(_) => {}
            Err(e) => return Err(format!("malformed document XML: {}", e)),
        }
    }

    Ok(paragraphs.join("\n").trim().to_string())
}
