//! Input manager for routing byte streams to the right extractor

use crate::error::{Result, ResumeForgeError};
use crate::input::file_detector::FileFormat;
use crate::input::text_extractor::{DocxExtractor, PdfExtractor, PlainTextExtractor, TextExtractor};
use log::info;

/// Extractions shorter than this (trimmed) are treated as failures,
/// not as valid resume content.
pub const MIN_TEXT_LENGTH: usize = 10;

pub struct InputManager {
    min_text_length: usize,
}

impl InputManager {
    pub fn new() -> Self {
        Self {
            min_text_length: MIN_TEXT_LENGTH,
        }
    }

    pub fn with_min_text_length(mut self, min_text_length: usize) -> Self {
        self.min_text_length = min_text_length;
        self
    }

    /// Extract resume text from a byte stream tagged with its file extension.
    ///
    /// Unknown extensions are rejected before any bytes are inspected.
    pub fn extract(&self, bytes: &[u8], extension: &str) -> Result<String> {
        let text = match FileFormat::from_extension(extension) {
            FileFormat::Pdf => {
                info!("Extracting text from PDF ({} bytes)", bytes.len());
                PdfExtractor.extract(bytes)?
            }
            FileFormat::Docx => {
                info!("Extracting text from DOCX ({} bytes)", bytes.len());
                DocxExtractor.extract(bytes)?
            }
            FileFormat::Text => {
                info!("Reading plain text input ({} bytes)", bytes.len());
                PlainTextExtractor.extract(bytes)?
            }
            FileFormat::Unknown => {
                return Err(ResumeForgeError::UnsupportedFormat(format!(
                    "'{}' is not an allowed extension (expected one of: {})",
                    extension,
                    FileFormat::allowed_extensions().join(", ")
                )));
            }
        };

        if text.trim().chars().count() < self.min_text_length {
            return Err(ResumeForgeError::ExtractionFailed(
                "Could not extract text from file. Please try another format or check the file content.".to_string(),
            ));
        }

        Ok(text)
    }
}

impl Default for InputManager {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_plain_text() {
        let manager = InputManager::new();
        let text = manager.extract(b"John Doe, Software Engineer", "txt").unwrap();
        assert_eq!(text, "John Doe, Software Engineer");
    }

    #[test]
    fn test_unsupported_extension_rejected() {
        let manager = InputManager::new();
        let result = manager.extract(b"some markdown content here", "md");
        assert!(matches!(result, Err(ResumeForgeError::UnsupportedFormat(_))));
    }

    #[test]
    fn test_short_text_is_extraction_failure() {
        let manager = InputManager::new();
        let result = manager.extract(b"   hi    ", "txt");
        assert!(matches!(result, Err(ResumeForgeError::ExtractionFailed(_))));
    }

    #[test]
    fn test_garbage_docx_is_extraction_failure() {
        let manager = InputManager::new();
        let result = manager.extract(b"definitely not a zip archive", "docx");
        assert!(matches!(result, Err(ResumeForgeError::ExtractionFailed(_))));
    }

    #[test]
    fn test_custom_min_length() {
        let manager = InputManager::new().with_min_text_length(3);
        let text = manager.extract(b"okay", "txt").unwrap();
        assert_eq!(text, "okay");
    }
}
