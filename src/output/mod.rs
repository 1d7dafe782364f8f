//! Document output: canonical layout to styled DOCX

pub mod docx;

pub use docx::{download_filename, DocxRenderer, StyleMode};
