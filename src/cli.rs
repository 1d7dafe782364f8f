//! CLI interface for resume forge

use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "resume-forge")]
#[command(about = "Rule-based resume scoring, skill extraction, and DOCX generation")]
#[command(
    long_about = "Score resumes against a fixed ATS rule set, extract known skills, assemble professional resumes from structured form data, and render them as styled DOCX documents"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Score a resume file against the ATS rule set
    Score {
        /// Path to resume file (PDF, DOCX, TXT)
        #[arg(short, long)]
        resume: PathBuf,

        /// Output format: console, json
        #[arg(short, long, default_value = "console")]
        output: String,

        /// Also list the extracted skills
        #[arg(short, long)]
        detailed: bool,
    },

    /// Extract known skills from a resume file
    Skills {
        /// Path to resume file (PDF, DOCX, TXT)
        #[arg(short, long)]
        resume: PathBuf,

        /// Output format: console, json
        #[arg(short, long, default_value = "console")]
        output: String,
    },

    /// Build a resume from structured form data and render it
    Build {
        /// Path to form data JSON
        #[arg(short, long)]
        form: PathBuf,

        /// Treat the JSON as a flat key-value form payload
        #[arg(long)]
        flat: bool,

        /// Output path for the DOCX (defaults to a generated filename)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// User id stamped into the generated filename
        #[arg(short, long, default_value = "resume")]
        user: String,

        /// Print the canonical resume text instead of rendering a DOCX
        #[arg(long)]
        text_only: bool,
    },

    /// Render canonical resume text to a styled DOCX
    Render {
        /// Path to canonical resume text file
        #[arg(short, long)]
        content: PathBuf,

        /// Output path for the DOCX (defaults to a generated filename)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// User id stamped into the generated filename
        #[arg(short, long, default_value = "resume")]
        user: String,

        /// Style by absolute line index (legacy layout compatibility)
        #[arg(long)]
        legacy_layout: bool,
    },

    /// Show or reset configuration
    Config {
        #[command(subcommand)]
        action: Option<ConfigAction>,
    },
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show current configuration
    Show,

    /// Reset configuration to defaults
    Reset,
}

/// Parse and validate output format
pub fn parse_output_format(format: &str) -> Result<crate::config::OutputFormat, String> {
    match format.to_lowercase().as_str() {
        "console" => Ok(crate::config::OutputFormat::Console),
        "json" => Ok(crate::config::OutputFormat::Json),
        _ => Err(format!(
            "Invalid output format: {}. Supported: console, json",
            format
        )),
    }
}

/// Validate file extension and return it lowercased
pub fn validate_file_extension(path: &Path, allowed_extensions: &[&str]) -> Result<String, String> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some(ext) => {
            let ext = ext.to_lowercase();
            if allowed_extensions.contains(&ext.as_str()) {
                Ok(ext)
            } else {
                Err(format!(
                    "Unsupported file extension: .{}. Allowed: {}",
                    ext,
                    allowed_extensions.join(", ")
                ))
            }
        }
        None => Err("File has no extension".to_string()),
    }
}
