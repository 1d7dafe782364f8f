//! Resume forge: rule-based resume scoring, skill extraction, and DOCX generation

use clap::Parser;
use colored::Colorize;
use log::{error, info};
use resume_forge::analysis::{AtsScorer, ScoreReport, SkillExtractor};
use resume_forge::builder::{assemble, ResumeFormData};
use resume_forge::cli::{self, Cli, Commands, ConfigAction};
use resume_forge::config::{Config, OutputFormat};
use resume_forge::error::{Result, ResumeForgeError};
use resume_forge::input::{FileFormat, InputManager};
use resume_forge::output::{download_filename, DocxRenderer, StyleMode};
use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};
use std::process;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            process::exit(1);
        }
    };

    if !config.output.color_output {
        colored::control::set_override(false);
    }

    if let Err(e) = run_command(cli.command, config).await {
        error!("Command failed: {}", e);
        process::exit(1);
    }
}

async fn run_command(command: Commands, config: Config) -> Result<()> {
    match command {
        Commands::Score {
            resume,
            output,
            detailed,
        } => {
            let format = cli::parse_output_format(&output).map_err(ResumeForgeError::InvalidInput)?;
            let text = extract_from_file(&resume, &config).await?;

            let report = AtsScorer::new().score(&text);
            let skills = SkillExtractor::new().extract(&text);

            match format {
                OutputFormat::Json => {
                    println!(
                        "{}",
                        serde_json::to_string_pretty(&serde_json::json!({
                            "score": report.score,
                            "feedback": report.feedback,
                            "skills": sorted(skills),
                        }))?
                    );
                }
                OutputFormat::Console => {
                    print_score(&report);
                    if detailed || config.output.detailed {
                        print_skills(&skills);
                    }
                }
            }
        }

        Commands::Skills { resume, output } => {
            let format = cli::parse_output_format(&output).map_err(ResumeForgeError::InvalidInput)?;
            let text = extract_from_file(&resume, &config).await?;
            let skills = SkillExtractor::new().extract(&text);

            match format {
                OutputFormat::Json => {
                    println!("{}", serde_json::to_string_pretty(&sorted(skills))?);
                }
                OutputFormat::Console => print_skills(&skills),
            }
        }

        Commands::Build {
            form,
            flat,
            output,
            user,
            text_only,
        } => {
            let raw = tokio::fs::read_to_string(&form).await?;
            let data = if flat {
                let payload: HashMap<String, String> = serde_json::from_str(&raw)?;
                ResumeFormData::from_payload(&payload)
            } else {
                serde_json::from_str(&raw)?
            };

            let content = assemble(&data);
            let report = AtsScorer::new().score(&content);

            if text_only {
                println!("{}", content);
                print_score(&report);
                return Ok(());
            }

            let path = output.unwrap_or_else(|| PathBuf::from(download_filename(&user)));
            let bytes = DocxRenderer::with_style_mode(config.render.style_mode).render(&content)?;
            tokio::fs::write(&path, bytes).await?;

            println!("✅ Resume written to {}", path.display());
            print_score(&report);
        }

        Commands::Render {
            content,
            output,
            user,
            legacy_layout,
        } => {
            let text = tokio::fs::read_to_string(&content).await?;

            let style_mode = if legacy_layout {
                StyleMode::Positional
            } else {
                config.render.style_mode
            };

            let path = output.unwrap_or_else(|| PathBuf::from(download_filename(&user)));
            let bytes = DocxRenderer::with_style_mode(style_mode).render(&text)?;
            tokio::fs::write(&path, bytes).await?;

            println!("✅ Resume written to {}", path.display());
        }

        Commands::Config { action } => match action {
            Some(ConfigAction::Show) | None => {
                println!("⚙️  Current Configuration\n");
                println!("Minimum extracted length: {}", config.extraction.min_text_length);
                println!("Render style mode: {:?}", config.render.style_mode);
                println!("Output format: {:?}", config.output.format);
                println!("Color output: {}", config.output.color_output);
            }
            Some(ConfigAction::Reset) => {
                Config::default().save()?;
                println!("✅ Configuration reset successfully!");
            }
        },
    }

    Ok(())
}

/// Read a resume file and run it through the extraction pipeline.
async fn extract_from_file(path: &Path, config: &Config) -> Result<String> {
    let extension = cli::validate_file_extension(path, FileFormat::allowed_extensions())
        .map_err(ResumeForgeError::InvalidInput)?;

    info!("Extracting text from {}", path.display());
    let bytes = tokio::fs::read(path).await?;

    let manager = InputManager::new().with_min_text_length(config.extraction.min_text_length);
    manager.extract(&bytes, &extension)
}

fn print_score(report: &ScoreReport) {
    let banner = format!("{}/100", report.score);
    let banner = if report.score >= 80 {
        banner.green().bold()
    } else if report.score >= 60 {
        banner.yellow().bold()
    } else {
        banner.red().bold()
    };

    println!("\n📊 ATS Score: {}", banner);

    if report.feedback.is_empty() {
        println!("No feedback, all scoring rules satisfied.");
    } else {
        println!("\n💡 Feedback:");
        for message in &report.feedback {
            println!("  • {}", message);
        }
    }
}

fn print_skills(skills: &HashSet<String>) {
    if skills.is_empty() {
        println!("\n🔧 No known skills detected");
        return;
    }

    let mut skills: Vec<&String> = skills.iter().collect();
    skills.sort();

    println!("\n🔧 Skills detected:");
    for skill in skills {
        println!("  • {}", skill);
    }
}

fn sorted(skills: HashSet<String>) -> Vec<String> {
    let mut skills: Vec<String> = skills.into_iter().collect();
    skills.sort();
    skills
}
