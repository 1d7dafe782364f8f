//! ATS (Applicant Tracking System) rule-based resume scoring

use aho_corasick::AhoCorasick;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

pub const MAX_SCORE: u8 = 100;

const EMAIL_PATTERN: &str = r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}\b";
const PHONE_PATTERN: &str = r"(\+?\d{1,3}[-.\s]?)?\(?\d{3}\)?[-.\s]?\d{3}[-.\s]?\d{4}";
const ACHIEVEMENT_PATTERN: &str = r"\d+%|\d+\+|increased|decreased|improved|reduced|generated|\$\d+";

const EMAIL_POINTS: u8 = 8;
const PHONE_POINTS: u8 = 7;
const SECTION_POINTS: u8 = 6;
const RED_FLAG_POINTS: u8 = 5;
const SKILL_FLOOR_POINTS: u8 = 5;

/// Key resume sections and the keywords that signal their presence.
const SECTION_CHECKS: &[(&str, &[&str])] = &[
    (
        "experience",
        &["experience", "work history", "employment", "professional experience"],
    ),
    (
        "education",
        &["education", "academic", "degree", "university", "college"],
    ),
    (
        "skills",
        &["skills", "technical skills", "competencies", "expertise"],
    ),
    ("summary", &["summary", "objective", "profile", "about"]),
];

/// Skills commonly screened for; matched as substrings of the lowercased text.
const COMMON_SKILLS: &[&str] = &[
    "python",
    "java",
    "javascript",
    "c++",
    "sql",
    "react",
    "node.js",
    "django",
    "machine learning",
    "data analysis",
    "communication",
    "leadership",
    "teamwork",
    "project management",
    "agile",
    "scrum",
    "git",
    "aws",
    "docker",
    "kubernetes",
];

const ACTION_VERBS: &[&str] = &[
    "achieved",
    "managed",
    "led",
    "developed",
    "created",
    "implemented",
    "designed",
    "built",
    "improved",
    "increased",
    "reduced",
    "organized",
    "coordinated",
    "executed",
    "launched",
    "delivered",
];

/// Words hinting at layout constructs that trip ATS parsers.
const RED_FLAGS: &[&str] = &["table", "image", "graphic"];

// Tier tables: (minimum count, points), checked top down so a count
// matching several tiers lands in the highest one.
const SKILL_TIERS: &[(usize, u8)] = &[(10, 20), (5, 15), (3, 10)];
const ACHIEVEMENT_TIERS: &[(usize, u8)] = &[(5, 15), (3, 10), (1, 5)];
const VERB_TIERS: &[(usize, u8)] = &[(5, 10), (3, 7), (1, 4)];

// Length tiers: (min words, max words, points), inclusive bounds.
const LENGTH_TIERS: &[(usize, usize, u8)] = &[(300, 800, 10), (200, 1000, 7)];

/// Scoring result: a capped score plus one feedback line per rule that
/// was not (fully) met, in rule evaluation order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreReport {
    pub score: u8,
    pub feedback: Vec<String>,
}

pub struct AtsScorer {
    email_regex: Regex,
    phone_regex: Regex,
    achievement_regex: Regex,
    skills_matcher: AhoCorasick,
    verbs_matcher: AhoCorasick,
}

impl AtsScorer {
    pub fn new() -> Self {
        let email_regex = Regex::new(EMAIL_PATTERN).expect("Invalid email regex");
        let phone_regex = Regex::new(PHONE_PATTERN).expect("Invalid phone regex");
        let achievement_regex =
            Regex::new(ACHIEVEMENT_PATTERN).expect("Invalid achievement regex");

        let skills_matcher =
            AhoCorasick::new(COMMON_SKILLS).expect("Failed to build skills matcher");
        let verbs_matcher =
            AhoCorasick::new(ACTION_VERBS).expect("Failed to build verbs matcher");

        Self {
            email_regex,
            phone_regex,
            achievement_regex,
            skills_matcher,
            verbs_matcher,
        }
    }

    /// Score resume text out of 100. Pure function of the text: the same
    /// input always yields the same report.
    pub fn score(&self, text: &str) -> ScoreReport {
        let mut score: u8 = 0;
        let mut feedback: Vec<String> = Vec::new();

        let text_lower = text.to_lowercase();

        // 1. Contact information
        if self.email_regex.is_match(text) {
            score += EMAIL_POINTS;
        } else {
            feedback.push("Add email address".to_string());
        }

        if self.phone_regex.is_match(text) {
            score += PHONE_POINTS;
        } else {
            feedback.push("Add phone number".to_string());
        }

        // 2. Key sections, each scored independently
        for (name, keywords) in SECTION_CHECKS {
            if keywords.iter().any(|keyword| text_lower.contains(keyword)) {
                score += SECTION_POINTS;
            } else {
                feedback.push(format!("Add {} section", name));
            }
        }

        // 3. Skills density
        let skills_found = distinct_terms(&self.skills_matcher, &text_lower);
        match tier_points(skills_found, SKILL_TIERS) {
            Some(points) => score += points,
            None => {
                score += SKILL_FLOOR_POINTS;
                feedback.push("Add more relevant skills".to_string());
            }
        }

        // 4. Quantifiable achievements
        let achievements = self.achievement_regex.find_iter(&text_lower).count();
        match tier_points(achievements, ACHIEVEMENT_TIERS) {
            Some(points) => score += points,
            None => {
                feedback.push("Add quantifiable achievements (numbers, percentages)".to_string())
            }
        }

        // 5. Length
        let word_count = text.split_whitespace().count();
        match length_points(word_count) {
            Some(points) => score += points,
            None => {
                feedback.push("Optimize resume length (300-800 words recommended)".to_string())
            }
        }

        // 6. Action verbs
        let verbs_found = distinct_terms(&self.verbs_matcher, &text_lower);
        match tier_points(verbs_found, VERB_TIERS) {
            Some(points) => score += points,
            None => feedback.push("Use more action verbs".to_string()),
        }

        // 7. No ATS red flags; silently forfeited, no feedback line
        if !RED_FLAGS.iter().any(|flag| text_lower.contains(flag)) {
            score += RED_FLAG_POINTS;
        }

        ScoreReport {
            score: score.min(MAX_SCORE),
            feedback,
        }
    }
}

impl Default for AtsScorer {
    fn default() -> Self {
        Self::new()
    }
}

/// Count how many of the matcher's terms occur in the text.
///
/// Overlapping scan keeps per-term substring semantics: "javascript"
/// credits both "java" and "javascript".
fn distinct_terms(matcher: &AhoCorasick, text: &str) -> usize {
    let found: HashSet<usize> = matcher
        .find_overlapping_iter(text)
        .map(|m| m.pattern().as_usize())
        .collect();
    found.len()
}

fn tier_points(count: usize, tiers: &[(usize, u8)]) -> Option<u8> {
    tiers
        .iter()
        .find(|(min, _)| count >= *min)
        .map(|(_, points)| *points)
}

fn length_points(word_count: usize) -> Option<u8> {
    LENGTH_TIERS
        .iter()
        .find(|(min, max, _)| (*min..=*max).contains(&word_count))
        .map(|(_, _, points)| *points)
}
