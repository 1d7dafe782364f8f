//! Closed-vocabulary skill extraction

use std::collections::HashSet;
use unicode_segmentation::UnicodeSegmentation;

/// Recognized skills. Closed list; extend per deployment but keep explicit.
/// Multi-word entries are matched as phrases, not tokens.
pub const SKILL_VOCABULARY: &[&str] = &[
    "python",
    "java",
    "sql",
    "flask",
    "django",
    "html",
    "css",
    "javascript",
    "machine learning",
    "ai",
];

/// Vocabulary and stop list are disjoint today; the filter guards
/// future vocabulary entries.
pub const STOP_WORDS: &[&str] = &[
    "and", "or", "the", "is", "to", "in", "of", "for", "with", "a", "an", "on",
];

pub struct SkillExtractor {
    stop_words: HashSet<&'static str>,
}

impl SkillExtractor {
    pub fn new() -> Self {
        Self {
            stop_words: STOP_WORDS.iter().copied().collect(),
        }
    }

    /// Extract the set of vocabulary skills present in the text.
    ///
    /// Single-word entries match whole tokens of the lowercased text;
    /// multi-word entries match by phrase containment.
    pub fn extract(&self, text: &str) -> HashSet<String> {
        let lowered = text.to_lowercase();
        let tokens: HashSet<&str> = lowered.unicode_words().collect();

        let mut skills = HashSet::new();
        for entry in SKILL_VOCABULARY {
            if self.stop_words.contains(entry) {
                continue;
            }

            let found = if entry.contains(' ') {
                lowered.contains(entry)
            } else {
                tokens.contains(entry)
            };

            if found {
                skills.insert((*entry).to_string());
            }
        }

        skills
    }
}

impl Default for SkillExtractor {
    fn default() -> Self {
        Self::new()
    }
}
