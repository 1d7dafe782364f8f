//! Resume text analysis: ATS scoring and skill extraction

pub mod ats;
pub mod skills;

pub use ats::{AtsScorer, ScoreReport};
pub use skills::SkillExtractor;
