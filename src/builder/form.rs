//! Structured resume form data and the flat-payload boundary parser

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResumeFormData {
    #[serde(default)]
    pub full_name: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub linkedin: String,
    #[serde(default)]
    pub github: String,
    #[serde(default)]
    pub portfolio: String,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub skills_languages: String,
    #[serde(default)]
    pub skills_frontend: String,
    #[serde(default)]
    pub skills_backend: String,
    #[serde(default)]
    pub skills_database: String,
    #[serde(default)]
    pub skills_tools: String,
    #[serde(default)]
    pub educations: Vec<EducationEntry>,
    #[serde(default)]
    pub projects: Vec<ProjectEntry>,
    #[serde(default)]
    pub experiences: Vec<ExperienceEntry>,
    #[serde(default)]
    pub certifications: Vec<CertificationEntry>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EducationEntry {
    #[serde(default)]
    pub degree: String,
    #[serde(default)]
    pub institution: String,
    #[serde(default)]
    pub duration: String,
    #[serde(default)]
    pub details: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProjectEntry {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub github: String,
    #[serde(default)]
    pub live: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub tech: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExperienceEntry {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub duration: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CertificationEntry {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub org: String,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub credential: String,
    #[serde(default)]
    pub description: String,
}

// Completeness predicates: an entry is rendered iff its predicate holds.

impl EducationEntry {
    pub fn is_complete(&self) -> bool {
        !self.degree.is_empty() && !self.institution.is_empty()
    }
}

impl ProjectEntry {
    pub fn is_complete(&self) -> bool {
        !self.name.is_empty()
    }
}

impl ExperienceEntry {
    pub fn is_complete(&self) -> bool {
        !self.title.is_empty() && !self.company.is_empty()
    }
}

impl CertificationEntry {
    pub fn is_complete(&self) -> bool {
        !self.name.is_empty() && !self.org.is_empty()
    }
}

impl ResumeFormData {
    /// Translate a flat key-value form payload into shaped form data.
    ///
    /// Repeated sections use `<section>_count` plus indexed keys
    /// `<prefix>_<field>_<i>` for `i` in `0..count`. A missing key yields
    /// the empty string; an unparsable count yields zero entries.
    pub fn from_payload(payload: &HashMap<String, String>) -> Self {
        let field = |key: &str| payload.get(key).cloned().unwrap_or_default();
        let indexed = |prefix: &str, name: &str, i: usize| field(&format!("{}_{}_{}", prefix, name, i));
        let count = |key: &str| {
            payload
                .get(key)
                .and_then(|value| value.trim().parse::<usize>().ok())
                .unwrap_or(0)
        };

        let educations = (0..count("education_count"))
            .map(|i| EducationEntry {
                degree: indexed("edu", "degree", i),
                institution: indexed("edu", "institution", i),
                duration: indexed("edu", "duration", i),
                details: indexed("edu", "details", i),
            })
            .collect();

        let projects = (0..count("projects_count"))
            .map(|i| ProjectEntry {
                name: indexed("project", "name", i),
                date: indexed("project", "date", i),
                github: indexed("project", "github", i),
                live: indexed("project", "live", i),
                description: indexed("project", "description", i),
                tech: indexed("project", "tech", i),
            })
            .collect();

        let experiences = (0..count("experience_count"))
            .map(|i| ExperienceEntry {
                title: indexed("exp", "title", i),
                company: indexed("exp", "company", i),
                location: indexed("exp", "location", i),
                duration: indexed("exp", "duration", i),
                description: indexed("exp", "description", i),
            })
            .collect();

        let certifications = (0..count("certifications_count"))
            .map(|i| CertificationEntry {
                name: indexed("cert", "name", i),
                org: indexed("cert", "org", i),
                date: indexed("cert", "date", i),
                credential: indexed("cert", "credential", i),
                description: indexed("cert", "description", i),
            })
            .collect();

        Self {
            full_name: field("full_name"),
            location: field("location"),
            phone: field("phone"),
            email: field("email"),
            linkedin: field("linkedin"),
            github: field("github"),
            portfolio: field("portfolio"),
            summary: field("summary"),
            skills_languages: field("skills_languages"),
            skills_frontend: field("skills_frontend"),
            skills_backend: field("skills_backend"),
            skills_database: field("skills_database"),
            skills_tools: field("skills_tools"),
            educations,
            projects,
            experiences,
            certifications,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_scalar_fields() {
        let data = ResumeFormData::from_payload(&payload(&[
            ("full_name", "Jane Doe"),
            ("email", "jane@x.com"),
            ("skills_backend", "Rust, Python"),
        ]));

        assert_eq!(data.full_name, "Jane Doe");
        assert_eq!(data.email, "jane@x.com");
        assert_eq!(data.skills_backend, "Rust, Python");
        assert_eq!(data.location, "");
        assert!(data.educations.is_empty());
    }

    #[test]
    fn test_indexed_entries() {
        let data = ResumeFormData::from_payload(&payload(&[
            ("education_count", "2"),
            ("edu_degree_0", "BS Computer Science"),
            ("edu_institution_0", "MIT"),
            ("edu_duration_0", "2016-2020"),
            ("edu_degree_1", "MS Computer Science"),
            ("edu_institution_1", "Stanford"),
        ]));

        assert_eq!(data.educations.len(), 2);
        assert_eq!(data.educations[0].degree, "BS Computer Science");
        assert_eq!(data.educations[1].institution, "Stanford");
        assert_eq!(data.educations[1].duration, "");
    }

    #[test]
    fn test_index_gap_truncates_to_empty() {
        // count says 3 but index 1 is missing entirely
        let data = ResumeFormData::from_payload(&payload(&[
            ("experience_count", "3"),
            ("exp_title_0", "Engineer"),
            ("exp_company_0", "Acme"),
            ("exp_title_2", "Lead"),
            ("exp_company_2", "Globex"),
        ]));

        assert_eq!(data.experiences.len(), 3);
        assert!(data.experiences[0].is_complete());
        assert!(!data.experiences[1].is_complete());
        assert_eq!(data.experiences[1].title, "");
        assert!(data.experiences[2].is_complete());
    }

    #[test]
    fn test_unparsable_count_yields_no_entries() {
        let data = ResumeFormData::from_payload(&payload(&[
            ("projects_count", "lots"),
            ("project_name_0", "orphaned"),
        ]));
        assert!(data.projects.is_empty());
    }

    #[test]
    fn test_completeness_predicates() {
        assert!(EducationEntry {
            degree: "BS".into(),
            institution: "MIT".into(),
            ..Default::default()
        }
        .is_complete());
        assert!(!EducationEntry {
            degree: "BS".into(),
            ..Default::default()
        }
        .is_complete());

        assert!(ProjectEntry {
            name: "forge".into(),
            ..Default::default()
        }
        .is_complete());
        assert!(!ProjectEntry::default().is_complete());

        assert!(!ExperienceEntry {
            title: "Engineer".into(),
            ..Default::default()
        }
        .is_complete());

        assert!(CertificationEntry {
            name: "AWS SA".into(),
            org: "Amazon".into(),
            ..Default::default()
        }
        .is_complete());
    }
}
