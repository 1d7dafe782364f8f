//! Canonical resume layout assembly

use crate::builder::form::ResumeFormData;

/// Canonical section headers, in emission order. The renderer styles
/// lines whose trimmed content equals one of these.
pub const SECTION_HEADERS: &[&str] = &[
    "Professional Summary",
    "Education",
    "Technical Skills",
    "Projects",
    "Professional Experience",
    "Certifications",
];

/// Render form data into the canonical plain-text layout consumed by the
/// scorer, the skill extractor, and the document renderer.
///
/// Deterministic string building: output depends only on field presence.
pub fn assemble(data: &ResumeFormData) -> String {
    let mut content = String::new();

    push_contact_header(&mut content, data);
    push_summary(&mut content, data);
    push_education(&mut content, data);
    push_technical_skills(&mut content, data);
    push_projects(&mut content, data);
    push_experience(&mut content, data);
    push_certifications(&mut content, data);

    content
}

fn push_contact_header(content: &mut String, data: &ResumeFormData) {
    content.push_str(&data.full_name);
    content.push('\n');

    let mut contact = format!("{} | {} | {}", data.location, data.phone, data.email);

    let links: Vec<String> = [
        ("LinkedIn", &data.linkedin),
        ("GitHub", &data.github),
        ("Portfolio", &data.portfolio),
    ]
    .iter()
    .filter(|(_, value)| !value.is_empty())
    .map(|(label, value)| format!("{}: {}", label, value))
    .collect();

    if !links.is_empty() {
        contact.push_str(" | ");
        contact.push_str(&links.join(" | "));
    }

    content.push_str(&contact);
    content.push_str("\n\n");
}

fn push_summary(content: &mut String, data: &ResumeFormData) {
    if data.summary.is_empty() {
        return;
    }
    content.push_str("Professional Summary\n");
    content.push_str(&data.summary);
    content.push_str("\n\n");
}

fn push_education(content: &mut String, data: &ResumeFormData) {
    if data.educations.is_empty() {
        return;
    }
    content.push_str("Education\n");
    for edu in data.educations.iter().filter(|e| e.is_complete()) {
        content.push_str(&edu.degree);
        content.push('\n');
        content.push_str(&edu.institution);
        if !edu.duration.is_empty() {
            content.push_str(&format!(" | {}", edu.duration));
        }
        content.push('\n');
        if !edu.details.is_empty() {
            content.push_str(&edu.details);
            content.push('\n');
        }
        content.push('\n');
    }
}

fn push_technical_skills(content: &mut String, data: &ResumeFormData) {
    // Header is emitted even when every category is empty; stored
    // documents pin this shape.
    content.push_str("Technical Skills\n");

    let categories = [
        ("Languages", &data.skills_languages),
        ("Frontend", &data.skills_frontend),
        ("Backend", &data.skills_backend),
        ("Database", &data.skills_database),
        ("Tools", &data.skills_tools),
    ];
    for (label, value) in categories {
        if !value.is_empty() {
            content.push_str(&format!("{}: {}\n", label, value));
        }
    }
    content.push('\n');
}

fn push_projects(content: &mut String, data: &ResumeFormData) {
    if data.projects.is_empty() {
        return;
    }
    content.push_str("Projects\n");
    for proj in data.projects.iter().filter(|p| p.is_complete()) {
        content.push_str(&proj.name);

        let links: Vec<String> = [("GitHub", &proj.github), ("Live", &proj.live)]
            .iter()
            .filter(|(_, value)| !value.is_empty())
            .map(|(label, value)| format!("{}: {}", label, value))
            .collect();
        if !links.is_empty() {
            content.push_str(&format!(" | {}", links.join(" | ")));
        }
        if !proj.date.is_empty() {
            content.push_str(&format!(" | {}", proj.date));
        }
        content.push('\n');

        if !proj.description.is_empty() {
            content.push_str(&proj.description);
            content.push('\n');
        }
        if !proj.tech.is_empty() {
            content.push_str(&format!("Tech Stack: {}\n", proj.tech));
        }
        content.push('\n');
    }
}

fn push_experience(content: &mut String, data: &ResumeFormData) {
    if data.experiences.is_empty() {
        return;
    }
    content.push_str("Professional Experience\n");
    for exp in data.experiences.iter().filter(|e| e.is_complete()) {
        content.push_str(&format!("{} | {}", exp.title, exp.company));
        if !exp.location.is_empty() {
            content.push_str(&format!(" | {}", exp.location));
        }
        content.push('\n');
        if !exp.duration.is_empty() {
            content.push_str(&exp.duration);
            content.push('\n');
        }
        if !exp.description.is_empty() {
            content.push_str(&exp.description);
            content.push('\n');
        }
        content.push('\n');
    }
}

fn push_certifications(content: &mut String, data: &ResumeFormData) {
    if data.certifications.is_empty() {
        return;
    }
    content.push_str("Certifications\n");
    for cert in data.certifications.iter().filter(|c| c.is_complete()) {
        content.push_str(&format!("{} – {}", cert.name, cert.org));
        if !cert.date.is_empty() {
            content.push_str(&format!(" | {}", cert.date));
        }
        content.push('\n');
        if !cert.description.is_empty() {
            content.push_str(&cert.description);
            content.push('\n');
        }
        if !cert.credential.is_empty() {
            content.push_str(&format!("Credential: {}\n", cert.credential));
        }
        content.push('\n');
    }
}
