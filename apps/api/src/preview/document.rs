//! Resume → `PreviewDocument` projection.
//!
//! Sections appear in a fixed order and are omitted entirely when their backing
//! data is empty. Skills are grouped by category in `SkillCategory::DISPLAY_ORDER`.

use serde::Serialize;

use crate::models::{Resume, SkillCategory, Template};

pub const NAME_PLACEHOLDER: &str = "Your Name";
pub const PRESENT_LABEL: &str = "Present";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ContactKind {
    Email,
    Phone,
    Location,
    Linkedin,
    Website,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactItem {
    pub kind: ContactKind,
    /// Text shown next to the icon. LinkedIn and website show a fixed label.
    pub label: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PreviewHeader {
    pub name: String,
    pub contacts: Vec<ContactItem>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExperienceItem {
    pub position: String,
    pub company: String,
    pub dates: String,
    pub bullets: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EducationItem {
    pub title: String,
    pub institution: String,
    pub dates: String,
    pub gpa: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkillGroup {
    pub category: SkillCategory,
    pub skills: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "body", rename_all = "snake_case")]
pub enum PreviewSection {
    Summary(String),
    Experience(Vec<ExperienceItem>),
    Education(Vec<EducationItem>),
    Skills(Vec<SkillGroup>),
}

impl PreviewSection {
    pub fn heading(&self) -> &'static str {
        match self {
            PreviewSection::Summary(_) => "Professional Summary",
            PreviewSection::Experience(_) => "Work Experience",
            PreviewSection::Education(_) => "Education",
            PreviewSection::Skills(_) => "Skills",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PreviewDocument {
    pub template: Template,
    pub accent: &'static str,
    pub header: PreviewHeader,
    pub sections: Vec<PreviewSection>,
}

impl PreviewDocument {
    pub fn headings(&self) -> Vec<&'static str> {
        self.sections.iter().map(PreviewSection::heading).collect()
    }
}

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Renders the preview for `resume`.
pub fn render(resume: &Resume) -> PreviewDocument {
    let mut sections = Vec::new();

    let summary = &resume.personal_info.summary;
    if !is_blank(summary) {
        sections.push(PreviewSection::Summary(summary.clone()));
    }

    if !resume.work_experience.is_empty() {
        sections.push(PreviewSection::Experience(
            resume
                .work_experience
                .iter()
                .map(|exp| ExperienceItem {
                    position: exp.position.clone(),
                    company: exp.company.clone(),
                    dates: date_range(
                        &exp.start_date,
                        if exp.current { PRESENT_LABEL } else { &exp.end_date },
                    ),
                    bullets: exp.description.clone(),
                })
                .collect(),
        ));
    }

    if !resume.education.is_empty() {
        sections.push(PreviewSection::Education(
            resume
                .education
                .iter()
                .map(|edu| EducationItem {
                    title: format!("{} in {}", edu.degree, edu.field),
                    institution: edu.institution.clone(),
                    dates: date_range(&edu.start_date, &edu.end_date),
                    gpa: edu.gpa.clone().filter(|g| !is_blank(g)),
                })
                .collect(),
        ));
    }

    let groups = group_skills(resume);
    if !groups.is_empty() {
        sections.push(PreviewSection::Skills(groups));
    }

    PreviewDocument {
        template: resume.template,
        accent: resume.template.badge_color(),
        header: render_header(resume),
        sections,
    }
}

fn date_range(start: &str, end: &str) -> String {
    format!("{start} - {end}")
}

fn render_header(resume: &Resume) -> PreviewHeader {
    let info = &resume.personal_info;
    let name = if is_blank(&info.full_name) {
        NAME_PLACEHOLDER.to_string()
    } else {
        info.full_name.clone()
    };

    let mut contacts = Vec::new();
    let mut push = |kind: ContactKind, label: Option<&str>, value: &str| {
        if !is_blank(value) {
            contacts.push(ContactItem {
                kind,
                label: label.map_or_else(|| value.to_string(), str::to_string),
                value: value.to_string(),
            });
        }
    };
    push(ContactKind::Email, None, &info.email);
    push(ContactKind::Phone, None, &info.phone);
    push(ContactKind::Location, None, &info.location);
    push(
        ContactKind::Linkedin,
        Some("LinkedIn"),
        info.linkedin.as_deref().unwrap_or_default(),
    );
    push(
        ContactKind::Website,
        Some("Portfolio"),
        info.website.as_deref().unwrap_or_default(),
    );

    PreviewHeader { name, contacts }
}

fn group_skills(resume: &Resume) -> Vec<SkillGroup> {
    SkillCategory::DISPLAY_ORDER
        .iter()
        .filter_map(|category| {
            let skills: Vec<String> = resume
                .skills
                .iter()
                .filter(|s| s.category == *category)
                .map(|s| s.name.clone())
                .collect();
            (!skills.is_empty()).then(|| SkillGroup {
                category: *category,
                skills,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::samples::sample_resumes;
    use crate::models::{Education, Skill, SkillLevel, WorkExperience};
    use chrono::Utc;

    fn empty() -> Resume {
        Resume::new_draft(Utc::now())
    }

    #[test]
    fn test_empty_resume_has_no_sections() {
        let doc = render(&empty());
        assert!(doc.sections.is_empty());
        assert_eq!(doc.header.name, "Your Name");
        assert!(doc.header.contacts.is_empty());
    }

    #[test]
    fn test_no_work_experience_heading_when_slice_empty() {
        let mut resume = sample_resumes().remove(0);
        resume.work_experience.clear();
        let headings = render(&resume).headings();
        assert!(!headings.contains(&"Work Experience"), "got {headings:?}");
        assert!(headings.contains(&"Education"));
    }

    #[test]
    fn test_blank_summary_is_omitted() {
        let mut resume = empty();
        resume.personal_info.summary = "   ".to_string();
        assert!(render(&resume).sections.is_empty());
    }

    #[test]
    fn test_sample_sections_in_fixed_order() {
        let doc = render(&sample_resumes()[0]);
        assert_eq!(
            doc.headings(),
            vec!["Professional Summary", "Work Experience", "Education", "Skills"]
        );
    }

    #[test]
    fn test_current_role_renders_present_regardless_of_end_date() {
        let mut resume = empty();
        let mut job = WorkExperience::blank();
        job.start_date = "2022-01".to_string();
        job.end_date = "2023-06".to_string();
        job.current = true;
        resume.work_experience = vec![job];

        match &render(&resume).sections[0] {
            PreviewSection::Experience(items) => assert_eq!(items[0].dates, "2022-01 - Present"),
            other => panic!("unexpected section {other:?}"),
        }
    }

    #[test]
    fn test_finished_role_renders_end_date() {
        let resume = &sample_resumes()[0];
        let doc = render(resume);
        let PreviewSection::Experience(items) = &doc.sections[1] else {
            panic!("experience expected second");
        };
        assert_eq!(items[1].dates, "2020-03 - 2021-12");
    }

    #[test]
    fn test_skill_groups_follow_fixed_category_order() {
        let mut resume = empty();
        resume.skills = vec![
            Skill::new("Esperanto", SkillLevel::Beginner, SkillCategory::Language),
            Skill::new("Chess", SkillLevel::Advanced, SkillCategory::Other),
            Skill::new("Empathy", SkillLevel::Expert, SkillCategory::Soft),
            Skill::new("Rust", SkillLevel::Expert, SkillCategory::Technical),
            Skill::new("Latin", SkillLevel::Advanced, SkillCategory::Language),
        ];
        let PreviewSection::Skills(groups) = &render(&resume).sections[0] else {
            panic!("skills section expected");
        };
        let order: Vec<_> = groups.iter().map(|g| g.category).collect();
        assert_eq!(
            order,
            vec![
                SkillCategory::Technical,
                SkillCategory::Soft,
                SkillCategory::Language,
                SkillCategory::Other
            ]
        );
        assert_eq!(groups[2].skills, vec!["Esperanto", "Latin"]);
    }

    #[test]
    fn test_empty_category_group_is_omitted() {
        let resume = &sample_resumes()[1];
        let doc = render(resume);
        let Some(PreviewSection::Skills(groups)) = doc.sections.last() else {
            panic!("skills section expected last");
        };
        assert_eq!(groups.len(), 2, "only Technical and Soft have members");
    }

    #[test]
    fn test_contacts_use_fixed_labels_for_links() {
        let doc = render(&sample_resumes()[0]);
        let labels: Vec<_> = doc.header.contacts.iter().map(|c| c.label.as_str()).collect();
        assert_eq!(
            labels,
            vec![
                "john.doe@email.com",
                "(555) 123-4567",
                "San Francisco, CA",
                "LinkedIn",
                "Portfolio"
            ]
        );
    }

    #[test]
    fn test_education_title_and_gpa() {
        let mut resume = empty();
        let mut edu = Education::blank();
        edu.degree = "BSc".to_string();
        edu.field = "Mathematics".to_string();
        edu.gpa = Some("3.7".to_string());
        resume.education = vec![edu];
        let PreviewSection::Education(items) = &render(&resume).sections[0] else {
            panic!("education section expected");
        };
        assert_eq!(items[0].title, "BSc in Mathematics");
        assert_eq!(items[0].gpa.as_deref(), Some("3.7"));
    }

    #[test]
    fn test_render_does_not_mutate() {
        let resume = sample_resumes().remove(0);
        let copy = resume.clone();
        let _ = render(&resume);
        assert_eq!(resume, copy);
    }

    #[test]
    fn test_accent_follows_template() {
        let mut resume = empty();
        resume.template = Template::Creative;
        assert_eq!(render(&resume).accent, "purple");
    }
}
