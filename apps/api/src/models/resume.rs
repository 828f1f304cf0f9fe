use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Preview template. Only affects styling of the rendered document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Template {
    #[default]
    Modern,
    Classic,
    Creative,
}

impl Template {
    pub fn label(&self) -> &'static str {
        match self {
            Template::Modern => "Modern",
            Template::Classic => "Classic",
            Template::Creative => "Creative",
        }
    }

    /// Accent colour used for dashboard badges and preview headings.
    pub fn badge_color(&self) -> &'static str {
        match self {
            Template::Modern => "blue",
            Template::Classic => "green",
            Template::Creative => "purple",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SkillLevel {
    Beginner,
    #[default]
    Intermediate,
    Advanced,
    Expert,
}

/// Skill grouping. Declaration order is the display order of the preview.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SkillCategory {
    #[default]
    Technical,
    Soft,
    Language,
    Other,
}

impl SkillCategory {
    pub const DISPLAY_ORDER: [SkillCategory; 4] = [
        SkillCategory::Technical,
        SkillCategory::Soft,
        SkillCategory::Language,
        SkillCategory::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SkillCategory::Technical => "Technical",
            SkillCategory::Soft => "Soft",
            SkillCategory::Language => "Language",
            SkillCategory::Other => "Other",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonalInfo {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    #[serde(default)]
    pub linkedin: Option<String>,
    #[serde(default)]
    pub website: Option<String>,
    pub summary: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkExperience {
    pub id: Uuid,
    pub company: String,
    pub position: String,
    /// Free text, `YYYY-MM` by convention.
    pub start_date: String,
    pub end_date: String,
    /// When set, `end_date` is kept but not displayed.
    pub current: bool,
    #[serde(default)]
    pub description: Vec<String>,
}

impl WorkExperience {
    pub fn blank() -> Self {
        Self {
            id: Uuid::new_v4(),
            company: String::new(),
            position: String::new(),
            start_date: String::new(),
            end_date: String::new(),
            current: false,
            description: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Education {
    pub id: Uuid,
    pub institution: String,
    pub degree: String,
    pub field: String,
    pub start_date: String,
    pub end_date: String,
    #[serde(default)]
    pub gpa: Option<String>,
}

impl Education {
    pub fn blank() -> Self {
        Self {
            id: Uuid::new_v4(),
            institution: String::new(),
            degree: String::new(),
            field: String::new(),
            start_date: String::new(),
            end_date: String::new(),
            gpa: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skill {
    pub id: Uuid,
    pub name: String,
    pub level: SkillLevel,
    pub category: SkillCategory,
}

impl Skill {
    pub fn new(name: impl Into<String>, level: SkillLevel, category: SkillCategory) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            level,
            category,
        }
    }
}

/// Root aggregate: one resume document and every slice it owns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resume {
    pub id: Uuid,
    pub title: String,
    pub template: Template,
    pub personal_info: PersonalInfo,
    pub work_experience: Vec<WorkExperience>,
    pub education: Vec<Education>,
    pub skills: Vec<Skill>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

pub const DEFAULT_TITLE: &str = "My Resume";

impl Resume {
    /// Empty draft for the "create" entry point.
    pub fn new_draft(now: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: DEFAULT_TITLE.to_string(),
            template: Template::default(),
            personal_info: PersonalInfo::default(),
            work_experience: Vec::new(),
            education: Vec::new(),
            skills: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }
}

/// Maps an edited optional field to its stored form: blank input clears it.
pub fn optional_text(value: String) -> Option<String> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_new_draft_is_empty() {
        let now = Utc::now();
        let draft = Resume::new_draft(now);
        assert_eq!(draft.title, "My Resume");
        assert_eq!(draft.template, Template::Modern);
        assert!(draft.work_experience.is_empty());
        assert!(draft.education.is_empty());
        assert!(draft.skills.is_empty());
        assert_eq!(draft.created_at, draft.updated_at);
    }

    #[test]
    fn test_new_drafts_get_distinct_ids() {
        let now = Utc::now();
        assert_ne!(Resume::new_draft(now).id, Resume::new_draft(now).id);
    }

    #[test]
    fn test_enum_wire_spellings() {
        assert_eq!(serde_json::to_value(Template::Creative).unwrap(), json!("creative"));
        assert_eq!(serde_json::to_value(SkillLevel::Expert).unwrap(), json!("Expert"));
        assert_eq!(
            serde_json::to_value(SkillCategory::Language).unwrap(),
            json!("Language")
        );
    }

    #[test]
    fn test_optional_text_blank_is_none() {
        assert_eq!(optional_text("   ".to_string()), None);
        assert_eq!(optional_text("3.9".to_string()), Some("3.9".to_string()));
    }

    #[test]
    fn test_template_badge_colors() {
        assert_eq!(Template::Modern.badge_color(), "blue");
        assert_eq!(Template::Classic.badge_color(), "green");
        assert_eq!(Template::Creative.badge_color(), "purple");
    }
}
