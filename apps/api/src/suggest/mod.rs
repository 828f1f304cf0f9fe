//! Text suggestion capability behind the "AI Suggest" buttons.
//!
//! Forms only see `TextSuggester`; the canned implementation below can be
//! swapped for a real text-generation client without touching form logic.

pub mod catalog;

use std::str::FromStr;

use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};

use catalog::{
    DEFAULT_ROLE_FAMILY, EXPERIENCE_DESCRIPTIONS, SKILLS_PER_SUGGESTION, SKILL_SUGGESTIONS,
    SUMMARY_SUGGESTIONS,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SuggestionField {
    Summary,
    ExperienceDescription,
    Skills,
}

/// What the form knows when it asks for a suggestion.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SuggestionContext {
    /// Position of the first work experience entry, if any.
    pub job_title: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuggestionRequest {
    pub field: SuggestionField,
    pub context: SuggestionContext,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Suggestion {
    Text(String),
    List(Vec<String>),
}

impl Suggestion {
    /// Flattens to lines; a text suggestion is split on newlines.
    pub fn into_lines(self) -> Vec<String> {
        match self {
            Suggestion::Text(text) => text.split('\n').map(str::to_string).collect(),
            Suggestion::List(items) => items,
        }
    }

    pub fn into_text(self) -> String {
        match self {
            Suggestion::Text(text) => text,
            Suggestion::List(items) => items.join("\n"),
        }
    }
}

/// Suggests text for field F given context C.
pub trait TextSuggester: Send + Sync {
    fn suggest(&self, request: &SuggestionRequest) -> Suggestion;
}

/// How `CannedSuggester` picks among multiple canned answers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SuggestionPick {
    #[default]
    Random,
    First,
}

impl FromStr for SuggestionPick {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "random" => Ok(SuggestionPick::Random),
            "first" => Ok(SuggestionPick::First),
            other => Err(format!("unknown suggestion pick '{other}'")),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct CannedSuggester {
    pick: SuggestionPick,
}

impl CannedSuggester {
    pub fn new(pick: SuggestionPick) -> Self {
        Self { pick }
    }

    fn choose(&self, options: &[&'static str]) -> &'static str {
        match self.pick {
            SuggestionPick::First => options.first().copied().unwrap_or_default(),
            SuggestionPick::Random => options
                .choose(&mut rand::thread_rng())
                .copied()
                .unwrap_or_default(),
        }
    }
}

impl TextSuggester for CannedSuggester {
    fn suggest(&self, request: &SuggestionRequest) -> Suggestion {
        match request.field {
            SuggestionField::Summary => Suggestion::Text(self.choose(SUMMARY_SUGGESTIONS).to_string()),
            SuggestionField::ExperienceDescription => {
                Suggestion::Text(self.choose(EXPERIENCE_DESCRIPTIONS).to_string())
            }
            SuggestionField::Skills => {
                let skills = skills_for_title(request.context.job_title.as_deref());
                Suggestion::List(
                    skills
                        .iter()
                        .take(SKILLS_PER_SUGGESTION)
                        .map(|s| s.to_string())
                        .collect(),
                )
            }
        }
    }
}

/// Resolves the role family whose key appears in the job title.
pub fn role_family(job_title: Option<&str>) -> &'static str {
    let title = job_title
        .filter(|t| !t.trim().is_empty())
        .unwrap_or(DEFAULT_ROLE_FAMILY)
        .to_lowercase();

    SKILL_SUGGESTIONS
        .iter()
        .map(|(family, _)| *family)
        .find(|family| title.contains(&family.to_lowercase()))
        .unwrap_or(DEFAULT_ROLE_FAMILY)
}

fn skills_for_title(job_title: Option<&str>) -> &'static [&'static str] {
    let family = role_family(job_title);
    SKILL_SUGGESTIONS
        .iter()
        .find(|(name, _)| *name == family)
        .map(|(_, skills)| *skills)
        .unwrap_or(&[])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(field: SuggestionField, job_title: Option<&str>) -> SuggestionRequest {
        SuggestionRequest {
            field,
            context: SuggestionContext {
                job_title: job_title.map(str::to_string),
            },
        }
    }

    #[test]
    fn test_first_pick_is_deterministic() {
        let s = CannedSuggester::new(SuggestionPick::First);
        let out = s.suggest(&request(SuggestionField::Summary, None));
        assert_eq!(out, Suggestion::Text(SUMMARY_SUGGESTIONS[0].to_string()));
    }

    #[test]
    fn test_random_pick_comes_from_catalog() {
        let s = CannedSuggester::new(SuggestionPick::Random);
        for _ in 0..20 {
            let text = s.suggest(&request(SuggestionField::Summary, None)).into_text();
            assert!(SUMMARY_SUGGESTIONS.contains(&text.as_str()));
        }
    }

    #[test]
    fn test_experience_description_splits_into_three_bullets() {
        let s = CannedSuggester::new(SuggestionPick::First);
        let lines = s
            .suggest(&request(SuggestionField::ExperienceDescription, None))
            .into_lines();
        assert_eq!(lines.len(), 3);
        assert!(lines.iter().all(|l| l.starts_with('•')), "got {lines:?}");
    }

    #[test]
    fn test_role_family_matches_case_insensitively() {
        assert_eq!(role_family(Some("Senior Marketing Manager")), "Marketing");
        assert_eq!(role_family(Some("UX DESIGN lead")), "Design");
        assert_eq!(role_family(Some("Account Executive")), "Software Engineer");
        assert_eq!(role_family(None), "Software Engineer");
        assert_eq!(role_family(Some("  ")), "Software Engineer");
    }

    #[test]
    fn test_skill_suggestion_takes_first_five() {
        let s = CannedSuggester::default();
        let items = s
            .suggest(&request(SuggestionField::Skills, Some("Sales Associate")))
            .into_lines();
        assert_eq!(
            items,
            vec![
                "CRM Software",
                "Lead Generation",
                "Negotiation",
                "Customer Relationship Management",
                "Salesforce"
            ]
        );
    }

    #[test]
    fn test_pick_parses_from_str() {
        assert_eq!("FIRST".parse::<SuggestionPick>(), Ok(SuggestionPick::First));
        assert_eq!("random".parse::<SuggestionPick>(), Ok(SuggestionPick::Random));
        assert!("sometimes".parse::<SuggestionPick>().is_err());
    }
}
