use chrono::NaiveDate;
use serde::Serialize;
use uuid::Uuid;

use super::{DashboardStats, ResumeCollection};
use crate::models::{Resume, Template, User};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResumeCard {
    pub id: Uuid,
    pub title: String,
    pub full_name: String,
    pub template: Template,
    pub template_label: &'static str,
    pub badge_color: &'static str,
    pub updated_on: NaiveDate,
}

impl From<&Resume> for ResumeCard {
    fn from(resume: &Resume) -> Self {
        Self {
            id: resume.id,
            title: resume.title.clone(),
            full_name: resume.personal_info.full_name.clone(),
            template: resume.template,
            template_label: resume.template.label(),
            badge_color: resume.template.badge_color(),
            updated_on: resume.updated_at.date_naive(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DashboardView {
    pub greeting: String,
    pub initials: String,
    pub search: String,
    pub stats: DashboardStats,
    pub resumes: Vec<ResumeCard>,
    /// Set only when no card matches.
    pub empty_message: Option<&'static str>,
}

pub fn build_view(user: Option<&User>, collection: &ResumeCollection, search: &str) -> DashboardView {
    let resumes: Vec<ResumeCard> = collection
        .filter(search)
        .into_iter()
        .map(ResumeCard::from)
        .collect();

    let empty_message = resumes.is_empty().then(|| {
        if search.is_empty() {
            "Get started by creating your first resume"
        } else {
            "Try adjusting your search terms"
        }
    });

    DashboardView {
        greeting: format!("Welcome back, {}!", user.map(User::first_name).unwrap_or_default()),
        initials: user.map(User::initials).unwrap_or_default(),
        search: search.to_string(),
        stats: collection.stats(),
        resumes,
        empty_message,
    }
}
