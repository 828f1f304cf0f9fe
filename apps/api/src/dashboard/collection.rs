//! The saved-resume collection. Sole writer of the persisted set.

use std::collections::HashSet;

use serde::Serialize;
use tracing::info;
use uuid::Uuid;

use crate::models::Resume;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum UpsertOutcome {
    Inserted,
    Replaced,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DashboardStats {
    pub total_resumes: usize,
    pub downloads: usize,
    pub templates_used: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResumeCollection {
    resumes: Vec<Resume>,
}

impl ResumeCollection {
    pub fn new(resumes: Vec<Resume>) -> Self {
        Self { resumes }
    }

    pub fn all(&self) -> &[Resume] {
        &self.resumes
    }

    pub fn len(&self) -> usize {
        self.resumes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.resumes.is_empty()
    }

    pub fn get(&self, id: Uuid) -> Option<&Resume> {
        self.resumes.iter().find(|r| r.id == id)
    }

    /// Case-insensitive substring match on title or full name.
    /// An empty term returns the whole collection in order.
    pub fn filter(&self, term: &str) -> Vec<&Resume> {
        if term.is_empty() {
            return self.all().iter().collect();
        }
        let needle = term.to_lowercase();
        self.resumes
            .iter()
            .filter(|r| {
                r.title.to_lowercase().contains(&needle)
                    || r.personal_info.full_name.to_lowercase().contains(&needle)
            })
            .collect()
    }

    /// Replaces the resume with the same id in place, or appends it.
    pub fn upsert(&mut self, resume: Resume) -> UpsertOutcome {
        match self.resumes.iter_mut().find(|r| r.id == resume.id) {
            Some(existing) => {
                info!("Replacing resume {} in collection", resume.id);
                *existing = resume;
                UpsertOutcome::Replaced
            }
            None => {
                info!("Appending resume {} to collection", resume.id);
                self.resumes.push(resume);
                UpsertOutcome::Inserted
            }
        }
    }

    pub fn stats(&self) -> DashboardStats {
        let templates: HashSet<_> = self.resumes.iter().map(|r| r.template).collect();
        DashboardStats {
            total_resumes: self.resumes.len(),
            downloads: self.resumes.len() * 3,
            templates_used: templates.len().max(1),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::samples::sample_resumes;
    use chrono::{Duration, Utc};

    fn collection() -> ResumeCollection {
        ResumeCollection::new(sample_resumes())
    }

    #[test]
    fn test_empty_term_returns_everything_in_order() {
        let c = collection();
        let ids: Vec<_> = c.filter("").iter().map(|r| r.id).collect();
        let all: Vec<_> = c.all().iter().map(|r| r.id).collect();
        assert_eq!(ids, all);
    }

    #[test]
    fn test_filter_matches_title_case_insensitively() {
        let c = collection();
        let hits = c.filter("MARKETING");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].personal_info.full_name, "Jane Smith");
    }

    #[test]
    fn test_filter_matches_full_name() {
        let c = collection();
        let hits = c.filter("john d");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].title, "Software Engineer Resume");
    }

    #[test]
    fn test_filter_no_match() {
        assert!(collection().filter("astronaut").is_empty());
    }

    #[test]
    fn test_upsert_new_id_appends() {
        let mut c = collection();
        let draft = Resume::new_draft(Utc::now());
        assert_eq!(c.upsert(draft.clone()), UpsertOutcome::Inserted);
        assert_eq!(c.len(), 3);
        assert_eq!(c.all()[2].id, draft.id);
    }

    #[test]
    fn test_upsert_existing_id_replaces_in_place() {
        let mut c = collection();
        let mut first = c.all()[0].clone();
        first.title = "Renamed".to_string();
        assert_eq!(c.upsert(first.clone()), UpsertOutcome::Replaced);
        assert_eq!(c.len(), 2);
        assert_eq!(c.all()[0].title, "Renamed", "position is preserved");
    }

    #[test]
    fn test_upsert_is_idempotent_apart_from_updated_at() {
        let mut c = collection();
        let mut resume = c.all()[1].clone();
        resume.updated_at = Utc::now();
        c.upsert(resume.clone());
        let once = c.clone();
        resume.updated_at += Duration::seconds(30);
        c.upsert(resume.clone());

        assert_eq!(c.len(), once.len());
        for (a, b) in c.all().iter().zip(once.all()) {
            let mut a = a.clone();
            a.updated_at = b.updated_at;
            assert_eq!(&a, b);
        }
    }

    #[test]
    fn test_stats() {
        let c = collection();
        assert_eq!(
            c.stats(),
            DashboardStats {
                total_resumes: 2,
                downloads: 6,
                templates_used: 2
            }
        );
        assert_eq!(ResumeCollection::default().stats().templates_used, 1);
    }
}
