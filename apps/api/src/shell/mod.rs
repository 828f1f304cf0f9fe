//! App shell: top-level mode switch holding the session user, the saved
//! collection and, while building, the wizard.
//!
//! All reads and writes of application state go through these methods.
//! Transitions have no guards and never fail.

pub mod handlers;

use std::sync::Arc;

use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use uuid::Uuid;

use crate::builder::WizardController;
use crate::dashboard::{build_view, DashboardView, ResumeCollection, UpsertOutcome};
use crate::models::samples::demo_user;
use crate::models::User;
use crate::notice::Notice;
use crate::suggest::TextSuggester;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Screen {
    Login,
    Signup,
    Dashboard,
    Builder,
}

enum Mode {
    Login,
    Signup,
    Dashboard,
    Builder(Box<WizardController>),
}

pub struct AppShell {
    mode: Mode,
    user: Option<User>,
    collection: ResumeCollection,
    suggester: Arc<dyn TextSuggester>,
}

impl AppShell {
    pub fn new(collection: ResumeCollection, suggester: Arc<dyn TextSuggester>) -> Self {
        Self {
            mode: Mode::Login,
            user: None,
            collection,
            suggester,
        }
    }

    pub fn screen(&self) -> Screen {
        match self.mode {
            Mode::Login => Screen::Login,
            Mode::Signup => Screen::Signup,
            Mode::Dashboard => Screen::Dashboard,
            Mode::Builder(_) => Screen::Builder,
        }
    }

    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn collection(&self) -> &ResumeCollection {
        &self.collection
    }

    pub fn wizard(&self) -> Option<&WizardController> {
        match &self.mode {
            Mode::Builder(wizard) => Some(&**wizard),
            _ => None,
        }
    }

    pub fn wizard_mut(&mut self) -> Option<&mut WizardController> {
        match &mut self.mode {
            Mode::Builder(wizard) => Some(&mut **wizard),
            _ => None,
        }
    }

    pub fn dashboard_view(&self, search: &str) -> DashboardView {
        build_view(self.user.as_ref(), &self.collection, search)
    }

    // ── session ─────────────────────────────────────────────────────────────

    /// Accepts any credentials; the password is never inspected or kept.
    pub fn login(&mut self, email: &str, _password: &str) {
        let user = User {
            email: email.to_string(),
            ..demo_user()
        };
        info!("User {} signed in", user.email);
        self.user = Some(user);
        self.mode = Mode::Dashboard;
    }

    pub fn signup(&mut self, name: &str, email: &str, _password: &str) {
        let user = User {
            name: name.to_string(),
            email: email.to_string(),
            ..demo_user()
        };
        info!("User {} signed up", user.email);
        self.user = Some(user);
        self.mode = Mode::Dashboard;
    }

    pub fn logout(&mut self) {
        if let Some(user) = self.user.take() {
            info!("User {} signed out", user.email);
        }
        self.mode = Mode::Login;
    }

    pub fn show_login(&mut self) {
        self.mode = Mode::Login;
    }

    pub fn show_signup(&mut self) {
        self.mode = Mode::Signup;
    }

    // ── builder entry points ────────────────────────────────────────────────

    /// Opens the wizard on a fresh, empty draft.
    pub fn create_resume(&mut self) {
        let wizard = WizardController::fresh(Utc::now(), Arc::clone(&self.suggester));
        info!("Opened builder on new draft {}", wizard.draft().id);
        self.mode = Mode::Builder(Box::new(wizard));
    }

    /// Opens the wizard on a copy of the saved resume `id`.
    /// Falls back to a fresh draft when the id is unknown.
    pub fn edit_resume(&mut self, id: Uuid) {
        match self.collection.get(id) {
            Some(resume) => {
                let wizard = WizardController::new(resume.clone(), Arc::clone(&self.suggester));
                info!("Opened builder on resume {id}");
                self.mode = Mode::Builder(Box::new(wizard));
            }
            None => {
                warn!("Resume {id} not found; opening a new draft instead");
                self.create_resume();
            }
        }
    }

    /// Saves the current draft into the collection. `None` outside the builder.
    pub fn save_draft(&mut self) -> Option<(UpsertOutcome, Notice)> {
        let Mode::Builder(wizard) = &mut self.mode else {
            return None;
        };
        let (resume, notice) = wizard.save();
        let outcome = self.collection.upsert(resume);
        Some((outcome, notice))
    }

    /// Leaves the builder, discarding unsaved draft changes.
    pub fn back_to_dashboard(&mut self) {
        if let Mode::Builder(wizard) = &self.mode {
            info!("Closing builder for draft {}", wizard.draft().id);
        }
        self.mode = Mode::Dashboard;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::steps::{PersonalInfoEdit, SkillsEvent};
    use crate::models::samples::sample_resumes;
    use crate::models::{SkillCategory, SkillLevel};
    use crate::suggest::{CannedSuggester, SuggestionPick};

    fn shell() -> AppShell {
        AppShell::new(
            ResumeCollection::new(sample_resumes()),
            Arc::new(CannedSuggester::new(SuggestionPick::First)),
        )
    }

    #[test]
    fn test_starts_on_login() {
        let s = shell();
        assert_eq!(s.screen(), Screen::Login);
        assert!(s.user().is_none());
    }

    #[test]
    fn test_login_accepts_any_credentials() {
        let mut s = shell();
        s.login("ada@example.com", "");
        assert_eq!(s.screen(), Screen::Dashboard);
        assert_eq!(s.user().unwrap().email, "ada@example.com");
        assert_eq!(s.user().unwrap().name, "Demo User");
    }

    #[test]
    fn test_signup_sets_name_and_email() {
        let mut s = shell();
        s.show_signup();
        assert_eq!(s.screen(), Screen::Signup);
        s.signup("Ada Lovelace", "ada@example.com", "pw");
        assert_eq!(s.screen(), Screen::Dashboard);
        assert_eq!(s.user().unwrap().name, "Ada Lovelace");
    }

    #[test]
    fn test_logout_returns_to_login_and_keeps_collection() {
        let mut s = shell();
        s.login("a@b.c", "x");
        s.create_resume();
        s.save_draft();
        s.logout();
        assert_eq!(s.screen(), Screen::Login);
        assert!(s.user().is_none());
        assert_eq!(s.collection().len(), 3);
    }

    #[test]
    fn test_edit_loads_copy_of_saved_resume() {
        let mut s = shell();
        s.login("a@b.c", "x");
        let id = s.collection().all()[1].id;
        s.edit_resume(id);
        assert_eq!(s.screen(), Screen::Builder);
        assert_eq!(s.wizard().unwrap().draft(), &s.collection().all()[1]);
    }

    #[test]
    fn test_edit_unknown_id_opens_fresh_draft() {
        let mut s = shell();
        s.edit_resume(Uuid::new_v4());
        let draft = s.wizard().unwrap().draft();
        assert_eq!(draft.title, "My Resume");
        assert!(s.collection().get(draft.id).is_none());
    }

    #[test]
    fn test_draft_changes_not_persisted_until_save() {
        let mut s = shell();
        let id = s.collection().all()[0].id;
        s.edit_resume(id);
        s.wizard_mut()
            .unwrap()
            .edit_personal_info(PersonalInfoEdit::FullName("Changed".to_string()))
            .unwrap();
        assert_eq!(s.collection().all()[0].personal_info.full_name, "John Doe");

        let (outcome, notice) = s.save_draft().unwrap();
        assert_eq!(outcome, UpsertOutcome::Replaced);
        assert_eq!(notice.message, "Resume saved successfully!");
        assert_eq!(s.collection().all()[0].personal_info.full_name, "Changed");
        assert_eq!(s.collection().len(), 2);
    }

    #[test]
    fn test_back_discards_unsaved_draft() {
        let mut s = shell();
        s.login("a@b.c", "x");
        s.create_resume();
        s.back_to_dashboard();
        assert_eq!(s.screen(), Screen::Dashboard);
        assert!(s.wizard().is_none());
        assert_eq!(s.collection().len(), 2);
    }

    #[test]
    fn test_save_outside_builder_is_none() {
        let mut s = shell();
        assert!(s.save_draft().is_none());
    }

    #[test]
    fn test_end_to_end_new_resume() {
        let mut s = shell();
        s.login("ada@example.com", "secret");
        let before: Vec<_> = s.collection().all().iter().map(|r| r.id).collect();

        s.create_resume();
        let wizard = s.wizard_mut().unwrap();
        wizard
            .edit_personal_info(PersonalInfoEdit::FullName("Ada Lovelace".to_string()))
            .unwrap();
        wizard.advance();
        wizard.advance();
        wizard.advance();
        wizard
            .skills_event(SkillsEvent::SetName {
                name: "Analysis".to_string(),
            })
            .unwrap();
        wizard
            .skills_event(SkillsEvent::SetCategory {
                category: SkillCategory::Technical,
            })
            .unwrap();
        wizard
            .skills_event(SkillsEvent::SetLevel {
                level: SkillLevel::Expert,
            })
            .unwrap();
        wizard.skills_event(SkillsEvent::Add).unwrap();
        s.save_draft();

        let new: Vec<_> = s
            .collection()
            .all()
            .iter()
            .filter(|r| !before.contains(&r.id))
            .collect();
        assert_eq!(new.len(), 1, "exactly one new entry");
        let saved = new[0];
        assert_eq!(saved.personal_info.full_name, "Ada Lovelace");
        assert_eq!(saved.skills.len(), 1);
        assert_eq!(saved.skills[0].name, "Analysis");
        assert_eq!(saved.skills[0].category, SkillCategory::Technical);
        assert_eq!(saved.skills[0].level, SkillLevel::Expert);
    }
}
