//! Wizard controller: owns the authoritative draft and the active step form.
//!
//! Every form event is a synchronization point: the active form hands back its
//! whole slice and the controller replaces that slice of the draft wholesale.
//! There is no validation gate on navigation or save.

use std::fmt;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info};
use uuid::Uuid;

use crate::builder::steps::{
    EducationEdit, EducationForm, EntryEvent, PersonalInfoEdit, PersonalInfoForm, SkillsEvent,
    SkillsForm, StepForm, WorkExperienceEdit, WorkExperienceForm,
};
use crate::models::{Education, PersonalInfo, Resume, Skill, Template, WorkExperience};
use crate::notice::{self, Notice};
use crate::preview::{self, PreviewDocument};
use crate::suggest::{SuggestionContext, SuggestionField, SuggestionRequest, TextSuggester};

// ────────────────────────────────────────────────────────────────────────────
// Steps
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Step {
    Personal,
    Experience,
    Education,
    Skills,
}

impl Step {
    pub const ALL: [Step; 4] = [Step::Personal, Step::Experience, Step::Education, Step::Skills];

    pub fn id(&self) -> &'static str {
        match self {
            Step::Personal => "personal",
            Step::Experience => "experience",
            Step::Education => "education",
            Step::Skills => "skills",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Step::Personal => "Personal Info",
            Step::Experience => "Work Experience",
            Step::Education => "Education",
            Step::Skills => "Skills",
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum WizardError {
    #[error("{requested} form is not active (current step: {active})")]
    StepNotActive { requested: Step, active: Step },

    #[error("No work experience entry with id {0}")]
    UnknownEntry(Uuid),
}

/// Field a suggestion should be applied to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "field", rename_all = "snake_case")]
pub enum SuggestTarget {
    Summary,
    ExperienceDescription { entry_id: Uuid },
    Skills,
}

/// Form mounted for the current step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "step", content = "state", rename_all = "snake_case")]
pub enum ActiveForm {
    Personal(PersonalInfoForm),
    Experience(WorkExperienceForm),
    Education(EducationForm),
    Skills(SkillsForm),
}

impl ActiveForm {
    fn mount(step: Step, draft: &Resume) -> Self {
        match step {
            Step::Personal => ActiveForm::Personal(PersonalInfoForm::seed(draft)),
            Step::Experience => ActiveForm::Experience(WorkExperienceForm::seed(draft)),
            Step::Education => ActiveForm::Education(EducationForm::seed(draft)),
            Step::Skills => ActiveForm::Skills(SkillsForm::seed(draft)),
        }
    }
}

/// Progress header for the current step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StepInfo {
    pub index: usize,
    pub count: usize,
    pub id: &'static str,
    pub title: &'static str,
    pub progress_percent: u32,
    pub can_go_back: bool,
    pub can_go_forward: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct WizardView {
    pub step: StepInfo,
    pub draft: Resume,
    pub form: ActiveForm,
}

// ────────────────────────────────────────────────────────────────────────────
// Controller
// ────────────────────────────────────────────────────────────────────────────

pub struct WizardController {
    current: usize,
    draft: Resume,
    form: ActiveForm,
    suggester: Arc<dyn TextSuggester>,
}

impl WizardController {
    /// Opens the wizard on the first step with `draft` as the working copy.
    pub fn new(draft: Resume, suggester: Arc<dyn TextSuggester>) -> Self {
        let form = ActiveForm::mount(Step::ALL[0], &draft);
        Self {
            current: 0,
            draft,
            form,
            suggester,
        }
    }

    /// Opens the wizard on an empty draft.
    pub fn fresh(now: DateTime<Utc>, suggester: Arc<dyn TextSuggester>) -> Self {
        Self::new(Resume::new_draft(now), suggester)
    }

    pub fn step(&self) -> Step {
        Step::ALL[self.current]
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn draft(&self) -> &Resume {
        &self.draft
    }

    pub fn form(&self) -> &ActiveForm {
        &self.form
    }

    pub fn step_info(&self) -> StepInfo {
        let count = Step::ALL.len();
        let step = self.step();
        let index = self.current_index();
        StepInfo {
            index,
            count,
            id: step.id(),
            title: step.title(),
            progress_percent: (((index + 1) as f64 / count as f64) * 100.0).round() as u32,
            can_go_back: index > 0,
            can_go_forward: index + 1 < count,
        }
    }

    pub fn view(&self) -> WizardView {
        WizardView {
            step: self.step_info(),
            draft: self.draft.clone(),
            form: self.form().clone(),
        }
    }

    pub fn preview(&self) -> PreviewDocument {
        preview::render(&self.draft)
    }

    // ── navigation ──────────────────────────────────────────────────────────

    /// Moves to the next step; no-op on the last one.
    pub fn advance(&mut self) {
        if self.current + 1 < Step::ALL.len() {
            self.current += 1;
            self.remount();
        }
    }

    /// Moves to the previous step; no-op on the first one.
    pub fn retreat(&mut self) {
        if self.current > 0 {
            self.current -= 1;
            self.remount();
        }
    }

    fn remount(&mut self) {
        self.form = ActiveForm::mount(self.step(), &self.draft);
        debug!("Mounted {} form for draft {}", self.step().id(), self.draft.id);
    }

    // ── whole-slice replacement ─────────────────────────────────────────────

    pub fn apply_personal_info(&mut self, personal_info: PersonalInfo) {
        self.draft.personal_info = personal_info;
        if matches!(self.form, ActiveForm::Personal(_)) {
            self.remount();
        }
    }

    pub fn apply_work_experience(&mut self, work_experience: Vec<WorkExperience>) {
        self.draft.work_experience = work_experience;
        if matches!(self.form, ActiveForm::Experience(_)) {
            self.remount();
        }
    }

    pub fn apply_education(&mut self, education: Vec<Education>) {
        self.draft.education = education;
        if matches!(self.form, ActiveForm::Education(_)) {
            self.remount();
        }
    }

    pub fn apply_skills(&mut self, skills: Vec<Skill>) {
        self.draft.skills = skills;
        if matches!(self.form, ActiveForm::Skills(_)) {
            self.remount();
        }
    }

    pub fn set_title(&mut self, title: String) {
        self.draft.title = title;
    }

    pub fn set_template(&mut self, template: Template) {
        self.draft.template = template;
    }

    // ── form events ─────────────────────────────────────────────────────────

    pub fn edit_personal_info(&mut self, edit: PersonalInfoEdit) -> Result<(), WizardError> {
        let active = self.step();
        let ActiveForm::Personal(form) = &mut self.form else {
            return Err(WizardError::StepNotActive {
                requested: Step::Personal,
                active,
            });
        };
        if let Some(slice) = form.handle(edit) {
            debug!("Propagating personal info for draft {}", self.draft.id);
            self.draft.personal_info = slice;
        }
        Ok(())
    }

    pub fn work_experience_event(
        &mut self,
        event: EntryEvent<WorkExperienceEdit>,
    ) -> Result<(), WizardError> {
        let active = self.step();
        let ActiveForm::Experience(form) = &mut self.form else {
            return Err(WizardError::StepNotActive {
                requested: Step::Experience,
                active,
            });
        };
        if let Some(slice) = form.handle(event) {
            debug!(
                "Propagating {} work experience entries for draft {}",
                slice.len(),
                self.draft.id
            );
            self.draft.work_experience = slice;
        }
        Ok(())
    }

    pub fn education_event(&mut self, event: EntryEvent<EducationEdit>) -> Result<(), WizardError> {
        let active = self.step();
        let ActiveForm::Education(form) = &mut self.form else {
            return Err(WizardError::StepNotActive {
                requested: Step::Education,
                active,
            });
        };
        if let Some(slice) = form.handle(event) {
            debug!(
                "Propagating {} education entries for draft {}",
                slice.len(),
                self.draft.id
            );
            self.draft.education = slice;
        }
        Ok(())
    }

    pub fn skills_event(&mut self, event: SkillsEvent) -> Result<(), WizardError> {
        let active = self.step();
        let ActiveForm::Skills(form) = &mut self.form else {
            return Err(WizardError::StepNotActive {
                requested: Step::Skills,
                active,
            });
        };
        if let Some(slice) = form.handle(event) {
            debug!("Propagating {} skills for draft {}", slice.len(), self.draft.id);
            self.draft.skills = slice;
        }
        Ok(())
    }

    // ── suggestions ─────────────────────────────────────────────────────────

    /// Applies a suggestion through the active form as if the user typed it.
    pub fn suggest(&mut self, target: SuggestTarget) -> Result<Notice, WizardError> {
        let active = self.step();
        let context = SuggestionContext {
            job_title: self.draft.work_experience.first().map(|e| e.position.clone()),
        };

        match (target, &mut self.form) {
            (SuggestTarget::Summary, ActiveForm::Personal(form)) => {
                let text = self
                    .suggester
                    .suggest(&SuggestionRequest {
                        field: SuggestionField::Summary,
                        context,
                    })
                    .into_text();
                if let Some(slice) = form.handle(PersonalInfoEdit::Summary(text)) {
                    self.draft.personal_info = slice;
                }
                info!("Applied summary suggestion to draft {}", self.draft.id);
                Ok(Notice::success(notice::SUMMARY_SUGGESTED))
            }
            (SuggestTarget::ExperienceDescription { entry_id }, ActiveForm::Experience(form)) => {
                if form.entry(entry_id).is_none() {
                    return Err(WizardError::UnknownEntry(entry_id));
                }
                let bullets = self
                    .suggester
                    .suggest(&SuggestionRequest {
                        field: SuggestionField::ExperienceDescription,
                        context,
                    })
                    .into_lines();
                self.draft.work_experience = form.set_description(entry_id, bullets);
                info!(
                    "Applied description suggestion to entry {entry_id} of draft {}",
                    self.draft.id
                );
                Ok(Notice::success(notice::DESCRIPTION_SUGGESTED))
            }
            (SuggestTarget::Skills, ActiveForm::Skills(form)) => {
                let names = self
                    .suggester
                    .suggest(&SuggestionRequest {
                        field: SuggestionField::Skills,
                        context,
                    })
                    .into_lines();
                self.draft.skills = form.add_suggested(names);
                info!("Applied skill suggestions to draft {}", self.draft.id);
                Ok(Notice::success(notice::SKILLS_SUGGESTED))
            }
            (target, _) => Err(WizardError::StepNotActive {
                requested: match target {
                    SuggestTarget::Summary => Step::Personal,
                    SuggestTarget::ExperienceDescription { .. } => Step::Experience,
                    SuggestTarget::Skills => Step::Skills,
                },
                active,
            }),
        }
    }

    // ── save / export ───────────────────────────────────────────────────────

    /// Stamps `updated_at` and returns the resume for upsert by the collection.
    pub fn save(&mut self) -> (Resume, Notice) {
        self.save_at(Utc::now())
    }

    pub fn save_at(&mut self, now: DateTime<Utc>) -> (Resume, Notice) {
        self.draft.updated_at = now;
        info!("Saved draft {} ({})", self.draft.id, self.draft.title);
        (self.draft.clone(), Notice::success(notice::SAVED))
    }

    /// Export is not available yet; only the notice is produced.
    pub fn export(&self) -> Notice {
        info!("Export requested for draft {}", self.draft.id);
        Notice::info(notice::EXPORT_PENDING)
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
