use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{seed_entries, EntryEvent, StepForm};
use crate::models::{Resume, WorkExperience};

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(tag = "field", content = "value", rename_all = "snake_case")]
pub enum WorkExperienceEdit {
    Company(String),
    Position(String),
    StartDate(String),
    EndDate(String),
    /// Does not touch `end_date`; the preview simply stops showing it.
    Current(bool),
    Description(Vec<String>),
    /// Raw textarea content, one bullet per line.
    DescriptionText(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WorkExperienceForm {
    pub entries: Vec<WorkExperience>,
}

impl WorkExperienceForm {
    pub fn entry(&self, id: Uuid) -> Option<&WorkExperience> {
        self.entries.iter().find(|e| e.id == id)
    }

    /// Replaces the bullets of one entry, as the description textarea would.
    pub fn set_description(&mut self, id: Uuid, bullets: Vec<String>) -> Vec<WorkExperience> {
        self.edit(id, WorkExperienceEdit::Description(bullets))
    }

    fn edit(&mut self, id: Uuid, edit: WorkExperienceEdit) -> Vec<WorkExperience> {
        if let Some(entry) = self.entries.iter_mut().find(|e| e.id == id) {
            match edit {
                WorkExperienceEdit::Company(v) => entry.company = v,
                WorkExperienceEdit::Position(v) => entry.position = v,
                WorkExperienceEdit::StartDate(v) => entry.start_date = v,
                WorkExperienceEdit::EndDate(v) => entry.end_date = v,
                WorkExperienceEdit::Current(v) => entry.current = v,
                WorkExperienceEdit::Description(v) => entry.description = v,
                WorkExperienceEdit::DescriptionText(text) => {
                    entry.description = text.split('\n').map(str::to_string).collect()
                }
            }
        }
        self.slice()
    }
}

impl StepForm for WorkExperienceForm {
    type Slice = Vec<WorkExperience>;
    type Event = EntryEvent<WorkExperienceEdit>;

    fn seed(draft: &Resume) -> Self {
        Self {
            entries: seed_entries(&draft.work_experience, WorkExperience::blank),
        }
    }

    fn slice(&self) -> Vec<WorkExperience> {
        self.entries.clone()
    }

    fn handle(&mut self, event: Self::Event) -> Option<Vec<WorkExperience>> {
        let updated = match event {
            EntryEvent::Add => {
                self.entries.push(WorkExperience::blank());
                self.slice()
            }
            EntryEvent::Remove { id } => {
                self.entries.retain(|e| e.id != id);
                self.slice()
            }
            EntryEvent::Edit { id, edit } => self.edit(id, edit),
        };
        Some(updated)
    }
}
