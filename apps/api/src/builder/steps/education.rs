use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{seed_entries, EntryEvent, StepForm};
use crate::models::resume::optional_text;
use crate::models::{Education, Resume};

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(tag = "field", content = "value", rename_all = "snake_case")]
pub enum EducationEdit {
    Institution(String),
    Degree(String),
    Field(String),
    StartDate(String),
    EndDate(String),
    Gpa(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EducationForm {
    pub entries: Vec<Education>,
}

impl EducationForm {
    fn edit(&mut self, id: Uuid, edit: EducationEdit) {
        let Some(entry) = self.entries.iter_mut().find(|e| e.id == id) else {
            return;
        };
        match edit {
            EducationEdit::Institution(v) => entry.institution = v,
            EducationEdit::Degree(v) => entry.degree = v,
            EducationEdit::Field(v) => entry.field = v,
            EducationEdit::StartDate(v) => entry.start_date = v,
            EducationEdit::EndDate(v) => entry.end_date = v,
            EducationEdit::Gpa(v) => entry.gpa = optional_text(v),
        }
    }
}

impl StepForm for EducationForm {
    type Slice = Vec<Education>;
    type Event = EntryEvent<EducationEdit>;

    fn seed(draft: &Resume) -> Self {
        Self {
            entries: seed_entries(&draft.education, Education::blank),
        }
    }

    fn slice(&self) -> Vec<Education> {
        self.entries.clone()
    }

    fn handle(&mut self, event: Self::Event) -> Option<Vec<Education>> {
        match event {
            EntryEvent::Add => self.entries.push(Education::blank()),
            EntryEvent::Remove { id } => self.entries.retain(|e| e.id != id),
            EntryEvent::Edit { id, edit } => self.edit(id, edit),
        }
        Some(self.slice())
    }
}
