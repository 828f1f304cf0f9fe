use serde::{Deserialize, Serialize};

use super::StepForm;
use crate::models::resume::optional_text;
use crate::models::{PersonalInfo, Resume};

/// One field change on the personal info form.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(tag = "field", content = "value", rename_all = "snake_case")]
pub enum PersonalInfoEdit {
    FullName(String),
    Email(String),
    Phone(String),
    Location(String),
    Linkedin(String),
    Website(String),
    Summary(String),
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PersonalInfoForm {
    pub personal_info: PersonalInfo,
}

impl StepForm for PersonalInfoForm {
    type Slice = PersonalInfo;
    type Event = PersonalInfoEdit;

    fn seed(draft: &Resume) -> Self {
        Self {
            personal_info: draft.personal_info.clone(),
        }
    }

    fn slice(&self) -> PersonalInfo {
        self.personal_info.clone()
    }

    fn handle(&mut self, event: PersonalInfoEdit) -> Option<PersonalInfo> {
        let info = &mut self.personal_info;
        match event {
            PersonalInfoEdit::FullName(v) => info.full_name = v,
            PersonalInfoEdit::Email(v) => info.email = v,
            PersonalInfoEdit::Phone(v) => info.phone = v,
            PersonalInfoEdit::Location(v) => info.location = v,
            PersonalInfoEdit::Linkedin(v) => info.linkedin = optional_text(v),
            PersonalInfoEdit::Website(v) => info.website = optional_text(v),
            PersonalInfoEdit::Summary(v) => info.summary = v,
        }
        Some(self.slice())
    }
}
