//! Step forms. Each one owns an editable copy of one resume slice and hands
//! the whole updated slice back on every change.

pub mod education;
pub mod personal_info;
pub mod skills;
pub mod work_experience;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::Resume;

pub use education::{EducationEdit, EducationForm};
pub use personal_info::{PersonalInfoEdit, PersonalInfoForm};
pub use skills::{SkillsEvent, SkillsForm};
pub use work_experience::{WorkExperienceEdit, WorkExperienceForm};

/// Shared shape of the four wizard forms.
pub trait StepForm {
    type Slice: Clone;
    type Event;

    /// Builds the local editable state from the draft.
    fn seed(draft: &Resume) -> Self;

    /// Current local state as a whole slice.
    fn slice(&self) -> Self::Slice;

    /// Applies one user event. `Some` carries the slice to propagate upward;
    /// `None` means the event changed nothing the draft cares about.
    fn handle(&mut self, event: Self::Event) -> Option<Self::Slice>;
}

/// Add/remove/edit events for the repeatable-entry forms.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum EntryEvent<E> {
    Add,
    Remove { id: Uuid },
    Edit { id: Uuid, edit: E },
}

/// Local entries for a repeatable slice, with one blank placeholder when the
/// draft slice is empty.
pub(crate) fn seed_entries<T: Clone>(slice: &[T], blank: impl FnOnce() -> T) -> Vec<T> {
    if slice.is_empty() {
        vec![blank()]
    } else {
        slice.to_vec()
    }
}
