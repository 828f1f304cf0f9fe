// Resume builder: the step wizard, its four forms, and the HTTP handlers
// that feed user events into it.

pub mod handlers;
pub mod steps;
pub mod wizard;

pub use wizard::{SuggestTarget, WizardController, WizardError, WizardView};
