// Preview rendering: a pure projection from a resume to a display document.
// No mutation, no state.

pub mod document;
pub mod markdown;

pub use document::{render, PreviewDocument};
