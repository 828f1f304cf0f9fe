pub mod collection;
pub mod handlers;
pub mod view;

pub use collection::{DashboardStats, ResumeCollection, UpsertOutcome};
pub use view::{build_view, DashboardView};
