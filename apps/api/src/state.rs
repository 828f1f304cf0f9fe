use std::sync::Arc;

use tokio::sync::Mutex;

use crate::config::Config;
use crate::dashboard::ResumeCollection;
use crate::models::samples::sample_resumes;
use crate::shell::AppShell;
use crate::suggest::CannedSuggester;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// The single application shell. The mutex serializes user events so each
    /// request sees the result of the previous one.
    pub shell: Arc<Mutex<AppShell>>,
    pub config: Config,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let collection = if config.seed_sample_data {
            ResumeCollection::new(sample_resumes())
        } else {
            ResumeCollection::default()
        };
        let suggester = Arc::new(CannedSuggester::new(config.suggestion_pick));
        let shell = AppShell::new(collection, suggester);

        Self {
            shell: Arc::new(Mutex::new(shell)),
            config,
        }
    }
}
