//! Axum route handlers for the dashboard screen.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::builder::WizardView;
use crate::dashboard::DashboardView;
use crate::errors::AppError;
use crate::shell::{AppShell, Screen};
use crate::state::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    pub search: String,
}

fn require_dashboard(shell: &AppShell) -> Result<(), AppError> {
    if shell.screen() == Screen::Dashboard {
        Ok(())
    } else {
        Err(AppError::Conflict(format!(
            "Dashboard is not open (current screen: {:?})",
            shell.screen()
        )))
    }
}

fn opened_view(shell: &AppShell) -> Result<Json<WizardView>, AppError> {
    shell
        .wizard()
        .map(|w| Json(w.view()))
        .ok_or_else(|| AppError::Internal(anyhow::anyhow!("builder did not open")))
}

/// GET /api/v1/resumes?search=
pub async fn handle_list_resumes(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Result<Json<DashboardView>, AppError> {
    let shell = state.shell.lock().await;
    require_dashboard(&shell)?;
    Ok(Json(shell.dashboard_view(&params.search)))
}

/// POST /api/v1/resumes
///
/// Opens the builder on a fresh draft. Nothing is stored until save.
pub async fn handle_create_resume(
    State(state): State<AppState>,
) -> Result<Json<WizardView>, AppError> {
    let mut shell = state.shell.lock().await;
    require_dashboard(&shell)?;
    shell.create_resume();
    opened_view(&shell)
}

/// POST /api/v1/resumes/:id/edit
pub async fn handle_edit_resume(
    State(state): State<AppState>,
    Path(resume_id): Path<Uuid>,
) -> Result<Json<WizardView>, AppError> {
    let mut shell = state.shell.lock().await;
    require_dashboard(&shell)?;
    shell.edit_resume(resume_id);
    opened_view(&shell)
}
