//! Axum route handlers for the resume builder screen.
//!
//! Each handler is one user event fed into the open wizard. Events for a step
//! that is not on screen come back as 409.

use std::collections::HashSet;

use axum::{
    extract::State,
    http::header,
    response::IntoResponse,
    Json,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::builder::steps::{
    EducationEdit, EntryEvent, PersonalInfoEdit, SkillsEvent, WorkExperienceEdit,
};
use crate::builder::{SuggestTarget, WizardController, WizardView};
use crate::dashboard::{DashboardView, UpsertOutcome};
use crate::errors::AppError;
use crate::models::{Education, PersonalInfo, Resume, Skill, Template, WorkExperience};
use crate::notice::Notice;
use crate::preview::PreviewDocument;
use crate::shell::AppShell;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct MetaRequest {
    pub title: Option<String>,
    pub template: Option<Template>,
}

#[derive(Debug, Serialize)]
pub struct SuggestResponse {
    pub view: WizardView,
    pub notice: Notice,
}

#[derive(Debug, Serialize)]
pub struct SaveResponse {
    pub outcome: UpsertOutcome,
    pub resume: Resume,
    pub notice: Notice,
}

fn open_wizard(shell: &mut AppShell) -> Result<&mut WizardController, AppError> {
    shell
        .wizard_mut()
        .ok_or_else(|| AppError::Conflict("Resume builder is not open".to_string()))
}

fn active_wizard(shell: &AppShell) -> Result<&WizardController, AppError> {
    shell
        .wizard()
        .ok_or_else(|| AppError::Conflict("Resume builder is not open".to_string()))
}

fn view_of(shell: &AppShell) -> Result<Json<WizardView>, AppError> {
    active_wizard(shell).map(|w| Json(w.view()))
}

/// Rejects a replacement slice that repeats an entry id.
fn ensure_unique_ids<T>(
    entries: &[T],
    id_of: impl Fn(&T) -> Uuid,
    slice: &str,
) -> Result<(), AppError> {
    let mut seen = HashSet::new();
    match entries.iter().map(id_of).find(|id| !seen.insert(*id)) {
        Some(id) => Err(AppError::Validation(format!(
            "{slice} contains duplicate entry id {id}"
        ))),
        None => Ok(()),
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Navigation
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/v1/builder
pub async fn handle_get_builder(
    State(state): State<AppState>,
) -> Result<Json<WizardView>, AppError> {
    let shell = state.shell.lock().await;
    view_of(&shell)
}

/// POST /api/v1/builder/next
pub async fn handle_next(State(state): State<AppState>) -> Result<Json<WizardView>, AppError> {
    let mut shell = state.shell.lock().await;
    open_wizard(&mut shell)?.advance();
    view_of(&shell)
}

/// POST /api/v1/builder/previous
pub async fn handle_previous(
    State(state): State<AppState>,
) -> Result<Json<WizardView>, AppError> {
    let mut shell = state.shell.lock().await;
    open_wizard(&mut shell)?.retreat();
    view_of(&shell)
}

/// PATCH /api/v1/builder/meta
pub async fn handle_update_meta(
    State(state): State<AppState>,
    Json(request): Json<MetaRequest>,
) -> Result<Json<WizardView>, AppError> {
    let mut shell = state.shell.lock().await;
    let wizard = open_wizard(&mut shell)?;
    if let Some(title) = request.title {
        wizard.set_title(title);
    }
    if let Some(template) = request.template {
        wizard.set_template(template);
    }
    view_of(&shell)
}

// ────────────────────────────────────────────────────────────────────────────
// Whole-slice replacement
// ────────────────────────────────────────────────────────────────────────────

/// PUT /api/v1/builder/personal-info
pub async fn handle_apply_personal_info(
    State(state): State<AppState>,
    Json(personal_info): Json<PersonalInfo>,
) -> Result<Json<WizardView>, AppError> {
    let mut shell = state.shell.lock().await;
    open_wizard(&mut shell)?.apply_personal_info(personal_info);
    view_of(&shell)
}

/// PUT /api/v1/builder/work-experience
pub async fn handle_apply_work_experience(
    State(state): State<AppState>,
    Json(entries): Json<Vec<WorkExperience>>,
) -> Result<Json<WizardView>, AppError> {
    ensure_unique_ids(&entries, |e| e.id, "work_experience")?;
    let mut shell = state.shell.lock().await;
    open_wizard(&mut shell)?.apply_work_experience(entries);
    view_of(&shell)
}

/// PUT /api/v1/builder/education
pub async fn handle_apply_education(
    State(state): State<AppState>,
    Json(entries): Json<Vec<Education>>,
) -> Result<Json<WizardView>, AppError> {
    ensure_unique_ids(&entries, |e| e.id, "education")?;
    let mut shell = state.shell.lock().await;
    open_wizard(&mut shell)?.apply_education(entries);
    view_of(&shell)
}

/// PUT /api/v1/builder/skills
pub async fn handle_apply_skills(
    State(state): State<AppState>,
    Json(skills): Json<Vec<Skill>>,
) -> Result<Json<WizardView>, AppError> {
    ensure_unique_ids(&skills, |s| s.id, "skills")?;
    let mut shell = state.shell.lock().await;
    open_wizard(&mut shell)?.apply_skills(skills);
    view_of(&shell)
}

// ────────────────────────────────────────────────────────────────────────────
// Form events
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/builder/personal-info/edit
pub async fn handle_personal_info_edit(
    State(state): State<AppState>,
    Json(edit): Json<PersonalInfoEdit>,
) -> Result<Json<WizardView>, AppError> {
    let mut shell = state.shell.lock().await;
    open_wizard(&mut shell)?.edit_personal_info(edit)?;
    view_of(&shell)
}

/// POST /api/v1/builder/work-experience/events
pub async fn handle_work_experience_event(
    State(state): State<AppState>,
    Json(event): Json<EntryEvent<WorkExperienceEdit>>,
) -> Result<Json<WizardView>, AppError> {
    let mut shell = state.shell.lock().await;
    open_wizard(&mut shell)?.work_experience_event(event)?;
    view_of(&shell)
}

/// POST /api/v1/builder/education/events
pub async fn handle_education_event(
    State(state): State<AppState>,
    Json(event): Json<EntryEvent<EducationEdit>>,
) -> Result<Json<WizardView>, AppError> {
    let mut shell = state.shell.lock().await;
    open_wizard(&mut shell)?.education_event(event)?;
    view_of(&shell)
}

/// POST /api/v1/builder/skills/events
pub async fn handle_skills_event(
    State(state): State<AppState>,
    Json(event): Json<SkillsEvent>,
) -> Result<Json<WizardView>, AppError> {
    let mut shell = state.shell.lock().await;
    open_wizard(&mut shell)?.skills_event(event)?;
    view_of(&shell)
}

/// POST /api/v1/builder/suggest
pub async fn handle_suggest(
    State(state): State<AppState>,
    Json(target): Json<SuggestTarget>,
) -> Result<Json<SuggestResponse>, AppError> {
    let mut shell = state.shell.lock().await;
    let wizard = open_wizard(&mut shell)?;
    let notice = wizard.suggest(target)?;
    Ok(Json(SuggestResponse {
        view: wizard.view(),
        notice,
    }))
}

// ────────────────────────────────────────────────────────────────────────────
// Preview / save / export
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/v1/builder/preview
pub async fn handle_preview(
    State(state): State<AppState>,
) -> Result<Json<PreviewDocument>, AppError> {
    let shell = state.shell.lock().await;
    Ok(Json(active_wizard(&shell)?.preview()))
}

/// GET /api/v1/builder/preview.md
pub async fn handle_preview_markdown(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let shell = state.shell.lock().await;
    let markdown = active_wizard(&shell)?.preview().to_markdown();
    Ok((
        [(header::CONTENT_TYPE, "text/markdown; charset=utf-8")],
        markdown,
    ))
}

/// POST /api/v1/builder/save
///
/// Stores the draft in the collection. The builder stays open.
pub async fn handle_save(State(state): State<AppState>) -> Result<Json<SaveResponse>, AppError> {
    let mut shell = state.shell.lock().await;
    let (outcome, notice) = shell
        .save_draft()
        .ok_or_else(|| AppError::Conflict("Resume builder is not open".to_string()))?;
    let resume = active_wizard(&shell)?.draft().clone();
    Ok(Json(SaveResponse {
        outcome,
        resume,
        notice,
    }))
}

/// POST /api/v1/builder/export
pub async fn handle_export(State(state): State<AppState>) -> Result<Json<Notice>, AppError> {
    let shell = state.shell.lock().await;
    Ok(Json(active_wizard(&shell)?.export()))
}

/// POST /api/v1/builder/back
///
/// Returns to the dashboard without saving.
pub async fn handle_back(State(state): State<AppState>) -> Result<Json<DashboardView>, AppError> {
    let mut shell = state.shell.lock().await;
    active_wizard(&shell)?;
    shell.back_to_dashboard();
    Ok(Json(shell.dashboard_view("")))
}
