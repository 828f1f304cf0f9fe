pub mod health;

use axum::{
    routing::{delete, get, patch, post, put},
    Router,
};

use crate::builder::handlers as builder;
use crate::dashboard::handlers as dashboard;
use crate::errors::AppError;
use crate::shell::handlers as session;
use crate::state::AppState;

async fn not_implemented() -> Result<(), AppError> {
    Err(AppError::NotImplemented)
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Session
        .route("/api/v1/session", get(session::handle_get_session))
        .route("/api/v1/session/login", post(session::handle_login))
        .route("/api/v1/session/signup", post(session::handle_signup))
        .route("/api/v1/session/logout", post(session::handle_logout))
        .route("/api/v1/session/screen", post(session::handle_switch_screen))
        // Dashboard
        .route(
            "/api/v1/resumes",
            get(dashboard::handle_list_resumes).post(dashboard::handle_create_resume),
        )
        .route("/api/v1/resumes/:id/edit", post(dashboard::handle_edit_resume))
        .route("/api/v1/resumes/:id", delete(not_implemented))
        .route("/api/v1/resumes/:id/download", get(not_implemented))
        // Builder
        .route("/api/v1/builder", get(builder::handle_get_builder))
        .route("/api/v1/builder/next", post(builder::handle_next))
        .route("/api/v1/builder/previous", post(builder::handle_previous))
        .route("/api/v1/builder/meta", patch(builder::handle_update_meta))
        .route(
            "/api/v1/builder/personal-info",
            put(builder::handle_apply_personal_info),
        )
        .route(
            "/api/v1/builder/personal-info/edit",
            post(builder::handle_personal_info_edit),
        )
        .route(
            "/api/v1/builder/work-experience",
            put(builder::handle_apply_work_experience),
        )
        .route(
            "/api/v1/builder/work-experience/events",
            post(builder::handle_work_experience_event),
        )
        .route(
            "/api/v1/builder/education",
            put(builder::handle_apply_education),
        )
        .route(
            "/api/v1/builder/education/events",
            post(builder::handle_education_event),
        )
        .route("/api/v1/builder/skills", put(builder::handle_apply_skills))
        .route(
            "/api/v1/builder/skills/events",
            post(builder::handle_skills_event),
        )
        .route("/api/v1/builder/suggest", post(builder::handle_suggest))
        .route("/api/v1/builder/preview", get(builder::handle_preview))
        .route(
            "/api/v1/builder/preview.md",
            get(builder::handle_preview_markdown),
        )
        .route("/api/v1/builder/save", post(builder::handle_save))
        .route("/api/v1/builder/export", post(builder::handle_export))
        .route("/api/v1/builder/back", post(builder::handle_back))
        .with_state(state)
}
