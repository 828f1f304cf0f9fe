//! Axum route handlers for the session (login / signup / logout) screens.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::models::User;
use crate::shell::{AppShell, Screen};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    #[serde(default)]
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct SignupRequest {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct ScreenRequest {
    pub screen: Screen,
}

#[derive(Debug, Serialize)]
pub struct SessionResponse {
    pub screen: Screen,
    pub user: Option<User>,
}

impl From<&AppShell> for SessionResponse {
    fn from(shell: &AppShell) -> Self {
        Self {
            screen: shell.screen(),
            user: shell.user().cloned(),
        }
    }
}

/// GET /api/v1/session
pub async fn handle_get_session(State(state): State<AppState>) -> Json<SessionResponse> {
    let shell = state.shell.lock().await;
    Json(SessionResponse::from(&*shell))
}

/// POST /api/v1/session/login
///
/// Mock sign-in: any credentials succeed and open the dashboard.
pub async fn handle_login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> Json<SessionResponse> {
    let mut shell = state.shell.lock().await;
    shell.login(&request.email, &request.password);
    Json(SessionResponse::from(&*shell))
}

/// POST /api/v1/session/signup
pub async fn handle_signup(
    State(state): State<AppState>,
    Json(request): Json<SignupRequest>,
) -> Json<SessionResponse> {
    let mut shell = state.shell.lock().await;
    shell.signup(&request.name, &request.email, &request.password);
    Json(SessionResponse::from(&*shell))
}

/// POST /api/v1/session/logout
pub async fn handle_logout(State(state): State<AppState>) -> Json<SessionResponse> {
    let mut shell = state.shell.lock().await;
    shell.logout();
    Json(SessionResponse::from(&*shell))
}

/// POST /api/v1/session/screen
///
/// Switches between the login and signup screens.
pub async fn handle_switch_screen(
    State(state): State<AppState>,
    Json(request): Json<ScreenRequest>,
) -> Result<Json<SessionResponse>, AppError> {
    let mut shell = state.shell.lock().await;
    match request.screen {
        Screen::Login => shell.show_login(),
        Screen::Signup => shell.show_signup(),
        other => {
            return Err(AppError::Validation(format!(
                "screen must be 'login' or 'signup', got '{other:?}'"
            )))
        }
    }
    Ok(Json(SessionResponse::from(&*shell)))
}
