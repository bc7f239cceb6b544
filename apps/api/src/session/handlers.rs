//! Axum route handlers for dashboard sessions.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::errors::AppError;
use crate::session::{SessionOverview, Tab};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct SelectTabRequest {
    pub tab: Tab,
}

/// POST /api/v1/sessions
pub async fn handle_create_session(
    State(state): State<AppState>,
) -> Result<(StatusCode, Json<SessionOverview>), AppError> {
    let overview = state.sessions.create()?;
    Ok((StatusCode::CREATED, Json(overview)))
}

/// GET /api/v1/sessions/:id
pub async fn handle_get_session(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<SessionOverview>, AppError> {
    let overview = state.sessions.with_session(id, |session| session.overview())?;
    Ok(Json(overview))
}

/// DELETE /api/v1/sessions/:id
///
/// Pending replies are aborted before the session is dropped.
pub async fn handle_delete_session(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    state.sessions.remove(id)?;
    Ok(StatusCode::NO_CONTENT)
}

/// PUT /api/v1/sessions/:id/tab
///
/// Results and chat stay locked until the profile is submitted.
pub async fn handle_select_tab(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<SelectTabRequest>,
) -> Result<Json<SessionOverview>, AppError> {
    let overview = state.sessions.with_session(id, |session| {
        session
            .select_tab(request.tab)
            .map(|_| session.overview())
    })??;

    Ok(Json(overview))
}
