//! Axum route handlers for the profile wizard.

use std::collections::HashMap;

use axum::{
    extract::{Path, State},
    Json,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::profile::ProfileField;
use crate::session::SessionOverview;
use crate::state::AppState;
use crate::wizard::WizardStep;

#[derive(Debug, Deserialize)]
pub struct UpdateFieldsRequest {
    pub fields: HashMap<String, String>,
}

#[derive(Debug, Serialize)]
pub struct AdvanceResponse {
    pub step: WizardStep,
    pub session: SessionOverview,
}

/// PATCH /api/v1/sessions/:id/profile
///
/// Stores any subset of fields. Unknown field names reject the whole request.
pub async fn handle_update_fields(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateFieldsRequest>,
) -> Result<Json<SessionOverview>, AppError> {
    let mut updates = Vec::with_capacity(request.fields.len());
    for (key, value) in request.fields {
        let field = ProfileField::from_key(&key)
            .ok_or_else(|| AppError::Validation(format!("Unknown profile field '{key}'")))?;
        updates.push((field, value));
    }

    let overview = state.sessions.with_session(id, |session| {
        for (field, value) in updates {
            session.wizard_mut().set_field(field, value);
        }
        session.overview()
    })?;

    Ok(Json(overview))
}

/// POST /api/v1/sessions/:id/profile/next
///
/// Advances one section, or submits the profile from the last section.
pub async fn handle_next(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<AdvanceResponse>, AppError> {
    let (step, session) = state.sessions.with_session(id, |session| {
        session
            .advance_wizard()
            .map(|step| (step, session.overview()))
    })??;

    Ok(Json(AdvanceResponse { step, session }))
}

/// POST /api/v1/sessions/:id/profile/back
pub async fn handle_back(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<SessionOverview>, AppError> {
    let overview = state.sessions.with_session(id, |session| {
        session.wizard_mut().back();
        session.overview()
    })?;

    Ok(Json(overview))
}
