//! Axum route handlers for career recommendations.

use axum::{
    extract::{Path, State},
    Json,
};
use serde::Serialize;
use uuid::Uuid;

use crate::errors::AppError;
use crate::recommendations::catalog::{lookup, resolve, RecommendationBundle};
use crate::recommendations::report::{build_report, RecommendationReport};
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct BundleResponse {
    pub requested: String,
    pub interest: &'static str,
    pub bundle: &'static RecommendationBundle,
}

/// GET /api/v1/recommendations/:interest
///
/// Raw bundle lookup. Unknown interests get the default bundle, never a 404.
pub async fn handle_lookup(Path(interest): Path<String>) -> Json<BundleResponse> {
    Json(BundleResponse {
        interest: resolve(&interest).key(),
        bundle: lookup(&interest),
        requested: interest,
    })
}

/// GET /api/v1/sessions/:id/results
///
/// Results view for the session's submitted profile.
pub async fn handle_results(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<RecommendationReport>, AppError> {
    let report = state
        .sessions
        .with_session(id, |session| session.profile().map(build_report))?
        .ok_or_else(|| {
            AppError::Conflict("Complete your profile to see recommendations".to_string())
        })?;

    Ok(Json(report))
}
