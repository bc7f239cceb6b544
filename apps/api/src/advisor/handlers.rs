//! Axum route handlers for the advice catalogue.

use axum::Json;
use serde::Serialize;

use crate::advisor::templates::SUGGESTED_QUESTIONS;

#[derive(Debug, Serialize)]
pub struct SuggestionsResponse {
    pub questions: Vec<&'static str>,
}

/// GET /api/v1/chat/suggestions
pub async fn handle_suggestions() -> Json<SuggestionsResponse> {
    Json(SuggestionsResponse {
        questions: SUGGESTED_QUESTIONS.to_vec(),
    })
}
