pub mod health;

use axum::{
    routing::{delete, get, patch, post, put},
    Router,
};

use crate::advisor::handlers as advisor;
use crate::conversation::handlers as conversation;
use crate::recommendations::handlers as recommendations;
use crate::session::handlers as session;
use crate::state::AppState;
use crate::wizard::handlers as wizard;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Sessions and tabs
        .route("/api/v1/sessions", post(session::handle_create_session))
        .route(
            "/api/v1/sessions/:id",
            get(session::handle_get_session).delete(session::handle_delete_session),
        )
        .route("/api/v1/sessions/:id/tab", put(session::handle_select_tab))
        // Profile wizard
        .route(
            "/api/v1/sessions/:id/profile",
            patch(wizard::handle_update_fields),
        )
        .route(
            "/api/v1/sessions/:id/profile/next",
            post(wizard::handle_next),
        )
        .route(
            "/api/v1/sessions/:id/profile/back",
            post(wizard::handle_back),
        )
        // Results
        .route(
            "/api/v1/sessions/:id/results",
            get(recommendations::handle_results),
        )
        .route(
            "/api/v1/recommendations/:interest",
            get(recommendations::handle_lookup),
        )
        // Chat
        .route(
            "/api/v1/sessions/:id/chat",
            get(conversation::handle_get_conversation).post(conversation::handle_send_message),
        )
        .route(
            "/api/v1/sessions/:id/chat/pending",
            delete(conversation::handle_cancel_pending),
        )
        .route(
            "/api/v1/chat/suggestions",
            get(advisor::handle_suggestions),
        )
        .with_state(state)
}
