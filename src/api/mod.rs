// API layer module (adapters for controllers)
// Follows Hexagonal Architecture - API is an adapter

pub mod errors;
pub mod handlers;
pub mod state;

use axum::{
    routing::{delete, get, post},
    Router,
};

use handlers::{draft, roster};
use state::AppState;

/// Builds the composer API router over the given application state
pub fn router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(roster::health_check))
        // Session lifecycle
        .route(
            "/api/contests/:contest_id/draft",
            post(draft::open_draft).get(draft::get_draft),
        )
        // Roster view
        .route("/api/contests/:contest_id/roster", get(roster::get_roster))
        // Draft editing
        .route(
            "/api/contests/:contest_id/draft/players",
            post(draft::add_player),
        )
        .route(
            "/api/contests/:contest_id/draft/players/:player_id",
            delete(draft::remove_player),
        )
        .route(
            "/api/contests/:contest_id/draft/captain",
            post(draft::set_captain),
        )
        .route(
            "/api/contests/:contest_id/draft/vice-captain",
            post(draft::set_vice_captain),
        )
        // Submission
        .route(
            "/api/contests/:contest_id/draft/submit",
            post(draft::submit_draft),
        )
        .with_state(state)
}
