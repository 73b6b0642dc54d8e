use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::{Deserialize, Serialize};

use super::draft::PlayerView;
use crate::api::errors::ApiError;
use crate::api::state::AppState;
use crate::domain::draft::{ContestId, RosterFilter, Sport};

/// Query parameters for the roster view
#[derive(Debug, Deserialize)]
pub struct RosterQuery {
    /// A role wire name, or the "all" sentinel (default)
    pub role: Option<String>,
}

/// The roster as rendered for the player-pool panel
#[derive(Debug, Serialize)]
pub struct RosterView {
    pub contest_id: String,
    pub contest_title: String,
    pub sport: Sport,
    /// The sport's role tabs, in display order
    pub roles: Vec<String>,
    pub players: Vec<PlayerView>,
}

/// Get the (optionally role-filtered) player pool for an open session
///
/// GET /api/contests/:contest_id/roster?role=Bowler
pub async fn get_roster(
    State(state): State<AppState>,
    Path(contest_id): Path<String>,
    Query(query): Query<RosterQuery>,
) -> Result<Json<RosterView>, ApiError> {
    let contest_id = ContestId::new(contest_id).map_err(ApiError::bad_request)?;
    let filter = match query.role.as_deref() {
        None => RosterFilter::All,
        Some(raw) => RosterFilter::parse(raw).map_err(ApiError::bad_request)?,
    };

    let sessions = state.sessions.lock().await;
    let composer = sessions
        .get(&contest_id)
        .ok_or_else(|| ApiError::not_found(format!("No draft session for contest: {}", contest_id)))?;

    let contest = composer.contest();
    Ok(Json(RosterView {
        contest_id: contest.id.to_string(),
        contest_title: contest.title.clone(),
        sport: contest.sport,
        roles: contest.sport.roles().iter().map(|r| r.to_string()).collect(),
        players: composer
            .filter_by_role(filter)
            .into_iter()
            .map(PlayerView::from)
            .collect(),
    }))
}

/// Health check endpoint
///
/// GET /health
pub async fn health_check() -> &'static str {
    "OK"
}
