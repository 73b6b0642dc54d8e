use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::api::errors::ApiError;
use crate::api::state::AppState;
use crate::composer::TeamComposer;
use crate::domain::draft::{ContestId, DraftStatus, PlayerId, Sport, TEAM_SIZE};
use crate::domain::roster::Player;

/// Request body naming a single roster player
#[derive(Debug, Deserialize)]
pub struct PlayerRef {
    pub player_id: String,
}

/// A player as rendered in API responses
#[derive(Debug, Serialize)]
pub struct PlayerView {
    pub player_id: String,
    pub name: String,
    pub team: String,
    pub role: String,
}

impl From<&Player> for PlayerView {
    fn from(player: &Player) -> Self {
        Self {
            player_id: player.id.to_string(),
            name: player.name.clone(),
            team: player.team.clone(),
            role: player.role.to_string(),
        }
    }
}

/// The derived UI state of a draft session
#[derive(Debug, Serialize)]
pub struct DraftView {
    pub contest_id: String,
    pub contest_title: String,
    pub sport: Sport,
    pub status: DraftStatus,
    pub selected: Vec<PlayerView>,
    pub selected_count: usize,
    pub team_size: usize,
    pub captain: Option<PlayerView>,
    pub vice_captain: Option<PlayerView>,
    pub submittable: bool,
}

impl From<&TeamComposer> for DraftView {
    fn from(composer: &TeamComposer) -> Self {
        let resolve = |id: Option<&PlayerId>| {
            id.and_then(|id| composer.roster().find(id)).map(PlayerView::from)
        };
        Self {
            contest_id: composer.contest().id.to_string(),
            contest_title: composer.contest().title.clone(),
            sport: composer.contest().sport,
            status: composer.status(),
            selected: composer
                .draft()
                .selection()
                .iter()
                .filter_map(|id| composer.roster().find(id))
                .map(PlayerView::from)
                .collect(),
            selected_count: composer.draft().selection().len(),
            team_size: TEAM_SIZE,
            captain: resolve(composer.draft().captain()),
            vice_captain: resolve(composer.draft().vice_captain()),
            submittable: composer.is_submittable(),
        }
    }
}

/// Response from a successful submission
#[derive(Debug, Serialize)]
pub struct SubmitResponse {
    pub message: String,
    pub redirect: String,
}

fn parse_contest_id(raw: String) -> Result<ContestId, ApiError> {
    ContestId::new(raw).map_err(ApiError::bad_request)
}

fn parse_player_id(raw: String) -> Result<PlayerId, ApiError> {
    PlayerId::new(raw).map_err(ApiError::bad_request)
}

fn no_session(contest_id: &ContestId) -> ApiError {
    ApiError::not_found(format!("No draft session for contest: {}", contest_id))
}

/// Open (or reopen) a draft session for a contest
///
/// POST /api/contests/:contest_id/draft
pub async fn open_draft(
    State(state): State<AppState>,
    Path(contest_id): Path<String>,
) -> Result<(StatusCode, Json<DraftView>), ApiError> {
    let contest_id = parse_contest_id(contest_id)?;

    let composer = TeamComposer::load(
        state.rosters.as_ref(),
        state.prior_drafts.as_ref(),
        &contest_id,
    )
    .await?;
    info!(contest_id = %contest_id, roster = composer.roster().len(), "Opened draft session");

    let view = DraftView::from(&composer);
    state.sessions.lock().await.insert(contest_id, composer);

    Ok((StatusCode::CREATED, Json(view)))
}

/// Get the current draft view
///
/// GET /api/contests/:contest_id/draft
pub async fn get_draft(
    State(state): State<AppState>,
    Path(contest_id): Path<String>,
) -> Result<Json<DraftView>, ApiError> {
    let contest_id = parse_contest_id(contest_id)?;
    let sessions = state.sessions.lock().await;
    let composer = sessions.get(&contest_id).ok_or_else(|| no_session(&contest_id))?;

    Ok(Json(DraftView::from(composer)))
}

/// Add a roster player to the selection
///
/// POST /api/contests/:contest_id/draft/players
pub async fn add_player(
    State(state): State<AppState>,
    Path(contest_id): Path<String>,
    Json(req): Json<PlayerRef>,
) -> Result<Json<DraftView>, ApiError> {
    let contest_id = parse_contest_id(contest_id)?;
    let player_id = parse_player_id(req.player_id)?;

    let mut sessions = state.sessions.lock().await;
    let composer = sessions
        .get_mut(&contest_id)
        .ok_or_else(|| no_session(&contest_id))?;
    composer.add_player(&player_id)?;

    Ok(Json(DraftView::from(&*composer)))
}

/// Remove a player from the selection
///
/// DELETE /api/contests/:contest_id/draft/players/:player_id
pub async fn remove_player(
    State(state): State<AppState>,
    Path((contest_id, player_id)): Path<(String, String)>,
) -> Result<Json<DraftView>, ApiError> {
    let contest_id = parse_contest_id(contest_id)?;
    let player_id = parse_player_id(player_id)?;

    let mut sessions = state.sessions.lock().await;
    let composer = sessions
        .get_mut(&contest_id)
        .ok_or_else(|| no_session(&contest_id))?;
    composer.remove_player(&player_id)?;

    Ok(Json(DraftView::from(&*composer)))
}

/// Designate the captain
///
/// POST /api/contests/:contest_id/draft/captain
pub async fn set_captain(
    State(state): State<AppState>,
    Path(contest_id): Path<String>,
    Json(req): Json<PlayerRef>,
) -> Result<Json<DraftView>, ApiError> {
    let contest_id = parse_contest_id(contest_id)?;
    let player_id = parse_player_id(req.player_id)?;

    let mut sessions = state.sessions.lock().await;
    let composer = sessions
        .get_mut(&contest_id)
        .ok_or_else(|| no_session(&contest_id))?;
    composer.set_captain(&player_id)?;

    Ok(Json(DraftView::from(&*composer)))
}

/// Designate the vice-captain
///
/// POST /api/contests/:contest_id/draft/vice-captain
pub async fn set_vice_captain(
    State(state): State<AppState>,
    Path(contest_id): Path<String>,
    Json(req): Json<PlayerRef>,
) -> Result<Json<DraftView>, ApiError> {
    let contest_id = parse_contest_id(contest_id)?;
    let player_id = parse_player_id(req.player_id)?;

    let mut sessions = state.sessions.lock().await;
    let composer = sessions
        .get_mut(&contest_id)
        .ok_or_else(|| no_session(&contest_id))?;
    composer.set_vice_captain(&player_id)?;

    Ok(Json(DraftView::from(&*composer)))
}

/// Submit the finished draft to the save endpoint
///
/// POST /api/contests/:contest_id/draft/submit
///
/// Two-phase: the payload is taken and the session marked in-flight
/// under the lock, the save round-trip runs with the lock released,
/// and the outcome is recorded afterwards. A second submit arriving
/// while the first is outstanding is refused with 409.
pub async fn submit_draft(
    State(state): State<AppState>,
    Path(contest_id): Path<String>,
) -> Result<Json<SubmitResponse>, ApiError> {
    let contest_id = parse_contest_id(contest_id)?;

    let submission = {
        let mut sessions = state.sessions.lock().await;
        let composer = sessions
            .get_mut(&contest_id)
            .ok_or_else(|| no_session(&contest_id))?;
        composer.begin_submit()?
    };

    let outcome = state.saver.save_team(&submission).await;

    {
        let mut sessions = state.sessions.lock().await;
        if let Some(composer) = sessions.get_mut(&contest_id) {
            composer.finish_submit(outcome.is_ok());
        }
    }

    let saved = outcome?;
    info!(contest_id = %contest_id, "Team submitted");

    Ok(Json(SubmitResponse {
        message: saved.message,
        redirect: saved.redirect,
    }))
}
