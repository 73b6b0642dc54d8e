use async_trait::async_trait;
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};

use crate::domain::draft::{ContestId, PlayerId, Role, Sport};
use crate::domain::providers::{
    PriorDraftProvider, ProviderError, ProviderResult, RosterBundle, RosterProvider, SavedDraft,
    TeamSaved, TeamSaver, TeamSubmission,
};
use crate::domain::roster::{Contest, Player};

/// Where a successful save sends the user next.
const JOINED_CONTESTS_PATH: &str = "/joined-contests";

/// HTTP client for the legacy contest backend
///
/// Implements all three provider ports against the upstream REST
/// surface: `/get-players`, `/get-user-team` and `/save-team`. Every
/// upstream payload is an envelope of the form
/// `{ "success": bool, "message": ..., ... }`.
pub struct LegacyApiClient {
    base_url: String,
    http: reqwest::Client,
}

impl LegacyApiClient {
    /// Creates a client rooted at the upstream base URL
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            base_url,
            http: reqwest::Client::new(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

#[derive(Debug, Deserialize)]
struct RosterEnvelope {
    success: bool,
    #[serde(default)]
    players: Vec<PlayerDto>,
    contest: Option<ContestDto>,
}

#[derive(Debug, Deserialize)]
struct PlayerDto {
    player_id: String,
    name: String,
    team: String,
    role: String,
}

#[derive(Debug, Deserialize)]
struct ContestDto {
    #[serde(default)]
    title: String,
    sport_type: Option<Sport>,
}

#[derive(Debug, Deserialize)]
struct PriorDraftEnvelope {
    success: bool,
    team: Option<SavedDraftDto>,
}

#[derive(Debug, Deserialize)]
struct SavedDraftDto {
    #[serde(default)]
    selected_players: Vec<String>,
    captain_id: Option<String>,
    vice_captain_id: Option<String>,
}

#[derive(Debug, Serialize)]
struct SaveTeamRequest<'a> {
    contest_id: &'a str,
    selected_players: Vec<&'a str>,
    captain_id: &'a str,
    vice_captain_id: &'a str,
}

#[derive(Debug, Deserialize)]
struct SaveTeamEnvelope {
    success: bool,
    #[serde(default)]
    message: String,
}

fn transport_error(err: reqwest::Error) -> ProviderError {
    ProviderError::Unreachable(err.to_string())
}

fn parse_player(dto: PlayerDto) -> ProviderResult<Player> {
    let id = PlayerId::new(dto.player_id).map_err(ProviderError::InvalidResponse)?;
    let role = Role::parse(&dto.role).map_err(ProviderError::InvalidResponse)?;
    Ok(Player {
        id,
        name: dto.name,
        team: dto.team,
        role,
    })
}

fn parse_player_id(raw: String) -> ProviderResult<PlayerId> {
    PlayerId::new(raw).map_err(ProviderError::InvalidResponse)
}

#[async_trait]
impl RosterProvider for LegacyApiClient {
    async fn fetch_roster(&self, contest_id: &ContestId) -> ProviderResult<RosterBundle> {
        let response = self
            .http
            .get(self.url("/get-players"))
            .query(&[("contest_id", contest_id.as_str())])
            .send()
            .await
            .map_err(transport_error)?;

        if response.status() == StatusCode::NOT_FOUND {
            return Err(ProviderError::ContestNotFound(contest_id.clone()));
        }
        let envelope: RosterEnvelope = response.json().await.map_err(transport_error)?;
        if !envelope.success {
            return Err(ProviderError::ContestNotFound(contest_id.clone()));
        }

        let contest = envelope
            .contest
            .ok_or_else(|| ProviderError::InvalidResponse("Missing contest metadata".to_string()))?;
        let players = envelope
            .players
            .into_iter()
            .map(parse_player)
            .collect::<ProviderResult<Vec<_>>>()?;

        Ok(RosterBundle {
            contest: Contest {
                id: contest_id.clone(),
                title: contest.title,
                // Legacy documents may predate multi-sport support.
                sport: contest.sport_type.unwrap_or(Sport::Cricket),
            },
            players,
        })
    }
}

#[async_trait]
impl PriorDraftProvider for LegacyApiClient {
    async fn fetch_prior_draft(&self, contest_id: &ContestId) -> ProviderResult<Option<SavedDraft>> {
        let response = self
            .http
            .get(self.url("/get-user-team"))
            .query(&[("contest_id", contest_id.as_str())])
            .send()
            .await
            .map_err(transport_error)?;

        // The backend answers 404 both for "no team yet" and for an
        // unknown contest; either way there is nothing to restore.
        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        let envelope: PriorDraftEnvelope = response.json().await.map_err(transport_error)?;
        let Some(team) = envelope.team.filter(|_| envelope.success) else {
            return Ok(None);
        };

        let selected_players = team
            .selected_players
            .into_iter()
            .map(parse_player_id)
            .collect::<ProviderResult<Vec<_>>>()?;

        Ok(Some(SavedDraft {
            selected_players,
            captain_id: team.captain_id.map(parse_player_id).transpose()?,
            vice_captain_id: team.vice_captain_id.map(parse_player_id).transpose()?,
        }))
    }
}

#[async_trait]
impl TeamSaver for LegacyApiClient {
    async fn save_team(&self, submission: &TeamSubmission) -> ProviderResult<TeamSaved> {
        let request = SaveTeamRequest {
            contest_id: submission.contest_id.as_str(),
            selected_players: submission
                .selected_players
                .iter()
                .map(|p| p.as_str())
                .collect(),
            captain_id: submission.captain_id.as_str(),
            vice_captain_id: submission.vice_captain_id.as_str(),
        };

        let response = self
            .http
            .post(self.url("/save-team"))
            .json(&request)
            .send()
            .await
            .map_err(transport_error)?;

        let envelope: SaveTeamEnvelope = response.json().await.map_err(transport_error)?;
        if !envelope.success {
            return Err(ProviderError::Rejected {
                message: envelope.message,
            });
        }

        Ok(TeamSaved {
            message: envelope.message,
            redirect: JOINED_CONTESTS_PATH.to_string(),
        })
    }
}
