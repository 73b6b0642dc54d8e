use async_trait::async_trait;

use super::errors::ProviderResult;
use crate::domain::draft::{ContestId, PlayerId};

/// The finalized team payload sent to the save endpoint
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeamSubmission {
    pub contest_id: ContestId,
    /// Exactly 11 identifiers, in display order
    pub selected_players: Vec<PlayerId>,
    pub captain_id: PlayerId,
    pub vice_captain_id: PlayerId,
}

/// Confirmation returned by the save endpoint on success
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeamSaved {
    /// Human-readable confirmation, shown to the user as-is
    pub message: String,
    /// Where the client should navigate next
    pub redirect: String,
}

/// Port for the external save endpoint
///
/// A rejection (contest closed, already joined, ...) comes back as
/// `ProviderError::Rejected` carrying the upstream message verbatim.
#[async_trait]
pub trait TeamSaver: Send + Sync {
    /// Persist a finalized team upstream
    async fn save_team(&self, submission: &TeamSubmission) -> ProviderResult<TeamSaved>;
}
