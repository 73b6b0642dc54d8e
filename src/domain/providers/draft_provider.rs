use async_trait::async_trait;

use super::errors::ProviderResult;
use crate::domain::draft::{ContestId, PlayerId};

/// A previously saved team as stored upstream
///
/// Identifiers are raw: they may be stale relative to a freshly loaded
/// roster and are resolved (and silently pruned) during reconstruction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SavedDraft {
    pub selected_players: Vec<PlayerId>,
    pub captain_id: Option<PlayerId>,
    pub vice_captain_id: Option<PlayerId>,
}

/// Port for the prior-draft provider
///
/// Absence of a saved team is a valid response, not an error.
#[async_trait]
pub trait PriorDraftProvider: Send + Sync {
    /// Fetch the current user's saved team for a contest, if any
    async fn fetch_prior_draft(&self, contest_id: &ContestId) -> ProviderResult<Option<SavedDraft>>;
}
