use async_trait::async_trait;

use super::errors::ProviderResult;
use crate::domain::draft::ContestId;
use crate::domain::roster::{Contest, Player};

/// The roster fetched for one contest: metadata plus the player pool
/// in provider order
#[derive(Debug, Clone)]
pub struct RosterBundle {
    pub contest: Contest,
    pub players: Vec<Player>,
}

/// Port for the external roster provider
///
/// Implementations fetch the full candidate pool and contest metadata
/// for a contest. An unknown contest or an unreachable provider is a
/// load error; the composer is never constructed in that case.
#[async_trait]
pub trait RosterProvider: Send + Sync {
    /// Fetch the player pool and contest metadata for a contest
    async fn fetch_roster(&self, contest_id: &ContestId) -> ProviderResult<RosterBundle>;
}
