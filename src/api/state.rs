use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::Mutex;

use crate::composer::TeamComposer;
use crate::domain::draft::ContestId;
use crate::domain::providers::{PriorDraftProvider, RosterProvider, TeamSaver};

/// Shared application state for the API layer
///
/// Holds the provider ports and the live composer sessions, one per
/// open contest. The session map is guarded by a single async mutex:
/// every draft mutation is serialized, matching the event-driven,
/// one-action-at-a-time model of the composer.
#[derive(Clone)]
pub struct AppState {
    pub rosters: Arc<dyn RosterProvider>,
    pub prior_drafts: Arc<dyn PriorDraftProvider>,
    pub saver: Arc<dyn TeamSaver>,
    pub sessions: Arc<Mutex<HashMap<ContestId, TeamComposer>>>,
}

impl AppState {
    /// Creates application state over a set of provider ports
    pub fn new(
        rosters: Arc<dyn RosterProvider>,
        prior_drafts: Arc<dyn PriorDraftProvider>,
        saver: Arc<dyn TeamSaver>,
    ) -> Self {
        Self {
            rosters,
            prior_drafts,
            saver,
            sessions: Arc::new(Mutex::new(HashMap::new())),
        }
    }
}
