use super::value_objects::{ContestId, PlayerId};

/// Domain events emitted by the TeamDraft aggregate
///
/// Each successful mutation yields exactly one event; the API layer
/// uses them to describe what changed, and they double as an audit
/// trail of the editing session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DraftEvent {
    /// A player was appended to the selection
    PlayerAdded {
        player_id: PlayerId,
        /// Selection size after the addition
        selected: usize,
    },
    /// A player was removed from the selection
    PlayerRemoved {
        player_id: PlayerId,
        selected: usize,
        /// True when the removed player held the captain designation
        captain_cleared: bool,
        /// True when the removed player held the vice-captain designation
        vice_captain_cleared: bool,
    },
    /// The captain designation moved to a player
    CaptainAssigned { player_id: PlayerId },
    /// The vice-captain designation moved to a player
    ViceCaptainAssigned { player_id: PlayerId },
    /// The draft was accepted by the save endpoint
    Submitted { contest_id: ContestId },
}
