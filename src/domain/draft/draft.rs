use super::errors::{DraftError, DraftResult};
use super::events::DraftEvent;
use super::value_objects::{ContestId, DraftStatus, PlayerId, TEAM_SIZE};

/// TeamDraft aggregate root
///
/// The in-progress fantasy-team selection for one contest: an ordered
/// selection of players plus the captain and vice-captain designations.
/// Enforces all composition rules after every mutation.
///
/// # Invariants
/// - The selection contains no duplicate player identifiers
/// - The selection never exceeds 11 players
/// - Captain and vice-captain, when set, are members of the selection
/// - Captain and vice-captain never reference the same player
/// - A submitted draft accepts no further mutations
///
/// # Example
/// ```
/// use fantasyiq_api::domain::draft::{ContestId, PlayerId, TeamDraft};
///
/// let mut draft = TeamDraft::new(ContestId::new("match-1").expect("valid id"));
/// let p1 = PlayerId::new("p1").expect("valid id");
/// draft.add_player(p1.clone()).expect("first add succeeds");
/// assert!(draft.add_player(p1).is_err());
/// ```
#[derive(Debug, Clone)]
pub struct TeamDraft {
    contest_id: ContestId,
    selection: Vec<PlayerId>,
    captain: Option<PlayerId>,
    vice_captain: Option<PlayerId>,
    submitted: bool,
}

impl TeamDraft {
    /// Creates an empty draft for a contest
    pub fn new(contest_id: ContestId) -> Self {
        Self {
            contest_id,
            selection: Vec::new(),
            captain: None,
            vice_captain: None,
            submitted: false,
        }
    }

    /// Rebuilds a draft from previously saved identifiers
    ///
    /// The caller resolves saved identifiers against the live roster
    /// first; anything stale is dropped before this point. Duplicates
    /// are ignored, the selection is capped at 11 preserving the saved
    /// order, and a designation is honored only if its player made it
    /// into the selection. A saved vice-captain that collides with the
    /// captain is dropped rather than violating the exclusion rule.
    pub fn reconstruct(
        contest_id: ContestId,
        players: impl IntoIterator<Item = PlayerId>,
        captain: Option<PlayerId>,
        vice_captain: Option<PlayerId>,
    ) -> Self {
        let mut selection: Vec<PlayerId> = Vec::new();
        for id in players {
            if selection.len() >= TEAM_SIZE {
                break;
            }
            if !selection.contains(&id) {
                selection.push(id);
            }
        }

        let captain = captain.filter(|c| selection.contains(c));
        let vice_captain = vice_captain
            .filter(|v| selection.contains(v))
            .filter(|v| captain.as_ref() != Some(v));

        Self {
            contest_id,
            selection,
            captain,
            vice_captain,
            submitted: false,
        }
    }

    /// Appends a player to the selection
    ///
    /// # Business Rules
    /// - Rejected when the player is already selected
    /// - Rejected when the selection already holds 11 players
    /// - Insertion order is preserved for display
    pub fn add_player(&mut self, player_id: PlayerId) -> DraftResult<DraftEvent> {
        self.ensure_editable()?;

        if self.selection.contains(&player_id) {
            return Err(DraftError::AlreadySelected(player_id));
        }
        if self.selection.len() >= TEAM_SIZE {
            return Err(DraftError::SelectionFull);
        }

        self.selection.push(player_id.clone());
        Ok(DraftEvent::PlayerAdded {
            player_id,
            selected: self.selection.len(),
        })
    }

    /// Removes a player from the selection
    ///
    /// A no-op when the player is not selected. Removing the captain
    /// or vice-captain clears that designation, and only that one.
    pub fn remove_player(&mut self, player_id: &PlayerId) -> DraftResult<Option<DraftEvent>> {
        self.ensure_editable()?;

        let Some(index) = self.selection.iter().position(|p| p == player_id) else {
            return Ok(None);
        };
        self.selection.remove(index);

        let captain_cleared = self.captain.as_ref() == Some(player_id);
        if captain_cleared {
            self.captain = None;
        }
        let vice_captain_cleared = self.vice_captain.as_ref() == Some(player_id);
        if vice_captain_cleared {
            self.vice_captain = None;
        }

        Ok(Some(DraftEvent::PlayerRemoved {
            player_id: player_id.clone(),
            selected: self.selection.len(),
            captain_cleared,
            vice_captain_cleared,
        }))
    }

    /// Designates a selected player as captain
    ///
    /// Replaces any previous captain. Refused when the player already
    /// holds the vice-captain designation.
    pub fn set_captain(&mut self, player_id: PlayerId) -> DraftResult<DraftEvent> {
        self.ensure_editable()?;

        if !self.selection.contains(&player_id) {
            return Err(DraftError::NotSelected(player_id));
        }
        if self.vice_captain.as_ref() == Some(&player_id) {
            return Err(DraftError::AlreadyViceCaptain(player_id));
        }

        self.captain = Some(player_id.clone());
        Ok(DraftEvent::CaptainAssigned { player_id })
    }

    /// Designates a selected player as vice-captain
    ///
    /// Replaces any previous vice-captain. Refused when the player
    /// already holds the captain designation.
    pub fn set_vice_captain(&mut self, player_id: PlayerId) -> DraftResult<DraftEvent> {
        self.ensure_editable()?;

        if !self.selection.contains(&player_id) {
            return Err(DraftError::NotSelected(player_id));
        }
        if self.captain.as_ref() == Some(&player_id) {
            return Err(DraftError::AlreadyCaptain(player_id));
        }

        self.vice_captain = Some(player_id.clone());
        Ok(DraftEvent::ViceCaptainAssigned { player_id })
    }

    /// True when the draft may be submitted: exactly 11 players,
    /// captain and vice-captain both set and distinct
    pub fn is_submittable(&self) -> bool {
        self.selection.len() == TEAM_SIZE
            && self.captain.is_some()
            && self.vice_captain.is_some()
            && self.captain != self.vice_captain
            && !self.submitted
    }

    /// Like [`is_submittable`](Self::is_submittable), but reports the
    /// first unmet requirement
    pub fn check_submittable(&self) -> DraftResult<()> {
        if self.submitted {
            return Err(DraftError::AlreadySubmitted);
        }
        if self.selection.len() != TEAM_SIZE {
            return Err(DraftError::TeamIncomplete {
                selected: self.selection.len(),
            });
        }
        if self.captain.is_none() || self.vice_captain.is_none() {
            return Err(DraftError::DesignationsMissing);
        }
        Ok(())
    }

    /// Marks the draft as accepted by the save endpoint (terminal)
    pub(crate) fn mark_submitted(&mut self) -> DraftEvent {
        self.submitted = true;
        DraftEvent::Submitted {
            contest_id: self.contest_id.clone(),
        }
    }

    fn ensure_editable(&self) -> DraftResult<()> {
        if self.submitted {
            return Err(DraftError::AlreadySubmitted);
        }
        Ok(())
    }

    // ===== Getters =====

    /// Returns the contest this draft belongs to
    pub fn contest_id(&self) -> &ContestId {
        &self.contest_id
    }

    /// Returns the selected players in insertion order
    pub fn selection(&self) -> &[PlayerId] {
        &self.selection
    }

    /// Returns the captain if designated
    pub fn captain(&self) -> Option<&PlayerId> {
        self.captain.as_ref()
    }

    /// Returns the vice-captain if designated
    pub fn vice_captain(&self) -> Option<&PlayerId> {
        self.vice_captain.as_ref()
    }

    /// Returns the derived lifecycle status
    pub fn status(&self) -> DraftStatus {
        DraftStatus::derive(self.selection.len(), self.submitted)
    }

    /// True once the save endpoint has accepted the draft
    pub fn is_submitted(&self) -> bool {
        self.submitted
    }
}
