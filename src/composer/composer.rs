use tracing::{info, warn};

use super::errors::ComposerResult;
use crate::domain::draft::{
    ContestId, DraftError, DraftEvent, DraftResult, DraftStatus, PlayerId, RosterFilter, TeamDraft,
};
use crate::domain::providers::{
    PriorDraftProvider, RosterProvider, TeamSaved, TeamSaver, TeamSubmission,
};
use crate::domain::roster::{Contest, Player, Roster};

/// The team-composition engine for one contest session
///
/// Owns the loaded roster, the contest metadata and the in-progress
/// [`TeamDraft`], and mediates every user action between the two
/// network boundaries: the roster/prior-draft providers on the way in
/// and the save endpoint on the way out.
///
/// Mutations are discrete and never concurrent; the only cross-request
/// state is the in-flight submit flag, which guarantees a single
/// outstanding save request per session.
#[derive(Debug)]
pub struct TeamComposer {
    contest: Contest,
    roster: Roster,
    draft: TeamDraft,
    submit_in_flight: bool,
}

impl TeamComposer {
    /// Loads a composer session for a contest
    ///
    /// Fetches the roster first; an unknown contest or unreachable
    /// provider aborts the load and no composer is constructed. Then
    /// fetches the user's prior draft, if any, and reconstructs the
    /// selection against the fresh roster: saved identifiers no longer
    /// in the pool are dropped without error, remaining ones keep
    /// their saved order.
    pub async fn load(
        rosters: &dyn RosterProvider,
        prior_drafts: &dyn PriorDraftProvider,
        contest_id: &ContestId,
    ) -> ComposerResult<Self> {
        let bundle = rosters.fetch_roster(contest_id).await?;
        let roster = Roster::new(bundle.players);

        let draft = match prior_drafts.fetch_prior_draft(contest_id).await? {
            Some(saved) => {
                let (kept, stale): (Vec<PlayerId>, Vec<PlayerId>) = saved
                    .selected_players
                    .into_iter()
                    .partition(|id| roster.contains(id));
                if !stale.is_empty() {
                    warn!(
                        contest_id = %contest_id,
                        dropped = stale.len(),
                        "Dropping saved players no longer in roster"
                    );
                }
                info!(contest_id = %contest_id, restored = kept.len(), "Restored prior draft");
                TeamDraft::reconstruct(
                    contest_id.clone(),
                    kept,
                    saved.captain_id,
                    saved.vice_captain_id,
                )
            }
            None => TeamDraft::new(contest_id.clone()),
        };

        Ok(Self {
            contest: bundle.contest,
            roster,
            draft,
            submit_in_flight: false,
        })
    }

    /// Adds a roster player to the selection
    ///
    /// Rejects identifiers outside the loaded roster before the draft
    /// applies its own selection rules.
    pub fn add_player(&mut self, player_id: &PlayerId) -> DraftResult<DraftEvent> {
        if !self.roster.contains(player_id) {
            return Err(DraftError::UnknownPlayer(player_id.clone()));
        }
        self.draft.add_player(player_id.clone())
    }

    /// Removes a player from the selection (no-op when absent)
    pub fn remove_player(&mut self, player_id: &PlayerId) -> DraftResult<Option<DraftEvent>> {
        self.draft.remove_player(player_id)
    }

    /// Designates a selected player as captain
    pub fn set_captain(&mut self, player_id: &PlayerId) -> DraftResult<DraftEvent> {
        self.draft.set_captain(player_id.clone())
    }

    /// Designates a selected player as vice-captain
    pub fn set_vice_captain(&mut self, player_id: &PlayerId) -> DraftResult<DraftEvent> {
        self.draft.set_vice_captain(player_id.clone())
    }

    /// Projects the roster through a role filter; pure and idempotent
    pub fn filter_by_role(&self, filter: RosterFilter) -> Vec<&Player> {
        self.roster.filter_by_role(filter)
    }

    /// True when the draft satisfies every submission requirement
    pub fn is_submittable(&self) -> bool {
        self.draft.is_submittable()
    }

    /// First phase of submission: validates the draft, marks a save
    /// as in flight and yields the payload for the save endpoint
    ///
    /// Refused while another save is outstanding, so a session emits
    /// at most one request per user-initiated submit.
    pub fn begin_submit(&mut self) -> DraftResult<TeamSubmission> {
        if self.submit_in_flight {
            return Err(DraftError::SubmitInFlight);
        }
        self.draft.check_submittable()?;

        let captain_id = self
            .draft
            .captain()
            .cloned()
            .ok_or(DraftError::DesignationsMissing)?;
        let vice_captain_id = self
            .draft
            .vice_captain()
            .cloned()
            .ok_or(DraftError::DesignationsMissing)?;

        self.submit_in_flight = true;
        Ok(TeamSubmission {
            contest_id: self.draft.contest_id().clone(),
            selected_players: self.draft.selection().to_vec(),
            captain_id,
            vice_captain_id,
        })
    }

    /// Second phase of submission: records the save outcome
    ///
    /// Only meaningful on the composer that began the submit: without
    /// an outstanding save this is a no-op, so a confirmation can
    /// never reach a session that was replaced mid-flight. On
    /// acceptance the draft becomes terminal; on rejection the
    /// in-flight flag is cleared and the draft is left intact so the
    /// user can retry without re-selecting.
    pub fn finish_submit(&mut self, accepted: bool) -> Option<DraftEvent> {
        if !self.submit_in_flight {
            return None;
        }
        self.submit_in_flight = false;
        accepted.then(|| self.draft.mark_submitted())
    }

    /// One-shot submission wrapping both phases around the save call
    pub async fn submit(&mut self, saver: &dyn TeamSaver) -> ComposerResult<TeamSaved> {
        let submission = self.begin_submit()?;
        let outcome = saver.save_team(&submission).await;
        self.finish_submit(outcome.is_ok());
        Ok(outcome?)
    }

    // ===== Getters =====

    /// Returns the contest metadata
    pub fn contest(&self) -> &Contest {
        &self.contest
    }

    /// Returns the loaded player pool
    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    /// Returns the in-progress draft
    pub fn draft(&self) -> &TeamDraft {
        &self.draft
    }

    /// Returns the derived lifecycle status
    pub fn status(&self) -> DraftStatus {
        self.draft.status()
    }

    /// True while a save request is outstanding
    pub fn submit_in_flight(&self) -> bool {
        self.submit_in_flight
    }
}
