use thiserror::Error;

use super::value_objects::{PlayerId, TEAM_SIZE};

/// Validation rejections raised while editing or submitting a draft
///
/// Every variant is non-fatal: the draft is left unchanged and the
/// user may immediately retry with corrected input.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DraftError {
    #[error("Player not found in roster: {0}")]
    UnknownPlayer(PlayerId),

    #[error("Player already selected: {0}")]
    AlreadySelected(PlayerId),

    #[error("You can only select {TEAM_SIZE} players")]
    SelectionFull,

    #[error("Player is not in the selected team: {0}")]
    NotSelected(PlayerId),

    #[error("Player {0} is already the captain")]
    AlreadyCaptain(PlayerId),

    #[error("Player {0} is already the vice-captain")]
    AlreadyViceCaptain(PlayerId),

    #[error("Team must have exactly {TEAM_SIZE} players ({selected} selected)")]
    TeamIncomplete { selected: usize },

    #[error("Captain and vice-captain must both be set")]
    DesignationsMissing,

    #[error("A submission is already in flight")]
    SubmitInFlight,

    #[error("Team has already been submitted")]
    AlreadySubmitted,
}

pub type DraftResult<T> = Result<T, DraftError>;
