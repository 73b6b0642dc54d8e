use thiserror::Error;

use crate::domain::draft::ContestId;

/// Failures at the network boundaries
///
/// `ContestNotFound` and `Unreachable` are load errors: terminal for
/// the session. `Rejected` is a save-endpoint refusal whose message is
/// surfaced to the user verbatim; the draft survives for a retry.
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("Contest not found: {0}")]
    ContestNotFound(ContestId),

    #[error("Upstream unreachable: {0}")]
    Unreachable(String),

    #[error("Malformed upstream response: {0}")]
    InvalidResponse(String),

    #[error("{message}")]
    Rejected { message: String },
}

pub type ProviderResult<T> = Result<T, ProviderError>;
