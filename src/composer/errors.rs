use thiserror::Error;

use crate::domain::draft::DraftError;
use crate::domain::providers::ProviderError;

/// Errors that can surface from composer operations
///
/// Splits the two halves of the error taxonomy: draft validation
/// rejections (non-fatal, state unchanged) and provider failures at
/// the network boundaries.
#[derive(Debug, Error)]
pub enum ComposerError {
    #[error(transparent)]
    Draft(#[from] DraftError),

    #[error(transparent)]
    Provider(#[from] ProviderError),
}

pub type ComposerResult<T> = Result<T, ComposerError>;
