// Provider ports (the two network boundaries of the composer)
// Implementations live in the infrastructure layer

pub mod draft_provider;
pub mod errors;
pub mod roster_provider;
pub mod team_saver;

pub use draft_provider::{PriorDraftProvider, SavedDraft};
pub use errors::{ProviderError, ProviderResult};
pub use roster_provider::{RosterBundle, RosterProvider};
pub use team_saver::{TeamSaved, TeamSaver, TeamSubmission};
