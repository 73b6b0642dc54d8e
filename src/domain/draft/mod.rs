// Draft domain module
// Contains the draft aggregate root, value objects, events and errors

#![allow(clippy::module_inception)]

pub mod draft;
pub mod errors;
pub mod events;
pub mod value_objects;

// Re-export main types for convenience
pub use draft::TeamDraft;
pub use errors::{DraftError, DraftResult};
pub use events::DraftEvent;
pub use value_objects::{ContestId, DraftStatus, PlayerId, Role, RosterFilter, Sport, TEAM_SIZE};
