// Team composition service
//
// The application layer between the provider ports and the API
// adapter: one composer per open contest session.

#![allow(clippy::module_inception)]

pub mod composer;
pub mod errors;

// Re-export main types
pub use composer::TeamComposer;
pub use errors::{ComposerError, ComposerResult};
