// HTTP handlers for the composer API

pub mod draft;
pub mod roster;
