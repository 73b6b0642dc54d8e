// Infrastructure layer module
// Contains network adapters for the upstream contest backend
// Follows Hexagonal Architecture

pub mod providers;
