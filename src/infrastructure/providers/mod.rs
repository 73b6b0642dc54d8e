// Provider implementations (network adapters)
// Adapters that implement the domain provider ports

pub mod legacy_api;

pub use legacy_api::LegacyApiClient;
