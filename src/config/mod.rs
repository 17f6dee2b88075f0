//! Configuration loading, validation and credential resolution.

mod credentials;
mod loader;
mod store;
mod types;

pub use credentials::{
    CredentialSource, CredentialStatus, SecureString, API_KEY_ENV_VAR,
};
pub use loader::ConfigError;
pub use store::ConfigStore;
pub use types::{ApiConfig, BrowseConfig, Config, ImageConfig, SessionConfig};
