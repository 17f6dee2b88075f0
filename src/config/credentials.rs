//! Credential resolution from configuration.
//!
//! The API key is looked up in the config file, then the `TMDB_API_KEY`
//! environment variable, then the value baked in at build time.

use super::types::ApiConfig;

/// Environment variable consulted at runtime and at build time.
pub const API_KEY_ENV_VAR: &str = "TMDB_API_KEY";

/// Key captured by `option_env!` when the crate was compiled.
const BUILD_TIME_API_KEY: Option<&str> = option_env!("TMDB_API_KEY");

/// Wrapper for sensitive strings that prevents accidental logging.
///
/// The inner value is never exposed via Debug or Display traits.
/// Use `expose()` to access the actual value when needed for API calls.
#[derive(Clone, PartialEq, Eq)]
pub struct SecureString(String);

impl SecureString {
    /// Create a new secure string.
    pub fn new(value: String) -> Self {
        Self(value)
    }

    /// Expose the inner value.
    ///
    /// Use sparingly and only when actually sending to APIs.
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for SecureString {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SecureString(••••••••)")
    }
}

impl std::fmt::Display for SecureString {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "••••••••")
    }
}

/// Where a resolved key came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CredentialSource {
    ConfigFile,
    Environment,
    BuildTime,
}

/// Status of credential resolution.
#[derive(Debug, Clone)]
pub enum CredentialStatus {
    /// API key resolved successfully.
    Configured {
        key: SecureString,
        source: CredentialSource,
    },
    /// API key is missing or empty everywhere.
    Unconfigured,
}

impl CredentialStatus {
    /// The key, if one was found.
    pub fn into_key(self) -> Option<SecureString> {
        match self {
            CredentialStatus::Configured { key, .. } => Some(key),
            CredentialStatus::Unconfigured => None,
        }
    }
}

impl ApiConfig {
    /// Resolve the API key using the process environment.
    ///
    /// Called on demand and not cached, so a key exported after startup
    /// is picked up by the next client built.
    pub fn resolve_credential(&self) -> CredentialStatus {
        let env_value = std::env::var(API_KEY_ENV_VAR).ok();
        self.resolve_credential_with(env_value.as_deref(), BUILD_TIME_API_KEY)
    }

    /// Resolution with explicit runtime and build-time values.
    pub fn resolve_credential_with(
        &self,
        env_value: Option<&str>,
        build_value: Option<&str>,
    ) -> CredentialStatus {
        let candidates = [
            (self.api_key.as_deref(), CredentialSource::ConfigFile),
            (env_value, CredentialSource::Environment),
            (build_value, CredentialSource::BuildTime),
        ];

        for (value, source) in candidates {
            if let Some(key) = value.map(str::trim).filter(|k| !k.is_empty()) {
                return CredentialStatus::Configured {
                    key: SecureString::new(key.to_string()),
                    source,
                };
            }
        }

        CredentialStatus::Unconfigured
    }
}
