//! Credential management for CoinMarketCap API authentication.

use secrecy::{ExposeSecret, SecretString};

/// Default environment variable holding the API key.
pub const API_KEY_ENV_VAR: &str = "COINMARKETCAP_API_KEY";

/// API credentials: a single key sent with every request.
#[derive(Clone)]
pub struct Credentials {
    api_key: SecretString,
}

impl Credentials {
    /// Create new credentials from an API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: SecretString::from(api_key.into()),
        }
    }

    /// Get the API key for building the auth header.
    ///
    /// This method exposes the secret - use carefully.
    pub fn expose_api_key(&self) -> &str {
        self.api_key.expose_secret()
    }

    /// Whether the key is empty or only whitespace.
    pub fn is_blank(&self) -> bool {
        self.api_key.expose_secret().trim().is_empty()
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("api_key", &"[REDACTED]")
            .finish()
    }
}

/// Trait for providing API credentials.
///
/// Implement this trait to customize how credentials are retrieved,
/// for example from a secrets manager.
pub trait CredentialsProvider: Send + Sync {
    /// Get the credentials.
    fn get_credentials(&self) -> &Credentials;
}

/// Static credentials provider that holds credentials directly.
#[derive(Clone)]
pub struct StaticCredentials {
    credentials: Credentials,
}

impl StaticCredentials {
    /// Create a new static credentials provider.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            credentials: Credentials::new(api_key),
        }
    }
}

impl CredentialsProvider for StaticCredentials {
    fn get_credentials(&self) -> &Credentials {
        &self.credentials
    }
}

/// Credentials provider that reads from an environment variable.
///
/// By default, reads from `COINMARKETCAP_API_KEY`.
pub struct EnvCredentials {
    credentials: Credentials,
}

impl EnvCredentials {
    /// Try to create credentials from the default environment variable.
    ///
    /// Returns `None` if the variable is not set.
    pub fn try_from_env() -> Option<Self> {
        Self::try_from_env_var(API_KEY_ENV_VAR)
    }

    /// Try to create credentials from a custom environment variable name.
    ///
    /// Returns `None` if the variable is not set.
    pub fn try_from_env_var(key_var: &str) -> Option<Self> {
        let api_key = std::env::var(key_var).ok()?;

        Some(Self {
            credentials: Credentials::new(api_key),
        })
    }
}

impl CredentialsProvider for EnvCredentials {
    fn get_credentials(&self) -> &Credentials {
        &self.credentials
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn test_credentials_debug_redacted() {
        let creds = Credentials::new("super_secret_key");
        let debug_str = format!("{:?}", creds);
        assert!(!debug_str.contains("super_secret_key"));
        assert!(debug_str.contains("[REDACTED]"));
    }

    #[test]
    fn test_static_credentials() {
        let provider = StaticCredentials::new("key");
        let creds = provider.get_credentials();
        assert_eq!(creds.expose_api_key(), "key");
        assert!(!creds.is_blank());
    }

    #[test]
    fn test_static_credentials_as_shared_provider() {
        let provider: Arc<dyn CredentialsProvider> = Arc::new(StaticCredentials::new("key"));
        assert_eq!(provider.get_credentials().expose_api_key(), "key");
    }

    #[test]
    fn test_blank_credentials() {
        assert!(Credentials::new("").is_blank());
        assert!(Credentials::new("   ").is_blank());
    }

    #[test]
    fn test_env_credentials_missing_var() {
        assert!(EnvCredentials::try_from_env_var("COINMARKETCAP_TEST_UNSET_VARIABLE").is_none());
    }
}
