//! Credential resolution for Notebase clients.
//!
//! The core client only ever receives an explicit token; reading the
//! process environment is the caller's job and happens here, once, at the
//! edge (a CLI or application wiring layer), never inside the client or
//! the logger facade.

use crate::auth::AuthProvider;
use crate::error::{NotebaseLinkError, Result};

/// Environment variable the caller-layer helper reads the API token from.
pub const TOKEN_ENV_VAR: &str = "NOTEBASE_TOKEN";

/// A resolved API token.
///
/// # Examples
///
/// ```rust,no_run
/// use notebase_link::{Credentials, NotebaseLinkClient};
///
/// # fn example() -> notebase_link::Result<()> {
/// // At the application edge: resolve the token from the environment once,
/// // then hand it to the client builder explicitly.
/// let credentials = Credentials::from_env()?;
/// let client = NotebaseLinkClient::builder()
///     .base_url("https://api.notebase.example")
///     .auth(credentials.into_auth())
///     .build()?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    token: String,
}

impl Credentials {
    /// Wrap an explicitly supplied token.
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
        }
    }

    /// Read the token from the `NOTEBASE_TOKEN` environment variable.
    ///
    /// Fails with [`NotebaseLinkError::ConfigurationError`] when the
    /// variable is unset or blank.
    pub fn from_env() -> Result<Self> {
        match std::env::var(TOKEN_ENV_VAR) {
            Ok(token) if !token.trim().is_empty() => Ok(Self::new(token)),
            _ => Err(NotebaseLinkError::ConfigurationError(format!(
                "environment variable '{}' is not set; pass a token explicitly or export it",
                TOKEN_ENV_VAR
            ))),
        }
    }

    /// The raw token.
    pub fn token(&self) -> &str {
        &self.token
    }

    /// Convert into an [`AuthProvider`] for the client builder.
    pub fn into_auth(self) -> AuthProvider {
        AuthProvider::bearer(self.token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_env_round_trip() {
        // Single test covers both branches so the shared variable is never
        // mutated from two tests running in parallel.
        std::env::remove_var(TOKEN_ENV_VAR);
        assert!(Credentials::from_env().is_err());

        std::env::set_var(TOKEN_ENV_VAR, "secret_env_token");
        let credentials = Credentials::from_env().expect("token should resolve");
        assert_eq!(credentials.token(), "secret_env_token");

        std::env::remove_var(TOKEN_ENV_VAR);
    }

    #[test]
    fn test_explicit_token_accessors() {
        let credentials = Credentials::new("tok");
        assert_eq!(credentials.token(), "tok");
    }
}
