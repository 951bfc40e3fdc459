//! Authentication for the Notebase API.
//!
//! The service accepts a single bearer token per integration; the provider
//! attaches the `Authorization: Bearer <token>` header to outgoing requests.

/// Bearer-token credentials for the Notebase server.
///
/// # Examples
///
/// ```rust
/// use notebase_link::AuthProvider;
///
/// let auth = AuthProvider::bearer("secret_abc123");
/// ```
#[derive(Debug, Clone)]
pub struct AuthProvider {
    token: String,
}

impl AuthProvider {
    /// Create bearer-token authentication.
    pub fn bearer(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
        }
    }

    /// Attach the `Authorization: Bearer <token>` header to an HTTP
    /// request builder.
    pub fn apply_to_request(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        request.bearer_auth(&self.token)
    }
}
