//! Bearer credential held by profile clients.
//!
//! Token acquisition happens elsewhere; this module only checks that the
//! caller handed over something usable and keeps it out of logs.

use std::fmt;

use zeroize::Zeroizing;

/// Domain error returned when an access token is unusable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CredentialError {
    /// The token was the empty string.
    Empty,
}

impl fmt::Display for CredentialError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "access token must not be empty"),
        }
    }
}

impl std::error::Error for CredentialError {}

/// Opaque bearer token presented in the `Authorization` header.
///
/// ## Invariants
/// - The token is non-empty.
/// - The token is stored verbatim; surrounding whitespace is not trimmed
///   because the provider treats the value as opaque.
/// - The backing buffer is wiped on drop and `Debug` never prints it.
///
/// # Examples
/// ```
/// use profile_client::domain::AccessToken;
///
/// let token = AccessToken::new("AQX-token").unwrap();
/// assert_eq!(token.expose(), "AQX-token");
/// assert!(AccessToken::new("").is_err());
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct AccessToken(Zeroizing<String>);

impl AccessToken {
    /// Validate and wrap a raw token.
    ///
    /// # Errors
    ///
    /// Returns [`CredentialError::Empty`] when `token` is empty.
    pub fn new(token: impl Into<String>) -> Result<Self, CredentialError> {
        let raw = token.into();
        if raw.is_empty() {
            return Err(CredentialError::Empty);
        }
        Ok(Self(Zeroizing::new(raw)))
    }

    /// Raw token for building the `Authorization` header.
    #[must_use]
    pub fn expose(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("AccessToken").field(&"<redacted>").finish()
    }
}
