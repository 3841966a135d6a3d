//! Driven port for fetching a member's basic profile.
//!
//! The domain owns the selector and the profile shape so callers can stay
//! adapter-agnostic; the HTTP details live in `outbound::linkedin`.

use async_trait::async_trait;
use field_selector::FieldSelector;

use super::define_port_error;
use crate::domain::{CredentialError, Profile};

define_port_error! {
    /// Errors surfaced while fetching a basic profile.
    pub enum ProfileSourceError {
        /// The client holds no usable access token.
        InvalidCredential =>
            "invalid credential: access token must not be empty",
        /// The HTTP round trip failed before a full response was read.
        Transport {
            /// Transport failure description.
            message: String
        } => "profile transport failed: {message}",
        /// The provider answered with a non-success status.
        Status {
            /// HTTP status code.
            status: u16,
            /// Status line and a preview of the response body.
            message: String
        } => "profile request rejected with status {status}: {message}",
        /// The response body was not a decodable profile document.
        Decode {
            /// Decoder failure description.
            message: String
        } => "profile response decode failed: {message}",
    }
}

/// Coarse error classification for callers that only need to branch on
/// "fix the credential" versus "the round trip went wrong".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The credential is missing or empty. Retrying will not help.
    InvalidCredential,
    /// Transport, status, or decode failure.
    TransportOrDecode,
}

impl ProfileSourceError {
    /// Classify this error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidCredential => ErrorKind::InvalidCredential,
            Self::Transport { .. } | Self::Status { .. } | Self::Decode { .. } => {
                ErrorKind::TransportOrDecode
            }
        }
    }
}

impl From<CredentialError> for ProfileSourceError {
    fn from(value: CredentialError) -> Self {
        match value {
            CredentialError::Empty => Self::InvalidCredential,
        }
    }
}

/// Port for reading the authenticated member's basic profile.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProfileSource: Send + Sync {
    /// Fetch the profile restricted to `fields`.
    ///
    /// Implementations issue exactly one request per call and never retry.
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// use field_selector::FieldSelector;
    /// use profile_client::domain::ports::{FixtureProfileSource, ProfileSource};
    ///
    /// let source = FixtureProfileSource;
    /// let profile = source.fetch_basic_profile(&FieldSelector::all()).await?;
    /// assert!(profile.id.is_none());
    /// # Ok::<(), profile_client::domain::ports::ProfileSourceError>(())
    /// ```
    async fn fetch_basic_profile(
        &self,
        fields: &FieldSelector,
    ) -> Result<Profile, ProfileSourceError>;
}

/// Fixture implementation returning an empty profile.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixtureProfileSource;

#[async_trait]
impl ProfileSource for FixtureProfileSource {
    async fn fetch_basic_profile(
        &self,
        _fields: &FieldSelector,
    ) -> Result<Profile, ProfileSourceError> {
        Ok(Profile::default())
    }
}
