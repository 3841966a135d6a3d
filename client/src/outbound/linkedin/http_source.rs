//! Reqwest-backed basic-profile source adapter.
//!
//! This adapter owns transport details only: URL construction, bearer
//! authentication, status and transport error mapping, and JSON decoding
//! into the domain profile.

use std::time::Duration;

use async_trait::async_trait;
use field_selector::FieldSelector;
use reqwest::{Client, StatusCode};
use tracing::{debug, warn};
use url::Url;

use super::dto::ProfileDto;
use crate::domain::ports::{ProfileSource, ProfileSourceError};
use crate::domain::{AccessToken, Profile};

/// Production API origin.
pub const DEFAULT_API_BASE_URL: &str = "https://api.linkedin.com";
const PEOPLE_SELF_PATH: &str = "/v1/people/~";
const FORMAT_QUERY: &str = "format=json";

/// Profile source that performs one authenticated GET per fetch.
///
/// Holds no mutable state, so one instance can serve concurrent callers.
pub struct LinkedInHttpSource {
    client: Client,
    endpoint: Url,
    token: AccessToken,
}

impl LinkedInHttpSource {
    /// Build an adapter for the production API with no request timeout.
    ///
    /// ```
    /// use profile_client::LinkedInHttpSource;
    /// use profile_client::domain::ports::ProfileSourceError;
    ///
    /// let source = LinkedInHttpSource::new("AQX-member-token")?;
    /// assert_eq!(source.endpoint().as_str(), "https://api.linkedin.com/");
    ///
    /// let rejected = LinkedInHttpSource::new("").err();
    /// assert_eq!(rejected, Some(ProfileSourceError::InvalidCredential));
    /// # Ok::<(), ProfileSourceError>(())
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`ProfileSourceError::InvalidCredential`] when `token` is
    /// empty, or [`ProfileSourceError::Transport`] when the reqwest client
    /// cannot be constructed.
    pub fn new(token: impl Into<String>) -> Result<Self, ProfileSourceError> {
        let endpoint = Url::parse(DEFAULT_API_BASE_URL).map_err(|error| {
            ProfileSourceError::transport(format!("invalid default API base URL: {error}"))
        })?;
        Self::with_options(token, endpoint, None)
    }

    /// Build an adapter against an explicit API origin.
    ///
    /// `endpoint` may carry a path prefix; the people path is appended to it.
    /// `timeout` bounds the whole request when set.
    ///
    /// # Errors
    ///
    /// Returns [`ProfileSourceError::InvalidCredential`] when `token` is
    /// empty, or [`ProfileSourceError::Transport`] when the reqwest client
    /// cannot be constructed.
    pub fn with_options(
        token: impl Into<String>,
        endpoint: Url,
        timeout: Option<Duration>,
    ) -> Result<Self, ProfileSourceError> {
        let access_token = AccessToken::new(token)?;
        let builder = timeout.map_or_else(Client::builder, |limit| {
            Client::builder().timeout(limit)
        });
        let client = builder.build().map_err(map_transport_error)?;
        Ok(Self {
            client,
            endpoint,
            token: access_token,
        })
    }

    /// API origin this adapter talks to.
    #[must_use]
    pub const fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Fully-qualified profile URL for `fields`.
    #[must_use]
    pub fn profile_url(&self, fields: &FieldSelector) -> Url {
        build_profile_url(&self.endpoint, fields)
    }
}

#[async_trait]
impl ProfileSource for LinkedInHttpSource {
    async fn fetch_basic_profile(
        &self,
        fields: &FieldSelector,
    ) -> Result<Profile, ProfileSourceError> {
        let url = self.profile_url(fields);
        debug!(url = %url, field_count = fields.fields().len(), "requesting basic profile");

        let response = self
            .client
            .get(url)
            .bearer_auth(self.token.expose())
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(map_transport_error)?;

        let status = response.status();
        let body = response.bytes().await.map_err(map_transport_error)?;
        debug!(
            status = status.as_u16(),
            bytes = body.len(),
            "received profile response"
        );
        if !status.is_success() {
            let error = map_status_error(status, body.as_ref());
            warn!(status = status.as_u16(), %error, "profile request rejected");
            return Err(error);
        }

        parse_profile(body.as_ref())
    }
}

fn build_profile_url(endpoint: &Url, fields: &FieldSelector) -> Url {
    let mut url = endpoint.clone();
    let base_path = endpoint.path().trim_end_matches('/');
    url.set_path(&format!("{base_path}{PEOPLE_SELF_PATH}{}", fields.suffix()));
    url.set_query(Some(FORMAT_QUERY));
    url
}

/// A literal `null` body decodes to an empty profile.
fn parse_profile(body: &[u8]) -> Result<Profile, ProfileSourceError> {
    let decoded: Option<ProfileDto> = serde_json::from_slice(body).map_err(|error| {
        ProfileSourceError::decode(format!("invalid profile JSON payload: {error}"))
    })?;
    Ok(decoded.unwrap_or_default().into_domain())
}

fn map_transport_error(error: reqwest::Error) -> ProfileSourceError {
    if error.is_timeout() {
        ProfileSourceError::transport(format!("request timed out: {error}"))
    } else {
        ProfileSourceError::transport(error.to_string())
    }
}

fn map_status_error(status: StatusCode, body: &[u8]) -> ProfileSourceError {
    let reason = status.canonical_reason().unwrap_or("unknown status");
    let body_preview = body_preview(body);
    let message = if body_preview.is_empty() {
        reason.to_owned()
    } else {
        format!("{reason}: {body_preview}")
    };
    ProfileSourceError::status(status.as_u16(), message)
}

fn body_preview(body: &[u8]) -> String {
    const PREVIEW_CHAR_LIMIT: usize = 160;

    let compact = String::from_utf8_lossy(body)
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ");
    let preview = compact.chars().take(PREVIEW_CHAR_LIMIT).collect::<String>();
    if compact.chars().count() > PREVIEW_CHAR_LIMIT {
        format!("{preview}...")
    } else {
        preview
    }
}
