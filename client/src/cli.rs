//! CLI support for the `fetch-profile` binary.
//!
//! The binary delegates to these functions so argument handling and output
//! rendering can be exercised in tests without spawning a process or
//! touching the network.

use clap::Parser;
use field_selector::FieldSelector;
use thiserror::Error;

use crate::config::{ProfileClientSettings, SettingsError};
use crate::domain::ports::{ProfileSource, ProfileSourceError};

/// `fetch-profile` command arguments.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "fetch-profile",
    about = "Fetch the authenticated member's basic profile and print it as JSON",
    version
)]
pub struct CliArgs {
    /// Profile fields to request. Pass `all` for every basic-profile field,
    /// or nothing for the server's default profile.
    #[arg(value_name = "field")]
    pub fields: Vec<String>,
    /// Bearer token. Falls back to `PROFILE_CLIENT_ACCESS_TOKEN` when omitted.
    #[arg(long = "access-token", value_name = "token")]
    pub access_token: Option<String>,
    /// Indent the JSON output. Also enabled by `PROFILE_CLIENT_PRETTY`.
    #[arg(long)]
    pub pretty: bool,
}

impl CliArgs {
    /// Field selector resolved from the positional arguments.
    #[must_use]
    pub fn selector(&self) -> FieldSelector {
        FieldSelector::from_fields(self.fields.iter().cloned())
    }

    /// Pick the token from the command line, falling back to settings.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::MissingAccessToken`] when neither source
    /// supplies a token.
    pub fn resolve_access_token<'a>(
        &'a self,
        settings: &'a ProfileClientSettings,
    ) -> Result<&'a str, SettingsError> {
        match self.access_token.as_deref() {
            Some(token) => Ok(token),
            None => settings.access_token(),
        }
    }

    /// Whether output should be indented, from the flag or the settings.
    #[must_use]
    pub const fn pretty_output(&self, settings: &ProfileClientSettings) -> bool {
        self.pretty || settings.pretty
    }
}

/// Errors surfaced by the CLI flow.
#[derive(Debug, Error)]
pub enum CliError {
    /// Settings could not be interpreted.
    #[error("configuration error: {0}")]
    Settings(#[from] SettingsError),
    /// The profile could not be fetched.
    #[error(transparent)]
    Source(#[from] ProfileSourceError),
    /// The profile could not be rendered as JSON.
    #[error("failed to render profile: {0}")]
    Render(#[from] serde_json::Error),
}

/// Fetch the profile for `args` and render it as JSON, indented when
/// `pretty` is set.
///
/// # Errors
///
/// Returns [`CliError::Source`] when the fetch fails and
/// [`CliError::Render`] when serialisation fails.
pub async fn fetch_and_render(
    source: &dyn ProfileSource,
    args: &CliArgs,
    pretty: bool,
) -> Result<String, CliError> {
    let profile = source.fetch_basic_profile(&args.selector()).await?;
    let rendered = if pretty {
        serde_json::to_string_pretty(&profile)?
    } else {
        serde_json::to_string(&profile)?
    };
    Ok(rendered)
}
