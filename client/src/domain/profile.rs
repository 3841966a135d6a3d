//! Basic member profile records.
//!
//! Every field is optional: the API only returns what the field selector
//! asked for (and what the member chose to share), so `None` means "not in
//! the response" while `Some(String::new())` means "present but empty".
//! The records serialise with the same lower camel case keys the API uses,
//! skipping absent fields.

use serde::Serialize;

/// A member's basic profile.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    /// Provider-scoped member identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Given name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    /// Family name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    /// Maiden name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maiden_name: Option<String>,
    /// Name formatted for the member's locale.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub formatted_name: Option<String>,
    /// Phonetic spelling of the given name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phonetic_first_name: Option<String>,
    /// Phonetic spelling of the family name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phonetic_last_name: Option<String>,
    /// Phonetic name formatted for the member's locale.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub formatted_phonetic_name: Option<String>,
    /// Member headline.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub headline: Option<String>,
    /// Industry the member works in.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub industry: Option<String>,
    /// Number of first-degree connections, capped by the provider.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub num_connections: Option<u32>,
    /// Whether `num_connections` hit the provider's cap.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub num_connections_capped: Option<bool>,
    /// Free-text profile summary.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    /// Free-text specialties.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub specialties: Option<String>,
    /// Work positions.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub positions: Option<Positions>,
    /// URL of the member's cropped profile picture.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub picture_url: Option<String>,
    /// URLs of the member's original profile pictures.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub picture_urls: Option<PictureUrls>,
    /// Public profile URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub public_profile_url: Option<String>,
    /// Primary email address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email_address: Option<String>,
    /// Member's general location.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<Location>,
    /// Link to the member's profile on the provider's website.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub site_standard_profile_request: Option<ProfileRequest>,
    /// Link to the member's profile through the API.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_standard_profile_request: Option<ProfileRequest>,
    /// Most recent share posted by the member.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_share: Option<CurrentShare>,
}

/// Collection of original-size picture URLs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PictureUrls {
    /// Total count reported by the provider.
    pub total: Option<u32>,
    /// Picture URLs in provider order.
    pub urls: Vec<String>,
}

/// Collection of work positions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Positions {
    /// Total count reported by the provider.
    pub total: Option<u32>,
    /// Positions in provider order.
    pub values: Vec<Position>,
}

/// One work position.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Position {
    /// Provider identifier for the position.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    /// Whether the member still holds the position.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_current: Option<bool>,
    /// Job title.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Free-text description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    /// Where the position is based.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<Location>,
    /// Month and year the position started.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<ProfileDate>,
    /// Month and year the position ended.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<ProfileDate>,
    /// Employer.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<Company>,
}

/// Employer attached to a position.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Company {
    /// Provider identifier for the company.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    /// Industry the company operates in.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub industry: Option<String>,
    /// Company name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Head-count band, e.g. `1001-5000 employees`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<String>,
    /// Company type, e.g. `Public Company`.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub company_type: Option<String>,
}

/// Named place with an optional country.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Location {
    /// Human-readable place name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Country the place is in.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<Country>,
}

/// Country reference.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Country {
    /// Country name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Lower-case ISO 3166-1 alpha-2 code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
}

/// Month/year pair used for position dates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ProfileDate {
    /// Month of year, `1..=12`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub month: Option<u32>,
    /// Calendar year.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,
}

/// Link to a profile resource.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ProfileRequest {
    /// Target URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

/// The member's latest share.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CurrentShare {
    /// Share identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Milliseconds since the Unix epoch.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<i64>,
    /// Comment text attached to the share.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

impl Profile {
    /// Positions as a slice, empty when the response carried none.
    #[must_use]
    pub fn position_values(&self) -> &[Position] {
        match &self.positions {
            Some(positions) => positions.values.as_slice(),
            None => &[],
        }
    }

    /// Positions flagged as current.
    pub fn current_positions(&self) -> impl Iterator<Item = &Position> {
        self.position_values()
            .iter()
            .filter(|position| position.is_current == Some(true))
    }
}
