//! Canonical basic-profile field names.

/// Keyword that expands to [`ALL_FIELDS`] when supplied as the only field.
pub const ALL_SENTINEL: &str = "all";

/// Every basic-profile field the API documents, in request order.
///
/// The order is part of the wire format: it is copied verbatim into the
/// selector suffix when a caller asks for [`ALL_SENTINEL`].
pub const ALL_FIELDS: &[&str] = &[
    "first-name",
    "last-name",
    "maiden-name",
    "formatted-name",
    "phonetic-first-name",
    "phonetic-last-name",
    "formatted-phonetic-name",
    "headline",
    "current-share",
    "num-connections",
    "num-connections-capped",
    "summary",
    "specialties",
    "picture-url",
    "site-standard-profile-request",
    "api-standard-profile-request",
    "public-profile-url",
    "email-address",
    "industry",
    "picture-urls::(original)",
    "location",
    "positions",
    "id",
];
