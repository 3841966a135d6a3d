//! Bearer-token client for a member's basic profile.
//!
//! The crate follows a small hexagonal layout: `domain` holds the profile
//! records, the credential, and the [`domain::ports::ProfileSource`] port;
//! `outbound` holds the reqwest adapter for the people API; `config` and
//! `cli` wire both into the `fetch-profile` binary.

pub mod cli;
pub mod config;
pub mod domain;
pub mod outbound;

pub use field_selector::{ALL_FIELDS, FieldSelector};
pub use outbound::linkedin::LinkedInHttpSource;
