//! Domain types and ports for basic-profile retrieval.
//!
//! The domain knows what a profile looks like and what a credential must
//! satisfy. It does not know how the profile travels over the wire.

mod credential;
pub mod ports;
mod profile;

pub use credential::{AccessToken, CredentialError};
pub use profile::{
    Company, Country, CurrentShare, Location, PictureUrls, Position, Positions, Profile,
    ProfileDate, ProfileRequest,
};
