//! Domain ports and supporting types for the hexagonal boundary.

mod macros;
pub(crate) use macros::define_port_error;

mod profile_source;

#[cfg(test)]
pub use profile_source::MockProfileSource;
pub use profile_source::{ErrorKind, FixtureProfileSource, ProfileSource, ProfileSourceError};
