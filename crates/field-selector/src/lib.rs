//! Field-selector primitives for the basic-profile API.
//!
//! The profile API lets callers request a subset of a resource's fields by
//! appending a parenthesised, comma-separated list to the resource path
//! (`/v1/people/~:(first-name,last-name)`). This crate owns the canonical
//! field list and the rules for turning caller input into that suffix. It
//! has no transport or serialisation dependencies so the rules can be
//! tested and reused on their own.
//!
//! # Example
//!
//! ```
//! use field_selector::FieldSelector;
//!
//! let selector = FieldSelector::from_fields(["first-name", "last-name"]);
//! assert_eq!(selector.suffix(), ":(first-name,last-name)");
//!
//! let all = FieldSelector::from_fields(["all"]);
//! assert_eq!(all, FieldSelector::all());
//!
//! assert_eq!(FieldSelector::default().suffix(), "");
//! ```

mod canonical;
mod selector;

pub use canonical::{ALL_FIELDS, ALL_SENTINEL};
pub use selector::FieldSelector;
