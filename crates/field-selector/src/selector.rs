//! Resolution and rendering of profile field selectors.

use std::fmt;

use crate::canonical::{ALL_FIELDS, ALL_SENTINEL};

/// Ordered list of profile fields to request.
///
/// ## Invariants
/// - An empty selector renders no suffix, so the server falls back to its
///   minimal default profile.
/// - A selector built from the single field [`ALL_SENTINEL`] holds
///   [`ALL_FIELDS`] instead of the keyword.
/// - Field names are kept verbatim and in caller order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldSelector {
    fields: Vec<String>,
}

impl FieldSelector {
    /// Selector that requests the server's default profile.
    #[must_use]
    pub const fn new() -> Self {
        Self { fields: Vec::new() }
    }

    /// Selector holding every canonical field.
    #[must_use]
    pub fn all() -> Self {
        Self {
            fields: ALL_FIELDS.iter().map(|field| (*field).to_owned()).collect(),
        }
    }

    /// Resolve caller-supplied field names into a selector.
    ///
    /// Only a lone `"all"` expands to the canonical list; `"all"` mixed with
    /// other names is passed through untouched.
    ///
    /// ```
    /// use field_selector::{ALL_FIELDS, FieldSelector};
    ///
    /// let selector = FieldSelector::from_fields(["all"]);
    /// assert_eq!(selector.fields().len(), ALL_FIELDS.len());
    ///
    /// let mixed = FieldSelector::from_fields(["all", "id"]);
    /// assert_eq!(mixed.suffix(), ":(all,id)");
    /// ```
    #[must_use]
    pub fn from_fields<I, S>(fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let requested: Vec<String> = fields.into_iter().map(Into::into).collect();
        match requested.as_slice() {
            [only] if only == ALL_SENTINEL => Self::all(),
            _ => Self { fields: requested },
        }
    }

    /// Resolved field names in request order.
    #[must_use]
    pub fn fields(&self) -> &[String] {
        &self.fields
    }

    /// Whether the selector asks for the server's default profile.
    #[must_use]
    pub fn is_default(&self) -> bool {
        self.fields.is_empty()
    }

    /// Path suffix inserted directly after `~` in the profile URL.
    ///
    /// Returns an empty string for the default selector, otherwise
    /// `:(name1,name2,...)` with no spaces.
    #[must_use]
    pub fn suffix(&self) -> String {
        if self.is_default() {
            String::new()
        } else {
            format!(":({})", self.fields.join(","))
        }
    }
}

impl<S: Into<String>> FromIterator<S> for FieldSelector {
    fn from_iter<T: IntoIterator<Item = S>>(iter: T) -> Self {
        Self::from_fields(iter)
    }
}

impl fmt::Display for FieldSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.suffix())
    }
}
