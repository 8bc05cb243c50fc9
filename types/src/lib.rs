//! Core domain types for the portfolio showcase.
//!
//! This crate contains pure domain types with no IO, no async, and minimal dependencies.
//! The catalog, the engine and the TUI all speak in these types.

// Pedantic lint configuration - these are intentional design choices
#![allow(clippy::missing_errors_doc)] // Result-returning functions are self-explanatory

mod entry;
mod link;
mod sanitize;
mod supplemental;
pub mod ui;

pub use entry::{BusinessEntry, Category, EntryId, ImageRef, LifecycleStatus};
pub use link::{ExternalUrl, UrlError};
pub use sanitize::sanitize_display_text;
pub use supplemental::{ContactInfo, Stat, SupplementalDetail, VentureProfile};

use serde::{Deserialize, Serialize};
use thiserror::Error;

// ============================================================================
// NonEmpty String Types
// ============================================================================

/// A string guaranteed to be non-empty (after trimming).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct NonEmptyString(String);

#[derive(Debug, Error)]
#[error("text must not be empty")]
pub struct EmptyStringError;

impl NonEmptyString {
    pub fn new(value: impl Into<String>) -> Result<Self, EmptyStringError> {
        let value = value.into();
        if value.trim().is_empty() {
            Err(EmptyStringError)
        } else {
            Ok(Self(value))
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for NonEmptyString {
    type Error = EmptyStringError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for NonEmptyString {
    type Error = EmptyStringError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<NonEmptyString> for String {
    fn from(value: NonEmptyString) -> Self {
        value.0
    }
}

impl std::ops::Deref for NonEmptyString {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        self.as_str()
    }
}

impl AsRef<str> for NonEmptyString {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl std::fmt::Display for NonEmptyString {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::NonEmptyString;

    #[test]
    fn rejects_blank_text() {
        assert!(NonEmptyString::new("").is_err());
        assert!(NonEmptyString::new("   \t").is_err());
    }

    #[test]
    fn keeps_original_text() {
        let text = NonEmptyString::new("  Media Web 6 ").unwrap();
        assert_eq!(text.as_str(), "  Media Web 6 ");
        assert_eq!(text.len(), 14);
    }

    #[test]
    fn deserialize_rejects_empty_string() {
        #[derive(Debug, serde::Deserialize)]
        struct Wrapper {
            #[allow(dead_code)]
            title: NonEmptyString,
        }

        let err = toml::from_str::<Wrapper>("title = \"\"").unwrap_err();
        assert!(err.to_string().contains("must not be empty"));
    }
}
