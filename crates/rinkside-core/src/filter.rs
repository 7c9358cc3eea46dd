//! Title allow-list for schedule entries.
//!
//! Only events whose title contains one of the configured keywords are shown.
//! Matching is a case-insensitive substring test.

use serde::{Deserialize, Serialize};

/// Keywords used when none are configured.
pub const DEFAULT_KEYWORDS: &[&str] = &["public skate", "public skating", "public skates"];

/// A case-insensitive substring allow-list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct KeywordFilter {
    keywords: Vec<String>,
}

impl From<Vec<String>> for KeywordFilter {
    fn from(keywords: Vec<String>) -> Self {
        Self::new(keywords)
    }
}

impl From<KeywordFilter> for Vec<String> {
    fn from(filter: KeywordFilter) -> Self {
        filter.keywords
    }
}

impl Default for KeywordFilter {
    fn default() -> Self {
        Self::new(DEFAULT_KEYWORDS.iter().copied())
    }
}

impl KeywordFilter {
    /// Creates a filter from `keywords`.
    ///
    /// Keywords are trimmed and lowercased; blank ones are discarded.
    pub fn new<I, S>(keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let keywords = keywords
            .into_iter()
            .map(|k| k.as_ref().trim().to_lowercase())
            .filter(|k| !k.is_empty())
            .collect();
        Self { keywords }
    }

    /// Returns the normalized keywords.
    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }

    /// Returns `true` if `summary` contains any keyword.
    ///
    /// A missing or blank summary never matches, and neither does anything
    /// when the list is empty.
    pub fn matches(&self, summary: Option<&str>) -> bool {
        let summary = summary.unwrap_or_default().trim().to_lowercase();
        if summary.is_empty() {
            return false;
        }
        self.keywords.iter().any(|k| summary.contains(k.as_str()))
    }
}
