//! Deriving URL-safe post identifiers from titles.

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

pub const EMPTY_TITLE_STEM: &str = "post";

#[derive(Clone, Eq, PartialEq, Ord, PartialOrd, Debug, Default, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Slug(String);

impl Slug {
    /// Derives a slug from a title: lowercased, whitespace and underscores
    /// become single hyphens, everything outside `[a-z0-9-]` is dropped,
    /// hyphen runs collapse, no leading or trailing hyphen. Falls back to
    /// [`EMPTY_TITLE_STEM`] when nothing survives. Uniqueness is the store's
    /// concern, via [`Slug::with_suffix`].
    #[must_use]
    pub fn generate(title: &str) -> Self {
        let mut slug = String::with_capacity(title.len());

        for ch in title.to_lowercase().chars() {
            if ch.is_ascii_alphanumeric() {
                slug.push(ch);
            } else if (ch.is_whitespace() || ch == '_' || ch == '-')
                && !slug.is_empty()
                && !slug.ends_with('-')
            {
                slug.push('-');
            }
        }

        if slug.ends_with('-') {
            slug.pop();
        }
        if slug.is_empty() {
            slug.push_str(EMPTY_TITLE_STEM);
        }

        Self(slug)
    }

    #[must_use]
    pub fn with_suffix(&self, counter: u32) -> Self {
        Self(format!("{}-{counter}", self.0))
    }

    #[must_use]
    pub fn get(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl Display for Slug {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        Display::fmt(&self.0, f)
    }
}

impl From<String> for Slug {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for Slug {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}
