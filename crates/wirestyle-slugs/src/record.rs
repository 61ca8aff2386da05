//! Slug records.

use std::str::FromStr;
use wirestyle_types::SlugError;

use crate::{check_packaging_slug, check_slug, check_wild_slug};

/// A slug attached to a content item.
///
/// Either a single general slug (`breaking-news-1`) or a packaging slug
/// followed by a wild slug (`FERRARI-RESULTS/` + `PROSPECTUS`). The text
/// is stored as given; validity is computed on demand.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Slug {
    /// Full slug text.
    text: String,
    /// Byte offset where the wild slug starts, for packaged slugs.
    wild_start: Option<usize>,
}

impl Slug {
    /// Creates a general slug without validating it.
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            wild_start: None,
        }
    }

    /// Creates a packaged slug without validating it.
    #[must_use]
    pub fn packaged(packaging_slug: &str, wild_slug: &str) -> Self {
        Self {
            text: format!("{packaging_slug}{wild_slug}"),
            wild_start: Some(packaging_slug.len()),
        }
    }

    /// Creates a general slug, failing if it is invalid.
    ///
    /// # Errors
    ///
    /// Returns a [`SlugError`] if `text` is not a valid general slug.
    pub fn parse(text: &str) -> Result<Self, SlugError> {
        check_slug(text).map(Self::new)
    }

    /// Creates a packaged slug, failing if either part is invalid.
    ///
    /// # Errors
    ///
    /// Returns a [`SlugError`] for the first invalid part.
    pub fn parse_packaged(packaging_slug: &str, wild_slug: &str) -> Result<Self, SlugError> {
        let slug = Self::packaged(packaging_slug, wild_slug);
        slug.validate()?;
        Ok(slug)
    }

    /// Returns the full slug text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Returns the full slug text; for packaged slugs, packaging then wild.
    #[must_use]
    pub fn full_slug(&self) -> &str {
        self.as_str()
    }

    /// Returns true for packaging + wild slugs.
    #[must_use]
    pub const fn is_packaged(&self) -> bool {
        self.wild_start.is_some()
    }

    /// Returns the packaging part of a packaged slug.
    #[must_use]
    pub fn packaging_slug(&self) -> Option<&str> {
        self.wild_start.map(|at| &self.text[..at])
    }

    /// Returns the wild part of a packaged slug.
    #[must_use]
    pub fn wild_slug(&self) -> Option<&str> {
        self.wild_start.map(|at| &self.text[at..])
    }

    /// Checks the slug against its grammar(s).
    ///
    /// # Errors
    ///
    /// Returns a [`SlugError`] naming the violated rule. For packaged slugs
    /// the packaging part is checked first.
    pub fn validate(&self) -> Result<(), SlugError> {
        match self.wild_start {
            None => check_slug(&self.text).map(drop),
            Some(at) => {
                check_packaging_slug(&self.text[..at])?;
                check_wild_slug(&self.text[at..]).map(drop)
            }
        }
    }

    /// Returns true if [`Slug::validate`] would succeed.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }

    /// Renders the slug as written in copy.
    #[must_use]
    pub fn render(&self) -> String {
        self.text.clone()
    }
}

impl std::fmt::Display for Slug {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.text)
    }
}

impl FromStr for Slug {
    type Err = SlugError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl AsRef<str> for Slug {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}
