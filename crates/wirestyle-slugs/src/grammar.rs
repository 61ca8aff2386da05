//! Slug grammars and validation.

use regex::Regex;
use std::sync::OnceLock;
use wirestyle_types::{SlugError, SlugRule};

/// Compiled grammar patterns, built on first use.
static GENERAL: OnceLock<Regex> = OnceLock::new();
static PACKAGING: OnceLock<Regex> = OnceLock::new();
static WILD: OnceLock<Regex> = OnceLock::new();

/// The slug grammars in use on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SlugGrammar {
    /// Lowercase words joined by single hyphens, e.g. `breaking-news-1`.
    General,
    /// Uppercase package name ending in `/`, e.g. `FERRARI-IPO/`.
    Packaging,
    /// Free-form suffix after a packaging slug, e.g. `PROSPECTUS`.
    /// Allows mixed case and underscores for legacy identifiers.
    Wild,
}

impl SlugGrammar {
    /// Returns the grammar name as a string slice.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::General => "general",
            Self::Packaging => "packaging",
            Self::Wild => "wild",
        }
    }

    /// Returns the regular expression the slug text must match.
    #[must_use]
    pub const fn pattern_str(&self) -> &'static str {
        match self {
            Self::General => r"^[a-z0-9]+(?:-[a-z0-9]+)*$",
            Self::Packaging => r"^[A-Z0-9]+(?:-[A-Z0-9]+)*/$",
            Self::Wild => r"^[A-Za-z0-9_]+(?:-[A-Za-z0-9_]+)*$",
        }
    }

    /// Returns the compiled pattern.
    #[must_use]
    pub fn pattern(&self) -> &'static Regex {
        let cell = match self {
            Self::General => &GENERAL,
            Self::Packaging => &PACKAGING,
            Self::Wild => &WILD,
        };
        cell.get_or_init(|| Regex::new(self.pattern_str()).expect("Invalid slug pattern"))
    }

    /// Returns the default limits for this grammar.
    #[must_use]
    pub const fn default_limits(&self) -> SlugLimits {
        match self {
            Self::General => SlugLimits::general(),
            Self::Packaging => SlugLimits::packaging(),
            Self::Wild => SlugLimits::wild(),
        }
    }

    const fn allows(&self, c: char) -> bool {
        match self {
            Self::General => matches!(c, 'a'..='z' | '0'..='9' | '-'),
            Self::Packaging => matches!(c, 'A'..='Z' | '0'..='9' | '-'),
            Self::Wild => matches!(c, 'A'..='Z' | 'a'..='z' | '0'..='9' | '_' | '-'),
        }
    }

    const fn terminator(&self) -> Option<char> {
        match self {
            Self::Packaging => Some('/'),
            Self::General | Self::Wild => None,
        }
    }
}

impl std::fmt::Display for SlugGrammar {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Length and word-count limits applied on top of a grammar's pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SlugLimits {
    /// Maximum length in characters, terminator included.
    pub max_len: usize,
    /// Minimum number of hyphen-separated words.
    pub min_tokens: usize,
    /// Maximum number of hyphen-separated words, if any.
    pub max_tokens: Option<usize>,
    /// Minimum characters per word.
    pub min_token_len: usize,
    /// Whether a word may appear only once.
    pub unique_tokens: bool,
}

impl SlugLimits {
    /// Limits for general slugs.
    #[must_use]
    pub const fn general() -> Self {
        Self {
            max_len: 64,
            min_tokens: 1,
            max_tokens: None,
            min_token_len: 1,
            unique_tokens: false,
        }
    }

    /// Limits for packaging slugs.
    #[must_use]
    pub const fn packaging() -> Self {
        Self {
            max_len: 40,
            min_tokens: 2,
            max_tokens: Some(3),
            min_token_len: 2,
            unique_tokens: true,
        }
    }

    /// Limits for wild slugs.
    #[must_use]
    pub const fn wild() -> Self {
        Self {
            max_len: 40,
            min_tokens: 1,
            max_tokens: None,
            min_token_len: 1,
            unique_tokens: false,
        }
    }
}

impl Default for SlugLimits {
    fn default() -> Self {
        Self::general()
    }
}

/// A grammar paired with the limits to enforce.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlugValidator {
    grammar: SlugGrammar,
    limits: SlugLimits,
}

impl SlugValidator {
    /// Creates a validator with custom limits.
    #[must_use]
    pub const fn new(grammar: SlugGrammar, limits: SlugLimits) -> Self {
        Self { grammar, limits }
    }

    /// Creates a validator with the grammar's default limits.
    #[must_use]
    pub const fn for_grammar(grammar: SlugGrammar) -> Self {
        Self::new(grammar, grammar.default_limits())
    }

    /// Returns the grammar.
    #[must_use]
    pub const fn grammar(&self) -> SlugGrammar {
        self.grammar
    }

    /// Returns the limits.
    #[must_use]
    pub const fn limits(&self) -> &SlugLimits {
        &self.limits
    }

    /// Returns true if `input` satisfies the grammar and limits.
    #[must_use]
    pub fn is_valid(&self, input: &str) -> bool {
        self.check(input).is_ok()
    }

    /// Checks `input` and hands it back unchanged when it is valid.
    ///
    /// # Errors
    ///
    /// Returns a [`SlugError`] naming the first rule the input breaks.
    pub fn check<'a>(&self, input: &'a str) -> Result<&'a str, SlugError> {
        if input.is_empty() {
            return Err(SlugError::new(input, SlugRule::Empty, None));
        }
        if let Some((position, _)) = input.char_indices().nth(self.limits.max_len) {
            return Err(SlugError::new(input, SlugRule::TooLong, Some(position)));
        }
        if !self.grammar.pattern().is_match(input) {
            return Err(self.diagnose(input));
        }
        self.check_tokens(input)?;
        Ok(input)
    }

    /// Works out which rule a pattern mismatch broke.
    fn diagnose(&self, input: &str) -> SlugError {
        let terminator = self.grammar.terminator();
        let last = input.len() - 1;

        let forbidden = input
            .char_indices()
            .find(|&(_, c)| !self.grammar.allows(c) && Some(c) != terminator);
        if let Some((position, _)) = forbidden {
            return SlugError::new(input, SlugRule::ForbiddenCharacter, Some(position));
        }

        let body = match terminator {
            Some(t) => {
                if let Some(position) = input.find(t).filter(|&p| p != last) {
                    return SlugError::new(input, SlugRule::MisplacedTerminator, Some(position));
                }
                match input.strip_suffix(t) {
                    Some(body) => body,
                    None => return SlugError::new(input, SlugRule::MissingTerminator, None),
                }
            }
            None => input,
        };

        if body.is_empty() {
            return SlugError::new(input, SlugRule::TooFewTokens, None);
        }
        if body.starts_with('-') {
            return SlugError::new(input, SlugRule::LeadingHyphen, Some(0));
        }
        if let Some(position) = body.find("--") {
            return SlugError::new(input, SlugRule::ConsecutiveHyphens, Some(position));
        }
        if body.ends_with('-') {
            return SlugError::new(input, SlugRule::TrailingHyphen, Some(body.len() - 1));
        }
        SlugError::new(input, SlugRule::ForbiddenCharacter, None)
    }

    fn check_tokens(&self, input: &str) -> Result<(), SlugError> {
        let body = match self.grammar.terminator() {
            Some(t) => input.strip_suffix(t).unwrap_or(input),
            None => input,
        };
        let tokens = tokens_with_offsets(body);
        let limits = &self.limits;

        if tokens.len() < limits.min_tokens {
            return Err(SlugError::new(input, SlugRule::TooFewTokens, None));
        }
        if let Some(max) = limits.max_tokens {
            if let Some(&(position, _)) = tokens.get(max) {
                return Err(SlugError::new(input, SlugRule::TooManyTokens, Some(position)));
            }
        }
        if let Some(&(position, _)) = tokens
            .iter()
            .find(|(_, token)| token.chars().count() < limits.min_token_len)
        {
            return Err(SlugError::new(input, SlugRule::TokenTooShort, Some(position)));
        }
        if limits.unique_tokens {
            for (i, &(position, token)) in tokens.iter().enumerate() {
                if tokens[..i].iter().any(|&(_, earlier)| earlier == token) {
                    return Err(SlugError::new(input, SlugRule::RepeatedToken, Some(position)));
                }
            }
        }
        Ok(())
    }
}

/// Splits on hyphens, keeping each word's byte offset.
fn tokens_with_offsets(body: &str) -> Vec<(usize, &str)> {
    let mut offset = 0;
    body.split('-')
        .map(|token| {
            let start = offset;
            offset += token.len() + 1;
            (start, token)
        })
        .collect()
}

/// Returns true if `text` is a valid general slug.
///
/// ```
/// use wirestyle_slugs::validate_slug;
///
/// assert!(validate_slug("breaking-news-1"));
/// assert!(!validate_slug("Breaking_News"));
/// ```
#[must_use]
pub fn validate_slug(text: &str) -> bool {
    SlugValidator::for_grammar(SlugGrammar::General).is_valid(text)
}

/// Returns true if `text` is a valid packaging slug.
#[must_use]
pub fn validate_packaging_slug(text: &str) -> bool {
    SlugValidator::for_grammar(SlugGrammar::Packaging).is_valid(text)
}

/// Returns true if `text` is a valid wild slug.
#[must_use]
pub fn validate_wild_slug(text: &str) -> bool {
    SlugValidator::for_grammar(SlugGrammar::Wild).is_valid(text)
}

/// Checks a general slug.
///
/// # Errors
///
/// Returns a [`SlugError`] naming the violated rule.
pub fn check_slug(text: &str) -> Result<&str, SlugError> {
    SlugValidator::for_grammar(SlugGrammar::General).check(text)
}

/// Checks a packaging slug.
///
/// # Errors
///
/// Returns a [`SlugError`] naming the violated rule.
pub fn check_packaging_slug(text: &str) -> Result<&str, SlugError> {
    SlugValidator::for_grammar(SlugGrammar::Packaging).check(text)
}

/// Checks a wild slug.
///
/// # Errors
///
/// Returns a [`SlugError`] naming the violated rule.
pub fn check_wild_slug(text: &str) -> Result<&str, SlugError> {
    SlugValidator::for_grammar(SlugGrammar::Wild).check(text)
}
