//! Error types for wirestyle.

use thiserror::Error;

/// Result type alias for wirestyle operations.
pub type Result<T> = std::result::Result<T, StyleError>;

/// Errors raised by the formatters and record constructors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StyleError {
    /// A numeric date or time component is out of range.
    #[error("{field} out of range: {value} (expected {min}..={max})")]
    InvalidInput {
        /// The offending component.
        field: Component,
        /// The value that was supplied.
        value: u32,
        /// Smallest accepted value.
        min: u32,
        /// Largest accepted value.
        max: u32,
    },

    /// A textual component is empty.
    #[error("{field} must not be empty")]
    EmptyComponent {
        /// The offending component.
        field: Component,
    },

    /// A textual component contains a character it may not carry.
    #[error("invalid character {ch:?} in {field} at position {position}")]
    InvalidComponent {
        /// The offending component.
        field: Component,
        /// The rejected character.
        ch: char,
        /// Byte offset of the character.
        position: usize,
    },

    /// Slug grammar violation.
    #[error(transparent)]
    InvalidSlug(#[from] SlugError),
}

impl StyleError {
    /// Creates an out-of-range error for `field`.
    #[must_use]
    pub fn out_of_range(field: Component, value: u32, min: u32, max: u32) -> Self {
        tracing::debug!(field = field.as_str(), value, min, max, "component out of range");
        Self::InvalidInput {
            field,
            value,
            min,
            max,
        }
    }

    /// Returns true for the malformed-input family (ranges, empty or bad components).
    #[must_use]
    pub const fn is_invalid_input(&self) -> bool {
        matches!(
            self,
            Self::InvalidInput { .. } | Self::EmptyComponent { .. } | Self::InvalidComponent { .. }
        )
    }

    /// Returns the slug error, if this is a slug violation.
    #[must_use]
    pub const fn as_slug_error(&self) -> Option<&SlugError> {
        match self {
            Self::InvalidSlug(err) => Some(err),
            _ => None,
        }
    }
}

/// The part of a date, time or record that failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Component {
    /// Calendar month.
    Month,
    /// Day of the month.
    Day,
    /// Hour of the day.
    Hour,
    /// Minute of the hour.
    Minute,
    /// Instrument code of a RIC.
    InstrumentCode,
    /// Exchange code of a RIC.
    ExchangeCode,
}

impl Component {
    /// Returns the component name as a string slice.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Month => "month",
            Self::Day => "day",
            Self::Hour => "hour",
            Self::Minute => "minute",
            Self::InstrumentCode => "instrument code",
            Self::ExchangeCode => "exchange code",
        }
    }
}

impl std::fmt::Display for Component {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A slug that failed one of the slug grammars.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid slug {input:?}: {rule}{}", at_position(.position))]
pub struct SlugError {
    /// The rejected input.
    pub input: String,
    /// The rule that was violated.
    pub rule: SlugRule,
    /// Byte offset of the violation, when it can be pinned down.
    pub position: Option<usize>,
}

impl SlugError {
    /// Creates a new slug error.
    #[must_use]
    pub fn new(input: impl Into<String>, rule: SlugRule, position: Option<usize>) -> Self {
        let input = input.into();
        tracing::debug!(rule = rule.as_str(), ?position, input = %input, "slug rejected");
        Self {
            input,
            rule,
            position,
        }
    }

    /// Returns the offending part of the input: from the error position to
    /// the end of the token it sits in, or the whole input.
    #[must_use]
    pub fn offending(&self) -> &str {
        let Some(start) = self
            .position
            .filter(|&p| p < self.input.len() && self.input.is_char_boundary(p))
        else {
            return &self.input;
        };
        let rest = &self.input[start..];
        let len = rest
            .char_indices()
            .skip(1)
            .find(|&(_, c)| c == '-' || c == '/')
            .map_or(rest.len(), |(i, _)| i);
        &rest[..len]
    }
}

fn at_position(position: &Option<usize>) -> String {
    position.map_or_else(String::new, |p| format!(" at position {p}"))
}

/// Individual slug grammar rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SlugRule {
    /// The slug is empty.
    Empty,
    /// The slug exceeds the maximum length.
    TooLong,
    /// A character outside the grammar's alphabet.
    ForbiddenCharacter,
    /// The slug starts with a hyphen.
    LeadingHyphen,
    /// The slug (or its last token) ends with a hyphen.
    TrailingHyphen,
    /// Two hyphens in a row.
    ConsecutiveHyphens,
    /// A packaging slug that does not end in `/`.
    MissingTerminator,
    /// A `/` anywhere but the end of a packaging slug.
    MisplacedTerminator,
    /// Fewer hyphen-separated tokens than required.
    TooFewTokens,
    /// More hyphen-separated tokens than allowed.
    TooManyTokens,
    /// A token shorter than the minimum token length.
    TokenTooShort,
    /// The same token appears twice.
    RepeatedToken,
}

impl SlugRule {
    /// Returns the rule identifier as a string slice.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Empty => "empty",
            Self::TooLong => "too-long",
            Self::ForbiddenCharacter => "forbidden-character",
            Self::LeadingHyphen => "leading-hyphen",
            Self::TrailingHyphen => "trailing-hyphen",
            Self::ConsecutiveHyphens => "consecutive-hyphens",
            Self::MissingTerminator => "missing-terminator",
            Self::MisplacedTerminator => "misplaced-terminator",
            Self::TooFewTokens => "too-few-tokens",
            Self::TooManyTokens => "too-many-tokens",
            Self::TokenTooShort => "token-too-short",
            Self::RepeatedToken => "repeated-token",
        }
    }

    /// Returns a human-readable description of the rule.
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::Empty => "slug is empty",
            Self::TooLong => "slug is too long",
            Self::ForbiddenCharacter => "character not allowed in this slug",
            Self::LeadingHyphen => "slug may not start with a hyphen",
            Self::TrailingHyphen => "slug may not end with a hyphen",
            Self::ConsecutiveHyphens => "hyphens may not repeat",
            Self::MissingTerminator => "packaging slug must end with '/'",
            Self::MisplacedTerminator => "'/' is only allowed at the end of a packaging slug",
            Self::TooFewTokens => "not enough hyphen-separated words",
            Self::TooManyTokens => "too many hyphen-separated words",
            Self::TokenTooShort => "word is too short",
            Self::RepeatedToken => "word is repeated",
        }
    }
}

impl std::fmt::Display for SlugRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.description())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_input_message() {
        let err = StyleError::out_of_range(Component::Month, 13, 1, 12);
        assert_eq!(err.to_string(), "month out of range: 13 (expected 1..=12)");
        assert!(err.is_invalid_input());
        assert!(err.as_slug_error().is_none());
    }

    #[test]
    fn test_slug_error_message() {
        let err = SlugError::new("FERRARI-CA$H/", SlugRule::ForbiddenCharacter, Some(10));
        assert_eq!(
            err.to_string(),
            "invalid slug \"FERRARI-CA$H/\": character not allowed in this slug at position 10"
        );

        let err = SlugError::new("", SlugRule::Empty, None);
        assert_eq!(err.to_string(), "invalid slug \"\": slug is empty");
    }

    #[test]
    fn test_slug_error_converts() {
        let err: StyleError = SlugError::new("x", SlugRule::TooLong, None).into();
        assert!(!err.is_invalid_input());
        assert_eq!(err.as_slug_error().map(|e| e.rule), Some(SlugRule::TooLong));
    }

    #[test]
    fn test_offending_substring() {
        let err = SlugError::new("FERRARI-CA$H/", SlugRule::ForbiddenCharacter, Some(10));
        assert_eq!(err.offending(), "$H");

        let err = SlugError::new("FERRARI-I/", SlugRule::TokenTooShort, Some(8));
        assert_eq!(err.offending(), "I");

        let err = SlugError::new("FERRARIIPO", SlugRule::MissingTerminator, None);
        assert_eq!(err.offending(), "FERRARIIPO");
    }
}
