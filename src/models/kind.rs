//! The closed vocabulary of validator kinds.
//!
//! A rule's `validatorKind` arrives as a free-form string; rendering parses it
//! into [`ValidatorKind`] so both target conventions dispatch on the same
//! enumeration. Exhaustive `match` statements in the two generators guarantee
//! that a kind supported by one convention is supported by the other.

use std::fmt;
use std::str::FromStr;

/// A validation check recognized by both target conventions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValidatorKind {
    NotNull,
    NotEmpty,
    Empty,
    Null,
    Equal,
    NotEqual,
    Length,
    MinLength,
    MaxLength,
    EmailFormat,
    PatternMatch,
    LessThan,
    LessOrEqual,
    GreaterThan,
    GreaterOrEqual,
    InclusiveRange,
    ExclusiveRange,
    CreditCardLike,
    EnumMembership,
}

/// Every supported kind, in wire-vocabulary order. Used by the parity tests.
pub const ALL_KINDS: &[ValidatorKind] = &[
    ValidatorKind::NotNull,
    ValidatorKind::NotEmpty,
    ValidatorKind::Empty,
    ValidatorKind::Null,
    ValidatorKind::Equal,
    ValidatorKind::NotEqual,
    ValidatorKind::Length,
    ValidatorKind::MinLength,
    ValidatorKind::MaxLength,
    ValidatorKind::EmailFormat,
    ValidatorKind::PatternMatch,
    ValidatorKind::LessThan,
    ValidatorKind::LessOrEqual,
    ValidatorKind::GreaterThan,
    ValidatorKind::GreaterOrEqual,
    ValidatorKind::InclusiveRange,
    ValidatorKind::ExclusiveRange,
    ValidatorKind::CreditCardLike,
    ValidatorKind::EnumMembership,
];

impl ValidatorKind {
    /// The wire-format tag for this kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            ValidatorKind::NotNull => "not-null",
            ValidatorKind::NotEmpty => "not-empty",
            ValidatorKind::Empty => "empty",
            ValidatorKind::Null => "null",
            ValidatorKind::Equal => "equal",
            ValidatorKind::NotEqual => "not-equal",
            ValidatorKind::Length => "length",
            ValidatorKind::MinLength => "min-length",
            ValidatorKind::MaxLength => "max-length",
            ValidatorKind::EmailFormat => "email-format",
            ValidatorKind::PatternMatch => "pattern-match",
            ValidatorKind::LessThan => "less-than",
            ValidatorKind::LessOrEqual => "less-or-equal",
            ValidatorKind::GreaterThan => "greater-than",
            ValidatorKind::GreaterOrEqual => "greater-or-equal",
            ValidatorKind::InclusiveRange => "inclusive-range",
            ValidatorKind::ExclusiveRange => "exclusive-range",
            ValidatorKind::CreditCardLike => "credit-card-like",
            ValidatorKind::EnumMembership => "enum-membership",
        }
    }
}

impl fmt::Display for ValidatorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a wire tag is not in the supported vocabulary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownKind(pub String);

impl FromStr for ValidatorKind {
    type Err = UnknownKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let kind = match s {
            "not-null" => ValidatorKind::NotNull,
            "not-empty" => ValidatorKind::NotEmpty,
            "empty" => ValidatorKind::Empty,
            "null" => ValidatorKind::Null,
            "equal" => ValidatorKind::Equal,
            "not-equal" => ValidatorKind::NotEqual,
            "length" => ValidatorKind::Length,
            "min-length" => ValidatorKind::MinLength,
            "max-length" => ValidatorKind::MaxLength,
            "email-format" => ValidatorKind::EmailFormat,
            "pattern-match" => ValidatorKind::PatternMatch,
            "less-than" => ValidatorKind::LessThan,
            "less-or-equal" => ValidatorKind::LessOrEqual,
            "greater-than" => ValidatorKind::GreaterThan,
            "greater-or-equal" => ValidatorKind::GreaterOrEqual,
            "inclusive-range" => ValidatorKind::InclusiveRange,
            "exclusive-range" => ValidatorKind::ExclusiveRange,
            "credit-card-like" => ValidatorKind::CreditCardLike,
            "enum-membership" => ValidatorKind::EnumMembership,
            _ => return Err(UnknownKind(s.to_string())),
        };
        Ok(kind)
    }
}
