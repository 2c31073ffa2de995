//! Literal values and comparison operators carried by test nodes.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use thiserror::Error;

/// A constant a value or comparison node tests against.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum LiteralValue<'a> {
    /// No value. Renders as `null`.
    #[default]
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(&'a str),
}

impl LiteralValue<'_> {
    /// Returns true if this is [`LiteralValue::Null`].
    #[inline]
    pub const fn is_null(&self) -> bool {
        matches!(self, LiteralValue::Null)
    }
}

impl fmt::Display for LiteralValue<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LiteralValue::Null => f.write_str("null"),
            LiteralValue::Bool(value) => write!(f, "{}", value),
            LiteralValue::Int(value) => write!(f, "{}", value),
            LiteralValue::Float(value) => write!(f, "{}", value),
            LiteralValue::Str(value) => f.write_str(value),
        }
    }
}

impl Serialize for LiteralValue<'_> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        match self {
            LiteralValue::Null => serializer.serialize_unit(),
            LiteralValue::Bool(value) => serializer.serialize_bool(*value),
            LiteralValue::Int(value) => serializer.serialize_i64(*value),
            LiteralValue::Float(value) => serializer.serialize_f64(*value),
            LiteralValue::Str(value) => serializer.serialize_str(value),
        }
    }
}

/// Comparison operator of a compare node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Comparator {
    LessThan,
    LessThanOrEqual,
    GreaterThan,
    GreaterThanOrEqual,
    Equal,
    NotEqual,
}

impl Comparator {
    /// All comparators, in declaration order.
    pub const ALL: [Comparator; 6] = [
        Comparator::LessThan,
        Comparator::LessThanOrEqual,
        Comparator::GreaterThan,
        Comparator::GreaterThanOrEqual,
        Comparator::Equal,
        Comparator::NotEqual,
    ];

    /// Returns the operator symbol.
    pub const fn symbol(&self) -> &'static str {
        match self {
            Comparator::LessThan => "<",
            Comparator::LessThanOrEqual => "<=",
            Comparator::GreaterThan => ">",
            Comparator::GreaterThanOrEqual => ">=",
            Comparator::Equal => "==",
            Comparator::NotEqual => "!=",
        }
    }

    /// Returns the operator name.
    pub const fn name(&self) -> &'static str {
        match self {
            Comparator::LessThan => "LessThan",
            Comparator::LessThanOrEqual => "LessThanOrEqual",
            Comparator::GreaterThan => "GreaterThan",
            Comparator::GreaterThanOrEqual => "GreaterThanOrEqual",
            Comparator::Equal => "Equal",
            Comparator::NotEqual => "NotEqual",
        }
    }
}

impl fmt::Display for Comparator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Error returned when a string names no known comparator.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown comparator: {0}")]
pub struct ParseComparatorError(pub String);

impl FromStr for Comparator {
    type Err = ParseComparatorError;

    /// Accepts either the symbol (`>=`) or the name (`GreaterThanOrEqual`,
    /// case-insensitive).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Comparator::ALL
            .into_iter()
            .find(|c| c.symbol() == trimmed || c.name().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| ParseComparatorError(s.to_string()))
    }
}

impl Serialize for Comparator {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.symbol())
    }
}
