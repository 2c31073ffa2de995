//! Type tokens.
//!
//! A type token stands in for one generic type parameter of a network node.

use std::fmt;

use serde::Serialize;

/// A label standing in for a node's generic type parameter.
///
/// `Display` writes the full name as declared (`System.Decimal`,
/// `(Order, Customer)`); [`TypeToken::label`] writes the short form used in
/// rendered output (`Decimal`, `Order,Customer`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeToken<'a> {
    /// A single named type, possibly namespace-qualified.
    Named(&'a str),
    /// A composite of several tokens, e.g. the pair produced by an outer join.
    Tuple(&'a [TypeToken<'a>]),
}

impl<'a> TypeToken<'a> {
    /// Creates a named token.
    #[inline]
    pub const fn named(name: &'a str) -> Self {
        Self::Named(name)
    }

    /// Returns the short, human-readable name of this token.
    ///
    /// Tuples have no single name; their short name is their label.
    pub fn short_name(&self) -> String {
        match self {
            TypeToken::Named(name) => short_type_name(name).to_string(),
            TypeToken::Tuple(_) => self.label().to_string(),
        }
    }

    /// Returns a displayable label: the short name for named tokens, the
    /// comma-joined labels of the elements for tuples.
    #[inline]
    pub const fn label(self) -> TokenLabel<'a> {
        TokenLabel(self)
    }
}

impl fmt::Display for TypeToken<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeToken::Named(name) => f.write_str(name),
            TypeToken::Tuple(items) => {
                f.write_str("(")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}", item)?;
                }
                f.write_str(")")
            }
        }
    }
}

impl Serialize for TypeToken<'_> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        match self {
            TypeToken::Named(name) => serializer.serialize_str(name),
            TypeToken::Tuple(items) => serializer.collect_seq(items.iter()),
        }
    }
}

/// Short-form rendering of a [`TypeToken`].
#[derive(Debug, Clone, Copy)]
pub struct TokenLabel<'a>(TypeToken<'a>);

impl fmt::Display for TokenLabel<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            TypeToken::Named(name) => f.write_str(short_type_name(name)),
            TypeToken::Tuple(items) => {
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(",")?;
                    }
                    write!(f, "{}", item.label())?;
                }
                Ok(())
            }
        }
    }
}

/// Strips the namespace or module path from a type name.
///
/// Only the head of the name is considered, so generic arguments keep their
/// qualified form: `app::model::Vec<app::Order>` becomes `Vec<app::Order>`.
///
/// ```rust
/// use rulegraph_ast::short_type_name;
///
/// assert_eq!(short_type_name("System.Decimal"), "Decimal");
/// assert_eq!(short_type_name("std::string::String"), "String");
/// assert_eq!(short_type_name("int"), "int");
/// ```
pub fn short_type_name(name: &str) -> &str {
    let head_end = name.find(['<', '[', '(']).unwrap_or(name.len());
    let start = name[..head_end]
        .rfind(['.', ':'])
        .map_or(0, |separator| separator + 1);
    &name[start..]
}
