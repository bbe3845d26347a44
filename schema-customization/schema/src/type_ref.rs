use std::{fmt, str::FromStr};
use thiserror::Error;

/// A reference to a schema type, with list and non-null wrappers.
///
/// Renders exactly like a GraphQL SDL type reference: `[ContentfulAsset]!`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TypeRef {
    Named(String),
    List(Box<TypeRef>),
    NonNull(Box<TypeRef>),
}

impl TypeRef {
    pub fn named(name: impl Into<String>) -> Self {
        TypeRef::Named(name.into())
    }

    pub fn list(self) -> Self {
        TypeRef::List(Box::new(self))
    }

    /// Wraps the reference as non-null. Already required references are returned unchanged.
    pub fn required(self) -> Self {
        match self {
            TypeRef::NonNull(_) => self,
            other => TypeRef::NonNull(Box::new(other)),
        }
    }

    pub fn required_if(self, condition: bool) -> Self {
        if condition { self.required() } else { self }
    }

    pub fn is_required(&self) -> bool {
        matches!(self, TypeRef::NonNull(_))
    }

    /// Whether the outermost nullable layer is a list.
    pub fn is_list(&self) -> bool {
        match self {
            TypeRef::Named(_) => false,
            TypeRef::List(_) => true,
            TypeRef::NonNull(inner) => inner.is_list(),
        }
    }

    /// The named type at the core of the wrappers.
    pub fn inner_name(&self) -> &str {
        match self {
            TypeRef::Named(name) => name,
            TypeRef::List(inner) | TypeRef::NonNull(inner) => inner.inner_name(),
        }
    }
}

impl fmt::Display for TypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeRef::Named(name) => f.write_str(name),
            TypeRef::List(inner) => write!(f, "[{inner}]"),
            TypeRef::NonNull(inner) => write!(f, "{inner}!"),
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeRefParseError {
    #[error("Empty type reference")]
    Empty,

    #[error("`{0}` is not a valid type name")]
    InvalidName(String),

    #[error("Unbalanced list brackets in `{0}`")]
    UnbalancedBrackets(String),

    #[error("Non-null modifier applied twice in `{0}`")]
    DoubleNonNull(String),
}

impl FromStr for TypeRef {
    type Err = TypeRefParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();

        if s.is_empty() {
            return Err(TypeRefParseError::Empty);
        }

        if let Some(inner) = s.strip_suffix('!') {
            if inner.trim_end().ends_with('!') {
                return Err(TypeRefParseError::DoubleNonNull(s.to_owned()));
            }

            return Ok(inner.parse::<TypeRef>()?.required());
        }

        match (s.strip_prefix('['), s.strip_suffix(']')) {
            (Some(_), Some(_)) => Ok(s[1..s.len() - 1].parse::<TypeRef>()?.list()),
            (None, None) if is_valid_name(s) => Ok(TypeRef::named(s)),
            (None, None) if s.contains(['[', ']']) => Err(TypeRefParseError::UnbalancedBrackets(s.to_owned())),
            (None, None) => Err(TypeRefParseError::InvalidName(s.to_owned())),
            _ => Err(TypeRefParseError::UnbalancedBrackets(s.to_owned())),
        }
    }
}

fn is_valid_name(name: &str) -> bool {
    let mut chars = name.chars();

    matches!(chars.next(), Some(c) if c == '_' || c.is_ascii_alphabetic())
        && chars.all(|c| c == '_' || c.is_ascii_alphanumeric())
}
