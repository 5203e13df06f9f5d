//! The rendering layer's unit type, as seen by the registry.

use std::fmt;

/// Diagnostic shown in place of a destination that could not be resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placeholder {
    /// A resolver was handed a value of a different runtime type than it
    /// was registered for.
    TypeMismatch {
        /// The type the resolver expected.
        type_name: &'static str,
    },
    /// No resolver matched the destination or anything it wraps.
    NotFound {
        /// The type that was looked up.
        type_name: &'static str,
    },
}

impl Placeholder {
    /// The type name carried for diagnostics.
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::TypeMismatch { type_name } | Self::NotFound { type_name } => type_name,
        }
    }
}

impl fmt::Display for Placeholder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TypeMismatch { type_name } => write!(f, "Type error for {type_name}"),
            Self::NotFound { type_name } => write!(f, "Destination not found\n{type_name}"),
        }
    }
}

/// A value the registry can produce for a destination.
///
/// Must be able to show both placeholders.
pub trait Renderable: Clone + Send + Sync + 'static {
    /// Build the value shown for `placeholder`.
    fn placeholder(placeholder: Placeholder) -> Self;
}
