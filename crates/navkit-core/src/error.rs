//! # Error Types
//!
//! Top-level error for navkit. Each crate defines its own narrow error enum
//! (`RouterError`, `RegistryError`) and converts into [`NavkitError`] at the
//! boundary.
//!
//! Precondition violations (presenting a `Push` route) carry the offending
//! input. Resolution misses are never errors; they render a placeholder.

use thiserror::Error;

use crate::config::ConfigError;

/// Top-level error type for navkit.
#[derive(Error, Debug)]
pub enum NavkitError {
    /// Configuration could not be loaded.
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    /// A navigation operation was called with arguments it never accepts.
    #[error("navigation precondition violated: {0}")]
    Precondition(String),

    /// The destination registry is not in the expected lifecycle state.
    #[error("registry error: {0}")]
    Registry(String),
}
