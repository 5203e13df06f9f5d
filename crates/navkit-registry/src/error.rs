use thiserror::Error;

use navkit_core::NavkitError;

/// Lifecycle errors of the process-wide registry.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// `init_global` was called twice for the same renderable type.
    #[error("destination registry for {type_name} is already initialized")]
    AlreadyInitialized {
        /// The renderable type.
        type_name: &'static str,
    },

    /// `global` was called before `init_global`.
    #[error("destination registry for {type_name} is not initialized")]
    NotInitialized {
        /// The renderable type.
        type_name: &'static str,
    },
}

impl From<RegistryError> for NavkitError {
    fn from(err: RegistryError) -> Self {
        NavkitError::Registry(err.to_string())
    }
}
