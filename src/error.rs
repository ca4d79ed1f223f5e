//! Error types

use thiserror::Error;

/// Errors returned by [`KeyManager`](crate::KeyManager) lookups.
///
/// Malformed keys are not errors; validation reports them as `false`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KeyError {
    /// No scheme is registered under the requested name.
    #[error("unknown product key scheme: {name}")]
    UnknownScheme {
        /// The name that was looked up.
        name: String,
    },
}
