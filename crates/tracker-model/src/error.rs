//! Exceptional failures of a validation pass.
//!
//! Data-driven rule violations are never errors; they are reported as
//! [`TrackerErrorReport`](crate::TrackerErrorReport) entries. Anything in
//! this enum aborts validation of the whole bundle.

use thiserror::Error;

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum TrackerError {
    /// The access manager denied reading an enrollment the acting user owns.
    #[error("read access to enrollment '{enrollment}' denied despite ownership: {}", .reasons.join("; "))]
    ReadDeniedDespiteOwnership {
        /// UID of the persisted enrollment.
        enrollment: String,
        /// Reasons given by the access manager.
        reasons: Vec<String>,
    },

    /// The persisted-enrollment lookup failed.
    #[error("enrollment lookup failed: {message}")]
    Lookup { message: String },

    /// Lookup parameters cannot be executed.
    #[error("invalid enrollment query: {message}")]
    InvalidQuery { message: String },

    /// Any other unexpected failure inside a hook.
    #[error("validation hook '{hook}' failed: {message}")]
    Hook { hook: String, message: String },
}

pub type Result<T> = std::result::Result<T, TrackerError>;

impl TrackerError {
    pub fn lookup(source: impl std::fmt::Display) -> Self {
        Self::Lookup {
            message: source.to_string(),
        }
    }

    pub fn hook(hook: impl Into<String>, source: impl std::fmt::Display) -> Self {
        Self::Hook {
            hook: hook.into(),
            message: source.to_string(),
        }
    }

    /// Whether this is an access-control disagreement between the ownership
    /// and access managers rather than an environment fault.
    pub fn is_access_inconsistency(&self) -> bool {
        matches!(self, Self::ReadDeniedDespiteOwnership { .. })
    }
}
