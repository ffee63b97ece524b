//! Hook configuration.

use serde::{Deserialize, Serialize};

/// What the conflict hook does when the access manager refuses to let an
/// owner read one of its enrollments.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReadDeniedPolicy {
    /// Abort the validation pass with `TrackerError::ReadDeniedDespiteOwnership`.
    #[default]
    Fail,
    /// Treat the enrollment as invisible and log a warning.
    Skip,
}

/// Configuration of the existing-enrollment conflict hook.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConflictCheckConfig {
    /// Ask the lookup service to return soft-deleted enrollments as well.
    pub include_deleted: bool,
    pub read_denied: ReadDeniedPolicy,
}

impl ConflictCheckConfig {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_include_deleted(mut self, include_deleted: bool) -> Self {
        self.include_deleted = include_deleted;
        self
    }

    #[must_use]
    pub fn with_read_denied(mut self, policy: ReadDeniedPolicy) -> Self {
        self.read_denied = policy;
        self
    }
}

/// Configuration of the default validation pipeline.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationConfig {
    pub conflict_check: ConflictCheckConfig,
}

impl ValidationConfig {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_conflict_check(mut self, conflict_check: ConflictCheckConfig) -> Self {
        self.conflict_check = conflict_check;
        self
    }
}
