//! Validation hooks.
//!
//! Each hook is one independent rule unit. Hooks read the bundle, may call
//! the collaborator services, and return the reports they produced.
//!
//! # Standard Hook Order
//!
//! 1. **EnrollmentReferencesHook** (3) - program, organisation unit and
//!    tracked entity references must resolve
//! 2. **EnrollmentExistingEnrollmentsHook** (103) - conflicts with
//!    committed enrollments

mod existing_enrollments;
mod references;

pub use existing_enrollments::EnrollmentExistingEnrollmentsHook;
pub use references::EnrollmentReferencesHook;

use tracker_model::{Result, TrackerErrorReport};

use crate::bundle::TrackerBundle;

/// A single validation rule unit in the pipeline.
pub trait TrackerValidationHook: Send + Sync {
    /// Position in the pipeline; lower runs first.
    fn order(&self) -> i32;

    /// Human-readable name for this hook (for reports and logging).
    fn hook_name(&self) -> &'static str;

    /// Whether the hook has nothing to check for DELETE imports.
    ///
    /// Default implementation runs the hook for every strategy.
    fn skip_on_delete(&self) -> bool {
        false
    }

    /// Validate the bundle.
    ///
    /// # Errors
    ///
    /// Returns an error only for exceptional failures (lookup failures,
    /// access-control inconsistencies). Rule violations are returned as
    /// reports.
    fn validate(&self, bundle: &TrackerBundle) -> Result<Vec<TrackerErrorReport>>;
}
