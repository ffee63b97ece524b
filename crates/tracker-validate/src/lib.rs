//! Enrollment validation for tracker imports.
//!
//! A [`TrackerBundle`] of incoming enrollments is checked by an ordered
//! chain of hooks before anything is written:
//!
//! - **References**: program, organisation unit and tracked entity must
//!   have been resolved by the preheat (`E1069`, `E1070`, `E1068`)
//! - **Existing enrollments**: incoming enrollments must not conflict with
//!   committed enrollments the acting user can see (`E1015`, `E1016`)
//!
//! Rule violations come back as [`TrackerErrorReport`]s. Lookup failures and
//! access-control inconsistencies are returned as [`TrackerError`] and abort
//! the whole pass.
//!
//! # Example
//!
//! ```ignore
//! use tracker_validate::{build_default_pipeline, ValidationConfig};
//!
//! let pipeline = build_default_pipeline(&services, &ValidationConfig::default());
//! let report = pipeline.validate(&bundle)?;
//! for error in &report.error_reports {
//!     println!("{} line {}: {}", error.error_code, error.line_number, error.message());
//! }
//! ```

mod bundle;
mod config;
pub mod hooks;
mod mapping;
pub mod memory;
mod pipeline;
mod reporter;
mod services;

pub use bundle::{TrackerBundle, TrackerPreheat};
pub use config::{ConflictCheckConfig, ReadDeniedPolicy, ValidationConfig};
pub use hooks::{EnrollmentExistingEnrollmentsHook, EnrollmentReferencesHook, TrackerValidationHook};
pub use mapping::{enrollment_from_program_instance, iso8601_no_tz};
pub use pipeline::{HookSummary, TrackerValidationReport, ValidationPipeline, build_default_pipeline};
pub use reporter::ValidationErrorReporter;
pub use services::{
    ProgramInstanceQueryParams, ProgramInstanceService, TrackerAccessManager,
    TrackerOwnershipManager, TrackerServices,
};

pub use tracker_model::{TrackerError, TrackerErrorCode, TrackerErrorReport};
