//! Reference resolution check.
//!
//! Every enrollment must point at a program, organisation unit and tracked
//! entity that the preheat resolved. Later hooks silently skip records that
//! fail here.

use tracker_model::{Result, TrackerErrorCode, TrackerErrorReport};

use super::TrackerValidationHook;
use crate::bundle::TrackerBundle;
use crate::reporter::ValidationErrorReporter;

/// Reports `E1069`, `E1070` and `E1068` for unresolved references.
#[derive(Debug, Default, Clone, Copy)]
pub struct EnrollmentReferencesHook;

impl EnrollmentReferencesHook {
    pub const ORDER: i32 = 3;

    pub fn new() -> Self {
        Self
    }
}

impl TrackerValidationHook for EnrollmentReferencesHook {
    fn order(&self) -> i32 {
        Self::ORDER
    }

    fn hook_name(&self) -> &'static str {
        "EnrollmentReferencesHook"
    }

    fn skip_on_delete(&self) -> bool {
        true
    }

    fn validate(&self, bundle: &TrackerBundle) -> Result<Vec<TrackerErrorReport>> {
        if bundle.import_strategy().is_delete() {
            return Ok(Vec::new());
        }

        let mut reporter = ValidationErrorReporter::new(self.hook_name());

        for enrollment in bundle.enrollments() {
            reporter.increment(enrollment);

            if bundle.program_of(enrollment).is_none() {
                reporter.add_error(
                    TrackerErrorReport::builder(TrackerErrorCode::E1069)
                        .add_arg(enrollment.program.clone().unwrap_or_default()),
                );
            }
            if bundle.organisation_unit_of(enrollment).is_none() {
                reporter.add_error(
                    TrackerErrorReport::builder(TrackerErrorCode::E1070)
                        .add_arg(enrollment.org_unit.clone().unwrap_or_default()),
                );
            }
            if bundle.tracked_entity_of(enrollment).is_none() {
                reporter.add_error(
                    TrackerErrorReport::builder(TrackerErrorCode::E1068).add_arg(
                        enrollment
                            .tracked_entity_instance
                            .clone()
                            .unwrap_or_default(),
                    ),
                );
            }
        }

        Ok(reporter.into_report_list())
    }
}
