//! Conflicts between incoming enrollments and committed ones.
//!
//! For every non-cancelled incoming enrollment the hook looks up all
//! committed enrollments of the same tracked entity in the same program,
//! across every organisation unit, keeps only those the acting user may see,
//! and applies the program's enrollment policy:
//!
//! - `only_enroll_once`: any visible ACTIVE or COMPLETED enrollment is a
//!   conflict (`E1016`).
//! - otherwise, an incoming ACTIVE enrollment conflicts with any visible
//!   ACTIVE enrollment (`E1015`).
//!
//! The lookup is scoped to the incoming program, so `E1015` never detects
//! an active enrollment in a different program.

use std::sync::Arc;

use tracker_model::{
    Enrollment, EnrollmentStatus, OrganisationUnitSelectionMode, ProgramInstance, Result,
    TrackerError, TrackerErrorCode, TrackerErrorReport, User,
};

use super::TrackerValidationHook;
use crate::bundle::TrackerBundle;
use crate::config::{ConflictCheckConfig, ReadDeniedPolicy};
use crate::mapping::enrollment_from_program_instance;
use crate::reporter::ValidationErrorReporter;
use crate::services::{
    ProgramInstanceQueryParams, ProgramInstanceService, TrackerAccessManager,
    TrackerOwnershipManager, TrackerServices,
};

/// Checks incoming enrollments against visible committed enrollments.
pub struct EnrollmentExistingEnrollmentsHook {
    program_instances: Arc<dyn ProgramInstanceService>,
    ownership: Arc<dyn TrackerOwnershipManager>,
    access: Arc<dyn TrackerAccessManager>,
    config: ConflictCheckConfig,
}

impl EnrollmentExistingEnrollmentsHook {
    pub const ORDER: i32 = 103;

    pub fn new(services: &TrackerServices, config: ConflictCheckConfig) -> Self {
        Self {
            program_instances: Arc::clone(&services.program_instances),
            ownership: Arc::clone(&services.ownership),
            access: Arc::clone(&services.access),
            config,
        }
    }

    pub fn config(&self) -> &ConflictCheckConfig {
        &self.config
    }

    /// Keep the committed enrollments the user owns and may read, projected
    /// into the enrollment shape.
    ///
    /// # Errors
    ///
    /// With [`ReadDeniedPolicy::Fail`], an owned enrollment the access
    /// manager refuses to let the user read is an error.
    pub fn filter_enrollments_user_has_access_to(
        &self,
        user: &User,
        instances: &[ProgramInstance],
    ) -> Result<Vec<Enrollment>> {
        let mut enrollments = Vec::new();

        for instance in instances {
            if !self.ownership.has_ownership(user, instance) {
                continue;
            }

            let reasons = self.access.can_read(user, instance, true);
            if reasons.is_empty() {
                enrollments.push(enrollment_from_program_instance(instance));
                continue;
            }

            match self.config.read_denied {
                ReadDeniedPolicy::Fail => {
                    return Err(TrackerError::ReadDeniedDespiteOwnership {
                        enrollment: instance.uid.clone(),
                        reasons,
                    });
                }
                ReadDeniedPolicy::Skip => {
                    tracing::warn!(
                        enrollment = %instance.uid,
                        user = %user.uid,
                        reasons = ?reasons,
                        "Read denied on owned enrollment; ignoring it for conflict checks"
                    );
                }
            }
        }

        Ok(enrollments)
    }
}

impl TrackerValidationHook for EnrollmentExistingEnrollmentsHook {
    fn order(&self) -> i32 {
        Self::ORDER
    }

    fn hook_name(&self) -> &'static str {
        "EnrollmentExistingEnrollmentsHook"
    }

    fn skip_on_delete(&self) -> bool {
        true
    }

    fn validate(&self, bundle: &TrackerBundle) -> Result<Vec<TrackerErrorReport>> {
        if bundle.import_strategy().is_delete() {
            return Ok(Vec::new());
        }

        let mut reporter = ValidationErrorReporter::new(self.hook_name());
        let acting_user = bundle.user();

        for enrollment in bundle.enrollments() {
            reporter.increment(enrollment);

            let program = bundle.program_of(enrollment);
            let org_unit = bundle.organisation_unit_of(enrollment);
            let tei = bundle.tracked_entity_of(enrollment);

            // Unresolved references are reported by EnrollmentReferencesHook.
            let (Some(program), Some(_), Some(tei)) = (program, org_unit, tei) else {
                tracing::trace!(
                    enrollment = %enrollment.enrollment,
                    "Skipping enrollment with unresolved references"
                );
                continue;
            };

            if enrollment.status == EnrollmentStatus::Cancelled {
                continue;
            }

            let params = ProgramInstanceQueryParams::new()
                .with_organisation_unit_mode(OrganisationUnitSelectionMode::All)
                .with_skip_paging(true)
                .with_include_deleted(self.config.include_deleted)
                .with_program(program)
                .with_tracked_entity_instance(tei);
            params.validate()?;

            let instances = self.program_instances.get_program_instances(&params)?;
            let visible = self.filter_enrollments_user_has_access_to(acting_user, &instances)?;

            if program.only_enroll_once {
                let enrolled = visible.iter().any(|existing| {
                    matches!(
                        existing.status,
                        EnrollmentStatus::Active | EnrollmentStatus::Completed
                    )
                });
                if enrolled {
                    reporter.add_error(
                        TrackerErrorReport::builder(TrackerErrorCode::E1016)
                            .add_uid(tei)
                            .add_uid(program),
                    );
                }
            } else if enrollment.status == EnrollmentStatus::Active {
                let active = visible
                    .iter()
                    .any(|existing| existing.status == EnrollmentStatus::Active);
                if active {
                    reporter.add_error(
                        TrackerErrorReport::builder(TrackerErrorCode::E1015)
                            .add_uid(tei)
                            .add_uid(program),
                    );
                }
            }
        }

        Ok(reporter.into_report_list())
    }
}
