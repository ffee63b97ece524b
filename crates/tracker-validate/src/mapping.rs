//! Projection of persisted program instances into the tracker enrollment shape.
//!
//! The projection only carries what error and report consumers need; it is
//! not a lossless export of the persisted row.

use chrono::NaiveDateTime;
use tracker_model::{
    Enrollment, EnrollmentStatus, FeatureType, Note, ProgramInstance, TrackedEntityComment,
};

/// ISO-8601 without timezone, millisecond precision.
const ISO8601_NO_TZ: &str = "%Y-%m-%dT%H:%M:%S%.3f";

/// Format a timestamp as ISO-8601 without timezone.
pub fn iso8601_no_tz(value: Option<NaiveDateTime>) -> Option<String> {
    value.map(|value| value.format(ISO8601_NO_TZ).to_string())
}

/// Project a committed enrollment into an [`Enrollment`].
pub fn enrollment_from_program_instance(instance: &ProgramInstance) -> Enrollment {
    let mut enrollment = Enrollment::new(instance.uid.clone());

    if let Some(tei) = &instance.entity_instance {
        enrollment.tracked_entity_type = Some(tei.tracked_entity_type.uid.clone());
        enrollment.tracked_entity_instance = Some(tei.uid.clone());
    }

    if let Some(org_unit) = &instance.organisation_unit {
        enrollment.org_unit = Some(org_unit.uid.clone());
        enrollment.org_unit_name = Some(org_unit.name.clone());
    }

    if let Some(geometry) = &instance.geometry {
        enrollment.geometry = Some(geometry.clone());
        if instance.program.feature_type == FeatureType::Point {
            enrollment.coordinate = geometry.coordinate();
        }
    }

    enrollment.created = iso8601_no_tz(instance.created);
    enrollment.created_at_client = iso8601_no_tz(instance.created_at_client);
    enrollment.last_updated = iso8601_no_tz(instance.last_updated);
    enrollment.last_updated_at_client = iso8601_no_tz(instance.last_updated_at_client);
    enrollment.program = Some(instance.program.uid.clone());
    enrollment.status = EnrollmentStatus::from_program_status(instance.status);
    enrollment.enrollment_date = instance.enrollment_date;
    enrollment.incident_date = instance.incident_date;
    enrollment.followup = instance.followup;
    enrollment.completed_date = instance.end_date;
    enrollment.completed_by.clone_from(&instance.completed_by);
    enrollment.stored_by.clone_from(&instance.stored_by);
    enrollment.deleted = instance.deleted;
    enrollment.notes = instance.comments.iter().map(note_from_comment).collect();

    enrollment
}

fn note_from_comment(comment: &TrackedEntityComment) -> Note {
    Note {
        note: comment.uid.clone(),
        value: comment.comment_text.clone(),
        stored_by: comment.creator.clone(),
        stored_date: iso8601_no_tz(comment.created),
    }
}
