//! Tests for projecting program instances into enrollments.

use chrono::NaiveDate;
use tracker_model::{
    Coordinate, EnrollmentStatus, FeatureType, Geometry, OrganisationUnit, Program,
    ProgramInstance, ProgramStatus, TrackedEntityComment, TrackedEntityInstance,
    TrackedEntityType,
};
use tracker_validate::{enrollment_from_program_instance, iso8601_no_tz};

fn timestamp(hour: u32) -> chrono::NaiveDateTime {
    NaiveDate::from_ymd_opt(2020, 3, 14)
        .and_then(|date| date.and_hms_milli_opt(hour, 5, 9, 42))
        .expect("valid timestamp")
}

fn instance(feature_type: FeatureType) -> ProgramInstance {
    let mut program = Program::new("prgPoint01", false);
    program.feature_type = feature_type;
    let tei = TrackedEntityInstance {
        uid: "teiPerson1".to_string(),
        tracked_entity_type: TrackedEntityType {
            uid: "tetPerson1".to_string(),
            name: "Person".to_string(),
        },
    };
    let mut org_unit = OrganisationUnit::new("ouClinic01", "/ouCountry1/ouClinic01");
    org_unit.name = "Ngelehun CHC".to_string();

    let mut instance = ProgramInstance::new("piStored01", program, tei, ProgramStatus::Completed)
        .with_organisation_unit(org_unit);
    instance.geometry = Some(Geometry::Polygon(vec![
        Coordinate::new(-11.4, 8.1),
        Coordinate::new(-11.3, 8.2),
    ]));
    instance.created = Some(timestamp(8));
    instance.last_updated = Some(timestamp(9));
    instance.enrollment_date = Some(timestamp(7));
    instance.end_date = Some(timestamp(10));
    instance.completed_by = Some("nurse".to_string());
    instance.stored_by = Some("importer".to_string());
    instance.followup = true;
    instance.comments = vec![TrackedEntityComment {
        uid: "cmtNote001".to_string(),
        comment_text: Some("Referred to district hospital".to_string()),
        creator: Some("nurse".to_string()),
        created: Some(timestamp(11)),
    }];
    instance
}

#[test]
fn projects_identity_ownership_and_status() {
    let enrollment = enrollment_from_program_instance(&instance(FeatureType::None));

    assert_eq!(enrollment.enrollment, "piStored01");
    assert_eq!(enrollment.tracked_entity_instance.as_deref(), Some("teiPerson1"));
    assert_eq!(enrollment.tracked_entity_type.as_deref(), Some("tetPerson1"));
    assert_eq!(enrollment.org_unit.as_deref(), Some("ouClinic01"));
    assert_eq!(enrollment.org_unit_name.as_deref(), Some("Ngelehun CHC"));
    assert_eq!(enrollment.program.as_deref(), Some("prgPoint01"));
    assert_eq!(enrollment.status, EnrollmentStatus::Completed);
    assert_eq!(enrollment.completed_date, Some(timestamp(10)));
    assert_eq!(enrollment.completed_by.as_deref(), Some("nurse"));
    assert_eq!(enrollment.stored_by.as_deref(), Some("importer"));
    assert!(enrollment.followup);
    assert!(!enrollment.deleted);
}

#[test]
fn audit_timestamps_use_iso8601_without_timezone() {
    let enrollment = enrollment_from_program_instance(&instance(FeatureType::None));

    assert_eq!(enrollment.created.as_deref(), Some("2020-03-14T08:05:09.042"));
    assert_eq!(enrollment.last_updated.as_deref(), Some("2020-03-14T09:05:09.042"));
    assert_eq!(enrollment.created_at_client, None);
    assert_eq!(iso8601_no_tz(None), None);
}

#[test]
fn coordinate_only_for_point_programs() {
    let polygon = enrollment_from_program_instance(&instance(FeatureType::Polygon));
    assert!(polygon.geometry.is_some());
    assert_eq!(polygon.coordinate, None);

    let point = enrollment_from_program_instance(&instance(FeatureType::Point));
    assert_eq!(point.coordinate, Some(Coordinate::new(-11.4, 8.1)));
}

#[test]
fn comments_become_notes() {
    let enrollment = enrollment_from_program_instance(&instance(FeatureType::None));

    assert_eq!(enrollment.notes.len(), 1);
    let note = &enrollment.notes[0];
    assert_eq!(note.note, "cmtNote001");
    assert_eq!(note.value.as_deref(), Some("Referred to district hospital"));
    assert_eq!(note.stored_by.as_deref(), Some("nurse"));
    assert_eq!(note.stored_date.as_deref(), Some("2020-03-14T11:05:09.042"));
}

#[test]
fn missing_links_leave_fields_empty() {
    let mut bare = instance(FeatureType::Point);
    bare.entity_instance = None;
    bare.organisation_unit = None;
    bare.geometry = None;

    let enrollment = enrollment_from_program_instance(&bare);

    assert_eq!(enrollment.tracked_entity_instance, None);
    assert_eq!(enrollment.org_unit, None);
    assert_eq!(enrollment.geometry, None);
    assert_eq!(enrollment.coordinate, None);
}
