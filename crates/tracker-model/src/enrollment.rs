//! Incoming tracker objects submitted in a bundle.
//!
//! References to programs, organisation units and tracked entities are
//! plain UIDs here; the preheat stage resolves them into persisted entities.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::enums::EnrollmentStatus;
use crate::geometry::{Coordinate, Geometry};

/// An enrollment of a tracked entity into a program, as submitted for import.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Enrollment {
    /// Enrollment UID.
    pub enrollment: String,
    pub tracked_entity_type: Option<String>,
    /// Tracked entity instance UID.
    pub tracked_entity_instance: Option<String>,
    /// Program UID.
    pub program: Option<String>,
    /// Owner organisation unit UID.
    pub org_unit: Option<String>,
    pub org_unit_name: Option<String>,
    pub status: EnrollmentStatus,
    pub enrollment_date: Option<NaiveDateTime>,
    pub incident_date: Option<NaiveDateTime>,
    pub completed_date: Option<NaiveDateTime>,
    pub completed_by: Option<String>,
    pub stored_by: Option<String>,
    pub created: Option<String>,
    pub created_at_client: Option<String>,
    pub last_updated: Option<String>,
    pub last_updated_at_client: Option<String>,
    pub followup: bool,
    pub deleted: bool,
    pub geometry: Option<Geometry>,
    pub coordinate: Option<Coordinate>,
    pub notes: Vec<Note>,
}

impl Enrollment {
    /// Create an enrollment with the given UID and default values.
    pub fn new(uid: impl Into<String>) -> Self {
        Self {
            enrollment: uid.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_program(mut self, program: impl Into<String>) -> Self {
        self.program = Some(program.into());
        self
    }

    #[must_use]
    pub fn with_org_unit(mut self, org_unit: impl Into<String>) -> Self {
        self.org_unit = Some(org_unit.into());
        self
    }

    #[must_use]
    pub fn with_tracked_entity(mut self, tei: impl Into<String>) -> Self {
        self.tracked_entity_instance = Some(tei.into());
        self
    }

    #[must_use]
    pub fn with_status(mut self, status: EnrollmentStatus) -> Self {
        self.status = status;
        self
    }

    pub fn uid(&self) -> &str {
        &self.enrollment
    }
}

/// A free-text note attached to an enrollment.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Note {
    /// Note UID.
    pub note: String,
    pub value: Option<String>,
    pub stored_by: Option<String>,
    pub stored_date: Option<String>,
}
