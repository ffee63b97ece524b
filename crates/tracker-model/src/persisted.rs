//! Persisted registry entities.
//!
//! These are read-only to the validation pipeline: the preheat stage hands
//! them over already loaded, and the lookup service returns program instances.

use std::collections::BTreeSet;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::enums::{FeatureType, ProgramStatus};
use crate::geometry::Geometry;

/// An entity addressable by a UID.
pub trait Identifiable {
    fn uid(&self) -> &str;
}

macro_rules! impl_identifiable {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl Identifiable for $ty {
                fn uid(&self) -> &str {
                    &self.uid
                }
            }
        )+
    };
}

impl_identifiable!(
    Program,
    OrganisationUnit,
    TrackedEntityType,
    TrackedEntityInstance,
    TrackedEntityComment,
    ProgramInstance,
    User,
);

/// Program configuration relevant to enrollment rules.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Program {
    pub uid: String,
    pub name: String,
    /// A tracked entity may be enrolled at most once, ever.
    pub only_enroll_once: bool,
    pub feature_type: FeatureType,
}

impl Program {
    pub fn new(uid: impl Into<String>, only_enroll_once: bool) -> Self {
        Self {
            uid: uid.into(),
            only_enroll_once,
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OrganisationUnit {
    pub uid: String,
    pub name: String,
    /// Hierarchy path of UIDs from the root, e.g. `/ImspTQPwCqd/O6uvpzGd5pu`.
    pub path: String,
}

impl OrganisationUnit {
    pub fn new(uid: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            uid: uid.into(),
            path: path.into(),
            ..Self::default()
        }
    }

    /// UIDs on the hierarchy path, root first, including this unit.
    pub fn path_uids(&self) -> impl Iterator<Item = &str> {
        self.path.split('/').filter(|segment| !segment.is_empty())
    }

    /// Whether `uid` is this unit or one of its ancestors.
    pub fn is_descendant_of(&self, uid: &str) -> bool {
        self.uid == uid || self.path_uids().any(|segment| segment == uid)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TrackedEntityType {
    pub uid: String,
    pub name: String,
}

/// The subject (person, case) being enrolled.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TrackedEntityInstance {
    pub uid: String,
    pub tracked_entity_type: TrackedEntityType,
}

impl TrackedEntityInstance {
    pub fn new(uid: impl Into<String>) -> Self {
        Self {
            uid: uid.into(),
            ..Self::default()
        }
    }
}

/// A stored comment on a program instance.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TrackedEntityComment {
    pub uid: String,
    pub comment_text: Option<String>,
    pub creator: Option<String>,
    pub created: Option<NaiveDateTime>,
}

/// A committed enrollment.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProgramInstance {
    pub uid: String,
    pub program: Program,
    pub entity_instance: Option<TrackedEntityInstance>,
    pub organisation_unit: Option<OrganisationUnit>,
    pub status: ProgramStatus,
    pub geometry: Option<Geometry>,
    pub enrollment_date: Option<NaiveDateTime>,
    pub incident_date: Option<NaiveDateTime>,
    /// Completion date.
    pub end_date: Option<NaiveDateTime>,
    pub completed_by: Option<String>,
    pub stored_by: Option<String>,
    pub followup: bool,
    pub deleted: bool,
    pub created: Option<NaiveDateTime>,
    pub created_at_client: Option<NaiveDateTime>,
    pub last_updated: Option<NaiveDateTime>,
    pub last_updated_at_client: Option<NaiveDateTime>,
    pub comments: Vec<TrackedEntityComment>,
}

impl ProgramInstance {
    pub fn new(
        uid: impl Into<String>,
        program: Program,
        entity_instance: TrackedEntityInstance,
        status: ProgramStatus,
    ) -> Self {
        Self {
            uid: uid.into(),
            program,
            entity_instance: Some(entity_instance),
            status,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_organisation_unit(mut self, org_unit: OrganisationUnit) -> Self {
        self.organisation_unit = Some(org_unit);
        self
    }

    #[must_use]
    pub fn deleted(mut self, deleted: bool) -> Self {
        self.deleted = deleted;
        self
    }

    pub fn tracked_entity_uid(&self) -> Option<&str> {
        self.entity_instance.as_ref().map(|tei| tei.uid.as_str())
    }
}

/// The acting principal of an import.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct User {
    pub uid: String,
    pub username: String,
    /// Organisation units the user captures data for.
    pub organisation_units: BTreeSet<String>,
    /// Programs the user has data-read access to.
    pub readable_programs: BTreeSet<String>,
    pub superuser: bool,
}

impl User {
    pub fn new(uid: impl Into<String>, username: impl Into<String>) -> Self {
        Self {
            uid: uid.into(),
            username: username.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_organisation_unit(mut self, uid: impl Into<String>) -> Self {
        self.organisation_units.insert(uid.into());
        self
    }

    #[must_use]
    pub fn with_readable_program(mut self, uid: impl Into<String>) -> Self {
        self.readable_programs.insert(uid.into());
        self
    }
}
