//! Enumerations shared by incoming tracker objects and persisted entities.

use serde::{Deserialize, Serialize};

/// How the objects of a bundle are applied to the registry.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ImportStrategy {
    Create,
    Update,
    Delete,
    #[default]
    CreateAndUpdate,
}

impl ImportStrategy {
    pub fn is_create(&self) -> bool {
        matches!(self, Self::Create | Self::CreateAndUpdate)
    }

    pub fn is_update(&self) -> bool {
        matches!(self, Self::Update | Self::CreateAndUpdate)
    }

    pub fn is_delete(&self) -> bool {
        matches!(self, Self::Delete)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Create => "CREATE",
            Self::Update => "UPDATE",
            Self::Delete => "DELETE",
            Self::CreateAndUpdate => "CREATE_AND_UPDATE",
        }
    }

    /// Parse strategy from string.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_uppercase().replace('-', "_").as_str() {
            "CREATE" => Some(Self::Create),
            "UPDATE" => Some(Self::Update),
            "DELETE" => Some(Self::Delete),
            "CREATE_AND_UPDATE" => Some(Self::CreateAndUpdate),
            _ => None,
        }
    }
}

/// Lifecycle status of an incoming enrollment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EnrollmentStatus {
    #[default]
    Active,
    Completed,
    Cancelled,
}

impl EnrollmentStatus {
    /// Translate the persisted program status into the tracker status.
    pub fn from_program_status(status: ProgramStatus) -> Self {
        match status {
            ProgramStatus::Active => Self::Active,
            ProgramStatus::Completed => Self::Completed,
            ProgramStatus::Cancelled => Self::Cancelled,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Active => "ACTIVE",
            Self::Completed => "COMPLETED",
            Self::Cancelled => "CANCELLED",
        }
    }
}

/// Status stored on a persisted program instance.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProgramStatus {
    #[default]
    Active,
    Completed,
    Cancelled,
}

/// Geometry type a program captures for its enrollments.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FeatureType {
    #[default]
    None,
    Point,
    Polygon,
    MultiPolygon,
    Symbol,
}

/// Organisation-unit scope applied to a persisted-enrollment lookup.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrganisationUnitSelectionMode {
    #[default]
    Selected,
    Children,
    Descendants,
    Accessible,
    Capture,
    All,
}

/// Kind of tracker object a report refers to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TrackerType {
    TrackedEntity,
    #[default]
    Enrollment,
    Event,
    Relationship,
}

impl TrackerType {
    pub fn label(&self) -> &'static str {
        match self {
            Self::TrackedEntity => "TrackedEntity",
            Self::Enrollment => "Enrollment",
            Self::Event => "Event",
            Self::Relationship => "Relationship",
        }
    }
}
