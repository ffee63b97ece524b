pub mod enrollment;
pub mod enums;
pub mod error;
pub mod geometry;
pub mod persisted;
pub mod report;

pub use enrollment::{Enrollment, Note};
pub use enums::{
    EnrollmentStatus, FeatureType, ImportStrategy, OrganisationUnitSelectionMode, ProgramStatus,
    TrackerType,
};
pub use error::{Result, TrackerError};
pub use geometry::{Coordinate, Geometry};
pub use persisted::{
    Identifiable, OrganisationUnit, Program, ProgramInstance, TrackedEntityComment,
    TrackedEntityInstance, TrackedEntityType, User,
};
pub use report::{TrackerErrorCode, TrackerErrorReport, TrackerErrorReportBuilder};
