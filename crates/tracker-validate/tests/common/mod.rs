//! Shared fixtures and scripted collaborators for integration tests.

#![allow(dead_code)]

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use tracker_model::{
    Enrollment, EnrollmentStatus, ImportStrategy, OrganisationUnit, Program, ProgramInstance,
    ProgramStatus, TrackedEntityInstance, TrackerError, User,
};
use tracker_validate::memory::{
    InMemoryProgramInstanceStore, OrgUnitOwnershipManager, ProgramAccessManager,
};
use tracker_validate::{
    ProgramInstanceQueryParams, ProgramInstanceService, TrackerAccessManager, TrackerBundle,
    TrackerOwnershipManager, TrackerPreheat, TrackerServices,
};

pub const PROGRAM_ONCE: &str = "prgOnce001";
pub const PROGRAM_MULTI: &str = "prgMulti01";
pub const ORG_UNIT: &str = "ouClinic01";
pub const TEI: &str = "teiPerson1";
pub const OTHER_TEI: &str = "teiPerson2";

pub fn program_once() -> Program {
    Program::new(PROGRAM_ONCE, true)
}

pub fn program_multi() -> Program {
    Program::new(PROGRAM_MULTI, false)
}

pub fn clinic() -> OrganisationUnit {
    OrganisationUnit::new(ORG_UNIT, format!("/ouCountry1/{ORG_UNIT}"))
}

pub fn acting_user() -> User {
    User::new("usrImport1", "importer")
        .with_organisation_unit("ouCountry1")
        .with_readable_program(PROGRAM_ONCE)
        .with_readable_program(PROGRAM_MULTI)
}

pub fn preheat() -> TrackerPreheat {
    TrackerPreheat::new(acting_user())
        .with_program(program_once())
        .with_program(program_multi())
        .with_organisation_unit(clinic())
        .with_tracked_entity(TrackedEntityInstance::new(TEI))
        .with_tracked_entity(TrackedEntityInstance::new(OTHER_TEI))
}

pub fn enrollment(uid: &str, program: &str, tei: &str, status: EnrollmentStatus) -> Enrollment {
    Enrollment::new(uid)
        .with_program(program)
        .with_org_unit(ORG_UNIT)
        .with_tracked_entity(tei)
        .with_status(status)
}

pub fn bundle(strategy: ImportStrategy, enrollments: Vec<Enrollment>) -> TrackerBundle {
    TrackerBundle::new(strategy, enrollments, preheat())
}

pub fn persisted(uid: &str, program: Program, tei: &str, status: ProgramStatus) -> ProgramInstance {
    ProgramInstance::new(uid, program, TrackedEntityInstance::new(tei), status)
        .with_organisation_unit(clinic())
}

/// Services backed by the in-memory collaborators.
pub fn memory_services(instances: Vec<ProgramInstance>) -> TrackerServices {
    TrackerServices::new(
        Arc::new(InMemoryProgramInstanceStore::new(instances)),
        Arc::new(OrgUnitOwnershipManager),
        Arc::new(ProgramAccessManager),
    )
}

/// Lookup returning fixed instances for matching program/tracked entity and
/// counting its invocations.
#[derive(Default)]
pub struct RecordingLookup {
    pub instances: Vec<ProgramInstance>,
    pub calls: AtomicUsize,
    pub last_params: std::sync::Mutex<Option<ProgramInstanceQueryParams>>,
}

impl RecordingLookup {
    pub fn new(instances: Vec<ProgramInstance>) -> Self {
        Self {
            instances,
            ..Self::default()
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl ProgramInstanceService for RecordingLookup {
    fn get_program_instances(
        &self,
        params: &ProgramInstanceQueryParams,
    ) -> tracker_model::Result<Vec<ProgramInstance>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Ok(mut last) = self.last_params.lock() {
            *last = Some(params.clone());
        }
        Ok(self
            .instances
            .iter()
            .filter(|pi| params.program.as_deref() == Some(pi.program.uid.as_str()))
            .filter(|pi| params.tracked_entity_instance.as_deref() == pi.tracked_entity_uid())
            .cloned()
            .collect())
    }
}

/// Lookup that always fails.
pub struct FailingLookup;

impl ProgramInstanceService for FailingLookup {
    fn get_program_instances(
        &self,
        _params: &ProgramInstanceQueryParams,
    ) -> tracker_model::Result<Vec<ProgramInstance>> {
        Err(TrackerError::lookup("connection refused"))
    }
}

/// Ownership decided by a fixed answer.
pub struct FixedOwnership(pub bool);

impl TrackerOwnershipManager for FixedOwnership {
    fn has_ownership(&self, _user: &User, _instance: &ProgramInstance) -> bool {
        self.0
    }
}

/// Read access denied with the given reasons (empty = allowed).
pub struct FixedAccess(pub Vec<String>);

impl TrackerAccessManager for FixedAccess {
    fn can_read(
        &self,
        _user: &User,
        _instance: &ProgramInstance,
        _include_deleted: bool,
    ) -> Vec<String> {
        self.0.clone()
    }
}

pub fn scripted_services(
    lookup: Arc<RecordingLookup>,
    owned: bool,
    denied: Vec<String>,
) -> TrackerServices {
    TrackerServices::new(
        lookup,
        Arc::new(FixedOwnership(owned)),
        Arc::new(FixedAccess(denied)),
    )
}
