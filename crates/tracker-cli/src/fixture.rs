//! JSON fixtures describing one validation scenario.
//!
//! A fixture stands in for the import request, the preheat and the
//! committed store, so a bundle can be validated without a live registry.

use std::fs;
use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use serde::Deserialize;
use tracker_model::{
    Enrollment, ImportStrategy, OrganisationUnit, Program, ProgramInstance,
    TrackedEntityInstance, User,
};
use tracker_validate::memory::{
    InMemoryProgramInstanceStore, OrgUnitOwnershipManager, ProgramAccessManager,
};
use tracker_validate::{TrackerBundle, TrackerPreheat, TrackerServices, ValidationConfig};

/// An import bundle together with the state it is validated against.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ValidationFixture {
    pub import_strategy: ImportStrategy,
    pub user: User,
    pub programs: Vec<Program>,
    pub org_units: Vec<OrganisationUnit>,
    pub tracked_entities: Vec<TrackedEntityInstance>,
    pub enrollments: Vec<Enrollment>,
    /// Committed enrollments visible to the lookup service.
    pub program_instances: Vec<ProgramInstance>,
}

impl ValidationFixture {
    /// Read a fixture from a JSON file.
    pub fn from_path(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("read fixture {}", path.display()))?;
        Self::from_json(&text).with_context(|| format!("parse fixture {}", path.display()))
    }

    pub fn from_json(text: &str) -> Result<Self> {
        serde_json::from_str(text).context("invalid fixture JSON")
    }

    /// Split into the bundle to validate and the services to validate it with.
    pub fn into_parts(self) -> (TrackerBundle, TrackerServices) {
        let preheat = self
            .programs
            .into_iter()
            .fold(TrackerPreheat::new(self.user), TrackerPreheat::with_program);
        let preheat = self
            .org_units
            .into_iter()
            .fold(preheat, TrackerPreheat::with_organisation_unit);
        let preheat = self
            .tracked_entities
            .into_iter()
            .fold(preheat, TrackerPreheat::with_tracked_entity);

        let bundle = TrackerBundle::new(self.import_strategy, self.enrollments, preheat);
        let services = TrackerServices::new(
            Arc::new(InMemoryProgramInstanceStore::new(self.program_instances)),
            Arc::new(OrgUnitOwnershipManager),
            Arc::new(ProgramAccessManager),
        );
        (bundle, services)
    }
}

/// Read a validation config from a JSON file.
pub fn load_config(path: &Path) -> Result<ValidationConfig> {
    let text =
        fs::read_to_string(path).with_context(|| format!("read config {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("parse config {}", path.display()))
}
