//! Collaborators consumed by the validation hooks.
//!
//! Persistence queries and access control live outside this crate. Hooks
//! only see them through the traits below, which must be safe for
//! concurrent read-only use.

use std::sync::Arc;

use tracker_model::{
    OrganisationUnitSelectionMode, Program, ProgramInstance, Result, TrackedEntityInstance,
    TrackerError, User,
};

/// Parameters of a persisted-enrollment lookup.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProgramInstanceQueryParams {
    pub program: Option<String>,
    pub tracked_entity_instance: Option<String>,
    pub organisation_units: Vec<String>,
    pub organisation_unit_mode: OrganisationUnitSelectionMode,
    pub skip_paging: bool,
    pub include_deleted: bool,
    pub page: Option<u32>,
    pub page_size: Option<u32>,
}

impl ProgramInstanceQueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_program(mut self, program: &Program) -> Self {
        self.program = Some(program.uid.clone());
        self
    }

    #[must_use]
    pub fn with_tracked_entity_instance(mut self, tei: &TrackedEntityInstance) -> Self {
        self.tracked_entity_instance = Some(tei.uid.clone());
        self
    }

    #[must_use]
    pub fn with_organisation_unit(mut self, uid: impl Into<String>) -> Self {
        self.organisation_units.push(uid.into());
        self
    }

    #[must_use]
    pub fn with_organisation_unit_mode(mut self, mode: OrganisationUnitSelectionMode) -> Self {
        self.organisation_unit_mode = mode;
        self
    }

    #[must_use]
    pub fn with_skip_paging(mut self, skip_paging: bool) -> Self {
        self.skip_paging = skip_paging;
        self
    }

    #[must_use]
    pub fn with_include_deleted(mut self, include_deleted: bool) -> Self {
        self.include_deleted = include_deleted;
        self
    }

    #[must_use]
    pub fn with_paging(mut self, page: u32, page_size: u32) -> Self {
        self.skip_paging = false;
        self.page = Some(page);
        self.page_size = Some(page_size);
        self
    }

    /// Reject queries a lookup service cannot execute.
    pub fn validate(&self) -> Result<()> {
        if self.program.is_none() && self.tracked_entity_instance.is_none() {
            return Err(TrackerError::InvalidQuery {
                message: "program or tracked entity instance must be specified".to_string(),
            });
        }
        let scoped = matches!(
            self.organisation_unit_mode,
            OrganisationUnitSelectionMode::Selected
                | OrganisationUnitSelectionMode::Children
                | OrganisationUnitSelectionMode::Descendants
        );
        if scoped && self.organisation_units.is_empty() {
            return Err(TrackerError::InvalidQuery {
                message: format!(
                    "organisation unit mode {:?} requires at least one organisation unit",
                    self.organisation_unit_mode
                ),
            });
        }
        if self.page_size == Some(0) {
            return Err(TrackerError::InvalidQuery {
                message: "page size must be greater than zero".to_string(),
            });
        }
        Ok(())
    }
}

/// Lookup of committed enrollments.
pub trait ProgramInstanceService: Send + Sync {
    fn get_program_instances(
        &self,
        params: &ProgramInstanceQueryParams,
    ) -> Result<Vec<ProgramInstance>>;
}

/// Ownership of enrollments through the organisation/program ownership chain.
pub trait TrackerOwnershipManager: Send + Sync {
    fn has_ownership(&self, user: &User, instance: &ProgramInstance) -> bool;
}

/// Read permission on enrollments.
pub trait TrackerAccessManager: Send + Sync {
    /// Reasons read access is denied; empty when reading is permitted.
    fn can_read(
        &self,
        user: &User,
        instance: &ProgramInstance,
        include_deleted: bool,
    ) -> Vec<String>;
}

/// The collaborators a pipeline is wired with.
#[derive(Clone)]
pub struct TrackerServices {
    pub program_instances: Arc<dyn ProgramInstanceService>,
    pub ownership: Arc<dyn TrackerOwnershipManager>,
    pub access: Arc<dyn TrackerAccessManager>,
}

impl TrackerServices {
    pub fn new(
        program_instances: Arc<dyn ProgramInstanceService>,
        ownership: Arc<dyn TrackerOwnershipManager>,
        access: Arc<dyn TrackerAccessManager>,
    ) -> Self {
        Self {
            program_instances,
            ownership,
            access,
        }
    }
}

impl std::fmt::Debug for TrackerServices {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TrackerServices").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_without_program_or_tei_is_rejected() {
        let params = ProgramInstanceQueryParams::new()
            .with_organisation_unit_mode(OrganisationUnitSelectionMode::All);
        assert!(matches!(
            params.validate(),
            Err(TrackerError::InvalidQuery { .. })
        ));
    }

    #[test]
    fn selected_mode_requires_org_units() {
        let params = ProgramInstanceQueryParams::new().with_program(&Program::new("prg", false));
        assert!(params.validate().is_err());
        assert!(params.with_organisation_unit("ou1").validate().is_ok());
    }

    #[test]
    fn all_mode_without_paging_is_valid() {
        let params = ProgramInstanceQueryParams::new()
            .with_program(&Program::new("prg", false))
            .with_tracked_entity_instance(&TrackedEntityInstance::new("tei"))
            .with_organisation_unit_mode(OrganisationUnitSelectionMode::All)
            .with_skip_paging(true);
        assert!(params.validate().is_ok());
        assert!(params.skip_paging);
    }

    #[test]
    fn zero_page_size_is_rejected() {
        let params = ProgramInstanceQueryParams::new()
            .with_program(&Program::new("prg", false))
            .with_organisation_unit_mode(OrganisationUnitSelectionMode::All)
            .with_paging(1, 0);
        assert!(params.validate().is_err());
    }
}
