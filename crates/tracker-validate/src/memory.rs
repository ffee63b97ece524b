//! In-memory collaborator implementations.
//!
//! Used by the CLI harness to validate fixtures and by the test-suite.

use tracker_model::{OrganisationUnitSelectionMode, ProgramInstance, Result, User};

use crate::services::{
    ProgramInstanceQueryParams, ProgramInstanceService, TrackerAccessManager,
    TrackerOwnershipManager,
};

const DEFAULT_PAGE_SIZE: u32 = 50;

/// Committed enrollments held in memory.
#[derive(Debug, Clone, Default)]
pub struct InMemoryProgramInstanceStore {
    instances: Vec<ProgramInstance>,
}

impl InMemoryProgramInstanceStore {
    pub fn new(instances: Vec<ProgramInstance>) -> Self {
        Self { instances }
    }

    pub fn insert(&mut self, instance: ProgramInstance) {
        self.instances.push(instance);
    }

    pub fn len(&self) -> usize {
        self.instances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instances.is_empty()
    }

    fn matches(params: &ProgramInstanceQueryParams, instance: &ProgramInstance) -> bool {
        if instance.deleted && !params.include_deleted {
            return false;
        }
        if let Some(program) = &params.program
            && &instance.program.uid != program
        {
            return false;
        }
        if let Some(tei) = &params.tracked_entity_instance
            && instance.tracked_entity_uid() != Some(tei.as_str())
        {
            return false;
        }
        Self::in_org_unit_scope(params, instance)
    }

    fn in_org_unit_scope(params: &ProgramInstanceQueryParams, instance: &ProgramInstance) -> bool {
        let selected = &params.organisation_units;
        match params.organisation_unit_mode {
            OrganisationUnitSelectionMode::All
            | OrganisationUnitSelectionMode::Accessible
            | OrganisationUnitSelectionMode::Capture => true,
            mode => {
                let Some(unit) = &instance.organisation_unit else {
                    return false;
                };
                match mode {
                    OrganisationUnitSelectionMode::Selected => {
                        selected.iter().any(|uid| *uid == unit.uid)
                    }
                    OrganisationUnitSelectionMode::Children => {
                        let path: Vec<&str> = unit.path_uids().collect();
                        let parent = path.len().checked_sub(2).map(|idx| path[idx]);
                        selected
                            .iter()
                            .any(|uid| *uid == unit.uid || parent == Some(uid.as_str()))
                    }
                    _ => selected.iter().any(|uid| unit.is_descendant_of(uid)),
                }
            }
        }
    }
}

impl ProgramInstanceService for InMemoryProgramInstanceStore {
    fn get_program_instances(
        &self,
        params: &ProgramInstanceQueryParams,
    ) -> Result<Vec<ProgramInstance>> {
        params.validate()?;

        let matching = self
            .instances
            .iter()
            .filter(|instance| Self::matches(params, instance))
            .cloned();

        if params.skip_paging {
            return Ok(matching.collect());
        }

        let page = params.page.unwrap_or(1).max(1) as usize;
        let page_size = params.page_size.unwrap_or(DEFAULT_PAGE_SIZE) as usize;
        Ok(matching
            .skip((page - 1) * page_size)
            .take(page_size)
            .collect())
    }
}

/// Ownership through the organisation-unit hierarchy: a user owns an
/// enrollment when one of the user's units is the enrollment's owner unit
/// or one of its ancestors.
#[derive(Debug, Clone, Copy, Default)]
pub struct OrgUnitOwnershipManager;

impl TrackerOwnershipManager for OrgUnitOwnershipManager {
    fn has_ownership(&self, user: &User, instance: &ProgramInstance) -> bool {
        if user.superuser {
            return true;
        }
        let Some(owner) = &instance.organisation_unit else {
            return false;
        };
        user.organisation_units
            .iter()
            .any(|uid| owner.is_descendant_of(uid))
    }
}

/// Read access through program data-read sharing.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProgramAccessManager;

impl TrackerAccessManager for ProgramAccessManager {
    fn can_read(
        &self,
        user: &User,
        instance: &ProgramInstance,
        include_deleted: bool,
    ) -> Vec<String> {
        let mut errors = Vec::new();

        if !user.superuser && !user.readable_programs.contains(&instance.program.uid) {
            errors.push(format!(
                "User has no data read access to program: {}",
                instance.program.uid
            ));
        }
        if instance.deleted && !include_deleted {
            errors.push(format!("Enrollment {} is deleted", instance.uid));
        }

        errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracker_model::{OrganisationUnit, Program, ProgramStatus, TrackedEntityInstance};

    fn instance(uid: &str, org_unit: OrganisationUnit) -> ProgramInstance {
        ProgramInstance::new(
            uid,
            Program::new("prgA", false),
            TrackedEntityInstance::new("teiA"),
            ProgramStatus::Active,
        )
        .with_organisation_unit(org_unit)
    }

    #[test]
    fn paging_applies_unless_skipped() {
        let unit = OrganisationUnit::new("ou1", "/ou1");
        let store = InMemoryProgramInstanceStore::new(
            (0..5).map(|i| instance(&format!("pi{i}"), unit.clone())).collect(),
        );
        let params = ProgramInstanceQueryParams::new()
            .with_program(&Program::new("prgA", false))
            .with_organisation_unit_mode(OrganisationUnitSelectionMode::All)
            .with_paging(2, 2);
        let page = store.get_program_instances(&params).expect("page");
        let uids: Vec<&str> = page.iter().map(|pi| pi.uid.as_str()).collect();
        assert_eq!(uids, vec!["pi2", "pi3"]);

        let all = store
            .get_program_instances(&params.with_skip_paging(true))
            .expect("all");
        assert_eq!(all.len(), 5);
    }

    #[test]
    fn selection_modes_scope_by_hierarchy() {
        let store = InMemoryProgramInstanceStore::new(vec![
            instance("piRoot", OrganisationUnit::new("root", "/root")),
            instance("piDist", OrganisationUnit::new("dist", "/root/dist")),
            instance("piLeaf", OrganisationUnit::new("leaf", "/root/dist/leaf")),
        ]);
        let query = |mode: OrganisationUnitSelectionMode| {
            let params = ProgramInstanceQueryParams::new()
                .with_program(&Program::new("prgA", false))
                .with_organisation_unit("root")
                .with_organisation_unit_mode(mode)
                .with_skip_paging(true);
            store
                .get_program_instances(&params)
                .expect("query")
                .into_iter()
                .map(|pi| pi.uid)
                .collect::<Vec<_>>()
        };

        assert_eq!(query(OrganisationUnitSelectionMode::Selected), vec!["piRoot"]);
        assert_eq!(
            query(OrganisationUnitSelectionMode::Children),
            vec!["piRoot", "piDist"]
        );
        assert_eq!(query(OrganisationUnitSelectionMode::Descendants).len(), 3);
    }

    #[test]
    fn ownership_follows_hierarchy() {
        let pi = instance("pi", OrganisationUnit::new("leaf", "/root/dist/leaf"));
        let manager = OrgUnitOwnershipManager;
        assert!(manager.has_ownership(&User::new("u", "u").with_organisation_unit("dist"), &pi));
        assert!(!manager.has_ownership(&User::new("u", "u").with_organisation_unit("other"), &pi));
    }

    #[test]
    fn read_access_requires_program_sharing() {
        let pi = instance("pi", OrganisationUnit::new("ou1", "/ou1")).deleted(true);
        let user = User::new("u", "u").with_readable_program("prgA");
        let manager = ProgramAccessManager;
        assert!(manager.can_read(&user, &pi, true).is_empty());
        assert_eq!(manager.can_read(&user, &pi, false).len(), 1);
        assert_eq!(manager.can_read(&User::new("x", "x"), &pi, true).len(), 1);
    }
}
