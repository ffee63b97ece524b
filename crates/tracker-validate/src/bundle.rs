//! The import unit handed to the validation pipeline.
//!
//! A [`TrackerBundle`] is immutable once submitted: hooks only ever see it
//! through a shared reference.

use std::collections::BTreeMap;

use tracker_model::{
    Enrollment, ImportStrategy, OrganisationUnit, Program, TrackedEntityInstance, User,
};

/// Reference entities resolved ahead of validation, plus the acting user.
#[derive(Debug, Clone, Default)]
pub struct TrackerPreheat {
    user: User,
    programs: BTreeMap<String, Program>,
    organisation_units: BTreeMap<String, OrganisationUnit>,
    tracked_entities: BTreeMap<String, TrackedEntityInstance>,
}

impl TrackerPreheat {
    pub fn new(user: User) -> Self {
        Self {
            user,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_program(mut self, program: Program) -> Self {
        self.programs.insert(program.uid.clone(), program);
        self
    }

    #[must_use]
    pub fn with_organisation_unit(mut self, org_unit: OrganisationUnit) -> Self {
        self.organisation_units.insert(org_unit.uid.clone(), org_unit);
        self
    }

    #[must_use]
    pub fn with_tracked_entity(mut self, tei: TrackedEntityInstance) -> Self {
        self.tracked_entities.insert(tei.uid.clone(), tei);
        self
    }

    pub fn user(&self) -> &User {
        &self.user
    }

    pub fn program(&self, uid: Option<&str>) -> Option<&Program> {
        uid.and_then(|uid| self.programs.get(uid))
    }

    pub fn organisation_unit(&self, uid: Option<&str>) -> Option<&OrganisationUnit> {
        uid.and_then(|uid| self.organisation_units.get(uid))
    }

    pub fn tracked_entity(&self, uid: Option<&str>) -> Option<&TrackedEntityInstance> {
        uid.and_then(|uid| self.tracked_entities.get(uid))
    }
}

/// A batch of enrollments submitted together for import.
#[derive(Debug, Clone, Default)]
pub struct TrackerBundle {
    import_strategy: ImportStrategy,
    enrollments: Vec<Enrollment>,
    preheat: TrackerPreheat,
}

impl TrackerBundle {
    pub fn new(
        import_strategy: ImportStrategy,
        enrollments: Vec<Enrollment>,
        preheat: TrackerPreheat,
    ) -> Self {
        Self {
            import_strategy,
            enrollments,
            preheat,
        }
    }

    pub fn import_strategy(&self) -> ImportStrategy {
        self.import_strategy
    }

    pub fn enrollments(&self) -> &[Enrollment] {
        &self.enrollments
    }

    pub fn preheat(&self) -> &TrackerPreheat {
        &self.preheat
    }

    /// The user performing the import.
    pub fn user(&self) -> &User {
        self.preheat.user()
    }

    pub fn program_of(&self, enrollment: &Enrollment) -> Option<&Program> {
        self.preheat.program(enrollment.program.as_deref())
    }

    pub fn organisation_unit_of(&self, enrollment: &Enrollment) -> Option<&OrganisationUnit> {
        self.preheat
            .organisation_unit(enrollment.org_unit.as_deref())
    }

    pub fn tracked_entity_of(&self, enrollment: &Enrollment) -> Option<&TrackedEntityInstance> {
        self.preheat
            .tracked_entity(enrollment.tracked_entity_instance.as_deref())
    }
}
