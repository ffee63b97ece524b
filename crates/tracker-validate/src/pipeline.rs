//! Ordered execution of validation hooks over a bundle.
//!
//! Hooks run strictly sequentially in ascending [`order`], each with its own
//! reporter. The pipeline concatenates their report lists, preserving hook
//! order and then record order within a hook.
//!
//! # Example
//!
//! ```ignore
//! use tracker_validate::{build_default_pipeline, ValidationConfig};
//!
//! let pipeline = build_default_pipeline(&services, &ValidationConfig::default());
//! let report = pipeline.validate(&bundle)?;
//! ```
//!
//! [`order`]: TrackerValidationHook::order

use serde::Serialize;
use tracker_model::{Result, TrackerErrorReport};

use crate::bundle::TrackerBundle;
use crate::config::ValidationConfig;
use crate::hooks::{
    EnrollmentExistingEnrollmentsHook, EnrollmentReferencesHook, TrackerValidationHook,
};
use crate::services::TrackerServices;

/// Outcome of one hook within a validation pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HookSummary {
    pub hook: String,
    pub order: i32,
    pub skipped: bool,
    pub error_count: usize,
}

/// Aggregated result of a validation pass.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TrackerValidationReport {
    pub error_reports: Vec<TrackerErrorReport>,
    pub hooks: Vec<HookSummary>,
}

impl TrackerValidationReport {
    pub fn has_errors(&self) -> bool {
        !self.error_reports.is_empty()
    }

    pub fn error_count(&self) -> usize {
        self.error_reports.len()
    }

    /// Reports attributed to the record with `uid`.
    pub fn reports_for<'a>(&'a self, uid: &'a str) -> impl Iterator<Item = &'a TrackerErrorReport> {
        self.error_reports
            .iter()
            .filter(move |report| report.uid == uid)
    }

    pub fn into_error_reports(self) -> Vec<TrackerErrorReport> {
        self.error_reports
    }
}

/// An ordered pipeline of validation hooks.
pub struct ValidationPipeline {
    hooks: Vec<Box<dyn TrackerValidationHook>>,
}

impl Default for ValidationPipeline {
    fn default() -> Self {
        Self::new()
    }
}

impl ValidationPipeline {
    /// Create an empty pipeline.
    pub fn new() -> Self {
        Self { hooks: Vec::new() }
    }

    /// Add a hook, keeping hooks sorted by order. Hooks with equal order
    /// keep insertion order.
    pub fn add_hook(mut self, hook: Box<dyn TrackerValidationHook>) -> Self {
        let index = self
            .hooks
            .partition_point(|existing| existing.order() <= hook.order());
        self.hooks.insert(index, hook);
        self
    }

    /// Remove a hook by name.
    pub fn remove_hook(mut self, hook_name: &str) -> Self {
        self.hooks.retain(|h| h.hook_name() != hook_name);
        self
    }

    /// List hook names in execution order.
    pub fn hook_names(&self) -> Vec<&str> {
        self.hooks.iter().map(|h| h.hook_name()).collect()
    }

    /// (name, order) pairs in execution order.
    pub fn hook_orders(&self) -> Vec<(&str, i32)> {
        self.hooks
            .iter()
            .map(|h| (h.hook_name(), h.order()))
            .collect()
    }

    /// Run every hook over the bundle.
    ///
    /// # Errors
    ///
    /// The first exceptional hook failure aborts the pass; no partial report
    /// is returned.
    pub fn validate(&self, bundle: &TrackerBundle) -> Result<TrackerValidationReport> {
        let mut report = TrackerValidationReport::default();
        let strategy = bundle.import_strategy();

        for hook in &self.hooks {
            let span = tracing::debug_span!(
                "validation_hook",
                hook = hook.hook_name(),
                order = hook.order()
            );
            let _enter = span.enter();

            if strategy.is_delete() && hook.skip_on_delete() {
                tracing::debug!("Skipping hook for DELETE import");
                report.hooks.push(HookSummary {
                    hook: hook.hook_name().to_string(),
                    order: hook.order(),
                    skipped: true,
                    error_count: 0,
                });
                continue;
            }

            let reports = hook.validate(bundle).inspect_err(|error| {
                tracing::error!(%error, "Validation hook failed");
            })?;

            tracing::debug!(
                records = bundle.enrollments().len(),
                errors = reports.len(),
                "Validation hook finished"
            );
            report.hooks.push(HookSummary {
                hook: hook.hook_name().to_string(),
                order: hook.order(),
                skipped: false,
                error_count: reports.len(),
            });
            report.error_reports.extend(reports);
        }

        Ok(report)
    }

    /// Run every hook and return only the concatenated report list.
    pub fn run(&self, bundle: &TrackerBundle) -> Result<Vec<TrackerErrorReport>> {
        self.validate(bundle)
            .map(TrackerValidationReport::into_error_reports)
    }
}

/// Build the default enrollment validation pipeline.
///
/// 1. Reference resolution (order 3)
/// 2. Existing-enrollment conflicts (order 103)
pub fn build_default_pipeline(
    services: &TrackerServices,
    config: &ValidationConfig,
) -> ValidationPipeline {
    ValidationPipeline::new()
        .add_hook(Box::new(EnrollmentReferencesHook::new()))
        .add_hook(Box::new(EnrollmentExistingEnrollmentsHook::new(
            services,
            config.conflict_check.clone(),
        )))
}
