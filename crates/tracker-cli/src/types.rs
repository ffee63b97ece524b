use std::path::PathBuf;

use tracker_model::ImportStrategy;
use tracker_validate::TrackerValidationReport;

#[derive(Debug)]
pub struct ValidateResult {
    pub fixture: PathBuf,
    pub import_strategy: ImportStrategy,
    pub enrollments: usize,
    pub report: TrackerValidationReport,
}

impl ValidateResult {
    pub fn has_errors(&self) -> bool {
        self.report.has_errors()
    }
}
