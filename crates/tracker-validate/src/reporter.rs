//! Per-hook accumulator of error reports.

use tracker_model::{Enrollment, TrackerErrorReport, TrackerErrorReportBuilder, TrackerType};

/// Collects the reports of one hook over one bundle.
///
/// `increment` marks the record currently being processed; every report
/// added afterwards is attributed to that record. A reporter is created for
/// a single hook invocation and consumed by [`into_report_list`].
///
/// [`into_report_list`]: ValidationErrorReporter::into_report_list
#[derive(Debug)]
pub struct ValidationErrorReporter {
    hook_name: &'static str,
    tracker_type: TrackerType,
    line_number: usize,
    current_uid: String,
    reports: Vec<TrackerErrorReport>,
}

impl ValidationErrorReporter {
    pub fn new(hook_name: &'static str) -> Self {
        Self {
            hook_name,
            tracker_type: TrackerType::Enrollment,
            line_number: 0,
            current_uid: String::new(),
            reports: Vec::new(),
        }
    }

    /// Mark the start of processing `enrollment`.
    pub fn increment(&mut self, enrollment: &Enrollment) {
        self.line_number += 1;
        self.tracker_type = TrackerType::Enrollment;
        self.current_uid.clone_from(&enrollment.enrollment);
    }

    /// Attribute a report to the most recently incremented record.
    pub fn add_error(&mut self, builder: TrackerErrorReportBuilder) {
        let report = builder.build(
            self.tracker_type,
            self.current_uid.clone(),
            self.line_number,
            self.hook_name,
        );
        self.reports.push(report);
    }

    /// Number of records processed so far.
    pub fn line_number(&self) -> usize {
        self.line_number
    }

    pub fn has_errors(&self) -> bool {
        !self.reports.is_empty()
    }

    pub fn report_list(&self) -> &[TrackerErrorReport] {
        &self.reports
    }

    pub fn into_report_list(self) -> Vec<TrackerErrorReport> {
        self.reports
    }
}
