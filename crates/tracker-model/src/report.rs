//! Validation error reports.
//!
//! A [`TrackerErrorReport`] identifies one violated rule instance: a stable
//! [`TrackerErrorCode`] plus the ordered UIDs needed to render its message.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::enums::TrackerType;
use crate::persisted::Identifiable;

/// Machine-readable error codes emitted by validation hooks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum TrackerErrorCode {
    /// Tracked entity already has an active enrollment.
    E1015,
    /// Tracked entity already has an active or completed enrollment in a
    /// program that only allows one enrollment.
    E1016,
    /// Tracked entity referenced by the enrollment could not be found.
    E1068,
    /// Program referenced by the enrollment could not be found.
    E1069,
    /// Organisation unit referenced by the enrollment could not be found.
    E1070,
}

impl TrackerErrorCode {
    pub fn code(&self) -> &'static str {
        match self {
            Self::E1015 => "E1015",
            Self::E1016 => "E1016",
            Self::E1068 => "E1068",
            Self::E1069 => "E1069",
            Self::E1070 => "E1070",
        }
    }

    /// Message template; `{n}` is replaced by the n-th report argument.
    pub fn template(&self) -> &'static str {
        match self {
            Self::E1015 => "TrackedEntityInstance: `{0}`, already has an active enrollment in program `{1}`.",
            Self::E1016 => {
                "TrackedEntityInstance: `{0}`, already has an active enrollment in program: `{1}`, \
                 and this program only allows enrolling one time."
            }
            Self::E1068 => "Could not find TrackedEntityInstance: `{0}`, linked to Enrollment.",
            Self::E1069 => "Could not find Program: `{0}`, linked to Enrollment.",
            Self::E1070 => "Could not find OrganisationUnit: `{0}`, linked to Enrollment.",
        }
    }

    /// Parse a code such as `"E1016"`.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_uppercase().as_str() {
            "E1015" => Some(Self::E1015),
            "E1016" => Some(Self::E1016),
            "E1068" => Some(Self::E1068),
            "E1069" => Some(Self::E1069),
            "E1070" => Some(Self::E1070),
            _ => None,
        }
    }
}

impl fmt::Display for TrackerErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// One violated rule instance for one bundle record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackerErrorReport {
    pub error_code: TrackerErrorCode,
    /// Contextual arguments (entity UIDs), in template order.
    pub args: Vec<String>,
    pub tracker_type: TrackerType,
    /// UID of the record the report is attributed to.
    pub uid: String,
    /// 1-based position of the record in the bundle.
    pub line_number: usize,
    /// Hook that produced the report.
    pub validation_hook: String,
}

impl TrackerErrorReport {
    /// Start a report for `error_code`. Record context is filled in by the
    /// reporter when the report is added.
    pub fn builder(error_code: TrackerErrorCode) -> TrackerErrorReportBuilder {
        TrackerErrorReportBuilder {
            error_code,
            args: Vec::new(),
        }
    }

    /// Render the code's template with this report's arguments.
    pub fn message(&self) -> String {
        let mut message = self.error_code.template().to_string();
        for (index, arg) in self.args.iter().enumerate() {
            message = message.replace(&format!("{{{index}}}"), arg);
        }
        message
    }
}

/// Accumulates the code and arguments of a report before it is attributed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackerErrorReportBuilder {
    error_code: TrackerErrorCode,
    args: Vec<String>,
}

impl TrackerErrorReportBuilder {
    /// Append a plain argument.
    #[must_use]
    pub fn add_arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    /// Append the UID of an entity.
    #[must_use]
    pub fn add_uid(mut self, entity: &impl Identifiable) -> Self {
        self.args.push(entity.uid().to_string());
        self
    }

    pub fn error_code(&self) -> TrackerErrorCode {
        self.error_code
    }

    /// Attach record context and produce the final report.
    pub fn build(
        self,
        tracker_type: TrackerType,
        uid: impl Into<String>,
        line_number: usize,
        validation_hook: impl Into<String>,
    ) -> TrackerErrorReport {
        TrackerErrorReport {
            error_code: self.error_code,
            args: self.args,
            tracker_type,
            uid: uid.into(),
            line_number,
            validation_hook: validation_hook.into(),
        }
    }
}
