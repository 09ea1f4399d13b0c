//! Validation Engine
//!
//! Shared types for change validators: severities, errors and the aggregated report.

use serde::Serialize;

use crate::change::Change;
use crate::element::ElemId;

/// Severity of a change error
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Severity {
    Error,
    Warning,
    Info,
}

/// A structured report about one offending element in a proposed deployment
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangeError {
    pub elem_id: ElemId,
    pub severity: Severity,
    pub message: String,
    pub detailed_message: String,
}

impl ChangeError {
    pub fn error(elem_id: ElemId, message: String, detailed_message: String) -> Self {
        Self {
            elem_id,
            severity: Severity::Error,
            message,
            detailed_message,
        }
    }

    pub fn warning(elem_id: ElemId, message: String, detailed_message: String) -> Self {
        Self {
            elem_id,
            severity: Severity::Warning,
            message,
            detailed_message,
        }
    }
}

/// A change validation rule.
///
/// Rules are pure: they borrow the changes, never mutate them, and report
/// everything through the returned errors.
pub type ChangeValidator = fn(&[Change]) -> Vec<ChangeError>;

/// Errors collected from every validator that ran
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct ValidationReport {
    pub errors: Vec<ChangeError>,
}

impl ValidationReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn extend(&mut self, errors: Vec<ChangeError>) {
        self.errors.extend(errors);
    }

    /// Any `Error` severity blocks the deployment; warnings and info don't
    pub fn has_blocking_errors(&self) -> bool {
        self.errors.iter().any(|e| e.severity == Severity::Error)
    }

    pub fn count(&self, severity: Severity) -> usize {
        self.errors.iter().filter(|e| e.severity == severity).count()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn into_errors(self) -> Vec<ChangeError> {
        self.errors
    }
}
