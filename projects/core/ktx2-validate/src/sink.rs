//! Diagnostic delivery: bound reports, counters and the warnings-as-errors
//! policy.

use crate::issues::{Issue, IssueId, Severity};
use core::fmt;
use thiserror::Error;

/// A bound diagnostic, delivered to the report callback exactly once per
/// detection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationReport {
    pub severity: Severity,
    pub id: IssueId,
    pub message: &'static str,
    pub details: String,
}

/// Token signalling that a fatal diagnostic has been delivered and validation
/// must unwind to the orchestrator. The report itself has already reached the
/// sink when this value is created.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("validation aborted by a fatal diagnostic")]
pub(crate) struct FatalIssue;

/// Wraps the caller-supplied report callback.
pub(crate) struct DiagnosticSink<F> {
    callback: F,
    treat_warnings_as_errors: bool,
    num_error: u32,
    num_warning: u32,
}

impl<F: FnMut(&ValidationReport)> DiagnosticSink<F> {
    pub fn new(treat_warnings_as_errors: bool, callback: F) -> Self {
        Self {
            callback,
            treat_warnings_as_errors,
            num_error: 0,
            num_warning: 0,
        }
    }

    pub fn error_count(&self) -> u32 {
        self.num_error
    }

    #[cfg(test)]
    pub fn warning_count(&self) -> u32 {
        self.num_warning
    }

    /// Dispatches a warning, re-stamped to error severity when the
    /// warnings-as-errors policy is active. The catalog entry is unchanged;
    /// only the outgoing report is re-stamped.
    pub fn warning(&mut self, issue: &Issue, args: &[&dyn fmt::Display]) {
        debug_assert_eq!(issue.severity, Severity::Warning);
        let severity = if self.treat_warnings_as_errors {
            self.num_error += 1;
            Severity::Error
        } else {
            self.num_warning += 1;
            Severity::Warning
        };
        self.dispatch(severity, issue, args);
    }

    pub fn error(&mut self, issue: &Issue, args: &[&dyn fmt::Display]) {
        debug_assert_eq!(issue.severity, Severity::Error);
        self.num_error += 1;
        self.dispatch(Severity::Error, issue, args);
    }

    /// Dispatches a fatal report and returns the unwind token for the caller
    /// to propagate.
    #[must_use]
    pub fn fatal(&mut self, issue: &Issue, args: &[&dyn fmt::Display]) -> FatalIssue {
        debug_assert_eq!(issue.severity, Severity::Fatal);
        self.num_error += 1;
        self.dispatch(Severity::Fatal, issue, args);
        FatalIssue
    }

    fn dispatch(&mut self, severity: Severity, issue: &Issue, args: &[&dyn fmt::Display]) {
        let report = ValidationReport {
            severity,
            id: issue.id,
            message: issue.message,
            details: issue.render_details(args),
        };
        (self.callback)(&report);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::issues;
    use std::cell::RefCell;

    fn collect_into(reports: &RefCell<Vec<ValidationReport>>) -> impl FnMut(&ValidationReport) + '_ {
        move |report| reports.borrow_mut().push(report.clone())
    }

    #[test]
    fn errors_and_warnings_are_counted_separately() {
        let reports = RefCell::new(Vec::new());
        let mut sink = DiagnosticSink::new(false, collect_into(&reports));

        sink.warning(&issues::metadata::KTX_WRITER_MISSING, &[]);
        sink.error(&issues::header::WIDTH_ZERO, &[]);
        sink.error(&issues::header::INVALID_FACE_COUNT, &[&0u32]);

        assert_eq!(sink.warning_count(), 1);
        assert_eq!(sink.error_count(), 2);
        assert_eq!(reports.borrow().len(), 3);
    }

    #[test]
    fn warnings_as_errors_restamps_severity_but_keeps_the_id() {
        let reports = RefCell::new(Vec::new());
        let mut sink = DiagnosticSink::new(true, collect_into(&reports));

        sink.warning(&issues::metadata::KTX_WRITER_MISSING, &[]);

        assert_eq!(sink.error_count(), 1);
        assert_eq!(sink.warning_count(), 0);
        let report = &reports.borrow()[0];
        assert_eq!(report.severity, Severity::Error);
        assert_eq!(report.id, issues::metadata::KTX_WRITER_MISSING.id);
    }

    #[test]
    fn fatal_is_delivered_before_the_unwind_token_is_returned() {
        let reports = RefCell::new(Vec::new());
        let mut sink = DiagnosticSink::new(false, collect_into(&reports));

        let _token = sink.fatal(&issues::file::NOT_KTX2, &[]);

        assert_eq!(sink.error_count(), 1);
        let report = &reports.borrow()[0];
        assert_eq!(report.severity, Severity::Fatal);
        assert_eq!(report.id, 2001);
    }
}
