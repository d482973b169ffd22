//! Submission state machine and form controller

use crate::draft::{ClaimDraft, ClaimField};
use crate::wire::{ClaimId, ClaimReceipt, ClaimSubmission, SubmitError};

/// Shown when submit is attempted without the brand notification acknowledged.
pub const ACK_REQUIRED_MESSAGE: &str =
    "Please acknowledge the brand-specific notification before submitting.";

/// Where a submission attempt currently stands.
///
/// A tagged state instead of separate booleans and strings, so "submitting
/// with an error showing" and similar combinations cannot be represented.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Submitting,
    Failed(String),
    Succeeded(ClaimId),
}

impl SubmissionStatus {
    pub fn is_submitting(&self) -> bool {
        matches!(self, SubmissionStatus::Submitting)
    }

    /// The banner message, if the last attempt failed.
    pub fn error(&self) -> Option<&str> {
        match self {
            SubmissionStatus::Failed(message) => Some(message),
            _ => None,
        }
    }

    pub fn claim_id(&self) -> Option<&ClaimId> {
        match self {
            SubmissionStatus::Succeeded(id) => Some(id),
            _ => None,
        }
    }
}

/// The whole claim form: draft, acknowledgment flag, and submission status.
///
/// Every operation consumes the form and returns the replacement value; the
/// UI layer holds the current value in a signal and swaps it on each event.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClaimForm {
    draft: ClaimDraft,
    acknowledged: bool,
    status: SubmissionStatus,
}

impl ClaimForm {
    pub fn draft(&self) -> &ClaimDraft {
        &self.draft
    }

    pub fn acknowledged(&self) -> bool {
        self.acknowledged
    }

    pub fn status(&self) -> &SubmissionStatus {
        &self.status
    }

    /// Merge one edited field into the draft.
    #[must_use]
    pub fn edit(mut self, field: ClaimField, value: impl Into<String>) -> Self {
        self.draft = self.draft.with_field(field, value);
        self
    }

    /// Brand reported by the selector child. The value is taken verbatim;
    /// nothing checks it against a known catalog.
    #[must_use]
    pub fn report_brand(self, brand: impl Into<String>) -> Self {
        self.edit(ClaimField::Brand, brand)
    }

    /// Acknowledgment state reported by the selector child.
    #[must_use]
    pub fn report_acknowledgment(mut self, acknowledged: bool) -> Self {
        self.acknowledged = acknowledged;
        self
    }

    /// Whether the submit control should be enabled.
    pub fn can_submit(&self) -> bool {
        self.acknowledged && !self.status.is_submitting()
    }

    /// Gate a submit attempt.
    ///
    /// Returns the payload to POST only when the gate passes; in that case the
    /// status is `Submitting` and any prior error is gone. An unacknowledged
    /// attempt fails with [`ACK_REQUIRED_MESSAGE`] and produces no payload.
    /// An attempt while already in flight is ignored, so a double click
    /// before re-render cannot produce a second request.
    #[must_use]
    pub fn begin_submission(mut self) -> (Self, Option<ClaimSubmission>) {
        if self.status.is_submitting() {
            return (self, None);
        }
        if !self.acknowledged {
            self.status = SubmissionStatus::Failed(ACK_REQUIRED_MESSAGE.to_string());
            return (self, None);
        }
        self.status = SubmissionStatus::Submitting;
        let submission = ClaimSubmission {
            draft: self.draft.clone(),
            notification_acknowledged: true,
        };
        (self, Some(submission))
    }

    /// Record the outcome of the in-flight request. Either way the machine
    /// leaves `Submitting`.
    #[must_use]
    pub fn complete_submission(mut self, result: Result<ClaimReceipt, SubmitError>) -> Self {
        self.status = match result {
            Ok(receipt) => SubmissionStatus::Succeeded(receipt.id),
            Err(err) => SubmissionStatus::Failed(err.user_message()),
        };
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wire::{ErrorBody, GENERIC_SUBMIT_ERROR};

    fn filled_form() -> ClaimForm {
        ClaimForm::default()
            .edit(ClaimField::OrderNumber, "ORD-7")
            .edit(ClaimField::Email, "sam@example.com")
            .edit(ClaimField::Name, "Sam Lee")
            .edit(ClaimField::Address, "9 Elm Rd")
            .edit(ClaimField::PhoneNumber, "+44 20 555 0144")
            .edit(ClaimField::ProblemDescription, "Dead on arrival")
            .report_brand("helios")
    }

    #[test]
    fn unacknowledged_submit_produces_no_payload_and_the_fixed_message() {
        let (form, submission) = filled_form().begin_submission();
        assert!(submission.is_none());
        assert_eq!(form.status().error(), Some(ACK_REQUIRED_MESSAGE));
        assert!(!form.status().is_submitting());
    }

    #[test]
    fn acknowledged_submit_carries_the_current_draft_plus_the_flag() {
        let form = filled_form().report_acknowledgment(true);
        let expected_draft = form.draft().clone();

        let (form, submission) = form.begin_submission();
        let submission = submission.expect("gate should pass");
        assert_eq!(submission.draft, expected_draft);
        assert!(submission.notification_acknowledged);
        assert!(form.status().is_submitting());
        assert_eq!(form.status().error(), None);
    }

    #[test]
    fn beginning_a_submission_clears_a_prior_error() {
        let (form, _) = filled_form().begin_submission();
        assert!(form.status().error().is_some());

        let (form, submission) = form.report_acknowledgment(true).begin_submission();
        assert!(submission.is_some());
        assert_eq!(form.status().error(), None);
    }

    #[test]
    fn a_submit_while_in_flight_is_ignored() {
        let (form, first) = filled_form().report_acknowledgment(true).begin_submission();
        assert!(first.is_some());

        let (form, second) = form.begin_submission();
        assert!(second.is_none());
        assert!(form.status().is_submitting());
    }

    #[test]
    fn success_records_the_returned_claim_id() {
        let (form, _) = filled_form().report_acknowledgment(true).begin_submission();
        let form = form.complete_submission(Ok(ClaimReceipt { id: ClaimId("X".into()) }));
        assert_eq!(form.status().claim_id(), Some(&ClaimId("X".into())));
        assert_eq!(form.status().error(), None);
        assert!(!form.status().is_submitting());
    }

    #[test]
    fn a_rejection_surfaces_the_server_message_and_returns_to_idle_failure() {
        let (form, _) = filled_form().report_acknowledgment(true).begin_submission();
        let form = form.complete_submission(Err(SubmitError::rejected(
            409,
            Some(ErrorBody { error: Some("Duplicate order".into()), details: None }),
        )));
        assert_eq!(form.status().error(), Some("Duplicate order"));
        assert!(!form.status().is_submitting());
        assert!(form.can_submit(), "form must stay interactive after a failure");
    }

    #[test]
    fn a_transport_failure_surfaces_its_message_or_the_generic_fallback() {
        let (form, _) = filled_form().report_acknowledgment(true).begin_submission();
        let failed = form.clone().complete_submission(Err(SubmitError::Network(String::new())));
        assert_eq!(failed.status().error(), Some(GENERIC_SUBMIT_ERROR));

        let failed = form.complete_submission(Err(SubmitError::Network("Failed to fetch".into())));
        assert_eq!(failed.status().error(), Some("Failed to fetch"));
    }

    #[test]
    fn submit_control_enabled_exactly_when_acknowledged_and_not_in_flight() {
        let form = filled_form();
        assert!(!form.can_submit(), "unacknowledged");

        let form = form.report_acknowledgment(true);
        assert!(form.can_submit());

        let (form, _) = form.begin_submission();
        assert!(!form.can_submit(), "in flight");

        let form = form.complete_submission(Err(SubmitError::Network("down".into())));
        assert!(form.can_submit(), "failure is recoverable");
    }

    #[test]
    fn changing_brand_resets_nothing_but_the_brand_field() {
        let form = filled_form().report_acknowledgment(true).report_brand("cascade");
        assert_eq!(form.draft().brand, "cascade");
        assert_eq!(form.draft().email, "sam@example.com");
        // The acknowledgment reset on brand change is the selector child's
        // job; the controller records exactly what is reported.
        assert!(form.acknowledged());
    }
}
