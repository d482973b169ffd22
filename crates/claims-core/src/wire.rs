//! Wire contract for `POST /api/claims`

use crate::draft::ClaimDraft;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Fallback when a rejection carries no usable message.
pub const SUBMIT_FAILED_FALLBACK: &str = "Failed to submit claim";

/// Fallback when a transport or parse failure carries no message of its own.
pub const GENERIC_SUBMIT_ERROR: &str =
    "An error occurred while submitting the claim. Please try again.";

/// Identifier assigned to a claim by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClaimId(pub String);

impl std::fmt::Display for ClaimId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Request body: the draft plus the acknowledgment flag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClaimSubmission {
    #[serde(flatten)]
    pub draft: ClaimDraft,
    pub notification_acknowledged: bool,
}

/// Success body. The backend may send more fields; only `id` matters here.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ClaimReceipt {
    pub id: ClaimId,
}

/// Optional error body on a non-ok response.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ErrorBody {
    pub error: Option<String>,
    pub details: Option<String>,
}

impl ErrorBody {
    /// Server-provided message, `error` winning over `details`.
    pub fn message(&self) -> Option<&str> {
        self.error.as_deref().or(self.details.as_deref())
    }
}

/// Why a submission attempt failed after passing the local gate.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SubmitError {
    /// The server answered with a non-ok status.
    #[error("claim rejected with status {status}")]
    Rejected { status: u16, message: Option<String> },

    /// The request never completed.
    #[error("network error: {0}")]
    Network(String),

    /// The response body could not be parsed.
    #[error("malformed response: {0}")]
    Malformed(String),
}

impl SubmitError {
    /// Build a rejection from a status and whatever error body was readable.
    pub fn rejected(status: u16, body: Option<ErrorBody>) -> Self {
        SubmitError::Rejected {
            status,
            message: body.as_ref().and_then(|b| b.message()).map(str::to_owned),
        }
    }

    /// The message shown in the form's error banner.
    pub fn user_message(&self) -> String {
        match self {
            SubmitError::Rejected { message: Some(m), .. } if !m.is_empty() => m.clone(),
            SubmitError::Rejected { .. } => SUBMIT_FAILED_FALLBACK.to_string(),
            SubmitError::Network(m) | SubmitError::Malformed(m) if !m.is_empty() => m.clone(),
            SubmitError::Network(_) | SubmitError::Malformed(_) => {
                GENERIC_SUBMIT_ERROR.to_string()
            }
        }
    }
}
