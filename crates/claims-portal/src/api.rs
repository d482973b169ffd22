//! HTTP client for the claims backend

use claims_core::{ClaimReceipt, ClaimSubmission, ErrorBody, SubmitError};
use gloo_net::http::Request;

/// Client for the `/api/claims` endpoint.
#[derive(Clone)]
pub struct ClaimsApi {
    base_url: String,
}

impl ClaimsApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self { base_url: base_url.into() }
    }

    /// Client talking to the origin the portal was served from.
    pub fn same_origin() -> Self {
        Self::new("")
    }

    /// POST the claim. Non-ok statuses are turned into [`SubmitError::Rejected`]
    /// carrying whatever `error`/`details` message the body held.
    pub async fn submit_claim(
        &self,
        submission: &ClaimSubmission,
    ) -> Result<ClaimReceipt, SubmitError> {
        let url = format!("{}/api/claims", self.base_url);
        let response = Request::post(&url)
            .header("Content-Type", "application/json")
            .json(submission)
            .map_err(|e| SubmitError::Malformed(e.to_string()))?
            .send()
            .await
            .map_err(|e| SubmitError::Network(e.to_string()))?;

        if response.ok() {
            response
                .json::<ClaimReceipt>()
                .await
                .map_err(|e| SubmitError::Malformed(e.to_string()))
        } else {
            let status = response.status();
            let body = response.json::<ErrorBody>().await.ok();
            Err(SubmitError::rejected(status, body))
        }
    }
}
