//! Warranty Claims Domain Core
//!
//! This crate provides the domain model for the claims portal frontend:
//! the in-progress claim draft, the submission state machine that gates the
//! single `/api/claims` POST, the wire types for that contract, and the
//! static brand catalog with each brand's notification text.
//!
//! Everything here is pure and platform-independent; the WASM/UI layer lives
//! in `claims-portal`.

pub mod brands;
pub mod draft;
pub mod submit;
pub mod wire;

pub use brands::{brand_catalog, notice_for, Brand};
pub use draft::{ClaimDraft, ClaimField};
pub use submit::{ClaimForm, SubmissionStatus, ACK_REQUIRED_MESSAGE};
pub use wire::{ClaimId, ClaimReceipt, ClaimSubmission, ErrorBody, SubmitError};
