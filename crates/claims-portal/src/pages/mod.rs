//! Portal pages

mod claim;
mod status;

pub use claim::ClaimFormPage;
pub use status::StatusPage;
