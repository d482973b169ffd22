//! Shared components

mod brand;
mod nav;

pub use brand::BrandSelector;
pub use nav::Nav;
