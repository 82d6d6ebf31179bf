//! Core logic, independent of the DOM.
//!
//! This module provides:
//! - [`catalog`] post filtering, featured selection and slug lookup
//! - [`reveal`] viewport reveal state and animation variants
//! - [`error`] error types

pub mod catalog;
pub mod error;
pub mod reveal;

pub use catalog::{FilterState, combined_filter, featured, find_by_slug, load_catalog};
pub use error::CatalogError;
pub use reveal::{
    Animation, IntersectionCallback, IntersectionSource, RevealMode, RevealTiming, Subscription,
    observe_with,
};
