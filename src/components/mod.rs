//! UI components.
//!
//! Page-independent building blocks; full pages live in `crate::pages`.

pub mod filters;
pub mod footer;
pub mod icons;
pub mod navbar;
pub mod post_card;
pub mod reveal;
pub mod router;

pub use router::AppRouter;
