//! Bundled site content.
//!
//! - [`posts`] - The post catalog, parsed once from the embedded manifest
//! - [`TEAM`], [`MISSION`] - About page content

mod about;

use std::sync::OnceLock;

pub use about::{MISSION, TEAM};

use crate::config::POSTS_MANIFEST;
use crate::core::load_catalog;
use crate::models::Post;
use crate::utils::log;

static CATALOG: OnceLock<Vec<Post>> = OnceLock::new();

/// All posts, in publication order (newest first).
///
/// A malformed manifest is logged and yields an empty catalog; pages then
/// surface [`crate::core::CatalogError::Empty`] through the error boundary.
pub fn posts() -> &'static [Post] {
    CATALOG.get_or_init(|| {
        load_catalog(POSTS_MANIFEST).unwrap_or_else(|err| {
            log::error(&format!("failed to load post catalog: {}", err));
            Vec::new()
        })
    })
}
