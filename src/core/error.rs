//! Custom error types for the application.
//!
//! - [`CatalogError`] - Post catalog loading and precondition failures
//! - [`AnimationParseError`] - Unknown reveal animation tag

use thiserror::Error;

/// Errors raised by the post catalog.
///
/// A missing slug is not an error; lookups return `Option` instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    /// An operation that needs at least one post ran on an empty catalog.
    #[error("post catalog is empty")]
    Empty,
    /// The bundled post manifest could not be parsed.
    #[error("invalid post manifest: {0}")]
    Manifest(String),
    /// Two posts share the same id.
    #[error("duplicate post id {0}")]
    DuplicateId(u32),
    /// Two posts share the same slug.
    #[error("duplicate post slug '{0}'")]
    DuplicateSlug(String),
    /// A slug contains characters outside `[a-z0-9-]`.
    #[error("slug '{0}' is not URL-safe")]
    InvalidSlug(String),
}

impl From<toml::de::Error> for CatalogError {
    fn from(err: toml::de::Error) -> Self {
        Self::Manifest(err.message().to_string())
    }
}

/// Unknown animation tag (expected one of `fade-up`, `fade-down`,
/// `fade-left`, `fade-right`, `scale`, `rotate`).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown animation '{0}'")]
pub struct AnimationParseError(pub String);
