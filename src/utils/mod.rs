//! Utility modules for DOM access, logging and formatting.
//!
//! Provides:
//! - [`dom`] - Window, storage, scroll and hash helpers
//! - [`log`] - Console logging
//! - [`format`] - Display formatting (initials, stagger delays)
//! - [`markdown_to_html`] - Markdown rendering with XSS sanitization

pub mod dom;
pub mod format;
pub mod log;
mod markdown;

pub use markdown::markdown_to_html;
