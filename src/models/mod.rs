//! Data models and types for the application.
//!
//! Contains domain types for:
//! - [`Post`] - Immutable blog post record
//! - [`AppRoute`] - Hash-based navigation
//! - [`Theme`] - Light/dark color theme
//! - [`TeamMember`], [`MissionPillar`] - About page content

mod about;
mod post;
mod route;
mod theme;

pub use about::{MissionPillar, TeamMember};
pub use post::Post;
pub use route::AppRoute;
pub use theme::Theme;
