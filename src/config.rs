//! Application configuration.
//!
//! Centralizes all configuration constants used throughout the application.
//! Post content is loaded at compile time using `include_str!`.

// =============================================================================
// Content Assets (loaded at compile time)
// =============================================================================

/// Post manifest (metadata + Markdown bodies).
pub const POSTS_MANIFEST: &str = include_str!("../assets/posts.toml");

// =============================================================================
// Site Metadata
// =============================================================================

/// Site name shown in the navbar, hero and footer.
pub const SITE_NAME: &str = "Tech & Tales";

/// Hero tagline.
pub const SITE_TAGLINE: &str = "Where technology meets storytelling. Discover insights, tutorials, and stories from the world of software development.";

/// Short blurb used in the footer brand column.
pub const SITE_BLURB: &str = "Your go-to destination for technology insights, development tutorials, and career stories from the software engineering world.";

/// Footer copyright line.
pub const COPYRIGHT: &str = "\u{a9} 2024 Tech & Tales. All rights reserved.";

/// Contact address for the about page.
pub const CONTACT_EMAIL: &str = "hello@techandtales.dev";

// =============================================================================
// Catalog Configuration
// =============================================================================

/// Sentinel category that disables category filtering.
pub const ALL_CATEGORIES: &str = "All";

/// Category labels rendered in the filter bar (sentinel first).
pub const CATEGORIES: &[&str] = &[ALL_CATEGORIES, "Frontend", "Backend", "DevOps", "Career", "Tools"];

// =============================================================================
// Image Configuration
// =============================================================================

/// Base URL of the remote image CDN. Post `image` fields are identifiers under it.
pub const IMAGE_CDN: &str = "https://images.unsplash.com";

/// Requested image widths per rendering context (pixels).
pub mod image_width {
    /// Grid cards.
    pub const CARD: u32 = 400;
    /// Featured story on the landing page.
    pub const FEATURED: u32 = 800;
    /// Hero image on the post page.
    pub const ARTICLE: u32 = 1200;
}

// =============================================================================
// UI Configuration
// =============================================================================

/// Scroll offset (pixels) after which the navbar switches to its solid style.
pub const NAV_SCROLL_THRESHOLD: f64 = 20.0;

/// localStorage key for the color theme preference.
pub const THEME_STORAGE_KEY: &str = "theme";

/// Reveal animation defaults (milliseconds).
pub mod reveal {
    /// Default delay before the reveal animation starts.
    pub const DEFAULT_DELAY_MS: u32 = 0;
    /// Default animation duration.
    pub const DEFAULT_DURATION_MS: u32 = 600;
    /// Delay increment between consecutive cards in a grid.
    pub const GRID_STAGGER_MS: u32 = 100;
    /// Delay increment between category filter chips.
    pub const CHIP_STAGGER_MS: u32 = 50;
}

/// Icon theme selection.
///
/// Available themes:
/// - `Bootstrap` - Familiar, slightly bolder
/// - `Lucide` - Minimal, thin strokes (default)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[allow(dead_code)]
pub enum IconTheme {
    Bootstrap,
    #[default]
    Lucide,
}

/// Current icon theme used throughout the application.
pub const ICON_THEME: IconTheme = IconTheme::Lucide;
