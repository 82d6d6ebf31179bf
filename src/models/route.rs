//! Hash-based routing (static-hosting friendly).
//!
//! URL format:
//! - `#/` home
//! - `#/blog` or `#/blog?category=<label>` post index
//! - `#/blog/<slug>` post detail
//! - `#/about` about page
//! - anything else is [`AppRoute::NotFound`]

use crate::utils::dom;

/// Application routes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AppRoute {
    /// Landing page: `#/` or empty hash
    Home,
    /// Post index, optionally preselecting a category
    Blog { category: Option<String> },
    /// Post detail by slug
    Post { slug: String },
    About,
    /// Unrecognized path (without the leading `#/`)
    NotFound { path: String },
}

impl AppRoute {
    /// Post index without a preselected category.
    pub fn blog() -> Self {
        Self::Blog { category: None }
    }

    /// Parse a URL hash into a route.
    pub fn from_hash(hash: &str) -> Self {
        let trimmed = hash.trim_start_matches('#').trim_start_matches('/');
        let (path, query) = match trimmed.split_once('?') {
            Some((path, query)) => (path, Some(query)),
            None => (trimmed, None),
        };
        let path = path.trim_end_matches('/');

        let mut segments = path.split('/');
        match (segments.next(), segments.next(), segments.next()) {
            (Some(""), None, None) => Self::Home,
            (Some("blog"), None, None) => Self::Blog {
                category: query.and_then(|q| query_param(q, "category")),
            },
            (Some("blog"), Some(slug), None) if !slug.is_empty() => Self::Post {
                slug: slug.to_string(),
            },
            (Some("about"), None, None) => Self::About,
            _ => Self::NotFound {
                path: trimmed.to_string(),
            },
        }
    }

    /// Convert the route to a URL hash.
    pub fn to_hash(&self) -> String {
        match self {
            Self::Home => "#/".to_string(),
            Self::Blog { category: None } => "#/blog".to_string(),
            Self::Blog {
                category: Some(category),
            } => format!("#/blog?category={}", category),
            Self::Post { slug } => format!("#/blog/{}", slug),
            Self::About => "#/about".to_string(),
            Self::NotFound { path } => format!("#/{}", path),
        }
    }

    /// Whether this route belongs to the post section (index or detail).
    pub fn is_blog(&self) -> bool {
        matches!(self, Self::Blog { .. } | Self::Post { .. })
    }

    /// Get the current route from the browser URL.
    pub fn current() -> Self {
        Self::from_hash(&dom::get_hash())
    }
}

/// Value of `key` in a `a=b&c=d` query string. Empty values count as absent.
fn query_param(query: &str, key: &str) -> Option<String> {
    query
        .split('&')
        .filter_map(|pair| pair.split_once('='))
        .find(|(k, v)| *k == key && !v.is_empty())
        .map(|(_, v)| v.to_string())
}
