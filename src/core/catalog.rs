//! Post discovery: category and search filtering, featured selection, and
//! slug lookup over the fixed post collection.
//!
//! All queries borrow the collection and return references in original
//! collection order. Nothing here mutates or re-sorts posts.

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;
use serde::Deserialize;

use super::error::CatalogError;
use crate::config::ALL_CATEGORIES;
use crate::models::Post;

static SLUG_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z0-9]+(?:-[a-z0-9]+)*$").expect("valid slug regex"));

/// Posts whose category equals `category`, or every post for `"All"`.
///
/// Unknown categories are not validated here; they simply match nothing.
pub fn filter_by_category<'a>(posts: &'a [Post], category: &str) -> Vec<&'a Post> {
    posts
        .iter()
        .filter(|post| matches_category(post, category))
        .collect()
}

/// Posts whose title or description contains `query`, ignoring case.
///
/// An empty query matches everything. Whitespace is not trimmed.
#[allow(dead_code)]
pub fn filter_by_search<'a>(posts: &'a [Post], query: &str) -> Vec<&'a Post> {
    let needle = query.to_lowercase();
    posts
        .iter()
        .filter(|post| matches_search(post, &needle))
        .collect()
}

/// Posts matching both the category and the search query.
pub fn combined_filter<'a>(posts: &'a [Post], category: &str, query: &str) -> Vec<&'a Post> {
    let needle = query.to_lowercase();
    filter_by_category(posts, category)
        .into_iter()
        .filter(|post| matches_search(post, &needle))
        .collect()
}

/// The featured post, which is the first post of the collection.
pub fn featured(posts: &[Post]) -> Result<&Post, CatalogError> {
    posts.first().ok_or(CatalogError::Empty)
}

/// Look up a post by slug. `None` means the URL points nowhere.
pub fn find_by_slug<'a>(posts: &'a [Post], slug: &str) -> Option<&'a Post> {
    posts.iter().find(|post| post.slug == slug)
}

/// Distinct categories in first-appearance order.
#[allow(dead_code)]
pub fn categories(posts: &[Post]) -> Vec<&str> {
    let mut seen = HashSet::new();
    posts
        .iter()
        .map(|post| post.category.as_str())
        .filter(|category| seen.insert(*category))
        .collect()
}

fn matches_category(post: &Post, category: &str) -> bool {
    category == ALL_CATEGORIES || post.category == category
}

/// `needle` must already be lowercased.
fn matches_search(post: &Post, needle: &str) -> bool {
    needle.is_empty()
        || post.title.to_lowercase().contains(needle)
        || post.description.to_lowercase().contains(needle)
}

// =============================================================================
// Filter State
// =============================================================================

/// Category + search selection owned by a page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FilterState {
    pub selected_category: String,
    pub search_query: String,
}

impl FilterState {
    pub fn new(category: impl Into<String>, query: impl Into<String>) -> Self {
        Self {
            selected_category: category.into(),
            search_query: query.into(),
        }
    }

    /// Run [`combined_filter`] with this state.
    pub fn apply<'a>(&self, posts: &'a [Post]) -> Vec<&'a Post> {
        combined_filter(posts, &self.selected_category, &self.search_query)
    }

    /// Whether both fields are at their defaults.
    pub fn is_default(&self) -> bool {
        self.selected_category == ALL_CATEGORIES && self.search_query.is_empty()
    }

    /// Restore both fields to their defaults.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

impl Default for FilterState {
    fn default() -> Self {
        Self::new(ALL_CATEGORIES, "")
    }
}

// =============================================================================
// Manifest Loading
// =============================================================================

#[derive(Deserialize)]
struct Manifest {
    #[serde(default, rename = "post")]
    posts: Vec<Post>,
}

/// Parse and validate a TOML post manifest (`[[post]]` tables).
///
/// Rejects an empty collection, duplicate ids or slugs, and slugs that
/// are not lowercase kebab-case.
pub fn load_catalog(source: &str) -> Result<Vec<Post>, CatalogError> {
    let manifest: Manifest = toml::from_str(source)?;
    if manifest.posts.is_empty() {
        return Err(CatalogError::Empty);
    }

    let mut ids = HashSet::new();
    let mut slugs = HashSet::new();
    for post in &manifest.posts {
        if !SLUG_PATTERN.is_match(&post.slug) {
            return Err(CatalogError::InvalidSlug(post.slug.clone()));
        }
        if !ids.insert(post.id) {
            return Err(CatalogError::DuplicateId(post.id));
        }
        if !slugs.insert(post.slug.as_str()) {
            return Err(CatalogError::DuplicateSlug(post.slug.clone()));
        }
    }

    Ok(manifest.posts)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn post(id: u32, title: &str, description: &str, category: &str, slug: &str) -> Post {
        Post {
            id,
            title: title.to_string(),
            description: description.to_string(),
            author: "Author".to_string(),
            date: "Dec 1, 2024".to_string(),
            read_time: "5 min read".to_string(),
            category: category.to_string(),
            image: "photo".to_string(),
            slug: slug.to_string(),
            content: String::new(),
        }
    }

    fn sample_posts() -> Vec<Post> {
        vec![
            post(1, "Building Scalable React Applications", "Patterns for large apps", "Frontend", "scalable-react"),
            post(2, "Node.js Microservices", "From monolith to services", "Backend", "node-microservices"),
            post(3, "Docker and Kubernetes", "Containers end to end", "DevOps", "docker-kubernetes"),
            post(4, "From Junior to Senior", "Lessons from five years", "Career", "junior-to-senior"),
            post(5, "Essential VS Code Extensions", "Boost your productivity", "Tools", "vscode-extensions"),
            post(6, "Real-Time Apps with WebSockets", "Live features in the browser", "Frontend", "websockets"),
        ]
    }

    fn ids(posts: &[&Post]) -> Vec<u32> {
        posts.iter().map(|p| p.id).collect()
    }

    #[test]
    fn test_filter_by_category() {
        let posts = sample_posts();

        assert_eq!(ids(&filter_by_category(&posts, "Frontend")), vec![1, 6]);
        assert_eq!(ids(&filter_by_category(&posts, "Career")), vec![4]);
        assert_eq!(filter_by_category(&posts, "All").len(), posts.len());
        for category in ["Frontend", "Backend", "DevOps", "Career", "Tools"] {
            assert!(
                filter_by_category(&posts, category)
                    .iter()
                    .all(|p| p.category == category)
            );
        }
    }

    #[test]
    fn test_unknown_category_is_empty() {
        let posts = sample_posts();
        assert!(filter_by_category(&posts, "Cooking").is_empty());
        // Category matching is exact, not case-folded
        assert!(filter_by_category(&posts, "frontend").is_empty());
    }

    #[test]
    fn test_filter_by_search() {
        let posts = sample_posts();

        assert_eq!(ids(&filter_by_search(&posts, "react")), vec![1]);
        assert_eq!(ids(&filter_by_search(&posts, "REACT")), vec![1]);
        // Description match
        assert_eq!(ids(&filter_by_search(&posts, "monolith")), vec![2]);
        assert_eq!(filter_by_search(&posts, "").len(), posts.len());
        assert!(filter_by_search(&posts, "haskell").is_empty());
    }

    #[test]
    fn test_search_partitions_posts() {
        let posts = sample_posts();
        for query in ["s", "apps", "from", "xyz", "e"] {
            let needle = query.to_lowercase();
            let found = filter_by_search(&posts, query);
            for p in &posts {
                let hit = p.title.to_lowercase().contains(&needle)
                    || p.description.to_lowercase().contains(&needle);
                assert_eq!(found.iter().any(|f| f.id == p.id), hit, "query {query:?}");
            }
        }
    }

    #[test]
    fn test_whitespace_query_is_literal() {
        let posts = sample_posts();
        // Single space matches any multi-word title or description
        assert_eq!(filter_by_search(&posts, " ").len(), posts.len());
        // Three spaces appear nowhere
        assert!(filter_by_search(&posts, "   ").is_empty());
    }

    #[test]
    fn test_combined_filter() {
        let posts = sample_posts();

        assert_eq!(ids(&combined_filter(&posts, "Frontend", "")), vec![1, 6]);
        assert_eq!(ids(&combined_filter(&posts, "All", "react")), vec![1]);
        assert_eq!(ids(&combined_filter(&posts, "Frontend", "websockets")), vec![6]);
        assert!(combined_filter(&posts, "Backend", "react").is_empty());
    }

    #[test]
    fn test_combined_filter_is_ordered_intersection() {
        let posts = sample_posts();
        for category in ["All", "Frontend", "Tools", "Nope"] {
            for query in ["", "a", "from", "react"] {
                let by_category = ids(&filter_by_category(&posts, category));
                let by_search = ids(&filter_by_search(&posts, query));
                let expected: Vec<u32> = by_category
                    .into_iter()
                    .filter(|id| by_search.contains(id))
                    .collect();
                assert_eq!(ids(&combined_filter(&posts, category, query)), expected);
            }
        }
    }

    #[test]
    fn test_featured() {
        let posts = sample_posts();
        assert_eq!(featured(&posts).map(|p| p.id), Ok(1));
        assert_eq!(featured(&[]), Err(CatalogError::Empty));
    }

    #[test]
    fn test_find_by_slug() {
        let posts = sample_posts();
        for p in &posts {
            assert_eq!(find_by_slug(&posts, &p.slug), Some(p));
        }
        assert_eq!(find_by_slug(&posts, "nonexistent-slug"), None);
    }

    #[test]
    fn test_categories_first_appearance() {
        let posts = sample_posts();
        assert_eq!(
            categories(&posts),
            vec!["Frontend", "Backend", "DevOps", "Career", "Tools"]
        );
    }

    #[test]
    fn test_filter_state() {
        let posts = sample_posts();
        let mut state = FilterState::default();
        assert!(state.is_default());
        assert_eq!(state.apply(&posts).len(), posts.len());

        state.selected_category = "Frontend".to_string();
        state.search_query = "real".to_string();
        assert!(!state.is_default());
        assert_eq!(ids(&state.apply(&posts)), vec![6]);

        state.reset();
        assert_eq!(state, FilterState::default());
    }

    #[test]
    fn test_load_catalog() {
        let source = r#"
            [[post]]
            id = 1
            title = "First"
            description = "One"
            author = "A"
            date = "Dec 1, 2024"
            read_time = "1 min read"
            category = "Tools"
            image = "photo-1"
            slug = "first-post"
            content = "Hello"

            [[post]]
            id = 2
            title = "Second"
            description = "Two"
            author = "B"
            date = "Dec 2, 2024"
            read_time = "2 min read"
            category = "Career"
            image = "photo-2"
            slug = "second-post"
            content = "World"
        "#;

        let posts = load_catalog(source).unwrap();
        assert_eq!(posts.len(), 2);
        assert_eq!(posts[1].slug, "second-post");
    }

    #[test]
    fn test_load_catalog_rejects_bad_manifests() {
        let entry = |id: u32, slug: &str| {
            format!(
                "[[post]]\nid = {id}\ntitle = \"T\"\ndescription = \"D\"\nauthor = \"A\"\n\
                 date = \"d\"\nread_time = \"r\"\ncategory = \"Tools\"\nimage = \"i\"\n\
                 slug = \"{slug}\"\ncontent = \"c\"\n"
            )
        };

        assert_eq!(load_catalog(""), Err(CatalogError::Empty));
        assert_eq!(
            load_catalog(&format!("{}{}", entry(1, "a"), entry(1, "b"))),
            Err(CatalogError::DuplicateId(1))
        );
        assert_eq!(
            load_catalog(&format!("{}{}", entry(1, "a"), entry(2, "a"))),
            Err(CatalogError::DuplicateSlug("a".to_string()))
        );
        assert_eq!(
            load_catalog(&entry(1, "Not A Slug")),
            Err(CatalogError::InvalidSlug("Not A Slug".to_string()))
        );
        assert!(matches!(
            load_catalog("[[post]]\nid = 1\n"),
            Err(CatalogError::Manifest(_))
        ));
    }
}
