//! Blog post record.

use serde::Deserialize;

use super::AppRoute;
use crate::config::IMAGE_CDN;

/// An immutable blog post.
///
/// `slug` is the only key used for routing and lookup; `id` is stable but
/// never appears in URLs.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Post {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub author: String,
    /// Display date, rendered verbatim.
    pub date: String,
    /// Display read time (e.g. "8 min read").
    pub read_time: String,
    pub category: String,
    /// Image identifier on the CDN.
    pub image: String,
    pub slug: String,
    /// Markdown body.
    pub content: String,
}

impl Post {
    /// CDN URL for the post image, cropped to `width` pixels.
    pub fn image_url(&self, width: u32) -> String {
        format!(
            "{}/{}?auto=format&fit=crop&w={}&q=80",
            IMAGE_CDN, self.image, width
        )
    }

    /// Route of this post's detail page.
    pub fn route(&self) -> AppRoute {
        AppRoute::Post {
            slug: self.slug.clone(),
        }
    }
}
