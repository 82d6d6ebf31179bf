//! Landing page: hero, featured story and the filterable grid.

use leptos::prelude::*;
use leptos_icons::Icon;

use super::{PostGrid, css as grid_css};
use crate::components::filters::{FilterBar, FilterSignals};
use crate::components::icons as ic;
use crate::components::post_card::PostMeta;
use crate::components::reveal::ScrollReveal;
use crate::config::{SITE_NAME, SITE_TAGLINE, image_width};
use crate::core::{Animation, CatalogError, FilterState, RevealMode, featured};
use crate::data::posts;
use crate::models::{AppRoute, Post};

stylance::import_crate_style!(css, "src/pages/home.module.css");

/// Posts for the grid below the featured story.
#[derive(Clone, Debug, PartialEq)]
struct HomeGrid<'a> {
    /// Filter matches other than the featured post, in catalog order.
    posts: Vec<&'a Post>,
    /// Whether the featured post itself matches the filters.
    featured_matches: bool,
}

/// Apply `state` and drop the featured post (by id) wherever it lands in
/// the matches.
fn grid_posts<'a>(state: &FilterState, posts: &'a [Post]) -> HomeGrid<'a> {
    let featured_id = featured(posts).ok().map(|p| p.id);
    let (matched_featured, others): (Vec<&Post>, Vec<&Post>) = state
        .apply(posts)
        .into_iter()
        .partition(|p| Some(p.id) == featured_id);

    HomeGrid {
        posts: others,
        featured_matches: !matched_featured.is_empty(),
    }
}

/// Placeholder text for an empty grid.
fn empty_message(featured_matches: bool) -> &'static str {
    if featured_matches {
        "No other articles match your criteria."
    } else {
        "No articles found matching your criteria."
    }
}

#[component]
pub fn HomePage() -> impl IntoView {
    let filters = FilterSignals::new(FilterState::default());
    let grid = Memo::new(move |_| grid_posts(&filters.snapshot(), posts()));
    let visible = Memo::new(move |_| grid.with(|g| g.posts.clone()));
    let empty = Signal::derive(move || grid.with(|g| empty_message(g.featured_matches)).to_string());

    view! {
        <section class=css::hero>
            <div class=css::heroInner>
                <ScrollReveal animation=Animation::FadeDown mode=RevealMode::Repeat>
                    <h1 class=css::title>{SITE_NAME}</h1>
                </ScrollReveal>
                <ScrollReveal animation=Animation::FadeUp delay=200>
                    <p class=css::tagline>{SITE_TAGLINE}</p>
                </ScrollReveal>
                <ScrollReveal animation=Animation::FadeUp delay=400>
                    <a class=css::cta href=AppRoute::blog().to_hash()>
                        "Explore Tales"
                        <Icon icon=ic::ARROW_RIGHT />
                    </a>
                </ScrollReveal>
            </div>
        </section>

        <section class=grid_css::section>
            {featured_story()}
        </section>

        <section class=grid_css::section>
            <ScrollReveal animation=Animation::FadeUp>
                <h2 class=grid_css::heading>"Latest Articles"</h2>
            </ScrollReveal>
            <FilterBar filters=filters />
            <PostGrid posts=visible empty=empty filters=Some(filters) />
        </section>
    }
}

/// The featured story block; an empty catalog propagates to the error boundary.
fn featured_story() -> Result<impl IntoView, CatalogError> {
    let post = featured(posts())?;

    Ok(view! {
        <ScrollReveal animation=Animation::Scale delay=1000>
            <a class=css::featured href=post.route().to_hash()>
                <div class=css::featuredMedia>
                    <img
                        class=css::featuredImage
                        src=post.image_url(image_width::FEATURED)
                        alt=post.title.clone()
                    />
                </div>
                <div class=css::featuredBody>
                    <span class=css::featuredLabel>"Featured Story"</span>
                    <span class=css::badge>{post.category.clone()}</span>
                    <h2 class=css::featuredTitle>{post.title.clone()}</h2>
                    <p class=css::featuredDescription>{post.description.clone()}</p>
                    <PostMeta post=post />
                    <span class=css::readMore>
                        "Read Story"
                        <Icon icon=ic::ARROW_RIGHT />
                    </span>
                </div>
            </a>
        </ScrollReveal>
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn post(id: u32, title: &str, category: &str) -> Post {
        Post {
            id,
            title: title.to_string(),
            description: String::new(),
            author: "Ada Lovelace".to_string(),
            date: "Dec 1, 2024".to_string(),
            read_time: "5 min read".to_string(),
            category: category.to_string(),
            image: "photo".to_string(),
            slug: format!("post-{}", id),
            content: String::new(),
        }
    }

    fn catalog() -> Vec<Post> {
        vec![
            post(1, "Scaling React", "Frontend"),
            post(2, "Microservices", "Backend"),
            post(3, "Realtime React Apps", "Frontend"),
            post(4, "Queues", "Backend"),
        ]
    }

    fn ids(grid: &HomeGrid<'_>) -> Vec<u32> {
        grid.posts.iter().map(|p| p.id).collect()
    }

    #[test]
    fn test_grid_excludes_featured() {
        let posts = catalog();
        let grid = grid_posts(&FilterState::default(), &posts);
        assert_eq!(ids(&grid), vec![2, 3, 4]);
        assert!(grid.featured_matches);
    }

    #[test]
    fn test_grid_when_only_featured_matches() {
        let posts = catalog();
        let grid = grid_posts(&FilterState::new("Frontend", "scaling"), &posts);
        assert!(grid.posts.is_empty());
        assert!(grid.featured_matches);
        assert_eq!(empty_message(grid.featured_matches), "No other articles match your criteria.");
    }

    #[test]
    fn test_grid_keeps_first_match_when_not_featured() {
        let posts = catalog();
        let grid = grid_posts(&FilterState::new("Backend", ""), &posts);
        assert_eq!(ids(&grid), vec![2, 4]);
        assert!(!grid.featured_matches);
    }

    #[test]
    fn test_grid_with_no_matches() {
        let posts = catalog();
        let grid = grid_posts(&FilterState::new("Tools", ""), &posts);
        assert!(grid.posts.is_empty());
        assert!(!grid.featured_matches);
        assert_eq!(empty_message(grid.featured_matches), "No articles found matching your criteria.");
    }
}
