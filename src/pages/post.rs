//! Post detail page.

use leptos::prelude::*;
use leptos_icons::Icon;

use super::{PostGrid, css as grid_css};
use crate::components::icons as ic;
use crate::components::post_card::PostMeta;
use crate::components::reveal::ScrollReveal;
use crate::config::image_width;
use crate::core::{Animation, combined_filter, find_by_slug};
use crate::data::posts;
use crate::models::{AppRoute, Post};
use crate::utils::format::initials;
use crate::utils::{dom, log, markdown_to_html};

stylance::import_crate_style!(css, "src/pages/post.module.css");

/// Up to this many related posts are listed under an article.
const RELATED_LIMIT: usize = 3;

/// Other posts in the same category, in catalog order.
fn related(post: &Post) -> Vec<&'static Post> {
    combined_filter(posts(), &post.category, "")
        .into_iter()
        .filter(|other| other.id != post.id)
        .take(RELATED_LIMIT)
        .collect()
}

#[component]
pub fn PostPage(slug: String) -> impl IntoView {
    match find_by_slug(posts(), &slug) {
        Some(post) => view! { <Article post=post /> }.into_any(),
        None => {
            log::warn(&format!("no post with slug '{}'", slug));
            view! { <MissingPost /> }.into_any()
        }
    }
}

#[component]
fn Article(post: &'static Post) -> impl IntoView {
    let html = markdown_to_html(&post.content);
    let more = related(post);
    let has_more = !more.is_empty();

    view! {
        <article class=css::article>
            <ScrollReveal animation=Animation::FadeRight>
                <a class=css::back href=AppRoute::blog().to_hash()>
                    <Icon icon=ic::ARROW_LEFT />
                    "Back to all tales"
                </a>
            </ScrollReveal>

            <header class=css::header>
                <ScrollReveal animation=Animation::FadeUp>
                    <span class=css::badge>{post.category.clone()}</span>
                    <h1 class=css::title>{post.title.clone()}</h1>
                    <p class=css::description>{post.description.clone()}</p>
                    <div class=css::headerRow>
                        <PostMeta post=post />
                        <PostActions post=post />
                    </div>
                </ScrollReveal>
            </header>

            <ScrollReveal animation=Animation::Scale delay=200>
                <img
                    class=css::image
                    src=post.image_url(image_width::ARTICLE)
                    alt=post.title.clone()
                />
            </ScrollReveal>

            <div class=css::markdown inner_html=html />

            <ScrollReveal animation=Animation::FadeUp>
                <div class=css::author>
                    <div class=css::avatar>{initials(&post.author)}</div>
                    <div>
                        <p class=css::authorLabel>"Written by"</p>
                        <p class=css::authorName>{post.author.clone()}</p>
                    </div>
                </div>
            </ScrollReveal>
        </article>

        {has_more.then(move || view! {
            <section class=grid_css::section>
                <h2 class=grid_css::heading>{format!("More in {}", post.category)}</h2>
                <PostGrid posts=more empty=String::new() />
            </section>
        })}
    }
}

/// `mailto:` link sharing a post. Both parts must already be URI-encoded.
fn share_href(encoded_title: &str, encoded_url: &str) -> String {
    format!("mailto:?subject={}&body={}", encoded_title, encoded_url)
}

/// Save and share buttons. Saving is local to the page view.
#[component]
fn PostActions(post: &'static Post) -> impl IntoView {
    let (saved, set_saved) = signal(false);

    let encode = |s: &str| String::from(js_sys::encode_uri_component(s));
    let href = share_href(&encode(&post.title), &encode(&dom::current_url()));

    view! {
        <div class=css::actions>
            <button
                class=css::action
                aria-pressed=move || saved.get().to_string()
                on:click=move |_| set_saved.update(|s| *s = !*s)
            >
                {move || if saved.get() {
                    view! { <Icon icon=ic::BOOKMARKED /> }.into_any()
                } else {
                    view! { <Icon icon=ic::BOOKMARK /> }.into_any()
                }}
                <span class=css::actionLabel>{move || if saved.get() { "Saved" } else { "Save" }}</span>
            </button>
            <a class=css::action href=href>
                <Icon icon=ic::SHARE />
                <span class=css::actionLabel>"Share"</span>
            </a>
        </div>
    }
}

#[component]
fn MissingPost() -> impl IntoView {
    view! {
        <div class=css::missing>
            <h1 class=css::title>"Post not found"</h1>
            <p class=css::description>"The article you're looking for doesn't exist or has moved."</p>
            <a class=css::back href=AppRoute::blog().to_hash()>
                <Icon icon=ic::ARROW_LEFT />
                "Back to all tales"
            </a>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_related_excludes_self() {
        let post = find_by_slug(posts(), "building-scalable-react-applications").unwrap();
        let more = related(post);
        assert!(!more.is_empty());
        assert!(more.iter().all(|p| p.id != post.id));
        assert!(more.iter().all(|p| p.category == post.category));
        assert!(more.len() <= RELATED_LIMIT);
    }

    #[test]
    fn test_share_href() {
        assert_eq!(
            share_href("Docker%20Basics", "https%3A%2F%2Fexample.com%2F%23%2Fblog%2Fdocker"),
            "mailto:?subject=Docker%20Basics&body=https%3A%2F%2Fexample.com%2F%23%2Fblog%2Fdocker"
        );
    }
}
