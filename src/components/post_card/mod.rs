//! Post summary card used by the landing and index grids.

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::components::icons as ic;
use crate::components::reveal::ScrollReveal;
use crate::config::image_width;
use crate::config::reveal::GRID_STAGGER_MS;
use crate::core::Animation;
use crate::models::Post;
use crate::utils::format::stagger;

stylance::import_crate_style!(css, "src/components/post_card/post_card.module.css");

/// A clickable card summarizing `post`. `index` is the card's position in
/// its grid and staggers the reveal.
#[component]
pub fn PostCard(post: &'static Post, #[prop(optional)] index: usize) -> impl IntoView {
    view! {
        <ScrollReveal animation=Animation::FadeUp delay=stagger(0, index, GRID_STAGGER_MS)>
            <a class=css::card href=post.route().to_hash()>
                <div class=css::media>
                    <img
                        class=css::image
                        src=post.image_url(image_width::CARD)
                        alt=post.title.clone()
                        loading="lazy"
                    />
                    <span class=css::badge>{post.category.clone()}</span>
                </div>
                <div class=css::body>
                    <h3 class=css::title>{post.title.clone()}</h3>
                    <p class=css::description>{post.description.clone()}</p>
                    <PostMeta post=post />
                </div>
            </a>
        </ScrollReveal>
    }
}

/// Author, date and read time line.
#[component]
pub fn PostMeta(post: &'static Post) -> impl IntoView {
    view! {
        <div class=css::meta>
            <span class=css::metaItem>
                <Icon icon=ic::USER />
                {post.author.clone()}
            </span>
            <span class=css::metaItem>
                <Icon icon=ic::CALENDAR />
                {post.date.clone()}
            </span>
            <span class=css::metaItem>
                <Icon icon=ic::CLOCK />
                {post.read_time.clone()}
            </span>
        </div>
    }
}
