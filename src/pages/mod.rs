//! Top-level pages, one per [`AppRoute`](crate::models::AppRoute) variant.

mod about;
mod blog;
mod home;
mod not_found;
mod post;

pub use about::AboutPage;
pub use blog::BlogPage;
pub use home::HomePage;
pub use not_found::NotFoundPage;
pub use post::PostPage;

use leptos::prelude::*;

use crate::components::filters::{EmptyState, FilterSignals};
use crate::components::post_card::PostCard;
use crate::models::Post;

stylance::import_crate_style!(css, "src/pages/pages.module.css");

/// Responsive card grid with a placeholder for an empty result.
#[component]
fn PostGrid(
    #[prop(into)] posts: Signal<Vec<&'static Post>>,
    #[prop(into)] empty: Signal<String>,
    #[prop(default = None)] filters: Option<FilterSignals>,
) -> impl IntoView {
    view! {
        <Show
            when=move || posts.with(|p| !p.is_empty())
            fallback=move || view! { <EmptyState message=empty.get() filters=filters /> }
        >
            <div class=css::grid>
                <For
                    each=move || posts.get().into_iter().enumerate()
                    key=|(_, post)| post.id
                    children=|(index, post)| view! { <PostCard post=post index=index /> }
                />
            </div>
        </Show>
    }
}
