//! Post index with filters, reachable with a preselected category.

use leptos::prelude::*;

use super::{PostGrid, css as grid_css};
use crate::components::filters::{FilterBar, FilterSignals};
use crate::components::reveal::ScrollReveal;
use crate::config::{ALL_CATEGORIES, CATEGORIES};
use crate::core::{Animation, FilterState};
use crate::data::posts;
use crate::models::Post;
use crate::utils::format::count_label;
use crate::utils::log;

stylance::import_crate_style!(css, "src/pages/blog.module.css");

/// Resolve a `?category=` value against the known labels (case-insensitive).
fn initial_category(requested: Option<&str>) -> &'static str {
    let Some(requested) = requested else {
        return ALL_CATEGORIES;
    };
    match CATEGORIES
        .iter()
        .find(|label| label.eq_ignore_ascii_case(requested))
    {
        Some(label) => label,
        None => {
            log::warn(&format!("unknown category '{}', showing all", requested));
            ALL_CATEGORIES
        }
    }
}

#[component]
pub fn BlogPage(category: Option<String>) -> impl IntoView {
    let filters = FilterSignals::new(FilterState::new(
        initial_category(category.as_deref()),
        "",
    ));

    let visible = Memo::new(move |_| {
        filters
            .snapshot()
            .apply(posts())
            .into_iter()
            .collect::<Vec<&'static Post>>()
    });

    let summary = move || {
        format!(
            "Showing {} of {}",
            visible.with(Vec::len),
            count_label(posts().len(), "post")
        )
    };

    view! {
        <section class=css::header>
            <ScrollReveal animation=Animation::FadeDown>
                <h1 class=css::title>"All Tales"</h1>
            </ScrollReveal>
            <ScrollReveal animation=Animation::FadeUp delay=200>
                <p class=css::subtitle>
                    "Tutorials, deep dives and career stories from the software world."
                </p>
            </ScrollReveal>
        </section>

        <section class=grid_css::section>
            <FilterBar filters=filters />
            <p class=css::summary>{summary}</p>
            <PostGrid
                posts=visible
                empty="No articles found matching your criteria.".to_string()
                filters=Some(filters)
            />
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_category() {
        assert_eq!(initial_category(None), ALL_CATEGORIES);
        assert_eq!(initial_category(Some("DevOps")), "DevOps");
        assert_eq!(initial_category(Some("frontend")), "Frontend");
        assert_eq!(initial_category(Some("Gardening")), ALL_CATEGORIES);
    }
}
