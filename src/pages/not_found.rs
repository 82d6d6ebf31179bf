use leptos::prelude::*;
use leptos_icons::Icon;

use crate::components::icons as ic;
use crate::models::AppRoute;

stylance::import_crate_style!(css, "src/pages/not_found.module.css");

/// Fallback for unrecognized hashes.
#[component]
pub fn NotFoundPage(path: String) -> impl IntoView {
    view! {
        <div class=css::wrap>
            <p class=css::code>"404"</p>
            <h1 class=css::title>"Page not found"</h1>
            <p class=css::path>{format!("/{}", path)}</p>
            <a class=css::home href=AppRoute::Home.to_hash()>
                <Icon icon=ic::ARROW_LEFT />
                "Back home"
            </a>
        </div>
    }
}
