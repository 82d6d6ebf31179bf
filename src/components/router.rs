//! Application router component.
//!
//! Handles URL-based routing with hash history so the site can be served
//! from any static host. Uses native hashchange events instead of
//! leptos_router for true hash routing.
//!
//! # Architecture
//!
//! - **URL hash is the source of truth**: the active page is derived from `#/path`
//! - **Navbar and Footer never re-render on navigation**
//! - **Pages are rebuilt per route**, so page-owned filter state starts fresh

use leptos::prelude::*;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::Closure;

use crate::components::footer::Footer;
use crate::components::navbar::Navbar;
use crate::models::AppRoute;
use crate::pages::{AboutPage, BlogPage, HomePage, NotFoundPage, PostPage};
use crate::utils::{dom, log};

stylance::import_crate_style!(css, "src/components/router.module.css");

/// Context for reading the current route from any component.
#[derive(Clone, Copy)]
pub struct RouteContext(pub Memo<AppRoute>);

/// Main application router.
///
/// - `#/` → Home
/// - `#/blog` → Post index (optionally `?category=<label>`)
/// - `#/blog/<slug>` → Post detail
/// - `#/about` → About
/// - anything else → Not found
#[component]
pub fn AppRouter() -> impl IntoView {
    // Create route signal from current URL hash
    let route = RwSignal::new(AppRoute::current());

    // Set up hashchange event listener (runs once on mount)
    #[cfg(target_arch = "wasm32")]
    {
        use wasm_bindgen::JsCast;
        let closure = Closure::wrap(Box::new(move || {
            route.set(AppRoute::current());
        }) as Box<dyn Fn()>);

        if let Some(window) = web_sys::window() {
            let _ = window
                .add_event_listener_with_callback("hashchange", closure.as_ref().unchecked_ref());
        }

        // Keep the closure alive for the lifetime of the app
        closure.forget();
    }

    let route_memo = Memo::new(move |_| route.get());
    provide_context(RouteContext(route_memo));

    // New page starts at the top
    Effect::new(move |prev: Option<AppRoute>| {
        let current = route_memo.get();
        if prev.is_some() {
            log::debug(&format!("navigate {}", current.to_hash()));
            dom::scroll_to_top();
        }
        current
    });

    view! {
        <div class=css::layout>
            <Navbar />
            <main class=css::main>
                {move || match route_memo.get() {
                    AppRoute::Home => view! { <HomePage /> }.into_any(),
                    AppRoute::Blog { category } => view! { <BlogPage category=category /> }.into_any(),
                    AppRoute::Post { slug } => view! { <PostPage slug=slug /> }.into_any(),
                    AppRoute::About => view! { <AboutPage /> }.into_any(),
                    AppRoute::NotFound { path } => view! { <NotFoundPage path=path /> }.into_any(),
                }}
            </main>
            <Footer />
        </div>
    }
}
