//! Root application module.
//!
//! Contains the main App component, the AppContext definition and
//! application-level setup logic following Leptos conventions.

use leptos::prelude::*;
use leptos_use::use_media_query;

use crate::components::AppRouter;
use crate::config::THEME_STORAGE_KEY;
use crate::models::Theme;
use crate::utils::dom;

stylance::import_crate_style!(css, "src/app.module.css");

// ============================================================================
// AppContext
// ============================================================================

/// Application-wide reactive context.
///
/// Holds only state that is genuinely global to the site. Page-level state
/// (search text, selected category) is owned by each page and passed down
/// explicitly.
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Active color theme.
    pub theme: RwSignal<Theme>,
}

impl AppContext {
    /// Creates the context, restoring the theme from localStorage or the
    /// OS color-scheme preference.
    pub fn new(prefers_dark: bool) -> Self {
        let theme = dom::storage_get(THEME_STORAGE_KEY)
            .and_then(|stored| Theme::parse(&stored))
            .unwrap_or_else(|| Theme::from_prefers_dark(prefers_dark));

        Self {
            theme: RwSignal::new(theme),
        }
    }

    /// Switch between light and dark, persisting the choice.
    pub fn toggle_theme(&self) {
        self.theme.update(|t| *t = t.toggled());
        dom::storage_set(THEME_STORAGE_KEY, self.theme.get_untracked().as_str());
    }
}

/// Root application component with error boundary.
///
/// This component:
/// - Creates and provides the global AppContext
/// - Mirrors the theme onto `<html data-theme>`
/// - Wraps the app in an ErrorBoundary for graceful error handling
/// - Renders the router
#[component]
pub fn App() -> impl IntoView {
    let prefers_dark = use_media_query("(prefers-color-scheme: dark)");
    let ctx = AppContext::new(prefers_dark.get_untracked());
    provide_context(ctx);

    Effect::new(move || {
        dom::set_root_attribute("data-theme", ctx.theme.get().as_str());
    });

    view! {
        <ErrorBoundary
            fallback=|errors| view! {
                <div class=css::fallback>
                    <div class=css::panel>
                        <h1 class=css::title>"Something went wrong"</h1>
                        <p class=css::message>
                            "An unexpected error occurred. Please try reloading the page."
                        </p>
                        <details class=css::details>
                            <summary class=css::summary>"Error details"</summary>
                            <ul class=css::errors>
                                {move || errors.get()
                                    .into_iter()
                                    .map(|(_, e)| view! { <li>{e.to_string()}</li> })
                                    .collect::<Vec<_>>()
                                }
                            </ul>
                        </details>
                        <button
                            class=css::reload
                            on:click=move |_| {
                                if let Some(window) = dom::window() {
                                    let _ = window.location().reload();
                                }
                            }
                        >
                            "Reload Page"
                        </button>
                    </div>
                </div>
            }
        >
            <AppRouter />
        </ErrorBoundary>
    }
}
