//! Top navigation bar.
//!
//! Transparent over the hero, solid once the page scrolls past
//! `NAV_SCROLL_THRESHOLD`. Collapses into a toggle menu on small screens.

use leptos::{ev, prelude::*};
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::footer::NEWSLETTER_ANCHOR;
use crate::components::icons as ic;
use crate::components::router::RouteContext;
use crate::config::{NAV_SCROLL_THRESHOLD, SITE_NAME};
use crate::models::{AppRoute, Theme};
use crate::utils::dom;

stylance::import_crate_style!(css, "src/components/navbar/navbar.module.css");

/// A navbar destination.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum NavItem {
    Home,
    Tales,
    About,
}

impl NavItem {
    const ALL: [NavItem; 3] = [Self::Home, Self::Tales, Self::About];

    fn label(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Tales => "Tales",
            Self::About => "About",
        }
    }

    fn route(self) -> AppRoute {
        match self {
            Self::Home => AppRoute::Home,
            Self::Tales => AppRoute::blog(),
            Self::About => AppRoute::About,
        }
    }

    fn is_active(self, route: &AppRoute) -> bool {
        match self {
            Self::Home => *route == AppRoute::Home,
            Self::Tales => route.is_blog(),
            Self::About => *route == AppRoute::About,
        }
    }
}

#[component]
pub fn Navbar() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");
    let route_ctx = use_context::<RouteContext>().expect("RouteContext must be provided");

    let (scrolled, set_scrolled) = signal(dom::scroll_y() > NAV_SCROLL_THRESHOLD);
    let scroll_listener = window_event_listener(ev::scroll, move |_| {
        set_scrolled.set(dom::scroll_y() > NAV_SCROLL_THRESHOLD);
    });
    on_cleanup(move || scroll_listener.remove());

    let (menu_open, set_menu_open) = signal(false);

    // Close the mobile menu whenever the route changes
    Effect::new(move || {
        route_ctx.0.track();
        set_menu_open.set(false);
    });

    let nav_class = move || {
        if scrolled.get() || menu_open.get() {
            format!("{} {}", css::nav, css::solid)
        } else {
            css::nav.to_string()
        }
    };

    let link_class = move |item: NavItem| {
        move || {
            if route_ctx.0.with(|r| item.is_active(r)) {
                format!("{} {}", css::link, css::active)
            } else {
                css::link.to_string()
            }
        }
    };

    let theme_toggle = move || {
        let title = match ctx.theme.get() {
            Theme::Light => "Switch to dark theme",
            Theme::Dark => "Switch to light theme",
        };
        view! {
            <button
                class=css::iconButton
                on:click=move |_| ctx.toggle_theme()
                title=title
                aria-label=title
            >
                {match ctx.theme.get() {
                    Theme::Light => view! { <Icon icon=ic::MOON /> }.into_any(),
                    Theme::Dark => view! { <Icon icon=ic::SUN /> }.into_any(),
                }}
            </button>
        }
    };

    view! {
        <nav class=nav_class>
            <div class=css::inner>
                <a href=AppRoute::Home.to_hash() class=css::brand>{SITE_NAME}</a>

                // Desktop navigation
                <div class=css::links>
                    {NavItem::ALL
                        .into_iter()
                        .map(|item| view! {
                            <a href=item.route().to_hash() class=link_class(item)>{item.label()}</a>
                        })
                        .collect_view()}
                    {theme_toggle}
                    <button
                        class=css::subscribe
                        on:click=move |_| dom::scroll_to_element(NEWSLETTER_ANCHOR)
                    >
                        "Subscribe"
                    </button>
                </div>

                // Mobile controls
                <div class=css::mobileControls>
                    {theme_toggle}
                    <button
                        class=css::iconButton
                        on:click=move |_| set_menu_open.update(|open| *open = !*open)
                        aria-label="Toggle menu"
                        aria-expanded=move || menu_open.get().to_string()
                    >
                        {move || if menu_open.get() {
                            view! { <Icon icon=ic::CLOSE /> }.into_any()
                        } else {
                            view! { <Icon icon=ic::MENU /> }.into_any()
                        }}
                    </button>
                </div>
            </div>

            <Show when=move || menu_open.get()>
                <div class=css::mobileMenu>
                    {NavItem::ALL
                        .into_iter()
                        .map(|item| view! {
                            <a
                                href=item.route().to_hash()
                                class=css::mobileLink
                                on:click=move |_| set_menu_open.set(false)
                            >
                                {item.label()}
                            </a>
                        })
                        .collect_view()}
                </div>
            </Show>
        </nav>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_active_item() {
        let post = AppRoute::Post {
            slug: "x".to_string(),
        };
        assert!(NavItem::Tales.is_active(&post));
        assert!(!NavItem::Home.is_active(&post));
        assert!(NavItem::Home.is_active(&AppRoute::Home));
        assert!(NavItem::About.is_active(&AppRoute::About));

        let active: Vec<_> = NavItem::ALL
            .into_iter()
            .filter(|item| item.is_active(&AppRoute::blog()))
            .collect();
        assert_eq!(active, vec![NavItem::Tales]);
    }
}
