//! Site footer: brand, quick links, category shortcuts and newsletter form.

use leptos::{ev, prelude::*};
use leptos_icons::Icon;

use crate::components::icons as ic;
use crate::config::{ALL_CATEGORIES, CATEGORIES, COPYRIGHT, SITE_BLURB, SITE_NAME};
use crate::models::AppRoute;

stylance::import_crate_style!(css, "src/components/footer/footer.module.css");

/// Element id of the newsletter block, used as a scroll target.
pub const NEWSLETTER_ANCHOR: &str = "subscribe";

#[component]
pub fn Footer() -> impl IntoView {
    let quick_links = [
        ("Home", AppRoute::Home),
        ("All Tales", AppRoute::blog()),
        ("About", AppRoute::About),
    ];

    let category_links = CATEGORIES
        .iter()
        .filter(|label| **label != ALL_CATEGORIES)
        .map(|label| {
            let route = AppRoute::Blog {
                category: Some(label.to_string()),
            };
            view! {
                <li><a class=css::link href=route.to_hash()>{*label}</a></li>
            }
        })
        .collect_view();

    view! {
        <footer class=css::footer>
            <div class=css::grid>
                // Brand
                <div class=css::brand>
                    <h3 class=css::brandName>{SITE_NAME}</h3>
                    <p class=css::muted>{SITE_BLURB}</p>
                    <div class=css::social>
                        <a class=css::socialLink href="https://github.com" target="_blank" rel="noopener noreferrer" aria-label="GitHub">
                            <Icon icon=ic::GITHUB />
                        </a>
                        <a class=css::socialLink href="https://x.com" target="_blank" rel="noopener noreferrer" aria-label="Twitter">
                            <Icon icon=ic::TWITTER />
                        </a>
                        <a class=css::socialLink href="https://linkedin.com" target="_blank" rel="noopener noreferrer" aria-label="LinkedIn">
                            <Icon icon=ic::LINKEDIN />
                        </a>
                    </div>
                </div>

                // Quick links
                <div>
                    <h4 class=css::heading>"Quick Links"</h4>
                    <ul class=css::list>
                        {quick_links
                            .into_iter()
                            .map(|(label, route)| view! {
                                <li><a class=css::link href=route.to_hash()>{label}</a></li>
                            })
                            .collect_view()}
                    </ul>
                </div>

                // Categories
                <div>
                    <h4 class=css::heading>"Categories"</h4>
                    <ul class=css::list>{category_links}</ul>
                </div>

                <Newsletter />
            </div>

            <div class=css::bottom>
                <p>{COPYRIGHT}</p>
            </div>
        </footer>
    }
}

/// Newsletter sign-up. Presentational only: the address is not sent anywhere.
#[component]
fn Newsletter() -> impl IntoView {
    let (email, set_email) = signal(String::new());
    let (subscribed, set_subscribed) = signal(false);

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        if !email.with(|e| e.trim().is_empty()) {
            set_subscribed.set(true);
            set_email.set(String::new());
        }
    };

    view! {
        <div id=NEWSLETTER_ANCHOR>
            <h4 class=css::heading>"Stay Updated"</h4>
            <p class=css::muted>"Get the latest articles delivered to your inbox."</p>
            <Show
                when=move || subscribed.get()
                fallback=move || view! {
                    <form class=css::form on:submit=on_submit>
                        <input
                            class=css::input
                            type="email"
                            required=true
                            placeholder="Enter your email"
                            prop:value=move || email.get()
                            on:input=move |ev| set_email.set(event_target_value(&ev))
                        />
                        <button class=css::button type="submit">
                            <Icon icon=ic::MAIL />
                            "Subscribe"
                        </button>
                    </form>
                }
            >
                <p class=css::thanks>"Thanks for subscribing!"</p>
            </Show>
        </div>
    }
}
