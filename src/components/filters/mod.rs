//! Search box, category chips and the empty-results placeholder.

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::components::icons as ic;
use crate::components::reveal::ScrollReveal;
use crate::config::CATEGORIES;
use crate::config::reveal::CHIP_STAGGER_MS;
use crate::core::{Animation, FilterState};
use crate::utils::format::stagger;

stylance::import_crate_style!(css, "src/components/filters/filters.module.css");

/// Chips start revealing after the search box.
const CHIP_BASE_DELAY_MS: u32 = 300;

/// Reactive filter state owned by a page.
#[derive(Clone, Copy)]
pub struct FilterSignals {
    pub category: RwSignal<String>,
    pub query: RwSignal<String>,
}

impl FilterSignals {
    pub fn new(initial: FilterState) -> Self {
        Self {
            category: RwSignal::new(initial.selected_category),
            query: RwSignal::new(initial.search_query),
        }
    }

    /// Current state, tracked.
    pub fn snapshot(&self) -> FilterState {
        FilterState::new(self.category.get(), self.query.get())
    }

    /// Back to "All" with no query.
    pub fn reset(&self) {
        let mut state = self.snapshot_untracked();
        state.reset();
        self.write(state);
    }

    fn snapshot_untracked(&self) -> FilterState {
        FilterState::new(self.category.get_untracked(), self.query.get_untracked())
    }

    fn write(&self, state: FilterState) {
        self.category.set(state.selected_category);
        self.query.set(state.search_query);
    }
}

/// Search input plus one chip per category.
#[component]
pub fn FilterBar(filters: FilterSignals) -> impl IntoView {
    let is_default = move || filters.snapshot().is_default();

    view! {
        <div class=css::bar>
            <ScrollReveal animation=Animation::FadeUp class=css::searchWrap>
                <label class=css::search>
                    <Icon icon=ic::SEARCH />
                    <input
                        class=css::searchInput
                        type="search"
                        placeholder="Search articles..."
                        aria-label="Search articles"
                        prop:value=move || filters.query.get()
                        on:input=move |ev| filters.query.set(event_target_value(&ev))
                    />
                </label>
            </ScrollReveal>

            <div class=css::chips role="group" aria-label="Categories">
                {CATEGORIES
                    .iter()
                    .enumerate()
                    .map(|(i, &label)| {
                        let chip_class = move || {
                            if filters.category.with(|c| c == label) {
                                format!("{} {}", css::chip, css::chipActive)
                            } else {
                                css::chip.to_string()
                            }
                        };
                        view! {
                            <ScrollReveal
                                animation=Animation::Scale
                                delay=stagger(CHIP_BASE_DELAY_MS, i, CHIP_STAGGER_MS)
                            >
                                <button
                                    class=chip_class
                                    aria-pressed=move || filters.category.with(|c| c == label).to_string()
                                    on:click=move |_| filters.category.set(label.to_string())
                                >
                                    {label}
                                </button>
                            </ScrollReveal>
                        }
                    })
                    .collect_view()}
            </div>

            <Show when=move || !is_default()>
                <button class=css::clear on:click=move |_| filters.reset()>
                    <Icon icon=ic::CLOSE />
                    "Clear filters"
                </button>
            </Show>
        </div>
    }
}

/// Placeholder shown when a grid has nothing to render.
#[component]
pub fn EmptyState(
    #[prop(into)] message: String,
    /// Shows a "Clear filters" action when given.
    #[prop(default = None)]
    filters: Option<FilterSignals>,
) -> impl IntoView {
    view! {
        <div class=css::empty>
            <p>{message}</p>
            {filters.map(|f| view! {
                <button class=css::clear on:click=move |_| f.reset()>"Clear filters"</button>
            })}
        </div>
    }
}
