//! Scroll-triggered reveal wrapper.
//!
//! [`ViewportObserver`] adapts the browser's `IntersectionObserver` to
//! [`IntersectionSource`]; [`use_reveal`] ties an observation to a
//! component's lifetime; [`ScrollReveal`] picks the animation classes.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::html::Div;
use leptos::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::Closure;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry};

use crate::config::reveal::DEFAULT_DURATION_MS;
use crate::core::reveal::RevealHandle;
use crate::core::{
    Animation, IntersectionCallback, IntersectionSource, RevealMode, RevealTiming, Subscription,
    observe_with,
};
use crate::utils::log;

stylance::import_crate_style!(css, "src/components/reveal/reveal.module.css");

// ============================================================================
// Browser Intersection Source
// ============================================================================

/// `IntersectionObserver`-backed viewport source. Each subscription owns
/// its own observer, disconnected on release.
pub struct ViewportObserver;

impl IntersectionSource for ViewportObserver {
    type Region = Element;

    fn subscribe(&self, region: &Element, on_change: IntersectionCallback) -> Subscription {
        let on_change = Rc::new(RefCell::new(on_change));
        let notify = Rc::clone(&on_change);
        let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
            move |entries: js_sys::Array, _observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let entry: IntersectionObserverEntry = entry.unchecked_into();
                    (notify.borrow_mut())(entry.intersection_ratio() > 0.0);
                }
            },
        );

        match IntersectionObserver::new(callback.as_ref().unchecked_ref()) {
            Ok(observer) => {
                observer.observe(region);
                Subscription::new(move || {
                    observer.disconnect();
                    drop(callback);
                })
            }
            Err(_) => {
                // Without an observer nothing would ever reveal; show content now.
                log::warn("IntersectionObserver unavailable, revealing immediately");
                (on_change.borrow_mut())(true);
                Subscription::detached()
            }
        }
    }
}

// ============================================================================
// Hook
// ============================================================================

/// Observe the element behind `node_ref` while the calling component is
/// mounted. The returned signal starts `false`.
///
/// The signal mirrors the [`RevealHandle`] state: it is seeded from
/// [`RevealHandle::is_visible`] whenever a new observation starts and then
/// follows the handle's change notifications.
pub fn use_reveal(node_ref: NodeRef<Div>, mode: RevealMode) -> ReadSignal<bool> {
    let (visible, set_visible) = signal(false);
    let handle = StoredValue::new_local(None::<RevealHandle>);

    Effect::new(move |_| {
        let Some(el) = node_ref.get() else {
            return;
        };
        let element: &Element = el.as_ref();
        let next = observe_with(&ViewportObserver, element, mode, move |is_visible| {
            let _ = set_visible.try_set(is_visible);
        });
        // A fresh observation of a new element starts hidden unless the
        // observer already reported it
        let _ = set_visible.try_set(next.is_visible());
        // Replacing the previous handle releases its observer
        handle.set_value(Some(next));
    });

    on_cleanup(move || {
        handle.try_update_value(|h| {
            h.take();
        });
    });

    visible
}

// ============================================================================
// Component
// ============================================================================

/// Pre-reveal and revealed classes for an animation.
fn presentation(animation: Animation) -> (&'static str, &'static str) {
    match animation {
        Animation::FadeUp => (css::fadeUpOut, css::fadeUpIn),
        Animation::FadeDown => (css::fadeDownOut, css::fadeDownIn),
        Animation::FadeLeft => (css::fadeLeftOut, css::fadeLeftIn),
        Animation::FadeRight => (css::fadeRightOut, css::fadeRightIn),
        Animation::Scale => (css::scaleOut, css::scaleIn),
        Animation::Rotate => (css::rotateOut, css::rotateIn),
    }
}

/// Wraps children in a block that animates in once scrolled into view.
///
/// # Props
/// - `animation`: entry animation (default fade-up)
/// - `delay`: milliseconds before the animation starts
/// - `duration`: animation length in milliseconds
/// - `mode`: reveal once (default) or replay on every re-entry
/// - `class`: extra classes for the wrapper
#[component]
pub fn ScrollReveal(
    #[prop(optional)] animation: Animation,
    #[prop(optional)] delay: u32,
    #[prop(default = DEFAULT_DURATION_MS)] duration: u32,
    #[prop(optional)] mode: RevealMode,
    #[prop(optional, into)] class: String,
    children: Children,
) -> impl IntoView {
    let node_ref = NodeRef::<Div>::new();
    let visible = use_reveal(node_ref, mode);

    let (pre_reveal, revealed) = presentation(animation);
    let style = RevealTiming::new(delay, duration).style();

    let wrapper_class = move || {
        let state = if visible.get() { revealed } else { pre_reveal };
        format!("{} {} {}", css::reveal, state, class)
    };

    view! {
        <div node_ref=node_ref class=wrapper_class style=style data-animation=animation.tag()>
            {children()}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_presentations_are_distinct() {
        let mut seen = HashSet::new();
        for animation in Animation::ALL {
            let (pre_reveal, revealed) = presentation(animation);
            assert_ne!(pre_reveal, revealed);
            assert!(seen.insert(pre_reveal));
            assert!(seen.insert(revealed));
        }
        assert_eq!(seen.len(), Animation::ALL.len() * 2);
    }
}
