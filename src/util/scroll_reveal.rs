//! Fade/slide-in of cards and timeline items as they enter the viewport.
//!
//! Each observed element starts hidden and is revealed the first time the
//! observer reports it intersecting, then unobserved. Scrolling back out never
//! re-hides it.

#[cfg(test)]
#[path = "scroll_reveal_test.rs"]
mod scroll_reveal_test;

use std::collections::HashSet;

pub const REVEAL_SELECTOR: &str = ".glass-card, .project-card, .timeline-item";

/// Inline style applied to one element, as `(property, value)` pairs.
pub type StylePatch = &'static [(&'static str, &'static str)];

pub const HIDDEN_STYLE: StylePatch = &[
    ("opacity", "0"),
    ("transform", "translateY(20px)"),
    ("transition", "0.6s ease"),
];

pub const REVEALED_STYLE: StylePatch = &[("opacity", "1"), ("transform", "translateY(0)")];

/// One-shot bookkeeping keyed by element position in the observed set.
#[derive(Clone, Debug, Default)]
pub struct RevealTracker {
    revealed: HashSet<usize>,
}

impl RevealTracker {
    /// Record an intersection report. Returns `true` only for the first
    /// intersecting report of `index`.
    pub fn observe(&mut self, index: usize, intersecting: bool) -> bool {
        intersecting && self.revealed.insert(index)
    }

    #[must_use]
    pub fn is_revealed(&self, index: usize) -> bool {
        self.revealed.contains(&index)
    }

    #[must_use]
    pub fn revealed_count(&self) -> usize {
        self.revealed.len()
    }
}

#[cfg(feature = "csr")]
fn apply_style(el: &web_sys::HtmlElement, patch: StylePatch) -> Result<(), crate::error::DomError> {
    let style = el.style();
    for (property, value) in patch {
        style.set_property(property, value)?;
    }
    Ok(())
}

/// Hide every matching element and reveal each on first intersection.
/// Returns the number of observed elements.
#[cfg(feature = "csr")]
pub fn install(threshold: f64) -> Result<usize, crate::error::DomError> {
    use std::cell::RefCell;
    use std::rc::Rc;

    use wasm_bindgen::JsCast;
    use wasm_bindgen::closure::Closure;

    let nodes = crate::util::dom::document()?.query_selector_all(REVEAL_SELECTOR)?;
    let elements = (0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .filter_map(|node| node.dyn_into::<web_sys::HtmlElement>().ok())
        .collect::<Vec<_>>();
    if elements.is_empty() {
        return Err(crate::error::DomError::missing(REVEAL_SELECTOR));
    }

    let tracker = Rc::new(RefCell::new(RevealTracker::default()));
    let observed = Rc::new(elements.clone());
    let callback = Closure::<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>::new(
        move |entries: js_sys::Array, observer: web_sys::IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<web_sys::IntersectionObserverEntry>() else {
                    continue;
                };
                let target = entry.target();
                let Some(index) = observed.iter().position(|el| el.is_same_node(Some(target.as_ref()))) else {
                    continue;
                };
                if !tracker.borrow_mut().observe(index, entry.is_intersecting()) {
                    continue;
                }
                if let Err(e) = apply_style(&observed[index], REVEALED_STYLE) {
                    log::debug!("reveal style failed: {e}");
                }
                observer.unobserve(&target);
            }
        },
    );

    let options = web_sys::IntersectionObserverInit::new();
    options.set_threshold(&wasm_bindgen::JsValue::from_f64(threshold));
    let observer =
        web_sys::IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
    // Observer lives for the page lifetime.
    callback.forget();

    for el in &elements {
        apply_style(el, HIDDEN_STYLE)?;
        observer.observe(el);
    }
    Ok(elements.len())
}

/// Wait `delay_ms`, then install the observer. Absent targets are logged and
/// skipped.
pub fn install_after(delay_ms: u32, threshold: f64) {
    #[cfg(feature = "csr")]
    leptos::task::spawn_local(async move {
        gloo_timers::future::sleep(std::time::Duration::from_millis(u64::from(delay_ms))).await;
        match install(threshold) {
            Ok(count) => log::debug!("scroll reveal observing {count} elements"),
            Err(e) => log::debug!("scroll reveal skipped: {e}"),
        }
    });
    #[cfg(not(feature = "csr"))]
    {
        let _ = (delay_ms, threshold);
    }
}
