//! Leptos Scroll Utilities
//!
//! One-shot reveal-on-scroll animations and smooth scrolling for same-page
//! anchors. Listeners are bound once on the document and live for the page.

use leptos::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

/// Reveal settings
#[derive(Clone, Debug, PartialEq)]
pub struct RevealOptions {
    /// Elements to observe
    pub selector: String,
    /// Visible ratio that triggers the reveal
    pub threshold: f64,
    /// Class added once the element has been seen
    pub visible_class: String,
}

impl Default for RevealOptions {
    fn default() -> Self {
        Self {
            selector: ".animate-on-scroll".to_string(),
            threshold: 0.15,
            visible_class: "is-visible".to_string(),
        }
    }
}

/// Fragment id of a same-page link; bare `#` and other hrefs yield None
pub fn anchor_target_id(href: &str) -> Option<&str> {
    match href.strip_prefix('#') {
        Some(id) if !id.is_empty() => Some(id),
        _ => None,
    }
}

fn document() -> Option<web_sys::Document> {
    web_sys::window().and_then(|w| w.document())
}

fn elements(selector: &str) -> Vec<web_sys::Element> {
    let Some(doc) = document() else {
        return Vec::new();
    };
    let Ok(list) = doc.query_selector_all(selector) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<web_sys::Element>().ok())
        .collect()
}

/// Smoothly scroll the element with `id` to the top of the viewport
pub fn scroll_to_id(id: &str) -> bool {
    let Some(target) = document().and_then(|d| d.get_element_by_id(id)) else {
        return false;
    };
    let options = web_sys::ScrollIntoViewOptions::new();
    options.set_behavior(web_sys::ScrollBehavior::Smooth);
    options.set_block(web_sys::ScrollLogicalPosition::Start);
    target.scroll_into_view_with_scroll_into_view_options(&options);
    true
}

/// Observe matching elements and mark each visible the first time it
/// intersects the viewport. Without IntersectionObserver support every
/// element is revealed immediately.
pub fn bind_reveal_on_scroll(options: &RevealOptions) {
    let targets = elements(&options.selector);
    if targets.is_empty() {
        return;
    }

    let class = options.visible_class.clone();
    let on_intersect = Closure::<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>::new(
        move |entries: js_sys::Array, observer: web_sys::IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<web_sys::IntersectionObserverEntry>() else {
                    continue;
                };
                if entry.is_intersecting() {
                    let target = entry.target();
                    let _ = target.class_list().add_1(&class);
                    // One-shot: never hide again
                    observer.unobserve(&target);
                }
            }
        },
    );

    let init = web_sys::IntersectionObserverInit::new();
    init.set_threshold(&wasm_bindgen::JsValue::from_f64(options.threshold));

    match web_sys::IntersectionObserver::new_with_options(
        on_intersect.as_ref().unchecked_ref(),
        &init,
    ) {
        Ok(observer) => {
            for el in &targets {
                observer.observe(el);
            }
            on_intersect.forget();
        }
        Err(_) => {
            for el in &targets {
                let _ = el.class_list().add_1(&options.visible_class);
            }
        }
    }
}

/// Intercept clicks on `a[href^="#"]` and scroll smoothly to the target
pub fn bind_smooth_anchor_scroll() {
    let on_click = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |ev: web_sys::MouseEvent| {
        let Some(link) = ev
            .target()
            .and_then(|t| t.dyn_into::<web_sys::Element>().ok())
            .and_then(|el| el.closest("a[href^=\"#\"]").ok().flatten())
        else {
            return;
        };
        let Some(href) = link.get_attribute("href") else {
            return;
        };
        let Some(id) = anchor_target_id(&href) else {
            return;
        };
        let exists = document().and_then(|d| d.get_element_by_id(id)).is_some();
        if exists {
            ev.prevent_default();
            scroll_to_id(id);
        }
    });

    if let Some(doc) = document() {
        let _ = doc.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref());
    }
    on_click.forget();
}

/// Bind both affordances once the component has mounted
pub fn use_scroll_affordances(options: RevealOptions) {
    Effect::new(move |_| {
        bind_reveal_on_scroll(&options);
        bind_smooth_anchor_scroll();
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_anchor_target_id() {
        assert_eq!(anchor_target_id("#agendamento"), Some("agendamento"));
        assert_eq!(anchor_target_id("#"), None);
        assert_eq!(anchor_target_id("contato.html"), None);
        assert_eq!(anchor_target_id("contato.html#form"), None);
    }

    #[test]
    fn test_default_options() {
        let options = RevealOptions::default();
        assert_eq!(options.selector, ".animate-on-scroll");
        assert_eq!(options.visible_class, "is-visible");
        assert!((options.threshold - 0.15).abs() < f64::EPSILON);
    }
}
