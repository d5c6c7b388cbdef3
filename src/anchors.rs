//! Smooth scrolling for same-page anchor links, delegated through a single
//! document click listener. Unknown or unparsable targets are ignored.

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, ScrollBehavior, ScrollToOptions};

use crate::config::Config;
use crate::dom::{self, Listener};

pub struct Anchors {
    _clicks: Listener,
}

/// Document-relative destination, leaving clearance under the fixed navbar.
pub(crate) fn scroll_target(element_top: i32, navbar_height: i32, margin: i32) -> f64 {
    (element_top - navbar_height - margin) as f64
}

pub fn init(document: &Document, config: &Config) -> Option<Anchors> {
    let margin = config.anchor_margin_px;
    let doc = document.clone();

    let clicks = Listener::new(document, "click", move |event| {
        let Some(anchor) = event
            .target()
            .and_then(|t| t.dyn_ref::<Element>().cloned())
            .and_then(|el| el.closest(r##"a[href^="#"]"##).ok().flatten())
        else {
            return;
        };
        let Some(href) = anchor.get_attribute("href") else {
            return;
        };
        if href == "#" {
            return;
        }

        event.prevent_default();

        // An id that is not a valid selector errors out of query_selector;
        // both that and a missing element mean "leave the page alone".
        let Ok(Some(section)) = doc.query_selector(&href) else {
            return;
        };
        let Ok(section) = section.dyn_into::<HtmlElement>() else {
            return;
        };

        // The navbar height changes across breakpoints, so read it per click.
        let navbar_height = doc
            .get_element_by_id("navbar")
            .and_then(|el| el.dyn_into::<HtmlElement>().ok())
            .map(|el| el.offset_height())
            .unwrap_or(0);

        if let Some(window) = dom::window() {
            let options = ScrollToOptions::new();
            options.set_top(scroll_target(section.offset_top(), navbar_height, margin));
            options.set_behavior(ScrollBehavior::Smooth);
            window.scroll_to_with_scroll_to_options(&options);
        }
    });

    Some(Anchors { _clicks: clicks })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn destination_clears_the_navbar_plus_margin() {
        assert_eq!(scroll_target(600, 80, 20), 500.0);
        assert_eq!(scroll_target(0, 80, 20), -100.0);
    }

    #[test]
    fn a_taller_navbar_moves_the_destination_up() {
        assert!(scroll_target(600, 120, 20) < scroll_target(600, 80, 20));
    }
}
