//! Reveal-on-scroll: `.reveal` elements get the `reveal-visible` class the
//! first time they intersect the viewport, then stop being observed so the
//! transition can only ever fire once per element.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys;
use web_sys::{
    Document, Element, HtmlElement, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit,
};

use crate::config::Config;

pub struct Reveal {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>,
}

impl Drop for Reveal {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

pub fn init(document: &Document, config: &Config) -> Option<Reveal> {
    let elements = document.query_selector_all(".reveal").ok()?;
    if elements.length() == 0 {
        log::debug!("reveal: nothing to observe");
        return None;
    }

    let callback = Closure::wrap(Box::new(
        move |entries: js_sys::Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let entry: IntersectionObserverEntry = entry.unchecked_into();
                if entry.is_intersecting() {
                    let target = entry.target();
                    let _ = target.class_list().add_1("reveal-visible");
                    observer.unobserve(&target);
                }
            }
        },
    )
        as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(config.reveal_threshold));
    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options).ok()?;

    for i in 0..elements.length() {
        let Some(element) = elements.get(i).and_then(|n| n.dyn_into::<Element>().ok()) else {
            continue;
        };
        // The delay lands on the CSS transition, not on the observation,
        // so staggered elements still reveal off the same intersection.
        if let Some(delay) = parse_delay(element.get_attribute("data-reveal-delay").as_deref()) {
            if let Some(html) = element.dyn_ref::<HtmlElement>() {
                let _ = html
                    .style()
                    .set_property("transition-delay", &format!("{delay}ms"));
            }
        }
        observer.observe(&element);
    }
    log::info!("reveal: observing {} elements", elements.length());

    Some(Reveal {
        observer,
        _callback: callback,
    })
}

fn parse_delay(attr: Option<&str>) -> Option<u32> {
    attr?.trim().parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delay_parses_plain_millisecond_values() {
        assert_eq!(parse_delay(Some("200")), Some(200));
        assert_eq!(parse_delay(Some(" 80 ")), Some(80));
    }

    #[test]
    fn missing_or_garbage_delay_is_ignored() {
        assert_eq!(parse_delay(None), None);
        assert_eq!(parse_delay(Some("")), None);
        assert_eq!(parse_delay(Some("fast")), None);
        assert_eq!(parse_delay(Some("-100")), None);
    }
}
