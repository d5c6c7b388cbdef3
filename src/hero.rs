//! Hero line rotation: exactly one `.hero-line` inside `#hero` carries the
//! active class at a time. Rotation is skipped entirely when the visitor
//! prefers reduced motion; the first line then stays active.

use std::cell::Cell;

use gloo_timers::callback::Interval;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element};

use crate::config::Config;
use crate::dom;

pub struct Hero {
    _rotation: Option<Interval>,
}

pub(crate) fn next_index(index: usize, count: usize) -> usize {
    (index + 1) % count
}

fn reduced_motion() -> bool {
    dom::window()
        .and_then(|w| w.match_media("(prefers-reduced-motion: reduce)").ok().flatten())
        .map(|query| query.matches())
        .unwrap_or(false)
}

pub fn init(document: &Document, config: &Config) -> Option<Hero> {
    let hero = document.get_element_by_id("hero")?;
    let nodes = hero.query_selector_all(".hero-line").ok()?;

    let mut lines: Vec<Element> = Vec::with_capacity(nodes.length() as usize);
    for i in 0..nodes.length() {
        if let Some(element) = nodes.get(i).and_then(|n| n.dyn_into::<Element>().ok()) {
            lines.push(element);
        }
    }
    if lines.is_empty() {
        return None;
    }

    set_active(&lines, 0);

    if reduced_motion() {
        log::info!("hero: reduced motion requested, rotation disabled");
        return Some(Hero { _rotation: None });
    }

    let index = Cell::new(0usize);
    let rotation = Interval::new(config.hero_interval_ms, move || {
        let next = next_index(index.get(), lines.len());
        index.set(next);
        set_active(&lines, next);
    });

    Some(Hero {
        _rotation: Some(rotation),
    })
}

fn set_active(lines: &[Element], active: usize) {
    for (i, line) in lines.iter().enumerate() {
        if i == active {
            let _ = line.class_list().add_1("hero-line-active");
        } else {
            let _ = line.class_list().remove_1("hero-line-active");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rotation_wraps_back_to_the_first_line() {
        let mut index = 0;
        for _ in 0..3 {
            index = next_index(index, 3);
        }
        assert_eq!(index, 0);
    }

    #[test]
    fn a_single_line_stays_put() {
        assert_eq!(next_index(0, 1), 0);
    }

    #[test]
    fn ticks_advance_one_line_at_a_time() {
        assert_eq!(next_index(0, 4), 1);
        assert_eq!(next_index(3, 4), 0);
    }
}
