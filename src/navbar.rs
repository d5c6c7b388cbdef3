//! Sticky navbar styling: `#navbar` carries `navbar-scrolled` whenever the
//! page is scrolled past the threshold. Pure function of the current offset,
//! recomputed on every scroll event.

use web_sys::Document;

use crate::config::Config;
use crate::dom::{self, Listener};

pub struct Navbar {
    _scroll: Listener,
}

pub(crate) fn scrolled(offset: f64, threshold: f64) -> bool {
    offset > threshold
}

pub fn init(document: &Document, config: &Config) -> Option<Navbar> {
    let navbar = document.get_element_by_id("navbar")?;
    let window = dom::window()?;
    let threshold = config.navbar_scroll_threshold;

    let scroll = {
        let win = window.clone();
        Listener::new(&window, "scroll", move |_| {
            let offset = win.scroll_y().unwrap_or(0.0);
            if scrolled(offset, threshold) {
                let _ = navbar.class_list().add_1("navbar-scrolled");
            } else {
                let _ = navbar.class_list().remove_1("navbar-scrolled");
            }
        })
    };

    Some(Navbar { _scroll: scroll })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn state_flips_strictly_above_the_threshold() {
        assert!(!scrolled(0.0, 50.0));
        assert!(!scrolled(50.0, 50.0));
        assert!(scrolled(50.1, 50.0));
        assert!(scrolled(800.0, 50.0));
    }

    #[test]
    fn repeated_offsets_give_the_same_answer() {
        for _ in 0..3 {
            assert!(scrolled(51.0, 50.0));
            assert!(!scrolled(49.0, 50.0));
        }
    }
}
