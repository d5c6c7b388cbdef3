//! Mobile navigation toggle. The logical state lives in a two-state machine;
//! the DOM (aria-expanded plus the active classes on button and panel) is
//! re-rendered from that state after every transition, so the two can never
//! disagree.

use std::cell::Cell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Node};

use crate::dom::Listener;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuState {
    Closed,
    Open,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuEvent {
    Toggle,
    LinkClick,
    OutsideClick,
}

impl MenuState {
    pub fn apply(self, event: MenuEvent) -> MenuState {
        match (self, event) {
            (MenuState::Closed, MenuEvent::Toggle) => MenuState::Open,
            (MenuState::Open, MenuEvent::Toggle) => MenuState::Closed,
            (_, MenuEvent::LinkClick) | (_, MenuEvent::OutsideClick) => MenuState::Closed,
        }
    }

    pub(crate) fn is_open(self) -> bool {
        self == MenuState::Open
    }

    pub(crate) fn aria_expanded(self) -> &'static str {
        if self.is_open() {
            "true"
        } else {
            "false"
        }
    }
}

/// Turns a document-level click into a menu event, if it is one. Clicks on
/// the toggle button belong to the button's own listener; clicks inside the
/// panel only count when they land on a link (nested targets included).
pub(crate) fn classify_click(
    inside_button: bool,
    inside_menu: bool,
    on_link: bool,
) -> Option<MenuEvent> {
    if inside_button {
        None
    } else if inside_menu {
        on_link.then_some(MenuEvent::LinkClick)
    } else {
        Some(MenuEvent::OutsideClick)
    }
}

pub struct Menu {
    _toggle: Listener,
    _document_clicks: Listener,
}

struct Parts {
    button: Element,
    panel: Element,
    state: Cell<MenuState>,
}

impl Parts {
    fn dispatch(&self, event: MenuEvent) {
        self.state.set(self.state.get().apply(event));
        self.render();
    }

    fn render(&self) {
        let state = self.state.get();
        let _ = self.button.set_attribute("aria-expanded", state.aria_expanded());
        if state.is_open() {
            let _ = self.button.class_list().add_1("hamburger-active");
            let _ = self.panel.class_list().add_1("nav-menu-active");
        } else {
            let _ = self.button.class_list().remove_1("hamburger-active");
            let _ = self.panel.class_list().remove_1("nav-menu-active");
        }
    }
}

pub fn init(document: &Document) -> Option<Menu> {
    let button = document.get_element_by_id("mobile-menu-btn")?;
    let panel = document.get_element_by_id("nav-menu")?;

    let parts = Rc::new(Parts {
        button: button.clone(),
        panel,
        state: Cell::new(MenuState::Closed),
    });

    let toggle = {
        let parts = parts.clone();
        Listener::new(&button, "click", move |_| parts.dispatch(MenuEvent::Toggle))
    };

    let document_clicks = {
        let parts = parts.clone();
        Listener::new(document, "click", move |event| {
            let Some(target) = event.target() else { return };
            let Some(node) = target.dyn_ref::<Node>() else { return };
            let inside_button = parts.button.contains(Some(node));
            let inside_menu = parts.panel.contains(Some(node));
            let on_link = node
                .dyn_ref::<Element>()
                .and_then(|el| el.closest("a").ok().flatten())
                .is_some();
            if let Some(menu_event) = classify_click(inside_button, inside_menu, on_link) {
                parts.dispatch(menu_event);
            }
        })
    };

    Some(Menu {
        _toggle: toggle,
        _document_clicks: document_clicks,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_flips_between_the_two_states() {
        let open = MenuState::Closed.apply(MenuEvent::Toggle);
        assert_eq!(open, MenuState::Open);
        assert_eq!(open.apply(MenuEvent::Toggle), MenuState::Closed);
    }

    #[test]
    fn link_and_outside_clicks_always_close() {
        for state in [MenuState::Closed, MenuState::Open] {
            assert_eq!(state.apply(MenuEvent::LinkClick), MenuState::Closed);
            assert_eq!(state.apply(MenuEvent::OutsideClick), MenuState::Closed);
        }
    }

    #[test]
    fn clicks_inside_the_panel_only_close_on_links() {
        assert_eq!(classify_click(false, true, true), Some(MenuEvent::LinkClick));
        assert_eq!(classify_click(false, true, false), None);
    }

    #[test]
    fn button_clicks_are_left_to_the_toggle_listener() {
        assert_eq!(classify_click(true, false, false), None);
        assert_eq!(classify_click(true, true, true), None);
    }

    #[test]
    fn clicks_anywhere_else_close_the_menu() {
        assert_eq!(classify_click(false, false, false), Some(MenuEvent::OutsideClick));
        // a link elsewhere on the page is still an outside click
        assert_eq!(classify_click(false, false, true), Some(MenuEvent::OutsideClick));
    }

    #[test]
    fn aria_expanded_tracks_the_machine_through_any_sequence() {
        let events = [
            MenuEvent::Toggle,
            MenuEvent::Toggle,
            MenuEvent::Toggle,
            MenuEvent::LinkClick,
            MenuEvent::Toggle,
            MenuEvent::OutsideClick,
            MenuEvent::OutsideClick,
        ];
        let mut state = MenuState::Closed;
        for event in events {
            state = state.apply(event);
            assert_eq!(state.aria_expanded(), if state.is_open() { "true" } else { "false" });
        }
        assert_eq!(state, MenuState::Closed);
    }
}
