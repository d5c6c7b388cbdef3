//! Client-side enhancements for the marketing site: scroll-triggered
//! reveals, navbar scroll styling, the mobile navigation toggle, contact
//! form feedback, smooth anchor scrolling, hero line rotation and hero
//! video pacing. The crate renders nothing; it binds against the page's
//! existing markup once at load and mutates classes and attributes from
//! there.

use log::Level;
use wasm_bindgen::prelude::*;

pub mod anchors;
pub mod config;
mod dom;
pub mod form;
pub mod hero;
pub mod menu;
pub mod navbar;
pub mod reveal;
pub mod video;

use config::Config;
use web_sys::Document;

/// Live bindings for every enhancement found on the page. Dropping this
/// unhooks all listeners, disconnects the observer and cancels the timers.
pub struct Enhancements {
    _reveal: Option<reveal::Reveal>,
    _navbar: Option<navbar::Navbar>,
    _menu: Option<menu::Menu>,
    _form: Option<form::ContactForm>,
    _anchors: Option<anchors::Anchors>,
    _hero: Option<hero::Hero>,
    _video: Option<video::VideoRate>,
}

/// Binds every enhancement whose markup is present. Components are
/// independent; any that find nothing to bind simply stay inert.
pub fn boot(document: &Document, config: &Config) -> Enhancements {
    Enhancements {
        _reveal: reveal::init(document, config),
        _navbar: navbar::init(document, config),
        _menu: menu::init(document),
        _form: form::init(document, config),
        _anchors: anchors::init(document, config),
        _hero: hero::init(document, config),
        _video: video::init(document, config),
    }
}

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    console_log::init_with_level(Level::Info).expect("error initializing log");

    let Some(document) = dom::document() else {
        return;
    };
    log::info!("binding page enhancements");

    // Bindings live exactly as long as the page view does.
    std::mem::forget(boot(&document, &Config::default()));
}
