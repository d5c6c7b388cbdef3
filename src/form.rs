//! Contact form feedback. Validation messages go through the browser's own
//! constraint-validation UI; this module only decides when the email field is
//! acceptable and keeps the submit button honest while a submission is in
//! flight. The actual transmission belongs to the external form endpoint.

use std::cell::Cell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlButtonElement, HtmlFormElement, HtmlInputElement};

use crate::config::{Config, SubmitReset};
use crate::dom::Listener;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmissionState {
    Idle,
    Sending,
}

impl SubmissionState {
    /// A valid submission starts sending; anything else changes nothing.
    pub fn on_submit(self, form_valid: bool) -> SubmissionState {
        match self {
            SubmissionState::Idle if form_valid => SubmissionState::Sending,
            other => other,
        }
    }

    pub fn on_watchdog_expired(self) -> SubmissionState {
        SubmissionState::Idle
    }
}

/// Mirrors `/^[^\s@]+@[^\s@]+\.[^\s@]+$/`: no whitespace anywhere, a single
/// `@` with a non-empty local part, and a dot with non-empty text on both
/// sides somewhere after it.
pub fn validate_email(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    match domain.rsplit_once('.') {
        Some((host, tld)) => !host.is_empty() && !tld.is_empty(),
        None => false,
    }
}

pub struct ContactForm {
    _blur: Option<Listener>,
    _submit: Listener,
}

pub fn init(document: &Document, config: &Config) -> Option<ContactForm> {
    let form = document
        .query_selector("#contact form")
        .ok()
        .flatten()?
        .dyn_into::<HtmlFormElement>()
        .ok()?;

    let blur = form
        .query_selector(r#"input[name="email"]"#)
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<HtmlInputElement>().ok())
        .map(|input| {
            let field = input.clone();
            Listener::new(&input, "blur", move |_| {
                let value = field.value();
                if !value.is_empty() && !validate_email(&value) {
                    field.set_custom_validity("Please enter a valid email address");
                } else {
                    field.set_custom_validity("");
                }
            })
        });

    let submit = {
        let reset = config.submit_reset;
        let state = Rc::new(Cell::new(SubmissionState::Idle));
        let form = form.clone();
        Listener::new(&form.clone(), "submit", move |_| {
            let next = state.get().on_submit(form.check_validity());
            if state.replace(next) == next {
                // invalid form (native bubbles report it) or already sending
                return;
            }

            let Some(button) = form
                .query_selector(r#"button[type="submit"]"#)
                .ok()
                .flatten()
                .and_then(|el| el.dyn_into::<HtmlButtonElement>().ok())
            else {
                return;
            };

            let original = button.text_content().unwrap_or_default();
            button.set_text_content(Some("Sending..."));
            button.set_disabled(true);
            let _ = button.style().set_property("opacity", "0.7");
            log::info!("contact form handed off to the submission endpoint");

            if let SubmitReset::Watchdog { ms } = reset {
                let state = state.clone();
                let button = button.clone();
                Timeout::new(ms, move || {
                    state.set(state.get().on_watchdog_expired());
                    button.set_text_content(Some(&original));
                    button.set_disabled(false);
                    let _ = button.style().set_property("opacity", "1");
                })
                .forget();
            }
        })
    };

    Some(ContactForm {
        _blur: blur,
        _submit: submit,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_plain_addresses() {
        assert!(validate_email("a@b.co"));
        assert!(validate_email("first.last@example.com"));
        assert!(validate_email("user+tag@mail.example.org"));
    }

    #[test]
    fn rejects_a_domain_without_a_dot() {
        assert!(!validate_email("a@b"));
    }

    #[test]
    fn rejects_whitespace_anywhere() {
        assert!(!validate_email("a b@c.com"));
        assert!(!validate_email(" a@b.co"));
        assert!(!validate_email("a@b.co "));
    }

    #[test]
    fn rejects_degenerate_parts() {
        assert!(!validate_email(""));
        assert!(!validate_email("@b.co"));
        assert!(!validate_email("a@"));
        assert!(!validate_email("a@b."));
        assert!(!validate_email("a@.co"));
        assert!(!validate_email("a@@b.co"));
    }

    #[test]
    fn consecutive_dots_pass_like_the_source_pattern() {
        // [^\s@] admits "." itself, so "b..c" satisfies the pattern
        assert!(validate_email("a@b..c"));
    }

    #[test]
    fn submission_only_starts_from_idle_with_a_valid_form() {
        assert_eq!(
            SubmissionState::Idle.on_submit(false),
            SubmissionState::Idle
        );
        assert_eq!(
            SubmissionState::Idle.on_submit(true),
            SubmissionState::Sending
        );
        assert_eq!(
            SubmissionState::Sending.on_submit(true),
            SubmissionState::Sending
        );
    }

    #[test]
    fn the_watchdog_returns_to_idle() {
        assert_eq!(
            SubmissionState::Sending.on_watchdog_expired(),
            SubmissionState::Idle
        );
    }
}
