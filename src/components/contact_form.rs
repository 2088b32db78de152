use gloo_timers::future::TimeoutFuture;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::components::notification::NotificationKind;
use crate::config;

const SUCCESS_MESSAGE: &str = "Thank you! Your message has been sent successfully.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormError {
    MissingFields,
    InvalidEmail,
}

impl FormError {
    pub fn message(self) -> &'static str {
        match self {
            FormError::MissingFields => "Please fill in all required fields.",
            FormError::InvalidEmail => "Please enter a valid email address.",
        }
    }
}

// Mirrors ^[^\s@]+@[^\s@]+\.[^\s@]+$ without a regex engine: no whitespace,
// exactly one @, non-empty local part, and a dot with characters on both
// sides somewhere in the domain.
pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let mut parts = email.split('@');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(local), Some(domain), None) => {
            !local.is_empty()
                && domain.contains('.')
                && !domain.starts_with('.')
                && !domain.ends_with('.')
        }
        _ => false,
    }
}

// Required fields are checked before email shape; the first failure wins.
pub fn validate(name: &str, email: &str, message: &str) -> Result<(), FormError> {
    if name.is_empty() || email.is_empty() || message.is_empty() {
        return Err(FormError::MissingFields);
    }
    if !is_valid_email(email) {
        return Err(FormError::InvalidEmail);
    }
    Ok(())
}

#[derive(Properties, PartialEq)]
pub struct ContactFormProps {
    pub on_notify: Callback<(String, NotificationKind)>,
}

#[function_component(ContactForm)]
pub fn contact_form(props: &ContactFormProps) -> Html {
    let name = use_state(String::new);
    let email = use_state(String::new);
    let subject = use_state(String::new);
    let message = use_state(String::new);
    let sending = use_state(|| false);

    let onsubmit = {
        let name = name.clone();
        let email = email.clone();
        let subject = subject.clone();
        let message = message.clone();
        let sending = sending.clone();
        let on_notify = props.on_notify.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *sending {
                return;
            }

            if let Err(error) = validate(&name, &email, &message) {
                on_notify.emit((error.message().to_string(), NotificationKind::Error));
                return;
            }

            sending.set(true);

            let name = name.clone();
            let email = email.clone();
            let subject = subject.clone();
            let message = message.clone();
            let sending = sending.clone();
            let on_notify = on_notify.clone();
            spawn_local(async move {
                // No request goes out; the delay stands in for the network.
                TimeoutFuture::new(config::SUBMIT_SIMULATED_DELAY_MS).await;
                on_notify.emit((SUCCESS_MESSAGE.to_string(), NotificationKind::Success));
                name.set(String::new());
                email.set(String::new());
                subject.set(String::new());
                message.set(String::new());
                sending.set(false);
            });
        })
    };

    html! {
        <form class="contact-form" onsubmit={onsubmit}>
            <input
                type="text"
                class="form-control"
                placeholder="Your Name"
                value={(*name).clone()}
                onchange={let name = name.clone(); move |e: Event| {
                    let input: HtmlInputElement = e.target_unchecked_into();
                    name.set(input.value());
                }}
            />
            <input
                type="email"
                class="form-control"
                placeholder="Your Email"
                value={(*email).clone()}
                onchange={let email = email.clone(); move |e: Event| {
                    let input: HtmlInputElement = e.target_unchecked_into();
                    email.set(input.value());
                }}
            />
            <input
                type="text"
                class="form-control"
                placeholder="Subject"
                value={(*subject).clone()}
                onchange={let subject = subject.clone(); move |e: Event| {
                    let input: HtmlInputElement = e.target_unchecked_into();
                    subject.set(input.value());
                }}
            />
            <textarea
                class="form-control"
                placeholder="Your Message"
                rows="5"
                value={(*message).clone()}
                onchange={let message = message.clone(); move |e: Event| {
                    let input: HtmlTextAreaElement = e.target_unchecked_into();
                    message.set(input.value());
                }}
            />
            <button type="submit" class="submit-button" disabled={*sending}>
                { if *sending { "Sending..." } else { "Send Message" } }
            </button>
        </form>
    }
}

#[cfg(test)]
#[path = "contact_form_test.rs"]
mod tests;
