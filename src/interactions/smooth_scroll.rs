use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, MouseEvent, ScrollBehavior, ScrollToOptions};

use crate::config;

pub fn is_fragment_href(href: &str) -> bool {
    href.starts_with('#')
}

pub fn scroll_target_top(offset_top: i32) -> f64 {
    f64::from(offset_top - config::HEADER_SCROLL_OFFSET)
}

// Intercepts clicks on in-page anchors and animates the scroll instead of
// letting the browser jump. Default navigation is suppressed even when the
// fragment resolves to nothing.
pub struct SmoothScrollRouter {
    document: Document,
    click_closure: Option<Closure<dyn FnMut(MouseEvent)>>,
}

impl SmoothScrollRouter {
    pub fn new(document: Document) -> Self {
        Self {
            document,
            click_closure: None,
        }
    }

    pub fn attach(&mut self) {
        let document = self.document.clone();
        let click_closure = Closure::wrap(Box::new(move |event: MouseEvent| {
            let anchor = event
                .target()
                .and_then(|target| target.dyn_into::<Element>().ok())
                .and_then(|element| element.closest("a[href^='#']").ok().flatten());
            let Some(anchor) = anchor else {
                return;
            };
            let Some(href) = anchor.get_attribute("href") else {
                return;
            };
            if !is_fragment_href(&href) {
                return;
            }
            event.prevent_default();

            // A bare "#" is an invalid selector; query_selector errors and
            // the click stays a no-op.
            let target = document
                .query_selector(&href)
                .ok()
                .flatten()
                .and_then(|element| element.dyn_into::<HtmlElement>().ok());
            let Some(target) = target else {
                return;
            };

            if let Some(window) = web_sys::window() {
                let options = ScrollToOptions::new();
                options.set_top(scroll_target_top(target.offset_top()));
                options.set_behavior(ScrollBehavior::Smooth);
                window.scroll_to_with_scroll_to_options(&options);
            }
        }) as Box<dyn FnMut(MouseEvent)>);

        self.document
            .add_event_listener_with_callback("click", click_closure.as_ref().unchecked_ref())
            .unwrap();
        self.click_closure = Some(click_closure);
    }

    pub fn detach(&mut self) {
        if let Some(click_closure) = self.click_closure.take() {
            self.document
                .remove_event_listener_with_callback("click", click_closure.as_ref().unchecked_ref())
                .unwrap();
        }
    }
}

#[cfg(test)]
#[path = "smooth_scroll_test.rs"]
mod tests;
