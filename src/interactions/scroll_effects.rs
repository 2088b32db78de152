use std::cell::Cell;
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement, Window};

use crate::config;

pub fn navbar_scrolled(scroll_y: f64) -> bool {
    scroll_y >= config::NAVBAR_SCROLL_THRESHOLD
}

pub fn parse_speed(attr: Option<String>) -> f64 {
    attr.and_then(|value| value.trim().parse().ok())
        .unwrap_or(config::PARALLAX_DEFAULT_SPEED)
}

pub fn parallax_offset(scroll_y: f64, speed: f64) -> f64 {
    -(scroll_y * speed)
}

// Translates every `.parallax` element against the scroll position. Scroll
// events only queue a recompute; the work happens in the next animation
// frame, with the pending flag keeping at most one frame queued.
pub struct ParallaxScroller {
    window: Window,
    document: Document,
    pending: Rc<Cell<bool>>,
    scroll_closure: Option<Closure<dyn FnMut()>>,
}

impl ParallaxScroller {
    pub fn new(window: Window, document: Document) -> Self {
        Self {
            window,
            document,
            pending: Rc::new(Cell::new(false)),
            scroll_closure: None,
        }
    }

    pub fn attach(&mut self) {
        let window = self.window.clone();
        let document = self.document.clone();
        let pending = Rc::clone(&self.pending);

        let scroll_closure = Closure::wrap(Box::new(move || {
            if pending.get() {
                return;
            }
            pending.set(true);

            let pending_for_frame = Rc::clone(&pending);
            let window_for_frame = window.clone();
            let document_for_frame = document.clone();
            let frame = Closure::once_into_js(move |_timestamp: f64| {
                pending_for_frame.set(false);
                update_parallax(&window_for_frame, &document_for_frame);
            });

            if window.request_animation_frame(frame.unchecked_ref()).is_err() {
                pending.set(false);
            }
        }) as Box<dyn FnMut()>);

        self.window
            .add_event_listener_with_callback("scroll", scroll_closure.as_ref().unchecked_ref())
            .unwrap();
        self.scroll_closure = Some(scroll_closure);
    }

    pub fn detach(&mut self) {
        if let Some(scroll_closure) = self.scroll_closure.take() {
            self.window
                .remove_event_listener_with_callback("scroll", scroll_closure.as_ref().unchecked_ref())
                .unwrap();
        }
    }
}

fn update_parallax(window: &Window, document: &Document) {
    let scroll_y = window.scroll_y().unwrap_or(0.0);
    let Ok(elements) = document.query_selector_all(".parallax") else {
        return;
    };
    for index in 0..elements.length() {
        let Some(element) = elements
            .get(index)
            .and_then(|node| node.dyn_into::<HtmlElement>().ok())
        else {
            continue;
        };
        let speed = parse_speed(element.get_attribute("data-speed"));
        let offset = parallax_offset(scroll_y, speed);
        let _ = element
            .style()
            .set_property("transform", &format!("translateY({}px)", offset));
    }
}

#[cfg(test)]
#[path = "scroll_effects_test.rs"]
mod tests;
