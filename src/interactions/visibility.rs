use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys;
use web_sys::{
    Document, Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit,
};

use crate::config;

const ANIMATED_SELECTOR: &str = ".service-card, .feature-item, .gallery-img, .quote-card";

// Flips content elements from "pending" to "visible" the first time they
// enter the viewport. The transition is one-way and observation lives for
// the rest of the page; detach exists for unmount symmetry only.
pub struct VisibilityAnimator {
    document: Document,
    observer: Option<IntersectionObserver>,
    callback: Option<Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>>,
}

impl VisibilityAnimator {
    pub fn new(document: Document) -> Self {
        Self {
            document,
            observer: None,
            callback: None,
        }
    }

    pub fn attach(&mut self) {
        let callback = Closure::wrap(Box::new(
            move |entries: js_sys::Array, _observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                        continue;
                    };
                    if entry.is_intersecting() {
                        let _ = entry.target().class_list().add_2("fade-in", "visible");
                    }
                }
            },
        )
            as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(config::VISIBILITY_THRESHOLD));
        options.set_root_margin(config::VISIBILITY_ROOT_MARGIN);

        let Ok(observer) =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
        else {
            return;
        };

        if let Ok(elements) = self.document.query_selector_all(ANIMATED_SELECTOR) {
            for index in 0..elements.length() {
                if let Some(element) = elements
                    .get(index)
                    .and_then(|node| node.dyn_into::<Element>().ok())
                {
                    let _ = element.class_list().add_1("fade-in");
                    observer.observe(&element);
                }
            }
        }

        self.observer = Some(observer);
        self.callback = Some(callback);
    }

    pub fn detach(&mut self) {
        if let Some(observer) = self.observer.take() {
            observer.disconnect();
        }
        self.callback = None;
    }
}
