use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::js_sys;
use web_sys::{Document, Element, IntersectionObserver, IntersectionObserverEntry};

// Promotes deferred image sources once the image nears the viewport. Each
// image is unobserved after its first intersection.
pub struct LazyImageLoader {
    document: Document,
    observer: Option<IntersectionObserver>,
    callback: Option<Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>>,
}

impl LazyImageLoader {
    pub fn new(document: Document) -> Self {
        Self {
            document,
            observer: None,
            callback: None,
        }
    }

    pub fn attach(&mut self) {
        let callback = Closure::wrap(Box::new(
            move |entries: js_sys::Array, observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                        continue;
                    };
                    if !entry.is_intersecting() {
                        continue;
                    }
                    let image = entry.target();
                    if let Some(source) = image.get_attribute("data-src") {
                        let _ = image.set_attribute("src", &source);
                    }
                    let _ = image.class_list().remove_1("lazy");
                    observer.unobserve(&image);
                }
            },
        )
            as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

        let Ok(observer) = IntersectionObserver::new(callback.as_ref().unchecked_ref()) else {
            return;
        };

        if let Ok(images) = self.document.query_selector_all("img[data-src]") {
            for index in 0..images.length() {
                if let Some(image) = images
                    .get(index)
                    .and_then(|node| node.dyn_into::<Element>().ok())
                {
                    observer.observe(&image);
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
