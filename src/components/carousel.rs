use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::wasm_bindgen;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys;
use web_sys::{Element, HtmlElement, KeyboardEvent, TouchEvent};
use yew::prelude::*;

use crate::config;
use crate::interactions::swipe::{SwipeDirection, SwipeTracker};

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = bootstrap)]
    type Carousel;

    #[wasm_bindgen(constructor, js_namespace = bootstrap, js_class = "Carousel")]
    fn new(element: &Element, options: &JsValue) -> Carousel;

    #[wasm_bindgen(method)]
    fn pause(this: &Carousel);

    #[wasm_bindgen(method)]
    fn cycle(this: &Carousel);
}

fn carousel_options() -> JsValue {
    let options = js_sys::Object::new();
    let _ = js_sys::Reflect::set(
        &options,
        &"interval".into(),
        &JsValue::from_f64(f64::from(config::CAROUSEL_INTERVAL_MS)),
    );
    let _ = js_sys::Reflect::set(&options, &"pause".into(), &"hover".into());
    let _ = js_sys::Reflect::set(&options, &"wrap".into(), &JsValue::TRUE);
    options.into()
}

// Keyboard and swipe both drive the widget through its own control
// affordances; the adapter never reimplements slide bookkeeping.
fn click_control(selector: &str) {
    if let Some(button) = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.query_selector(selector).ok().flatten())
        .and_then(|element| element.dyn_into::<HtmlElement>().ok())
    {
        button.click();
    }
}

const HERO_SLIDES: &[(&str, &str, &str)] = &[
    (
        "/assets/hero/monitoring.jpg",
        "Security you can see working",
        "Round-the-clock monitoring backed by a staffed control room.",
    ),
    (
        "/assets/hero/installation.jpg",
        "Installed right the first time",
        "Certified engineers for cameras, access control and alarms.",
    ),
    (
        "/assets/hero/maintenance.jpg",
        "Maintained for the long run",
        "Planned maintenance that keeps every system audit-ready.",
    ),
];

#[function_component(HeroCarousel)]
pub fn hero_carousel() -> Html {
    let root = use_node_ref();

    {
        let root = root.clone();
        use_effect_with_deps(
            move |_| {
                let destructor: Box<dyn FnOnce()> = if let Some(element) = root.cast::<Element>() {
                    let widget = Rc::new(Carousel::new(&element, &carousel_options()));

                    // The widget already pauses on hover; the explicit pair
                    // keeps auto-advance stopped for the whole hover.
                    let enter = Closure::wrap(Box::new({
                        let widget = Rc::clone(&widget);
                        move || widget.pause()
                    }) as Box<dyn FnMut()>);
                    let leave = Closure::wrap(Box::new({
                        let widget = Rc::clone(&widget);
                        move || widget.cycle()
                    }) as Box<dyn FnMut()>);
                    element
                        .add_event_listener_with_callback(
                            "mouseenter",
                            enter.as_ref().unchecked_ref(),
                        )
                        .unwrap();
                    element
                        .add_event_listener_with_callback(
                            "mouseleave",
                            leave.as_ref().unchecked_ref(),
                        )
                        .unwrap();

                    // First slide fades in shortly after mount; the window
                    // load handler strips the loading class again.
                    let reveal = element.query_selector(".carousel-item").ok().flatten().map(
                        |first| {
                            let _ = first.class_list().add_1("loading");
                            Timeout::new(config::CAROUSEL_REVEAL_DELAY_MS, move || {
                                let _ = first.class_list().add_1("visible");
                            })
                        },
                    );

                    let document = web_sys::window().unwrap().document().unwrap();

                    let keydown = Closure::wrap(Box::new(move |event: KeyboardEvent| {
                        match event.key().as_str() {
                            "ArrowLeft" => click_control(".carousel-control-prev"),
                            "ArrowRight" => click_control(".carousel-control-next"),
                            _ => {}
                        }
                    })
                        as Box<dyn FnMut(KeyboardEvent)>);
                    document
                        .add_event_listener_with_callback(
                            "keydown",
                            keydown.as_ref().unchecked_ref(),
                        )
                        .unwrap();

                    let tracker = Rc::new(RefCell::new(SwipeTracker::new()));
                    let touchstart = Closure::wrap(Box::new({
                        let tracker = Rc::clone(&tracker);
                        move |event: TouchEvent| {
                            if let Some(touch) = event.changed_touches().get(0) {
                                tracker.borrow_mut().begin(f64::from(touch.screen_x()));
                            }
                        }
                    })
                        as Box<dyn FnMut(TouchEvent)>);
                    let touchend = Closure::wrap(Box::new({
                        let tracker = Rc::clone(&tracker);
                        move |event: TouchEvent| {
                            if let Some(touch) = event.changed_touches().get(0) {
                                match tracker.borrow_mut().end(f64::from(touch.screen_x())) {
                                    Some(SwipeDirection::Left) => {
                                        click_control(".carousel-control-next")
                                    }
                                    Some(SwipeDirection::Right) => {
                                        click_control(".carousel-control-prev")
                                    }
                                    None => {}
                                }
                            }
                        }
                    })
                        as Box<dyn FnMut(TouchEvent)>);
                    document
                        .add_event_listener_with_callback(
                            "touchstart",
                            touchstart.as_ref().unchecked_ref(),
                        )
                        .unwrap();
                    document
                        .add_event_listener_with_callback(
                            "touchend",
                            touchend.as_ref().unchecked_ref(),
                        )
                        .unwrap();

                    Box::new(move || {
                        element
                            .remove_event_listener_with_callback(
                                "mouseenter",
                                enter.as_ref().unchecked_ref(),
                            )
                            .unwrap();
                        element
                            .remove_event_listener_with_callback(
                                "mouseleave",
                                leave.as_ref().unchecked_ref(),
                            )
                            .unwrap();
                        document
                            .remove_event_listener_with_callback(
                                "keydown",
                                keydown.as_ref().unchecked_ref(),
                            )
                            .unwrap();
                        document
                            .remove_event_listener_with_callback(
                                "touchstart",
                                touchstart.as_ref().unchecked_ref(),
                            )
                            .unwrap();
                        document
                            .remove_event_listener_with_callback(
                                "touchend",
                                touchend.as_ref().unchecked_ref(),
                            )
                            .unwrap();
                        drop(reveal);
                        drop(widget);
                    })
                } else {
                    Box::new(|| ())
                };
                move || destructor()
            },
            (),
        );
    }

    html! {
        <div id="heroCarousel" class="carousel slide" ref={root}>
            <style>
                {r#"
                    .carousel-item.loading {
                        opacity: 0;
                    }
                    .carousel-item.loading.visible {
                        opacity: 1;
                        transition: opacity 0.6s ease;
                    }
                    .carousel-caption h1 {
                        font-size: 2.5rem;
                    }
                "#}
            </style>
            <div class="carousel-indicators">
                { for (0..HERO_SLIDES.len()).map(|index| html! {
                    <button
                        type="button"
                        data-bs-target="#heroCarousel"
                        data-bs-slide-to={index.to_string()}
                        class={classes!((index == 0).then(|| "active"))}
                        aria-label={format!("Slide {}", index + 1)}
                    />
                }) }
            </div>
            <div class="carousel-inner">
                { for HERO_SLIDES.iter().enumerate().map(|(index, (image, title, lead))| html! {
                    <div class={classes!("carousel-item", (index == 0).then(|| "active"))}>
                        <img src={*image} class="d-block w-100" alt={*title} />
                        <div class="carousel-caption">
                            <h1>{ *title }</h1>
                            <p>{ *lead }</p>
                            <a href="#contact" class="hero-cta">{"Request a survey"}</a>
                        </div>
                    </div>
                }) }
            </div>
            <button
                class="carousel-control-prev"
                type="button"
                data-bs-target="#heroCarousel"
                data-bs-slide="prev"
            >
                <span class="carousel-control-prev-icon" aria-hidden="true"></span>
                <span class="visually-hidden">{"Previous"}</span>
            </button>
            <button
                class="carousel-control-next"
                type="button"
                data-bs-target="#heroCarousel"
                data-bs-slide="next"
            >
                <span class="carousel-control-next-icon" aria-hidden="true"></span>
                <span class="visually-hidden">{"Next"}</span>
            </button>
        </div>
    }
}
