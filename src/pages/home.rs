use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::Document;
use yew::prelude::*;

use crate::components::carousel::HeroCarousel;
use crate::components::contact_form::ContactForm;
use crate::components::gallery::Gallery;
use crate::components::notification::{Notification, NotificationKind, Toast};
use crate::components::testimonials::Testimonials;
use crate::components::video_modal::VideoModal;
use crate::interactions::lazy_images::LazyImageLoader;
use crate::interactions::scroll_effects::ParallaxScroller;
use crate::interactions::smooth_scroll::SmoothScrollRouter;
use crate::interactions::visibility::VisibilityAnimator;

const SERVICES: &[(&str, &str)] = &[
    (
        "Security Systems",
        "Design and installation of CCTV, intruder alarms and access control, \
         scaled from single sites to multi-building estates.",
    ),
    (
        "24/7 Monitoring",
        "A staffed control room watching every connected site around the \
         clock, with guaranteed response times.",
    ),
    (
        "Planned Maintenance",
        "Scheduled inspections and preventative servicing that keep systems \
         compliant and audit-ready.",
    ),
    (
        "Facility Support",
        "Reactive repairs and on-site support delivered by our own engineers, \
         not subcontractors.",
    ),
];

const FEATURES: &[(&str, &str)] = &[
    ("Certified engineers", "NSI Gold accredited installation and service teams."),
    ("One point of contact", "A named account manager for every site we look after."),
    ("Transparent reporting", "Monthly service reports with every visit logged."),
];

const VIDEOS: &[(&str, &str)] = &[
    (
        "Inside our control room",
        "https://www.youtube.com/embed/c7TTgqmH6Do",
    ),
    (
        "A day with the install team",
        "https://www.youtube.com/embed/Qx5tdLdVXcQ",
    ),
];

fn mark_page_loaded(document: &Document) {
    if let Some(body) = document.body() {
        let _ = body.class_list().add_1("loaded");
    }
    if let Ok(Some(active)) = document.query_selector(".carousel-item.active") {
        let _ = active.class_list().remove_1("loading");
    }
}

#[function_component(Home)]
pub fn home() -> Html {
    let notification = use_state(|| None::<Notification>);
    let notification_counter = use_mut_ref(|| 0usize);
    let video_src = use_state(|| None::<AttrValue>);

    // Document-level controllers live for the page; the cleanup tears them
    // down if the page ever unmounts.
    use_effect_with_deps(
        move |_| {
            let window = web_sys::window().unwrap();
            let document = window.document().unwrap();

            let mut router = SmoothScrollRouter::new(document.clone());
            router.attach();
            let mut animator = VisibilityAnimator::new(document.clone());
            animator.attach();
            let mut lazy_loader = LazyImageLoader::new(document.clone());
            lazy_loader.attach();
            let mut parallax = ParallaxScroller::new(window.clone(), document.clone());
            parallax.attach();

            // Load states: the WASM module can start before or after the
            // window load event, so check the ready state too.
            let load_closure = Closure::wrap(Box::new({
                let document = document.clone();
                move || mark_page_loaded(&document)
            }) as Box<dyn FnMut()>);
            if document.ready_state() == "complete" {
                mark_page_loaded(&document);
            } else {
                window
                    .add_event_listener_with_callback(
                        "load",
                        load_closure.as_ref().unchecked_ref(),
                    )
                    .unwrap();
            }

            move || {
                router.detach();
                animator.detach();
                lazy_loader.detach();
                parallax.detach();
                window
                    .remove_event_listener_with_callback(
                        "load",
                        load_closure.as_ref().unchecked_ref(),
                    )
                    .unwrap();
            }
        },
        (),
    );

    // A new toast replaces whatever is on screen; only one ever exists.
    let show_notification = {
        let notification = notification.clone();
        let notification_counter = notification_counter.clone();
        Callback::from(move |(message, kind): (String, NotificationKind)| {
            let id = {
                let mut counter = notification_counter.borrow_mut();
                *counter += 1;
                *counter
            };
            notification.set(Some(Notification { id, message, kind }));
        })
    };
    let dismiss_notification = {
        let notification = notification.clone();
        Callback::from(move |_| notification.set(None))
    };

    let open_video = {
        let video_src = video_src.clone();
        Callback::from(move |event: MouseEvent| {
            let card = event
                .current_target()
                .and_then(|target| target.dyn_into::<web_sys::Element>().ok());
            if let Some(url) = card.and_then(|card| card.get_attribute("data-video")) {
                video_src.set(Some(AttrValue::from(url)));
            }
        })
    };
    let close_video = {
        let video_src = video_src.clone();
        Callback::from(move |_| video_src.set(None))
    };

    html! {
        <main>
            <style>
                {r#"
                    section {
                        padding: 80px 20px;
                        max-width: 1140px;
                        margin: 0 auto;
                    }
                    section h2 {
                        text-align: center;
                        margin-bottom: 40px;
                        font-size: 2rem;
                    }
                    .fade-in {
                        opacity: 0;
                        transform: translateY(20px);
                        transition: opacity 0.6s ease, transform 0.6s ease;
                    }
                    .fade-in.visible {
                        opacity: 1;
                        transform: translateY(0);
                    }
                    .about-layout {
                        position: relative;
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(280px, 1fr));
                        gap: 30px;
                    }
                    .about-ornament {
                        position: absolute;
                        top: -60px;
                        right: -40px;
                        width: 180px;
                        height: 180px;
                        border-radius: 50%;
                        background: radial-gradient(circle, rgba(13,110,253,0.15), transparent 70%);
                        pointer-events: none;
                    }
                    .feature-item h3 {
                        margin-bottom: 8px;
                    }
                    .services-grid {
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(250px, 1fr));
                        gap: 30px;
                    }
                    .service-card {
                        background: white;
                        border-radius: 8px;
                        padding: 30px;
                        box-shadow: 0 2px 10px rgba(0,0,0,0.08);
                    }
                    .gallery-grid {
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(220px, 1fr));
                        gap: 15px;
                    }
                    .gallery-img {
                        width: 100%;
                        aspect-ratio: 4 / 3;
                        object-fit: cover;
                        border-radius: 6px;
                        cursor: pointer;
                    }
                    .video-grid {
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(280px, 1fr));
                        gap: 30px;
                    }
                    .video-card {
                        position: relative;
                        border-radius: 8px;
                        overflow: hidden;
                        cursor: pointer;
                        background: #212529;
                        color: white;
                        padding: 60px 25px;
                        text-align: center;
                    }
                    .contact-form {
                        max-width: 640px;
                        margin: 0 auto;
                        display: grid;
                        gap: 15px;
                    }
                    .form-control {
                        padding: 12px 15px;
                        border: 1px solid #dee2e6;
                        border-radius: 6px;
                        font-size: 1rem;
                    }
                    .submit-button {
                        padding: 12px;
                        border: none;
                        border-radius: 6px;
                        background: #0d6efd;
                        color: white;
                        font-size: 1rem;
                        cursor: pointer;
                    }
                    .submit-button:disabled {
                        opacity: 0.65;
                        cursor: default;
                    }
                    .site-footer {
                        background: #212529;
                        color: #adb5bd;
                        padding: 40px 20px;
                        text-align: center;
                    }
                    .site-footer a {
                        color: #dee2e6;
                        margin: 0 12px;
                        text-decoration: none;
                    }
                "#}
            </style>

            <section id="home" style="padding: 0; max-width: none;">
                <HeroCarousel />
            </section>

            <section id="about">
                <h2>{"Why PSSM"}</h2>
                <div class="about-layout">
                    <div class="about-ornament parallax" data-speed="0.3"></div>
                    { for FEATURES.iter().map(|(title, description)| html! {
                        <div class="feature-item">
                            <h3>{ *title }</h3>
                            <p>{ *description }</p>
                        </div>
                    }) }
                </div>
            </section>

            <section id="services">
                <h2>{"What we do"}</h2>
                <div class="services-grid">
                    { for SERVICES.iter().map(|(title, description)| html! {
                        <div class="service-card">
                            <h3>{ *title }</h3>
                            <p>{ *description }</p>
                        </div>
                    }) }
                </div>
            </section>

            <section id="gallery">
                <h2>{"Recent work"}</h2>
                <Gallery />
            </section>

            <section id="testimonials">
                <h2>{"What clients say"}</h2>
                <Testimonials />
            </section>

            <section id="videos">
                <h2>{"See us in action"}</h2>
                <div class="video-grid">
                    { for VIDEOS.iter().map(|(title, url)| html! {
                        <div class="video-card" data-video={*url} onclick={open_video.clone()}>
                            <h3>{ *title }</h3>
                            <span>{"\u{25b6} Watch"}</span>
                        </div>
                    }) }
                </div>
            </section>

            <section id="contact">
                <h2>{"Get in touch"}</h2>
                <ContactForm on_notify={show_notification} />
            </section>

            <footer class="site-footer">
                <p>
                    <a href="#home">{"Home"}</a>
                    <a href="#services">{"Services"}</a>
                    <a href="#gallery">{"Gallery"}</a>
                    <a href="#contact">{"Contact"}</a>
                </p>
                <p>{"PSSM Security & Site Maintenance"}</p>
            </footer>

            <VideoModal src={(*video_src).clone()} on_close={close_video} />
            {
                if let Some(notification) = (*notification).clone() {
                    html! { <Toast notification={notification} on_dismiss={dismiss_notification} /> }
                } else {
                    html! {}
                }
            }
        </main>
    }
}
