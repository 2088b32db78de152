use log::{info, Level};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use yew::prelude::*;

mod config;
mod components {
    pub mod carousel;
    pub mod contact_form;
    pub mod gallery;
    pub mod lightbox;
    pub mod notification;
    pub mod testimonials;
    pub mod video_modal;
}
mod interactions {
    pub mod lazy_images;
    pub mod scroll_effects;
    pub mod smooth_scroll;
    pub mod swipe;
    pub mod visibility;
}
mod pages {
    pub mod home;
}

use interactions::scroll_effects::navbar_scrolled;
use pages::home::Home;

const NAV_LINKS: &[(&str, &str)] = &[
    ("#home", "Home"),
    ("#services", "Services"),
    ("#gallery", "Gallery"),
    ("#testimonials", "Testimonials"),
    ("#contact", "Contact"),
];

#[function_component(Nav)]
pub fn nav() -> Html {
    let menu_open = use_state(|| false);
    let is_scrolled = use_state(|| false);
    let active = use_state(|| "#home");

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(
            move |_| {
                let window = web_sys::window().unwrap();

                let scroll_callback = Closure::wrap(Box::new({
                    let window = window.clone();
                    move || {
                        let scroll_top = window.scroll_y().unwrap_or(0.0);
                        is_scrolled.set(navbar_scrolled(scroll_top));
                    }
                }) as Box<dyn FnMut()>);

                window
                    .add_event_listener_with_callback(
                        "scroll",
                        scroll_callback.as_ref().unchecked_ref(),
                    )
                    .unwrap();

                move || {
                    window
                        .remove_event_listener_with_callback(
                            "scroll",
                            scroll_callback.as_ref().unchecked_ref(),
                        )
                        .unwrap();
                }
            },
            (),
        );
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    html! {
        <nav class={classes!("navbar", (*is_scrolled).then(|| "navbar-scrolled"))}>
            <style>
                {r#"
                    .navbar {
                        position: fixed;
                        top: 0;
                        left: 0;
                        right: 0;
                        z-index: 1000;
                        background: transparent;
                        transition: background 0.3s ease;
                    }
                    .navbar-scrolled {
                        background: rgba(33, 37, 41, 0.95);
                        backdrop-filter: blur(10px);
                    }
                    .nav-content {
                        max-width: 1140px;
                        margin: 0 auto;
                        padding: 15px 20px;
                        display: flex;
                        align-items: center;
                        justify-content: space-between;
                    }
                    .navbar-brand {
                        color: white;
                        font-weight: 700;
                        font-size: 1.4rem;
                        text-decoration: none;
                    }
                    .nav-link {
                        color: #dee2e6;
                        text-decoration: none;
                        margin-left: 25px;
                    }
                    .nav-link.active {
                        color: white;
                        font-weight: 600;
                    }
                    .navbar-toggler {
                        display: none;
                        background: none;
                        border: none;
                        cursor: pointer;
                    }
                    .navbar-toggler span {
                        display: block;
                        width: 24px;
                        height: 2px;
                        background: white;
                        margin: 5px 0;
                    }
                    @media (max-width: 992px) {
                        .navbar-toggler { display: block; }
                        .navbar-collapse {
                            display: none;
                            position: absolute;
                            top: 100%;
                            left: 0;
                            right: 0;
                            background: rgba(33, 37, 41, 0.98);
                            padding: 15px 20px;
                        }
                        .navbar-collapse.show { display: block; }
                        .navbar-collapse .nav-link {
                            display: block;
                            margin: 10px 0;
                        }
                    }
                "#}
            </style>
            <div class="nav-content">
                <a href="#home" class="navbar-brand">{"PSSM"}</a>

                <button class="navbar-toggler" aria-label="Toggle navigation" onclick={toggle_menu}>
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <div class={classes!("navbar-collapse", (*menu_open).then(|| "show"))}>
                    { for NAV_LINKS.iter().map(|(href, label)| {
                        let onclick = {
                            let active = active.clone();
                            let menu_open = menu_open.clone();
                            let href = *href;
                            Callback::from(move |_: MouseEvent| {
                                active.set(href);
                                // The panel only exists below the breakpoint.
                                let narrow = web_sys::window()
                                    .and_then(|window| window.inner_width().ok())
                                    .and_then(|width| width.as_f64())
                                    .map(|width| width < config::MOBILE_MENU_BREAKPOINT)
                                    .unwrap_or(false);
                                if narrow {
                                    menu_open.set(false);
                                }
                            })
                        };
                        html! {
                            <a
                                href={*href}
                                class={classes!("nav-link", (*active == *href).then(|| "active"))}
                                onclick={onclick}
                            >
                                { *label }
                            </a>
                        }
                    }) }
                </div>
            </div>
        </nav>
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <>
            <Nav />
            <Home />
        </>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("PSSM home page initialized successfully");
    yew::Renderer::<App>::new().render();
}
