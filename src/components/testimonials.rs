use web_sys::HtmlElement;
use yew::prelude::*;

use crate::config;

const TESTIMONIALS: &[(&str, &str, &str)] = &[
    (
        "PSSM overhauled our site security in a week. The monitoring team \
         caught an after-hours breach attempt within the first month.",
        "Sarah Okafor",
        "Operations Director, Brightline Logistics",
    ),
    (
        "Professional from survey to handover. The access control rollout \
         covered four buildings without a single day of disruption.",
        "James Whitfield",
        "Facilities Manager, Corvus Business Park",
    ),
    (
        "Their maintenance crew treats our campus like their own. Issues get \
         fixed before we even notice them.",
        "Priya Raman",
        "Estate Lead, Halebury College",
    ),
    (
        "Clear reporting, fair pricing, and a control room that actually \
         answers at 3am. Exactly what we needed.",
        "Tom\u{e1}s Herrera",
        "Owner, Herrera Retail Group",
    ),
];

pub fn parse_translate_x(transform: &str) -> f64 {
    transform
        .trim()
        .strip_prefix("translateX(")
        .and_then(|rest| rest.strip_suffix("px)"))
        .and_then(|value| value.trim().parse().ok())
        .unwrap_or(0.0)
}

// One step per call; wraps back to the start once the offset magnitude
// passes the full track length.
pub fn step_offset(current: f64, direction: i32, card_count: usize) -> f64 {
    let next = current - f64::from(direction) * config::TESTIMONIAL_CARD_WIDTH;
    let track_length = card_count as f64 * config::TESTIMONIAL_CARD_WIDTH;
    if next.abs() > track_length {
        0.0
    } else {
        next
    }
}

#[function_component(Testimonials)]
pub fn testimonials() -> Html {
    let track = use_node_ref();

    let move_carousel = {
        let track = track.clone();
        move |direction: i32| {
            let track = track.clone();
            Callback::from(move |_: MouseEvent| {
                let Some(track) = track.cast::<HtmlElement>() else {
                    return;
                };
                let card_count = track
                    .query_selector_all(".testimonial-card")
                    .map(|cards| cards.length() as usize)
                    .unwrap_or(0);
                let current =
                    parse_translate_x(&track.style().get_property_value("transform").unwrap_or_default());
                let next = step_offset(current, direction, card_count);
                let _ = track
                    .style()
                    .set_property("transform", &format!("translateX({}px)", next));
            })
        }
    };

    // Hover suspends the CSS auto-scroll animation.
    let pause = {
        let track = track.clone();
        Callback::from(move |_: MouseEvent| {
            if let Some(track) = track.cast::<HtmlElement>() {
                let _ = track.style().set_property("animation-play-state", "paused");
            }
        })
    };
    let resume = {
        let track = track.clone();
        Callback::from(move |_: MouseEvent| {
            if let Some(track) = track.cast::<HtmlElement>() {
                let _ = track.style().set_property("animation-play-state", "running");
            }
        })
    };

    html! {
        <div class="testimonials-carousel">
            <style>
                {r#"
                    .testimonials-carousel {
                        position: relative;
                        overflow: hidden;
                    }
                    .testimonials-track {
                        display: flex;
                        gap: 30px;
                        transition: transform 0.4s ease;
                    }
                    .testimonial-card {
                        flex: 0 0 350px;
                        background: white;
                        border-radius: 8px;
                        padding: 25px;
                        box-shadow: 0 2px 10px rgba(0,0,0,0.08);
                    }
                    .testimonial-card cite {
                        display: block;
                        margin-top: 15px;
                        font-style: normal;
                        font-weight: 600;
                    }
                    .testimonial-role {
                        color: #6c757d;
                        font-size: 0.9rem;
                    }
                    .carousel-nav {
                        display: flex;
                        gap: 10px;
                        justify-content: center;
                        margin-top: 25px;
                    }
                    .carousel-nav button {
                        border: 1px solid #dee2e6;
                        background: white;
                        border-radius: 50%;
                        width: 42px;
                        height: 42px;
                        cursor: pointer;
                    }
                "#}
            </style>
            <div
                id="carouselTrack"
                class="testimonials-track"
                ref={track}
                onmouseenter={pause}
                onmouseleave={resume}
            >
                { for TESTIMONIALS.iter().map(|(quote, name, role)| html! {
                    <blockquote class="testimonial-card quote-card">
                        <p>{ *quote }</p>
                        <cite>{ *name }</cite>
                        <span class="testimonial-role">{ *role }</span>
                    </blockquote>
                }) }
            </div>
            <div class="carousel-nav">
                <button aria-label="Previous testimonials" onclick={move_carousel(-1)}>{"\u{2039}"}</button>
                <button aria-label="Next testimonials" onclick={move_carousel(1)}>{"\u{203a}"}</button>
            </div>
        </div>
    }
}

#[cfg(test)]
#[path = "testimonials_test.rs"]
mod tests;
