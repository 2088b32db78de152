use yew::prelude::*;

use crate::components::lightbox::{Lightbox, LightboxImage};

const PLACEHOLDER_SRC: &str = "/assets/gallery/placeholder.svg";

const GALLERY_IMAGES: &[(&str, &str)] = &[
    ("/assets/gallery/site-survey.jpg", "Site survey in progress"),
    ("/assets/gallery/control-room.jpg", "24/7 monitoring control room"),
    ("/assets/gallery/install-team.jpg", "Installation team on site"),
    ("/assets/gallery/perimeter.jpg", "Perimeter camera coverage"),
    ("/assets/gallery/access-panel.jpg", "Access control panel fit-out"),
    ("/assets/gallery/training.jpg", "Staff security training session"),
];

// Gallery grid. The single lightbox slot means opening a second image
// replaces the first; two overlays can never stack.
#[function_component(Gallery)]
pub fn gallery() -> Html {
    let lightbox = use_state(|| None::<LightboxImage>);

    let on_close = {
        let lightbox = lightbox.clone();
        Callback::from(move |_| lightbox.set(None))
    };

    html! {
        <>
            <div class="gallery-grid">
                { for GALLERY_IMAGES.iter().map(|(src, alt)| {
                    let onclick = {
                        let lightbox = lightbox.clone();
                        let image = LightboxImage {
                            src: AttrValue::from(*src),
                            alt: AttrValue::from(*alt),
                        };
                        Callback::from(move |_: MouseEvent| lightbox.set(Some(image.clone())))
                    };
                    html! {
                        <img
                            class="gallery-img lazy"
                            src={PLACEHOLDER_SRC}
                            data-src={*src}
                            alt={*alt}
                            onclick={onclick}
                        />
                    }
                }) }
            </div>
            {
                if let Some(image) = (*lightbox).clone() {
                    html! { <Lightbox image={image} on_close={on_close} /> }
                } else {
                    html! {}
                }
            }
        </>
    }
}
