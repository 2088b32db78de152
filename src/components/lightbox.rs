use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::KeyboardEvent;
use yew::prelude::*;

#[derive(Clone, PartialEq)]
pub struct LightboxImage {
    pub src: AttrValue,
    pub alt: AttrValue,
}

#[derive(Properties, PartialEq)]
pub struct LightboxProps {
    pub image: LightboxImage,
    pub on_close: Callback<()>,
}

// Full-screen image overlay. Mounted only while an image is open, so the
// Escape listener exists exactly as long as the overlay does.
#[function_component(Lightbox)]
pub fn lightbox(props: &LightboxProps) -> Html {
    {
        let on_close = props.on_close.clone();
        use_effect_with_deps(
            move |_| {
                let document = web_sys::window().unwrap().document().unwrap();
                let keydown = Closure::wrap(Box::new(move |event: KeyboardEvent| {
                    if event.key() == "Escape" {
                        on_close.emit(());
                    }
                }) as Box<dyn FnMut(KeyboardEvent)>);
                document
                    .add_event_listener_with_callback("keydown", keydown.as_ref().unchecked_ref())
                    .unwrap();
                move || {
                    document
                        .remove_event_listener_with_callback(
                            "keydown",
                            keydown.as_ref().unchecked_ref(),
                        )
                        .unwrap();
                }
            },
            (),
        );
    }

    // Backdrop and close-glyph clicks dismiss; clicks on the image itself
    // fall through.
    let onclick = {
        let on_close = props.on_close.clone();
        Callback::from(move |event: MouseEvent| {
            let closes = event
                .target_dyn_into::<web_sys::Element>()
                .map(|element| {
                    let classes = element.class_list();
                    classes.contains("lightbox") || classes.contains("lightbox-close")
                })
                .unwrap_or(false);
            if closes {
                on_close.emit(());
            }
        })
    };

    html! {
        <div class="lightbox" onclick={onclick}>
            <style>
                {r#"
                    .lightbox {
                        position: fixed;
                        top: 0;
                        left: 0;
                        width: 100%;
                        height: 100%;
                        background: rgba(0, 0, 0, 0.9);
                        display: flex;
                        justify-content: center;
                        align-items: center;
                        z-index: 10000;
                        animation: fadeIn 0.3s ease;
                    }
                    @keyframes fadeIn {
                        from { opacity: 0; }
                        to { opacity: 1; }
                    }
                    .lightbox-content {
                        position: relative;
                        max-width: 90%;
                        max-height: 90%;
                    }
                    .lightbox-image {
                        max-width: 100%;
                        max-height: 100%;
                        object-fit: contain;
                    }
                    .lightbox-close {
                        position: absolute;
                        top: -40px;
                        right: 0;
                        color: white;
                        font-size: 30px;
                        cursor: pointer;
                        background: none;
                        border: none;
                    }
                    .lightbox-caption {
                        position: absolute;
                        bottom: -40px;
                        left: 0;
                        color: white;
                        text-align: center;
                        width: 100%;
                    }
                "#}
            </style>
            <div class="lightbox-content">
                <span class="lightbox-close">{"\u{00d7}"}</span>
                <img
                    src={props.image.src.clone()}
                    alt={props.image.alt.clone()}
                    class="lightbox-image"
                />
                <div class="lightbox-caption">{ props.image.alt.clone() }</div>
            </div>
        </div>
    }
}
