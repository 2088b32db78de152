use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::KeyboardEvent;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct VideoModalProps {
    pub src: Option<AttrValue>,
    pub on_close: Callback<()>,
}

// Singleton overlay for embedded videos. The iframe source is driven from
// the `src` prop; clearing it to the empty string is what stops playback.
#[function_component(VideoModal)]
pub fn video_modal(props: &VideoModalProps) -> Html {
    let open = props.src.is_some();

    // Lock page scrolling behind the modal.
    use_effect_with_deps(
        move |open| {
            if let Some(body) = web_sys::window()
                .and_then(|window| window.document())
                .and_then(|document| document.body())
            {
                let overflow = if *open { "hidden" } else { "auto" };
                let _ = body.style().set_property("overflow", overflow);
            }
            || ()
        },
        open,
    );

    // Escape closes, but only while the modal is visible.
    {
        let on_close = props.on_close.clone();
        use_effect_with_deps(
            move |open| {
                let destructor: Box<dyn FnOnce()> = if *open {
                    let document = web_sys::window().unwrap().document().unwrap();
                    let keydown = Closure::wrap(Box::new(move |event: KeyboardEvent| {
                        if event.key() == "Escape" {
                            on_close.emit(());
                        }
                    }) as Box<dyn FnMut(KeyboardEvent)>);
                    document
                        .add_event_listener_with_callback(
                            "keydown",
                            keydown.as_ref().unchecked_ref(),
                        )
                        .unwrap();
                    Box::new(move || {
                        document
                            .remove_event_listener_with_callback(
                                "keydown",
                                keydown.as_ref().unchecked_ref(),
                            )
                            .unwrap();
                    })
                } else {
                    Box::new(|| ())
                };
                move || destructor()
            },
            open,
        );
    }

    let backdrop_click = {
        let on_close = props.on_close.clone();
        Callback::from(move |event: MouseEvent| {
            let on_backdrop = event
                .target_dyn_into::<web_sys::Element>()
                .map(|element| element.class_list().contains("video-modal"))
                .unwrap_or(false);
            if on_backdrop {
                on_close.emit(());
            }
        })
    };

    let close_click = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    let display = if open {
        "display: block;"
    } else {
        "display: none;"
    };

    html! {
        <div id="videoModal" class="video-modal" style={display} onclick={backdrop_click}>
            <style>
                {r#"
                    .video-modal {
                        position: fixed;
                        top: 0;
                        left: 0;
                        width: 100%;
                        height: 100%;
                        background: rgba(0, 0, 0, 0.85);
                        z-index: 10000;
                    }
                    .video-modal-content {
                        position: relative;
                        width: min(900px, 90%);
                        margin: 8vh auto 0;
                        aspect-ratio: 16 / 9;
                    }
                    .video-modal-content iframe {
                        width: 100%;
                        height: 100%;
                        border: 0;
                    }
                    .close-modal {
                        position: absolute;
                        top: -40px;
                        right: 0;
                        color: white;
                        font-size: 30px;
                        cursor: pointer;
                    }
                "#}
            </style>
            <div class="video-modal-content">
                <span class="close-modal" onclick={close_click}>{"\u{00d7}"}</span>
                <iframe
                    id="modalVideo"
                    src={props.src.clone().unwrap_or_default()}
                    allow="autoplay; encrypted-media"
                    allowfullscreen={true}
                />
            </div>
        </div>
    }
}
