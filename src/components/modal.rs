//! Overlay shell for the booking form and the video lightbox. The parent
//! decides openness by mounting/unmounting it, so while closed nothing inside
//! can be observed or fire side effects.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ModalProps {
    pub on_close: Callback<()>,
    pub children: Children,
    /// Wider box, used by the video lightbox.
    #[prop_or(false)]
    pub wide: bool,
}

#[function_component(Modal)]
pub fn modal(props: &ModalProps) -> Html {
    // Body scroll lock for the overlay's lifetime. Locking and unlocking live
    // in one effect so the lock cannot outlive the modal.
    use_effect_with_deps(
        move |_| {
            let scroll_y = web_sys::window()
                .and_then(|window| window.scroll_y().ok())
                .unwrap_or(0.0);
            if let Some(body) = web_sys::window()
                .and_then(|window| window.document())
                .and_then(|document| document.body())
            {
                let style = body.style();
                let _ = style.set_property("position", "fixed");
                let _ = style.set_property("top", &format!("-{}px", scroll_y));
                let _ = style.set_property("left", "0");
                let _ = style.set_property("right", "0");
                let _ = style.set_property("width", "100%");
            }
            move || {
                if let Some(body) = web_sys::window()
                    .and_then(|window| window.document())
                    .and_then(|document| document.body())
                {
                    let style = body.style();
                    for prop in ["position", "top", "left", "right", "width"] {
                        let _ = style.remove_property(prop);
                    }
                }
                if let Some(window) = web_sys::window() {
                    window.scroll_to_with_x_and_y(0.0, scroll_y);
                }
            }
        },
        (),
    );

    // Escape closes.
    {
        let on_close = props.on_close.clone();
        use_effect_with_deps(
            move |_| {
                let window = web_sys::window().unwrap();
                let keydown = Closure::wrap(Box::new(move |e: web_sys::KeyboardEvent| {
                    if e.key() == "Escape" {
                        on_close.emit(());
                    }
                }) as Box<dyn FnMut(web_sys::KeyboardEvent)>);

                window
                    .add_event_listener_with_callback("keydown", keydown.as_ref().unchecked_ref())
                    .unwrap();

                move || {
                    window
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

    let on_backdrop = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };
    let stop_bubbling = Callback::from(|e: MouseEvent| e.stop_propagation());
    let on_close_click = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    html! {
        <div class="modal-overlay" onmousedown={on_backdrop} role="dialog" aria-modal="true">
            <div
                class={classes!("modal-box", props.wide.then_some("modal-box-wide"))}
                onmousedown={stop_bubbling}
            >
                <button class="modal-close" onclick={on_close_click} aria-label="Aizvērt">
                    {"✕"}
                </button>
                { for props.children.iter() }
            </div>
        </div>
    }
}
