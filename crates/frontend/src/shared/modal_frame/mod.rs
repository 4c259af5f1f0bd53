use leptos::ev;
use leptos::prelude::*;

/// One stack layer: full-screen overlay holding its own backdrop and the dialog surface.
///
/// The frame renders no header or buttons; dialogs bring their own.
#[component]
pub fn ModalFrame(
    /// Called when the backdrop is clicked.
    on_close: Callback<()>,
    /// Whether a backdrop click closes (default: always).
    #[prop(optional, into)]
    close_on_backdrop: Option<Signal<bool>>,
    /// z-index of this layer (default: 1000).
    #[prop(optional)]
    z_index: Option<i32>,
    children: Children,
) -> impl IntoView {
    let z_index = z_index.unwrap_or(1000);
    let backdrop_mouse_down = RwSignal::new(false);

    let is_direct_overlay_event = |ev: &ev::MouseEvent| -> bool {
        match (ev.target(), ev.current_target()) {
            (Some(t), Some(ct)) => t == ct,
            _ => false,
        }
    };

    // Only close if both press and release happened on the backdrop itself, so a
    // text selection dragged out of the dialog does not dismiss it.
    let handle_backdrop_mouse_down = move |ev: ev::MouseEvent| {
        backdrop_mouse_down.set(is_direct_overlay_event(&ev));
    };

    let handle_backdrop_click = move |ev: ev::MouseEvent| {
        let enabled = close_on_backdrop.map_or(true, |flag| flag.get_untracked());
        let should_close =
            enabled && backdrop_mouse_down.get_untracked() && is_direct_overlay_event(&ev);
        backdrop_mouse_down.set(false);
        if should_close {
            on_close.run(());
        }
    };

    let stop_propagation = move |ev: ev::MouseEvent| {
        ev.stop_propagation();
    };

    view! {
        <div class="modal-overlay" style=format!("z-index: {z_index};")>
            <div
                class="modal-backdrop"
                aria-hidden="true"
                on:mousedown=handle_backdrop_mouse_down
                on:click=handle_backdrop_click
            ></div>
            <div
                class="modal-wrapper"
                on:mousedown=stop_propagation
                on:click=stop_propagation
            >
                {children()}
            </div>
        </div>
    }
}
