use leptos::portal::Portal;
use leptos::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::KeyboardEvent;

use super::scroll_lock::{install_scroll_lock, BodyScroll};
use super::service::{ModalContent, ModalStackService};
use super::stack::StackEntry;
use crate::shared::modal_frame::ModalFrame;

/// Renders the modal stack into a portal on `document.body`.
///
/// Must be mounted exactly once, below the `ModalStackService` provider.
/// Nothing is rendered until the host has mounted, even if dialogs were
/// pushed earlier; they appear on the first pass after mount.
#[component]
pub fn ModalHost() -> impl IntoView {
    let svc = use_context::<ModalStackService>()
        .expect("ModalStackService not provided in context (provide it in app root)");

    let mounted = RwSignal::new(false);
    Effect::new(move |_| {
        if !mounted.get_untracked() {
            mounted.set(true);
        }
    });

    install_scroll_lock(svc, BodyScroll);

    // Global Escape handler: closes only the topmost modal.
    Effect::new(move |_| {
        let closure = Closure::wrap(Box::new(move |event: web_sys::Event| {
            if let Some(keyboard_event) = event.dyn_ref::<KeyboardEvent>() {
                if keyboard_event.key() == "Escape" && svc.is_open_untracked() {
                    svc.close_modal_after_dispatch();
                }
            }
        }) as Box<dyn FnMut(_)>);

        if let Some(window) = web_sys::window() {
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            // Listener stays for the page lifetime, like the host itself.
            closure.forget();
        }
    });

    view! {
        <Show when=move || mounted.get() && svc.is_open()>
            <Portal>
                <For
                    each=move || svc.layers()
                    key=|(_, entry): &(i32, StackEntry<ModalContent>)| entry.id
                    children=move |(z_index, entry)| {
                        let id = entry.id;
                        let on_close = Callback::new(move |_| svc.close_modal_after_dispatch());
                        // Lower layers must never pop a dialog above them.
                        let is_top = Signal::derive(move || svc.is_top(id));
                        let content = entry.content.clone();
                        view! {
                            <ModalFrame z_index=z_index on_close=on_close close_on_backdrop=is_top>
                                {content()}
                            </ModalFrame>
                        }
                    }
                />
            </Portal>
        </Show>
    }
}
