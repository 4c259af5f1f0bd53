use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::routes::Navigator;
use crate::shared::modal_stack::ModalStackService;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ModalVariant {
    #[default]
    Info,
    Danger,
}

impl ModalVariant {
    fn class(self) -> &'static str {
        match self {
            ModalVariant::Info => "dialog--info",
            ModalVariant::Danger => "dialog--danger",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ModalActions {
    #[default]
    Single,
    Dual,
}

/// Run a dialog button handler after the click has finished dispatching.
///
/// Handlers usually pop the stack, which unmounts the button that fired.
fn run_after_dispatch(cb: Callback<()>) {
    spawn_local(async move {
        cb.run(());
    });
}

/// Title + message dialog with one or two buttons, meant to be pushed on the modal stack.
///
/// The dialog never closes itself: each handler decides how many levels to pop.
#[component]
pub fn Modal(
    #[prop(into)] title: String,
    #[prop(into)] message: String,
    #[prop(optional)] variant: ModalVariant,
    #[prop(optional)] actions: ModalActions,
    #[prop(optional, into)] confirm_text: Option<String>,
    #[prop(optional, into)] cancel_text: Option<String>,
    on_confirm: Callback<()>,
    /// Only rendered for `ModalActions::Dual`.
    #[prop(optional)]
    on_cancel: Option<Callback<()>>,
) -> impl IntoView {
    let confirm_text = confirm_text.unwrap_or_else(|| "OK".to_string());
    let cancel_text = cancel_text.unwrap_or_else(|| "Cancel".to_string());
    let actions_class = match actions {
        ModalActions::Single => "dialog__actions dialog__actions--single",
        ModalActions::Dual => "dialog__actions dialog__actions--dual",
    };

    let cancel_button = (actions == ModalActions::Dual).then(|| {
        view! {
            <Button
                appearance=ButtonAppearance::Secondary
                on_click=move |_| {
                    if let Some(cb) = on_cancel {
                        run_after_dispatch(cb);
                    }
                }
            >
                {cancel_text}
            </Button>
        }
    });

    view! {
        <div class=format!("dialog {}", variant.class()) role="dialog">
            <div class="dialog__content">
                <div class="dialog__title">{title}</div>
                <div class="dialog__message">{message}</div>
            </div>
            <div class=actions_class>
                {cancel_button}
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=move |_| run_after_dispatch(on_confirm)
                >
                    {confirm_text}
                </Button>
            </div>
        </div>
    }
}

/// One-button outcome dialog, e.g. "login failed".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Notice {
    pub variant: ModalVariant,
    pub title: &'static str,
    pub message: &'static str,
    /// Route to open after the dialog is dismissed.
    pub then_navigate: Option<&'static str>,
}

/// Push `notice` on the stack. Its button pops it, then navigates if asked to.
pub fn open_notice(modals: ModalStackService, navigator: Navigator, notice: Notice) {
    modals.open_modal(move || {
        let dismiss = Callback::new(move |_| {
            modals.close_modal();
            if let Some(path) = notice.then_navigate {
                navigator.go(path);
            }
        });
        view! {
            <Modal
                variant=notice.variant
                actions=ModalActions::Single
                title=notice.title
                message=notice.message
                confirm_text="OK"
                on_confirm=dismiss
            />
        }
        .into_any()
    });
}
