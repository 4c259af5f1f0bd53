use contracts::domain::diary::{DiaryDraft, Emotion};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use super::storage;
use crate::routes::urls::diary_detail_url;
use crate::routes::Navigator;
use crate::shared::modal::{Modal, ModalActions, ModalVariant};
use crate::shared::modal_stack::{use_modal_stack, ModalStackService};
use crate::shared::storage::StorageError;
use crate::system::auth::guard::use_auth_guard;

/// Nested "discard this diary?" confirmation on top of the composer.
///
/// Discard collapses both levels; keep writing pops only the confirmation.
fn open_discard_confirm(modals: ModalStackService) {
    modals.open_modal(move || {
        let discard = Callback::new(move |_| {
            modals.close_modal();
            modals.close_modal();
        });
        let keep_writing = Callback::new(move |_| modals.close_modal());
        view! {
            <Modal
                variant=ModalVariant::Info
                actions=ModalActions::Dual
                title="Cancel writing"
                message="Discard this diary?"
                confirm_text="Discard"
                cancel_text="Keep writing"
                on_confirm=discard
                on_cancel=keep_writing
            />
        }
        .into_any()
    });
}

/// "Saved" notice on top of the composer; confirm collapses both and opens the diary.
fn open_saved_notice(modals: ModalStackService, navigator: Navigator, id: i64) {
    modals.open_modal(move || {
        let done = Callback::new(move |_| {
            modals.close_modal();
            modals.close_modal();
            navigator.go(&diary_detail_url(id));
        });
        view! {
            <Modal
                title="Saved"
                message="Your diary has been saved."
                confirm_text="OK"
                on_confirm=done
            />
        }
        .into_any()
    });
}

/// Diary writing dialog. Meant to be pushed on the modal stack.
#[component]
pub fn DiaryComposer() -> impl IntoView {
    let modals = use_modal_stack();
    let guard = use_auth_guard();
    let navigator = Navigator::use_navigator();

    let title = RwSignal::new(String::new());
    let content = RwSignal::new(String::new());
    let emotion = RwSignal::new(Emotion::default());
    let (error, set_error) = signal(None::<String>);
    let (saving, set_saving) = signal(false);

    let on_register = move |_| {
        let draft = DiaryDraft {
            title: title.get_untracked(),
            content: content.get_untracked(),
            emotion: emotion.get_untracked(),
        };
        if let Err(err) = draft.validate() {
            set_error.set(Some(err.to_string()));
            return;
        }
        set_error.set(None);
        set_saving.set(true);

        // The session may have ended while the composer was open.
        let save = guard.run(move || async move {
            let diary = storage::insert(draft)?;
            open_saved_notice(modals, navigator, diary.id);
            Ok::<(), StorageError>(())
        });
        spawn_local(async move {
            if let Err(err) = save.await {
                log::error!("failed to save diary: {err}");
                set_error.set(Some(err.to_string()));
            }
            set_saving.set(false);
        });
    };

    let emotion_options = Emotion::ALL
        .into_iter()
        .map(|option| {
            view! {
                <label class="composer__emotion">
                    <input
                        type="radio"
                        name="emotion"
                        value=option.as_str()
                        prop:checked=move || emotion.get() == option
                        on:change=move |ev| {
                            match event_target_value(&ev).parse::<Emotion>() {
                                Ok(picked) => emotion.set(picked),
                                Err(err) => log::warn!("{err}"),
                            }
                        }
                    />
                    {option.label()}
                </label>
            }
        })
        .collect_view();

    view! {
        <div class="composer">
            <div class="composer__header">"Write a diary"</div>

            <div class="composer__emotions">{emotion_options}</div>

            <div class="form__group">
                <label class="form__label">"Title"</label>
                <Input value=title placeholder="Title" />
            </div>

            <div class="form__group">
                <label class="form__label">"Content"</label>
                <Textarea value=content placeholder="What happened today?" attr:rows=8 />
            </div>

            {move || error.get().map(|err| view! {
                <div class="warning-box warning-box--error">
                    <span class="warning-box__text">{err}</span>
                </div>
            })}

            <div class="composer__actions">
                <Button
                    appearance=ButtonAppearance::Secondary
                    on_click=move |_| open_discard_confirm(modals)
                >
                    "Close"
                </Button>
                <Button
                    appearance=ButtonAppearance::Primary
                    disabled=saving
                    on_click=on_register
                >
                    "Register"
                </Button>
            </div>
        </div>
    }
}
