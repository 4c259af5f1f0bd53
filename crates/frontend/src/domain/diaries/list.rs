use contracts::domain::diary::Diary;
use leptos::prelude::*;
use thaw::*;

use super::composer::DiaryComposer;
use super::{open_delete_confirm, storage};
use crate::routes::urls::diary_detail_url;
use crate::shared::date_utils::format_date;
use crate::shared::modal_stack::use_modal_stack;
use crate::system::auth::guard::use_auth_guard;

#[component]
pub fn DiariesPage() -> impl IntoView {
    let modals = use_modal_stack();
    let guard = use_auth_guard();

    let diaries = RwSignal::new(Vec::<Diary>::new());
    let (error, set_error) = signal(None::<String>);

    let reload = move || match storage::load_all() {
        Ok(list) => {
            set_error.set(None);
            diaries.set(list);
        }
        Err(err) => {
            log::error!("failed to load diaries: {err}");
            set_error.set(Some(err.to_string()));
        }
    };

    Effect::new(move |_| reload());

    let open_composer = move |_| {
        guard.run_sync(move || {
            modals.open_modal(|| view! { <DiaryComposer /> }.into_any());
        });
    };

    let request_delete = move |id: i64| {
        guard.run_sync(move || {
            open_delete_confirm(modals, id, Callback::new(move |_| reload()));
        });
    };

    view! {
        <div class="diaries">
            <div class="diaries__toolbar">
                <h2>"Diaries"</h2>
                <Button appearance=ButtonAppearance::Primary on_click=open_composer>
                    "+ Write diary"
                </Button>
            </div>

            {move || error.get().map(|err| view! {
                <div class="warning-box warning-box--error">
                    <span class="warning-box__text">{err}</span>
                </div>
            })}

            <Show
                when=move || !diaries.with(|d| d.is_empty())
                fallback=|| view! { <div class="diaries__empty">"No diaries yet."</div> }
            >
                <div class="diaries__grid">
                    <For
                        each=move || diaries.get()
                        key=|diary| diary.id
                        children=move |diary: Diary| {
                            let id = diary.id;
                            view! {
                                <div class="diary-card">
                                    <div class="diary-card__emotion">{diary.emotion.label()}</div>
                                    <div class="diary-card__date">{format_date(&diary.created_at)}</div>
                                    <a class="diary-card__title" href=diary_detail_url(id)>
                                        {diary.title.clone()}
                                    </a>
                                    <button
                                        class="button button--icon diary-card__delete"
                                        title="Delete"
                                        on:click=move |_| request_delete(id)
                                    >
                                        "×"
                                    </button>
                                </div>
                            }
                        }
                    />
                </div>
            </Show>
        </div>
    }
}
