use leptos::prelude::*;
use leptos_router::hooks::use_params_map;
use thaw::*;

use super::{open_delete_confirm, storage};
use crate::routes::urls::DIARIES_PATH;
use crate::routes::Navigator;
use crate::shared::date_utils::format_datetime;
use crate::shared::modal_stack::use_modal_stack;
use crate::system::auth::guard::use_auth_guard;

#[component]
pub fn DiaryDetailPage() -> impl IntoView {
    let modals = use_modal_stack();
    let guard = use_auth_guard();
    let navigator = Navigator::use_navigator();
    let params = use_params_map();

    let id = Memo::new(move |_| {
        params
            .with(|p| p.get("id"))
            .and_then(|raw| raw.parse::<i64>().ok())
    });

    let diary = Memo::new(move |_| {
        id.get()
            .map(|id| storage::find(id).map_err(|err| err.to_string()))
    });

    let request_delete = move |_| {
        let Some(id) = id.get_untracked() else {
            return;
        };
        guard.run_sync(move || {
            open_delete_confirm(
                modals,
                id,
                Callback::new(move |_| navigator.go(DIARIES_PATH)),
            );
        });
    };

    view! {
        <div class="diary-detail">
            {move || match diary.get() {
                None => view! {
                    <div class="warning-box warning-box--error">"Invalid diary id."</div>
                }
                .into_any(),
                Some(Err(err)) => view! {
                    <div class="warning-box warning-box--error">{err}</div>
                }
                .into_any(),
                Some(Ok(diary)) => view! {
                    <div class="diary-detail__header">
                        <h2 class="diary-detail__title">{diary.title.clone()}</h2>
                        <div class="diary-detail__meta">
                            <span class="diary-detail__emotion">{diary.emotion.label()}</span>
                            <span class="diary-detail__date">{format_datetime(&diary.created_at)}</span>
                        </div>
                    </div>
                    <div class="diary-detail__content">{diary.content.clone()}</div>
                }
                .into_any(),
            }}

            <div class="diary-detail__actions">
                <Button
                    appearance=ButtonAppearance::Secondary
                    on_click=move |_| navigator.go(DIARIES_PATH)
                >
                    "Back to list"
                </Button>
                <Button appearance=ButtonAppearance::Primary on_click=request_delete>
                    "Delete"
                </Button>
            </div>
        </div>
    }
}
