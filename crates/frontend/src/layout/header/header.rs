use leptos::prelude::*;

use crate::routes::urls::{DIARIES_PATH, LOGIN_PATH};
use crate::routes::Navigator;
use crate::system::auth::context::{do_logout, use_auth};

#[component]
pub fn Header() -> impl IntoView {
    let (auth_state, set_auth_state) = use_auth();
    let navigator = Navigator::use_navigator();

    let on_logout = move |_| {
        do_logout(set_auth_state);
        navigator.go(LOGIN_PATH);
    };

    view! {
        <header data-zone="header" class="header">
            <div class="header__content">
                <a class="header__title" href=DIARIES_PATH>"Diary"</a>
            </div>
            <div class="header__actions">
                {move || {
                    let state = auth_state.get();
                    if state.is_loading {
                        view! { <></> }.into_any()
                    } else if state.is_authenticated() {
                        let name = state.user.map(|user| user.name).unwrap_or_default();
                        view! {
                            <span class="header__user">{name}</span>
                            <button class="button button--ghost" on:click=on_logout>"Log out"</button>
                        }
                        .into_any()
                    } else {
                        view! {
                            <button
                                class="button button--primary"
                                on:click=move |_| navigator.go(LOGIN_PATH)
                            >
                                "Log in"
                            </button>
                        }
                        .into_any()
                    }
                }}
            </div>
        </header>
    }
}
