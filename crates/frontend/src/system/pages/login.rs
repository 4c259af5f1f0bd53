use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::routes::urls::{DIARIES_PATH, SIGNUP_PATH};
use crate::routes::Navigator;
use crate::shared::modal::{open_notice, ModalVariant, Notice};
use crate::shared::modal_stack::use_modal_stack;
use crate::system::auth::api::AuthApiError;
use crate::system::auth::context::{do_login, use_auth};

fn login_notice(result: &Result<(), AuthApiError>) -> Notice {
    match result {
        Ok(()) => Notice {
            variant: ModalVariant::Info,
            title: "Logged in",
            message: "You are now logged in.",
            then_navigate: Some(DIARIES_PATH),
        },
        Err(_) => Notice {
            variant: ModalVariant::Danger,
            title: "Login failed",
            message: "Email or password is incorrect.",
            then_navigate: None,
        },
    }
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (is_loading, set_is_loading) = signal(false);

    let (_, set_auth_state) = use_auth();
    let modals = use_modal_stack();
    let navigator = Navigator::use_navigator();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let email_val = email.get_untracked();
        let password_val = password.get_untracked();

        set_is_loading.set(true);

        spawn_local(async move {
            let result = do_login(set_auth_state, email_val, password_val).await;
            if let Err(e) = &result {
                log::warn!("login failed: {e}");
            }
            set_is_loading.set(false);
            open_notice(modals, navigator, login_notice(&result));
        });
    };

    view! {
        <div class="login-container">
            <div class="login-box">
                <h1>"Diary"</h1>
                <h2>"Log in"</h2>

                <form on:submit=on_submit>
                    <div class="form-group">
                        <label for="email">"Email"</label>
                        <input
                            type="email"
                            id="email"
                            placeholder="you@example.com"
                            prop:value=move || email.get()
                            on:input=move |ev| set_email.set(event_target_value(&ev))
                            required
                            disabled=move || is_loading.get()
                        />
                    </div>

                    <div class="form-group">
                        <label for="password">"Password"</label>
                        <input
                            type="password"
                            id="password"
                            prop:value=move || password.get()
                            on:input=move |ev| set_password.set(event_target_value(&ev))
                            required
                            disabled=move || is_loading.get()
                        />
                    </div>

                    <button
                        type="submit"
                        class="btn-primary"
                        disabled=move || is_loading.get()
                    >
                        {move || if is_loading.get() { "Logging in..." } else { "Log in" }}
                    </button>
                </form>

                <p class="login-footer">
                    "No account yet? " <a href=SIGNUP_PATH>"Sign up"</a>
                </p>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_notice_leads_to_diaries() {
        let notice = login_notice(&Ok(()));
        assert_eq!(notice.variant, ModalVariant::Info);
        assert_eq!(notice.then_navigate, Some(DIARIES_PATH));
    }

    #[test]
    fn test_failure_notice_stays_on_page() {
        let notice = login_notice(&Err(AuthApiError::Status(401)));
        assert_eq!(notice.variant, ModalVariant::Danger);
        assert_eq!(notice.then_navigate, None);
    }
}
