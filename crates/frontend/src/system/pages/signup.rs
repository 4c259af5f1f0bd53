use contracts::system::auth::SignupForm;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::routes::urls::LOGIN_PATH;
use crate::routes::Navigator;
use crate::shared::modal::{open_notice, ModalVariant, Notice};
use crate::shared::modal_stack::use_modal_stack;
use crate::system::auth::api::{self, AuthApiError};

fn signup_notice(result: &Result<String, AuthApiError>) -> Notice {
    match result {
        Ok(_) => Notice {
            variant: ModalVariant::Info,
            title: "Signed up",
            message: "Your account has been created.",
            then_navigate: Some(LOGIN_PATH),
        },
        Err(_) => Notice {
            variant: ModalVariant::Danger,
            title: "Sign up failed",
            message: "Could not create the account. Please try again.",
            then_navigate: None,
        },
    }
}

#[component]
pub fn SignupPage() -> impl IntoView {
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let password_confirm = RwSignal::new(String::new());
    let name = RwSignal::new(String::new());
    let (error_message, set_error_message) = signal(None::<String>);
    let (is_loading, set_is_loading) = signal(false);

    let modals = use_modal_stack();
    let navigator = Navigator::use_navigator();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let form = SignupForm {
            email: email.get_untracked(),
            password: password.get_untracked(),
            password_confirm: password_confirm.get_untracked(),
            name: name.get_untracked(),
        };
        if let Err(err) = form.validate() {
            set_error_message.set(Some(err.to_string()));
            return;
        }
        set_error_message.set(None);
        set_is_loading.set(true);

        spawn_local(async move {
            let result = api::create_user(form.into_input()).await;
            match &result {
                Ok(id) => {
                    log::info!("account {id} created");
                    email.set(String::new());
                    password.set(String::new());
                    password_confirm.set(String::new());
                    name.set(String::new());
                }
                Err(e) => log::warn!("signup failed: {e}"),
            }
            set_is_loading.set(false);
            open_notice(modals, navigator, signup_notice(&result));
        });
    };

    let field = move |id: &'static str, label: &'static str, kind: &'static str, value: RwSignal<String>| {
        view! {
            <div class="form-group">
                <label for=id>{label}</label>
                <input
                    type=kind
                    id=id
                    prop:value=move || value.get()
                    on:input=move |ev| value.set(event_target_value(&ev))
                    disabled=move || is_loading.get()
                />
            </div>
        }
    };

    view! {
        <div class="login-container">
            <div class="login-box">
                <h1>"Diary"</h1>
                <h2>"Sign up"</h2>

                <Show when=move || error_message.get().is_some()>
                    <div class="error-message">
                        {move || error_message.get().unwrap_or_default()}
                    </div>
                </Show>

                <form on:submit=on_submit>
                    {field("email", "Email", "email", email)}
                    {field("password", "Password", "password", password)}
                    {field("password-confirm", "Confirm password", "password", password_confirm)}
                    {field("name", "Name", "text", name)}

                    <button
                        type="submit"
                        class="btn-primary"
                        disabled=move || is_loading.get()
                    >
                        {move || if is_loading.get() { "Signing up..." } else { "Sign up" }}
                    </button>
                </form>

                <p class="login-footer">
                    "Already registered? " <a href=LOGIN_PATH>"Log in"</a>
                </p>
            </div>
        </div>
    }
}
