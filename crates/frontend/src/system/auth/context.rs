use contracts::system::auth::UserInfo;
use leptos::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

use super::{api, api::AuthApiError, storage};

/// Snapshot the guard decides on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AuthStatus {
    pub is_authenticated: bool,
    pub is_loading: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub struct AuthState {
    pub access_token: Option<String>,
    pub user: Option<UserInfo>,
    /// True until the stored session has been checked once.
    pub is_loading: bool,
}

impl Default for AuthState {
    fn default() -> Self {
        Self {
            access_token: None,
            user: None,
            is_loading: true,
        }
    }
}

impl AuthState {
    pub fn signed_out() -> Self {
        Self {
            access_token: None,
            user: None,
            is_loading: false,
        }
    }

    pub fn signed_in(access_token: String, user: UserInfo) -> Self {
        Self {
            access_token: Some(access_token),
            user: Some(user),
            is_loading: false,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.access_token.is_some() && self.user.is_some()
    }

    pub fn status(&self) -> AuthStatus {
        AuthStatus {
            is_authenticated: self.is_authenticated(),
            is_loading: self.is_loading,
        }
    }
}

fn restore_session() -> AuthState {
    match storage::load_session() {
        Some((token, user)) => AuthState::signed_in(token, user),
        None => AuthState::signed_out(),
    }
}

/// Auth context provider component
#[component]
pub fn AuthProvider(children: Children) -> impl IntoView {
    let (auth_state, set_auth_state) = signal(AuthState::default());

    // Restore the session once the app is mounted.
    Effect::new(move |_| {
        set_auth_state.set(restore_session());
    });

    // Follow logins/logouts made in other tabs.
    Effect::new(move |_| {
        let closure = Closure::wrap(Box::new(move |event: web_sys::Event| {
            if let Some(storage_event) = event.dyn_ref::<web_sys::StorageEvent>() {
                let relevant = storage_event
                    .key()
                    .map(|key| storage::is_session_key(&key))
                    // `localStorage.clear()` reports a null key
                    .unwrap_or(true);
                if relevant {
                    log::debug!("session changed in another tab");
                    set_auth_state.set(restore_session());
                }
            }
        }) as Box<dyn FnMut(_)>);

        if let Some(window) = web_sys::window() {
            let _ = window
                .add_event_listener_with_callback("storage", closure.as_ref().unchecked_ref());
            // AuthProvider lives as long as the app.
            closure.forget();
        }
    });

    provide_context(auth_state);
    provide_context(set_auth_state);

    children()
}

/// Hook to access auth state
pub fn use_auth() -> (ReadSignal<AuthState>, WriteSignal<AuthState>) {
    let auth_state =
        use_context::<ReadSignal<AuthState>>().expect("AuthProvider not found in component tree");
    let set_auth_state =
        use_context::<WriteSignal<AuthState>>().expect("AuthProvider not found in component tree");

    (auth_state, set_auth_state)
}

/// Log in against the GraphQL API and persist the session.
pub async fn do_login(
    set_auth_state: WriteSignal<AuthState>,
    email: String,
    password: String,
) -> Result<(), AuthApiError> {
    let access_token = api::login_user(email, password).await?;
    let user = api::fetch_user_logged_in(&access_token).await?;

    if let Err(err) = storage::save_session(&access_token, &user) {
        // The session still works for this tab.
        log::error!("failed to persist session: {err}");
    }

    log::info!("logged in as {}", user.email);
    set_auth_state.set(AuthState::signed_in(access_token, user));
    Ok(())
}

/// Drop the session locally. The caller decides where to navigate.
pub fn do_logout(set_auth_state: WriteSignal<AuthState>) {
    storage::clear_session();
    set_auth_state.set(AuthState::signed_out());
    log::info!("logged out");
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user() -> UserInfo {
        UserInfo {
            id: "u1".into(),
            email: "kim@example.com".into(),
            name: "Kim".into(),
        }
    }

    #[test]
    fn test_default_state_is_loading() {
        let state = AuthState::default();
        assert_eq!(
            state.status(),
            AuthStatus {
                is_authenticated: false,
                is_loading: true
            }
        );
    }

    #[test]
    fn test_signed_in_status() {
        let state = AuthState::signed_in("tok".into(), user());
        assert_eq!(
            state.status(),
            AuthStatus {
                is_authenticated: true,
                is_loading: false
            }
        );
    }

    #[test]
    fn test_token_without_user_is_not_authenticated() {
        let state = AuthState {
            access_token: Some("tok".into()),
            user: None,
            is_loading: false,
        };
        assert!(!state.is_authenticated());
    }
}
