//! Authentication gate for user actions and routes.
//!
//! `Guard::run` decides synchronously, at call time, between three outcomes:
//!
//! - auth still loading: nothing runs, no prompt, resolves to `false`
//! - authenticated: the action runs, resolves to `true`
//! - signed out: a login prompt is pushed on the modal stack, resolves to `false`
//!
//! Every call reads the auth status afresh; calls share no state.

use std::future::Future;

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use super::context::{use_auth, AuthState, AuthStatus};
use crate::routes::urls::{requires_auth, LOGIN_PATH};
use crate::routes::Navigator;
use crate::shared::modal::{Modal, ModalActions, ModalVariant};
use crate::shared::modal_stack::{use_modal_stack, ModalStackService};

/// Where the current auth status comes from.
pub trait AuthStatusSource {
    fn current(&self) -> AuthStatus;
}

/// Tells the user to log in.
pub trait LoginPrompt {
    fn show_login_prompt(&self);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardDecision {
    /// Auth check in flight; the caller just does nothing yet.
    Defer,
    Run,
    Prompt,
}

impl GuardDecision {
    pub fn evaluate(status: AuthStatus, bypass: bool) -> Self {
        if bypass {
            GuardDecision::Run
        } else if status.is_loading {
            GuardDecision::Defer
        } else if status.is_authenticated {
            GuardDecision::Run
        } else {
            GuardDecision::Prompt
        }
    }
}

#[derive(Clone, Copy)]
pub struct Guard<S, P> {
    source: S,
    prompt: P,
    #[cfg(any(test, feature = "test-bypass"))]
    bypass: bool,
}

impl<S: AuthStatusSource, P: LoginPrompt> Guard<S, P> {
    pub fn new(source: S, prompt: P) -> Self {
        Self {
            source,
            prompt,
            #[cfg(any(test, feature = "test-bypass"))]
            bypass: false,
        }
    }

    /// Treat every call as authenticated. Test builds only.
    #[cfg(any(test, feature = "test-bypass"))]
    pub fn with_bypass(mut self) -> Self {
        self.bypass = true;
        self
    }

    fn bypass_enabled(&self) -> bool {
        #[cfg(any(test, feature = "test-bypass"))]
        {
            self.bypass
        }
        #[cfg(not(any(test, feature = "test-bypass")))]
        {
            false
        }
    }

    fn decide(&self) -> GuardDecision {
        let status = self.source.current();
        let decision = GuardDecision::evaluate(status, self.bypass_enabled());
        log::debug!("auth guard: {status:?} -> {decision:?}");
        if decision == GuardDecision::Prompt {
            self.prompt.show_login_prompt();
        }
        decision
    }

    /// Run `action` if the user is authenticated.
    ///
    /// The decision (and any login prompt) happens when `run` is called, not
    /// when the returned future is first polled. Resolves to `Ok(true)` iff the
    /// action ran; an error from the action is returned as is.
    pub fn run<F, Fut, E>(&self, action: F) -> impl Future<Output = Result<bool, E>>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<(), E>>,
    {
        let decision = self.decide();
        async move {
            match decision {
                GuardDecision::Run => {
                    action().await?;
                    Ok(true)
                }
                GuardDecision::Defer | GuardDecision::Prompt => Ok(false),
            }
        }
    }

    /// Synchronous variant of [`Guard::run`] for plain event handlers.
    pub fn run_sync(&self, action: impl FnOnce()) -> bool {
        match self.decide() {
            GuardDecision::Run => {
                action();
                true
            }
            GuardDecision::Defer | GuardDecision::Prompt => false,
        }
    }
}

/// Outcome of the route-level check in [`RequireAuth`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteGate {
    Pending,
    Allow,
    Deny,
}

impl RouteGate {
    pub fn evaluate(status: AuthStatus, requires_auth: bool) -> Self {
        if status.is_loading {
            RouteGate::Pending
        } else if !requires_auth || status.is_authenticated {
            RouteGate::Allow
        } else {
            RouteGate::Deny
        }
    }
}

/// Remembers the denied path already prompted for, so re-renders of the same
/// page do not stack extra prompts. Leaving the denied state forgets it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PromptOnce {
    prompted_for: Option<String>,
}

impl PromptOnce {
    /// Feed the current gate and path; returns true when a prompt is due.
    pub fn observe(&mut self, gate: RouteGate, path: &str) -> bool {
        if gate != RouteGate::Deny {
            self.prompted_for = None;
            return false;
        }
        if self.prompted_for.as_deref() == Some(path) {
            return false;
        }
        self.prompted_for = Some(path.to_string());
        true
    }
}

// ---------------------------------------------------------------------------
// Leptos bindings
// ---------------------------------------------------------------------------

#[derive(Clone, Copy)]
pub struct AuthSignal(ReadSignal<AuthState>);

impl AuthStatusSource for AuthSignal {
    fn current(&self) -> AuthStatus {
        self.0.with_untracked(|s| s.status())
    }
}

/// Login prompt pushed on the modal stack.
///
/// "Go to login" closes the prompt and navigates; "cancel" only closes it.
#[derive(Clone, Copy)]
pub struct ModalLoginPrompt {
    modals: ModalStackService,
    navigator: Navigator,
    actions: ModalActions,
}

impl ModalLoginPrompt {
    pub fn new(modals: ModalStackService, navigator: Navigator) -> Self {
        Self {
            modals,
            navigator,
            actions: ModalActions::Dual,
        }
    }

    /// Prompt without a cancel button, for pages that cannot be used signed out.
    pub fn single(modals: ModalStackService, navigator: Navigator) -> Self {
        Self {
            actions: ModalActions::Single,
            ..Self::new(modals, navigator)
        }
    }
}

impl LoginPrompt for ModalLoginPrompt {
    fn show_login_prompt(&self) {
        let modals = self.modals;
        let navigator = self.navigator;
        let actions = self.actions;
        modals.open_modal(move || {
            let go_to_login = Callback::new(move |_| {
                modals.close_modal();
                navigator.go(LOGIN_PATH);
            });
            let cancel = Callback::new(move |_| modals.close_modal());
            view! {
                <Modal
                    variant=ModalVariant::Info
                    actions=actions
                    title="Login required"
                    message="Please log in to continue."
                    confirm_text="Go to login"
                    cancel_text="Cancel"
                    on_confirm=go_to_login
                    on_cancel=cancel
                />
            }
            .into_any()
        });
    }
}

pub type AuthGuard = Guard<AuthSignal, ModalLoginPrompt>;

/// Guard wired to the app's auth state, modal stack and router.
pub fn use_auth_guard() -> AuthGuard {
    let (auth_state, _) = use_auth();
    let prompt = ModalLoginPrompt::new(use_modal_stack(), Navigator::use_navigator());
    Guard::new(AuthSignal(auth_state), prompt)
}

/// Gates the page at the current location by its access level.
///
/// While the session is being restored an empty placeholder is shown. Signed
/// out users on an authenticated page get one login prompt per visited path
/// and an empty page. Must be mounted under `<Router>`.
#[component]
pub fn RequireAuth(children: ChildrenFn) -> impl IntoView {
    let (auth_state, _) = use_auth();
    let location = use_location();
    let prompt = ModalLoginPrompt::single(use_modal_stack(), Navigator::use_navigator());
    let prompt_once = StoredValue::new(PromptOnce::default());

    let gate = Memo::new(move |_| {
        let requires_auth = location.pathname.with(|path| requires_auth(path));
        RouteGate::evaluate(auth_state.with(|s| s.status()), requires_auth)
    });

    Effect::new(move |_| {
        let gate = gate.get();
        let path = location.pathname.get();
        let due = prompt_once
            .try_update_value(|once| once.observe(gate, &path))
            .unwrap_or(false);
        if due {
            log::debug!("{path} requires login");
            prompt.show_login_prompt();
        }
    });

    view! {
        <Show
            when=move || gate.get() == RouteGate::Allow
            fallback=|| view! { <div class="auth-guard-pending" data-testid="auth-guard-loading"></div> }
        >
            {children()}
        </Show>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::modal_stack::ModalStack;
    use futures::executor::block_on;
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    const LOADING: AuthStatus = AuthStatus {
        is_authenticated: false,
        is_loading: true,
    };
    const SIGNED_OUT: AuthStatus = AuthStatus {
        is_authenticated: false,
        is_loading: false,
    };
    const SIGNED_IN: AuthStatus = AuthStatus {
        is_authenticated: true,
        is_loading: false,
    };

    #[derive(Clone)]
    struct FakeAuth(Rc<Cell<AuthStatus>>);

    impl AuthStatusSource for FakeAuth {
        fn current(&self) -> AuthStatus {
            self.0.get()
        }
    }

    #[derive(Clone, Default)]
    struct StackPrompt(Rc<RefCell<ModalStack<&'static str>>>);

    impl StackPrompt {
        fn depth(&self) -> usize {
            self.0.borrow().len()
        }
    }

    impl LoginPrompt for StackPrompt {
        fn show_login_prompt(&self) {
            self.0.borrow_mut().push("login-prompt");
        }
    }

    fn guard(status: AuthStatus) -> (Guard<FakeAuth, StackPrompt>, Rc<Cell<AuthStatus>>, StackPrompt) {
        let cell = Rc::new(Cell::new(status));
        let prompt = StackPrompt::default();
        (Guard::new(FakeAuth(cell.clone()), prompt.clone()), cell, prompt)
    }

    fn counting_action(runs: &Rc<Cell<u32>>) -> impl FnOnce() -> std::future::Ready<Result<(), ()>> {
        let runs = runs.clone();
        move || {
            runs.set(runs.get() + 1);
            std::future::ready(Ok(()))
        }
    }

    #[test]
    fn test_defers_while_loading() {
        let (guard, _, prompt) = guard(LOADING);
        let runs = Rc::new(Cell::new(0));
        assert_eq!(block_on(guard.run(counting_action(&runs))), Ok(false));
        assert_eq!(runs.get(), 0);
        assert_eq!(prompt.depth(), 0);
    }

    #[test]
    fn test_prompts_when_signed_out() {
        let (guard, _, prompt) = guard(SIGNED_OUT);
        let runs = Rc::new(Cell::new(0));
        assert_eq!(block_on(guard.run(counting_action(&runs))), Ok(false));
        assert_eq!(runs.get(), 0);
        assert_eq!(prompt.depth(), 1);
        assert_eq!(prompt.0.borrow().top().map(|e| e.content), Some("login-prompt"));
    }

    #[test]
    fn test_runs_once_when_signed_in() {
        let (guard, _, prompt) = guard(SIGNED_IN);
        let runs = Rc::new(Cell::new(0));
        assert_eq!(block_on(guard.run(counting_action(&runs))), Ok(true));
        assert_eq!(runs.get(), 1);
        assert_eq!(prompt.depth(), 0);
    }

    #[test]
    fn test_action_error_propagates() {
        let (guard, _, _) = guard(SIGNED_IN);
        let result = block_on(guard.run(|| async { Err::<(), _>("storage full") }));
        assert_eq!(result, Err("storage full"));
    }

    #[test]
    fn test_prompt_stacks_on_existing_dialogs() {
        let (guard, _, prompt) = guard(SIGNED_OUT);
        prompt.0.borrow_mut().push("composer");
        prompt.0.borrow_mut().push("detail");
        assert!(!guard.run_sync(|| {}));
        assert_eq!(prompt.depth(), 3);
        assert_eq!(prompt.0.borrow().top().map(|e| e.content), Some("login-prompt"));
    }

    #[test]
    fn test_each_call_rereads_status() {
        let (guard, status, prompt) = guard(LOADING);
        let runs = Rc::new(Cell::new(0));

        assert!(!guard.run_sync(|| runs.set(runs.get() + 1)));
        status.set(SIGNED_OUT);
        assert!(!guard.run_sync(|| runs.set(runs.get() + 1)));
        status.set(SIGNED_IN);
        assert!(guard.run_sync(|| runs.set(runs.get() + 1)));

        assert_eq!(runs.get(), 1);
        assert_eq!(prompt.depth(), 1);
    }

    #[test]
    fn test_decision_bound_at_call_time() {
        let (guard, status, prompt) = guard(SIGNED_IN);
        let runs = Rc::new(Cell::new(0));

        // two rapid triggers: the first is created before the logout lands
        let first = guard.run(counting_action(&runs));
        status.set(SIGNED_OUT);
        let second = guard.run(counting_action(&runs));
        assert_eq!(prompt.depth(), 1);

        assert_eq!(block_on(second), Ok(false));
        assert_eq!(block_on(first), Ok(true));
        assert_eq!(runs.get(), 1);
    }

    #[test]
    fn test_double_click_signed_out_prompts_per_call() {
        let (guard, _, prompt) = guard(SIGNED_OUT);
        assert!(!guard.run_sync(|| {}));
        assert!(!guard.run_sync(|| {}));
        assert_eq!(prompt.depth(), 2);
    }

    #[test]
    fn test_bypass_runs_regardless_of_status() {
        for status in [LOADING, SIGNED_OUT, SIGNED_IN] {
            let (guard, _, prompt) = guard(status);
            let guard = guard.with_bypass();
            let runs = Rc::new(Cell::new(0));
            assert_eq!(block_on(guard.run(counting_action(&runs))), Ok(true));
            assert_eq!(runs.get(), 1);
            assert_eq!(prompt.depth(), 0);
        }
    }

    #[test]
    fn test_bypass_off_by_default() {
        let (guard, _, _) = guard(SIGNED_OUT);
        assert!(!guard.bypass_enabled());
    }

    #[test]
    fn test_prompt_once_per_denied_visit() {
        let mut once = PromptOnce::default();
        assert!(once.observe(RouteGate::Deny, "/diaries/1"));
        // re-render of the same page
        assert!(!once.observe(RouteGate::Deny, "/diaries/1"));
        // leave for a public page and come back
        assert!(!once.observe(RouteGate::Allow, "/diaries"));
        assert!(once.observe(RouteGate::Deny, "/diaries/1"));
    }

    #[test]
    fn test_prompt_once_new_denied_path() {
        let mut once = PromptOnce::default();
        assert!(once.observe(RouteGate::Deny, "/diaries/1"));
        assert!(once.observe(RouteGate::Deny, "/diaries/2"));
    }

    #[test]
    fn test_prompt_once_waits_for_auth_check() {
        let mut once = PromptOnce::default();
        assert!(!once.observe(RouteGate::Pending, "/diaries/1"));
        assert!(once.observe(RouteGate::Deny, "/diaries/1"));
        assert!(!once.observe(RouteGate::Deny, "/diaries/1"));
    }

    #[test]
    fn test_route_gate() {
        assert_eq!(RouteGate::evaluate(LOADING, true), RouteGate::Pending);
        assert_eq!(RouteGate::evaluate(SIGNED_OUT, true), RouteGate::Deny);
        assert_eq!(RouteGate::evaluate(SIGNED_OUT, false), RouteGate::Allow);
        assert_eq!(RouteGate::evaluate(SIGNED_IN, true), RouteGate::Allow);
    }
}
