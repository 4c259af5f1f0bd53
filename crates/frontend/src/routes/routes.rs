use leptos::prelude::*;
use leptos_router::components::{Redirect, Route, Router, Routes};
use leptos_router::path;

use crate::domain::diaries::detail::DiaryDetailPage;
use crate::domain::diaries::list::DiariesPage;
use crate::layout::Shell;
use crate::routes::urls::DIARIES_PATH;
use crate::shared::modal_stack::ModalHost;
use crate::system::auth::guard::RequireAuth;
use crate::system::pages::login::LoginPage;
use crate::system::pages::signup::SignupPage;

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="page page--empty">
            <p>"Page not found."</p>
            <a href=DIARIES_PATH>"Back to diaries"</a>
        </div>
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <Shell>
                <RequireAuth>
                    <Routes fallback=NotFound>
                        <Route path=path!("/") view=|| view! { <Redirect path=DIARIES_PATH /> } />
                        <Route path=path!("/auth/login") view=LoginPage />
                        <Route path=path!("/auth/signup") view=SignupPage />
                        <Route path=path!("/diaries") view=DiariesPage />
                        <Route path=path!("/diaries/:id") view=DiaryDetailPage />
                    </Routes>
                </RequireAuth>
            </Shell>
            // Dialogs may navigate, so the host stays under the router.
            <ModalHost />
        </Router>
    }
}
