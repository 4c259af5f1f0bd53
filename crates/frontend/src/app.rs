use crate::routes::routes::AppRoutes;
use crate::shared::modal_stack::ModalStackService;
use crate::system::auth::context::AuthProvider;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // One modal stack for the whole app.
    provide_context(ModalStackService::new());

    view! {
        <AuthProvider>
            <AppRoutes />
        </AuthProvider>
    }
}
