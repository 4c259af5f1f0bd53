pub mod routes;
pub mod urls;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use leptos_router::NavigateOptions;

/// Handle to the router's navigation, usable from any event handler or dialog.
///
/// Must be created under `<Router>`.
#[derive(Clone, Copy)]
pub struct Navigator {
    navigate: StoredValue<Box<dyn Fn(&str)>, LocalStorage>,
}

impl Navigator {
    pub fn use_navigator() -> Self {
        let navigate = use_navigate();
        let navigate: Box<dyn Fn(&str)> =
            Box::new(move |path: &str| navigate(path, NavigateOptions::default()));
        Self {
            navigate: StoredValue::new_local(navigate),
        }
    }

    pub fn go(&self, path: &str) {
        log::debug!("navigate to {path}");
        self.navigate.with_value(|navigate| navigate(path));
    }
}
