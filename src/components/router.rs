//! Application router component.
//!
//! Handles URL-based routing with hash history. Uses native hashchange
//! events instead of leptos_router: the URL hash is the source of
//! truth, so browser back/forward buttons work automatically and the
//! app can be served from any static host.

use leptos::prelude::*;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::Closure;

use crate::components::convert::ConvertPage;
use crate::components::home::HomePage;
use crate::components::results::ResultsPage;
use crate::components::select::SelectPage;
use crate::components::settings::SettingsPage;
use crate::models::Route;

/// Main application router.
///
/// Route structure:
/// - `#/` → Landing
/// - `#/select[/<category>]` → Format selection (optionally pre-scoped)
/// - `#/convert` → Conversion progress
/// - `#/results` → Conversion results
/// - `#/settings` → Settings
#[component]
pub fn AppRouter() -> impl IntoView {
    // Create route signal from current URL hash
    let route = RwSignal::new(Route::current());

    // Set up hashchange event listener (runs once on mount)
    #[cfg(target_arch = "wasm32")]
    {
        use wasm_bindgen::JsCast;
        let closure = Closure::wrap(Box::new(move || {
            route.set(Route::current());
        }) as Box<dyn Fn()>);

        if let Some(window) = web_sys::window() {
            let _ = window
                .add_event_listener_with_callback("hashchange", closure.as_ref().unchecked_ref());
        }

        // Keep the closure alive for the lifetime of the app
        closure.forget();
    }

    let route_memo = Memo::new(move |_| route.get());

    view! {
        {move || match route_memo.get() {
            Route::Home => view! { <HomePage /> }.into_any(),
            Route::Select { category } => view! { <SelectPage category=category /> }.into_any(),
            Route::Convert => view! { <ConvertPage /> }.into_any(),
            Route::Results => view! { <ResultsPage /> }.into_any(),
            Route::Settings => view! { <SettingsPage /> }.into_any(),
        }}
    }
}
