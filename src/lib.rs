pub mod components;
pub mod config;
pub mod form;
pub mod pages;
pub mod viewport;

use config::load_site_config;
use form::{SharedSubmitter, SimulatedSubmitter};
use leptos::*;
use leptos_router::*;
use pages::{HomePage, NotFoundPage};
use wasm_bindgen::prelude::*;

/// Root component with routing
#[component]
fn Root() -> impl IntoView {
    view! {
        <ErrorBoundary fallback=|errors| view! {
            <main class="container mx-auto px-4 py-24 text-center">
                <h2 class="text-2xl font-semibold text-slate-800 mb-4">"Something went wrong"</h2>
                <p class="text-gray-600 mb-4">"The page could not be displayed. Try reloading."</p>
                <ul class="text-sm text-red-500 mb-6">
                    {move || errors.get()
                        .into_iter()
                        .map(|(_, e)| view! { <li>{e.to_string()}</li> })
                        .collect_view()
                    }
                </ul>
                <button
                    class="bg-slate-800 text-white px-4 py-2 rounded-md"
                    on:click=move |_| {
                        if let Some(window) = web_sys::window() {
                            let _ = window.location().reload();
                        }
                    }
                >
                    "Reload"
                </button>
            </main>
        }>
            <RootInner/>
        </ErrorBoundary>
    }
}

/// Inner root that provides site-wide context and routes.
/// Wrapped by ErrorBoundary so view errors are caught.
#[component]
fn RootInner() -> impl IntoView {
    let config = load_site_config();
    provide_context(SharedSubmitter::new(SimulatedSubmitter::new(config.submit_delay_ms)));
    provide_context(config);

    view! {
        <Router>
            <Routes>
                <Route path="/" view=HomePage/>
                <Route path="/*" view=NotFoundPage/>
            </Routes>
        </Router>
    }
}

/// Mount the application to the DOM
#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    mount_to_body(Root);
}
