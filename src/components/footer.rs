use crate::config::SiteConfig;
use leptos::*;

#[component]
pub fn SiteFooter() -> impl IntoView {
    let config = use_context::<SiteConfig>().unwrap_or_default();
    let year = js_sys::Date::new_0().get_full_year();

    view! {
        <footer class="bg-gray-100 py-4 text-center text-gray-600">
            <div class="container mx-auto px-4">
                <p>{format!("\u{00A9} {} {}. All rights reserved.", year, config.company_name)}</p>
            </div>
        </footer>
    }
}
