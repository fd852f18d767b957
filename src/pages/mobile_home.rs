use crate::components::{ContactDetails, ContactForm, NavBar, SiteFooter};
use leptos::*;

/// Narrow-screen shell: stacked contact card and form.
#[component]
pub fn MobileHome() -> impl IntoView {
    view! {
        <div class="min-h-screen flex flex-col">
            <NavBar/>

            <main class="flex-grow bg-gray-50 px-4 py-6 space-y-6">
                <ContactDetails compact=true/>

                <div class="bg-white p-6 rounded-lg shadow-md">
                    <ContactForm full_width_submit=true/>
                </div>
            </main>

            <SiteFooter/>
        </div>
    }
}
