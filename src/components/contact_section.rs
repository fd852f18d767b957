use crate::components::{ContactDetails, ContactForm};
use leptos::*;

/// Desktop contact card: details on the left third, form on the rest.
#[component]
pub fn ContactSection() -> impl IntoView {
    view! {
        <div class="flex flex-col lg:flex-row overflow-hidden rounded-lg shadow-lg">
            <ContactDetails/>
            <div class="bg-white p-8 lg:w-2/3">
                <ContactForm/>
            </div>
        </div>
    }
}
