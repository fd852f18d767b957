use crate::config::SiteConfig;
use leptos::*;

const ENVELOPE_PATH: &str = "M3 8l7.89 5.26a2 2 0 002.22 0L21 8M5 19h14a2 2 0 002-2V7a2 2 0 00-2-2H5a2 2 0 00-2 2v10a2 2 0 002 2z";
const PHONE_PATH: &str = "M3 5a2 2 0 012-2h3.28a1 1 0 01.948.684l1.498 4.493a1 1 0 01-.502 1.21l-2.257 1.13a11.042 11.042 0 005.516 5.516l1.13-2.257a1 1 0 011.21-.502l4.493 1.498a1 1 0 01.684.949V19a2 2 0 01-2 2h-1C9.716 21 3 14.284 3 6V5z";
const MAP_PIN_PATH: &str = "M17.657 16.657L13.414 20.9a2 2 0 01-2.827 0l-4.244-4.243a8 8 0 1111.314 0zM15 11a3 3 0 11-6 0 3 3 0 016 0z";

/// (aria label, short mark) for each social link.
const SOCIAL_LINKS: [(&str, &str); 4] = [
    ("Facebook", "f"),
    ("Twitter", "X"),
    ("LinkedIn", "in"),
    ("Instagram", "ig"),
];

#[component]
fn DetailIcon(path: &'static str) -> impl IntoView {
    view! {
        <div class="flex items-center justify-center bg-slate-700 h-10 w-10 rounded-full flex-shrink-0 mr-4">
            <svg class="h-5 w-5 text-white" fill="none" viewBox="0 0 24 24" stroke="currentColor">
                <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d=path/>
            </svg>
        </div>
    }
}

/// The dark "Get in touch" panel: email, phone, address and social links.
///
/// `compact` tightens spacing and type for the mobile shell.
#[component]
pub fn ContactDetails(#[prop(optional)] compact: bool) -> impl IntoView {
    let contact = use_context::<SiteConfig>().unwrap_or_default().contact;
    let (heading_class, item_title_class, list_class) = if compact {
        ("text-xl font-semibold mb-4", "text-xs text-gray-300 uppercase", "space-y-4")
    } else {
        ("text-2xl font-semibold mb-6", "text-sm text-gray-300 uppercase mb-1", "space-y-6")
    };

    view! {
        <div class="bg-slate-800 text-white p-8 lg:w-1/3" class:rounded-lg=compact>
            <h2 class=heading_class>{if compact { "Get In Touch" } else { "Get in touch" }}</h2>

            <div class=list_class>
                <div class="flex items-center">
                    <DetailIcon path=ENVELOPE_PATH/>
                    <div>
                        <h3 class=item_title_class>"EMAIL US"</h3>
                        <a
                            href=format!("mailto:{}", contact.email)
                            class="text-white hover:text-gray-200 transition-colors"
                        >
                            {contact.email.clone()}
                        </a>
                    </div>
                </div>

                <div class="flex items-center">
                    <DetailIcon path=PHONE_PATH/>
                    <div>
                        <h3 class=item_title_class>"PHONE NUMBER"</h3>
                        <a
                            href=format!("tel:{}", contact.phone)
                            class="text-white hover:text-gray-200 transition-colors"
                        >
                            {contact.phone.clone()}
                        </a>
                    </div>
                </div>

                <div class="flex items-center">
                    <DetailIcon path=MAP_PIN_PATH/>
                    <div>
                        <h3 class=item_title_class>"ADDRESS"</h3>
                        <address class="not-italic text-white">
                            {contact.address.street.clone()}
                            <br/>
                            {contact.address.locality()}
                        </address>
                    </div>
                </div>
            </div>

            <div class="mt-12">
                <h3 class="text-sm text-gray-300 uppercase mb-4">"Connect with us:"</h3>
                <div class="flex space-x-4">
                    {SOCIAL_LINKS
                        .into_iter()
                        .map(|(name, mark)| view! {
                            <a
                                href="#"
                                class="bg-slate-700 hover:bg-slate-600 transition-colors h-9 w-9 rounded-full flex items-center justify-center text-sm font-semibold"
                                aria-label=name
                            >
                                {mark}
                            </a>
                        })
                        .collect_view()}
                </div>
            </div>
        </div>
    }
}
