use crate::config::SiteConfig;
use leptos::*;
use leptos_router::{use_location, A};

const MENU_SECTIONS: [&str; 3] = ["Developers", "Solutions", "Company"];

#[component]
fn Chevron(#[prop(default = "ml-1 w-4 h-4")] class: &'static str) -> impl IntoView {
    view! {
        <svg class=class fill="none" stroke="currentColor" viewBox="0 0 24 24" xmlns="http://www.w3.org/2000/svg">
            <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M19 9l-7 7-7-7"></path>
        </svg>
    }
}

#[component]
fn MenuIcon(open: ReadSignal<bool>) -> impl IntoView {
    let path = move || {
        if open.get() {
            "M6 18L18 6M6 6l12 12"
        } else {
            "M4 6h16M4 12h16M4 18h16"
        }
    };

    view! {
        <svg class="h-6 w-6" fill="none" viewBox="0 0 24 24" stroke="currentColor">
            <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d=path/>
        </svg>
    }
}

#[component]
pub fn NavBar() -> impl IntoView {
    let config = use_context::<SiteConfig>().unwrap_or_default();
    let location = use_location();
    let pathname = move || location.pathname.get();
    let (menu_open, set_menu_open) = create_signal(false);

    let link_class = move |href: &'static str, base: &'static str| {
        if pathname().starts_with(href) {
            format!("{} text-slate-900 underline underline-offset-4", base)
        } else {
            base.to_string()
        }
    };

    view! {
        <nav class="bg-white py-4 px-6 shadow-sm">
            <div class="max-w-7xl mx-auto flex justify-between items-center">
                <div class="flex items-center">
                    <A href="/" class="flex items-center">
                        <img src=config.logo_src.clone() alt=config.company_name.clone() class="h-8"/>
                    </A>
                </div>

                <div class="hidden md:flex items-center space-x-8">
                    {MENU_SECTIONS
                        .into_iter()
                        .map(|section| view! {
                            <div class="relative group">
                                <button class="flex items-center text-gray-800 hover:text-slate-900 font-medium">
                                    {section}
                                    <Chevron/>
                                </button>
                            </div>
                        })
                        .collect_view()}
                    <A
                        href="/blog"
                        class=move || link_class("/blog", "text-gray-800 hover:text-slate-900 font-medium")
                    >
                        "Blog"
                    </A>
                    <div class="ml-4">
                        <A
                            href="/demo"
                            class="bg-white text-slate-800 border border-slate-800 px-4 py-2 rounded-md hover:bg-blue-50 transition duration-300 font-medium"
                        >
                            "Request a Demo"
                        </A>
                    </div>
                </div>

                <div class="md:hidden flex items-center">
                    <button
                        class="text-gray-800 hover:text-slate-800 focus:outline-none"
                        aria-label="Toggle menu"
                        aria-expanded=move || menu_open.get().to_string()
                        on:click=move |_| set_menu_open.update(|open| *open = !*open)
                    >
                        <MenuIcon open=menu_open/>
                    </button>
                </div>
            </div>

            <Show when=move || menu_open.get()>
                <div class="md:hidden mt-4 animate-fadeIn">
                    <div class="flex flex-col space-y-4 px-4 pb-4">
                        {MENU_SECTIONS
                            .into_iter()
                            .map(|section| view! {
                                <button class="flex justify-between items-center text-gray-800 font-medium">
                                    {section}
                                    <Chevron class="w-4 h-4"/>
                                </button>
                            })
                            .collect_view()}
                        <A href="/blog" class="text-gray-800 font-medium">"Blog"</A>
                        <A
                            href="/demo"
                            class="bg-white text-slate-900 border border-slate-900 px-4 py-2 rounded-md text-center hover:bg-blue-50 transition duration-300 font-medium"
                        >
                            "Request a Demo"
                        </A>
                    </div>
                </div>
            </Show>
        </nav>
    }
}
