use crate::components::{ContactSection, Hero, NavBar, SiteFooter};
use crate::config::SiteConfig;
use leptos::*;

#[component]
pub fn DesktopHome() -> impl IntoView {
    let hero = use_context::<SiteConfig>().unwrap_or_default().hero;

    view! {
        <div class="min-h-screen flex flex-col">
            <NavBar/>

            <main class="flex-grow bg-gray-50">
                <div class="container mx-auto px-4 md:px-6 lg:px-8">
                    <Hero title=hero.title subtitle=hero.subtitle/>

                    <div class="pb-16">
                        <ContactSection/>
                    </div>
                </div>
            </main>

            <SiteFooter/>
        </div>
    }
}
