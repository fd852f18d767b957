use crate::components::{NavBar, SiteFooter};
use leptos::*;
use leptos_router::A;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="min-h-screen flex flex-col">
            <NavBar/>

            <main class="flex-grow bg-gray-50 flex flex-col items-center justify-center py-24">
                <h1 class="text-5xl font-bold text-slate-800 mb-4">"404"</h1>
                <p class="text-lg text-gray-600 mb-8">"Page not found"</p>
                <A href="/" class="text-slate-800 underline underline-offset-4">"< Back home"</A>
            </main>

            <SiteFooter/>
        </div>
    }
}
