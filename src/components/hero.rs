use leptos::*;

#[component]
pub fn Hero(#[prop(into)] title: String, #[prop(into)] subtitle: String) -> impl IntoView {
    view! {
        <div class="flex flex-col justify-center items-center py-12 md:text-left md:py-16 lg:py-24">
            <h1 class="text-3xl text-center w-md md:text-4xl lg:text-5xl font-bold text-slate-800 mb-4">
                {title}
            </h1>
            <p class="text-lg text-center md:max-w-2xl">{subtitle}</p>
        </div>
    }
}
