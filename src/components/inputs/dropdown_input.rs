use super::{control_classes, selected_value, FieldError, FloatingLabel};
use crate::form::SelectOption;
use leptos::*;

/// Select with a disabled "Select..." placeholder entry.
#[component]
pub fn DropdownInput(
    id: &'static str,
    #[prop(optional)] label: &'static str,
    options: &'static [SelectOption],
    #[prop(into)] value: Signal<String>,
    #[prop(into)] on_change: Callback<String>,
    #[prop(into, optional)] error: MaybeSignal<Option<String>>,
    #[prop(optional)] required: bool,
    #[prop(into, optional)] disabled: MaybeSignal<bool>,
    #[prop(optional)] class: &'static str,
) -> impl IntoView {
    let error = Signal::derive(move || error.get());
    let (focused, set_focused) = create_signal(false);
    let raised = move || focused.get() || value.with(|v| !v.is_empty());

    let option_views = options
        .iter()
        .map(|option| {
            let option_value = option.value;
            view! {
                <option value=option_value selected=move || value.with(|v| v == option_value)>
                    {option.label}
                </option>
            }
        })
        .collect_view();

    view! {
        <div class=format!("relative mb-4 {}", class)>
            {(!label.is_empty()).then(|| view! {
                <FloatingLabel target=id text=label required=required raised=raised/>
            })}
            <div class="relative">
                <select
                    id=id
                    name=id
                    prop:value=move || value.with(|v| selected_value(options, v))
                    on:change=move |ev| on_change.call(event_target_value(&ev))
                    on:focus=move |_| set_focused.set(true)
                    on:blur=move |_| set_focused.set(false)
                    disabled=move || disabled.get()
                    required=required
                    class=move || control_classes(
                        "block w-full px-3 py-2 border rounded-md appearance-none",
                        error.with(Option::is_some),
                        focused.get(),
                        disabled.get(),
                    )
                >
                    <option value="" disabled=true selected=move || value.with(String::is_empty)>
                        "Select..."
                    </option>
                    {option_views}
                </select>
                <div class="absolute inset-y-0 right-0 flex items-center pr-2 pointer-events-none">
                    <svg
                        class="w-5 h-5 text-gray-400"
                        fill="none"
                        stroke="currentColor"
                        viewBox="0 0 24 24"
                        xmlns="http://www.w3.org/2000/svg"
                    >
                        <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M19 9l-7 7-7-7"></path>
                    </svg>
                </div>
            </div>
            <FieldError error=error/>
        </div>
    }
}
