use super::{border_class, control_classes, selected_value, FieldError, FloatingLabel};
use crate::form::PHONE_COUNTRY_CODES;
use leptos::*;

/// Country-code select joined to a `tel` input.
#[component]
pub fn PhoneInput(
    id: &'static str,
    #[prop(optional)] label: &'static str,
    #[prop(optional)] placeholder: &'static str,
    #[prop(into)] value: Signal<String>,
    #[prop(into)] on_input: Callback<String>,
    #[prop(into)] country_code: Signal<String>,
    #[prop(into)] on_country_code_change: Callback<String>,
    #[prop(into, optional)] error: MaybeSignal<Option<String>>,
    #[prop(optional)] required: bool,
    #[prop(into, optional)] disabled: MaybeSignal<bool>,
    #[prop(optional)] class: &'static str,
) -> impl IntoView {
    let error = Signal::derive(move || error.get());
    let (focused, set_focused) = create_signal(false);
    // A country code is always chosen, so the label sits raised once one is set.
    let raised = move || {
        focused.get() || value.with(|v| !v.is_empty()) || country_code.with(|c| !c.is_empty())
    };
    let has_error = move || error.with(Option::is_some);

    let code_options = PHONE_COUNTRY_CODES
        .iter()
        .map(|code| {
            let code_value = code.value;
            view! {
                <option value=code_value selected=move || country_code.with(|c| c == code_value)>
                    {code.label}
                </option>
            }
        })
        .collect_view();

    view! {
        <div class=format!("relative mb-4 {}", class)>
            {(!label.is_empty()).then(|| view! {
                <FloatingLabel target=id text=label required=required raised=raised/>
            })}
            <div class="flex">
                <div class="w-24 flex-shrink-0">
                    <select
                        name=format!("{}CountryCode", id)
                        aria-label="Country code"
                        prop:value=move || country_code.with(|c| selected_value(PHONE_COUNTRY_CODES, c))
                        on:change=move |ev| on_country_code_change.call(event_target_value(&ev))
                        disabled=move || disabled.get()
                        class=move || format!(
                            "h-full w-full border-r-0 rounded-l-md border transition-all duration-200 {} {} focus:outline-none focus:ring-2 focus:ring-blue-900 focus:ring-opacity-20",
                            border_class(has_error(), focused.get(), "border-blue-900"),
                            if disabled.get() { "bg-gray-100 cursor-not-allowed" } else { "bg-white" },
                        )
                    >
                        {code_options}
                    </select>
                </div>
                <input
                    id=id
                    name=id
                    type="tel"
                    placeholder=move || if focused.get() { placeholder } else { "" }
                    prop:value=move || value.get()
                    on:input=move |ev| on_input.call(event_target_value(&ev))
                    on:focus=move |_| set_focused.set(true)
                    on:blur=move |_| set_focused.set(false)
                    disabled=move || disabled.get()
                    required=required
                    class=move || control_classes(
                        "block flex-1 px-3 py-2 border rounded-r-md",
                        has_error(),
                        focused.get(),
                        disabled.get(),
                    )
                />
            </div>
            <FieldError error=error/>
        </div>
    }
}
