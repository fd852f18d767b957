use super::{control_classes, FieldError, FloatingLabel, LABEL_REST_TOP};
use leptos::*;

#[component]
pub fn TextAreaInput(
    id: &'static str,
    #[prop(optional)] label: &'static str,
    #[prop(optional)] placeholder: &'static str,
    #[prop(into)] value: Signal<String>,
    #[prop(into)] on_input: Callback<String>,
    #[prop(into, optional)] error: MaybeSignal<Option<String>>,
    #[prop(optional)] required: bool,
    #[prop(into, optional)] disabled: MaybeSignal<bool>,
    #[prop(default = 4)] rows: u32,
    #[prop(optional)] class: &'static str,
) -> impl IntoView {
    let error = Signal::derive(move || error.get());
    let (focused, set_focused) = create_signal(false);
    let raised = move || focused.get() || value.with(|v| !v.is_empty());

    view! {
        <div class=format!("relative mb-4 {}", class)>
            {(!label.is_empty()).then(|| view! {
                <FloatingLabel
                    target=id
                    text=label
                    required=required
                    raised=raised
                    resting=LABEL_REST_TOP
                />
            })}
            <textarea
                id=id
                name=id
                rows=rows
                placeholder=move || if focused.get() { placeholder } else { "" }
                prop:value=move || value.get()
                on:input=move |ev| on_input.call(event_target_value(&ev))
                on:focus=move |_| set_focused.set(true)
                on:blur=move |_| set_focused.set(false)
                disabled=move || disabled.get()
                required=required
                class=move || control_classes(
                    "block w-full px-3 py-2 border rounded-md",
                    error.with(Option::is_some),
                    focused.get(),
                    disabled.get(),
                )
            ></textarea>
            <FieldError error=error/>
        </div>
    }
}
