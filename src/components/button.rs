use leptos::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
    Outline,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonSize {
    Sm,
    #[default]
    Md,
    Lg,
}

impl ButtonVariant {
    fn classes(self) -> &'static str {
        match self {
            ButtonVariant::Primary => "bg-slate-800 text-white hover:bg-slate-900 active:bg-blue-950",
            ButtonVariant::Secondary => "bg-gray-800 text-white hover:bg-gray-700 active:bg-gray-900",
            ButtonVariant::Outline => {
                "bg-white text-slate-800 border border-slate-800 hover:bg-blue-50 active:bg-blue-100"
            }
        }
    }
}

impl ButtonSize {
    fn classes(self) -> &'static str {
        match self {
            ButtonSize::Sm => "px-3 py-1.5 text-sm",
            ButtonSize::Md => "px-4 py-2",
            ButtonSize::Lg => "px-6 py-3 text-lg",
        }
    }
}

/// Tailwind classes for a button; `inactive` covers both disabled and loading.
pub fn button_classes(
    variant: ButtonVariant,
    size: ButtonSize,
    full_width: bool,
    inactive: bool,
) -> String {
    let mut classes = vec![
        "font-medium rounded-md transition-all duration-300 focus:outline-none",
        size.classes(),
        variant.classes(),
    ];
    if full_width {
        classes.push("w-full");
    }
    classes.push(if inactive {
        "opacity-70 cursor-not-allowed"
    } else {
        "cursor-pointer"
    });
    classes.join(" ")
}

#[component]
fn Spinner() -> impl IntoView {
    view! {
        <svg
            class="animate-spin -ml-1 mr-2 h-4 w-4 text-current"
            xmlns="http://www.w3.org/2000/svg"
            fill="none"
            viewBox="0 0 24 24"
        >
            <circle class="opacity-25" cx="12" cy="12" r="10" stroke="currentColor" stroke-width="4"></circle>
            <path
                class="opacity-75"
                fill="currentColor"
                d="M4 12a8 8 0 018-8V0C5.373 0 0 5.373 0 12h4zm2 5.291A7.962 7.962 0 014 12H0c0 3.042 1.135 5.824 3 7.938l3-2.647z"
            ></path>
        </svg>
    }
}

#[component]
pub fn Button(
    children: Children,
    #[prop(default = "button")] button_type: &'static str,
    #[prop(optional)] variant: ButtonVariant,
    #[prop(optional)] size: ButtonSize,
    #[prop(optional)] full_width: bool,
    #[prop(into, optional)] loading: MaybeSignal<bool>,
    #[prop(into, optional)] disabled: MaybeSignal<bool>,
    #[prop(into, optional)] on_click: Option<Callback<ev::MouseEvent>>,
) -> impl IntoView {
    let inactive = move || loading.get() || disabled.get();

    view! {
        <button
            type=button_type
            class=move || button_classes(variant, size, full_width, inactive())
            disabled=inactive
            on:click=move |ev| {
                if let Some(on_click) = on_click {
                    on_click.call(ev);
                }
            }
        >
            <div class="flex items-center justify-center">
                <Show when=move || loading.get()>
                    <Spinner/>
                </Show>
                {children()}
            </div>
        </button>
    }
}
