mod dropdown_input;
mod phone_input;
mod text_area_input;
mod text_input;

pub use dropdown_input::DropdownInput;
pub use phone_input::PhoneInput;
pub use text_area_input::TextAreaInput;
pub use text_input::TextInput;

use crate::form::SelectOption;
use leptos::*;

/// Label position when the field is empty and unfocused, for single-line controls.
const LABEL_REST_CENTERED: &str = "text-gray-500 top-1/2 -translate-y-1/2";
/// Resting label position for multi-line controls.
const LABEL_REST_TOP: &str = "text-gray-500 top-3";

/// Floating label classes. The label rises above the border when `raised`.
fn label_classes(raised: bool, resting: &str) -> String {
    let position = if raised {
        "text-xs -top-2 bg-white px-1 text-slate-800 z-10"
    } else {
        resting
    };
    format!("absolute left-3 transition-all duration-200 flex items-center {}", position)
}

/// Border colour: an error wins over focus.
fn border_class(has_error: bool, focused: bool, focus_color: &'static str) -> &'static str {
    if has_error {
        "border-red-500"
    } else if focused {
        focus_color
    } else {
        "border-gray-300"
    }
}

fn control_classes(shape: &str, has_error: bool, focused: bool, disabled: bool) -> String {
    let background = if disabled {
        "bg-gray-100 cursor-not-allowed"
    } else {
        "bg-white"
    };
    format!(
        "{} transition-all duration-200 {} {} focus:outline-none focus:ring-2 focus:ring-slate-800 focus:ring-opacity-20",
        shape,
        border_class(has_error, focused, "border-slate-800"),
        background
    )
}

/// Value a `<select>` must display for `value`.
///
/// Anything not offered maps to `""`, the placeholder entry, so a reset
/// form never keeps showing the last pick.
fn selected_value(options: &'static [SelectOption], value: &str) -> &'static str {
    options
        .iter()
        .find(|option| option.value == value)
        .map_or("", |option| option.value)
}

#[component]
fn FloatingLabel<F>(
    target: &'static str,
    text: &'static str,
    required: bool,
    raised: F,
    #[prop(default = LABEL_REST_CENTERED)] resting: &'static str,
) -> impl IntoView
where
    F: Fn() -> bool + 'static,
{
    view! {
        <label for=target class=move || label_classes(raised(), resting)>
            <span>{text}</span>
            {required.then(|| view! { <span class="text-red-500 ml-1 inline-flex items-center">"*"</span> })}
        </label>
    }
}

#[component]
fn FieldError(error: Signal<Option<String>>) -> impl IntoView {
    move || {
        error
            .get()
            .map(|message| view! { <p class="mt-1 text-sm text-red-500">{message}</p> })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_border_beats_focus() {
        assert_eq!(border_class(true, true, "border-slate-800"), "border-red-500");
        assert_eq!(border_class(false, true, "border-blue-900"), "border-blue-900");
        assert_eq!(border_class(false, false, "border-slate-800"), "border-gray-300");
    }

    #[test]
    fn test_label_rises_when_raised() {
        let raised = label_classes(true, LABEL_REST_CENTERED);
        assert!(raised.contains("-top-2"));
        assert!(!raised.contains("top-1/2"));

        let resting = label_classes(false, LABEL_REST_TOP);
        assert!(resting.contains("top-3"));
        assert!(!resting.contains("text-xs"));
    }

    #[test]
    fn test_selected_value_follows_state() {
        use crate::form::{FormState, COUNTRY_OPTIONS, PHONE_COUNTRY_CODES};

        assert_eq!(selected_value(COUNTRY_OPTIONS, "us"), "us");
        assert_eq!(selected_value(PHONE_COUNTRY_CODES, "+44"), "+44");
        assert_eq!(selected_value(COUNTRY_OPTIONS, "atlantis"), "");

        // After a successful submit the state resets and the selects follow it.
        let reset = FormState::default();
        assert_eq!(selected_value(COUNTRY_OPTIONS, &reset.country), "");
        assert_eq!(selected_value(PHONE_COUNTRY_CODES, &reset.phone_country_code), "+1");
    }

    #[test]
    fn test_disabled_control_background() {
        let classes = control_classes("block w-full", false, false, true);
        assert!(classes.starts_with("block w-full"));
        assert!(classes.contains("bg-gray-100 cursor-not-allowed"));
        assert!(control_classes("block", true, false, false).contains("border-red-500 bg-white"));
    }
}
