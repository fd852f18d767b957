use crate::components::inputs::{DropdownInput, PhoneInput, TextAreaInput, TextInput};
use crate::components::{Button, ButtonVariant};
use crate::config::SiteConfig;
use crate::form::{
    ContactFormController, FormField, SharedSubmitter, SubmitError, COUNTRY_OPTIONS,
};
use leptos::logging;
use leptos::*;
use std::time::Duration;

/// The page's controller, or a fresh one when no page provides it.
fn form_controller() -> RwSignal<ContactFormController> {
    use_context::<RwSignal<ContactFormController>>()
        .unwrap_or_else(|| create_rw_signal(ContactFormController::new()))
}

fn submitting_signal(controller: RwSignal<ContactFormController>) -> Signal<bool> {
    Signal::derive(move || controller.with(|form| form.status().is_submitting()))
}

/// The contact form shared by the desktop and mobile layouts.
///
/// All state lives in one `ContactFormController`; inputs only see derived
/// value/error signals and report edits back through `on_field_change`.
/// The controller comes from context when a page provides one, so it can
/// outlive this component.
#[component]
pub fn ContactForm(
    /// Stretch the submit button across the form (mobile layout)
    #[prop(optional)]
    full_width_submit: bool,
) -> impl IntoView {
    let config = use_context::<SiteConfig>().unwrap_or_default();
    let submitter = use_context::<SharedSubmitter>().unwrap_or_default();
    let banner_duration = Duration::from_millis(u64::from(config.success_banner_ms));

    let controller = form_controller();

    let value = move |field: FormField| {
        Signal::derive(move || controller.with(|form| form.value(field).to_string()))
    };
    let error = move |field: FormField| {
        Signal::derive(move || controller.with(|form| form.error(field).map(str::to_string)))
    };
    let change = move |field: FormField| {
        Callback::new(move |new_value: String| {
            controller.update(|form| form.on_field_change(field, new_value))
        })
    };

    // Locks every control, not just the button, while a request is in flight.
    let submitting = submitting_signal(controller);
    let succeeded = move || controller.with(|form| form.status().is_succeeded());

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();

        let request = match controller.try_update(|form| form.begin_submit()) {
            Some(Ok(request)) => request,
            Some(Err(SubmitError::Invalid(errors))) => {
                let fields: Vec<&str> = errors.fields().map(FormField::name).collect();
                logging::log!("Jacobi: contact form has invalid fields: {}", fields.join(", "));
                return;
            }
            Some(Err(err)) => {
                logging::warn!("Jacobi: contact form not submitted: {}", err);
                return;
            }
            None => return,
        };

        let submitter = submitter.clone();
        spawn_local(async move {
            let result = submitter.0.submit(&request).await;
            // The form may have been unmounted while the request was in flight.
            if let Some(Ok(ticket)) = controller.try_update(|form| form.complete_submit(result)) {
                set_timeout(
                    move || {
                        controller.try_update(|form| form.dismiss_success(ticket));
                    },
                    banner_duration,
                );
            }
        });
    };

    view! {
        <form on:submit=on_submit class="space-y-4" novalidate=true>
            <Show when=succeeded>
                <div class="bg-green-100 border border-green-400 text-green-700 px-4 py-3 rounded mb-4 animate-slideIn">
                    "Thank you! Your message has been sent successfully."
                </div>
            </Show>

            <div class="grid grid-cols-1 md:grid-cols-2 gap-4">
                <TextInput
                    id=FormField::FirstName.name()
                    label=FormField::FirstName.label()
                    placeholder=FormField::FirstName.placeholder()
                    value=value(FormField::FirstName)
                    on_input=change(FormField::FirstName)
                    disabled=submitting
                    error=error(FormField::FirstName)
                    required=true
                />
                <TextInput
                    id=FormField::LastName.name()
                    label=FormField::LastName.label()
                    placeholder=FormField::LastName.placeholder()
                    value=value(FormField::LastName)
                    on_input=change(FormField::LastName)
                    disabled=submitting
                    error=error(FormField::LastName)
                    required=true
                />
            </div>

            <TextInput
                id=FormField::CompanyName.name()
                label=FormField::CompanyName.label()
                placeholder=FormField::CompanyName.placeholder()
                value=value(FormField::CompanyName)
                on_input=change(FormField::CompanyName)
                disabled=submitting
            />

            <TextInput
                id=FormField::WorkEmail.name()
                input_type="email"
                label=FormField::WorkEmail.label()
                placeholder=FormField::WorkEmail.placeholder()
                value=value(FormField::WorkEmail)
                on_input=change(FormField::WorkEmail)
                disabled=submitting
                error=error(FormField::WorkEmail)
                required=true
            />

            <DropdownInput
                id=FormField::Country.name()
                label=FormField::Country.label()
                options=COUNTRY_OPTIONS
                value=value(FormField::Country)
                on_change=change(FormField::Country)
                disabled=submitting
                error=error(FormField::Country)
                required=true
            />

            <PhoneInput
                id=FormField::PhoneNumber.name()
                label=FormField::PhoneNumber.label()
                placeholder=FormField::PhoneNumber.placeholder()
                value=value(FormField::PhoneNumber)
                on_input=change(FormField::PhoneNumber)
                country_code=value(FormField::PhoneCountryCode)
                on_country_code_change=change(FormField::PhoneCountryCode)
                disabled=submitting
                error=error(FormField::PhoneNumber)
                required=true
            />

            <TextAreaInput
                id=FormField::ProjectDescription.name()
                label=FormField::ProjectDescription.label()
                placeholder=FormField::ProjectDescription.placeholder()
                value=value(FormField::ProjectDescription)
                on_input=change(FormField::ProjectDescription)
                disabled=submitting
                rows=5
            />

            <div class="mt-6">
                <Button
                    button_type="submit"
                    variant=ButtonVariant::Primary
                    full_width=full_width_submit
                    loading=submitting
                    disabled=submitting
                >
                    "SUBMIT"
                </Button>
            </div>
        </form>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fill(form: &mut ContactFormController) {
        form.on_field_change(FormField::FirstName, "Ada");
        form.on_field_change(FormField::LastName, "Lovelace");
        form.on_field_change(FormField::WorkEmail, "ada@x.com");
        form.on_field_change(FormField::Country, "us");
        form.on_field_change(FormField::PhoneNumber, "5551234");
    }

    #[test]
    fn test_provided_controller_survives_form_remount() {
        let runtime = create_runtime();
        provide_context(create_rw_signal(ContactFormController::new()));

        // Desktop shell's form takes the typed data.
        form_controller().update(|form| form.on_field_change(FormField::FirstName, "Ada"));

        // Mobile shell's form after a resize sees the same controller.
        let remounted = form_controller();
        assert_eq!(remounted.with(|form| form.value(FormField::FirstName).to_string()), "Ada");

        runtime.dispose();
    }

    #[test]
    fn test_form_without_page_context_gets_its_own_controller() {
        let runtime = create_runtime();

        let first = form_controller();
        first.update(|form| form.on_field_change(FormField::FirstName, "Ada"));
        let second = form_controller();
        assert_eq!(second.with(|form| form.value(FormField::FirstName).to_string()), "");

        runtime.dispose();
    }

    #[test]
    fn test_inputs_lock_only_while_submitting() {
        let runtime = create_runtime();
        let controller = create_rw_signal(ContactFormController::new());
        let locked = submitting_signal(controller);
        assert!(!locked.get());

        controller.update(fill);
        assert!(controller.try_update(|form| form.begin_submit()).is_some_and(|r| r.is_ok()));
        assert!(locked.get());

        controller.update(|form| {
            let _ = form.complete_submit(Ok(()));
        });
        assert!(!locked.get());

        runtime.dispose();
    }
}
