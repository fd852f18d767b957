use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the fixed contact form fields.
///
/// Ordering follows the on-page order, so an `ErrorMap` iterates top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FormField {
    FirstName,
    LastName,
    CompanyName,
    WorkEmail,
    Country,
    PhoneCountryCode,
    PhoneNumber,
    ProjectDescription,
}

impl FormField {
    pub const ALL: [FormField; 8] = [
        FormField::FirstName,
        FormField::LastName,
        FormField::CompanyName,
        FormField::WorkEmail,
        FormField::Country,
        FormField::PhoneCountryCode,
        FormField::PhoneNumber,
        FormField::ProjectDescription,
    ];

    /// Name used for the DOM `id`/`name` attributes and the JSON payload.
    pub fn name(self) -> &'static str {
        match self {
            FormField::FirstName => "firstName",
            FormField::LastName => "lastName",
            FormField::CompanyName => "companyName",
            FormField::WorkEmail => "workEmail",
            FormField::Country => "country",
            FormField::PhoneCountryCode => "phoneCountryCode",
            FormField::PhoneNumber => "phoneNumber",
            FormField::ProjectDescription => "projectDescription",
        }
    }

    /// Fields that must be non-blank before the form can be submitted.
    pub fn is_required(self) -> bool {
        matches!(
            self,
            FormField::FirstName
                | FormField::LastName
                | FormField::WorkEmail
                | FormField::Country
                | FormField::PhoneNumber
        )
    }

    pub fn label(self) -> &'static str {
        match self {
            FormField::FirstName => "First name",
            FormField::LastName => "Last name",
            FormField::CompanyName => "Company name",
            FormField::WorkEmail => "Work email",
            FormField::Country => "Country",
            FormField::PhoneCountryCode => "Country code",
            FormField::PhoneNumber => "Phone Number",
            FormField::ProjectDescription => "Describe the project you need help with",
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            FormField::FirstName => "Enter your first name",
            FormField::LastName => "Enter your last name",
            FormField::CompanyName => "Enter your company name",
            FormField::WorkEmail => "Enter your work email",
            FormField::PhoneNumber => "Enter your phone number",
            FormField::ProjectDescription => "Tell us about your project...",
            FormField::Country | FormField::PhoneCountryCode => "",
        }
    }
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
