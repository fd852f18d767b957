use super::FormField;
use serde::{Deserialize, Serialize};

pub const DEFAULT_PHONE_COUNTRY_CODE: &str = "+1";

/// Values of every contact form field.
///
/// Serialized as the camelCase object handed to the contact submitter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormState {
    pub first_name: String,
    pub last_name: String,
    pub company_name: String,
    pub work_email: String,
    pub country: String,
    pub phone_country_code: String,
    pub phone_number: String,
    pub project_description: String,
}

impl Default for FormState {
    fn default() -> Self {
        Self {
            first_name: String::new(),
            last_name: String::new(),
            company_name: String::new(),
            work_email: String::new(),
            country: String::new(),
            phone_country_code: DEFAULT_PHONE_COUNTRY_CODE.to_string(),
            phone_number: String::new(),
            project_description: String::new(),
        }
    }
}

impl FormState {
    pub fn get(&self, field: FormField) -> &str {
        match field {
            FormField::FirstName => &self.first_name,
            FormField::LastName => &self.last_name,
            FormField::CompanyName => &self.company_name,
            FormField::WorkEmail => &self.work_email,
            FormField::Country => &self.country,
            FormField::PhoneCountryCode => &self.phone_country_code,
            FormField::PhoneNumber => &self.phone_number,
            FormField::ProjectDescription => &self.project_description,
        }
    }

    pub fn set(&mut self, field: FormField, value: impl Into<String>) {
        *self.slot_mut(field) = value.into();
    }

    /// Restore the initial values (all blank, country code back to +1).
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    fn slot_mut(&mut self, field: FormField) -> &mut String {
        match field {
            FormField::FirstName => &mut self.first_name,
            FormField::LastName => &mut self.last_name,
            FormField::CompanyName => &mut self.company_name,
            FormField::WorkEmail => &mut self.work_email,
            FormField::Country => &mut self.country,
            FormField::PhoneCountryCode => &mut self.phone_country_code,
            FormField::PhoneNumber => &mut self.phone_number,
            FormField::ProjectDescription => &mut self.project_description,
        }
    }
}
