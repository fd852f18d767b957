use super::{FormField, FormState};
use regex::Regex;
use std::collections::BTreeMap;
use std::sync::OnceLock;

/// Something before an `@`, then a dotted domain-like suffix. Unanchored.
const EMAIL_PATTERN: &str = r"\S+@\S+\.\S+";

fn email_regex() -> &'static Regex {
    static EMAIL: OnceLock<Regex> = OnceLock::new();
    EMAIL.get_or_init(|| Regex::new(EMAIL_PATTERN).expect("Invalid email pattern"))
}

pub fn is_valid_email(value: &str) -> bool {
    email_regex().is_match(value)
}

/// Field-scoped validation messages.
///
/// Never holds an empty message: inserting one is ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorMap(BTreeMap<FormField, String>);

impl ErrorMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, field: FormField, message: impl Into<String>) {
        let message = message.into();
        if !message.is_empty() {
            self.0.insert(field, message);
        }
    }

    pub fn remove(&mut self, field: FormField) -> Option<String> {
        self.0.remove(&field)
    }

    pub fn get(&self, field: FormField) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn contains(&self, field: FormField) -> bool {
        self.0.contains_key(&field)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn fields(&self) -> impl Iterator<Item = FormField> + '_ {
        self.0.keys().copied()
    }
}

fn required_message(field: FormField) -> &'static str {
    match field {
        FormField::FirstName => "First name is required",
        FormField::LastName => "Last name is required",
        FormField::WorkEmail => "Work email is required",
        FormField::Country => "Country is required",
        FormField::PhoneNumber => "Phone number is required",
        _ => "This field is required",
    }
}

/// Check every required field and the email format.
///
/// Returns one message per failing field; an empty map means the form can be sent.
pub fn validate(state: &FormState) -> ErrorMap {
    let mut errors = ErrorMap::new();

    for field in FormField::ALL.into_iter().filter(|f| f.is_required()) {
        if state.get(field).trim().is_empty() {
            errors.insert(field, required_message(field));
        }
    }

    if !errors.contains(FormField::WorkEmail) && !is_valid_email(&state.work_email) {
        errors.insert(FormField::WorkEmail, "Please enter a valid email address");
    }

    errors
}
