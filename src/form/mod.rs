mod controller;
mod error;
mod field;
mod options;
mod state;
mod submitter;
mod validation;
#[cfg(test)]
mod controller_tests;

pub use controller::{
    ContactFormController, SubmissionStatus, SuccessTicket, SUCCESS_BANNER_DURATION,
};
pub use error::{SubmissionError, SubmitError};
pub use field::FormField;
pub use options::{SelectOption, COUNTRY_OPTIONS, PHONE_COUNTRY_CODES};
pub use state::{FormState, DEFAULT_PHONE_COUNTRY_CODE};
pub use submitter::{ContactSubmitter, SharedSubmitter, SimulatedSubmitter};
pub use validation::{is_valid_email, validate, ErrorMap};
