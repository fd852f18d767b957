mod button;
mod contact_details;
mod contact_form;
mod contact_section;
mod footer;
mod hero;
pub mod inputs;
mod nav_bar;

pub use button::{button_classes, Button, ButtonSize, ButtonVariant};
pub use contact_details::ContactDetails;
pub use contact_form::ContactForm;
pub use contact_section::ContactSection;
pub use footer::SiteFooter;
pub use hero::Hero;
pub use nav_bar::NavBar;
