mod registration_form;

pub mod buttons;
pub mod forms;

pub use registration_form::RegistrationForm;
