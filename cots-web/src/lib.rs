pub(crate) mod components;
pub(crate) mod vars;

pub mod app;

pub use components::RegistrationForm;
