mod form_button;

pub use form_button::FormButton;
