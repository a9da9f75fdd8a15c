mod field_error;
mod form_state;
mod payload;
mod player;
mod submit;
mod validate;

pub use field_error::{
    Field, FieldError, NICKNAME_REQUIRED, REGISTRATION_FAILED,
};
pub use form_state::{FormState, FormView, Status, WELCOME_MESSAGE};
pub use payload::{build_payload, SubmissionPayload};
pub use player::{DatePart, PlayerProfile, TimePart, Timestamp};
pub use submit::submit;
pub use validate::validate;
