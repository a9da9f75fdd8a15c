pub(crate) mod api;
pub(crate) mod base;
pub(crate) mod error;
pub(crate) mod http;
pub(crate) mod registration;

pub use api::PlayerApi;
#[cfg(any(feature = "http_client", target_arch = "wasm32"))]
pub use api::HttpPlayerApi;
pub use base::config::{ConfigError, EnvironmentConfig, DEFAULT_API_URL};
pub use error::RegistrationError;
pub use registration::{
    build_payload, submit, validate, Field, FieldError, FormState, FormView,
    PlayerProfile, Status, SubmissionPayload, Timestamp, DatePart, TimePart,
    NICKNAME_REQUIRED,
    REGISTRATION_FAILED, WELCOME_MESSAGE,
};

// transport layer, exposed for front-ends that need their own requests
pub mod external {
    #[cfg(any(feature = "http_client", target_arch = "wasm32"))]
    pub use crate::http::HttpClient;
    pub use crate::http::{
        HttpClientError, HttpClientResponse, HttpClientResult,
    };
}
