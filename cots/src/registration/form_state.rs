use std::fmt;

use serde::Serialize;

use super::{
    build_payload, validate, Field, FieldError, PlayerProfile,
    SubmissionPayload,
};
use crate::error::RegistrationError;

pub const WELCOME_MESSAGE: &str = "Welcome, Commander!";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    #[default]
    New,
    Loading,
    Success,
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Status::New => write!(f, "new"),
            Status::Loading => write!(f, "loading"),
            Status::Success => write!(f, "success"),
        }
    }
}

/// What the form should show for the current state.
#[derive(Debug, PartialEq)]
pub enum FormView<'a> {
    Loading,
    Welcome {
        message: &'static str,
        player: Option<&'a PlayerProfile>,
    },
    Form {
        nickname: &'a str,
        nickname_errors: Vec<&'a FieldError>,
        server_error: Option<&'a FieldError>,
    },
}

/// State owned by a single registration form.
///
/// Status only moves `New -> Loading -> Success` or back to `New` with a
/// server error; `errors` is empty whenever the status is `Success`.
#[derive(Debug, Clone, Default)]
pub struct FormState {
    status: Status,
    errors: Vec<FieldError>,
    loading: bool,
    nickname: String,
    player: Option<PlayerProfile>,
    last_failure: Option<RegistrationError>,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn errors(&self) -> &[FieldError] {
        &self.errors
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn nickname(&self) -> &str {
        &self.nickname
    }

    pub fn set_nickname(&mut self, value: impl Into<String>) {
        self.nickname = value.into();
    }

    pub fn player(&self) -> Option<&PlayerProfile> {
        self.player.as_ref()
    }

    /// Cause of the most recent failed submission, never shown to the user.
    pub fn last_failure(&self) -> Option<&RegistrationError> {
        self.last_failure.as_ref()
    }

    pub fn errors_for(&self, field: Field) -> Vec<&FieldError> {
        self.errors
            .iter()
            .filter(|error| error.field() == field)
            .collect()
    }

    pub fn nickname_errors(&self) -> Vec<&FieldError> {
        self.errors_for(Field::Nickname)
    }

    // only the latest server error is displayed
    pub fn server_error(&self) -> Option<&FieldError> {
        self.errors
            .iter()
            .rev()
            .find(|error| error.field() == Field::Server)
    }

    /// Validate the current nickname and, when it passes, mark the form as
    /// in flight and hand back the payload to send. Returns `None` when
    /// validation fails, a request is already outstanding, or the player
    /// is already registered.
    pub fn begin_submission(&mut self) -> Option<SubmissionPayload> {
        if self.loading {
            log::debug!("Submission ignored: request already in flight");
            return None;
        }
        if self.status == Status::Success {
            log::debug!("Submission ignored: player already registered");
            return None;
        }

        let errors = validate(&self.nickname);
        if !errors.is_empty() {
            self.errors = errors;
            return None;
        }

        self.errors.clear();
        self.last_failure = None;
        self.loading = true;
        self.status = Status::Loading;
        Some(build_payload(&self.nickname))
    }

    /// Settle an in-flight submission with the outcome of the request.
    pub fn complete_submission(
        &mut self,
        outcome: Result<Option<PlayerProfile>, RegistrationError>,
    ) {
        if !self.loading {
            log::warn!("Submission outcome received with no request in flight");
            return;
        }
        self.loading = false;

        match outcome {
            Ok(player) => {
                self.status = Status::Success;
                self.errors.clear();
                self.player = player;
            }
            Err(err) => {
                log::error!("Registration failed: {}", err);
                self.status = Status::New;
                self.errors.push(FieldError::registration_failed());
                self.last_failure = Some(err);
            }
        }
    }

    pub fn view(&self) -> FormView<'_> {
        match self.status {
            Status::Loading => FormView::Loading,
            Status::Success => FormView::Welcome {
                message: WELCOME_MESSAGE,
                player: self.player.as_ref(),
            },
            Status::New => FormView::Form {
                nickname: &self.nickname,
                nickname_errors: self.nickname_errors(),
                server_error: self.server_error(),
            },
        }
    }
}
