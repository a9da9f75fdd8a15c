use std::fmt;

use serde::{Deserialize, Serialize};

pub const NICKNAME_REQUIRED: &str = "Nickname cannot be null";
pub const REGISTRATION_FAILED: &str = "Registration failed.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    Nickname,
    Server,
}

impl Field {
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Nickname => "nickname",
            Field::Server => "server",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    field: Field,
    message: String,
}

impl FieldError {
    pub fn new(field: Field, message: &str) -> Self {
        Self {
            field,
            message: message.to_string(),
        }
    }

    pub fn nickname_required() -> Self {
        Self::new(Field::Nickname, NICKNAME_REQUIRED)
    }

    pub fn registration_failed() -> Self {
        Self::new(Field::Server, REGISTRATION_FAILED)
    }

    pub fn field(&self) -> Field {
        self.field
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}
