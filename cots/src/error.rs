use std::fmt;

use serde::Deserialize;

use crate::http::HttpClientError;

/// Why a registration attempt did not succeed. Users only ever see the
/// generic server message; this keeps the cause for logs and debugging.
#[derive(Debug, Clone, PartialEq)]
pub enum RegistrationError {
    Http(HttpClientError),
    Rejected { status: u16, detail: String },
    Encode(String),
}

impl fmt::Display for RegistrationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RegistrationError::Http(e) => write!(f, "{}", e),
            RegistrationError::Rejected { status, detail } => {
                write!(f, "Rejected ({}): {}", status, detail)
            }
            RegistrationError::Encode(e) => write!(f, "Encode error: {}", e),
        }
    }
}

impl std::error::Error for RegistrationError {}

impl From<HttpClientError> for RegistrationError {
    fn from(err: HttpClientError) -> Self {
        match err {
            HttpClientError::HttpError(status, body) => {
                RegistrationError::Rejected {
                    status,
                    detail: server_message(&body),
                }
            }
            other => RegistrationError::Http(other),
        }
    }
}

impl From<serde_json::Error> for RegistrationError {
    fn from(err: serde_json::Error) -> Self {
        RegistrationError::Encode(err.to_string())
    }
}

// error document written by the player service on 4xx/5xx
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ServerErrorBody {
    error_message: String,
}

fn server_message(body: &str) -> String {
    match serde_json::from_str::<ServerErrorBody>(body) {
        Ok(parsed) => parsed.error_message,
        Err(_) => body.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejected_with_error_document() {
        let err = RegistrationError::from(HttpClientError::HttpError(
            400,
            r#"{"errorType":"Exception","errorMessage":"refreshToken cookie not found"}"#
                .to_string(),
        ));
        assert_eq!(
            err,
            RegistrationError::Rejected {
                status: 400,
                detail: "refreshToken cookie not found".to_string(),
            }
        );
        assert_eq!(
            err.to_string(),
            "Rejected (400): refreshToken cookie not found"
        );
    }

    #[test]
    fn test_rejected_with_plain_body() {
        let err = RegistrationError::from(HttpClientError::HttpError(
            502,
            "Bad Gateway".to_string(),
        ));
        assert_eq!(
            err,
            RegistrationError::Rejected {
                status: 502,
                detail: "Bad Gateway".to_string(),
            }
        );
    }

    #[test]
    fn test_transport_errors_kept() {
        let err = RegistrationError::from(HttpClientError::Timeout);
        assert_eq!(err, RegistrationError::Http(HttpClientError::Timeout));
        assert_eq!(err.to_string(), "Timeout");
    }
}
