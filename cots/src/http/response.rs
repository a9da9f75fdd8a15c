use std::fmt;
use std::string::FromUtf8Error;

use bytes::Bytes;
use serde::de::DeserializeOwned;

#[derive(Debug, Clone)]
pub struct HttpClientResponse {
    body: Option<Bytes>,
    status_code: u16,
}

impl HttpClientResponse {
    pub fn new(body: Option<Bytes>, status_code: u16) -> Self {
        Self { body, status_code }
    }

    pub fn status_code(&self) -> u16 {
        self.status_code
    }

    /// Decode the body as JSON. An absent or whitespace-only body yields
    /// `Ok(None)`.
    pub fn json<T: DeserializeOwned>(&self) -> Result<Option<T>, serde_json::Error> {
        match &self.body {
            Some(body) if !body.iter().all(u8::is_ascii_whitespace) => {
                serde_json::from_slice(body).map(Some)
            }
            _ => Ok(None),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum HttpClientError {
    ConnectionError(String),
    Timeout,
    HttpError(u16, String), // Status code, response body or status text
    Utf8Error(String),
    Other(String),
}

impl fmt::Display for HttpClientError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HttpClientError::ConnectionError(e) => {
                write!(f, "ConnectionError: {}", e)
            }
            HttpClientError::Timeout => write!(f, "Timeout"),
            HttpClientError::HttpError(code, message) => {
                write!(f, "HTTPError: {} {}", code, message)
            }
            HttpClientError::Utf8Error(e) => write!(f, "Utf8Error: {}", e),
            HttpClientError::Other(e) => write!(f, "Other: {}", e),
        }
    }
}

impl std::error::Error for HttpClientError {}

impl From<FromUtf8Error> for HttpClientError {
    fn from(err: FromUtf8Error) -> Self {
        HttpClientError::Utf8Error(err.to_string())
    }
}

pub type HttpClientResult = Result<HttpClientResponse, HttpClientError>;

/// Text carried by a rejected response: the body when there is one,
/// otherwise the status text.
pub(crate) fn error_detail(body: &[u8], canonical_reason: &str) -> String {
    let text = String::from_utf8_lossy(body);
    let text = text.trim();
    if text.is_empty() {
        canonical_reason.to_string()
    } else {
        text.to_string()
    }
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;

    use super::*;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Greeting {
        hello: String,
    }

    #[test]
    fn test_json_body() {
        let response = HttpClientResponse::new(
            Some(Bytes::from_static(br#"{"hello":"world"}"#)),
            200,
        );
        let greeting: Option<Greeting> = response.json().unwrap();
        assert_eq!(
            greeting,
            Some(Greeting {
                hello: "world".to_string()
            })
        );
    }

    #[test]
    fn test_json_empty_body() {
        let response = HttpClientResponse::new(None, 204);
        assert_eq!(response.json::<Greeting>().unwrap(), None);

        let response =
            HttpClientResponse::new(Some(Bytes::from_static(b" \n")), 200);
        assert_eq!(response.json::<Greeting>().unwrap(), None);

        let response =
            HttpClientResponse::new(Some(Bytes::from_static(b"<html>")), 200);
        assert!(response.json::<Greeting>().is_err());
    }

    #[test]
    fn test_error_detail() {
        assert_eq!(error_detail(b"", "Bad Request"), "Bad Request");
        assert_eq!(error_detail(b"  nope \n", "Bad Request"), "nope");
    }
}
