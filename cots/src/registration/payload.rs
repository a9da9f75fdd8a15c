use serde::{Deserialize, Serialize};

/// Request body for `POST .../v1/players`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionPayload {
    pub nickname: String,
}

impl SubmissionPayload {
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

// the nickname goes out exactly as typed
pub fn build_payload(nickname: &str) -> SubmissionPayload {
    SubmissionPayload {
        nickname: nickname.to_string(),
    }
}
