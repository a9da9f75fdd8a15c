use std::fmt;

use serde::{Deserialize, Serialize};

/// Player document returned by the service after a successful registration.
/// Every field is optional; the service omits what it does not know yet.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerProfile {
    #[serde(default)]
    pub uuid: Option<String>,
    #[serde(default)]
    pub email_address: Option<String>,
    #[serde(default)]
    pub nickname: Option<String>,
    #[serde(default)]
    pub avatar: Option<String>,
    #[serde(default)]
    pub registration_date: Option<Timestamp>,
    #[serde(default)]
    pub last_login_date: Option<Timestamp>,
}

impl PlayerProfile {
    /// Label/value pairs for the fields that are present, in display order.
    pub fn details(&self) -> Vec<(&'static str, String)> {
        let mut details = Vec::new();
        if let Some(uuid) = &self.uuid {
            details.push(("Player ID", uuid.clone()));
        }
        if let Some(nickname) = &self.nickname {
            details.push(("Nickname", nickname.clone()));
        }
        if let Some(email) = &self.email_address {
            details.push(("Email address", email.clone()));
        }
        if let Some(date) = &self.registration_date {
            details.push(("Registered", date.to_string()));
        }
        if let Some(date) = &self.last_login_date {
            details.push(("Last login", date.to_string()));
        }
        details
    }
}

/// A date-time as sent by the service: either preformatted text or the
/// nested `{date, time}` object produced for a `LocalDateTime`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Timestamp {
    Text(String),
    Structured { date: DatePart, time: TimePart },
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DatePart {
    pub year: i32,
    pub month: u32,
    pub day: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimePart {
    pub hour: u32,
    pub minute: u32,
    pub second: u32,
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Timestamp::Text(text) => write!(f, "{}", text),
            Timestamp::Structured { date, time } => write!(
                f,
                "{:04}-{:02}-{:02} {:02}:{:02}:{:02}",
                date.year,
                date.month,
                date.day,
                time.hour,
                time.minute,
                time.second
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_service_document() {
        let body = r#"{
  "uuid": "5b2a1c9e-0d3f-4c55-9a7e-1f0e2d3c4b5a",
  "emailAddress": "ripley@weyland-yutani.com",
  "nickname": "Ripley",
  "registrationDate": {
    "date": {"year": 2019, "month": 3, "day": 7},
    "time": {"hour": 9, "minute": 5, "second": 30, "nano": 0}
  },
  "statistics": {"wins": 0}
}"#;
        let player: PlayerProfile = serde_json::from_str(body).unwrap();
        assert_eq!(player.nickname.as_deref(), Some("Ripley"));
        assert_eq!(player.avatar, None);
        assert_eq!(
            player.registration_date.as_ref().unwrap().to_string(),
            "2019-03-07 09:05:30"
        );
        assert_eq!(player.last_login_date, None);

        let labels: Vec<&str> =
            player.details().iter().map(|(label, _)| *label).collect();
        assert_eq!(
            labels,
            vec!["Player ID", "Nickname", "Email address", "Registered"]
        );
    }

    #[test]
    fn test_text_timestamp() {
        let player: PlayerProfile =
            serde_json::from_str(r#"{"lastLoginDate":"2019-03-07T09:05:30"}"#)
                .unwrap();
        assert_eq!(
            player.last_login_date,
            Some(Timestamp::Text("2019-03-07T09:05:30".to_string()))
        );
        assert_eq!(
            player.details(),
            vec![("Last login", "2019-03-07T09:05:30".to_string())]
        );
    }
}
