use std::collections::HashMap;

use async_trait::async_trait;
use bytes::Bytes;
use url::Url;

use super::PlayerApi;
use crate::base::config::{ConfigError, EnvironmentConfig};
use crate::error::RegistrationError;
use crate::http::HttpClient;
use crate::registration::{PlayerProfile, SubmissionPayload};

const CONTENT_TYPE_JSON: &str = "application/json";

#[derive(Clone)]
pub struct HttpPlayerApi {
    client: HttpClient,
    url: Url,
}

impl HttpPlayerApi {
    pub fn new(client: HttpClient, url: Url) -> Self {
        Self { client, url }
    }

    pub fn from_config(config: &EnvironmentConfig) -> Result<Self, ConfigError> {
        let url = config.api_url()?;
        #[cfg(not(target_arch = "wasm32"))]
        let client = HttpClient::new().with_timeout(config.timeout()?);
        #[cfg(target_arch = "wasm32")]
        let client = HttpClient::new();
        Ok(Self::new(client, url))
    }

    pub fn url(&self) -> &Url {
        &self.url
    }
}

#[async_trait(?Send)]
impl PlayerApi for HttpPlayerApi {
    async fn create_player(
        &self,
        payload: &SubmissionPayload,
    ) -> Result<Option<PlayerProfile>, RegistrationError> {
        let body = Bytes::from(payload.to_json()?);
        let mut headers = HashMap::new();
        headers.insert("Content-Type".to_string(), CONTENT_TYPE_JSON.to_string());

        let response = self
            .client
            .post(self.url.as_str(), Some(&headers), Some(&body))
            .await?;
        log::debug!("Player created ({})", response.status_code());

        match response.json::<PlayerProfile>() {
            Ok(player) => Ok(player),
            Err(err) => {
                // registration went through, only the echo is unreadable
                log::warn!("Unreadable player document: {}", err);
                Ok(None)
            }
        }
    }
}
