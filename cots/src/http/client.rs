use std::collections::HashMap;
use std::convert::Infallible;
use std::str::FromStr;
use std::time::Duration;

use anyhow::{anyhow, Error as AnyhowError};
use bytes::Bytes;
use http_body_util::combinators::BoxBody;
use http_body_util::{BodyExt, Empty, Full};
use hyper::header::{HeaderName, HeaderValue};
use hyper::{Request, Uri};
use hyper_tls::HttpsConnector;
use hyper_util::client::legacy::connect::HttpConnector;
use hyper_util::client::legacy::Client;
use hyper_util::rt::TokioExecutor;
use tokio::time::timeout;

use super::response::error_detail;
use super::{HttpClientError, HttpClientResponse, HttpClientResult};

impl From<hyper::http::Error> for HttpClientError {
    fn from(err: hyper::http::Error) -> Self {
        HttpClientError::Other(err.to_string())
    }
}

impl From<AnyhowError> for HttpClientError {
    fn from(err: AnyhowError) -> Self {
        HttpClientError::Other(err.to_string())
    }
}

#[derive(Clone)]
pub struct HttpClient {
    client: Client<
        HttpsConnector<HttpConnector>,
        BoxBody<Bytes, Infallible>,
    >,
    timeout: Option<Duration>,
}

impl Default for HttpClient {
    fn default() -> Self {
        Self::new()
    }
}

impl HttpClient {
    pub fn new() -> Self {
        let https = HttpsConnector::new();

        let client: Client<
            HttpsConnector<HttpConnector>,
            BoxBody<Bytes, Infallible>,
        > = Client::builder(TokioExecutor::new())
            .build::<_, BoxBody<Bytes, Infallible>>(https);

        HttpClient {
            client,
            timeout: None,
        }
    }

    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    async fn request(
        &self,
        method: &str,
        url: &str,
        headers: Option<&HashMap<String, String>>,
        body: Option<&Bytes>,
    ) -> HttpClientResult {
        log::debug!("{} {}", method, url);
        let uri = Uri::from_str(url)
            .map_err(|e| HttpClientError::Other(e.to_string()))?;

        let mut req_builder = Request::builder().method(method).uri(uri);

        if let Some(headers_map) = headers {
            for (key, value) in headers_map.iter() {
                let header_name = HeaderName::from_str(key)
                    .map_err(|e| HttpClientError::Other(e.to_string()))?;
                let header_value = HeaderValue::from_str(value)
                    .map_err(|e| HttpClientError::Other(e.to_string()))?;
                req_builder = req_builder.header(header_name, header_value);
            }
        }
        let request = req_builder.body(create_request_body(body))?;

        // the deadline covers the response head and the full body
        let exchange = async {
            let response =
                self.client.request(request).await.map_err(|e| {
                    HttpClientError::ConnectionError(format!("{}: {}", url, e))
                })?;
            let status = response.status();
            let body_bytes = response
                .into_body()
                .collect()
                .await
                .map_err(|e| anyhow!(e))?
                .to_bytes();
            Ok::<_, HttpClientError>((status, body_bytes))
        };
        let (status, body_bytes) = match self.timeout {
            Some(duration) => timeout(duration, exchange)
                .await
                .map_err(|_| HttpClientError::Timeout)??,
            None => exchange.await?,
        };

        if !status.is_success() {
            let canonical_reason = status.canonical_reason().unwrap_or("");
            return Err(HttpClientError::HttpError(
                status.as_u16(),
                error_detail(&body_bytes, canonical_reason),
            ));
        }

        let body = if body_bytes.is_empty() {
            None
        } else {
            Some(body_bytes)
        };
        Ok(HttpClientResponse::new(body, status.as_u16()))
    }

    pub async fn post(
        &self,
        url: &str,
        headers: Option<&HashMap<String, String>>,
        body: Option<&Bytes>,
    ) -> HttpClientResult {
        self.request("POST", url, headers, body).await
    }
}

fn create_request_body(
    body_content: Option<&Bytes>,
) -> BoxBody<Bytes, Infallible> {
    match body_content {
        Some(content) => {
            let full_body: Full<Bytes> = Full::new(content.clone());
            BoxBody::new(full_body)
        }
        None => {
            let empty_body: Empty<Bytes> = Empty::new();
            BoxBody::new(empty_body)
        }
    }
}
