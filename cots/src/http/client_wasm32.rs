use std::collections::HashMap;

use bytes::Bytes;
use js_sys::{ArrayBuffer, Uint8Array};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Headers, Request, RequestInit, RequestMode, Response};

use super::response::error_detail;
use super::{HttpClientError, HttpClientResponse, HttpClientResult};

fn js_error(err: JsValue) -> HttpClientError {
    HttpClientError::Other(
        err.as_string().unwrap_or_else(|| format!("{:?}", err)),
    )
}

/// Browser transport backed by `window.fetch`.
#[derive(Clone, Default)]
pub struct HttpClient;

impl HttpClient {
    pub fn new() -> Self {
        HttpClient
    }

    async fn request(
        &self,
        method: &str,
        url: &str,
        headers: Option<&HashMap<String, String>>,
        body: Option<&Bytes>,
    ) -> HttpClientResult {
        log::debug!("{} {}", method, url);
        let window = web_sys::window().ok_or_else(|| {
            HttpClientError::Other("No window available".to_string())
        })?;

        let request_init = RequestInit::new();
        request_init.set_method(method);
        request_init.set_mode(RequestMode::Cors);

        let headers_map = Headers::new().map_err(js_error)?;
        if let Some(headers) = headers {
            for (key, value) in headers {
                headers_map.set(key, value).map_err(js_error)?;
            }
        }
        request_init.set_headers(&headers_map);

        if let Some(content) = body {
            let array = Uint8Array::from(content.as_ref());
            request_init.set_body(&array.into());
        }

        let request = Request::new_with_str_and_init(url, &request_init)
            .map_err(js_error)?;
        // fetch only rejects when the request never completed
        let response_js = JsFuture::from(window.fetch_with_request(&request))
            .await
            .map_err(|e| {
                HttpClientError::ConnectionError(format!(
                    "{}: {}",
                    url,
                    e.as_string().unwrap_or_else(|| format!("{:?}", e))
                ))
            })?;
        let response: Response = response_js.dyn_into().map_err(js_error)?;

        let status = response.status();
        let body_js =
            JsFuture::from(response.array_buffer().map_err(js_error)?)
                .await
                .map_err(js_error)?;
        let buffer: ArrayBuffer = body_js.dyn_into().map_err(js_error)?;
        let body_bytes = Uint8Array::new(&buffer).to_vec();

        if !(200..300).contains(&status) {
            return Err(HttpClientError::HttpError(
                status,
                error_detail(&body_bytes, &response.status_text()),
            ));
        }

        let body = if body_bytes.is_empty() {
            None
        } else {
            Some(Bytes::from(body_bytes))
        };
        Ok(HttpClientResponse::new(body, status))
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
