// ============================================================================
// API CLIENT - HTTP ONLY (Stateless)
// ============================================================================
// No business logic: builds the request, sends it, surfaces non-2xx as
// ApiError::Http with the server's `message` when it sent one.
// ============================================================================

use async_trait::async_trait;
use gloo_net::http::{Request, RequestBuilder, Response};
use serde_json::Value;

use crate::config::CONFIG;
use crate::models::envelope::error_message;
use crate::services::transport::{ApiError, FormPart, Method, MultipartForm, Payload, Transport};

/// Browser transport on top of `fetch`
#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    pub fn new() -> Self {
        Self::with_base_url(CONFIG.backend_url())
    }

    pub fn with_base_url(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    fn builder(&self, method: Method, url: &str) -> RequestBuilder {
        match method {
            Method::Get => Request::get(url),
            Method::Post => Request::post(url),
            Method::Put => Request::put(url),
            Method::Patch => Request::patch(url),
            Method::Delete => Request::delete(url),
        }
    }

    fn form_data(form: &MultipartForm) -> Result<web_sys::FormData, ApiError> {
        let data = web_sys::FormData::new()
            .map_err(|e| ApiError::Payload(format!("FormData unavailable: {:?}", e)))?;

        for part in form.parts() {
            match part {
                FormPart::Text { name, value } => data
                    .append_with_str(name, value)
                    .map_err(|e| ApiError::Payload(format!("field {}: {:?}", name, e)))?,
                FormPart::File { name, file } => {
                    let raw = file.web_file().ok_or_else(|| {
                        ApiError::Payload(format!("file {} has no browser source", file.name))
                    })?;
                    data.append_with_blob_and_filename(name, raw, &file.name)
                        .map_err(|e| ApiError::Payload(format!("file {}: {:?}", file.name, e)))?;
                }
            }
        }

        Ok(data)
    }

    async fn read_body(response: Response) -> Result<Value, ApiError> {
        let text = response
            .text()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))?;
        if text.trim().is_empty() {
            return Ok(Value::Null);
        }
        serde_json::from_str(&text).map_err(|e| ApiError::Decode(e.to_string()))
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait(?Send)]
impl Transport for ApiClient {
    async fn request(&self, method: Method, path: &str, payload: Payload) -> Result<Value, ApiError> {
        let url = self.url(path);
        let content_type = payload.content_type(method);
        log::debug!("🌐 {} {} ({:?})", method.as_str(), url, content_type);

        let builder = self.builder(method, &url);
        let sent = match payload {
            Payload::Empty => match content_type {
                Some(content_type) => builder.header("Content-Type", content_type).send().await,
                None => builder.send().await,
            },
            // gloo-net sets `application/json` for us
            Payload::Json(body) => builder
                .json(&body)
                .map_err(|e| ApiError::Payload(e.to_string()))?
                .send()
                .await,
            // The browser completes `multipart/form-data` with the boundary
            Payload::Multipart(form) => builder
                .body(Self::form_data(&form)?)
                .map_err(|e| ApiError::Payload(e.to_string()))?
                .send()
                .await,
        };
        let response = sent.map_err(|e| ApiError::Network(e.to_string()))?;

        if !response.ok() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            let message = error_message(&body);
            log::warn!("⚠️ {} {} → HTTP {} ({:?})", method.as_str(), url, status, message);
            return Err(ApiError::Http { status, message });
        }

        Self::read_body(response).await
    }
}
