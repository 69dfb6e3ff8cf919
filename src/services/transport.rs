// ============================================================================
// TRANSPORT - Request/response seam between services and the network
// ============================================================================
// Services only talk to `Transport`; the browser implementation lives in
// `api_client`. No retry, no caching.
// ============================================================================

use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;

use crate::models::UploadFile;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Patch => "PATCH",
            Method::Delete => "DELETE",
        }
    }

    /// Methods that may carry a request body
    pub fn is_write(&self) -> bool {
        matches!(self, Method::Post | Method::Put | Method::Patch)
    }
}

/// One part of a multipart body
#[derive(Debug, Clone)]
pub enum FormPart {
    Text { name: String, value: String },
    File { name: String, file: UploadFile },
}

/// Ordered multipart body; several files may share one field name so the
/// backend binds them as an array.
#[derive(Debug, Clone, Default)]
pub struct MultipartForm {
    parts: Vec<FormPart>,
}

impl MultipartForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(mut self, name: &str, value: impl Into<String>) -> Self {
        self.parts.push(FormPart::Text {
            name: name.to_string(),
            value: value.into(),
        });
        self
    }

    pub fn file(mut self, name: &str, file: UploadFile) -> Self {
        self.parts.push(FormPart::File {
            name: name.to_string(),
            file,
        });
        self
    }

    pub fn files(self, name: &str, files: impl IntoIterator<Item = UploadFile>) -> Self {
        files.into_iter().fold(self, |form, file| form.file(name, file))
    }

    pub fn parts(&self) -> &[FormPart] {
        &self.parts
    }

    pub fn text_value(&self, name: &str) -> Option<&str> {
        self.parts.iter().find_map(|part| match part {
            FormPart::Text { name: n, value } if n == name => Some(value.as_str()),
            _ => None,
        })
    }

    /// Files appended under `name`, in append order
    pub fn files_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a UploadFile> + 'a {
        self.parts.iter().filter_map(move |part| match part {
            FormPart::File { name: n, file } if n == name => Some(file),
            _ => None,
        })
    }
}

#[derive(Debug, Clone)]
pub enum Payload {
    Empty,
    Json(Value),
    Multipart(MultipartForm),
}

impl Payload {
    /// Content type announced for this body. Multipart is the only non-JSON
    /// body; a bodiless write still announces JSON, reads announce nothing.
    pub fn content_type(&self, method: Method) -> Option<&'static str> {
        match self {
            Payload::Multipart(_) => Some("multipart/form-data"),
            Payload::Json(_) => Some("application/json"),
            Payload::Empty if method.is_write() => Some("application/json"),
            Payload::Empty => None,
        }
    }
}

/// Transport failure. Never leaves the services layer.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Network(String),
    #[error("HTTP {status}: {}", .message.as_deref().unwrap_or("no message"))]
    Http { status: u16, message: Option<String> },
    #[error("Parse error: {0}")]
    Decode(String),
    #[error("Payload error: {0}")]
    Payload(String),
}

impl ApiError {
    /// Message reported by the server, if any
    pub fn server_message(&self) -> Option<&str> {
        match self {
            ApiError::Http { message, .. } => message.as_deref(),
            _ => None,
        }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Plain reason for the store: server message, else `fallback`
    pub fn into_reason(self, fallback: &str) -> String {
        self.server_message()
            .map(str::to_string)
            .unwrap_or_else(|| fallback.to_string())
    }
}

/// Sends one request and yields the decoded JSON body of a 2xx response.
/// Non-2xx statuses must come back as `ApiError::Http`.
#[async_trait(?Send)]
pub trait Transport {
    async fn request(&self, method: Method, path: &str, payload: Payload) -> Result<Value, ApiError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn content_type_follows_payload_kind() {
        assert_eq!(Payload::Empty.content_type(Method::Get), None);
        assert_eq!(Payload::Empty.content_type(Method::Delete), None);
        assert_eq!(
            Payload::Json(serde_json::json!({"status": true})).content_type(Method::Patch),
            Some("application/json")
        );
        assert_eq!(
            Payload::Multipart(MultipartForm::new()).content_type(Method::Post),
            Some("multipart/form-data")
        );
    }

    #[test]
    fn bodiless_write_announces_json() {
        assert_eq!(Payload::Empty.content_type(Method::Patch), Some("application/json"));
        assert_eq!(Payload::Empty.content_type(Method::Post), Some("application/json"));
        assert!(!Method::Get.is_write());
    }

    #[test]
    fn files_share_field_name_in_order() {
        let form = MultipartForm::new()
            .text("galleryName", "Haldi Night")
            .files(
                "images",
                vec![
                    UploadFile::detached("a.jpg", "image/jpeg", 10),
                    UploadFile::detached("b.jpg", "image/jpeg", 20),
                ],
            );

        let names: Vec<&str> = form.files_named("images").map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["a.jpg", "b.jpg"]);
        assert_eq!(form.text_value("galleryName"), Some("Haldi Night"));
        assert_eq!(form.parts().len(), 3);
    }

    #[test]
    fn reason_prefers_server_message() {
        let err = ApiError::Http { status: 404, message: Some("Gallery not found".into()) };
        assert_eq!(err.status(), Some(404));
        assert_eq!(err.into_reason("fallback"), "Gallery not found");

        let err = ApiError::Http { status: 500, message: None };
        assert_eq!(err.into_reason("Internal error in gallery create"), "Internal error in gallery create");

        let err = ApiError::Network("connection refused".into());
        assert_eq!(err.into_reason("Failed to delete gallery"), "Failed to delete gallery");
    }
}
