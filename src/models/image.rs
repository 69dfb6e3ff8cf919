use serde::{Deserialize, Serialize};

/// Image stored on the backend (URL assigned after upload)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ImageEntry {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub url: String,
}

impl ImageEntry {
    pub fn new(url: impl Into<String>) -> Self {
        Self { id: None, url: url.into() }
    }
}
