use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::{Entity, ImageEntry};

/// Top-level grouping of galleries. Galleries point at their collection by
/// id; the collection itself only carries the server-derived count.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Collection {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub collection_name: String,
    #[serde(default)]
    pub thumbnail: Option<ImageEntry>,
    #[serde(default)]
    pub gallery_count: usize,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Entity for Collection {
    const RESOURCE: &'static str = "collection";
    const LABEL: &'static str = "collection";

    fn id(&self) -> &str {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_minimal_collection() {
        let collection: Collection =
            serde_json::from_str(r#"{"_id":"c1","collectionName":"Weddings"}"#).unwrap();
        assert_eq!(collection.collection_name, "Weddings");
        assert_eq!(collection.gallery_count, 0);
        assert!(collection.thumbnail.is_none());
    }

    #[test]
    fn decodes_thumbnail_and_count() {
        let json = r#"{
            "_id": "c2",
            "collectionName": "Portraits",
            "thumbnail": {"url": "https://cdn/p.jpg"},
            "galleryCount": 4
        }"#;
        let collection: Collection = serde_json::from_str(json).unwrap();
        assert_eq!(collection.gallery_count, 4);
        assert_eq!(collection.thumbnail.unwrap().url, "https://cdn/p.jpg");
    }
}
